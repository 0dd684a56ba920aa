// Copyright 2025 DataOps Kube Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! JupyterLab workspace command handlers.

use crate::cli::commands::{
    CloneJupyterLabArgs, CreateJupyterLabArgs, CreateJupyterLabSnapshotArgs,
    DeleteJupyterLabArgs, DeleteJupyterLabSnapshotArgs, ListJupyterLabSnapshotsArgs,
    ListJupyterLabsArgs, RestoreJupyterLabSnapshotArgs,
};
use crate::cli::confirm::confirm_from_stdin;
use crate::domain::jupyterlab::{JupyterLabDescriptor, WorkspaceConfig};
use crate::domain::volume::VolumeDescriptor;
use crate::shared::error::Result;

const DELETE_WORKSPACE_WARNING: &str =
    "Warning: All data associated with the workspace will be permanently deleted.";
const DELETE_SNAPSHOT_WARNING: &str = "Warning: This snapshot will be permanently deleted.";

pub async fn execute_create_jupyter_lab(args: CreateJupyterLabArgs) -> Result<()> {
    let config = WorkspaceConfig {
        image: args.image,
        cpu: args.cpu,
        memory: args.memory,
        nvidia_gpu: args.nvidia_gpu,
        load_balancer: args.load_balancer,
        mount_pvc: args.mount_pvc,
    };

    let descriptor = JupyterLabDescriptor::new(args.namespace).await?;
    descriptor
        .create_jupyter_lab(
            &args.workspace_name,
            &args.size,
            args.storage_class.as_deref(),
            &config,
            true,
        )
        .await
}

pub async fn execute_clone_jupyter_lab(args: CloneJupyterLabArgs) -> Result<()> {
    // Image is left empty so the clone inherits the source workspace's image
    let config = WorkspaceConfig {
        image: String::new(),
        cpu: args.cpu,
        memory: args.memory,
        nvidia_gpu: args.nvidia_gpu,
        load_balancer: args.load_balancer,
        mount_pvc: None,
    };

    let descriptor = JupyterLabDescriptor::new(args.namespace).await?;
    descriptor
        .clone_jupyter_lab(
            &args.new_workspace_name,
            args.source_workspace_name.as_deref(),
            args.source_snapshot_name.as_deref(),
            &args.volume_snapshot_class,
            &config,
            true,
        )
        .await
}

pub async fn execute_delete_jupyter_lab(args: DeleteJupyterLabArgs) -> Result<()> {
    if !args.force && !confirm_from_stdin(DELETE_WORKSPACE_WARNING)? {
        return Ok(());
    }

    let descriptor = JupyterLabDescriptor::new(args.namespace).await?;
    descriptor
        .delete_jupyter_lab(&args.workspace_name, args.preserve_snapshots, true)
        .await
}

pub async fn execute_list_jupyter_labs(args: ListJupyterLabsArgs) -> Result<()> {
    let descriptor = JupyterLabDescriptor::new(args.namespace).await?;
    descriptor.list_jupyter_labs(true).await?;
    Ok(())
}

pub async fn execute_create_jupyter_lab_snapshot(
    args: CreateJupyterLabSnapshotArgs,
) -> Result<()> {
    let descriptor = JupyterLabDescriptor::new(args.namespace).await?;
    descriptor
        .create_jupyter_lab_snapshot(
            &args.workspace_name,
            args.snapshot_name.as_deref(),
            &args.volume_snapshot_class,
            true,
        )
        .await?;
    Ok(())
}

pub async fn execute_delete_jupyter_lab_snapshot(
    args: DeleteJupyterLabSnapshotArgs,
) -> Result<()> {
    if !args.force && !confirm_from_stdin(DELETE_SNAPSHOT_WARNING)? {
        return Ok(());
    }

    // Workspace snapshots are plain VolumeSnapshots underneath
    let descriptor = VolumeDescriptor::new(args.namespace).await?;
    descriptor.delete_volume_snapshot(&args.snapshot_name, true).await
}

pub async fn execute_list_jupyter_lab_snapshots(
    args: ListJupyterLabSnapshotsArgs,
) -> Result<()> {
    let descriptor = JupyterLabDescriptor::new(args.namespace).await?;
    descriptor
        .list_jupyter_lab_snapshots(args.workspace_name.as_deref(), true)
        .await?;
    Ok(())
}

pub async fn execute_restore_jupyter_lab_snapshot(
    args: RestoreJupyterLabSnapshotArgs,
) -> Result<()> {
    let descriptor = JupyterLabDescriptor::new(args.namespace).await?;
    descriptor
        .restore_jupyter_lab_snapshot(&args.snapshot_name, true)
        .await
}
