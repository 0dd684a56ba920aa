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

//! Volume and volume-snapshot command handlers.

use crate::cli::commands::{
    CloneVolumeArgs, CreateVolumeArgs, CreateVolumeSnapshotArgs, DeleteVolumeArgs,
    DeleteVolumeSnapshotArgs, ListVolumeSnapshotsArgs, ListVolumesArgs,
    RestoreVolumeSnapshotArgs,
};
use crate::cli::confirm::confirm_from_stdin;
use crate::domain::volume::{CloneSource, VolumeDescriptor};
use crate::shared::error::{DataOpsError, Result};

const DELETE_VOLUME_WARNING: &str =
    "Warning: All data associated with the volume will be permanently deleted.";
const DELETE_SNAPSHOT_WARNING: &str = "Warning: This snapshot will be permanently deleted.";
const RESTORE_SNAPSHOT_WARNING: &str =
    "Warning: In order to restore a snapshot, the PersistentVolumeClaim (PVC) associated with the snapshot must NOT be mounted to any pods.";

pub async fn execute_clone_volume(args: CloneVolumeArgs) -> Result<()> {
    let source = match (args.source_pvc_name, args.source_snapshot_name) {
        (Some(pvc), None) => CloneSource::Pvc(pvc),
        (None, Some(snapshot)) => CloneSource::Snapshot(snapshot),
        _ => {
            return Err(DataOpsError::Validation(
                "Exactly one of source-pvc-name and source-snapshot-name must be specified"
                    .to_string(),
            ))
        }
    };

    let descriptor = VolumeDescriptor::new(args.namespace).await?;
    descriptor
        .clone_volume(&args.new_pvc_name, source, &args.volume_snapshot_class, true)
        .await
}

pub async fn execute_create_volume(args: CreateVolumeArgs) -> Result<()> {
    let descriptor = VolumeDescriptor::new(args.namespace).await?;
    descriptor
        .create_volume(&args.pvc_name, &args.size, args.storage_class.as_deref(), true)
        .await
}

pub async fn execute_delete_volume(args: DeleteVolumeArgs) -> Result<()> {
    if !args.force && !confirm_from_stdin(DELETE_VOLUME_WARNING)? {
        return Ok(());
    }

    let descriptor = VolumeDescriptor::new(args.namespace).await?;
    descriptor
        .delete_volume(&args.pvc_name, args.preserve_snapshots, true)
        .await
}

pub async fn execute_list_volumes(args: ListVolumesArgs) -> Result<()> {
    let descriptor = VolumeDescriptor::new(args.namespace).await?;
    descriptor.list_volumes(true).await?;
    Ok(())
}

pub async fn execute_create_volume_snapshot(args: CreateVolumeSnapshotArgs) -> Result<()> {
    let descriptor = VolumeDescriptor::new(args.namespace).await?;
    descriptor
        .create_volume_snapshot(
            &args.pvc_name,
            args.snapshot_name.as_deref(),
            &args.volume_snapshot_class,
            true,
        )
        .await?;
    Ok(())
}

pub async fn execute_delete_volume_snapshot(args: DeleteVolumeSnapshotArgs) -> Result<()> {
    if !args.force && !confirm_from_stdin(DELETE_SNAPSHOT_WARNING)? {
        return Ok(());
    }

    let descriptor = VolumeDescriptor::new(args.namespace).await?;
    descriptor.delete_volume_snapshot(&args.snapshot_name, true).await
}

pub async fn execute_list_volume_snapshots(args: ListVolumeSnapshotsArgs) -> Result<()> {
    let descriptor = VolumeDescriptor::new(args.namespace).await?;
    descriptor
        .list_volume_snapshots(args.pvc_name.as_deref(), true)
        .await?;
    Ok(())
}

pub async fn execute_restore_volume_snapshot(args: RestoreVolumeSnapshotArgs) -> Result<()> {
    if !args.force && !confirm_from_stdin(RESTORE_SNAPSHOT_WARNING)? {
        return Ok(());
    }

    let descriptor = VolumeDescriptor::new(args.namespace).await?;
    descriptor.restore_volume_snapshot(&args.snapshot_name, true).await
}
