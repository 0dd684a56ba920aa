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

//! Command-line grammar: verb subcommands, each with target subcommands.

use crate::infrastructure::constants::{
    DEFAULT_NAMESPACE, DEFAULT_VOLUME_SNAPSHOT_CLASS, DEFAULT_WORKSPACE_IMAGE,
};
use clap::{ArgGroup, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "dataops-kube",
    version,
    about = "DataOps Toolkit for Kubernetes: manage data-science volumes, snapshots, and JupyterLab workspaces",
    arg_required_else_help = true
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clone a volume or JupyterLab workspace
    Clone {
        #[command(subcommand)]
        target: CloneTarget,
    },
    /// Create a volume, snapshot, or JupyterLab workspace
    Create {
        #[command(subcommand)]
        target: CreateTarget,
    },
    /// Delete a volume, snapshot, or JupyterLab workspace
    #[command(visible_aliases = ["del", "rm"])]
    Delete {
        #[command(subcommand)]
        target: DeleteTarget,
    },
    /// List volumes, snapshots, or JupyterLab workspaces
    #[command(visible_alias = "ls")]
    List {
        #[command(subcommand)]
        target: ListTarget,
    },
    /// Restore a snapshot
    Restore {
        #[command(subcommand)]
        target: RestoreTarget,
    },
    /// Print the version and exit
    #[command(visible_alias = "v")]
    Version,
}

#[derive(Subcommand, Debug)]
pub enum CloneTarget {
    #[command(visible_aliases = ["vol", "pvc", "persistentvolumeclaim"])]
    Volume(CloneVolumeArgs),
    #[command(visible_alias = "jupyter")]
    Jupyterlab(CloneJupyterLabArgs),
}

#[derive(Subcommand, Debug)]
pub enum CreateTarget {
    #[command(visible_aliases = ["vol", "pvc", "persistentvolumeclaim"])]
    Volume(CreateVolumeArgs),
    #[command(name = "volume-snapshot", visible_alias = "volumesnapshot")]
    VolumeSnapshot(CreateVolumeSnapshotArgs),
    #[command(visible_alias = "jupyter")]
    Jupyterlab(CreateJupyterLabArgs),
    #[command(
        name = "jupyterlab-snapshot",
        visible_aliases = ["jupyterlabsnapshot", "jupyter-snapshot", "jupytersnapshot"]
    )]
    JupyterlabSnapshot(CreateJupyterLabSnapshotArgs),
}

#[derive(Subcommand, Debug)]
pub enum DeleteTarget {
    #[command(visible_aliases = ["vol", "pvc", "persistentvolumeclaim"])]
    Volume(DeleteVolumeArgs),
    #[command(name = "volume-snapshot", visible_alias = "volumesnapshot")]
    VolumeSnapshot(DeleteVolumeSnapshotArgs),
    #[command(visible_alias = "jupyter")]
    Jupyterlab(DeleteJupyterLabArgs),
    #[command(
        name = "jupyterlab-snapshot",
        visible_aliases = ["jupyterlabsnapshot", "jupyter-snapshot", "jupytersnapshot"]
    )]
    JupyterlabSnapshot(DeleteJupyterLabSnapshotArgs),
}

#[derive(Subcommand, Debug)]
pub enum ListTarget {
    #[command(
        name = "volumes",
        visible_aliases = ["volume", "vol", "vols", "pvc", "pvcs", "persistentvolumeclaims"]
    )]
    Volumes(ListVolumesArgs),
    #[command(
        name = "volume-snapshots",
        visible_aliases = ["volume-snapshot", "volumesnapshots", "volumesnapshot"]
    )]
    VolumeSnapshots(ListVolumeSnapshotsArgs),
    #[command(
        name = "jupyterlabs",
        visible_aliases = ["jupyterlab", "jupyters", "jupyter"]
    )]
    Jupyterlabs(ListJupyterLabsArgs),
    #[command(
        name = "jupyterlab-snapshots",
        visible_aliases = ["jupyterlab-snapshot", "jupyterlabsnapshots", "jupyterlabsnapshot"]
    )]
    JupyterlabSnapshots(ListJupyterLabSnapshotsArgs),
}

#[derive(Subcommand, Debug)]
pub enum RestoreTarget {
    #[command(name = "volume-snapshot", visible_alias = "volumesnapshot")]
    VolumeSnapshot(RestoreVolumeSnapshotArgs),
    #[command(
        name = "jupyterlab-snapshot",
        visible_aliases = ["jupyterlabsnapshot", "jupyter-snapshot", "jupytersnapshot"]
    )]
    JupyterlabSnapshot(RestoreJupyterLabSnapshotArgs),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true)))]
pub struct CloneVolumeArgs {
    /// Name of the new volume (PVC)
    #[arg(short = 'p', long = "new-pvc-name")]
    pub new_pvc_name: String,

    /// VolumeSnapshotClass used for the intermediate snapshot
    #[arg(short = 'c', long = "volume-snapshot-class", default_value = DEFAULT_VOLUME_SNAPSHOT_CLASS)]
    pub volume_snapshot_class: String,

    /// Kubernetes namespace
    #[arg(short = 'n', long = "namespace", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Clone from an existing VolumeSnapshot
    #[arg(short = 's', long = "source-snapshot-name", group = "source")]
    pub source_snapshot_name: Option<String>,

    /// Clone from a live volume (PVC)
    #[arg(short = 'v', long = "source-pvc-name", group = "source")]
    pub source_pvc_name: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateVolumeArgs {
    /// Name of the new volume (PVC)
    #[arg(short = 'p', long = "pvc-name")]
    pub pvc_name: String,

    /// Volume size, e.g. '10Gi' or '2Ti'
    #[arg(short = 's', long = "size")]
    pub size: String,

    /// Kubernetes namespace
    #[arg(short = 'n', long = "namespace", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Kubernetes StorageClass; the cluster default is used when omitted
    #[arg(short = 'c', long = "storage-class")]
    pub storage_class: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateVolumeSnapshotArgs {
    /// Volume (PVC) to snapshot
    #[arg(short = 'p', long = "pvc-name")]
    pub pvc_name: String,

    /// VolumeSnapshotClass for the new snapshot
    #[arg(short = 'c', long = "volume-snapshot-class", default_value = DEFAULT_VOLUME_SNAPSHOT_CLASS)]
    pub volume_snapshot_class: String,

    /// Kubernetes namespace
    #[arg(short = 'n', long = "namespace", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Snapshot name; a timestamped name is generated when omitted
    #[arg(short = 's', long = "snapshot-name")]
    pub snapshot_name: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateJupyterLabArgs {
    /// Workspace name
    #[arg(short = 'w', long = "workspace-name")]
    pub workspace_name: String,

    /// Workspace volume size, e.g. '10Gi'
    #[arg(short = 's', long = "size")]
    pub size: String,

    /// Kubernetes namespace
    #[arg(short = 'n', long = "namespace", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Kubernetes StorageClass for the workspace volume
    #[arg(short = 'c', long = "storage-class")]
    pub storage_class: Option<String>,

    /// Container image for the notebook server
    #[arg(short = 'i', long = "image", default_value = DEFAULT_WORKSPACE_IMAGE)]
    pub image: String,

    /// Number of NVIDIA GPUs to allocate
    #[arg(short = 'g', long = "nvidia-gpu")]
    pub nvidia_gpu: Option<String>,

    /// Memory request, e.g. '1Gi'
    #[arg(short = 'm', long = "memory")]
    pub memory: Option<String>,

    /// CPU request, e.g. '0.5' or '2'
    #[arg(short = 'p', long = "cpu")]
    pub cpu: Option<String>,

    /// Expose the workspace through a LoadBalancer instead of a NodePort
    #[arg(short = 'b', long = "load-balancer")]
    pub load_balancer: bool,

    /// Additional PVC to mount, as 'pvc-name:mount-path'
    #[arg(short = 'v', long = "mount-pvc")]
    pub mount_pvc: Option<String>,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true)))]
pub struct CloneJupyterLabArgs {
    /// Name of the new workspace
    #[arg(short = 'w', long = "new-workspace-name")]
    pub new_workspace_name: String,

    /// VolumeSnapshotClass used for the intermediate snapshot
    #[arg(short = 'c', long = "volume-snapshot-class", default_value = DEFAULT_VOLUME_SNAPSHOT_CLASS)]
    pub volume_snapshot_class: String,

    /// Kubernetes namespace
    #[arg(short = 'n', long = "namespace", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Clone from an existing workspace snapshot
    #[arg(short = 's', long = "source-snapshot-name", group = "source")]
    pub source_snapshot_name: Option<String>,

    /// Clone from a live workspace
    #[arg(short = 'j', long = "source-workspace-name", group = "source")]
    pub source_workspace_name: Option<String>,

    /// Number of NVIDIA GPUs to allocate
    #[arg(short = 'g', long = "nvidia-gpu")]
    pub nvidia_gpu: Option<String>,

    /// Memory request, e.g. '1Gi'
    #[arg(short = 'm', long = "memory")]
    pub memory: Option<String>,

    /// CPU request, e.g. '0.5' or '2'
    #[arg(short = 'p', long = "cpu")]
    pub cpu: Option<String>,

    /// Expose the workspace through a LoadBalancer instead of a NodePort
    #[arg(short = 'b', long = "load-balancer")]
    pub load_balancer: bool,
}

#[derive(Args, Debug)]
pub struct CreateJupyterLabSnapshotArgs {
    /// Workspace to snapshot
    #[arg(short = 'w', long = "workspace-name")]
    pub workspace_name: String,

    /// VolumeSnapshotClass for the new snapshot
    #[arg(short = 'c', long = "volume-snapshot-class", default_value = DEFAULT_VOLUME_SNAPSHOT_CLASS)]
    pub volume_snapshot_class: String,

    /// Kubernetes namespace
    #[arg(short = 'n', long = "namespace", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Snapshot name; a timestamped name is generated when omitted
    #[arg(short = 's', long = "snapshot-name")]
    pub snapshot_name: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteVolumeArgs {
    /// Volume (PVC) to delete
    #[arg(short = 'p', long = "pvc-name")]
    pub pvc_name: String,

    /// Kubernetes namespace
    #[arg(short = 'n', long = "namespace", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Skip the confirmation prompt
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Keep the volume's snapshots instead of deleting them
    #[arg(short = 's', long = "preserve-snapshots")]
    pub preserve_snapshots: bool,
}

#[derive(Args, Debug)]
pub struct DeleteVolumeSnapshotArgs {
    /// Snapshot to delete
    #[arg(short = 's', long = "snapshot-name")]
    pub snapshot_name: String,

    /// Kubernetes namespace
    #[arg(short = 'n', long = "namespace", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Skip the confirmation prompt
    #[arg(short = 'f', long = "force")]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct DeleteJupyterLabArgs {
    /// Workspace to delete
    #[arg(short = 'w', long = "workspace-name")]
    pub workspace_name: String,

    /// Kubernetes namespace
    #[arg(short = 'n', long = "namespace", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Skip the confirmation prompt
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Keep the workspace's snapshots instead of deleting them
    #[arg(short = 's', long = "preserve-snapshots")]
    pub preserve_snapshots: bool,
}

#[derive(Args, Debug)]
pub struct DeleteJupyterLabSnapshotArgs {
    /// Snapshot to delete
    #[arg(short = 's', long = "snapshot-name")]
    pub snapshot_name: String,

    /// Kubernetes namespace
    #[arg(short = 'n', long = "namespace", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Skip the confirmation prompt
    #[arg(short = 'f', long = "force")]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ListVolumesArgs {
    /// Kubernetes namespace
    #[arg(short = 'n', long = "namespace", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,
}

#[derive(Args, Debug)]
pub struct ListVolumeSnapshotsArgs {
    /// Only list snapshots of this volume (PVC)
    #[arg(short = 'p', long = "pvc-name")]
    pub pvc_name: Option<String>,

    /// Kubernetes namespace
    #[arg(short = 'n', long = "namespace", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,
}

#[derive(Args, Debug)]
pub struct ListJupyterLabsArgs {
    /// Kubernetes namespace
    #[arg(short = 'n', long = "namespace", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,
}

#[derive(Args, Debug)]
pub struct ListJupyterLabSnapshotsArgs {
    /// Only list snapshots of this workspace
    #[arg(short = 'w', long = "workspace-name")]
    pub workspace_name: Option<String>,

    /// Kubernetes namespace
    #[arg(short = 'n', long = "namespace", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,
}

#[derive(Args, Debug)]
pub struct RestoreVolumeSnapshotArgs {
    /// Snapshot to restore
    #[arg(short = 's', long = "snapshot-name")]
    pub snapshot_name: String,

    /// Kubernetes namespace
    #[arg(short = 'n', long = "namespace", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Skip the confirmation prompt
    #[arg(short = 'f', long = "force")]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct RestoreJupyterLabSnapshotArgs {
    /// Snapshot to restore
    #[arg(short = 's', long = "snapshot-name")]
    pub snapshot_name: String,

    /// Kubernetes namespace
    #[arg(short = 'n', long = "namespace", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,
}
