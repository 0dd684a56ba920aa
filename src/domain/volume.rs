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

//! Persistent volume and volume snapshot lifecycle operations

use crate::domain::validator::validate_resource_name;
use crate::infrastructure::constants::{
    CLONE_SNAPSHOT_INFIX, READY_POLL_INTERVAL_SECS, READY_POLL_MAX_ATTEMPTS,
    SNAPSHOT_NAME_PREFIX,
};
use crate::infrastructure::kubernetes::resources::PvcBuilder;
use crate::infrastructure::kubernetes::snapshot::{
    VolumeSnapshot, VolumeSnapshotSource, VolumeSnapshotSpec,
};
use crate::infrastructure::kubernetes::{DataOpsKubeClient, DataOpsKubeClientImpl};
use crate::shared::error::{DataOpsError, Result};
use k8s_openapi::api::core::v1::PersistentVolumeClaim;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Source of a volume clone. Exactly one is chosen by the caller;
/// the CLI enforces the mutual exclusion before dispatch.
#[derive(Debug, Clone)]
pub enum CloneSource {
    Pvc(String),
    Snapshot(String),
}

#[derive(Debug, Clone)]
pub struct VolumeInfo {
    pub pvc_name: String,
    pub status: String,
    pub size: String,
    pub storage_class: Option<String>,
    pub source_snapshot: Option<String>,
    pub source_pvc: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SnapshotInfo {
    pub name: String,
    pub ready_to_use: Option<bool>,
    pub creation_time: Option<String>,
    pub source_pvc: Option<String>,
    pub snapshot_class: Option<String>,
}

/// Orchestrates PVC and VolumeSnapshot operations in one namespace.
pub struct VolumeDescriptor {
    client: Arc<dyn DataOpsKubeClient>,
}

impl VolumeDescriptor {
    pub async fn new(namespace: String) -> Result<Self> {
        let client = DataOpsKubeClientImpl::new(namespace).await?;
        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Test seam: run against any client implementation.
    pub fn with_client(client: Arc<dyn DataOpsKubeClient>) -> Self {
        Self { client }
    }

    pub fn namespace(&self) -> &str {
        self.client.namespace()
    }

    pub(crate) fn client(&self) -> Arc<dyn DataOpsKubeClient> {
        self.client.clone()
    }

    /// Provision a new PVC.
    pub async fn create_volume(
        &self,
        pvc_name: &str,
        size: &str,
        storage_class: Option<&str>,
        print_output: bool,
    ) -> Result<()> {
        validate_resource_name("PVC", pvc_name)?;

        if print_output {
            println!(
                "Creating PersistentVolumeClaim (PVC) '{}' in namespace '{}'.",
                pvc_name,
                self.namespace()
            );
        }

        let pvc = PvcBuilder::new(pvc_name, self.namespace(), size)
            .storage_class(storage_class.map(str::to_string))
            .build();
        self.client.create_pvc(&pvc).await?;

        if print_output {
            println!("PersistentVolumeClaim (PVC) '{}' created.", pvc_name);
        }
        Ok(())
    }

    /// Create a new PVC that is a copy of an existing volume. Cloning from a
    /// live PVC first snapshots it, then restores the snapshot into the new
    /// claim; cloning from a snapshot skips straight to the restore.
    pub async fn clone_volume(
        &self,
        new_pvc_name: &str,
        source: CloneSource,
        volume_snapshot_class: &str,
        print_output: bool,
    ) -> Result<()> {
        validate_resource_name("PVC", new_pvc_name)?;

        let snapshot_name = match source {
            CloneSource::Snapshot(name) => name,
            CloneSource::Pvc(source_pvc) => {
                let snapshot_name = format!(
                    "{}{}{}",
                    SNAPSHOT_NAME_PREFIX,
                    CLONE_SNAPSHOT_INFIX,
                    chrono::Utc::now().format("%Y%m%d%H%M%S")
                );
                if print_output {
                    println!(
                        "Creating VolumeSnapshot '{}' of source PVC '{}'.",
                        snapshot_name, source_pvc
                    );
                }
                self.create_volume_snapshot(
                    &source_pvc,
                    Some(&snapshot_name),
                    volume_snapshot_class,
                    false,
                )
                .await?;
                snapshot_name
            }
        };

        let snapshot = self.wait_for_snapshot_ready(&snapshot_name, print_output).await?;

        let size = snapshot
            .status
            .as_ref()
            .and_then(|s| s.restore_size.clone())
            .ok_or_else(|| {
                DataOpsError::ApiConnection(format!(
                    "VolumeSnapshot '{}' reports no restore size",
                    snapshot_name
                ))
            })?;

        // Carry the source PVC's StorageClass over to the clone when known
        let storage_class = match snapshot.source_pvc_name() {
            Some(source_pvc) => match self.client.get_pvc(source_pvc).await {
                Ok(pvc) => pvc.spec.and_then(|s| s.storage_class_name),
                Err(DataOpsError::NotFound { .. }) => None,
                Err(e) => return Err(e),
            },
            None => None,
        };

        if print_output {
            println!(
                "Creating new PersistentVolumeClaim (PVC) '{}' from VolumeSnapshot '{}'.",
                new_pvc_name, snapshot_name
            );
        }

        let pvc = PvcBuilder::new(new_pvc_name, self.namespace(), size)
            .storage_class(storage_class)
            .from_snapshot(&snapshot_name)
            .build();
        self.client.create_pvc(&pvc).await?;

        if print_output {
            println!("Volume successfully cloned to PVC '{}'.", new_pvc_name);
        }
        Ok(())
    }

    /// Delete a PVC, and unless asked to preserve them, every
    /// VolumeSnapshot whose source is that PVC.
    pub async fn delete_volume(
        &self,
        pvc_name: &str,
        preserve_snapshots: bool,
        print_output: bool,
    ) -> Result<()> {
        // Surface NotFound before touching snapshots
        self.client.get_pvc(pvc_name).await?;

        if !preserve_snapshots {
            let snapshots = self.client.list_volume_snapshots().await?;
            for snapshot in snapshots {
                if snapshot.source_pvc_name() != Some(pvc_name) {
                    continue;
                }
                if let Some(name) = snapshot.metadata.name.as_deref() {
                    if print_output {
                        println!("Deleting associated VolumeSnapshot '{}'.", name);
                    }
                    self.client.delete_volume_snapshot(name).await?;
                }
            }
        }

        if print_output {
            println!(
                "Deleting PersistentVolumeClaim (PVC) '{}' in namespace '{}'.",
                pvc_name,
                self.namespace()
            );
        }
        self.client.delete_pvc(pvc_name).await?;

        if print_output {
            println!("PersistentVolumeClaim (PVC) '{}' deleted.", pvc_name);
        }
        Ok(())
    }

    pub async fn list_volumes(&self, print_output: bool) -> Result<Vec<VolumeInfo>> {
        let pvcs = self.client.list_pvcs().await?;
        let mut volumes = Vec::with_capacity(pvcs.len());

        for pvc in &pvcs {
            volumes.push(self.volume_info(pvc).await);
        }

        if print_output {
            let renderer = crate::cli::display::TableRenderer::new();
            println!("{}", renderer.render_volumes(&volumes));
        }
        Ok(volumes)
    }

    async fn volume_info(&self, pvc: &PersistentVolumeClaim) -> VolumeInfo {
        let pvc_name = pvc.metadata.name.clone().unwrap_or_default();
        let status = pvc
            .status
            .as_ref()
            .and_then(|s| s.phase.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        let size = pvc
            .spec
            .as_ref()
            .and_then(|s| s.resources.as_ref())
            .and_then(|r| r.requests.as_ref())
            .and_then(|r| r.get("storage"))
            .map(|q| q.0.clone())
            .unwrap_or_default();
        let storage_class = pvc
            .spec
            .as_ref()
            .and_then(|s| s.storage_class_name.clone());

        let source_snapshot = pvc.spec.as_ref().and_then(|s| {
            s.data_source
                .as_ref()
                .filter(|ds| ds.kind == "VolumeSnapshot")
                .map(|ds| ds.name.clone())
        });

        // Best-effort provenance: the snapshot may have been deleted since
        let source_pvc = match &source_snapshot {
            Some(snapshot_name) => match self.client.get_volume_snapshot(snapshot_name).await {
                Ok(snapshot) => snapshot.source_pvc_name().map(str::to_string),
                Err(e) => {
                    debug!("Could not resolve source of '{}': {}", snapshot_name, e);
                    None
                }
            },
            None => None,
        };

        VolumeInfo {
            pvc_name,
            status,
            size,
            storage_class,
            source_snapshot,
            source_pvc,
        }
    }

    /// Snapshot a PVC. Without an explicit name, generates
    /// "dataops.<timestamp>".
    pub async fn create_volume_snapshot(
        &self,
        pvc_name: &str,
        snapshot_name: Option<&str>,
        volume_snapshot_class: &str,
        print_output: bool,
    ) -> Result<String> {
        let snapshot_name = match snapshot_name {
            Some(name) => name.to_string(),
            None => format!(
                "{}{}",
                SNAPSHOT_NAME_PREFIX,
                chrono::Utc::now().format("%Y%m%d%H%M%S")
            ),
        };
        validate_resource_name("VolumeSnapshot", &snapshot_name)?;

        if print_output {
            println!(
                "Creating VolumeSnapshot '{}' for PersistentVolumeClaim (PVC) '{}' in namespace '{}'.",
                snapshot_name,
                pvc_name,
                self.namespace()
            );
        }

        let snapshot = VolumeSnapshot::new(
            &snapshot_name,
            VolumeSnapshotSpec {
                source: VolumeSnapshotSource {
                    persistent_volume_claim_name: Some(pvc_name.to_string()),
                    volume_snapshot_content_name: None,
                },
                volume_snapshot_class_name: Some(volume_snapshot_class.to_string()),
            },
        );
        self.client.create_volume_snapshot(&snapshot).await?;

        if print_output {
            println!("VolumeSnapshot '{}' created.", snapshot_name);
        }
        Ok(snapshot_name)
    }

    pub async fn delete_volume_snapshot(
        &self,
        snapshot_name: &str,
        print_output: bool,
    ) -> Result<()> {
        if print_output {
            println!(
                "Deleting VolumeSnapshot '{}' in namespace '{}'.",
                snapshot_name,
                self.namespace()
            );
        }
        self.client.delete_volume_snapshot(snapshot_name).await?;

        if print_output {
            println!("VolumeSnapshot '{}' deleted.", snapshot_name);
        }
        Ok(())
    }

    pub async fn list_volume_snapshots(
        &self,
        pvc_name: Option<&str>,
        print_output: bool,
    ) -> Result<Vec<SnapshotInfo>> {
        let snapshots = self.client.list_volume_snapshots().await?;

        let infos: Vec<SnapshotInfo> = snapshots
            .iter()
            .filter(|s| match pvc_name {
                Some(pvc) => s.source_pvc_name() == Some(pvc),
                None => true,
            })
            .map(snapshot_info)
            .collect();

        if print_output {
            let renderer = crate::cli::display::TableRenderer::new();
            println!("{}", renderer.render_snapshots(&infos));
        }
        Ok(infos)
    }

    /// Replace a snapshot's source PVC with its snapshotted state: the PVC
    /// is deleted and re-provisioned from the snapshot. The PVC must not be
    /// mounted by any pod while this runs.
    pub async fn restore_volume_snapshot(
        &self,
        snapshot_name: &str,
        print_output: bool,
    ) -> Result<()> {
        let snapshot = self.client.get_volume_snapshot(snapshot_name).await?;

        let pvc_name = snapshot.source_pvc_name().map(str::to_string).ok_or_else(|| {
            DataOpsError::ApiConnection(format!(
                "VolumeSnapshot '{}' does not record a source PVC",
                snapshot_name
            ))
        })?;

        let size = snapshot
            .status
            .as_ref()
            .and_then(|s| s.restore_size.clone())
            .ok_or_else(|| {
                DataOpsError::ApiConnection(format!(
                    "VolumeSnapshot '{}' reports no restore size",
                    snapshot_name
                ))
            })?;

        // Preserve the claim's StorageClass across the re-provision
        let existing = self.client.get_pvc(&pvc_name).await?;
        let storage_class = existing.spec.and_then(|s| s.storage_class_name);

        if print_output {
            println!(
                "Restoring VolumeSnapshot '{}' into PersistentVolumeClaim (PVC) '{}'.",
                snapshot_name, pvc_name
            );
        }

        self.client.delete_pvc(&pvc_name).await?;
        self.wait_for_pvc_gone(&pvc_name).await?;

        let pvc = PvcBuilder::new(&pvc_name, self.namespace(), size)
            .storage_class(storage_class)
            .from_snapshot(snapshot_name)
            .build();
        self.client.create_pvc(&pvc).await?;

        if print_output {
            println!(
                "VolumeSnapshot '{}' restored; PVC '{}' re-provisioned.",
                snapshot_name, pvc_name
            );
        }
        Ok(())
    }

    async fn wait_for_snapshot_ready(
        &self,
        snapshot_name: &str,
        print_output: bool,
    ) -> Result<VolumeSnapshot> {
        if print_output {
            println!("Waiting for VolumeSnapshot '{}' to be ready...", snapshot_name);
        }

        for _ in 0..READY_POLL_MAX_ATTEMPTS {
            let snapshot = self.client.get_volume_snapshot(snapshot_name).await?;
            if snapshot.is_ready() {
                return Ok(snapshot);
            }
            tokio::time::sleep(Duration::from_secs(READY_POLL_INTERVAL_SECS)).await;
        }

        Err(DataOpsError::Timeout(format!(
            "VolumeSnapshot '{}' did not become ready",
            snapshot_name
        )))
    }

    async fn wait_for_pvc_gone(&self, pvc_name: &str) -> Result<()> {
        for _ in 0..READY_POLL_MAX_ATTEMPTS {
            if !self.client.pvc_exists(pvc_name).await? {
                return Ok(());
            }
            tokio::time::sleep(Duration::from_secs(READY_POLL_INTERVAL_SECS)).await;
        }

        Err(DataOpsError::Timeout(format!(
            "PersistentVolumeClaim (PVC) '{}' was not removed; it may still be mounted to a pod",
            pvc_name
        )))
    }
}

fn snapshot_info(snapshot: &VolumeSnapshot) -> SnapshotInfo {
    SnapshotInfo {
        name: snapshot.metadata.name.clone().unwrap_or_default(),
        ready_to_use: snapshot.status.as_ref().and_then(|s| s.ready_to_use),
        creation_time: snapshot.status.as_ref().and_then(|s| s.creation_time.clone()),
        source_pvc: snapshot.source_pvc_name().map(str::to_string),
        snapshot_class: snapshot.spec.volume_snapshot_class_name.clone(),
    }
}
