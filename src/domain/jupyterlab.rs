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

//! JupyterLab workspace lifecycle: a workspace is a PVC plus a notebook
//! Deployment and Service, all named "dataops-jupyterlab-<workspace>".

use crate::domain::validator::validate_resource_name;
use crate::domain::volume::{CloneSource, SnapshotInfo, VolumeDescriptor};
use crate::infrastructure::constants::{
    COMPONENT_JUPYTERLAB, LABEL_APP, LABEL_COMPONENT, LABEL_MANAGED_BY, MANAGED_BY_VALUE,
    READY_POLL_INTERVAL_SECS, READY_POLL_MAX_ATTEMPTS, WORKSPACE_RESOURCE_PREFIX,
};
use crate::infrastructure::kubernetes::resources::{
    PvcBuilder, WorkspaceDeploymentBuilder, WorkspaceServiceBuilder,
};
use crate::infrastructure::kubernetes::DataOpsKubeClient;
use crate::shared::error::{DataOpsError, Result};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use std::sync::Arc;
use std::time::Duration;

/// Requested shape of a new workspace.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceConfig {
    pub image: String,
    pub cpu: Option<String>,
    pub memory: Option<String>,
    pub nvidia_gpu: Option<String>,
    pub load_balancer: bool,
    pub mount_pvc: Option<String>,
}

#[derive(Debug, Clone)]
pub struct WorkspaceInfo {
    pub workspace_name: String,
    pub status: String,
    pub size: String,
    pub access_url: String,
    pub image: String,
}

pub struct JupyterLabDescriptor {
    client: Arc<dyn DataOpsKubeClient>,
    volumes: VolumeDescriptor,
}

/// Kubernetes object name backing workspace `name`.
pub fn workspace_resource_name(name: &str) -> String {
    format!("{}{}", WORKSPACE_RESOURCE_PREFIX, name)
}

/// Inverse of [`workspace_resource_name`], when the prefix matches.
pub fn workspace_name_from_resource(resource_name: &str) -> Option<&str> {
    resource_name.strip_prefix(WORKSPACE_RESOURCE_PREFIX)
}

impl JupyterLabDescriptor {
    pub async fn new(namespace: String) -> Result<Self> {
        let volumes = VolumeDescriptor::new(namespace).await?;
        Ok(Self {
            client: volumes.client(),
            volumes,
        })
    }

    /// Test seam: run against any client implementation.
    pub fn with_client(client: Arc<dyn DataOpsKubeClient>) -> Self {
        Self {
            volumes: VolumeDescriptor::with_client(client.clone()),
            client,
        }
    }

    pub fn namespace(&self) -> &str {
        self.client.namespace()
    }

    fn workspace_selector() -> String {
        format!(
            "{}={},{}={}",
            LABEL_MANAGED_BY, MANAGED_BY_VALUE, LABEL_COMPONENT, COMPONENT_JUPYTERLAB
        )
    }

    /// Provision a new workspace: backing PVC, notebook Deployment, Service.
    pub async fn create_jupyter_lab(
        &self,
        workspace_name: &str,
        size: &str,
        storage_class: Option<&str>,
        config: &WorkspaceConfig,
        print_output: bool,
    ) -> Result<()> {
        validate_resource_name("Workspace", workspace_name)?;
        let resource_name = workspace_resource_name(workspace_name);

        if print_output {
            println!(
                "Creating JupyterLab workspace '{}' in namespace '{}'.",
                workspace_name,
                self.namespace()
            );
        }

        let pvc = PvcBuilder::new(&resource_name, self.namespace(), size)
            .storage_class(storage_class.map(str::to_string))
            .label(LABEL_APP, &resource_name)
            .label(LABEL_COMPONENT, COMPONENT_JUPYTERLAB)
            .label(LABEL_MANAGED_BY, MANAGED_BY_VALUE)
            .build();
        self.client.create_pvc(&pvc).await?;
        if print_output {
            println!("✓ Backing volume created");
        }

        self.create_workspace_frontend(&resource_name, config, print_output)
            .await?;

        self.wait_for_workspace_ready(&resource_name, print_output)
            .await?;

        if print_output {
            let service = self.client.get_service(&resource_name).await?;
            println!("Workspace '{}' is ready.", workspace_name);
            println!("{}", access_hint(&service));
        }
        Ok(())
    }

    /// Clone a workspace from a sibling workspace or from one of its
    /// snapshots. The notebook image is copied from the source workspace's
    /// Deployment when it still exists, otherwise the default image is used.
    #[allow(clippy::too_many_arguments)]
    pub async fn clone_jupyter_lab(
        &self,
        new_workspace_name: &str,
        source_workspace_name: Option<&str>,
        source_snapshot_name: Option<&str>,
        volume_snapshot_class: &str,
        config: &WorkspaceConfig,
        print_output: bool,
    ) -> Result<()> {
        validate_resource_name("Workspace", new_workspace_name)?;
        let new_resource_name = workspace_resource_name(new_workspace_name);

        // Resolve the volume-level clone source and the source workspace name
        let (clone_source, source_workspace) = match (source_workspace_name, source_snapshot_name)
        {
            (Some(workspace), None) => (
                CloneSource::Pvc(workspace_resource_name(workspace)),
                workspace.to_string(),
            ),
            (None, Some(snapshot)) => {
                let snap = self.client.get_volume_snapshot(snapshot).await?;
                let source_pvc = snap.source_pvc_name().ok_or_else(|| {
                    DataOpsError::ApiConnection(format!(
                        "VolumeSnapshot '{}' does not record a source PVC",
                        snapshot
                    ))
                })?;
                let workspace = workspace_name_from_resource(source_pvc)
                    .ok_or_else(|| {
                        DataOpsError::Validation(format!(
                            "VolumeSnapshot '{}' is not a snapshot of a JupyterLab workspace (source PVC '{}')",
                            snapshot, source_pvc
                        ))
                    })?
                    .to_string();
                (CloneSource::Snapshot(snapshot.to_string()), workspace)
            }
            _ => {
                return Err(DataOpsError::Validation(
                    "Exactly one of source-workspace-name and source-snapshot-name must be specified"
                        .to_string(),
                ))
            }
        };

        if print_output {
            println!(
                "Cloning JupyterLab workspace '{}' from '{}'.",
                new_workspace_name, source_workspace
            );
        }

        // Reuse the source workspace's image when its Deployment still exists
        let mut config = config.clone();
        if config.image.is_empty() {
            let source_resource = workspace_resource_name(&source_workspace);
            config.image = match self.client.get_deployment(&source_resource).await {
                Ok(deployment) => deployment_image(&deployment).unwrap_or_default(),
                Err(DataOpsError::NotFound { .. }) => String::new(),
                Err(e) => return Err(e),
            };
            if config.image.is_empty() {
                config.image =
                    crate::infrastructure::constants::DEFAULT_WORKSPACE_IMAGE.to_string();
            }
        }

        self.volumes
            .clone_volume(
                &new_resource_name,
                clone_source,
                volume_snapshot_class,
                print_output,
            )
            .await?;

        self.create_workspace_frontend(&new_resource_name, &config, print_output)
            .await?;

        self.wait_for_workspace_ready(&new_resource_name, print_output)
            .await?;

        if print_output {
            let service = self.client.get_service(&new_resource_name).await?;
            println!("Workspace '{}' is ready.", new_workspace_name);
            println!("{}", access_hint(&service));
        }
        Ok(())
    }

    /// Tear down a workspace: Service, Deployment, then the backing volume
    /// (and its snapshots unless preserved).
    pub async fn delete_jupyter_lab(
        &self,
        workspace_name: &str,
        preserve_snapshots: bool,
        print_output: bool,
    ) -> Result<()> {
        let resource_name = workspace_resource_name(workspace_name);

        // Surface NotFound for unknown workspaces before deleting anything
        self.client.get_deployment(&resource_name).await?;

        if print_output {
            println!(
                "Deleting JupyterLab workspace '{}' in namespace '{}'.",
                workspace_name,
                self.namespace()
            );
        }

        self.client.delete_service(&resource_name).await?;
        self.client.delete_deployment(&resource_name).await?;
        self.volumes
            .delete_volume(&resource_name, preserve_snapshots, false)
            .await?;

        if print_output {
            println!("Workspace '{}' deleted.", workspace_name);
        }
        Ok(())
    }

    pub async fn list_jupyter_labs(&self, print_output: bool) -> Result<Vec<WorkspaceInfo>> {
        let deployments = self
            .client
            .list_deployments(&Self::workspace_selector())
            .await?;

        let mut workspaces = Vec::with_capacity(deployments.len());
        for deployment in &deployments {
            let resource_name = deployment.metadata.name.clone().unwrap_or_default();
            let workspace_name = match workspace_name_from_resource(&resource_name) {
                Some(name) => name.to_string(),
                None => continue,
            };

            let ready = deployment
                .status
                .as_ref()
                .and_then(|s| s.ready_replicas)
                .unwrap_or(0);
            let status = if ready > 0 { "Ready" } else { "Not Ready" };

            let size = match self.client.get_pvc(&resource_name).await {
                Ok(pvc) => pvc
                    .spec
                    .and_then(|s| s.resources)
                    .and_then(|r| r.requests)
                    .and_then(|mut r| r.remove("storage"))
                    .map(|q| q.0)
                    .unwrap_or_default(),
                Err(DataOpsError::NotFound { .. }) => String::new(),
                Err(e) => return Err(e),
            };

            let access_url = match self.client.get_service(&resource_name).await {
                Ok(service) => access_hint(&service),
                Err(DataOpsError::NotFound { .. }) => String::new(),
                Err(e) => return Err(e),
            };

            workspaces.push(WorkspaceInfo {
                workspace_name,
                status: status.to_string(),
                size,
                access_url,
                image: deployment_image(deployment).unwrap_or_default(),
            });
        }

        if print_output {
            let renderer = crate::cli::display::TableRenderer::new();
            println!("{}", renderer.render_workspaces(&workspaces));
        }
        Ok(workspaces)
    }

    /// Snapshot a workspace's backing volume.
    pub async fn create_jupyter_lab_snapshot(
        &self,
        workspace_name: &str,
        snapshot_name: Option<&str>,
        volume_snapshot_class: &str,
        print_output: bool,
    ) -> Result<String> {
        let resource_name = workspace_resource_name(workspace_name);
        self.client.get_pvc(&resource_name).await?;

        if print_output {
            println!(
                "Creating snapshot for JupyterLab workspace '{}'.",
                workspace_name
            );
        }
        self.volumes
            .create_volume_snapshot(
                &resource_name,
                snapshot_name,
                volume_snapshot_class,
                print_output,
            )
            .await
    }

    /// List snapshots of workspace backing volumes, optionally narrowed to
    /// one workspace.
    pub async fn list_jupyter_lab_snapshots(
        &self,
        workspace_name: Option<&str>,
        print_output: bool,
    ) -> Result<Vec<SnapshotInfo>> {
        let pvc_filter = workspace_name.map(workspace_resource_name);
        let snapshots = self
            .volumes
            .list_volume_snapshots(pvc_filter.as_deref(), false)
            .await?;

        let infos: Vec<SnapshotInfo> = snapshots
            .into_iter()
            .filter(|s| {
                s.source_pvc
                    .as_deref()
                    .and_then(workspace_name_from_resource)
                    .is_some()
            })
            .collect();

        if print_output {
            let renderer = crate::cli::display::TableRenderer::new();
            println!("{}", renderer.render_snapshots(&infos));
        }
        Ok(infos)
    }

    /// Roll a workspace's volume back to a snapshot. The notebook Deployment
    /// is scaled to zero around the restore so the volume is unmounted.
    pub async fn restore_jupyter_lab_snapshot(
        &self,
        snapshot_name: &str,
        print_output: bool,
    ) -> Result<()> {
        let snapshot = self.client.get_volume_snapshot(snapshot_name).await?;
        let source_pvc = snapshot.source_pvc_name().ok_or_else(|| {
            DataOpsError::ApiConnection(format!(
                "VolumeSnapshot '{}' does not record a source PVC",
                snapshot_name
            ))
        })?;
        let workspace_name = workspace_name_from_resource(source_pvc).ok_or_else(|| {
            DataOpsError::Validation(format!(
                "VolumeSnapshot '{}' is not a snapshot of a JupyterLab workspace (source PVC '{}')",
                snapshot_name, source_pvc
            ))
        })?;
        let resource_name = workspace_resource_name(workspace_name);

        if print_output {
            println!(
                "Restoring snapshot '{}' for JupyterLab workspace '{}'.",
                snapshot_name, workspace_name
            );
            println!("Scaling workspace down...");
        }
        self.client.scale_deployment(&resource_name, 0).await?;

        self.volumes
            .restore_volume_snapshot(snapshot_name, print_output)
            .await?;

        if print_output {
            println!("Scaling workspace back up...");
        }
        self.client.scale_deployment(&resource_name, 1).await?;
        self.wait_for_workspace_ready(&resource_name, print_output)
            .await?;

        if print_output {
            println!(
                "Snapshot '{}' restored; workspace '{}' is ready.",
                snapshot_name, workspace_name
            );
        }
        Ok(())
    }

    async fn create_workspace_frontend(
        &self,
        resource_name: &str,
        config: &WorkspaceConfig,
        print_output: bool,
    ) -> Result<()> {
        let deployment = WorkspaceDeploymentBuilder::new(resource_name, self.namespace(), &config.image)
            .cpu(config.cpu.clone())
            .memory(config.memory.clone())
            .nvidia_gpu(config.nvidia_gpu.clone())
            .mount_pvc(config.mount_pvc.clone())
            .build()?;
        self.client.create_deployment(&deployment).await?;
        if print_output {
            println!("✓ Notebook Deployment created");
        }

        let service =
            WorkspaceServiceBuilder::new(resource_name, self.namespace(), config.load_balancer)
                .build();
        self.client.create_service(&service).await?;
        if print_output {
            println!("✓ Service created");
        }
        Ok(())
    }

    async fn wait_for_workspace_ready(
        &self,
        resource_name: &str,
        print_output: bool,
    ) -> Result<()> {
        if print_output {
            println!("Waiting for workspace to be ready...");
        }

        for _ in 0..READY_POLL_MAX_ATTEMPTS {
            let deployment = self.client.get_deployment(resource_name).await?;
            let ready = deployment
                .status
                .as_ref()
                .and_then(|s| s.ready_replicas)
                .unwrap_or(0);
            if ready > 0 {
                return Ok(());
            }
            tokio::time::sleep(Duration::from_secs(READY_POLL_INTERVAL_SECS)).await;
        }

        Err(DataOpsError::Timeout(format!(
            "Workspace deployment '{}' did not become ready",
            resource_name
        )))
    }
}

fn deployment_image(deployment: &Deployment) -> Option<String> {
    deployment
        .spec
        .as_ref()
        .and_then(|s| s.template.spec.as_ref())
        .and_then(|p| p.containers.first())
        .and_then(|c| c.image.clone())
}

/// Human-readable access location for a workspace Service.
fn access_hint(service: &Service) -> String {
    let spec = match &service.spec {
        Some(spec) => spec,
        None => return String::new(),
    };

    match spec.type_.as_deref() {
        Some("LoadBalancer") => {
            let external_ip = service
                .status
                .as_ref()
                .and_then(|s| s.load_balancer.as_ref())
                .and_then(|lb| lb.ingress.as_ref())
                .and_then(|ingress| ingress.first())
                .and_then(|i| i.ip.clone().or_else(|| i.hostname.clone()));
            match external_ip {
                Some(ip) => format!("Access the workspace at http://{}:8888", ip),
                None => "LoadBalancer external address pending; check the service".to_string(),
            }
        }
        _ => {
            let node_port = spec
                .ports
                .as_ref()
                .and_then(|p| p.first())
                .and_then(|p| p.node_port);
            match node_port {
                Some(port) => format!(
                    "Access the workspace at http://<any-cluster-node>:{}",
                    port
                ),
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_resource_name_round_trip() {
        let resource = workspace_resource_name("mike");
        assert_eq!(resource, "dataops-jupyterlab-mike");
        assert_eq!(workspace_name_from_resource(&resource), Some("mike"));
        assert_eq!(workspace_name_from_resource("some-other-pvc"), None);
    }
}
