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

use crate::infrastructure::constants::{
    COMPONENT_JUPYTERLAB, EXTRA_VOLUME_NAME, GPU_RESOURCE_NAME, LABEL_APP, LABEL_COMPONENT,
    LABEL_MANAGED_BY, MANAGED_BY_VALUE, NOTEBOOK_CONTAINER_NAME, NOTEBOOK_PORT,
    NOTEBOOK_PORT_NAME, STRATEGY_TYPE_RECREATE, WORKSPACE_MOUNT_PATH, WORKSPACE_VOLUME_NAME,
};
use crate::shared::error::DataOpsError;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec, DeploymentStrategy};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, EnvVar, PersistentVolumeClaimVolumeSource, PodSpec,
    PodTemplateSpec, ResourceRequirements, Volume, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use std::collections::BTreeMap;

/// Builds the single-replica notebook Deployment backing a workspace.
pub struct WorkspaceDeploymentBuilder {
    resource_name: String,
    namespace: String,
    image: String,
    cpu: Option<String>,
    memory: Option<String>,
    nvidia_gpu: Option<String>,
    mount_pvc: Option<String>,
}

impl WorkspaceDeploymentBuilder {
    pub fn new(
        resource_name: impl Into<String>,
        namespace: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            resource_name: resource_name.into(),
            namespace: namespace.into(),
            image: image.into(),
            cpu: None,
            memory: None,
            nvidia_gpu: None,
            mount_pvc: None,
        }
    }

    pub fn cpu(mut self, cpu: Option<String>) -> Self {
        self.cpu = cpu;
        self
    }

    pub fn memory(mut self, memory: Option<String>) -> Self {
        self.memory = memory;
        self
    }

    pub fn nvidia_gpu(mut self, gpu: Option<String>) -> Self {
        self.nvidia_gpu = gpu;
        self
    }

    /// Additional existing PVC to attach, "pvc-name:mount-path" format.
    pub fn mount_pvc(mut self, mount_pvc: Option<String>) -> Self {
        self.mount_pvc = mount_pvc;
        self
    }

    fn labels(&self) -> BTreeMap<String, String> {
        let mut labels = BTreeMap::new();
        labels.insert(LABEL_APP.to_string(), self.resource_name.clone());
        labels.insert(
            LABEL_COMPONENT.to_string(),
            COMPONENT_JUPYTERLAB.to_string(),
        );
        labels.insert(LABEL_MANAGED_BY.to_string(), MANAGED_BY_VALUE.to_string());
        labels
    }

    fn resources(&self) -> Option<ResourceRequirements> {
        let mut requests = BTreeMap::new();
        let mut limits = BTreeMap::new();

        if let Some(cpu) = &self.cpu {
            requests.insert("cpu".to_string(), Quantity(cpu.clone()));
        }
        if let Some(memory) = &self.memory {
            requests.insert("memory".to_string(), Quantity(memory.clone()));
        }
        if let Some(gpu) = &self.nvidia_gpu {
            // Extended resources must be requested via limits
            limits.insert(GPU_RESOURCE_NAME.to_string(), Quantity(gpu.clone()));
        }

        if requests.is_empty() && limits.is_empty() {
            return None;
        }

        Some(ResourceRequirements {
            requests: if requests.is_empty() {
                None
            } else {
                Some(requests)
            },
            limits: if limits.is_empty() { None } else { Some(limits) },
            ..Default::default()
        })
    }

    fn volumes_and_mounts(&self) -> Result<(Vec<Volume>, Vec<VolumeMount>), DataOpsError> {
        let mut volumes = vec![Volume {
            name: WORKSPACE_VOLUME_NAME.to_string(),
            persistent_volume_claim: Some(PersistentVolumeClaimVolumeSource {
                claim_name: self.resource_name.clone(),
                read_only: None,
            }),
            ..Default::default()
        }];
        let mut mounts = vec![VolumeMount {
            name: WORKSPACE_VOLUME_NAME.to_string(),
            mount_path: WORKSPACE_MOUNT_PATH.to_string(),
            ..Default::default()
        }];

        if let Some(mount_pvc) = &self.mount_pvc {
            let (claim, path) = mount_pvc.split_once(':').ok_or_else(|| {
                DataOpsError::Validation(format!(
                    "Invalid mount-pvc value '{}'. Expected 'pvc-name:mount-path'",
                    mount_pvc
                ))
            })?;
            if claim.is_empty() || path.is_empty() {
                return Err(DataOpsError::Validation(format!(
                    "Invalid mount-pvc value '{}'. Expected 'pvc-name:mount-path'",
                    mount_pvc
                )));
            }

            volumes.push(Volume {
                name: EXTRA_VOLUME_NAME.to_string(),
                persistent_volume_claim: Some(PersistentVolumeClaimVolumeSource {
                    claim_name: claim.to_string(),
                    read_only: None,
                }),
                ..Default::default()
            });
            mounts.push(VolumeMount {
                name: EXTRA_VOLUME_NAME.to_string(),
                mount_path: path.to_string(),
                ..Default::default()
            });
        }

        Ok((volumes, mounts))
    }

    pub fn build(&self) -> Result<Deployment, DataOpsError> {
        let labels = self.labels();
        let (volumes, mounts) = self.volumes_and_mounts()?;

        let container = Container {
            name: NOTEBOOK_CONTAINER_NAME.to_string(),
            image: Some(self.image.clone()),
            ports: Some(vec![ContainerPort {
                name: Some(NOTEBOOK_PORT_NAME.to_string()),
                container_port: NOTEBOOK_PORT,
                ..Default::default()
            }]),
            env: Some(vec![EnvVar {
                name: "JUPYTER_ENABLE_LAB".to_string(),
                value: Some("yes".to_string()),
                ..Default::default()
            }]),
            resources: self.resources(),
            volume_mounts: Some(mounts),
            ..Default::default()
        };

        Ok(Deployment {
            metadata: ObjectMeta {
                name: Some(self.resource_name.clone()),
                namespace: Some(self.namespace.clone()),
                labels: Some(labels.clone()),
                ..Default::default()
            },
            spec: Some(DeploymentSpec {
                replicas: Some(1),
                selector: LabelSelector {
                    match_labels: Some(labels.clone()),
                    ..Default::default()
                },
                // The workspace volume must not be mounted by two pods at once
                strategy: Some(DeploymentStrategy {
                    type_: Some(STRATEGY_TYPE_RECREATE.to_string()),
                    ..Default::default()
                }),
                template: PodTemplateSpec {
                    metadata: Some(ObjectMeta {
                        labels: Some(labels),
                        ..Default::default()
                    }),
                    spec: Some(PodSpec {
                        containers: vec![container],
                        volumes: Some(volumes),
                        ..Default::default()
                    }),
                },
                ..Default::default()
            }),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> WorkspaceDeploymentBuilder {
        WorkspaceDeploymentBuilder::new(
            "dataops-jupyterlab-mike",
            "default",
            "jupyter/tensorflow-notebook",
        )
    }

    #[test]
    fn test_basic_deployment() {
        let deployment = builder().build().unwrap();

        assert_eq!(
            deployment.metadata.name.as_deref(),
            Some("dataops-jupyterlab-mike")
        );
        let spec = deployment.spec.unwrap();
        assert_eq!(spec.replicas, Some(1));
        assert_eq!(
            spec.strategy.unwrap().type_.as_deref(),
            Some("Recreate")
        );

        let pod_spec = spec.template.spec.unwrap();
        let container = &pod_spec.containers[0];
        assert_eq!(container.image.as_deref(), Some("jupyter/tensorflow-notebook"));
        assert_eq!(container.ports.as_ref().unwrap()[0].container_port, 8888);
        assert!(container.resources.is_none());

        let mounts = container.volume_mounts.as_ref().unwrap();
        assert_eq!(mounts.len(), 1);
        assert_eq!(mounts[0].mount_path, "/home/jovyan");
    }

    #[test]
    fn test_resource_requests() {
        let deployment = builder()
            .cpu(Some("0.5".to_string()))
            .memory(Some("1Gi".to_string()))
            .nvidia_gpu(Some("2".to_string()))
            .build()
            .unwrap();

        let pod_spec = deployment.spec.unwrap().template.spec.unwrap();
        let resources = pod_spec.containers[0].resources.as_ref().unwrap();

        let requests = resources.requests.as_ref().unwrap();
        assert_eq!(requests.get("cpu"), Some(&Quantity("0.5".to_string())));
        assert_eq!(requests.get("memory"), Some(&Quantity("1Gi".to_string())));

        let limits = resources.limits.as_ref().unwrap();
        assert_eq!(
            limits.get("nvidia.com/gpu"),
            Some(&Quantity("2".to_string()))
        );
    }

    #[test]
    fn test_mount_pvc() {
        let deployment = builder()
            .mount_pvc(Some("datasets:/mnt/data".to_string()))
            .build()
            .unwrap();

        let pod_spec = deployment.spec.unwrap().template.spec.unwrap();
        let volumes = pod_spec.volumes.as_ref().unwrap();
        assert_eq!(volumes.len(), 2);
        assert_eq!(
            volumes[1]
                .persistent_volume_claim
                .as_ref()
                .unwrap()
                .claim_name,
            "datasets"
        );

        let mounts = pod_spec.containers[0].volume_mounts.as_ref().unwrap();
        assert_eq!(mounts[1].mount_path, "/mnt/data");
    }

    #[test]
    fn test_mount_pvc_malformed() {
        let result = builder()
            .mount_pvc(Some("no-colon-here".to_string()))
            .build();
        assert!(matches!(result, Err(DataOpsError::Validation(_))));
    }
}
