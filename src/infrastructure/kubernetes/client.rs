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

use crate::infrastructure::kubernetes::snapshot::VolumeSnapshot;
use crate::shared::error::DataOpsError;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{PersistentVolumeClaim, Service};
use kube::{Api, Client};

#[async_trait::async_trait]
pub trait DataOpsKubeClient: Send + Sync {
    async fn create_pvc(&self, pvc: &PersistentVolumeClaim) -> Result<(), DataOpsError>;

    async fn get_pvc(&self, name: &str) -> Result<PersistentVolumeClaim, DataOpsError>;

    async fn delete_pvc(&self, name: &str) -> Result<(), DataOpsError>;

    async fn list_pvcs(&self) -> Result<Vec<PersistentVolumeClaim>, DataOpsError>;

    async fn pvc_exists(&self, name: &str) -> Result<bool, DataOpsError>;

    async fn create_volume_snapshot(&self, snapshot: &VolumeSnapshot)
        -> Result<(), DataOpsError>;

    async fn get_volume_snapshot(&self, name: &str) -> Result<VolumeSnapshot, DataOpsError>;

    async fn delete_volume_snapshot(&self, name: &str) -> Result<(), DataOpsError>;

    async fn list_volume_snapshots(&self) -> Result<Vec<VolumeSnapshot>, DataOpsError>;

    async fn create_deployment(&self, deployment: &Deployment) -> Result<(), DataOpsError>;

    async fn get_deployment(&self, name: &str) -> Result<Deployment, DataOpsError>;

    async fn delete_deployment(&self, name: &str) -> Result<(), DataOpsError>;

    async fn list_deployments(&self, label_selector: &str)
        -> Result<Vec<Deployment>, DataOpsError>;

    async fn scale_deployment(&self, name: &str, replicas: i32) -> Result<(), DataOpsError>;

    async fn create_service(&self, service: &Service) -> Result<(), DataOpsError>;

    async fn get_service(&self, name: &str) -> Result<Service, DataOpsError>;

    async fn delete_service(&self, name: &str) -> Result<(), DataOpsError>;

    fn namespace(&self) -> &str;
}

pub struct DataOpsKubeClientImpl {
    client: Client,
    namespace: String,
}

impl DataOpsKubeClientImpl {
    /// Connect using the default kubeconfig resolution chain
    /// (KUBECONFIG env var or ~/.kube/config, in-cluster config).
    /// A failure here is a configuration problem, not an API one.
    pub async fn new(namespace: String) -> Result<Self, DataOpsError> {
        let client = Client::try_default().await.map_err(|e| {
            DataOpsError::Config(format!("Failed to create Kubernetes client: {}", e))
        })?;

        Ok(Self { client, namespace })
    }

    pub fn with_client(client: Client, namespace: String) -> Self {
        Self { client, namespace }
    }

    fn map_get_error(&self, err: kube::Error, resource_type: &str, name: &str) -> DataOpsError {
        if let kube::Error::Api(ae) = err {
            if ae.code == 404 {
                DataOpsError::not_found(resource_type, name, &self.namespace)
            } else {
                DataOpsError::ApiConnection(ae.message)
            }
        } else {
            DataOpsError::ApiConnection(err.to_string())
        }
    }

    fn map_create_error(&self, err: kube::Error, resource_type: &str, name: &str) -> DataOpsError {
        if let kube::Error::Api(ae) = err {
            if ae.code == 409 {
                DataOpsError::already_exists(resource_type, name, &self.namespace)
            } else {
                DataOpsError::ApiConnection(ae.message)
            }
        } else {
            DataOpsError::ApiConnection(err.to_string())
        }
    }
}

#[async_trait::async_trait]
impl DataOpsKubeClient for DataOpsKubeClientImpl {
    async fn create_pvc(&self, pvc: &PersistentVolumeClaim) -> Result<(), DataOpsError> {
        let api: Api<PersistentVolumeClaim> = Api::namespaced(self.client.clone(), &self.namespace);
        let pp = kube::api::PostParams::default();
        let name = pvc.metadata.name.as_deref().unwrap_or_default();

        api.create(&pp, pvc)
            .await
            .map_err(|e| self.map_create_error(e, "PersistentVolumeClaim", name))?;
        Ok(())
    }

    async fn get_pvc(&self, name: &str) -> Result<PersistentVolumeClaim, DataOpsError> {
        let api: Api<PersistentVolumeClaim> = Api::namespaced(self.client.clone(), &self.namespace);
        api.get(name)
            .await
            .map_err(|e| self.map_get_error(e, "PersistentVolumeClaim", name))
    }

    async fn delete_pvc(&self, name: &str) -> Result<(), DataOpsError> {
        let api: Api<PersistentVolumeClaim> = Api::namespaced(self.client.clone(), &self.namespace);
        let dp = kube::api::DeleteParams::default();

        api.delete(name, &dp)
            .await
            .map_err(|e| self.map_get_error(e, "PersistentVolumeClaim", name))?;
        Ok(())
    }

    async fn list_pvcs(&self) -> Result<Vec<PersistentVolumeClaim>, DataOpsError> {
        let api: Api<PersistentVolumeClaim> = Api::namespaced(self.client.clone(), &self.namespace);
        let lp = kube::api::ListParams::default();

        let pvcs = api.list(&lp).await?;
        Ok(pvcs.items)
    }

    async fn pvc_exists(&self, name: &str) -> Result<bool, DataOpsError> {
        match self.get_pvc(name).await {
            Ok(_) => Ok(true),
            Err(DataOpsError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn create_volume_snapshot(
        &self,
        snapshot: &VolumeSnapshot,
    ) -> Result<(), DataOpsError> {
        let api: Api<VolumeSnapshot> = Api::namespaced(self.client.clone(), &self.namespace);
        let pp = kube::api::PostParams::default();
        let name = snapshot.metadata.name.as_deref().unwrap_or_default();

        api.create(&pp, snapshot)
            .await
            .map_err(|e| self.map_create_error(e, "VolumeSnapshot", name))?;
        Ok(())
    }

    async fn get_volume_snapshot(&self, name: &str) -> Result<VolumeSnapshot, DataOpsError> {
        let api: Api<VolumeSnapshot> = Api::namespaced(self.client.clone(), &self.namespace);
        api.get(name)
            .await
            .map_err(|e| self.map_get_error(e, "VolumeSnapshot", name))
    }

    async fn delete_volume_snapshot(&self, name: &str) -> Result<(), DataOpsError> {
        let api: Api<VolumeSnapshot> = Api::namespaced(self.client.clone(), &self.namespace);
        let dp = kube::api::DeleteParams::default();

        api.delete(name, &dp)
            .await
            .map_err(|e| self.map_get_error(e, "VolumeSnapshot", name))?;
        Ok(())
    }

    async fn list_volume_snapshots(&self) -> Result<Vec<VolumeSnapshot>, DataOpsError> {
        let api: Api<VolumeSnapshot> = Api::namespaced(self.client.clone(), &self.namespace);
        let lp = kube::api::ListParams::default();

        let snapshots = api.list(&lp).await?;
        Ok(snapshots.items)
    }

    async fn create_deployment(&self, deployment: &Deployment) -> Result<(), DataOpsError> {
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), &self.namespace);
        let pp = kube::api::PostParams::default();
        let name = deployment.metadata.name.as_deref().unwrap_or_default();

        api.create(&pp, deployment)
            .await
            .map_err(|e| self.map_create_error(e, "Deployment", name))?;
        Ok(())
    }

    async fn get_deployment(&self, name: &str) -> Result<Deployment, DataOpsError> {
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), &self.namespace);
        api.get(name)
            .await
            .map_err(|e| self.map_get_error(e, "Deployment", name))
    }

    async fn delete_deployment(&self, name: &str) -> Result<(), DataOpsError> {
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), &self.namespace);
        let dp = kube::api::DeleteParams::default();

        api.delete(name, &dp)
            .await
            .map_err(|e| self.map_get_error(e, "Deployment", name))?;
        Ok(())
    }

    async fn list_deployments(
        &self,
        label_selector: &str,
    ) -> Result<Vec<Deployment>, DataOpsError> {
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), &self.namespace);
        let lp = kube::api::ListParams::default().labels(label_selector);

        let deployments = api.list(&lp).await?;
        Ok(deployments.items)
    }

    async fn scale_deployment(&self, name: &str, replicas: i32) -> Result<(), DataOpsError> {
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), &self.namespace);
        let patch = serde_json::json!({ "spec": { "replicas": replicas } });
        let pp = kube::api::PatchParams::default();

        api.patch(name, &pp, &kube::api::Patch::Merge(patch))
            .await
            .map_err(|e| self.map_get_error(e, "Deployment", name))?;
        Ok(())
    }

    async fn create_service(&self, service: &Service) -> Result<(), DataOpsError> {
        let api: Api<Service> = Api::namespaced(self.client.clone(), &self.namespace);
        let pp = kube::api::PostParams::default();
        let name = service.metadata.name.as_deref().unwrap_or_default();

        api.create(&pp, service)
            .await
            .map_err(|e| self.map_create_error(e, "Service", name))?;
        Ok(())
    }

    async fn get_service(&self, name: &str) -> Result<Service, DataOpsError> {
        let api: Api<Service> = Api::namespaced(self.client.clone(), &self.namespace);
        api.get(name)
            .await
            .map_err(|e| self.map_get_error(e, "Service", name))
    }

    async fn delete_service(&self, name: &str) -> Result<(), DataOpsError> {
        let api: Api<Service> = Api::namespaced(self.client.clone(), &self.namespace);
        let dp = kube::api::DeleteParams::default();

        api.delete(name, &dp)
            .await
            .map_err(|e| self.map_get_error(e, "Service", name))?;
        Ok(())
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }
}
