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
    DEFAULT_ACCESS_MODE, SNAPSHOT_API_GROUP,
};
use k8s_openapi::api::core::v1::{
    PersistentVolumeClaim, PersistentVolumeClaimSpec, TypedLocalObjectReference,
    VolumeResourceRequirements,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

pub struct PvcBuilder {
    name: String,
    namespace: String,
    size: String,
    storage_class: Option<String>,
    access_mode: String,
    snapshot_source: Option<String>,
    labels: BTreeMap<String, String>,
}

impl PvcBuilder {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            size: size.into(),
            storage_class: None,
            access_mode: DEFAULT_ACCESS_MODE.to_string(),
            snapshot_source: None,
            labels: BTreeMap::new(),
        }
    }

    pub fn storage_class(mut self, storage_class: Option<String>) -> Self {
        self.storage_class = storage_class;
        self
    }

    pub fn access_mode(mut self, access_mode: impl Into<String>) -> Self {
        self.access_mode = access_mode.into();
        self
    }

    /// Provision the claim from an existing VolumeSnapshot (CSI restore/clone).
    pub fn from_snapshot(mut self, snapshot_name: impl Into<String>) -> Self {
        self.snapshot_source = Some(snapshot_name.into());
        self
    }

    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> PersistentVolumeClaim {
        let mut requests = BTreeMap::new();
        requests.insert("storage".to_string(), Quantity(self.size));

        let data_source = self.snapshot_source.map(|name| TypedLocalObjectReference {
            api_group: Some(SNAPSHOT_API_GROUP.to_string()),
            kind: "VolumeSnapshot".to_string(),
            name,
        });

        PersistentVolumeClaim {
            metadata: ObjectMeta {
                name: Some(self.name),
                namespace: Some(self.namespace),
                labels: if self.labels.is_empty() {
                    None
                } else {
                    Some(self.labels)
                },
                ..Default::default()
            },
            spec: Some(PersistentVolumeClaimSpec {
                access_modes: Some(vec![self.access_mode]),
                storage_class_name: self.storage_class,
                resources: Some(VolumeResourceRequirements {
                    requests: Some(requests),
                    ..Default::default()
                }),
                data_source,
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_pvc() {
        let pvc = PvcBuilder::new("project1", "default", "10Gi").build();

        assert_eq!(pvc.metadata.name.as_deref(), Some("project1"));
        assert_eq!(pvc.metadata.namespace.as_deref(), Some("default"));

        let spec = pvc.spec.unwrap();
        assert_eq!(
            spec.access_modes,
            Some(vec!["ReadWriteMany".to_string()])
        );
        assert!(spec.storage_class_name.is_none());
        assert!(spec.data_source.is_none());

        let requests = spec.resources.unwrap().requests.unwrap();
        assert_eq!(requests.get("storage"), Some(&Quantity("10Gi".to_string())));
    }

    #[test]
    fn test_pvc_with_storage_class() {
        let pvc = PvcBuilder::new("datasets", "team1", "2Ti")
            .storage_class(Some("ontap-flexgroup".to_string()))
            .build();

        assert_eq!(
            pvc.spec.unwrap().storage_class_name.as_deref(),
            Some("ontap-flexgroup")
        );
    }

    #[test]
    fn test_pvc_from_snapshot() {
        let pvc = PvcBuilder::new("clone1", "default", "10Gi")
            .from_snapshot("snap1")
            .build();

        let ds = pvc.spec.unwrap().data_source.unwrap();
        assert_eq!(ds.api_group.as_deref(), Some("snapshot.storage.k8s.io"));
        assert_eq!(ds.kind, "VolumeSnapshot");
        assert_eq!(ds.name, "snap1");
    }
}
