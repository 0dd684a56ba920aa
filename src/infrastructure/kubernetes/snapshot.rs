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

//! VolumeSnapshot custom resource (snapshot.storage.k8s.io/v1)

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Spec of the CSI VolumeSnapshot CRD. Only the fields this tool reads
/// or writes are modeled.
#[derive(CustomResource, Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "snapshot.storage.k8s.io",
    version = "v1",
    kind = "VolumeSnapshot",
    namespaced,
    status = "VolumeSnapshotStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSnapshotSpec {
    pub source: VolumeSnapshotSource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_snapshot_class_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSnapshotSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_volume_claim_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_snapshot_content_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSnapshotStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_to_use: Option<bool>,

    /// Quantity string, e.g. "10Gi"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound_volume_snapshot_content_name: Option<String>,
}

impl VolumeSnapshot {
    /// Name of the PVC this snapshot was taken from, if recorded.
    pub fn source_pvc_name(&self) -> Option<&str> {
        self.spec.source.persistent_volume_claim_name.as_deref()
    }

    pub fn is_ready(&self) -> bool {
        self.status
            .as_ref()
            .and_then(|s| s.ready_to_use)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let spec = VolumeSnapshotSpec {
            source: VolumeSnapshotSource {
                persistent_volume_claim_name: Some("project1".to_string()),
                volume_snapshot_content_name: None,
            },
            volume_snapshot_class_name: Some("csi-snapclass".to_string()),
        };

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value["source"]["persistentVolumeClaimName"],
            "project1"
        );
        assert_eq!(value["volumeSnapshotClassName"], "csi-snapclass");
    }

    #[test]
    fn test_snapshot_readiness() {
        let mut snap = VolumeSnapshot::new(
            "snap1",
            VolumeSnapshotSpec {
                source: VolumeSnapshotSource {
                    persistent_volume_claim_name: Some("project1".to_string()),
                    volume_snapshot_content_name: None,
                },
                volume_snapshot_class_name: None,
            },
        );
        assert!(!snap.is_ready());
        assert_eq!(snap.source_pvc_name(), Some("project1"));

        snap.status = Some(VolumeSnapshotStatus {
            ready_to_use: Some(true),
            restore_size: Some("10Gi".to_string()),
            creation_time: None,
            bound_volume_snapshot_content_name: None,
        });
        assert!(snap.is_ready());
    }
}
