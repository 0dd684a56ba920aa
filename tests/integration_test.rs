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

//! Cluster-backed integration tests. These require a reachable Kubernetes
//! cluster with a CSI driver and VolumeSnapshotClass installed, so they
//! are ignored by default. Run with: cargo test -- --ignored

#[cfg(test)]
mod tests {
    use dataops_kube::domain::volume::CloneSource;
    use dataops_kube::shared::DataOpsError;
    use dataops_kube::{JupyterLabDescriptor, VolumeDescriptor, WorkspaceConfig};

    const TEST_NAMESPACE: &str = "dataops-kube-test";

    #[tokio::test]
    #[ignore]
    async fn test_volume_lifecycle() {
        let descriptor = VolumeDescriptor::new(TEST_NAMESPACE.to_string())
            .await
            .expect("kubeconfig should be resolvable");

        descriptor
            .create_volume("it-project1", "1Gi", None, false)
            .await
            .expect("volume creation should succeed");

        let volumes = descriptor.list_volumes(false).await.unwrap();
        assert!(volumes.iter().any(|v| v.pvc_name == "it-project1"));

        descriptor
            .delete_volume("it-project1", false, false)
            .await
            .expect("volume deletion should succeed");
    }

    #[tokio::test]
    #[ignore]
    async fn test_snapshot_and_clone_lifecycle() {
        let descriptor = VolumeDescriptor::new(TEST_NAMESPACE.to_string())
            .await
            .unwrap();

        descriptor
            .create_volume("it-source", "1Gi", None, false)
            .await
            .unwrap();

        let snapshot_name = descriptor
            .create_volume_snapshot("it-source", None, "csi-snapclass", false)
            .await
            .unwrap();
        assert!(snapshot_name.starts_with("dataops."));

        descriptor
            .clone_volume(
                "it-clone",
                CloneSource::Snapshot(snapshot_name.clone()),
                "csi-snapclass",
                false,
            )
            .await
            .unwrap();

        let snapshots = descriptor
            .list_volume_snapshots(Some("it-source"), false)
            .await
            .unwrap();
        assert!(snapshots.iter().any(|s| s.name == snapshot_name));

        descriptor.delete_volume("it-clone", false, false).await.unwrap();
        descriptor.delete_volume("it-source", false, false).await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn test_delete_missing_volume_reports_not_found() {
        let descriptor = VolumeDescriptor::new(TEST_NAMESPACE.to_string())
            .await
            .unwrap();

        let result = descriptor
            .delete_volume("it-does-not-exist", false, false)
            .await;
        assert!(matches!(result, Err(DataOpsError::NotFound { .. })));
    }

    #[tokio::test]
    #[ignore]
    async fn test_jupyterlab_lifecycle() {
        let descriptor = JupyterLabDescriptor::new(TEST_NAMESPACE.to_string())
            .await
            .unwrap();

        let config = WorkspaceConfig {
            image: "jupyter/tensorflow-notebook".to_string(),
            ..Default::default()
        };
        descriptor
            .create_jupyter_lab("it-mike", "1Gi", None, &config, false)
            .await
            .expect("workspace creation should succeed");

        let workspaces = descriptor.list_jupyter_labs(false).await.unwrap();
        assert!(workspaces.iter().any(|w| w.workspace_name == "it-mike"));

        let snapshot_name = descriptor
            .create_jupyter_lab_snapshot("it-mike", None, "csi-snapclass", false)
            .await
            .unwrap();

        let snapshots = descriptor
            .list_jupyter_lab_snapshots(Some("it-mike"), false)
            .await
            .unwrap();
        assert!(snapshots.iter().any(|s| s.name == snapshot_name));

        descriptor
            .delete_jupyter_lab("it-mike", false, false)
            .await
            .expect("workspace deletion should succeed");
    }
}
