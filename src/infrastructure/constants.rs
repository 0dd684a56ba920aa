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

/// Defaults surfaced in the CLI
pub const DEFAULT_NAMESPACE: &str = "default";
pub const DEFAULT_VOLUME_SNAPSHOT_CLASS: &str = "csi-snapclass";
pub const DEFAULT_WORKSPACE_IMAGE: &str = "jupyter/tensorflow-notebook";

/// Generated snapshot names: "<prefix><YYYYmmddHHMMSS>"
pub const SNAPSHOT_NAME_PREFIX: &str = "dataops.";
pub const CLONE_SNAPSHOT_INFIX: &str = "for-clone.";

/// Every Kubernetes object backing workspace <w> is named "<prefix><w>"
pub const WORKSPACE_RESOURCE_PREFIX: &str = "dataops-jupyterlab-";

/// Notebook container
pub const NOTEBOOK_CONTAINER_NAME: &str = "jupyterlab";
pub const NOTEBOOK_PORT: i32 = 8888;
pub const NOTEBOOK_PORT_NAME: &str = "http";
pub const WORKSPACE_MOUNT_PATH: &str = "/home/jovyan";
pub const WORKSPACE_VOLUME_NAME: &str = "workspace-data";
pub const EXTRA_VOLUME_NAME: &str = "extra-data";

/// Resource labels
pub const LABEL_APP: &str = "app";
pub const LABEL_COMPONENT: &str = "component";
pub const LABEL_MANAGED_BY: &str = "managed-by";
pub const MANAGED_BY_VALUE: &str = "dataops-kube";
pub const COMPONENT_JUPYTERLAB: &str = "jupyterlab";

/// PVC defaults
pub const DEFAULT_ACCESS_MODE: &str = "ReadWriteMany";

/// CSI snapshot API group (VolumeSnapshot dataSource references)
pub const SNAPSHOT_API_GROUP: &str = "snapshot.storage.k8s.io";

/// Extended resource name for GPU requests
pub const GPU_RESOURCE_NAME: &str = "nvidia.com/gpu";

/// Readiness polling
pub const READY_POLL_INTERVAL_SECS: u64 = 5;
pub const READY_POLL_MAX_ATTEMPTS: usize = 120;

/// Restart policy / strategy
pub const STRATEGY_TYPE_RECREATE: &str = "Recreate";

/// Service types
pub const SERVICE_TYPE_NODE_PORT: &str = "NodePort";
pub const SERVICE_TYPE_LOAD_BALANCER: &str = "LoadBalancer";
