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
    COMPONENT_JUPYTERLAB, LABEL_APP, LABEL_COMPONENT, LABEL_MANAGED_BY, MANAGED_BY_VALUE,
    NOTEBOOK_PORT, NOTEBOOK_PORT_NAME, SERVICE_TYPE_LOAD_BALANCER, SERVICE_TYPE_NODE_PORT,
};
use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use std::collections::BTreeMap;

/// Builds the Service exposing a workspace's notebook port.
pub struct WorkspaceServiceBuilder {
    resource_name: String,
    namespace: String,
    load_balancer: bool,
}

impl WorkspaceServiceBuilder {
    pub fn new(
        resource_name: impl Into<String>,
        namespace: impl Into<String>,
        load_balancer: bool,
    ) -> Self {
        Self {
            resource_name: resource_name.into(),
            namespace: namespace.into(),
            load_balancer,
        }
    }

    pub fn build(&self) -> Service {
        let mut labels = BTreeMap::new();
        labels.insert(LABEL_APP.to_string(), self.resource_name.clone());
        labels.insert(
            LABEL_COMPONENT.to_string(),
            COMPONENT_JUPYTERLAB.to_string(),
        );
        labels.insert(LABEL_MANAGED_BY.to_string(), MANAGED_BY_VALUE.to_string());

        let service_type = if self.load_balancer {
            SERVICE_TYPE_LOAD_BALANCER
        } else {
            SERVICE_TYPE_NODE_PORT
        };

        Service {
            metadata: ObjectMeta {
                name: Some(self.resource_name.clone()),
                namespace: Some(self.namespace.clone()),
                labels: Some(labels.clone()),
                ..Default::default()
            },
            spec: Some(ServiceSpec {
                type_: Some(service_type.to_string()),
                selector: Some(labels),
                ports: Some(vec![ServicePort {
                    name: Some(NOTEBOOK_PORT_NAME.to_string()),
                    port: NOTEBOOK_PORT,
                    target_port: Some(IntOrString::Int(NOTEBOOK_PORT)),
                    ..Default::default()
                }]),
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
    fn test_node_port_service() {
        let service =
            WorkspaceServiceBuilder::new("dataops-jupyterlab-mike", "default", false).build();

        let spec = service.spec.unwrap();
        assert_eq!(spec.type_.as_deref(), Some("NodePort"));
        assert_eq!(spec.ports.as_ref().unwrap()[0].port, 8888);
        assert_eq!(
            spec.selector.unwrap().get("app").map(String::as_str),
            Some("dataops-jupyterlab-mike")
        );
    }

    #[test]
    fn test_load_balancer_service() {
        let service =
            WorkspaceServiceBuilder::new("dataops-jupyterlab-mike", "team1", true).build();

        assert_eq!(
            service.spec.unwrap().type_.as_deref(),
            Some("LoadBalancer")
        );
        assert_eq!(service.metadata.namespace.as_deref(), Some("team1"));
    }
}
