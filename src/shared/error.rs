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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataOpsError>;

#[derive(Error, Debug)]
pub enum DataOpsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Kubernetes API connection error: {0}")]
    ApiConnection(String),

    #[error("Resource not found: {resource_type} '{name}' in namespace '{namespace}'")]
    NotFound {
        resource_type: String,
        name: String,
        namespace: String,
    },

    #[error("Resource already exists: {resource_type} '{name}' in namespace '{namespace}'")]
    AlreadyExists {
        resource_type: String,
        name: String,
        namespace: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl From<kube::Error> for DataOpsError {
    fn from(err: kube::Error) -> Self {
        DataOpsError::ApiConnection(err.to_string())
    }
}

impl DataOpsError {
    pub fn config(context: impl Into<String>) -> Self {
        Self::Config(context.into())
    }

    pub fn api_connection(context: impl Into<String>) -> Self {
        Self::ApiConnection(context.into())
    }

    pub fn not_found(
        resource_type: impl Into<String>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    pub fn already_exists(
        resource_type: impl Into<String>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self::AlreadyExists {
            resource_type: resource_type.into(),
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// The two error kinds the CLI contract declares for exit-code 1 mapping,
    /// plus local validation failures.
    pub fn is_declared(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::ApiConnection(_) | Self::Validation(_)
        )
    }
}
