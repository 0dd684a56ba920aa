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

use crate::shared::error::{DataOpsError, Result};
use regex::Regex;

const MAX_NAME_LENGTH: usize = 253;

/// Validate that a name is usable as a Kubernetes object name
/// (RFC 1123 subdomain: lowercase alphanumerics, '-' and '.').
pub fn validate_resource_name(kind: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(DataOpsError::Validation(format!(
            "{} name must not be empty",
            kind
        )));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(DataOpsError::Validation(format!(
            "{} name '{}' exceeds {} characters",
            kind, name, MAX_NAME_LENGTH
        )));
    }

    let re = Regex::new(r"^[a-z0-9]([-a-z0-9.]*[a-z0-9])?$")
        .map_err(|e| DataOpsError::Validation(e.to_string()))?;
    if !re.is_match(name) {
        return Err(DataOpsError::Validation(format!(
            "{} name '{}' is not a valid Kubernetes name (lowercase alphanumerics, '-' and '.', must start and end with an alphanumeric)",
            kind, name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["project1", "a", "team-1.staging", "snap.20210304151544"] {
            assert!(validate_resource_name("PVC", name).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "Project1", "-leading", "trailing-", "has_underscore", "has space"] {
            assert!(validate_resource_name("PVC", name).is_err(), "{:?}", name);
        }
    }

    #[test]
    fn test_overlong_name() {
        let name = "a".repeat(254);
        assert!(validate_resource_name("PVC", &name).is_err());
    }
}
