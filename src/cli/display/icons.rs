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

//! Status icons for CLI output

/// Status icons for different states
pub struct StatusIcon;

impl StatusIcon {
    /// Ready / bound
    pub const SUCCESS: &'static str = "✓";

    /// Provisioning in progress
    pub const WARNING: &'static str = "⚠";

    /// Failed / lost
    pub const ERROR: &'static str = "✗";

    /// State not reported
    pub const UNKNOWN: &'static str = "?";

    /// Icon for a PVC phase ("Bound", "Pending", "Lost")
    pub fn get_phase_icon(phase: &str) -> &'static str {
        match phase {
            "Bound" => Self::SUCCESS,
            "Pending" => Self::WARNING,
            "Lost" => Self::ERROR,
            _ => Self::UNKNOWN,
        }
    }

    /// Icon for a snapshot's readyToUse field
    pub fn get_ready_icon(ready: Option<bool>) -> &'static str {
        match ready {
            Some(true) => Self::SUCCESS,
            Some(false) => Self::WARNING,
            None => Self::UNKNOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_phase_icon() {
        assert_eq!(StatusIcon::get_phase_icon("Bound"), StatusIcon::SUCCESS);
        assert_eq!(StatusIcon::get_phase_icon("Pending"), StatusIcon::WARNING);
        assert_eq!(StatusIcon::get_phase_icon("Lost"), StatusIcon::ERROR);
        assert_eq!(StatusIcon::get_phase_icon("Other"), StatusIcon::UNKNOWN);
    }

    #[test]
    fn test_get_ready_icon() {
        assert_eq!(StatusIcon::get_ready_icon(Some(true)), StatusIcon::SUCCESS);
        assert_eq!(StatusIcon::get_ready_icon(Some(false)), StatusIcon::WARNING);
        assert_eq!(StatusIcon::get_ready_icon(None), StatusIcon::UNKNOWN);
    }
}
