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

//! Color theme for CLI output

use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub error: TableColor,
    pub info: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            error: TableColor::Red,
            info: TableColor::Cyan,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    /// Color for a PVC phase ("Bound", "Pending", "Lost")
    pub fn get_phase_color(&self, phase: &str) -> TableColor {
        match phase {
            "Bound" => self.success,
            "Pending" => self.warning,
            "Lost" => self.error,
            _ => self.muted,
        }
    }

    /// Color for a snapshot's readyToUse field
    pub fn get_ready_color(&self, ready: Option<bool>) -> TableColor {
        match ready {
            Some(true) => self.success,
            Some(false) => self.warning,
            None => self.muted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = ColorTheme::default();
        assert_eq!(theme.success, TableColor::Green);
        assert_eq!(theme.warning, TableColor::Yellow);
        assert_eq!(theme.error, TableColor::Red);
    }

    #[test]
    fn test_get_phase_color() {
        let theme = ColorTheme::default();
        assert_eq!(theme.get_phase_color("Bound"), TableColor::Green);
        assert_eq!(theme.get_phase_color("Pending"), TableColor::Yellow);
        assert_eq!(theme.get_phase_color("Lost"), TableColor::Red);
        assert_eq!(theme.get_phase_color("Unknown"), TableColor::DarkGrey);
    }

    #[test]
    fn test_get_ready_color() {
        let theme = ColorTheme::default();
        assert_eq!(theme.get_ready_color(Some(true)), TableColor::Green);
        assert_eq!(theme.get_ready_color(Some(false)), TableColor::Yellow);
        assert_eq!(theme.get_ready_color(None), TableColor::DarkGrey);
    }
}
