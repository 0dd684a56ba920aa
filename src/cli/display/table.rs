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

//! Table rendering for CLI output

use super::{ColorTheme, StatusIcon};
use crate::domain::jupyterlab::WorkspaceInfo;
use crate::domain::volume::{SnapshotInfo, VolumeInfo};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render a volume list as a formatted table
    pub fn render_volumes(&self, volumes: &[VolumeInfo]) -> String {
        if volumes.is_empty() {
            return "No volumes found".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("PVC").set_alignment(CellAlignment::Left),
                Cell::new("STATUS").set_alignment(CellAlignment::Center),
                Cell::new("SIZE").set_alignment(CellAlignment::Right),
                Cell::new("STORAGECLASS").set_alignment(CellAlignment::Left),
                Cell::new("CLONE").set_alignment(CellAlignment::Center),
                Cell::new("SOURCE PVC").set_alignment(CellAlignment::Left),
                Cell::new("SOURCE SNAPSHOT").set_alignment(CellAlignment::Left),
            ]);

        for volume in volumes {
            let icon = StatusIcon::get_phase_icon(&volume.status);
            let color = self.theme.get_phase_color(&volume.status);
            let is_clone = if volume.source_snapshot.is_some() {
                "Yes"
            } else {
                "No"
            };

            table.add_row(vec![
                Cell::new(&volume.pvc_name),
                Cell::new(format!("{} {}", icon, volume.status)).fg(color),
                Cell::new(&volume.size),
                Cell::new(volume.storage_class.as_deref().unwrap_or("-")),
                Cell::new(is_clone),
                Cell::new(volume.source_pvc.as_deref().unwrap_or("-")),
                Cell::new(volume.source_snapshot.as_deref().unwrap_or("-")),
            ]);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ Volumes {} ─╮\n",
            format!("[{}]", volumes.len()).bright_black()
        ));
        output.push_str(&table.to_string());
        output
    }

    /// Render a snapshot list as a formatted table
    pub fn render_snapshots(&self, snapshots: &[SnapshotInfo]) -> String {
        if snapshots.is_empty() {
            return "No snapshots found".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("SNAPSHOT").set_alignment(CellAlignment::Left),
                Cell::new("READY").set_alignment(CellAlignment::Center),
                Cell::new("CREATED").set_alignment(CellAlignment::Left),
                Cell::new("SOURCE PVC").set_alignment(CellAlignment::Left),
                Cell::new("SNAPSHOT CLASS").set_alignment(CellAlignment::Left),
            ]);

        for snapshot in snapshots {
            let icon = StatusIcon::get_ready_icon(snapshot.ready_to_use);
            let color = self.theme.get_ready_color(snapshot.ready_to_use);
            let ready_text = match snapshot.ready_to_use {
                Some(true) => "Ready",
                Some(false) => "Not Ready",
                None => "Unknown",
            };

            table.add_row(vec![
                Cell::new(&snapshot.name),
                Cell::new(format!("{} {}", icon, ready_text)).fg(color),
                Cell::new(snapshot.creation_time.as_deref().unwrap_or("-")),
                Cell::new(snapshot.source_pvc.as_deref().unwrap_or("-")),
                Cell::new(snapshot.snapshot_class.as_deref().unwrap_or("-")),
            ]);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ Snapshots {} ─╮\n",
            format!("[{}]", snapshots.len()).bright_black()
        ));
        output.push_str(&table.to_string());
        output
    }

    /// Render a JupyterLab workspace list as a formatted table
    pub fn render_workspaces(&self, workspaces: &[WorkspaceInfo]) -> String {
        if workspaces.is_empty() {
            return "No JupyterLab workspaces found".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("WORKSPACE").set_alignment(CellAlignment::Left),
                Cell::new("STATUS").set_alignment(CellAlignment::Center),
                Cell::new("SIZE").set_alignment(CellAlignment::Right),
                Cell::new("ACCESS").set_alignment(CellAlignment::Left),
                Cell::new("IMAGE").set_alignment(CellAlignment::Left),
            ]);

        for workspace in workspaces {
            let (icon, color) = if workspace.status == "Ready" {
                (StatusIcon::SUCCESS, Color::Green)
            } else {
                (StatusIcon::WARNING, Color::Yellow)
            };

            table.add_row(vec![
                Cell::new(&workspace.workspace_name),
                Cell::new(format!("{} {}", icon, workspace.status)).fg(color),
                Cell::new(&workspace.size),
                Cell::new(&workspace.access_url),
                Cell::new(&workspace.image),
            ]);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ JupyterLab Workspaces {} ─╮\n",
            format!("[{}]", workspaces.len()).bright_black()
        ));
        output.push_str(&table.to_string());
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_volumes() {
        let renderer = TableRenderer::new();
        assert!(renderer.render_volumes(&[]).contains("No volumes found"));
    }

    #[test]
    fn test_render_single_volume() {
        let renderer = TableRenderer::new();
        let volumes = vec![VolumeInfo {
            pvc_name: "project1".to_string(),
            status: "Bound".to_string(),
            size: "10Gi".to_string(),
            storage_class: Some("ontap-flexvol".to_string()),
            source_snapshot: None,
            source_pvc: None,
        }];

        let output = renderer.render_volumes(&volumes);
        assert!(output.contains("project1"));
        assert!(output.contains("Bound"));
        assert!(output.contains("10Gi"));
        assert!(output.contains("ontap-flexvol"));
    }

    #[test]
    fn test_render_single_snapshot() {
        let renderer = TableRenderer::new();
        let snapshots = vec![SnapshotInfo {
            name: "dataops.20260823120000".to_string(),
            ready_to_use: Some(true),
            creation_time: Some("2026-08-23T12:00:00Z".to_string()),
            source_pvc: Some("project1".to_string()),
            snapshot_class: Some("csi-snapclass".to_string()),
        }];

        let output = renderer.render_snapshots(&snapshots);
        assert!(output.contains("dataops.20260823120000"));
        assert!(output.contains("Ready"));
        assert!(output.contains("project1"));
        assert!(output.contains("csi-snapclass"));
    }

    #[test]
    fn test_render_single_workspace() {
        let renderer = TableRenderer::new();
        let workspaces = vec![WorkspaceInfo {
            workspace_name: "mike".to_string(),
            status: "Ready".to_string(),
            size: "10Gi".to_string(),
            access_url: "http://10.0.0.1:30123".to_string(),
            image: "jupyter/tensorflow-notebook".to_string(),
        }];

        let output = renderer.render_workspaces(&workspaces);
        assert!(output.contains("mike"));
        assert!(output.contains("Ready"));
        assert!(output.contains("http://10.0.0.1:30123"));
        assert!(output.contains("jupyter/tensorflow-notebook"));
    }
}
