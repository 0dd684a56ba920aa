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

//! Command-line entry point: parse, dispatch, and map errors to exit codes.

pub mod commands;
pub mod confirm;
pub mod display;
pub mod jupyterlab;
pub mod volume;

use clap::error::ErrorKind;
use clap::Parser;
use commands::{
    CliArgs, CloneTarget, Commands, CreateTarget, DeleteTarget, ListTarget, RestoreTarget,
};
use tracing::debug;

use crate::shared::error::Result;

/// Parse the command line and run the selected command, returning the
/// process exit code. Help and version requests exit 0; command line
/// errors exit 1; configuration, connection, and validation errors exit 1;
/// anything else exits 2.
pub async fn run() -> i32 {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            // clap routes help to stdout and errors to stderr
            let _ = e.print();
            return code;
        }
    };

    match dispatch(args).await {
        Ok(()) => 0,
        Err(e) if e.is_declared() => {
            eprintln!("Error: {}", e);
            1
        }
        Err(e) => {
            debug!("unexpected failure: {:?}", e);
            eprintln!("Unexpected error: {:?}", e);
            2
        }
    }
}

async fn dispatch(args: CliArgs) -> Result<()> {
    match args.command {
        Commands::Clone { target } => match target {
            CloneTarget::Volume(args) => volume::execute_clone_volume(args).await,
            CloneTarget::Jupyterlab(args) => jupyterlab::execute_clone_jupyter_lab(args).await,
        },
        Commands::Create { target } => match target {
            CreateTarget::Volume(args) => volume::execute_create_volume(args).await,
            CreateTarget::VolumeSnapshot(args) => {
                volume::execute_create_volume_snapshot(args).await
            }
            CreateTarget::Jupyterlab(args) => {
                jupyterlab::execute_create_jupyter_lab(args).await
            }
            CreateTarget::JupyterlabSnapshot(args) => {
                jupyterlab::execute_create_jupyter_lab_snapshot(args).await
            }
        },
        Commands::Delete { target } => match target {
            DeleteTarget::Volume(args) => volume::execute_delete_volume(args).await,
            DeleteTarget::VolumeSnapshot(args) => {
                volume::execute_delete_volume_snapshot(args).await
            }
            DeleteTarget::Jupyterlab(args) => {
                jupyterlab::execute_delete_jupyter_lab(args).await
            }
            DeleteTarget::JupyterlabSnapshot(args) => {
                jupyterlab::execute_delete_jupyter_lab_snapshot(args).await
            }
        },
        Commands::List { target } => match target {
            ListTarget::Volumes(args) => volume::execute_list_volumes(args).await,
            ListTarget::VolumeSnapshots(args) => {
                volume::execute_list_volume_snapshots(args).await
            }
            ListTarget::Jupyterlabs(args) => {
                jupyterlab::execute_list_jupyter_labs(args).await
            }
            ListTarget::JupyterlabSnapshots(args) => {
                jupyterlab::execute_list_jupyter_lab_snapshots(args).await
            }
        },
        Commands::Restore { target } => match target {
            RestoreTarget::VolumeSnapshot(args) => {
                volume::execute_restore_volume_snapshot(args).await
            }
            RestoreTarget::JupyterlabSnapshot(args) => {
                jupyterlab::execute_restore_jupyter_lab_snapshot(args).await
            }
        },
        Commands::Version => {
            println!(
                "DataOps Toolkit for Kubernetes - version {}",
                env!("CARGO_PKG_VERSION")
            );
            Ok(())
        }
    }
}
