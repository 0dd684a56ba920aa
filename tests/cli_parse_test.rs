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

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use clap::Parser;
    use dataops_kube::cli::commands::{
        CliArgs, CloneTarget, Commands, CreateTarget, DeleteTarget, ListTarget, RestoreTarget,
    };

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(args)
    }

    #[test]
    fn test_no_arguments_prints_help() {
        let err = parse(&["dataops-kube"]).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }

    #[test]
    fn test_help_flag() {
        let err = parse(&["dataops-kube", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = parse(&["dataops-kube", "create", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_create_volume_long_flags() {
        let args = parse(&[
            "dataops-kube",
            "create",
            "volume",
            "--pvc-name=project1",
            "--size=10Gi",
        ])
        .unwrap();

        match args.command {
            Commands::Create {
                target: CreateTarget::Volume(v),
            } => {
                assert_eq!(v.pvc_name, "project1");
                assert_eq!(v.size, "10Gi");
                assert_eq!(v.namespace, "default");
                assert!(v.storage_class.is_none());
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_create_volume_short_flags() {
        let args = parse(&[
            "dataops-kube",
            "create",
            "pvc",
            "-p",
            "datasets",
            "-s",
            "2Ti",
            "-n",
            "team1",
            "-c",
            "ontap-flexgroup",
        ])
        .unwrap();

        match args.command {
            Commands::Create {
                target: CreateTarget::Volume(v),
            } => {
                assert_eq!(v.pvc_name, "datasets");
                assert_eq!(v.size, "2Ti");
                assert_eq!(v.namespace, "team1");
                assert_eq!(v.storage_class.as_deref(), Some("ontap-flexgroup"));
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_create_volume_missing_size() {
        let err = parse(&["dataops-kube", "create", "volume", "-p", "project1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_clone_volume_requires_a_source() {
        let err = parse(&["dataops-kube", "clone", "volume", "-p", "clone1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_clone_volume_rejects_both_sources() {
        let err = parse(&[
            "dataops-kube",
            "clone",
            "volume",
            "-p",
            "clone1",
            "-s",
            "snap1",
            "-v",
            "project1",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_clone_volume_from_snapshot() {
        let args = parse(&[
            "dataops-kube",
            "clone",
            "volume",
            "-p",
            "clone1",
            "-s",
            "snap1",
        ])
        .unwrap();

        match args.command {
            Commands::Clone {
                target: CloneTarget::Volume(v),
            } => {
                assert_eq!(v.new_pvc_name, "clone1");
                assert_eq!(v.source_snapshot_name.as_deref(), Some("snap1"));
                assert!(v.source_pvc_name.is_none());
                assert_eq!(v.volume_snapshot_class, "csi-snapclass");
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_create_jupyterlab_defaults() {
        let args = parse(&[
            "dataops-kube",
            "create",
            "jupyterlab",
            "-w",
            "mike",
            "-s",
            "10Gi",
        ])
        .unwrap();

        match args.command {
            Commands::Create {
                target: CreateTarget::Jupyterlab(j),
            } => {
                assert_eq!(j.workspace_name, "mike");
                assert_eq!(j.size, "10Gi");
                assert_eq!(j.image, "jupyter/tensorflow-notebook");
                assert_eq!(j.namespace, "default");
                assert!(!j.load_balancer);
                assert!(j.mount_pvc.is_none());
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_clone_jupyterlab_from_workspace() {
        let args = parse(&[
            "dataops-kube",
            "clone",
            "jupyter",
            "-w",
            "mike-clone",
            "-j",
            "mike",
        ])
        .unwrap();

        match args.command {
            Commands::Clone {
                target: CloneTarget::Jupyterlab(j),
            } => {
                assert_eq!(j.new_workspace_name, "mike-clone");
                assert_eq!(j.source_workspace_name.as_deref(), Some("mike"));
                assert!(j.source_snapshot_name.is_none());
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_delete_verb_aliases() {
        for verb in ["delete", "del", "rm"] {
            let args = parse(&["dataops-kube", verb, "volume", "-p", "project1", "-f"]).unwrap();
            match args.command {
                Commands::Delete {
                    target: DeleteTarget::Volume(v),
                } => {
                    assert_eq!(v.pvc_name, "project1");
                    assert!(v.force);
                    assert!(!v.preserve_snapshots);
                }
                other => panic!("unexpected parse: {:?}", other),
            }
        }
    }

    #[test]
    fn test_volume_target_aliases() {
        for target in ["volume", "vol", "pvc", "persistentvolumeclaim"] {
            let args =
                parse(&["dataops-kube", "create", target, "-p", "p1", "-s", "1Gi"]).unwrap();
            assert!(matches!(
                args.command,
                Commands::Create {
                    target: CreateTarget::Volume(_)
                }
            ));
        }
    }

    #[test]
    fn test_list_verb_and_plural_targets() {
        for (verb, target) in [
            ("list", "volumes"),
            ("ls", "vols"),
            ("list", "pvcs"),
            ("ls", "volume"),
        ] {
            let args = parse(&["dataops-kube", verb, target]).unwrap();
            assert!(matches!(
                args.command,
                Commands::List {
                    target: ListTarget::Volumes(_)
                }
            ));
        }

        let args = parse(&["dataops-kube", "list", "volume-snapshots", "-p", "project1"]).unwrap();
        match args.command {
            Commands::List {
                target: ListTarget::VolumeSnapshots(s),
            } => assert_eq!(s.pvc_name.as_deref(), Some("project1")),
            other => panic!("unexpected parse: {:?}", other),
        }

        let args = parse(&["dataops-kube", "list", "jupyterlabs"]).unwrap();
        assert!(matches!(
            args.command,
            Commands::List {
                target: ListTarget::Jupyterlabs(_)
            }
        ));

        let args = parse(&["dataops-kube", "ls", "jupyterlab-snapshots", "-w", "mike"]).unwrap();
        match args.command {
            Commands::List {
                target: ListTarget::JupyterlabSnapshots(s),
            } => assert_eq!(s.workspace_name.as_deref(), Some("mike")),
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_snapshot_target_aliases() {
        for target in ["volume-snapshot", "volumesnapshot"] {
            let args = parse(&["dataops-kube", "create", target, "-p", "project1"]).unwrap();
            assert!(matches!(
                args.command,
                Commands::Create {
                    target: CreateTarget::VolumeSnapshot(_)
                }
            ));
        }

        for target in ["jupyterlab-snapshot", "jupyterlabsnapshot", "jupyter-snapshot"] {
            let args = parse(&["dataops-kube", "create", target, "-w", "mike"]).unwrap();
            assert!(matches!(
                args.command,
                Commands::Create {
                    target: CreateTarget::JupyterlabSnapshot(_)
                }
            ));
        }
    }

    #[test]
    fn test_restore_volume_snapshot() {
        let args = parse(&[
            "dataops-kube",
            "restore",
            "volume-snapshot",
            "-s",
            "snap1",
            "-f",
        ])
        .unwrap();

        match args.command {
            Commands::Restore {
                target: RestoreTarget::VolumeSnapshot(r),
            } => {
                assert_eq!(r.snapshot_name, "snap1");
                assert!(r.force);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_restore_jupyterlab_snapshot() {
        let args = parse(&[
            "dataops-kube",
            "restore",
            "jupyterlab-snapshot",
            "-s",
            "dataops.20260823120000",
        ])
        .unwrap();

        assert!(matches!(
            args.command,
            Commands::Restore {
                target: RestoreTarget::JupyterlabSnapshot(_)
            }
        ));
    }

    #[test]
    fn test_version_verb_and_alias() {
        for verb in ["version", "v"] {
            let args = parse(&["dataops-kube", verb]).unwrap();
            assert!(matches!(args.command, Commands::Version));
        }
    }

    #[test]
    fn test_delete_preserve_snapshots() {
        let args = parse(&[
            "dataops-kube",
            "delete",
            "jupyterlab",
            "-w",
            "mike",
            "-f",
            "-s",
        ])
        .unwrap();

        match args.command {
            Commands::Delete {
                target: DeleteTarget::Jupyterlab(j),
            } => {
                assert_eq!(j.workspace_name, "mike");
                assert!(j.force);
                assert!(j.preserve_snapshots);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_target_is_an_error() {
        let err = parse(&["dataops-kube", "create", "bucket"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }
}
