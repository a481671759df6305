//! End-to-end tests for the nugoget CLI
//!
//! These tests verify:
//! - Exit codes for malformed locks, missing dotnet and failing commands
//! - Dry-run mode never runs `dotnet add`
//! - Live mode runs `dotnet add` once per outdated package
//!
//! A fake `dotnet` shell script is placed first on PATH; it prints a canned
//! report and appends every invocation to a log file.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const EXIT_MALFORMED_LOCK: i32 = 3;
const EXIT_COMMAND_FAILED: i32 = 4;

#[test]
fn test_malformed_lock_exits_before_looking_for_dotnet() {
    let empty_path = TempDir::new().unwrap();

    cargo_bin_cmd!("nugoget")
        .env("PATH", empty_path.path())
        .env("NO_COLOR", "1")
        .args(["update", "--lock", "Foo#1.0.0", "--lock", "BadLock"])
        .assert()
        .code(EXIT_MALFORMED_LOCK)
        .stderr(predicate::str::contains("invalid lock 'BadLock'"));
}

#[test]
fn test_missing_dotnet_fails() {
    let empty_path = TempDir::new().unwrap();

    cargo_bin_cmd!("nugoget")
        .env("PATH", empty_path.path())
        .env("NO_COLOR", "1")
        .args(["update", "--dry-run"])
        .assert()
        .code(EXIT_COMMAND_FAILED)
        .stderr(predicate::str::contains("could not find 'dotnet'"));
}

#[test]
fn test_help_lists_update_command() {
    cargo_bin_cmd!("nugoget")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("update"));
}

#[cfg(unix)]
mod fake_dotnet {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    const REPORT: &str = "\
Project `Api` has the following updates to its packages
   [net6.0]: 
   Top-level Package      Requested   Resolved   Latest
   > Foo                  1.0.0       1.0.0      2.0.0
   > Current              3.0.0       3.0.0      3.0.0

The given project `Worker` has no updates given the current sources.
";

    struct FakeDotnet {
        dir: TempDir,
    }

    impl FakeDotnet {
        /// `list_status` is the exit code of the listing, `failing_package`
        /// makes `dotnet add` fail for that package
        fn new(list_status: i32, failing_package: &str) -> Self {
            let dir = TempDir::new().unwrap();
            let bin = dir.path().join("bin");
            fs::create_dir(&bin).unwrap();
            fs::write(dir.path().join("report.txt"), REPORT).unwrap();

            let script = format!(
                "#!/bin/sh\n\
                 echo \"$@\" >> '{log}'\n\
                 case \"$1\" in\n\
                 list)\n\
                   cat '{report}'\n\
                   exit {list_status}\n\
                   ;;\n\
                 add)\n\
                   if [ \"$4\" = '{failing}' ]; then echo 'error: NU1102 unable to find package'; exit 1; fi\n\
                   echo \"info : PackageReference for package '$4' version '$6' added\"\n\
                   ;;\n\
                 esac\n",
                log = dir.path().join("calls.log").display(),
                report = dir.path().join("report.txt").display(),
                list_status = list_status,
                failing = failing_package,
            );
            let script_path = bin.join("dotnet");
            fs::write(&script_path, script).unwrap();
            fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755)).unwrap();

            Self { dir }
        }

        fn path_env(&self) -> String {
            format!("{}:/usr/bin:/bin", self.dir.path().join("bin").display())
        }

        fn workdir(&self) -> &Path {
            self.dir.path()
        }

        fn log_path(&self) -> PathBuf {
            self.dir.path().join("calls.log")
        }

        fn calls(&self) -> Vec<String> {
            fs::read_to_string(self.log_path())
                .unwrap_or_default()
                .lines()
                .map(str::to_string)
                .collect()
        }

        fn add_calls(&self) -> Vec<String> {
            self.calls()
                .into_iter()
                .filter(|c| c.starts_with("add "))
                .collect()
        }
    }

    fn nugoget(fake: &FakeDotnet) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("nugoget");
        cmd.env("PATH", fake.path_env())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn test_dry_run_does_not_add_packages() {
        let fake = FakeDotnet::new(0, "");

        nugoget(&fake)
            .args(["update", "--dry-run"])
            .arg(fake.workdir())
            .assert()
            .success()
            .stdout(predicate::str::contains("No changes will be made, dry run enabled"))
            .stdout(predicate::str::contains("Checking for updates in Api"))
            .stdout(predicate::str::contains("Checking for updates in Worker"))
            .stdout(predicate::str::contains("1 updates found"))
            .stdout(predicate::str::contains("Foo will be updated from 1.0.0 to 2.0.0"))
            .stdout(predicate::str::contains("Current will be updated").not());

        assert_eq!(
            fake.calls(),
            vec!["list package --outdated --highest-minor".to_string()]
        );
    }

    #[test]
    fn test_live_run_adds_each_outdated_package_once() {
        let fake = FakeDotnet::new(0, "");

        nugoget(&fake)
            .arg("update")
            .arg(fake.workdir())
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "info : PackageReference for package 'Foo' version '2.0.0' added",
            ));

        assert_eq!(fake.add_calls(), vec!["add Api package Foo -v 2.0.0".to_string()]);
    }

    #[test]
    fn test_locked_package_is_not_upgraded() {
        let fake = FakeDotnet::new(0, "");

        nugoget(&fake)
            .args(["update", "--lock", "Foo#1.5.0"])
            .arg(fake.workdir())
            .assert()
            .success()
            .stdout(predicate::str::contains("2 updates found"))
            .stdout(predicate::str::contains("will be updated").not());

        assert!(fake.add_calls().is_empty());
    }

    #[test]
    fn test_scope_flags_select_listing_arguments() {
        let fake = FakeDotnet::new(0, "");
        nugoget(&fake)
            .args(["update", "--dry-run", "--patch"])
            .arg(fake.workdir())
            .assert()
            .success();

        let fake_major = FakeDotnet::new(0, "");
        nugoget(&fake_major)
            .args(["update", "--dry-run", "--major", "--patch"])
            .arg(fake_major.workdir())
            .assert()
            .success()
            .stdout(predicate::str::contains("Will do major upgrades!"));

        assert_eq!(
            fake.calls(),
            vec!["list package --outdated --highest-patch".to_string()]
        );
        assert_eq!(fake_major.calls(), vec!["list package --outdated".to_string()]);
    }

    #[test]
    fn test_failing_report_exits_with_command_failure() {
        let fake = FakeDotnet::new(1, "");

        nugoget(&fake)
            .arg("update")
            .arg(fake.workdir())
            .assert()
            .code(EXIT_COMMAND_FAILED)
            .stdout(predicate::str::contains("updates found").not());

        assert!(fake.add_calls().is_empty());
    }

    #[test]
    fn test_failing_add_exits_with_command_failure() {
        let fake = FakeDotnet::new(0, "Foo");

        nugoget(&fake)
            .arg("update")
            .arg(fake.workdir())
            .assert()
            .code(EXIT_COMMAND_FAILED)
            .stderr(predicate::str::contains("NU1102"));

        assert_eq!(fake.add_calls().len(), 1);
    }

    #[test]
    fn test_json_summary() {
        let fake = FakeDotnet::new(0, "");

        let assert = nugoget(&fake)
            .args(["update", "--dry-run", "--json"])
            .arg(fake.workdir())
            .assert()
            .success()
            .stderr(predicate::str::contains("Foo will be updated from 1.0.0 to 2.0.0"));

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(json["dry_run"], true);
        assert_eq!(json["summary"]["updates_found"], 1);
        assert_eq!(json["planned"][0]["project"], "Api");
        assert_eq!(json["planned"][0]["to"], "2.0.0");
        assert_eq!(json["projects"].as_array().unwrap().len(), 2);
    }
}
