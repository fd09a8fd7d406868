#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn staffbook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("staffbook").unwrap();
    cmd.env_remove("STAFFBOOK_ROOT");
    cmd.env_remove("STAFFBOOK_LOG");
    cmd
}

/// Command already pointed at an initialized roster
pub fn in_roster(root: &Path) -> Command {
    let mut cmd = staffbook_cmd();
    cmd.current_dir(root);
    cmd
}

pub fn init_roster(root: &Path) {
    staffbook_cmd().arg("init").arg(root).assert().success();
}
