#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};

/// Command with the ClickUp environment cleared so each test controls
/// exactly which variables are set.
pub fn dl() -> Command {
    let mut cmd = cargo_bin_cmd!("daylog");
    cmd.env_remove("CLICKUP_TOKEN");
    cmd.env_remove("CLICKUP_TEAM");
    cmd.env_remove("CLICKUP_API_URL");
    cmd
}
