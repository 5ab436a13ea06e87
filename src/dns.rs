//! One-shot dynamic-DNS update through the external `noip-duc` client.

use crate::config::NoipConfig;
use crate::errors::AppResult;
use std::process::Command;

/// What the client printed, decoded lossily.
#[derive(Debug, Clone)]
pub struct UpdateOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Build `[sudo] <client> -g <address> --username <user> --password <pass>`.
pub fn build_command(cfg: &NoipConfig) -> Command {
    let mut cmd = if cfg.sudo {
        let mut c = Command::new("sudo");
        c.arg(&cfg.client);
        c
    } else {
        Command::new(&cfg.client)
    };
    cmd.args(["-g", &cfg.address])
        .args(["--username", &cfg.username])
        .args(["--password", &cfg.password]);
    cmd
}

/// Run the client once and wait for it. Only a failure to start it is an error.
pub fn run_update(cfg: &NoipConfig) -> AppResult<UpdateOutput> {
    let output = build_command(cfg).output()?;

    Ok(UpdateOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
