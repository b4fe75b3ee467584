use std::{process::Command, str::FromStr};

use alloy::primitives::Address;
use eyre::{bail, Context, ContextCompat, Result};
use regex::Regex;

use crate::system::{env, DEPLOYER_ADDRESS};

/// Deploys the contract of the crate the test runs in with
/// `cargo stylus deploy`.
pub struct Deployer {
    rpc_url: String,
    private_key: String,
    ctor_args: Option<Vec<String>>,
}

impl Deployer {
    /// Creates a deployer that signs with `private_key` on `rpc_url`.
    #[must_use]
    pub fn new(rpc_url: String, private_key: String) -> Self {
        Self { rpc_url, private_key, ctor_args: None }
    }

    /// Arguments passed to the Solidity constructor, in declaration order.
    #[must_use]
    pub fn with_constructor(mut self, ctor_args: Vec<String>) -> Self {
        self.ctor_args = Some(ctor_args);
        self
    }

    /// Deploys and activates the `#[entrypoint]` contract of the current
    /// crate and returns its address.
    ///
    /// # Errors
    ///
    /// May fail if `cargo stylus` is not installed, if [`DEPLOYER_ADDRESS`]
    /// is unset while constructor arguments are given, or if the deployment
    /// reverts. The error message then contains the command's output,
    /// including the revert data.
    pub fn deploy(self) -> Result<Address> {
        let mut command = Command::new("cargo");
        command
            .args(["stylus", "deploy"])
            .args(["-e", &self.rpc_url])
            .args(["--private-key", &self.private_key])
            .arg("--no-verify");

        if let Some(ctor_args) = &self.ctor_args {
            let deployer_address = env(DEPLOYER_ADDRESS)?;
            command
                .args(["--deployer-address", &deployer_address])
                .arg("--constructor-args")
                .args(ctor_args);
        }

        let output = command
            .output()
            .wrap_err("failed to execute `cargo stylus deploy`")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("deployment failed: {stderr}");
        }

        parse_contract_address(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Extracts the deployed contract address from `cargo stylus deploy` output.
///
/// The address may be wrapped in ANSI color codes.
fn parse_contract_address(stdout: &str) -> Result<Address> {
    let regex = Regex::new(
        r"deployed code at address:\s*(?:\x1B\[[0-9;]*[a-zA-Z])*(0x[a-fA-F0-9]{40})",
    )
    .wrap_err("failed to create contract address regex")?;

    let address = regex
        .captures(stdout)
        .and_then(|captures| captures.get(1))
        .wrap_err(format!("no contract address found in output {stdout}"))?
        .as_str();

    Address::from_str(address)
        .wrap_err(format!("failed to parse contract address {address}"))
}
