use std::{path::Path, process::Command};

use log::debug;

use crate::config::TokenEntry;
use crate::error::PatcherError;

pub const DEFAULT_SOLANA_PROGRAM: &str = "solana";
/// `solana -u` moniker for mainnet-beta.
pub const DEFAULT_CLUSTER: &str = "m";

/// Writes the JSON snapshot of an on-chain account to a file.
pub trait AccountFetcher {
    fn fetch(&self, entry: &TokenEntry, output_file: &Path) -> Result<(), PatcherError>;
}

/// Dumps accounts with `solana account <address> --output json-compact --output-file <file>`.
#[derive(Debug, Clone)]
pub struct SolanaCliFetcher {
    pub program: String,
    pub cluster: String,
}

impl Default for SolanaCliFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_SOLANA_PROGRAM, DEFAULT_CLUSTER)
    }
}

impl SolanaCliFetcher {
    pub fn new(program: impl Into<String>, cluster: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            cluster: cluster.into(),
        }
    }

    pub fn command(&self, entry: &TokenEntry, output_file: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("account")
            .arg(entry.address.to_string())
            .arg("-u")
            .arg(&self.cluster)
            .arg("--output")
            .arg("json-compact")
            .arg("--output-file")
            .arg(output_file);
        command
    }
}

impl AccountFetcher for SolanaCliFetcher {
    fn fetch(&self, entry: &TokenEntry, output_file: &Path) -> Result<(), PatcherError> {
        let fetch_error = |message: String| PatcherError::Fetch {
            symbol: entry.symbol.clone(),
            address: entry.address.to_string(),
            message,
        };

        let mut command = self.command(entry, output_file);
        debug!("Running {:?}", command);
        let output = command
            .output()
            .map_err(|e| fetch_error(format!("failed to run {}: {}", self.program, e)))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(fetch_error(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        if !stderr.trim().is_empty() {
            return Err(fetch_error(stderr.trim().to_string()));
        }
        Ok(())
    }
}
