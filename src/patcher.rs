use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::common::account_layout::{ByteField, MINT_AUTHORITY_FIELD};
use crate::common::typedefs::bs64_string::Base64String;
use crate::common::typedefs::serializable_pubkey::SerializablePubkey;
use crate::config::PatcherConfig;
use crate::error::PatcherError;
use crate::fetcher::AccountFetcher;
use crate::snapshot::AccountSnapshot;

/// Overwrites `field` inside `data` with `value`. Bytes outside the field and the payload length
/// are left unchanged.
pub fn patch_field(data: &mut [u8], field: ByteField, value: &[u8]) -> Result<(), PatcherError> {
    if value.len() != field.len {
        return Err(PatcherError::FieldWidth {
            field: field.name,
            expected: field.len,
            actual: value.len(),
        });
    }
    if data.len() < field.end() {
        return Err(PatcherError::MalformedPayload {
            field: field.name,
            required: field.end(),
            actual: data.len(),
        });
    }
    data[field.range()].copy_from_slice(value);
    Ok(())
}

pub fn read_mint_authority(data: &[u8]) -> Result<SerializablePubkey, PatcherError> {
    let field = MINT_AUTHORITY_FIELD;
    data.get(field.range())
        .and_then(|bytes| SerializablePubkey::try_from(bytes).ok())
        .ok_or_else(|| PatcherError::MalformedPayload {
            field: field.name,
            required: field.end(),
            actual: data.len(),
        })
}

/// Replaces the mint authority stored in the snapshot's account data.
pub fn patch_snapshot(
    snapshot: &mut AccountSnapshot,
    authority: &SerializablePubkey,
) -> Result<(), PatcherError> {
    let mut data = snapshot.decode_data()?;
    patch_field(&mut data, MINT_AUTHORITY_FIELD, &authority.to_bytes())?;
    snapshot.set_data(Base64String::encode(&data))
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub patched: Vec<PathBuf>,
}

pub struct AccountPatcher<F: AccountFetcher> {
    config: PatcherConfig,
    fetcher: F,
}

impl<F: AccountFetcher> AccountPatcher<F> {
    pub fn new(config: PatcherConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &PatcherConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn fixture_path(&self, symbol: &str) -> PathBuf {
        self.config.output_dir.join(format!("{}.json", symbol))
    }

    /// Fetches and patches every configured entry in order, stopping at the first failure.
    /// Entries finished before a failure stay patched.
    pub fn run(&self) -> Result<PatchReport, PatcherError> {
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|e| PatcherError::io(output_dir, e))?;

        let mut report = PatchReport::default();
        for entry in &self.config.entries {
            let path = self.fixture_path(&entry.symbol);
            self.fetcher.fetch(entry, &path)?;

            info!(
                "Setting mock {} mint authority to {}",
                entry.symbol.to_uppercase(),
                self.config.mint_authority
            );
            self.patch_file(&path)?;
            info!("...done");

            report.patched.push(path);
        }
        Ok(report)
    }

    fn patch_file(&self, path: &Path) -> Result<(), PatcherError> {
        let mut snapshot = AccountSnapshot::load(path)?;
        patch_snapshot(&mut snapshot, &self.config.mint_authority)?;
        snapshot.save()
    }
}
