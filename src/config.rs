use std::{fs, path::Path, path::PathBuf};

use serde_json::{Map, Value};

use crate::common::typedefs::serializable_pubkey::SerializablePubkey;
use crate::error::PatcherError;

pub const MINT_AUTHORITY_ENV: &str = "MINT_AUTHORITY";

/// Mainnet mints mocked for localnet by default.
pub const DEFAULT_TOKENS: &[(&str, &str)] = &[
    ("usdc", "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"),
    ("bonk", "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263"),
    // Bonfida
    ("fida", "EchesyfXePKdLtoiZSL8pBe8Myagyy8ZRqsACNCFGnvp"),
    // Helium
    ("hnt", "hntyVP6YFm1Hg25TN9WGLqM12b8TQmcknKrdu1oxWux"),
    // Raydium DAO
    ("ray", "4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R"),
    // Mango DAO
    ("mngo", "MangoCzJ36AjZyKwVj3VnYU4GTonjfVEnJmvvWaxLac"),
    // Orca DAO
    ("orca", "orcaEKTdK7LKz57vaAYr9QeNsVEPfiu6QeMU1kektZE"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntry {
    pub symbol: String,
    pub address: SerializablePubkey,
}

impl TokenEntry {
    pub fn new(symbol: impl Into<String>, address: SerializablePubkey) -> Self {
        Self {
            symbol: symbol.into(),
            address,
        }
    }

    fn parse(symbol: &str, address: &str) -> Result<Self, PatcherError> {
        let address = SerializablePubkey::try_from(address).map_err(|e| {
            PatcherError::Configuration(format!("Invalid address for {}: {}", symbol, e))
        })?;
        Ok(TokenEntry::new(symbol, address))
    }
}

#[derive(Debug, Clone)]
pub struct PatcherConfig {
    pub mint_authority: SerializablePubkey,
    pub output_dir: PathBuf,
    pub entries: Vec<TokenEntry>,
}

/// Checks the mint authority before anything touches the filesystem or network.
pub fn parse_mint_authority(value: Option<&str>) -> Result<SerializablePubkey, PatcherError> {
    let value = value.ok_or_else(|| {
        PatcherError::Configuration(format!(
            "{} must be set to a base58 public key",
            MINT_AUTHORITY_ENV
        ))
    })?;
    SerializablePubkey::try_from(value.trim())
        .map_err(|e| PatcherError::InvalidAuthority(format!("{}: {}", value, e)))
}

pub fn default_token_entries() -> Result<Vec<TokenEntry>, PatcherError> {
    DEFAULT_TOKENS
        .iter()
        .map(|(symbol, address)| TokenEntry::parse(symbol, address))
        .collect()
}

/// Parses a `{"symbol": "address", ...}` object, keeping the file order.
pub fn parse_token_list(json: &str) -> Result<Vec<TokenEntry>, PatcherError> {
    let tokens: Map<String, Value> = serde_json::from_str(json)
        .map_err(|e| PatcherError::Configuration(format!("Invalid token list: {}", e)))?;
    tokens
        .into_iter()
        .map(|(symbol, address)| {
            let address: SerializablePubkey = serde_json::from_value(address).map_err(|e| {
                PatcherError::Configuration(format!("Invalid address for {}: {}", symbol, e))
            })?;
            Ok(TokenEntry::new(symbol, address))
        })
        .collect()
}

pub fn load_token_list(path: &Path) -> Result<Vec<TokenEntry>, PatcherError> {
    let json = fs::read_to_string(path).map_err(|e| PatcherError::io(path, e))?;
    parse_token_list(&json)
}

/// Restricts `entries` to `symbols`. An empty filter keeps everything.
pub fn filter_entries(
    entries: Vec<TokenEntry>,
    symbols: &[String],
) -> Result<Vec<TokenEntry>, PatcherError> {
    if symbols.is_empty() {
        return Ok(entries);
    }
    if let Some(unknown) = symbols
        .iter()
        .find(|s| !entries.iter().any(|e| e.symbol.eq_ignore_ascii_case(s)))
    {
        return Err(PatcherError::Configuration(format!(
            "Unknown token symbol: {}",
            unknown
        )));
    }
    Ok(entries
        .into_iter()
        .filter(|e| symbols.iter().any(|s| e.symbol.eq_ignore_ascii_case(s)))
        .collect())
}
