//! Byte layout of an SPL token mint account.
//!
//! Layout of the first 36 bytes:
//! - mint_authority COption tag (4 bytes)
//! - mint_authority pubkey (32 bytes)
use std::fmt;

use super::typedefs::serializable_pubkey::PUBKEY_LEN;

/// A named fixed-width region inside a binary account payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteField {
    pub name: &'static str,
    pub offset: usize,
    pub len: usize,
}

impl ByteField {
    pub const fn new(name: &'static str, offset: usize, len: usize) -> Self {
        Self { name, offset, len }
    }

    /// Exclusive end offset.
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.end()
    }
}

impl fmt::Display for ByteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}..{}]", self.name, self.offset, self.end())
    }
}

pub const MINT_AUTHORITY_OPTION_LEN: usize = 4;

/// Mint authority pubkey offset range `[4..36]` (32 bytes).
pub const MINT_AUTHORITY_FIELD: ByteField =
    ByteField::new("mint_authority", MINT_AUTHORITY_OPTION_LEN, PUBKEY_LEN);
