use core::fmt;
use std::convert::TryFrom;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::ser::{Serialize, Serializer};
use serde::{Deserialize, Deserializer};
use solana_pubkey::ParsePubkeyError;
use solana_pubkey::Pubkey as SolanaPubkey;

pub const PUBKEY_LEN: usize = 32;

/// A Solana public key that (de)serializes as a base58 string.
#[derive(Default, Clone, PartialEq, Eq, Hash, Copy)]
pub struct SerializablePubkey(pub SolanaPubkey);

impl SerializablePubkey {
    pub fn to_bytes(&self) -> [u8; PUBKEY_LEN] {
        self.0.to_bytes()
    }
}

impl TryFrom<&str> for SerializablePubkey {
    type Error = ParsePubkeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(SerializablePubkey(SolanaPubkey::from_str(value)?))
    }
}

impl TryFrom<&[u8]> for SerializablePubkey {
    type Error = ParsePubkeyError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; PUBKEY_LEN] = bytes.try_into().map_err(|_| ParsePubkeyError::WrongSize)?;
        Ok(SerializablePubkey::from(bytes))
    }
}

impl fmt::Display for SerializablePubkey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.0)
    }
}

impl fmt::Debug for SerializablePubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SerializablePubkey({})", self.0)
    }
}

impl From<SolanaPubkey> for SerializablePubkey {
    fn from(pubkey: SolanaPubkey) -> Self {
        SerializablePubkey(pubkey)
    }
}

impl From<[u8; PUBKEY_LEN]> for SerializablePubkey {
    fn from(bytes: [u8; PUBKEY_LEN]) -> Self {
        SerializablePubkey(SolanaPubkey::new_from_array(bytes))
    }
}

struct Base58Visitor;

impl<'de> Visitor<'de> for Base58Visitor {
    type Value = SerializablePubkey;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a base58 encoded string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        SerializablePubkey::try_from(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for SerializablePubkey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(Base58Visitor)
    }
}

impl Serialize for SerializablePubkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let base58_string = bs58::encode(self.0).into_string();
        serializer.serialize_str(&base58_string)
    }
}
