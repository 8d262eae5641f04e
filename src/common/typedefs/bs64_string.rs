use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Base64String(pub String);

impl Base64String {
    pub fn encode(bytes: &[u8]) -> Self {
        Base64String(STANDARD.encode(bytes))
    }

    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.0)
    }
}

impl From<&str> for Base64String {
    fn from(value: &str) -> Self {
        Base64String(value.to_string())
    }
}
