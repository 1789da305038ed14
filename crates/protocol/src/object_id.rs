//! The store's canonical record identifier: 12 bytes, rendered as 24
//! lowercase hex characters.
//!
//! Every record and every tenant (company) is addressed by one of these.
//! Parsing is the only validation the service applies to an inbound
//! `companyId`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObjectIdError {
    #[error("invalid id length {0} (expected 24 hex characters)")]
    InvalidLength(usize),

    #[error("invalid hex character {0:?}")]
    InvalidCharacter(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Parses the 24-character lowercase/uppercase hex form.
    pub fn parse(raw: &str) -> Result<Self, ObjectIdError> {
        if raw.len() != 24 {
            return Err(ObjectIdError::InvalidLength(raw.len()));
        }
        let mut bytes = [0u8; 12];
        let mut chars = raw.chars();
        for byte in &mut bytes {
            let hi = hex_value(chars.next().unwrap_or('\0'))?;
            let lo = hex_value(chars.next().unwrap_or('\0'))?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }
}

fn hex_value(c: char) -> Result<u8, ObjectIdError> {
    c.to_digit(16)
        .map(|v| v as u8)
        .ok_or(ObjectIdError::InvalidCharacter(c))
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_and_display_roundtrip() {
        let id = ObjectId::parse("65a1b2c3d4e5f60718293a4b").unwrap();
        assert_eq!(id.to_string(), "65a1b2c3d4e5f60718293a4b");
    }

    #[test]
    fn parse_accepts_uppercase_but_renders_lowercase() {
        let id = ObjectId::parse("65A1B2C3D4E5F60718293A4B").unwrap();
        assert_eq!(id.to_string(), "65a1b2c3d4e5f60718293a4b");
    }

    #[test]
    fn parse_rejects_bad_length_and_bad_chars() {
        assert_eq!(
            ObjectId::parse("abc"),
            Err(ObjectIdError::InvalidLength(3))
        );
        assert_eq!(
            ObjectId::parse("zza1b2c3d4e5f60718293a4b"),
            Err(ObjectIdError::InvalidCharacter('z'))
        );
    }

    #[test]
    fn serde_uses_hex_string_form() {
        let id = ObjectId::parse("65a1b2c3d4e5f60718293a4b").unwrap();
        let raw = serde_json::to_string(&id).unwrap();
        assert_eq!(raw, "\"65a1b2c3d4e5f60718293a4b\"");
        let back: ObjectId = serde_json::from_str(&raw).unwrap();
        assert_eq!(id, back);
    }
}
