//! Account ID - the fixed-format 64-bit game account identifier
//!
//! The textual form is exactly 17 ASCII digits. Anything else is rejected
//! at the boundary, before any network or store call is made.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Length of the textual account id form.
const ACCOUNT_ID_DIGITS: usize = 17;

/// 64-bit game account identifier, the unique key of an unban request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(i64);

impl AccountId {
    /// Create an AccountId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from the textual form: exactly 17 ASCII digits.
    pub fn parse(s: &str) -> Result<Self, AccountIdParseError> {
        if s.len() != ACCOUNT_ID_DIGITS || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AccountIdParseError::InvalidFormat);
        }
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| AccountIdParseError::InvalidFormat)
    }
}

/// Error when parsing an AccountId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccountIdParseError {
    #[error("account id must be a 17-digit number")]
    InvalidFormat,
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = AccountIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

// Serialized as a string: the id exceeds the integer range JSON consumers
// can handle losslessly.
impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let id = AccountId::parse("76561198012345678").unwrap();
        assert_eq!(id.into_inner(), 76_561_198_012_345_678);
        assert_eq!(id.to_string(), "76561198012345678");
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            AccountId::parse("1234567890123456"),
            Err(AccountIdParseError::InvalidFormat)
        );
        assert_eq!(
            AccountId::parse("123456789012345678"),
            Err(AccountIdParseError::InvalidFormat)
        );
        assert_eq!(AccountId::parse(""), Err(AccountIdParseError::InvalidFormat));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert_eq!(
            AccountId::parse("7656119801234567x"),
            Err(AccountIdParseError::InvalidFormat)
        );
        assert_eq!(
            AccountId::parse(" 7656119801234567"),
            Err(AccountIdParseError::InvalidFormat)
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let id = AccountId::parse("76561198012345678").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"76561198012345678\"");
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
