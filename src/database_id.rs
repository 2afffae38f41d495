//! Database ID type definition.

use std::{fmt::Display, str::FromStr};

use bson::oid::ObjectId;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// The number of hex digits in the text form of a [DatabaseId].
pub const DATABASE_ID_LENGTH: usize = 24;

/// A store-generated identifier for users, categories and blogs.
///
/// IDs are 12-byte object IDs and are always exchanged with clients as 24 hex
/// digits. Parsing is the only way to turn client input into an ID, so a
/// malformed ID can never be used in a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatabaseId(ObjectId);

/// Alias for IDs that refer to a user.
pub type UserId = DatabaseId;
/// Alias for IDs that refer to a category.
pub type CategoryId = DatabaseId;
/// Alias for IDs that refer to a blog.
pub type BlogId = DatabaseId;

/// The error returned when a string is not a well-formed [DatabaseId].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" is not a valid database ID")]
pub struct InvalidDatabaseId(pub String);

impl DatabaseId {
    /// Generate a fresh, unique ID.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Parse an ID from its 24 hex digit text form.
    ///
    /// # Errors
    ///
    /// Returns [InvalidDatabaseId] if `raw_id` is not exactly 24 hex digits.
    pub fn parse(raw_id: &str) -> Result<Self, InvalidDatabaseId> {
        if raw_id.len() != DATABASE_ID_LENGTH {
            return Err(InvalidDatabaseId(raw_id.to_owned()));
        }

        ObjectId::parse_str(raw_id)
            .map(Self)
            .map_err(|_| InvalidDatabaseId(raw_id.to_owned()))
    }

    /// The lowercase hex form of the ID.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl Display for DatabaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl FromStr for DatabaseId {
    type Err = InvalidDatabaseId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DatabaseId {
    type Error = InvalidDatabaseId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DatabaseId> for String {
    fn from(value: DatabaseId) -> Self {
        value.to_hex()
    }
}

impl ToSql for DatabaseId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_hex()))
    }
}

impl FromSql for DatabaseId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw_id = value.as_str()?;

        Self::parse(raw_id).map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

#[cfg(test)]
mod database_id_tests {
    use super::{DatabaseId, InvalidDatabaseId};

    #[test]
    fn generated_ids_are_unique() {
        let first = DatabaseId::generate();
        let second = DatabaseId::generate();

        assert_ne!(first, second);
    }

    #[test]
    fn parse_accepts_generated_id() {
        let id = DatabaseId::generate();

        assert_eq!(DatabaseId::parse(&id.to_hex()), Ok(id));
    }

    #[test]
    fn parse_accepts_uppercase_hex() {
        let got = DatabaseId::parse("5F1D7A2B3C4D5E6F7A8B9C0D");

        assert!(got.is_ok());
    }

    #[test]
    fn parse_rejects_wrong_length() {
        for raw_id in ["", "abc", "5f1d7a2b3c4d5e6f7a8b9c0", "5f1d7a2b3c4d5e6f7a8b9c0d1"] {
            assert_eq!(
                DatabaseId::parse(raw_id),
                Err(InvalidDatabaseId(raw_id.to_owned())),
                "want {raw_id:?} to be rejected"
            );
        }
    }

    #[test]
    fn parse_rejects_twelve_character_strings() {
        // Twelve arbitrary bytes are a valid object ID in some drivers, not here.
        assert!(DatabaseId::parse("aaaaaaaaaaaa").is_err());
    }

    #[test]
    fn parse_rejects_non_hex_characters() {
        assert!(DatabaseId::parse("5f1d7a2b3c4d5e6f7a8b9c0z").is_err());
    }

    #[test]
    fn serializes_as_hex_string() {
        let id = DatabaseId::parse("5f1d7a2b3c4d5e6f7a8b9c0d").unwrap();

        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json, "\"5f1d7a2b3c4d5e6f7a8b9c0d\"");
        assert_eq!(serde_json::from_str::<DatabaseId>(&json).unwrap(), id);
    }
}
