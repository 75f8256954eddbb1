//! Character domain model.
//!
//! These are the validated, API-independent shapes the orchestrator passes
//! around. Wire formats live in [`crate::api::wire`] and convert into these.

use crate::domain::error::{LookupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated nickname to search for.
///
/// Construction trims surrounding whitespace and rejects input that is empty
/// afterwards, so holding a `SearchQuery` means a request may be issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    nickname: String,
}

impl SearchQuery {
    /// Parses raw user input into a query.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::EmptyInput`] if the input is empty or whitespace only.
    ///
    /// # Examples
    ///
    /// ```
    /// use maplestat::domain::SearchQuery;
    ///
    /// assert_eq!(SearchQuery::parse("  Alice ").unwrap().nickname(), "Alice");
    /// assert!(SearchQuery::parse("   ").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let nickname = input.trim();
        if nickname.is_empty() {
            return Err(LookupError::EmptyInput);
        }
        Ok(Self {
            nickname: nickname.to_string(),
        })
    }

    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }
}

/// Opaque per-character identifier (`ocid`) issued by the identity endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    #[must_use]
    pub fn new(ocid: impl Into<String>) -> Self {
        Self(ocid.into())
    }

    #[must_use]
    pub fn ocid(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Basic character attributes for one day's snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub image_url: String,
    pub name: String,
    pub world_name: String,
    pub level: u32,
    pub class_name: String,
}

/// One equipped item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentItem {
    /// Gear position, e.g. `Weapon` or `Hat`.
    pub slot_name: String,
    pub item_name: String,
}

impl EquipmentItem {
    #[must_use]
    pub fn new(slot_name: impl Into<String>, item_name: impl Into<String>) -> Self {
        Self {
            slot_name: slot_name.into(),
            item_name: item_name.into(),
        }
    }
}

/// Equipped items in the order the API listed them.
///
/// Order is display order only; no slot ordering is imposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentRecord(Vec<EquipmentItem>);

impl EquipmentRecord {
    #[must_use]
    pub const fn new(items: Vec<EquipmentItem>) -> Self {
        Self(items)
    }

    #[must_use]
    pub fn items(&self) -> &[EquipmentItem] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EquipmentItem> {
        self.0.iter()
    }
}

impl FromIterator<EquipmentItem> for EquipmentRecord {
    fn from_iter<I: IntoIterator<Item = EquipmentItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EquipmentRecord {
    type Item = &'a EquipmentItem;
    type IntoIter = std::slice::Iter<'a, EquipmentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
