// SPDX-License-Identifier: MPL-2.0
//! Static avatar catalog.
//!
//! The catalog is an ordered, read-only list of [`AvatarRecord`]s. It is built
//! once at startup, either from the JSON file bundled into the binary or from
//! a user-provided file (`--catalog <path>`), and never changes afterwards.
//!
//! URLs are not required to be unique. Lookups by URL always resolve to the
//! first matching record.

mod record;

pub use record::{AvatarRecord, Gender};

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/data/"]
struct BundledData;

/// Name of the bundled catalog inside `assets/data/`.
const BUNDLED_FILE: &str = "avatars.json";

/// Ordered, immutable collection of avatar records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<AvatarRecord>,
}

impl Catalog {
    #[must_use]
    pub fn new(records: Vec<AvatarRecord>) -> Self {
        Self { records }
    }

    /// Parses a catalog from a JSON array of `{name, url, gender}` objects.
    pub fn from_json(content: &str) -> Result<Self> {
        let records: Vec<AvatarRecord> = serde_json::from_str(content)?;
        Ok(Self::new(records))
    }

    /// Loads the catalog embedded in the binary.
    pub fn bundled() -> Result<Self> {
        let file = BundledData::get(BUNDLED_FILE)
            .ok_or_else(|| Error::Catalog(format!("missing bundled {BUNDLED_FILE}")))?;
        Self::from_json(&String::from_utf8_lossy(file.data.as_ref()))
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Loads the startup catalog.
    ///
    /// Returns a tuple of (catalog, optional_warning). A custom file that
    /// cannot be read or parsed falls back to the bundled catalog with a
    /// warning key suitable for a notification.
    pub fn load(custom_path: Option<&Path>) -> (Self, Option<String>) {
        let mut warning = None;

        if let Some(path) = custom_path {
            match Self::load_from_path(path) {
                Ok(catalog) => return (catalog, None),
                Err(_) => warning = Some("notification-catalog-load-error".to_string()),
            }
        }

        match Self::bundled() {
            Ok(catalog) => (catalog, warning),
            Err(_) => (
                Self::default(),
                Some("notification-catalog-bundled-error".to_string()),
            ),
        }
    }

    /// Returns the record at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AvatarRecord> {
        self.records.get(index)
    }

    /// Returns the index of the first record whose URL equals `url`.
    #[must_use]
    pub fn position_by_url(&self, url: &str) -> Option<usize> {
        self.records.iter().position(|record| record.url == url)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AvatarRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[AvatarRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
