// SPDX-License-Identifier: MPL-2.0
//! Avatar record as stored in the catalog.

use crate::media::file_name;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag attached to each avatar. It is carried through for completeness but
/// never influences rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    /// Any tag the bundled data uses that has no dedicated variant.
    Other(String),
}

impl From<String> for Gender {
    fn from(raw: String) -> Self {
        match raw.to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Other(raw),
        }
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => "male".to_string(),
            Gender::Female => "female".to_string(),
            Gender::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// One gallery entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarRecord {
    /// Display label shown under the tile.
    pub name: String,
    /// Absolute HTTP(S) location of the image.
    pub url: String,
    pub gender: Gender,
}

impl AvatarRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            gender,
        }
    }

    /// File name offered in the save dialog when downloading this avatar.
    #[must_use]
    pub fn download_file_name(&self) -> String {
        file_name::derive(&self.name)
    }
}
