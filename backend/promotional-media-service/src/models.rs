//! Promotional post media data model
//!
//! One row of `PromotionalPostMedia`: a piece of promotional content (video,
//! image, document or audio) attached to a post. Field names serialize with
//! the table's column names so the record round-trips through JSON payloads
//! unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rejected enum value at the parsing boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {field} value: {value:?}")]
pub struct ParseEnumError {
    pub field: &'static str,
    pub value: String,
}

/// Platform the promotional media originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaSource {
    #[serde(rename = "youtube")]
    Youtube,
    #[serde(rename = "facebook")]
    Facebook,
    #[serde(rename = "kisan-network")]
    KisanNetwork,
}

impl MediaSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaSource::Youtube => "youtube",
            MediaSource::Facebook => "facebook",
            MediaSource::KisanNetwork => "kisan-network",
        }
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaSource {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "youtube" => Ok(MediaSource::Youtube),
            "facebook" => Ok(MediaSource::Facebook),
            "kisan-network" => Ok(MediaSource::KisanNetwork),
            other => Err(ParseEnumError {
                field: "source",
                value: other.to_string(),
            }),
        }
    }
}

/// Kind of media the item points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Document,
    Audio,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Document => "document",
            MediaType::Audio => "audio",
            MediaType::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaType::Image),
            "document" => Ok(MediaType::Document),
            "audio" => Ok(MediaType::Audio),
            "video" => Ok(MediaType::Video),
            other => Err(ParseEnumError {
                field: "mediaType",
                value: other.to_string(),
            }),
        }
    }
}

/// A promotional media item attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionalPostMedia {
    /// Primary key; `None` lets the storage layer assign it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Parent post
    #[serde(rename = "postID")]
    pub post_id: u64,
    pub created_by: String,
    pub updated_by: String,
    /// Epoch timestamp
    pub created_at: i64,
    /// Epoch timestamp
    pub updated_at: i64,
    pub title: String,
    pub content: String,
    #[serde(with = "flag")]
    pub is_highlighted: bool,
    pub source: MediaSource,
    pub media_type: MediaType,
    pub mime_type: String,
    pub media_url: String,
    pub thumbnail_url: String,
    /// Visibility flag, cleared instead of deleting the row
    #[serde(with = "flag")]
    pub active: bool,
}

/// Serde adapter for tinyint(1) flags carried as `0` / `1`
mod flag {
    use serde::de::{self, Deserializer, Unexpected};
    use serde::{Deserialize, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(de::Error::invalid_value(
                Unexpected::Unsigned(u64::from(other)),
                &"0 or 1",
            )),
        }
    }
}
