use serde::{Deserialize, Serialize};

use super::{ExternalUrls, Followers, FullTrack, Image, PublicProfile};
use crate::Page;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistTrackItems {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub total: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimplePlaylist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub collaborative: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub owner: Option<PublicProfile>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub snapshot_id: Option<String>,
    #[serde(default)]
    pub tracks: PlaylistTrackItems,
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FullPlaylist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub collaborative: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub followers: Followers,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub owner: Option<PublicProfile>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub snapshot_id: Option<String>,
    #[serde(default)]
    pub tracks: Page<PlaylistTrack>,
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTrack {
    #[serde(default)]
    pub added_at: Option<String>,
    #[serde(default)]
    pub added_by: Option<PublicProfile>,
    #[serde(default)]
    pub is_local: bool,
    #[serde(default)]
    pub track: Option<FullTrack>,
}

/// Version marker returned by playlist mutations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub snapshot_id: String,
}

/// Track to remove from a playlist, optionally pinned to positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTrackUri {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<u32>,
}

impl DeleteTrackUri {
    /// Removes every occurrence of `uri`.
    pub fn all(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            positions: Vec::new(),
        }
    }

    /// Removes `uri` only at the given zero-based positions.
    pub fn at(uri: impl Into<String>, positions: impl Into<Vec<u32>>) -> Self {
        Self {
            uri: uri.into(),
            positions: positions.into(),
        }
    }
}
