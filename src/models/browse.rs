use std::fmt;

use serde::{Deserialize, Serialize};

use super::{FullArtist, FullTrack, Image, SimpleAlbum, SimplePlaylist, SimpleTrack};
use crate::Page;

/// Resource kinds a search can cover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchType {
    Artist,
    Album,
    Track,
    Playlist,
}

impl SearchType {
    pub const ALL: [SearchType; 4] = [
        SearchType::Artist,
        SearchType::Album,
        SearchType::Track,
        SearchType::Playlist,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Track => "track",
            Self::Playlist => "playlist",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search envelope; only the requested kinds are present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub artists: Option<Page<FullArtist>>,
    #[serde(default)]
    pub albums: Option<Page<SimpleAlbum>>,
    #[serde(default)]
    pub tracks: Option<Page<FullTrack>>,
    #[serde(default)]
    pub playlists: Option<Page<Option<SimplePlaylist>>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturedPlaylists {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub playlists: Page<SimplePlaylist>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAlbumReleases {
    #[serde(default)]
    pub albums: Page<SimpleAlbum>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub icons: Vec<Image>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryList {
    #[serde(default)]
    pub categories: Page<Category>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryPlaylists {
    #[serde(default)]
    pub playlists: Page<SimplePlaylist>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSeed {
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, rename = "afterFilteringSize")]
    pub after_filtering_size: u32,
    #[serde(default, rename = "afterRelinkingSize")]
    pub after_relinking_size: u32,
    #[serde(default, rename = "initialPoolSize")]
    pub initial_pool_size: u32,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub seeds: Vec<RecommendationSeed>,
    #[serde(default)]
    pub tracks: Vec<SimpleTrack>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSeedGenres {
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Tunable audio attributes used as recommendation targets or bounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TuneableTrack {
    pub acousticness: Option<f32>,
    pub danceability: Option<f32>,
    pub duration_ms: Option<u32>,
    pub energy: Option<f32>,
    pub instrumentalness: Option<f32>,
    pub key: Option<u32>,
    pub liveness: Option<f32>,
    pub loudness: Option<f32>,
    pub mode: Option<u32>,
    pub popularity: Option<u32>,
    pub speechiness: Option<f32>,
    pub tempo: Option<f32>,
    pub time_signature: Option<u32>,
    pub valence: Option<f32>,
}

impl TuneableTrack {
    /// Query parameters named `<prefix>_<attribute>` for every set attribute.
    pub(crate) fn to_params(&self, prefix: &str) -> Vec<(String, String)> {
        let attributes: [(&str, Option<String>); 14] = [
            ("acousticness", self.acousticness.map(|v| v.to_string())),
            ("danceability", self.danceability.map(|v| v.to_string())),
            ("duration_ms", self.duration_ms.map(|v| v.to_string())),
            ("energy", self.energy.map(|v| v.to_string())),
            ("instrumentalness", self.instrumentalness.map(|v| v.to_string())),
            ("key", self.key.map(|v| v.to_string())),
            ("liveness", self.liveness.map(|v| v.to_string())),
            ("loudness", self.loudness.map(|v| v.to_string())),
            ("mode", self.mode.map(|v| v.to_string())),
            ("popularity", self.popularity.map(|v| v.to_string())),
            ("speechiness", self.speechiness.map(|v| v.to_string())),
            ("tempo", self.tempo.map(|v| v.to_string())),
            ("time_signature", self.time_signature.map(|v| v.to_string())),
            ("valence", self.valence.map(|v| v.to_string())),
        ];
        attributes
            .into_iter()
            .filter_map(|(name, value)| value.map(|value| (format!("{prefix}_{name}"), value)))
            .collect()
    }
}
