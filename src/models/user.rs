use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ExternalUrls, Followers, FullArtist, Image};
use crate::CursorPage;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicProfile {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub followers: Followers,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrivateProfile {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub followers: Followers,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub uri: Option<String>,
}

/// Envelope of the followed-artists endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FollowedArtists {
    pub artists: CursorPage<FullArtist>,
}

/// Kind of entity the current user follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FollowType {
    Artist,
    User,
}

impl FollowType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::User => "user",
        }
    }
}

impl fmt::Display for FollowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Window used to compute a user's top items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeRange {
    ShortTerm,
    #[default]
    MediumTerm,
    LongTerm,
}

impl TimeRange {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ShortTerm => "short_term",
            Self::MediumTerm => "medium_term",
            Self::LongTerm => "long_term",
        }
    }
}
