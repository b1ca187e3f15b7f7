//! Resource shapes returned by the Web API.
//!
//! Every model tolerates unknown fields and defaults the ones the service
//! is known to omit, so schema additions upstream do not break decoding.

mod album;
mod artist;
mod browse;
mod common;
mod player;
mod playlist;
mod track;
mod user;

pub use album::{AlbumType, FullAlbum, SavedAlbum, SeveralAlbums, SimpleAlbum};
pub use artist::{FullArtist, SeveralArtists, SimpleArtist};
pub use browse::{
    Category, CategoryList, CategoryPlaylists, FeaturedPlaylists, NewAlbumReleases,
    RecommendationSeed, RecommendationSeedGenres, Recommendations, SearchResults, SearchType,
    TuneableTrack,
};
pub use common::{Copyright, ExternalIds, ExternalUrls, Followers, Image, Restrictions};
pub use player::{Device, Devices, PlaybackContext, PlaybackOffset, PlayingContext, RepeatState};
pub use playlist::{
    DeleteTrackUri, FullPlaylist, PlaylistTrack, PlaylistTrackItems, SimplePlaylist, Snapshot,
};
pub use track::{
    AudioFeatures, FullTrack, LinkedFrom, PlayHistory, SavedTrack, SeveralAudioFeatures,
    SeveralTracks, SimpleTrack,
};
pub use user::{FollowType, FollowedArtists, PrivateProfile, PublicProfile, TimeRange};
