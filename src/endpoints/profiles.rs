use crate::{
    endpoints::NONE,
    models::{PrivateProfile, PublicProfile},
    Result, SpotifyWebClient,
};

impl SpotifyWebClient {
    /// Profile of the token's owner.
    pub async fn get_private_profile(&self) -> Result<PrivateProfile> {
        self.get_resource(&["me"], &NONE).await
    }

    pub async fn get_public_profile(&self, user_id: &str) -> Result<PublicProfile> {
        self.get_resource(&["users", user_id], &NONE).await
    }
}
