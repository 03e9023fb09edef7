use reqwest::{Client, StatusCode};

use crate::{
    config,
    error::PlaybackError,
    types::{Device, DevicesResponse, PlayRequest},
};

use super::http_client;

/// Lists the user's available playback devices.
pub async fn get_devices(token: &str) -> Result<Vec<Device>, PlaybackError> {
    let url = format!(
        "{uri}/me/player/devices",
        uri = &config::spotify_apiurl()
    );

    let response = http_client().get(&url).bearer_auth(token).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(map_player_status(status));
    }

    let resp = response.json::<DevicesResponse>().await?;
    Ok(resp.devices)
}

/// Builds the `PUT /me/player/play` request. The device id goes through the
/// query serializer so names with spaces or reserved characters survive.
pub fn build_play_request(
    client: &Client,
    token: &str,
    device_id: Option<&str>,
    uris: Vec<String>,
) -> Result<reqwest::Request, PlaybackError> {
    let url = format!("{uri}/me/player/play", uri = &config::spotify_apiurl());

    let mut request = client
        .put(&url)
        .bearer_auth(token)
        .json(&PlayRequest { uris });
    if let Some(id) = device_id {
        request = request.query(&[("device_id", id)]);
    }

    Ok(request.build()?)
}

/// Starts playback of the given track URIs on a device.
///
/// Without `device_id` the currently active device is addressed; Spotify
/// answers 404 when there is none, which is reported as
/// [`PlaybackError::NoActiveDevice`] so the user understands it is a
/// device problem rather than a credentials problem.
pub async fn play(
    token: &str,
    device_id: Option<&str>,
    uris: Vec<String>,
) -> Result<(), PlaybackError> {
    let client = http_client();
    let request = build_play_request(&client, token, device_id, uris)?;

    let response = client.execute(request).await?;
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    Err(map_player_status(status))
}

fn map_player_status(status: StatusCode) -> PlaybackError {
    match status {
        StatusCode::NOT_FOUND => PlaybackError::NoActiveDevice,
        StatusCode::FORBIDDEN => PlaybackError::InsufficientScope,
        other => PlaybackError::Api(other),
    }
}
