use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    wire::{ErrorBody, ErrorEnvelope},
    ErrorResult, SpotifyError,
};

/// Decodes a success body into `T`.
///
/// An empty body is decoded as JSON `null`, which lets `Option<_>` targets
/// absorb `204 No Content` responses. When `null` does not fit, the empty
/// body stands for the acknowledgement `{"status": status, "message": ""}`,
/// so an [`ErrorResult`] target still gets the response status.
pub(crate) fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, SpotifyError> {
    if body.trim().is_empty() {
        return serde_json::from_value::<T>(Value::Null).or_else(|err| {
            serde_json::to_value(ErrorResult::ok(status))
                .and_then(serde_json::from_value::<T>)
                .map_err(|_| malformed(status, body, err))
        });
    }
    serde_json::from_str::<T>(body).map_err(|err| malformed(status, body, err))
}

fn malformed(status: u16, body: &str, err: serde_json::Error) -> SpotifyError {
    SpotifyError::MalformedResponse {
        status,
        message: format!("invalid response JSON: {err}; body: {}", truncate(body)),
    }
}

/// Builds the [`ErrorResult`] for a failed response.
///
/// The HTTP status always wins over any status echoed in the body.
pub(crate) fn decode_error_result(status: u16, body: &str) -> ErrorResult {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope {
            error: ErrorBody::Detailed { message, .. },
            ..
        }) => message,
        Ok(ErrorEnvelope {
            error: ErrorBody::Code(code),
            error_description,
        }) => match error_description {
            Some(description) => format!("{code}: {description}"),
            None => code,
        },
        Err(_) => body.trim().to_owned(),
    };
    ErrorResult::new(status, message)
}

fn truncate(body: &str) -> &str {
    const LIMIT: usize = 512;
    if body.len() <= LIMIT {
        return body;
    }
    let mut end = LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
