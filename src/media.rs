use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Resolve a user-selected local image to an in-memory display reference.
/// No selection (`None`) is a no-op; an unreadable file is an error.
pub fn image_to_data_uri(path: Option<&Path>) -> anyhow::Result<Option<String>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let bytes = std::fs::read(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Ok(Some(format!("data:{};base64,{}", mime, STANDARD.encode(bytes))))
}
