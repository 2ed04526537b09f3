//! Media type rules for point images.

/// Accepted media type pattern for point images.
pub const ACCEPTED_MEDIA_TYPES: &str = "image/*";

/// Whether `media_type` matches [`ACCEPTED_MEDIA_TYPES`].
pub fn is_image_media_type(media_type: &str) -> bool {
    let Some((top, sub)) = media_type.trim().split_once('/') else {
        return false;
    };
    top.eq_ignore_ascii_case("image") && !sub.is_empty()
}

/// Derives the media type of an image from its file extension.
pub fn media_type_from_extension(extension: &str) -> Option<&'static str> {
    let media_type = match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        _ => return None,
    };
    Some(media_type)
}
