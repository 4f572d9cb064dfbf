const MAX_EXTENSION_LEN: usize = 10;

/// Extension for a stored image: the fragment after the last dot of the
/// client file name, lower-cased. Falls back to the canonical extension of
/// the declared MIME type when the name has no usable extension.
pub fn image_extension(original_name: &str, mime_type: &str) -> String {
    original_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| {
            !ext.is_empty()
                && ext.len() <= MAX_EXTENSION_LEN
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| canonical_extension(mime_type).to_string())
}

fn canonical_extension(mime_type: &str) -> &'static str {
    match mime_type.to_ascii_lowercase().as_str() {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        _ => "bin",
    }
}
