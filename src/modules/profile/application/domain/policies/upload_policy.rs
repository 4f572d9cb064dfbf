#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
    pub max_profile_images: usize,
    pub max_portfolio_items: usize,
    pub allowed_mime_types: &'static [&'static str],
}

impl UploadPolicy {
    pub const PROFILE_IMAGE_FIELD: &'static str = "profile_image";
    pub const PORTFOLIO_ITEMS_FIELD: &'static str = "portfolio_items";

    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/gif"];

    pub fn accepts(&self, mime_type: &str) -> bool {
        self.allowed_mime_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(mime_type))
    }

    /// Upper bound of files accepted for a form field, `None` for unknown fields.
    pub fn max_files_for(&self, field: &str) -> Option<usize> {
        match field {
            Self::PROFILE_IMAGE_FIELD => Some(self.max_profile_images),
            Self::PORTFOLIO_ITEMS_FIELD => Some(self.max_portfolio_items),
            _ => None,
        }
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5MB
            max_profile_images: 1,
            max_portfolio_items: 20,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }
}
