pub mod json_config;
pub mod messages;
pub mod response;

pub use json_config::{custom_json_config, custom_path_config, MAX_TEXT_PAYLOAD_BYTES};
pub use response::{ApiResponse, EnvelopeStatus};
