mod image_naming;
mod upload_policy;

pub use image_naming::image_extension;
pub use upload_policy::UploadPolicy;
