use actix_multipart::{Field, Multipart};
use futures::TryStreamExt;
use std::collections::HashMap;
use tracing::debug;

use crate::profile::application::domain::policies::UploadPolicy;
use crate::profile::application::ports::incoming::use_cases::ProfileFieldsInput;
use crate::profile::application::ports::outgoing::ImageUpload;
use crate::shared::api::MAX_TEXT_PAYLOAD_BYTES;

/// Text fields and accepted files of a profile creation form.
#[derive(Debug, Default)]
pub struct ProfileForm {
    pub fields: ProfileFieldsInput,
    pub profile_image: Option<ImageUpload>,
    pub portfolio_items: Vec<ImageUpload>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileFormError {
    #[error("Malformed multipart body: {0}")]
    Multipart(String),

    #[error("Too many files in \"{field}\" (max {max})")]
    TooManyFiles { field: String, max: usize },

    #[error("File exceeds the {max_bytes} byte limit")]
    FileTooLarge { max_bytes: usize },

    #[error("Unexpected file field \"{0}\"")]
    UnexpectedFile(String),

    #[error("Field \"{0}\" is too large")]
    FieldTooLarge(String),

    #[error("Field \"{0}\" is not valid UTF-8")]
    InvalidText(String),
}

/// Reads the whole multipart body into memory.
///
/// Files whose declared type the policy does not accept are drained and
/// dropped without failing the request. Count and size limits reject it.
pub async fn read_profile_form(
    mut payload: Multipart,
    policy: &UploadPolicy,
) -> Result<ProfileForm, ProfileFormError> {
    let mut form = ProfileForm::default();
    let mut file_counts: HashMap<String, usize> = HashMap::new();

    while let Some(mut field) = payload.try_next().await.map_err(multipart_err)? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        let Some(original_name) = file_name else {
            let value = read_text(&mut field, &name).await?;
            assign_text(&mut form.fields, &name, value);
            continue;
        };

        let max = policy
            .max_files_for(&name)
            .ok_or_else(|| ProfileFormError::UnexpectedFile(name.clone()))?;

        let count = file_counts.entry(name.clone()).or_default();
        *count += 1;
        if *count > max {
            return Err(ProfileFormError::TooManyFiles { field: name, max });
        }

        let content_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();

        if !policy.accepts(&content_type) {
            debug!(
                "Dropping {} upload '{}' with type '{}'",
                name, original_name, content_type
            );
            drain(&mut field).await?;
            continue;
        }

        let bytes = read_file(&mut field, policy.max_file_size_bytes).await?;
        let upload = ImageUpload {
            original_name,
            content_type,
            bytes,
        };

        if name == UploadPolicy::PROFILE_IMAGE_FIELD {
            form.profile_image = Some(upload);
        } else {
            form.portfolio_items.push(upload);
        }
    }

    Ok(form)
}

fn assign_text(fields: &mut ProfileFieldsInput, name: &str, value: String) {
    let slot = match name {
        "UserId" | "user_id" => &mut fields.user_id,
        "hourly_rate" => &mut fields.hourly_rate,
        "headline" => &mut fields.headline,
        "subheadline" => &mut fields.subheadline,
        "description" => &mut fields.description,
        "location" => &mut fields.location,
        _ => return,
    };

    *slot = Some(value);
}

async fn read_text(field: &mut Field, name: &str) -> Result<String, ProfileFormError> {
    let mut buf = Vec::new();

    while let Some(chunk) = field.try_next().await.map_err(multipart_err)? {
        if buf.len() + chunk.len() > MAX_TEXT_PAYLOAD_BYTES {
            return Err(ProfileFormError::FieldTooLarge(name.to_string()));
        }
        buf.extend_from_slice(&chunk);
    }

    String::from_utf8(buf).map_err(|_| ProfileFormError::InvalidText(name.to_string()))
}

async fn read_file(field: &mut Field, max_bytes: usize) -> Result<Vec<u8>, ProfileFormError> {
    let mut buf = Vec::new();

    while let Some(chunk) = field.try_next().await.map_err(multipart_err)? {
        if buf.len() + chunk.len() > max_bytes {
            return Err(ProfileFormError::FileTooLarge { max_bytes });
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}

async fn drain(field: &mut Field) -> Result<(), ProfileFormError> {
    while field.try_next().await.map_err(multipart_err)?.is_some() {}
    Ok(())
}

fn multipart_err(e: actix_multipart::MultipartError) -> ProfileFormError {
    ProfileFormError::Multipart(e.to_string())
}
