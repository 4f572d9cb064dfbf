use crate::auth::application::domain::entities::UserId;

const MAX_SHORT_TEXT_LEN: usize = 255;

//
// ──────────────────────────────────────────────────────────
// Raw input, as it arrives from a form or JSON body
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFieldsInput {
    pub user_id: Option<String>,
    pub hourly_rate: Option<String>,
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileFieldsError {
    #[error("\"{0}\" is required")]
    Required(&'static str),

    #[error("\"{0}\" must be a number")]
    NotANumber(&'static str),

    #[error("\"{0}\" must be an integer")]
    NotAnInteger(&'static str),

    #[error("\"UserId\" must be a positive number")]
    NonPositiveUserId,

    #[error("\"hourly_rate\" must be greater than or equal to 0")]
    NegativeHourlyRate,

    #[error("\"{0}\" length must be less than or equal to 255 characters long")]
    TooLong(&'static str),
}

//
// ──────────────────────────────────────────────────────────
// Validated fields shared by create and update
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFields {
    user_id: UserId,
    hourly_rate: i32,
    headline: Option<String>,
    subheadline: Option<String>,
    description: Option<String>,
    location: Option<String>,
}

impl ProfileFields {
    pub fn parse(input: ProfileFieldsInput) -> Result<Self, ProfileFieldsError> {
        let user_id = parse_integer("UserId", input.user_id)?;
        if user_id <= 0 {
            return Err(ProfileFieldsError::NonPositiveUserId);
        }

        let hourly_rate = parse_integer("hourly_rate", input.hourly_rate)?;
        if hourly_rate < 0 {
            return Err(ProfileFieldsError::NegativeHourlyRate);
        }

        Ok(Self {
            user_id: UserId::from(user_id),
            hourly_rate,
            headline: short_text("headline", input.headline)?,
            subheadline: short_text("subheadline", input.subheadline)?,
            description: optional_text(input.description),
            location: short_text("location", input.location)?,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn hourly_rate(&self) -> i32 {
        self.hourly_rate
    }

    pub fn headline(&self) -> Option<&str> {
        self.headline.as_deref()
    }

    pub fn subheadline(&self) -> Option<&str> {
        self.subheadline.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

fn parse_integer(name: &'static str, raw: Option<String>) -> Result<i32, ProfileFieldsError> {
    let raw = optional_text(raw).ok_or(ProfileFieldsError::Required(name))?;

    if let Ok(value) = raw.parse::<i32>() {
        return Ok(value);
    }

    // "12.0" is a number and an integer; "12.5" is a number but not an integer
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => {
            if value < i32::MIN as f64 || value > i32::MAX as f64 {
                Err(ProfileFieldsError::NotAnInteger(name))
            } else {
                Ok(value as i32)
            }
        }
        Ok(_) => Err(ProfileFieldsError::NotAnInteger(name)),
        Err(_) => Err(ProfileFieldsError::NotANumber(name)),
    }
}

fn optional_text(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn short_text(
    name: &'static str,
    raw: Option<String>,
) -> Result<Option<String>, ProfileFieldsError> {
    match optional_text(raw) {
        Some(text) if text.chars().count() > MAX_SHORT_TEXT_LEN => {
            Err(ProfileFieldsError::TooLong(name))
        }
        other => Ok(other),
    }
}
