// src/shared/api/messages.rs
//! User-facing envelope texts. The deployment audience is Lithuanian.

pub const GENERIC_ERROR: &str = "Įvyko klaida";

pub const PROFILE_CREATED: &str = "Profilis sėkmingai sukurtas";
pub const PROFILE_ALREADY_EXISTS: &str = "Profilis šiam vartotojui jau sukurtas";
pub const PROFILE_UPDATED: &str = "Profilis sėkmingai atnaujintas";
pub const PROFILE_NOT_FOUND: &str = "Profilis nerastas";

pub const PORTFOLIO_ITEM_REMOVED: &str = "Portfolio elementas pašalintas";
pub const PORTFOLIO_ITEM_NOT_FOUND: &str = "Portfolio elementas nerastas";

pub const UNAUTHORIZED: &str = "Neprisijungęs vartotojas";
pub const FORBIDDEN: &str = "Veiksmas neleidžiamas";
