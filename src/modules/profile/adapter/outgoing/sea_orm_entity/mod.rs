pub mod portfolios;
pub mod profiles;
