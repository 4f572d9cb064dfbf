pub mod profile_form;
pub mod routes;
