pub(crate) mod admin;
pub(crate) mod attempts;
pub(crate) mod auth;
pub(crate) mod errors;
pub(crate) mod handlers;
pub(crate) mod router;
pub(crate) mod student;
pub(crate) mod validation;
