pub(crate) mod admins;
pub(crate) mod attempts;
pub(crate) mod colleges;
pub(crate) mod events;
pub(crate) mod exams;
pub(crate) mod questions;
pub(crate) mod students;
