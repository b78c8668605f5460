mod events;
mod exams;
mod generation;
mod session;

pub(super) use events::{
    create_event, delete_event, list_college_events, update_event, update_event_status,
};
pub(super) use exams::{create_exam, delete_exam, list_event_exams};
pub(super) use generation::generate_questions;
pub(super) use session::login;
