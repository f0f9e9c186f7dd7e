//! Command layer: each service wires validation → pure logic → repository.
//!
//! Services never hold state of their own; the view layer hands them a
//! [`crate::store::MentorshipStore`] plus the raw form input, and gets back
//! a validated record (with any non-fatal warnings) or a user-facing error.

pub mod dashboard;
pub mod meetings;
pub mod registration;
pub mod rounds;
