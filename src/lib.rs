//! MentorDesk — the business-rule core of a mentorship-program portal.
//!
//! The view layer collects raw form input and hands it to the services here;
//! each service validates, runs the pure derivation (preference
//! reconciliation, meeting building, visibility gating), and persists the
//! normalized record through an injected [`store::MentorshipStore`].

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod meetings;
pub mod registration;
pub mod rounds;
pub mod services;
pub mod store;
pub mod types;
pub mod visibility;
