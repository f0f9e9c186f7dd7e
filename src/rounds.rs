//! Round lifecycle helpers and the admin round-form rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PortalError;
use crate::types::{MentorshipRound, RoundStatus};

/// Raw admin-form input for creating or editing a round.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundForm {
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: RoundStatus,
    pub required_meetings: u32,
}

/// Counts backing the admin stats cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Check the form rules and hand back the confirmed date range.
pub fn validate_round_form(form: &RoundForm) -> Result<(NaiveDate, NaiveDate), PortalError> {
    if form.name.trim().is_empty() {
        return Err(PortalError::validation("Enter a round name"));
    }
    let (Some(start), Some(end)) = (form.start_date, form.end_date) else {
        return Err(PortalError::validation("Pick a start and end date"));
    };
    if start >= end {
        return Err(PortalError::validation(
            "The end date must be after the start date",
        ));
    }
    if form.required_meetings == 0 {
        return Err(PortalError::validation(
            "Required meetings must be at least 1",
        ));
    }
    Ok((start, end))
}

/// Build a new round from a validated form, with a fresh identifier.
pub fn round_from_form(form: &RoundForm) -> Result<MentorshipRound, PortalError> {
    let (start_date, end_date) = validate_round_form(form)?;
    Ok(MentorshipRound {
        id: Uuid::new_v4().to_string(),
        name: form.name.trim().to_string(),
        start_date,
        end_date,
        status: form.status,
        required_meetings: form.required_meetings,
        phases: None,
    })
}

/// Apply an edit form to an existing round, keeping id and phases.
pub fn apply_form(round: &mut MentorshipRound, form: &RoundForm) -> Result<(), PortalError> {
    let (start_date, end_date) = validate_round_form(form)?;
    round.name = form.name.trim().to_string();
    round.start_date = start_date;
    round.end_date = end_date;
    round.status = form.status;
    round.required_meetings = form.required_meetings;
    Ok(())
}

/// A round that has not started yet (drives the "starting soon" notice and
/// keeps its registration editable).
pub fn is_upcoming(round: &MentorshipRound, today: NaiveDate) -> bool {
    round.start_date > today
}

/// The round currently running.
pub fn is_current(round: &MentorshipRound, today: NaiveDate) -> bool {
    round.status == RoundStatus::Active && !is_upcoming(round, today)
}

pub fn round_stats(rounds: &[MentorshipRound]) -> RoundStats {
    RoundStats {
        total: rounds.len(),
        active: rounds
            .iter()
            .filter(|r| r.status == RoundStatus::Active)
            .count(),
        completed: rounds
            .iter()
            .filter(|r| r.status == RoundStatus::Completed)
            .count(),
    }
}
