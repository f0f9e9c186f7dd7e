//! Meeting submission and deletion against a participation.

use chrono::{DateTime, Utc};

use crate::error::PortalError;
use crate::meetings::{build_meeting_records, MeetingBatchInput};
use crate::store::MentorshipStore;
use crate::types::{MeetingRecord, MeetingSlot};

/// Raw meeting-form input: one timezone, any number of slots.
#[derive(Debug, Clone)]
pub struct MeetingSubmission {
    pub round_id: String,
    pub timezone: String,
    pub slots: Vec<MeetingSlot>,
}

#[derive(Debug, Clone)]
pub struct MeetingSubmissionOutcome {
    /// The records persisted, in slot order (they now head the sequence).
    pub records: Vec<MeetingRecord>,
    pub rejected_count: usize,
    pub warnings: Vec<String>,
}

/// Build records from the submitted slots and prepend them to the user's
/// participation in the round.
///
/// Per-slot problems drop the slot; a submission where nothing survives is
/// rejected so the user can fix the form.
pub fn submit_meetings(
    store: &dyn MentorshipStore,
    user_id: &str,
    submission: &MeetingSubmission,
    now: DateTime<Utc>,
) -> Result<MeetingSubmissionOutcome, PortalError> {
    let participation = store.get_participation(user_id, &submission.round_id)?;

    let partner_name = participation
        .partner_names
        .first()
        .map(String::as_str)
        .unwrap_or("Partner");
    let partner_email = participation
        .partner_details
        .as_ref()
        .and_then(|details| details.first())
        .map(|d| d.email.clone());

    let batch = build_meeting_records(&MeetingBatchInput {
        timezone: &submission.timezone,
        slots: &submission.slots,
        partner_name,
        partner_email: partner_email.as_deref(),
        now,
    })?;

    if batch.records.is_empty() {
        return Err(PortalError::validation(
            "Add at least one meeting with a date",
        ));
    }

    store.append_meetings(user_id, &submission.round_id, batch.records.clone())?;
    log::info!(
        "recorded {} meeting(s) for {} in {} ({} slot(s) dropped)",
        batch.records.len(),
        user_id,
        submission.round_id,
        batch.rejected_count,
    );

    Ok(MeetingSubmissionOutcome {
        records: batch.records,
        rejected_count: batch.rejected_count,
        warnings: batch.warnings,
    })
}

/// Delete one of the user's own meeting records.
pub fn delete_meeting(
    store: &dyn MentorshipStore,
    user_id: &str,
    round_id: &str,
    meeting_id: &str,
) -> Result<(), PortalError> {
    store.remove_meeting(user_id, round_id, meeting_id)?;
    log::info!("deleted meeting {meeting_id} for {user_id} in {round_id}");
    Ok(())
}
