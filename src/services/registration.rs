//! Registration submission: locked-round gate, preference reconciliation,
//! form validation, persistence.

use chrono::NaiveDate;

use crate::error::PortalError;
use crate::registration::{reconcile_preferences, validate_registration, ReconcileInput};
use crate::rounds::is_current;
use crate::store::MentorshipStore;
use crate::types::{ParticipantRole, PreferenceSelection, Registration, RoundStatus};

/// Raw registration-dialog input.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub round_id: String,
    pub industry: String,
    pub skillsets: Vec<String>,
    /// Mentor only; ignored for mentees.
    pub mentee_capacity: Option<u32>,
    pub goal: Option<String>,
    pub selection: PreferenceSelection,
}

#[derive(Debug, Clone)]
pub struct SavedRegistration {
    pub registration: Registration,
    /// Non-fatal notices (capacity truncation) for the view layer to toast.
    pub warnings: Vec<String>,
}

/// Validate and persist a registration for the given round.
///
/// Registrations are editable before the round starts and rejected while it
/// runs or after it ended. Nothing is persisted when any rule fails.
pub fn submit_registration(
    store: &dyn MentorshipStore,
    user_id: &str,
    request: &RegistrationRequest,
    today: NaiveDate,
) -> Result<SavedRegistration, PortalError> {
    let user = store.get_user(user_id)?;
    let role = user
        .participant_role
        .ok_or_else(|| PortalError::validation("You are not a mentorship participant"))?;

    let round = store.get_round(&request.round_id)?;
    if round.status == RoundStatus::Completed {
        return Err(PortalError::validation("This round has already ended"));
    }
    if is_current(&round, today) {
        return Err(PortalError::RegistrationLocked);
    }

    let known_partners = store.known_partners(user_id)?;
    let reconciled = reconcile_preferences(&ReconcileInput {
        role,
        selection: &request.selection,
        known_partners: &known_partners,
        mentee_capacity: request.mentee_capacity,
    })?;

    let registration = Registration {
        industry: request.industry.trim().to_string(),
        skillsets: request.skillsets.clone(),
        mentee_capacity: (role == ParticipantRole::Mentor)
            .then_some(request.mentee_capacity)
            .flatten(),
        goal: request
            .goal
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string),
        mentor_preference: reconciled.preference,
        continue_names: reconciled.continue_names,
    };
    validate_registration(role, &registration)?;

    store.save_registration(user_id, &request.round_id, registration.clone())?;
    log::info!(
        "saved registration for {} in {} (preference {})",
        user_id,
        request.round_id,
        registration.mentor_preference.as_str(),
    );

    Ok(SavedRegistration {
        registration,
        warnings: reconciled.warnings,
    })
}
