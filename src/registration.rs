//! Registration-preference reconciliation and registration-form validation.
//!
//! The reconciler turns the two multi-select partner lists ("continue with" /
//! "do not continue with") into a single preference plus a capacity-bounded
//! continue list. Truncation is non-fatal: the result carries warning strings
//! for the view layer, while hard rule violations reject the whole input.

use std::collections::HashSet;

use crate::error::PortalError;
use crate::types::{MentorPreference, ParticipantRole, PreferenceSelection, Registration};

/// Maximum number of focus skillsets on a registration.
pub const MAX_SKILLSETS: usize = 3;
/// Maximum goal length, in characters.
pub const MAX_GOAL_CHARS: usize = 200;

const DEFAULT_CAPACITY: u32 = 1;

#[derive(Debug, Clone)]
pub struct ReconcileInput<'a> {
    pub role: ParticipantRole,
    pub selection: &'a PreferenceSelection,
    /// Every partner name the user may reference, current and historical.
    pub known_partners: &'a [String],
    /// Mentor capacity from the registration form. Ignored for mentees.
    pub mentee_capacity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledPreference {
    pub preference: MentorPreference,
    /// First `capacity` continue selections, in user-selection order.
    pub continue_names: Vec<String>,
    pub warnings: Vec<String>,
}

/// How many partners a participant may carry into the next round:
/// mentees always 1, mentors their declared capacity (default 1).
pub fn effective_capacity(role: ParticipantRole, mentee_capacity: Option<u32>) -> usize {
    match role {
        ParticipantRole::Mentee => 1,
        ParticipantRole::Mentor => mentee_capacity.unwrap_or(DEFAULT_CAPACITY).max(1) as usize,
    }
}

/// Derive the overall preference and continue list from the multi-select
/// lists.
///
/// Hard failures (ValidationError): a name in both lists, or a name outside
/// the known-partner universe. Soft adjustment: a continue list longer than
/// the effective capacity is truncated to the first `capacity` selections
/// and a warning is surfaced.
///
/// With no known partners there is nobody to continue with or avoid, so the
/// result is always NoPreference with an empty list.
pub fn reconcile_preferences(
    input: &ReconcileInput<'_>,
) -> Result<ReconciledPreference, PortalError> {
    let universe: HashSet<&str> = input.known_partners.iter().map(String::as_str).collect();

    for name in input
        .selection
        .continue_with
        .iter()
        .chain(input.selection.avoid.iter())
    {
        if !universe.contains(name.as_str()) {
            return Err(PortalError::validation(format!(
                "{name} is not one of your current or past partners"
            )));
        }
    }

    let avoid: HashSet<&str> = input.selection.avoid.iter().map(String::as_str).collect();
    if let Some(conflict) = input
        .selection
        .continue_with
        .iter()
        .find(|name| avoid.contains(name.as_str()))
    {
        return Err(PortalError::validation(format!(
            "{conflict} cannot be in both the continue and the avoid list"
        )));
    }

    // Multi-selects cannot produce duplicates, but tolerate them anyway:
    // a repeated name must not consume capacity twice.
    let mut seen = HashSet::new();
    let mut continue_names: Vec<String> = input
        .selection
        .continue_with
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect();

    let capacity = effective_capacity(input.role, input.mentee_capacity);
    let mut warnings = Vec::new();
    if continue_names.len() > capacity {
        let dropped = continue_names.len() - capacity;
        continue_names.truncate(capacity);
        let warning = format!(
            "Your capacity allows {capacity} continue selection{}; the last {dropped} {} dropped.",
            if capacity == 1 { "" } else { "s" },
            if dropped == 1 { "was" } else { "were" },
        );
        log::warn!("continue list over capacity: {warning}");
        warnings.push(warning);
    }

    let preference = if !continue_names.is_empty() {
        MentorPreference::Continue
    } else if !universe.is_empty() && universe.iter().all(|name| avoid.contains(name)) {
        MentorPreference::Different
    } else {
        MentorPreference::NoPreference
    };

    Ok(ReconciledPreference {
        preference,
        continue_names,
        warnings,
    })
}

/// Re-truncate an existing registration after a capacity edit.
///
/// Lowering the capacity below the number of saved continue selections drops
/// the excess (keeping the earliest selections) and reports the adjustment.
pub fn apply_capacity_change(
    registration: &mut Registration,
    new_capacity: u32,
) -> Result<Vec<String>, PortalError> {
    if new_capacity == 0 {
        return Err(PortalError::validation(
            "Mentee capacity must be at least 1",
        ));
    }

    registration.mentee_capacity = Some(new_capacity);

    let capacity = new_capacity as usize;
    let mut warnings = Vec::new();
    if registration.continue_names.len() > capacity {
        let dropped = registration.continue_names.len() - capacity;
        registration.continue_names.truncate(capacity);
        let warning = format!(
            "Capacity lowered to {new_capacity}: {dropped} continue selection{} removed.",
            if dropped == 1 { "" } else { "s" },
        );
        log::warn!("capacity change re-truncated continue list: {warning}");
        warnings.push(warning);
    }
    Ok(warnings)
}

/// Enforce the registration form rules before save.
///
/// No partial acceptance: the first violated rule aborts with a user-facing
/// message and the registration is not persisted.
pub fn validate_registration(
    role: ParticipantRole,
    registration: &Registration,
) -> Result<(), PortalError> {
    if registration.industry.trim().is_empty() {
        return Err(PortalError::validation("Select an industry"));
    }

    if registration.skillsets.is_empty() {
        return Err(PortalError::validation("Select at least 1 skillset"));
    }
    if registration.skillsets.len() > MAX_SKILLSETS {
        return Err(PortalError::validation(format!(
            "Select at most {MAX_SKILLSETS} skillsets"
        )));
    }
    let mut seen = HashSet::new();
    if !registration
        .skillsets
        .iter()
        .all(|s| seen.insert(s.as_str()))
    {
        return Err(PortalError::validation("Skillsets must be unique"));
    }

    if role == ParticipantRole::Mentor {
        match registration.mentee_capacity {
            None => {
                return Err(PortalError::validation(
                    "Choose how many mentees you can take this round",
                ))
            }
            Some(0) => {
                return Err(PortalError::validation(
                    "Mentee capacity must be at least 1",
                ))
            }
            Some(_) => {}
        }
    }

    if let Some(goal) = &registration.goal {
        if goal.chars().count() > MAX_GOAL_CHARS {
            return Err(PortalError::validation(format!(
                "Goal must be at most {MAX_GOAL_CHARS} characters"
            )));
        }
    }

    // Preference invariants.
    if !registration.continue_names.is_empty()
        && registration.mentor_preference != MentorPreference::Continue
    {
        return Err(PortalError::validation(
            "Partner selections require the continue preference",
        ));
    }
    if registration.mentor_preference == MentorPreference::Continue
        && registration.continue_names.is_empty()
    {
        return Err(PortalError::validation(
            "Pick at least one partner to continue with, or change your preference",
        ));
    }
    let capacity = effective_capacity(role, registration.mentee_capacity);
    if registration.continue_names.len() > capacity {
        return Err(PortalError::validation(format!(
            "At most {capacity} continue selection{} allowed at your capacity",
            if capacity == 1 { "" } else { "s" },
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn selection(continue_with: &[&str], avoid: &[&str]) -> PreferenceSelection {
        PreferenceSelection {
            continue_with: names(continue_with),
            avoid: names(avoid),
        }
    }

    fn mentor_input<'a>(
        selection: &'a PreferenceSelection,
        known: &'a [String],
        capacity: u32,
    ) -> ReconcileInput<'a> {
        ReconcileInput {
            role: ParticipantRole::Mentor,
            selection,
            known_partners: known,
            mentee_capacity: Some(capacity),
        }
    }

    #[test]
    fn continue_list_truncates_to_capacity_in_order() {
        let known = names(&["Ada", "Ben", "Cleo", "Dmitri"]);
        let sel = selection(&["Ada", "Ben", "Cleo"], &[]);

        for capacity in 1..=4u32 {
            let result = reconcile_preferences(&mentor_input(&sel, &known, capacity)).unwrap();
            let expect = (capacity as usize).min(3);
            assert_eq!(result.continue_names, names(&["Ada", "Ben", "Cleo"][..expect]));
            assert_eq!(result.warnings.is_empty(), capacity >= 3);
        }
    }

    #[test]
    fn nonempty_continue_names_imply_continue_preference() {
        let known = names(&["Ada", "Ben"]);
        let sel = selection(&["Ben"], &[]);
        let result = reconcile_preferences(&mentor_input(&sel, &known, 2)).unwrap();
        assert_eq!(result.preference, MentorPreference::Continue);
        assert_eq!(result.continue_names, names(&["Ben"]));
    }

    #[test]
    fn partial_avoid_list_is_not_different() {
        let known = names(&["Ada", "Ben", "Cleo"]);
        let sel = selection(&[], &["Ada", "Ben"]);
        let result = reconcile_preferences(&mentor_input(&sel, &known, 2)).unwrap();
        assert_eq!(result.preference, MentorPreference::NoPreference);
    }

    #[test]
    fn avoiding_the_whole_universe_is_different() {
        let known = names(&["Ada", "Ben"]);
        let sel = selection(&[], &["Ben", "Ada"]);
        let result = reconcile_preferences(&mentor_input(&sel, &known, 2)).unwrap();
        assert_eq!(result.preference, MentorPreference::Different);
        assert!(result.continue_names.is_empty());
    }

    #[test]
    fn no_known_partners_falls_back_to_no_preference() {
        let known: Vec<String> = Vec::new();
        let sel = PreferenceSelection::default();
        let result = reconcile_preferences(&mentor_input(&sel, &known, 3)).unwrap();
        assert_eq!(result.preference, MentorPreference::NoPreference);
        assert!(result.continue_names.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn name_in_both_lists_is_rejected() {
        let known = names(&["Ada", "Ben"]);
        let sel = selection(&["Ada"], &["Ada"]);
        let err = reconcile_preferences(&mentor_input(&sel, &known, 2)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn unknown_partner_is_rejected() {
        let known = names(&["Ada"]);
        let sel = selection(&["Zed"], &[]);
        let err = reconcile_preferences(&mentor_input(&sel, &known, 2)).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Zed"));
    }

    #[test]
    fn mentee_capacity_is_always_one() {
        let known = names(&["Ada", "Ben"]);
        let sel = selection(&["Ada", "Ben"], &[]);
        let input = ReconcileInput {
            role: ParticipantRole::Mentee,
            selection: &sel,
            known_partners: &known,
            // A mentee form never carries a capacity; even if it did, it
            // must not widen the limit.
            mentee_capacity: Some(3),
        };
        let result = reconcile_preferences(&input).unwrap();
        assert_eq!(result.continue_names, names(&["Ada"]));
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn mentor_without_declared_capacity_defaults_to_one() {
        let known = names(&["Ada", "Ben"]);
        let sel = selection(&["Ben", "Ada"], &[]);
        let input = ReconcileInput {
            role: ParticipantRole::Mentor,
            selection: &sel,
            known_partners: &known,
            mentee_capacity: None,
        };
        let result = reconcile_preferences(&input).unwrap();
        assert_eq!(result.continue_names, names(&["Ben"]));
    }

    #[test]
    fn duplicate_selection_does_not_consume_capacity_twice() {
        let known = names(&["Ada", "Ben"]);
        let sel = selection(&["Ada", "Ada", "Ben"], &[]);
        let result = reconcile_preferences(&mentor_input(&sel, &known, 2)).unwrap();
        assert_eq!(result.continue_names, names(&["Ada", "Ben"]));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn reconcile_is_pure() {
        let known = names(&["Ada", "Ben", "Cleo"]);
        let sel = selection(&["Ada", "Cleo"], &["Ben"]);
        let input = mentor_input(&sel, &known, 1);
        let first = reconcile_preferences(&input).unwrap();
        let second = reconcile_preferences(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn lowering_capacity_re_truncates_with_notice() {
        let mut reg = Registration {
            industry: "SWE".to_string(),
            skillsets: names(&["Networking"]),
            mentee_capacity: Some(3),
            goal: None,
            mentor_preference: MentorPreference::Continue,
            continue_names: names(&["Ada", "Ben", "Cleo"]),
        };
        let warnings = apply_capacity_change(&mut reg, 2).unwrap();
        assert_eq!(reg.continue_names, names(&["Ada", "Ben"]));
        assert_eq!(reg.mentee_capacity, Some(2));
        assert_eq!(warnings.len(), 1);

        // Raising it back does not resurrect dropped names.
        let warnings = apply_capacity_change(&mut reg, 3).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(reg.continue_names, names(&["Ada", "Ben"]));
    }

    #[test]
    fn capacity_change_to_zero_is_rejected() {
        let mut reg = Registration {
            industry: "SWE".to_string(),
            skillsets: names(&["Networking"]),
            mentee_capacity: Some(2),
            goal: None,
            mentor_preference: MentorPreference::NoPreference,
            continue_names: Vec::new(),
        };
        assert!(apply_capacity_change(&mut reg, 0).is_err());
    }

    fn valid_mentor_registration() -> Registration {
        Registration {
            industry: "Data Science".to_string(),
            skillsets: names(&["Career Path Guidance", "Networking"]),
            mentee_capacity: Some(2),
            goal: Some("Sharpen interviewing skills".to_string()),
            mentor_preference: MentorPreference::Continue,
            continue_names: names(&["Ada"]),
        }
    }

    #[test]
    fn valid_registration_passes() {
        validate_registration(ParticipantRole::Mentor, &valid_mentor_registration()).unwrap();
    }

    #[test]
    fn missing_industry_is_rejected() {
        let mut reg = valid_mentor_registration();
        reg.industry = "  ".to_string();
        assert!(validate_registration(ParticipantRole::Mentor, &reg).is_err());
    }

    #[test]
    fn skillset_bounds_are_enforced() {
        let mut reg = valid_mentor_registration();
        reg.skillsets.clear();
        assert!(validate_registration(ParticipantRole::Mentor, &reg).is_err());

        reg.skillsets = names(&["A", "B", "C", "D"]);
        assert!(validate_registration(ParticipantRole::Mentor, &reg).is_err());

        reg.skillsets = names(&["A", "A"]);
        assert!(validate_registration(ParticipantRole::Mentor, &reg).is_err());
    }

    #[test]
    fn mentor_needs_a_capacity() {
        let mut reg = valid_mentor_registration();
        reg.mentee_capacity = None;
        assert!(validate_registration(ParticipantRole::Mentor, &reg).is_err());

        // A mentee form has no capacity field at all.
        reg.mentor_preference = MentorPreference::NoPreference;
        reg.continue_names.clear();
        validate_registration(ParticipantRole::Mentee, &reg).unwrap();
    }

    #[test]
    fn goal_over_200_chars_is_rejected() {
        let mut reg = valid_mentor_registration();
        reg.goal = Some("x".repeat(MAX_GOAL_CHARS + 1));
        assert!(validate_registration(ParticipantRole::Mentor, &reg).is_err());

        // Characters, not bytes: 200 multibyte characters are fine.
        reg.goal = Some("技".repeat(MAX_GOAL_CHARS));
        validate_registration(ParticipantRole::Mentor, &reg).unwrap();
    }

    #[test]
    fn continue_preference_with_no_names_is_rejected() {
        let mut reg = valid_mentor_registration();
        reg.continue_names.clear();
        let err = validate_registration(ParticipantRole::Mentor, &reg).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn continue_names_with_other_preference_are_rejected() {
        let mut reg = valid_mentor_registration();
        reg.mentor_preference = MentorPreference::Different;
        assert!(validate_registration(ParticipantRole::Mentor, &reg).is_err());
    }

    #[test]
    fn continue_names_over_capacity_are_rejected() {
        let mut reg = valid_mentor_registration();
        reg.mentee_capacity = Some(1);
        reg.continue_names = names(&["Ada", "Ben"]);
        assert!(validate_registration(ParticipantRole::Mentor, &reg).is_err());
    }
}
