//! Shared domain types for the mentorship portal core.
//!
//! Everything here serializes camelCase for the view layer. Role and section
//! identifiers are closed enums — role checks are exhaustive matches, never
//! string comparison.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Account-level role. A user may hold more than one (see [`RoleSet`]).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Employee,
    Intern,
    Volunteer,
    Googler,
    ExternalMentee,
    Admin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Intern => "intern",
            Self::Volunteer => "volunteer",
            Self::Googler => "googler",
            Self::ExternalMentee => "external_mentee",
            Self::Admin => "admin",
        }
    }

    /// Internal org roles get access to internal tooling (DataSearch).
    pub fn is_internal(self) -> bool {
        matches!(self, Self::Employee | Self::Intern | Self::Volunteer)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Intern => "Intern",
            Self::Volunteer => "Volunteer",
            Self::Googler => "Googler",
            Self::ExternalMentee => "External Mentee",
            Self::Admin => "Administrator",
        }
    }
}

/// The set of roles a single account holds (e.g. Employee + Admin).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<UserRole>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(role: UserRole) -> Self {
        std::iter::once(role).collect()
    }

    pub fn contains(&self, role: UserRole) -> bool {
        self.0.contains(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_admin(&self) -> bool {
        self.contains(UserRole::Admin)
    }

    /// True when any held role is an internal org role.
    pub fn is_internal(&self) -> bool {
        self.0.iter().any(|r| r.is_internal())
    }

    pub fn iter(&self) -> impl Iterator<Item = UserRole> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<UserRole> for RoleSet {
    fn from_iter<I: IntoIterator<Item = UserRole>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Role within a mentorship round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    Mentor,
    Mentee,
}

impl ParticipantRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mentor => "mentor",
            Self::Mentee => "mentee",
        }
    }
}

/// Navigable portal sections, gated by [`crate::visibility`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Dashboard,
    DataSearch,
    UserManagement,
    MatchManagement,
    Meetings,
    History,
}

/// Which dashboard variant a role set receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DashboardView {
    Personal,
    MentorshipOnly,
    Denied,
}

/// Next-round partner preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MentorPreference {
    Continue,
    Different,
    NoPreference,
}

impl MentorPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Different => "different",
            Self::NoPreference => "no-preference",
        }
    }
}

/// The canonical preference input: two disjoint multi-select lists drawn
/// from the user's known-partner universe, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSelection {
    /// Partners the user wants to continue with next round.
    #[serde(default)]
    pub continue_with: Vec<String>,
    /// Partners the user does not want to continue with.
    #[serde(default)]
    pub avoid: Vec<String>,
}

/// A saved mentorship-round registration.
///
/// Invariants (enforced by [`crate::registration::validate_registration`]):
/// non-empty `continue_names` implies `mentor_preference == Continue`, and
/// `continue_names` never exceeds the effective capacity (1 for mentees).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub industry: String,
    /// Up to 3 focus skillsets, unique, in selection order.
    pub skillsets: Vec<String>,
    /// Mentor only: how many mentees they can take this round.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentee_capacity: Option<u32>,
    /// Optional personal goal for the round, at most 200 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    pub mentor_preference: MentorPreference,
    /// Meaningful only when `mentor_preference` is Continue.
    #[serde(default)]
    pub continue_names: Vec<String>,
}

/// One user-entered meeting slot, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSlot {
    /// Slots without a date are dropped by the builder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// 24-hour "HH:MM".
    pub start_time: String,
    /// 24-hour "HH:MM". May be earlier than the start (overnight meeting).
    pub end_time: String,
}

/// A persisted meeting record. Immutable once created, except for deletion
/// by the owning participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRecord {
    pub id: String,
    pub date: NaiveDate,
    /// Display string, e.g. "23:30 - 00:30".
    pub time: String,
    pub start_time: String,
    pub end_time: String,
    /// IANA timezone the times were entered in.
    pub timezone: String,
    pub duration_minutes: u32,
    pub partner_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_email: Option<String>,
    pub is_completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipationStatus {
    Active,
    Completed,
    Pending,
}

/// Matched-partner detail surfaced by the matching-result view. The match
/// itself is produced elsewhere; this module only carries the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerDetails {
    pub name: String,
    pub email: String,
    pub match_reason: String,
}

/// One user's membership in a round: role, partners, and meeting history
/// (most recently added first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipParticipation {
    pub program_name: String,
    pub round_id: String,
    pub role: ParticipantRole,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ParticipationStatus,
    /// Mentor: mentee names. Mentee: the single mentor name.
    pub partner_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_details: Option<Vec<PartnerDetails>>,
    pub meetings: Vec<MeetingRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration: Option<Registration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    Active,
    Completed,
}

/// Phase deadlines within a round. Optional on a round — the admin form
/// creates rounds without them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundPhases {
    pub registration: NaiveDate,
    pub matching: NaiveDate,
    pub in_progress: NaiveDate,
    pub summary: NaiveDate,
    pub completed: NaiveDate,
}

/// A mentorship program cycle with a required meeting count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipRound {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: RoundStatus,
    /// Minimum meetings a pair must complete this round, >= 1.
    pub required_meetings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phases: Option<RoundPhases>,
}

/// Personal-dashboard activity counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityMetrics {
    pub jira_tickets: u32,
    pub merged_cls: u32,
    pub merged_loc: u32,
    pub meeting_hours: f64,
    pub chat_messages: u32,
}

/// A portal account with its mentorship history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub ldap: String,
    pub email: String,
    pub roles: RoleSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_role: Option<ParticipantRole>,
    #[serde(default)]
    pub is_terminated: bool,
    #[serde(default)]
    pub activity_metrics: ActivityMetrics,
    #[serde(default)]
    pub mentorship_participation: Vec<MentorshipParticipation>,
}

/// Admin-dashboard row: one mentor/mentee pair with meeting totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipPair {
    pub mentor_name: String,
    pub mentee_name: String,
    pub program_name: String,
    pub completed_meetings: u32,
    pub total_meetings: u32,
    pub total_hours: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_set_holds_multiple_roles() {
        let roles: RoleSet = [UserRole::Employee, UserRole::Admin].into_iter().collect();
        assert!(roles.is_admin());
        assert!(roles.is_internal());
        assert!(!roles.contains(UserRole::Googler));
    }

    #[test]
    fn external_roles_are_not_internal() {
        assert!(!RoleSet::single(UserRole::Googler).is_internal());
        assert!(!RoleSet::single(UserRole::ExternalMentee).is_internal());
        assert!(!RoleSet::single(UserRole::Admin).is_internal());
    }

    #[test]
    fn role_serializes_snake_case() {
        let json = serde_json::to_string(&UserRole::ExternalMentee).unwrap();
        assert_eq!(json, "\"external_mentee\"");
    }

    #[test]
    fn preference_serializes_kebab_case() {
        let json = serde_json::to_string(&MentorPreference::NoPreference).unwrap();
        assert_eq!(json, "\"no-preference\"");
    }

    #[test]
    fn registration_round_trips_camel_case() {
        let reg = Registration {
            industry: "SWE".to_string(),
            skillsets: vec!["Networking".to_string()],
            mentee_capacity: Some(2),
            goal: None,
            mentor_preference: MentorPreference::Continue,
            continue_names: vec!["Ada Park".to_string()],
        };
        let json = serde_json::to_value(&reg).unwrap();
        assert_eq!(json["menteeCapacity"], 2);
        assert_eq!(json["continueNames"][0], "Ada Park");
        let back: Registration = serde_json::from_value(json).unwrap();
        assert_eq!(back, reg);
    }
}
