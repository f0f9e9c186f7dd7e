//! Role-based section visibility.
//!
//! Pure functions of the account's role set and its mentorship participant
//! role — no state, no transitions.

use crate::types::{DashboardView, ParticipantRole, RoleSet, Section};

/// Compute the sections navigable by an account.
///
/// Dashboard is always visible. DataSearch is internal-only. The admin
/// sections require the Admin role. Meetings and History require an active
/// mentor or mentee participant role. Order is stable (sidebar order).
pub fn visible_sections(roles: &RoleSet, participant: Option<ParticipantRole>) -> Vec<Section> {
    let mut sections = vec![Section::Dashboard];

    if roles.is_internal() {
        sections.push(Section::DataSearch);
    }

    if roles.is_admin() {
        sections.push(Section::UserManagement);
        sections.push(Section::MatchManagement);
    }

    if participant.is_some() {
        sections.push(Section::Meetings);
        sections.push(Section::History);
    }

    sections
}

/// Which dashboard variant a role set receives.
///
/// Internal accounts and admins get the personal dashboard; external
/// mentorship accounts (Googler, ExternalMentee) get the mentorship-only
/// view; anything else is denied.
pub fn dashboard_view(roles: &RoleSet) -> DashboardView {
    use crate::types::UserRole;

    if roles.is_internal() || roles.is_admin() {
        return DashboardView::Personal;
    }
    if roles.contains(UserRole::Googler) || roles.contains(UserRole::ExternalMentee) {
        return DashboardView::MentorshipOnly;
    }
    DashboardView::Denied
}

/// Convenience check used by services before touching a gated section.
pub fn can_access(roles: &RoleSet, participant: Option<ParticipantRole>, section: Section) -> bool {
    visible_sections(roles, participant).contains(&section)
}
