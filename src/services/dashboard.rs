//! Dashboard assembly: the payloads the view layer renders per role.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dashboard::{pair_rows, participation_stats, ParticipationStats};
use crate::error::PortalError;
use crate::rounds::{is_upcoming, round_stats, RoundStats};
use crate::store::MentorshipStore;
use crate::types::{
    ActivityMetrics, DashboardView, MentorshipPair, MentorshipParticipation, MentorshipRound,
    Section,
};
use crate::visibility::{dashboard_view, visible_sections};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationView {
    #[serde(flatten)]
    pub participation: MentorshipParticipation,
    pub stats: ParticipationStats,
}

/// Everything the dashboard page needs for one user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub user_name: String,
    pub view: DashboardView,
    pub sections: Vec<Section>,
    /// Personal view only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivityMetrics>,
    pub participations: Vec<ParticipationView>,
    /// Earliest round that has not started yet, for the "starting soon"
    /// notice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming_round: Option<MentorshipRound>,
}

/// Assemble the dashboard for a user. A denied view carries only the
/// navigation skeleton.
pub fn load_dashboard(
    store: &dyn MentorshipStore,
    user_id: &str,
    today: NaiveDate,
) -> Result<DashboardData, PortalError> {
    let user = store.get_user(user_id)?;
    let view = dashboard_view(&user.roles);
    let sections = visible_sections(&user.roles, user.participant_role);

    if view == DashboardView::Denied {
        return Ok(DashboardData {
            user_name: user.name,
            view,
            sections,
            activity: None,
            participations: Vec::new(),
            upcoming_round: None,
        });
    }

    let participations = user
        .mentorship_participation
        .into_iter()
        .map(|participation| ParticipationView {
            stats: participation_stats(&participation),
            participation,
        })
        .collect();

    let upcoming_round = store
        .list_rounds()
        .into_iter()
        .filter(|r| is_upcoming(r, today))
        .min_by_key(|r| r.start_date);

    Ok(DashboardData {
        user_name: user.name,
        view,
        sections,
        activity: (view == DashboardView::Personal).then_some(user.activity_metrics),
        participations,
        upcoming_round,
    })
}

/// Admin home: round counters plus the mentor/mentee pair table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub rounds: RoundStats,
    pub pairs: Vec<MentorshipPair>,
}

pub fn admin_overview(
    store: &dyn MentorshipStore,
    acting_user_id: &str,
) -> Result<AdminOverview, PortalError> {
    let user = store.get_user(acting_user_id)?;
    if !user.roles.is_admin() {
        return Err(PortalError::Forbidden {
            action: "viewing the admin dashboard",
        });
    }

    Ok(AdminOverview {
        rounds: round_stats(&store.list_rounds()),
        pairs: pair_rows(&store.list_users()),
    })
}
