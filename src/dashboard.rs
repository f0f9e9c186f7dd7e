//! Dashboard statistics derived from participations.

use serde::Serialize;

use crate::types::{MentorshipPair, MentorshipParticipation, ParticipantRole, UserData};

/// Meeting totals for one participation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationStats {
    pub total_meetings: usize,
    pub completed_meetings: usize,
    /// Rounded percentage, 0 for an empty history.
    pub completion_rate: u32,
}

pub fn participation_stats(participation: &MentorshipParticipation) -> ParticipationStats {
    let total = participation.meetings.len();
    let completed = participation
        .meetings
        .iter()
        .filter(|m| m.is_completed)
        .count();
    let completion_rate = if total > 0 {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };
    ParticipationStats {
        total_meetings: total,
        completed_meetings: completed,
        completion_rate,
    }
}

/// The participations shown when a round is selected in the card.
pub fn participations_for_round<'a>(
    participations: &'a [MentorshipParticipation],
    round_id: &str,
) -> Vec<&'a MentorshipParticipation> {
    participations
        .iter()
        .filter(|p| p.round_id == round_id)
        .collect()
}

/// Flatten mentor participations into the admin pair table: one row per
/// mentor/mentee pair, with per-pair meeting totals and hours.
pub fn pair_rows(users: &[UserData]) -> Vec<MentorshipPair> {
    let mut rows = Vec::new();
    for user in users {
        for participation in &user.mentorship_participation {
            if participation.role != ParticipantRole::Mentor {
                continue;
            }
            for mentee in &participation.partner_names {
                let pair_meetings: Vec<_> = participation
                    .meetings
                    .iter()
                    .filter(|m| &m.partner_name == mentee)
                    .collect();
                let completed = pair_meetings.iter().filter(|m| m.is_completed).count();
                let minutes: u32 = pair_meetings.iter().map(|m| m.duration_minutes).sum();
                rows.push(MentorshipPair {
                    mentor_name: user.name.clone(),
                    mentee_name: mentee.clone(),
                    program_name: participation.program_name.clone(),
                    completed_meetings: completed as u32,
                    total_meetings: pair_meetings.len() as u32,
                    total_hours: f64::from(minutes) / 60.0,
                });
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        MeetingRecord, ParticipationStatus, RoleSet, UserRole,
    };

    fn meeting(partner: &str, minutes: u32, completed: bool) -> MeetingRecord {
        MeetingRecord {
            id: format!("mtg-{partner}-{minutes}"),
            date: "2026-04-01".parse().unwrap(),
            time: "10:00 - 11:00".to_string(),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            timezone: "UTC".to_string(),
            duration_minutes: minutes,
            partner_name: partner.to_string(),
            partner_email: None,
            is_completed: completed,
        }
    }

    fn participation(
        round_id: &str,
        role: ParticipantRole,
        partners: &[&str],
        meetings: Vec<MeetingRecord>,
    ) -> MentorshipParticipation {
        MentorshipParticipation {
            program_name: "Spring 2026".to_string(),
            round_id: round_id.to_string(),
            role,
            start_date: "2026-03-01".parse().unwrap(),
            end_date: "2026-06-30".parse().unwrap(),
            status: ParticipationStatus::Active,
            partner_names: partners.iter().map(|s| s.to_string()).collect(),
            partner_details: None,
            meetings,
            registration: None,
        }
    }

    #[test]
    fn stats_round_the_completion_rate() {
        let p = participation(
            "r1",
            ParticipantRole::Mentee,
            &["Ada"],
            vec![
                meeting("Ada", 60, true),
                meeting("Ada", 60, true),
                meeting("Ada", 60, false),
            ],
        );
        let stats = participation_stats(&p);
        assert_eq!(stats.total_meetings, 3);
        assert_eq!(stats.completed_meetings, 2);
        assert_eq!(stats.completion_rate, 67);
    }

    #[test]
    fn empty_history_is_zero_rate() {
        let p = participation("r1", ParticipantRole::Mentee, &["Ada"], Vec::new());
        assert_eq!(participation_stats(&p).completion_rate, 0);
    }

    #[test]
    fn round_filter_matches_ids() {
        let parts = vec![
            participation("r1", ParticipantRole::Mentee, &["Ada"], Vec::new()),
            participation("r2", ParticipantRole::Mentee, &["Ben"], Vec::new()),
        ];
        let filtered = participations_for_round(&parts, "r2");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].partner_names, vec!["Ben".to_string()]);
    }

    #[test]
    fn pair_rows_split_mentor_meetings_by_mentee() {
        let user = UserData {
            id: "u1".to_string(),
            name: "Maya Osei".to_string(),
            ldap: "mosei".to_string(),
            email: "mosei@example.com".to_string(),
            roles: RoleSet::single(UserRole::Volunteer),
            participant_role: Some(ParticipantRole::Mentor),
            is_terminated: false,
            activity_metrics: Default::default(),
            mentorship_participation: vec![participation(
                "r1",
                ParticipantRole::Mentor,
                &["Ada", "Ben"],
                vec![
                    meeting("Ada", 60, true),
                    meeting("Ada", 30, false),
                    meeting("Ben", 90, true),
                ],
            )],
        };

        let rows = pair_rows(&[user]);
        assert_eq!(rows.len(), 2);

        let ada = rows.iter().find(|r| r.mentee_name == "Ada").unwrap();
        assert_eq!(ada.total_meetings, 2);
        assert_eq!(ada.completed_meetings, 1);
        assert!((ada.total_hours - 1.5).abs() < f64::EPSILON);

        let ben = rows.iter().find(|r| r.mentee_name == "Ben").unwrap();
        assert_eq!(ben.total_meetings, 1);
        assert!((ben.total_hours - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn mentee_participations_produce_no_rows() {
        let user = UserData {
            id: "u2".to_string(),
            name: "Ada Park".to_string(),
            ldap: "apark".to_string(),
            email: "apark@example.com".to_string(),
            roles: RoleSet::single(UserRole::ExternalMentee),
            participant_role: Some(ParticipantRole::Mentee),
            is_terminated: false,
            activity_metrics: Default::default(),
            mentorship_participation: vec![participation(
                "r1",
                ParticipantRole::Mentee,
                &["Maya Osei"],
                vec![meeting("Maya Osei", 60, true)],
            )],
        };
        assert!(pair_rows(&[user]).is_empty());
    }
}
