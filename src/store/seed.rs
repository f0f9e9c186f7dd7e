//! Demo dataset for the in-memory store.
//!
//! Deterministic fixtures: stable ids, fixed dates inside their round
//! windows. The binary and the tests both lean on these constants.

use chrono::NaiveDate;

use super::memory::Dataset;
use crate::types::{
    ActivityMetrics, MeetingRecord, MentorPreference, MentorshipParticipation, MentorshipRound,
    ParticipantRole, ParticipationStatus, PartnerDetails, Registration, RoleSet, RoundPhases,
    RoundStatus, UserData, UserRole,
};

pub const ROUND_SPRING_2026: &str = "round-2026-spring";
pub const ROUND_FALL_2025: &str = "round-2025-fall";
pub const ROUND_FALL_2026: &str = "round-2026-fall";

pub const ADMIN_NOOR: &str = "user-noor";
pub const MENTOR_MAYA: &str = "user-maya";
pub const MENTEE_ADA: &str = "user-ada";
pub const MENTEE_BEN: &str = "user-ben";
pub const MENTEE_PRIYA: &str = "user-priya";
pub const INTERN_SAM: &str = "user-sam";

fn date(value: &str) -> NaiveDate {
    value.parse().expect("seed dates are well-formed")
}

fn meeting(
    id: &str,
    day: &str,
    start: &str,
    end: &str,
    minutes: u32,
    partner: &str,
    completed: bool,
) -> MeetingRecord {
    MeetingRecord {
        id: id.to_string(),
        date: date(day),
        time: format!("{start} - {end}"),
        start_time: start.to_string(),
        end_time: end.to_string(),
        timezone: "America/Los_Angeles".to_string(),
        duration_minutes: minutes,
        partner_name: partner.to_string(),
        partner_email: None,
        is_completed: completed,
    }
}

pub fn demo_dataset() -> Dataset {
    let rounds = vec![
        MentorshipRound {
            id: ROUND_FALL_2026.to_string(),
            name: "Fall 2026".to_string(),
            start_date: date("2026-09-01"),
            end_date: date("2026-12-20"),
            status: RoundStatus::Active,
            required_meetings: 8,
            phases: Some(RoundPhases {
                registration: date("2026-08-15"),
                matching: date("2026-08-29"),
                in_progress: date("2026-12-06"),
                summary: date("2026-12-13"),
                completed: date("2026-12-20"),
            }),
        },
        MentorshipRound {
            id: ROUND_SPRING_2026.to_string(),
            name: "Spring 2026".to_string(),
            start_date: date("2026-03-01"),
            end_date: date("2026-06-30"),
            status: RoundStatus::Active,
            required_meetings: 8,
            phases: None,
        },
        MentorshipRound {
            id: ROUND_FALL_2025.to_string(),
            name: "Fall 2025".to_string(),
            start_date: date("2025-09-01"),
            end_date: date("2025-12-31"),
            status: RoundStatus::Completed,
            required_meetings: 6,
            phases: None,
        },
    ];

    let maya_spring = MentorshipParticipation {
        program_name: "Spring 2026".to_string(),
        round_id: ROUND_SPRING_2026.to_string(),
        role: ParticipantRole::Mentor,
        start_date: date("2026-03-01"),
        end_date: date("2026-06-30"),
        status: ParticipationStatus::Active,
        partner_names: vec!["Ada Park".to_string(), "Ben Liu".to_string()],
        partner_details: None,
        meetings: vec![
            meeting(
                "mtg-1004",
                "2026-06-20",
                "17:00",
                "18:00",
                60,
                "Ben Liu",
                false,
            ),
            meeting(
                "mtg-1003",
                "2026-04-18",
                "09:30",
                "10:30",
                60,
                "Ada Park",
                true,
            ),
            meeting(
                "mtg-1002",
                "2026-04-03",
                "17:00",
                "18:30",
                90,
                "Ben Liu",
                true,
            ),
            meeting(
                "mtg-1001",
                "2026-03-12",
                "10:00",
                "11:00",
                60,
                "Ada Park",
                true,
            ),
        ],
        registration: Some(Registration {
            industry: "SWE".to_string(),
            skillsets: vec![
                "Career Path Guidance".to_string(),
                "Technical Skills Development".to_string(),
            ],
            mentee_capacity: Some(2),
            goal: Some("Help two mentees land their first promotion cycle".to_string()),
            mentor_preference: MentorPreference::NoPreference,
            continue_names: Vec::new(),
        }),
    };

    let maya_fall_2025 = MentorshipParticipation {
        program_name: "Fall 2025".to_string(),
        round_id: ROUND_FALL_2025.to_string(),
        role: ParticipantRole::Mentor,
        start_date: date("2025-09-01"),
        end_date: date("2025-12-31"),
        status: ParticipationStatus::Completed,
        partner_names: vec!["Priya Nair".to_string()],
        partner_details: None,
        meetings: vec![
            meeting(
                "mtg-0902",
                "2025-11-07",
                "16:00",
                "17:00",
                60,
                "Priya Nair",
                true,
            ),
            meeting(
                "mtg-0901",
                "2025-09-19",
                "16:00",
                "17:30",
                90,
                "Priya Nair",
                true,
            ),
        ],
        registration: None,
    };

    let ada_spring = MentorshipParticipation {
        program_name: "Spring 2026".to_string(),
        round_id: ROUND_SPRING_2026.to_string(),
        role: ParticipantRole::Mentee,
        start_date: date("2026-03-01"),
        end_date: date("2026-06-30"),
        status: ParticipationStatus::Active,
        partner_names: vec!["Maya Osei".to_string()],
        partner_details: Some(vec![PartnerDetails {
            name: "Maya Osei".to_string(),
            email: "maya.osei@example.com".to_string(),
            match_reason: "Shared SWE focus and overlapping availability".to_string(),
        }]),
        meetings: vec![
            meeting(
                "mtg-2002",
                "2026-04-18",
                "09:30",
                "10:30",
                60,
                "Maya Osei",
                true,
            ),
            meeting(
                "mtg-2001",
                "2026-03-12",
                "10:00",
                "11:00",
                60,
                "Maya Osei",
                true,
            ),
        ],
        registration: None,
    };

    let ben_spring = MentorshipParticipation {
        program_name: "Spring 2026".to_string(),
        round_id: ROUND_SPRING_2026.to_string(),
        role: ParticipantRole::Mentee,
        start_date: date("2026-03-01"),
        end_date: date("2026-06-30"),
        status: ParticipationStatus::Active,
        partner_names: vec!["Maya Osei".to_string()],
        partner_details: None,
        meetings: vec![meeting(
            "mtg-2101",
            "2026-04-03",
            "17:00",
            "18:30",
            90,
            "Maya Osei",
            true,
        )],
        registration: None,
    };

    let priya_fall_2025 = MentorshipParticipation {
        program_name: "Fall 2025".to_string(),
        round_id: ROUND_FALL_2025.to_string(),
        role: ParticipantRole::Mentee,
        start_date: date("2025-09-01"),
        end_date: date("2025-12-31"),
        status: ParticipationStatus::Completed,
        partner_names: vec!["Maya Osei".to_string()],
        partner_details: None,
        meetings: vec![meeting(
            "mtg-2201",
            "2025-11-07",
            "16:00",
            "17:00",
            60,
            "Maya Osei",
            true,
        )],
        registration: None,
    };

    let users = vec![
        UserData {
            id: ADMIN_NOOR.to_string(),
            name: "Noor Haddad".to_string(),
            ldap: "nhaddad".to_string(),
            email: "noor.haddad@example.com".to_string(),
            roles: [UserRole::Employee, UserRole::Admin].into_iter().collect(),
            participant_role: None,
            is_terminated: false,
            activity_metrics: ActivityMetrics {
                jira_tickets: 24,
                merged_cls: 18,
                merged_loc: 2210,
                meeting_hours: 31.5,
                chat_messages: 512,
            },
            mentorship_participation: Vec::new(),
        },
        UserData {
            id: MENTOR_MAYA.to_string(),
            name: "Maya Osei".to_string(),
            ldap: "mosei".to_string(),
            email: "maya.osei@example.com".to_string(),
            roles: RoleSet::single(UserRole::Volunteer),
            participant_role: Some(ParticipantRole::Mentor),
            is_terminated: false,
            activity_metrics: ActivityMetrics {
                jira_tickets: 9,
                merged_cls: 4,
                merged_loc: 350,
                meeting_hours: 12.0,
                chat_messages: 143,
            },
            mentorship_participation: vec![maya_spring, maya_fall_2025],
        },
        UserData {
            id: MENTEE_ADA.to_string(),
            name: "Ada Park".to_string(),
            ldap: "apark".to_string(),
            email: "ada.park@example.com".to_string(),
            roles: RoleSet::single(UserRole::ExternalMentee),
            participant_role: Some(ParticipantRole::Mentee),
            is_terminated: false,
            activity_metrics: ActivityMetrics::default(),
            mentorship_participation: vec![ada_spring],
        },
        UserData {
            id: MENTEE_BEN.to_string(),
            name: "Ben Liu".to_string(),
            ldap: "bliu".to_string(),
            email: "ben.liu@example.com".to_string(),
            roles: RoleSet::single(UserRole::Intern),
            participant_role: Some(ParticipantRole::Mentee),
            is_terminated: false,
            activity_metrics: ActivityMetrics {
                jira_tickets: 6,
                merged_cls: 11,
                merged_loc: 980,
                meeting_hours: 8.0,
                chat_messages: 267,
            },
            mentorship_participation: vec![ben_spring],
        },
        UserData {
            id: MENTEE_PRIYA.to_string(),
            name: "Priya Nair".to_string(),
            ldap: "pnair".to_string(),
            email: "priya.nair@example.com".to_string(),
            roles: RoleSet::single(UserRole::Googler),
            participant_role: Some(ParticipantRole::Mentee),
            is_terminated: false,
            activity_metrics: ActivityMetrics::default(),
            mentorship_participation: vec![priya_fall_2025],
        },
        UserData {
            id: INTERN_SAM.to_string(),
            name: "Sam Reyes".to_string(),
            ldap: "sreyes".to_string(),
            email: "sam.reyes@example.com".to_string(),
            roles: RoleSet::single(UserRole::Intern),
            participant_role: None,
            is_terminated: false,
            activity_metrics: ActivityMetrics {
                jira_tickets: 3,
                merged_cls: 2,
                merged_loc: 140,
                meeting_hours: 2.5,
                chat_messages: 58,
            },
            mentorship_participation: Vec::new(),
        },
    ];

    Dataset { users, rounds }
}
