//! Demo driver: seeds the in-memory store and walks the main portal flows,
//! logging as it goes. `RUST_LOG=info cargo run` shows the full trace.

use chrono::Utc;

use mentordesk::config;
use mentordesk::rounds::{is_upcoming, RoundForm};
use mentordesk::services::{dashboard, meetings, registration, rounds};
use mentordesk::store::{seed, MemoryStore, MentorshipStore};
use mentordesk::types::{MeetingSlot, PreferenceSelection, RoundStatus};
use mentordesk::visibility::visible_sections;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::load().unwrap_or_default();
    log::info!("program: {}", config.program_name);

    let store = MemoryStore::seeded();
    let now = Utc::now();
    let today = now.date_naive();

    // Navigation per account.
    for user in store.list_users() {
        let sections = visible_sections(&user.roles, user.participant_role);
        log::info!(
            "{} ({}) sees: {}",
            user.name,
            user.roles
                .iter()
                .map(|r| r.label())
                .collect::<Vec<_>>()
                .join(" + "),
            serde_json::to_string(&sections)?,
        );
    }

    // A mentor registers for the next round that has not started yet,
    // over capacity on purpose to show the truncation notice.
    let upcoming = store
        .list_rounds()
        .into_iter()
        .filter(|r| is_upcoming(r, today))
        .min_by_key(|r| r.start_date);
    match upcoming {
        Some(round) => {
            let saved = registration::submit_registration(
                &store,
                seed::MENTOR_MAYA,
                &registration::RegistrationRequest {
                    round_id: round.id.clone(),
                    industry: "SWE".to_string(),
                    skillsets: vec![
                        "Career Path Guidance".to_string(),
                        "Technical Skills Development".to_string(),
                    ],
                    mentee_capacity: Some(2),
                    goal: Some("Carry both mentees through their next review".to_string()),
                    selection: PreferenceSelection {
                        continue_with: vec![
                            "Ada Park".to_string(),
                            "Ben Liu".to_string(),
                            "Priya Nair".to_string(),
                        ],
                        avoid: Vec::new(),
                    },
                },
                today,
            )?;
            log::info!(
                "registration for {}: preference={} continue={:?}",
                round.name,
                saved.registration.mentor_preference.as_str(),
                saved.registration.continue_names,
            );
            for warning in &saved.warnings {
                log::warn!("notice: {warning}");
            }
        }
        None => log::info!("no upcoming round open for registration"),
    }

    // A mentee records two meetings, one crossing midnight, one date-less.
    let outcome = meetings::submit_meetings(
        &store,
        seed::MENTEE_ADA,
        &meetings::MeetingSubmission {
            round_id: seed::ROUND_SPRING_2026.to_string(),
            timezone: config.default_timezone.clone(),
            slots: vec![
                MeetingSlot {
                    date: Some("2026-05-12".parse().expect("literal date")),
                    start_time: "23:30".to_string(),
                    end_time: "00:30".to_string(),
                },
                MeetingSlot {
                    date: None,
                    start_time: "10:00".to_string(),
                    end_time: "11:00".to_string(),
                },
            ],
        },
        now,
    )?;
    log::info!(
        "recorded {} meeting(s), {} slot(s) dropped; first duration {}min",
        outcome.records.len(),
        outcome.rejected_count,
        outcome.records[0].duration_minutes,
    );
    meetings::delete_meeting(
        &store,
        seed::MENTEE_ADA,
        seed::ROUND_SPRING_2026,
        &outcome.records[0].id,
    )?;

    // Admin round management.
    let round = rounds::create_round(
        &store,
        seed::ADMIN_NOOR,
        &RoundForm {
            name: "Spring 2027".to_string(),
            start_date: Some("2027-03-01".parse().expect("literal date")),
            end_date: Some("2027-06-30".parse().expect("literal date")),
            status: RoundStatus::Active,
            required_meetings: config.default_required_meetings,
        },
    )?;
    rounds::delete_round(&store, seed::ADMIN_NOOR, &round.id)?;

    let overview = dashboard::admin_overview(&store, seed::ADMIN_NOOR)?;
    println!("{}", serde_json::to_string_pretty(&overview)?);

    let data = dashboard::load_dashboard(&store, seed::MENTEE_ADA, today)?;
    println!("{}", serde_json::to_string_pretty(&data)?);

    Ok(())
}
