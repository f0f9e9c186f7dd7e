//! In-memory implementation of the store.
//!
//! A single `RwLock` over the dataset. Mutations validate their target
//! before touching anything, so a failed call leaves the dataset unchanged.

use parking_lot::RwLock;

use super::{seed, MentorshipStore};
use crate::error::PortalError;
use crate::types::{
    MeetingRecord, MentorshipParticipation, MentorshipRound, ParticipationStatus, Registration,
    UserData,
};

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub users: Vec<UserData>,
    /// Newest first.
    pub rounds: Vec<MentorshipRound>,
}

pub struct MemoryStore {
    inner: RwLock<Dataset>,
}

impl MemoryStore {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            inner: RwLock::new(dataset),
        }
    }

    pub fn empty() -> Self {
        Self::new(Dataset::default())
    }

    /// A store preloaded with the demo dataset.
    pub fn seeded() -> Self {
        Self::new(seed::demo_dataset())
    }
}

impl MentorshipStore for MemoryStore {
    fn get_user(&self, user_id: &str) -> Result<UserData, PortalError> {
        self.inner
            .read()
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| PortalError::not_found("user", user_id))
    }

    fn list_users(&self) -> Vec<UserData> {
        self.inner.read().users.clone()
    }

    fn list_rounds(&self) -> Vec<MentorshipRound> {
        self.inner.read().rounds.clone()
    }

    fn get_round(&self, round_id: &str) -> Result<MentorshipRound, PortalError> {
        self.inner
            .read()
            .rounds
            .iter()
            .find(|r| r.id == round_id)
            .cloned()
            .ok_or_else(|| PortalError::not_found("round", round_id))
    }

    fn insert_round(&self, round: MentorshipRound) {
        self.inner.write().rounds.insert(0, round);
    }

    fn update_round(&self, round: MentorshipRound) -> Result<(), PortalError> {
        let mut data = self.inner.write();
        let slot = data
            .rounds
            .iter_mut()
            .find(|r| r.id == round.id)
            .ok_or_else(|| PortalError::not_found("round", round.id.clone()))?;
        *slot = round;
        Ok(())
    }

    fn delete_round(&self, round_id: &str) -> Result<(), PortalError> {
        let mut data = self.inner.write();
        let before = data.rounds.len();
        data.rounds.retain(|r| r.id != round_id);
        if data.rounds.len() == before {
            return Err(PortalError::not_found("round", round_id));
        }
        Ok(())
    }

    fn get_participation(
        &self,
        user_id: &str,
        round_id: &str,
    ) -> Result<MentorshipParticipation, PortalError> {
        let data = self.inner.read();
        let user = data
            .users
            .iter()
            .find(|u| u.id == user_id)
            .ok_or_else(|| PortalError::not_found("user", user_id))?;
        user.mentorship_participation
            .iter()
            .find(|p| p.round_id == round_id)
            .cloned()
            .ok_or_else(|| PortalError::not_found("participation", round_id))
    }

    fn known_partners(&self, user_id: &str) -> Result<Vec<String>, PortalError> {
        let data = self.inner.read();
        let user = data
            .users
            .iter()
            .find(|u| u.id == user_id)
            .ok_or_else(|| PortalError::not_found("user", user_id))?;

        let mut partners = Vec::new();
        for participation in &user.mentorship_participation {
            for name in &participation.partner_names {
                if !partners.contains(name) {
                    partners.push(name.clone());
                }
            }
        }
        Ok(partners)
    }

    fn save_registration(
        &self,
        user_id: &str,
        round_id: &str,
        registration: Registration,
    ) -> Result<(), PortalError> {
        let mut data = self.inner.write();

        let round = data
            .rounds
            .iter()
            .find(|r| r.id == round_id)
            .cloned()
            .ok_or_else(|| PortalError::not_found("round", round_id))?;

        let user = data
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| PortalError::not_found("user", user_id))?;

        if let Some(participation) = user
            .mentorship_participation
            .iter_mut()
            .find(|p| p.round_id == round_id)
        {
            participation.registration = Some(registration);
            return Ok(());
        }

        // First registration for this round: create a pending shell that
        // matching will later fill with partners.
        let role = user.participant_role.ok_or_else(|| {
            PortalError::validation("You are not a mentorship participant")
        })?;
        user.mentorship_participation.insert(
            0,
            MentorshipParticipation {
                program_name: round.name.clone(),
                round_id: round.id.clone(),
                role,
                start_date: round.start_date,
                end_date: round.end_date,
                status: ParticipationStatus::Pending,
                partner_names: Vec::new(),
                partner_details: None,
                meetings: Vec::new(),
                registration: Some(registration),
            },
        );
        Ok(())
    }

    fn append_meetings(
        &self,
        user_id: &str,
        round_id: &str,
        records: Vec<MeetingRecord>,
    ) -> Result<(), PortalError> {
        let mut data = self.inner.write();
        let user = data
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| PortalError::not_found("user", user_id))?;
        let participation = user
            .mentorship_participation
            .iter_mut()
            .find(|p| p.round_id == round_id)
            .ok_or_else(|| PortalError::not_found("participation", round_id))?;

        let existing = std::mem::take(&mut participation.meetings);
        participation.meetings = records;
        participation.meetings.extend(existing);
        Ok(())
    }

    fn remove_meeting(
        &self,
        user_id: &str,
        round_id: &str,
        meeting_id: &str,
    ) -> Result<(), PortalError> {
        let mut data = self.inner.write();
        let user = data
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| PortalError::not_found("user", user_id))?;
        let participation = user
            .mentorship_participation
            .iter_mut()
            .find(|p| p.round_id == round_id)
            .ok_or_else(|| PortalError::not_found("participation", round_id))?;

        let before = participation.meetings.len();
        participation.meetings.retain(|m| m.id != meeting_id);
        if participation.meetings.len() == before {
            return Err(PortalError::not_found("meeting", meeting_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> MeetingRecord {
        MeetingRecord {
            id: id.to_string(),
            date: "2026-04-01".parse().unwrap(),
            time: "10:00 - 11:00".to_string(),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            timezone: "UTC".to_string(),
            duration_minutes: 60,
            partner_name: "Maya Osei".to_string(),
            partner_email: None,
            is_completed: true,
        }
    }

    #[test]
    fn seeded_store_resolves_users_and_rounds() {
        let store = MemoryStore::seeded();
        let user = store.get_user(seed::MENTOR_MAYA).unwrap();
        assert!(!user.mentorship_participation.is_empty());
        assert!(store.get_round(seed::ROUND_SPRING_2026).is_ok());
        assert!(store.get_user("nobody").is_err());
    }

    #[test]
    fn known_partners_dedup_in_first_seen_order() {
        let store = MemoryStore::seeded();
        let partners = store.known_partners(seed::MENTOR_MAYA).unwrap();
        let unique: std::collections::HashSet<_> = partners.iter().collect();
        assert_eq!(unique.len(), partners.len());
        // Current-round mentees come before historical ones.
        assert!(partners.len() >= 3);
        assert_eq!(partners[0], "Ada Park");
    }

    #[test]
    fn appended_meetings_go_to_the_front_in_batch_order() {
        let store = MemoryStore::seeded();
        let before = store
            .get_participation(seed::MENTEE_ADA, seed::ROUND_SPRING_2026)
            .unwrap()
            .meetings
            .len();

        store
            .append_meetings(
                seed::MENTEE_ADA,
                seed::ROUND_SPRING_2026,
                vec![record("new-1"), record("new-2")],
            )
            .unwrap();

        let meetings = store
            .get_participation(seed::MENTEE_ADA, seed::ROUND_SPRING_2026)
            .unwrap()
            .meetings;
        assert_eq!(meetings.len(), before + 2);
        assert_eq!(meetings[0].id, "new-1");
        assert_eq!(meetings[1].id, "new-2");
    }

    #[test]
    fn remove_meeting_requires_an_existing_record() {
        let store = MemoryStore::seeded();
        store
            .append_meetings(
                seed::MENTEE_ADA,
                seed::ROUND_SPRING_2026,
                vec![record("to-delete")],
            )
            .unwrap();
        store
            .remove_meeting(seed::MENTEE_ADA, seed::ROUND_SPRING_2026, "to-delete")
            .unwrap();
        let err = store
            .remove_meeting(seed::MENTEE_ADA, seed::ROUND_SPRING_2026, "to-delete")
            .unwrap_err();
        assert!(matches!(err, PortalError::NotFound { what: "meeting", .. }));
    }

    #[test]
    fn registration_creates_a_pending_shell_when_needed() {
        let store = MemoryStore::seeded();
        let registration = Registration {
            industry: "SWE".to_string(),
            skillsets: vec!["Networking".to_string()],
            mentee_capacity: None,
            goal: None,
            mentor_preference: crate::types::MentorPreference::NoPreference,
            continue_names: Vec::new(),
        };

        store
            .save_registration(seed::MENTEE_ADA, seed::ROUND_FALL_2026, registration.clone())
            .unwrap();

        let participation = store
            .get_participation(seed::MENTEE_ADA, seed::ROUND_FALL_2026)
            .unwrap();
        assert_eq!(participation.status, ParticipationStatus::Pending);
        assert!(participation.partner_names.is_empty());
        assert_eq!(participation.registration, Some(registration));
    }

    #[test]
    fn round_crud_round_trips() {
        let store = MemoryStore::empty();
        let mut round = MentorshipRound {
            id: "r-test".to_string(),
            name: "Test".to_string(),
            start_date: "2026-03-01".parse().unwrap(),
            end_date: "2026-06-30".parse().unwrap(),
            status: crate::types::RoundStatus::Active,
            required_meetings: 8,
            phases: None,
        };
        store.insert_round(round.clone());
        assert_eq!(store.list_rounds().len(), 1);

        round.name = "Renamed".to_string();
        store.update_round(round.clone()).unwrap();
        assert_eq!(store.get_round("r-test").unwrap().name, "Renamed");

        store.delete_round("r-test").unwrap();
        assert!(store.delete_round("r-test").is_err());
        assert!(store.list_rounds().is_empty());
    }
}
