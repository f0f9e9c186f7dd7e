//! Data-access seam between the business rules and whatever holds state.
//!
//! Services talk to a [`MentorshipStore`] and never reach into shared state
//! directly. The only implementation is the in-memory [`MemoryStore`] —
//! durability is out of scope for this crate, and the trait makes no promises
//! about it.

pub mod memory;
pub mod seed;

pub use memory::MemoryStore;

use crate::error::PortalError;
use crate::types::{
    MeetingRecord, MentorshipParticipation, MentorshipRound, Registration, UserData,
};

pub trait MentorshipStore {
    fn get_user(&self, user_id: &str) -> Result<UserData, PortalError>;

    fn list_users(&self) -> Vec<UserData>;

    /// Rounds, newest first.
    fn list_rounds(&self) -> Vec<MentorshipRound>;

    fn get_round(&self, round_id: &str) -> Result<MentorshipRound, PortalError>;

    /// Prepends, keeping the newest-first ordering.
    fn insert_round(&self, round: MentorshipRound);

    fn update_round(&self, round: MentorshipRound) -> Result<(), PortalError>;

    fn delete_round(&self, round_id: &str) -> Result<(), PortalError>;

    fn get_participation(
        &self,
        user_id: &str,
        round_id: &str,
    ) -> Result<MentorshipParticipation, PortalError>;

    /// Every partner name the user has ever been matched with, current
    /// rounds included, deduplicated in first-seen order.
    fn known_partners(&self, user_id: &str) -> Result<Vec<String>, PortalError>;

    /// Persist a registration for the given round, creating a pending
    /// participation shell when the user has none there yet.
    fn save_registration(
        &self,
        user_id: &str,
        round_id: &str,
        registration: Registration,
    ) -> Result<(), PortalError>;

    /// Prepend a batch of records to the participation's meeting sequence
    /// (most recently added first), preserving batch order.
    fn append_meetings(
        &self,
        user_id: &str,
        round_id: &str,
        records: Vec<MeetingRecord>,
    ) -> Result<(), PortalError>;

    fn remove_meeting(
        &self,
        user_id: &str,
        round_id: &str,
        meeting_id: &str,
    ) -> Result<(), PortalError>;
}
