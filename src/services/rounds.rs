//! Admin round management over the store.

use crate::error::PortalError;
use crate::rounds::{apply_form, round_from_form, RoundForm};
use crate::store::MentorshipStore;
use crate::types::MentorshipRound;

fn require_admin(
    store: &dyn MentorshipStore,
    user_id: &str,
    action: &'static str,
) -> Result<(), PortalError> {
    let user = store.get_user(user_id)?;
    if !user.roles.is_admin() {
        return Err(PortalError::Forbidden { action });
    }
    Ok(())
}

pub fn create_round(
    store: &dyn MentorshipStore,
    acting_user_id: &str,
    form: &RoundForm,
) -> Result<MentorshipRound, PortalError> {
    require_admin(store, acting_user_id, "creating a round")?;
    let round = round_from_form(form)?;
    store.insert_round(round.clone());
    log::info!("created round {} ({})", round.id, round.name);
    Ok(round)
}

pub fn update_round(
    store: &dyn MentorshipStore,
    acting_user_id: &str,
    round_id: &str,
    form: &RoundForm,
) -> Result<MentorshipRound, PortalError> {
    require_admin(store, acting_user_id, "editing a round")?;
    let mut round = store.get_round(round_id)?;
    apply_form(&mut round, form)?;
    store.update_round(round.clone())?;
    log::info!("updated round {round_id}");
    Ok(round)
}

pub fn delete_round(
    store: &dyn MentorshipStore,
    acting_user_id: &str,
    round_id: &str,
) -> Result<(), PortalError> {
    require_admin(store, acting_user_id, "deleting a round")?;
    store.delete_round(round_id)?;
    log::info!("deleted round {round_id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{seed, MemoryStore};
    use crate::types::RoundStatus;

    fn form(name: &str) -> RoundForm {
        RoundForm {
            name: name.to_string(),
            start_date: Some("2027-03-01".parse().unwrap()),
            end_date: Some("2027-06-30".parse().unwrap()),
            status: RoundStatus::Active,
            required_meetings: 8,
        }
    }

    #[test]
    fn admin_can_manage_rounds() {
        let store = MemoryStore::seeded();
        let created = create_round(&store, seed::ADMIN_NOOR, &form("Spring 2027")).unwrap();
        // New rounds go to the top of the table.
        assert_eq!(store.list_rounds()[0].id, created.id);

        let updated =
            update_round(&store, seed::ADMIN_NOOR, &created.id, &form("Spring 2027 v2")).unwrap();
        assert_eq!(updated.name, "Spring 2027 v2");
        assert_eq!(updated.id, created.id);

        delete_round(&store, seed::ADMIN_NOOR, &created.id).unwrap();
        assert!(store.get_round(&created.id).is_err());
    }

    #[test]
    fn non_admin_is_forbidden() {
        let store = MemoryStore::seeded();
        let err = create_round(&store, seed::MENTOR_MAYA, &form("Rogue")).unwrap_err();
        assert!(matches!(err, PortalError::Forbidden { .. }));
        assert!(store.list_rounds().iter().all(|r| r.name != "Rogue"));
    }

    #[test]
    fn invalid_form_creates_nothing() {
        let store = MemoryStore::seeded();
        let count = store.list_rounds().len();
        let mut bad = form("Bad");
        bad.required_meetings = 0;
        assert!(create_round(&store, seed::ADMIN_NOOR, &bad).is_err());
        assert_eq!(store.list_rounds().len(), count);
    }
}
