//! Party business logic - Creating parties and linking users to them with roles.

use crate::{
    config::roles::RoleChoices,
    core::user::require_user,
    entities::{Party, User, UserRole, party, user, user_role},
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{JoinType, QueryOrder, QuerySelect, Set, prelude::*};
use tracing::{info, instrument, warn};

/// Creates a party. `date` may be left empty until the party is scheduled.
#[instrument(skip(db))]
pub async fn create_party(
    db: &DatabaseConnection,
    date: Option<NaiveDate>,
    deadline: NaiveDate,
) -> Result<party::Model> {
    let party = party::ActiveModel {
        date: Set(date),
        deadline: Set(deadline),
        created_dt: Set(Utc::now()),
        ..Default::default()
    };

    let created = party.insert(db).await?;
    info!(party_id = created.id, "Created party");
    Ok(created)
}

/// Finds a party by ID.
pub async fn get_party_by_id(
    db: &DatabaseConnection,
    party_id: i64,
) -> Result<Option<party::Model>> {
    Party::find_by_id(party_id)
        .one(db)
        .await
        .map_err(Into::into)
}

pub(crate) async fn require_party(db: &DatabaseConnection, party_id: i64) -> Result<party::Model> {
    get_party_by_id(db, party_id)
        .await?
        .ok_or(Error::PartyNotFound { id: party_id })
}

/// Links a user to a party with the given role.
///
/// The role must be one of `roles`. The same user may be linked to the same
/// party any number of times, with the same or different roles.
///
/// # Errors
/// Returns an error if:
/// - `role` is not a configured role choice
/// - The user or the party does not exist
/// - The database insert fails
#[instrument(skip(db, roles))]
pub async fn assign_role(
    db: &DatabaseConnection,
    roles: &RoleChoices,
    user_id: i64,
    party_id: i64,
    role: i16,
) -> Result<user_role::Model> {
    if !roles.contains(role) {
        warn!("Rejected unknown role value");
        return Err(Error::InvalidRole { role });
    }

    require_user(db, user_id).await?;
    require_party(db, party_id).await?;

    let link = user_role::ActiveModel {
        user_id: Set(user_id),
        party_id: Set(party_id),
        role: Set(role),
        ..Default::default()
    };

    let created = link.insert(db).await?;
    info!(
        user_role_id = created.id,
        label = roles.label_for(role).unwrap_or_default(),
        "Assigned role"
    );
    Ok(created)
}

/// Lists every role link for a party, oldest first.
pub async fn get_roles_for_party(
    db: &DatabaseConnection,
    party_id: i64,
) -> Result<Vec<user_role::Model>> {
    UserRole::find()
        .filter(user_role::Column::PartyId.eq(party_id))
        .order_by_asc(user_role::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists the distinct users linked to a party through any role.
pub async fn get_party_members(db: &DatabaseConnection, party_id: i64) -> Result<Vec<user::Model>> {
    User::find()
        .join(JoinType::InnerJoin, user::Relation::UserRoles.def())
        .filter(user_role::Column::PartyId.eq(party_id))
        .distinct()
        .order_by_asc(user::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists the distinct parties a user is linked to through any role.
pub async fn get_parties_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<party::Model>> {
    Party::find()
        .join(JoinType::InnerJoin, party::Relation::UserRoles.def())
        .filter(user_role::Column::UserId.eq(user_id))
        .distinct()
        .order_by_asc(party::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::roles::{ORGANIZER, PARTICIPANT};
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_party() -> Result<()> {
        let db = setup_test_db().await?;

        let christmas = test_date(2026, 12, 24);
        let deadline = test_date(2026, 12, 1);
        let scheduled = create_party(&db, Some(christmas), deadline).await?;
        assert_eq!(scheduled.date, Some(christmas));
        assert_eq!(scheduled.deadline, deadline);

        let pending = create_party(&db, None, test_date(2027, 1, 15)).await?;
        assert!(pending.date.is_none());
        assert!(pending.created_dt <= Utc::now());

        let stored = get_party_by_id(&db, pending.id).await?.unwrap();
        assert_eq!(stored, pending);

        Ok(())
    }

    #[tokio::test]
    async fn test_same_user_may_hold_multiple_roles() -> Result<()> {
        let (db, user, party) = setup_with_user_and_party().await?;
        let roles = RoleChoices::default();

        let first = assign_role(&db, &roles, user.id, party.id, ORGANIZER).await?;
        let second = assign_role(&db, &roles, user.id, party.id, PARTICIPANT).await?;
        let third = assign_role(&db, &roles, user.id, party.id, PARTICIPANT).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(second.id, third.id);

        let links = get_roles_for_party(&db, party.id).await?;
        assert_eq!(links.len(), 3);
        assert_eq!(
            links.iter().map(|l| l.role).collect::<Vec<_>>(),
            vec![ORGANIZER, PARTICIPANT, PARTICIPANT]
        );

        // Still only one member, however many roles they hold
        let members = get_party_members(&db, party.id).await?;
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, user.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_role_is_rejected() -> Result<()> {
        let (db, user, party) = setup_with_user_and_party().await?;
        let roles = RoleChoices::default();

        let result = assign_role(&db, &roles, user.id, party.id, 99).await;
        assert!(matches!(result, Err(Error::InvalidRole { role: 99 })));
        assert!(get_roles_for_party(&db, party.id).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_assign_role_requires_user_and_party() -> Result<()> {
        let (db, user, party) = setup_with_user_and_party().await?;
        let roles = RoleChoices::default();

        let result = assign_role(&db, &roles, user.id + 100, party.id, ORGANIZER).await;
        assert!(matches!(result, Err(Error::UserNotFound { .. })));

        let result = assign_role(&db, &roles, user.id, party.id + 100, ORGANIZER).await;
        assert!(matches!(result, Err(Error::PartyNotFound { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_members_and_parties() -> Result<()> {
        let (db, alice, birthday_party) = setup_with_user_and_party().await?;
        let bob = create_test_user(&db, "bob@example.com").await?;
        let other_party = create_test_party(&db).await?;
        let roles = RoleChoices::default();

        assign_role(&db, &roles, alice.id, birthday_party.id, ORGANIZER).await?;
        assign_role(&db, &roles, bob.id, birthday_party.id, PARTICIPANT).await?;
        assign_role(&db, &roles, bob.id, other_party.id, ORGANIZER).await?;

        let members = get_party_members(&db, birthday_party.id).await?;
        assert_eq!(
            members.iter().map(|u| u.id).collect::<Vec<_>>(),
            vec![alice.id, bob.id]
        );

        let bobs_parties = get_parties_for_user(&db, bob.id).await?;
        assert_eq!(
            bobs_parties.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![birthday_party.id, other_party.id]
        );

        // The many-to-many relation is also reachable through the entities
        let via_relation = birthday_party.find_related(User).all(&db).await?;
        assert_eq!(via_relation.len(), 2);

        Ok(())
    }
}
