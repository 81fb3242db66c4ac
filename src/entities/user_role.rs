//! User role entity - Links a user to a party with a role value.
//!
//! The role is one of the configured [`crate::config::roles::RoleChoices`].
//! Nothing stops the same user from holding several roles in one party.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User role database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_roles")]
pub struct Model {
    /// Unique identifier for the link
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the linked user
    pub user_id: i64,
    /// ID of the linked party
    pub party_id: i64,
    /// Role value
    pub role: i16,
}

/// Defines relationships between `UserRole` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each role belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    /// Each role belongs to one party
    #[sea_orm(
        belongs_to = "super::party::Entity",
        from = "Column::PartyId",
        to = "super::party::Column::Id",
        on_delete = "Cascade"
    )]
    Party,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::party::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Party.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
