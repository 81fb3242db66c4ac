//! User entity - The identity record for everyone using the planner.
//!
//! Users log in with their email address. The password column only ever holds
//! an Argon2 hash or an unusable-password marker, never the raw password.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Maximum length of an email address
pub const EMAIL_MAX_LENGTH: usize = 255;
/// Maximum length of a display name
pub const NAME_MAX_LENGTH: usize = 30;

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Email address, used as the login name
    #[sea_orm(unique)]
    pub email: String,
    /// Display name, may be blank
    pub name: String,
    /// Date of birth
    pub birthday: Date,
    /// Encoded password hash (or unusable marker)
    #[serde(skip_serializing)]
    pub password: String,
    /// Whether the user can access administrative tooling
    pub is_staff: bool,
    /// Whether the user implicitly holds every permission
    pub is_superuser: bool,
    /// When the user last logged in
    pub last_login: Option<DateTimeUtc>,
}

impl Model {
    /// The value users log in with, which is their email.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.email
    }

    /// Short form of the user's name.
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.name
    }

    /// Full form of the user's name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.name
    }
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user holds many party roles
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRoles,
    /// One user is the recipient of many gift ideas
    #[sea_orm(has_many = "super::gift_idea::Entity")]
    GiftIdeas,
    /// One user makes many fund contributions
    #[sea_orm(has_many = "super::fund_contribution::Entity")]
    FundContributions,
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRoles.def()
    }
}

impl Related<super::gift_idea::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GiftIdeas.def()
    }
}

impl Related<super::fund_contribution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FundContributions.def()
    }
}

impl Related<super::party::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_role::Relation::Party.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_role::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
