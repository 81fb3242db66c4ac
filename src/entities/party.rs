//! Party entity - A planned event that gift ideas and roles are organized around.
//!
//! The deadline is always set. The date may be left empty while the party is
//! still being scheduled.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Party database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "parties")]
pub struct Model {
    /// Unique identifier for the party
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Day the party takes place, None until scheduled
    pub date: Option<Date>,
    /// Deadline for settling gifts
    pub deadline: Date,
    /// When the party was created
    pub created_dt: DateTimeUtc,
}

/// Defines relationships between Party and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One party has many user roles
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRoles,
    /// One party has many gift ideas
    #[sea_orm(has_many = "super::gift_idea::Entity")]
    GiftIdeas,
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

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_role::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_role::Relation::Party.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
