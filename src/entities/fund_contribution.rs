//! Fund contribution entity - A user's monetary pledge.
//!
//! Contributions are not tied to a party or idea. The amount is a plain signed
//! integer with no enforced minimum.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fund contribution database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fund_contributions")]
pub struct Model {
    /// Unique identifier for the contribution
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the contributing user
    pub user_id: i64,
    /// Pledged amount
    pub amount: i32,
    /// When the contribution was recorded
    pub created_dt: DateTimeUtc,
}

/// Defines relationships between `FundContribution` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each contribution belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
