//! Gift idea upvote entity - One row is one endorsement of an idea.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Gift idea upvote database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gift_idea_upvotes")]
pub struct Model {
    /// Unique identifier for the upvote
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the endorsed idea
    pub idea_id: i64,
    /// ID of the user who upvoted
    pub created_by_id: i64,
    /// When the upvote was cast
    pub created_dt: DateTimeUtc,
}

/// Defines relationships between `GiftIdeaUpvote` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each upvote belongs to one idea
    #[sea_orm(
        belongs_to = "super::gift_idea::Entity",
        from = "Column::IdeaId",
        to = "super::gift_idea::Column::Id",
        on_delete = "Cascade"
    )]
    GiftIdea,
    /// The user who upvoted
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedById",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Creator,
}

impl Related<super::gift_idea::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GiftIdea.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
