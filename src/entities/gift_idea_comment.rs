//! Gift idea comment entity - Free-text discussion attached to an idea.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Gift idea comment database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gift_idea_comments")]
pub struct Model {
    /// Unique identifier for the comment
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the idea being discussed
    pub idea_id: i64,
    /// Comment body
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    /// ID of the user who wrote the comment
    pub created_by_id: i64,
    /// When the comment was written
    pub created_dt: DateTimeUtc,
}

/// Defines relationships between `GiftIdeaComment` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each comment belongs to one idea
    #[sea_orm(
        belongs_to = "super::gift_idea::Entity",
        from = "Column::IdeaId",
        to = "super::gift_idea::Column::Id",
        on_delete = "Cascade"
    )]
    GiftIdea,
    /// The comment author
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
