//! Gift idea entity - A suggested gift for a recipient.
//!
//! `user_id` is the recipient and `created_by_id` is whoever suggested the idea;
//! the two are independent. An idea may optionally belong to a party.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Gift idea database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gift_ideas")]
pub struct Model {
    /// Unique identifier for the idea
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user the gift is for
    pub user_id: i64,
    /// Free-text description of the gift
    #[sea_orm(column_type = "Text")]
    pub idea: String,
    /// Party this idea is attached to, if any
    pub party_id: Option<i64>,
    /// ID of the user who suggested the idea
    pub created_by_id: i64,
    /// When the idea was created
    pub created_dt: DateTimeUtc,
}

/// Defines relationships between `GiftIdea` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The user receiving the gift
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Recipient,
    /// The user who suggested the gift
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedById",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Creator,
    /// The optional party
    #[sea_orm(
        belongs_to = "super::party::Entity",
        from = "Column::PartyId",
        to = "super::party::Column::Id",
        on_delete = "Cascade"
    )]
    Party,
    /// One idea has many comments
    #[sea_orm(has_many = "super::gift_idea_comment::Entity")]
    Comments,
    /// One idea has many upvotes
    #[sea_orm(has_many = "super::gift_idea_upvote::Entity")]
    Upvotes,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipient.def()
    }
}

impl Related<super::party::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Party.def()
    }
}

impl Related<super::gift_idea_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::gift_idea_upvote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Upvotes.def()
    }
}

/// Follows an idea to the user who suggested it.
#[derive(Debug)]
pub struct CreatorLink;

impl Linked for CreatorLink {
    type FromEntity = Entity;
    type ToEntity = super::user::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::Creator.def()]
    }
}

impl ActiveModelBehavior for ActiveModel {}
