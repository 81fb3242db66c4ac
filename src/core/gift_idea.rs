//! Gift idea business logic - Ideas, plus the comments and upvotes attached to them.
//!
//! An idea is always for one recipient and always records who suggested it.
//! The two may be the same user or different users. Ideas can optionally be
//! filed under a party.

use crate::{
    core::{party::require_party, user::require_user},
    entities::{
        GiftIdea, GiftIdeaComment, GiftIdeaUpvote, gift_idea, gift_idea_comment, gift_idea_upvote,
        user,
    },
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use tracing::{debug, info, instrument};

/// Records a gift idea for `recipient_id`, suggested by `created_by_id`.
///
/// # Errors
/// Returns an error if:
/// - The idea text is empty or whitespace-only
/// - The recipient, the creator, or the given party does not exist
/// - The database insert fails
#[instrument(skip(db, idea))]
pub async fn create_gift_idea(
    db: &DatabaseConnection,
    recipient_id: i64,
    created_by_id: i64,
    idea: String,
    party_id: Option<i64>,
) -> Result<gift_idea::Model> {
    if idea.trim().is_empty() {
        return Err(Error::Validation {
            message: "Gift idea cannot be empty".to_string(),
        });
    }

    require_user(db, recipient_id).await?;
    if created_by_id != recipient_id {
        require_user(db, created_by_id).await?;
    }
    if let Some(party_id) = party_id {
        require_party(db, party_id).await?;
    }

    let model = gift_idea::ActiveModel {
        user_id: Set(recipient_id),
        idea: Set(idea),
        party_id: Set(party_id),
        created_by_id: Set(created_by_id),
        created_dt: Set(Utc::now()),
        ..Default::default()
    };

    let created = model.insert(db).await?;
    info!(gift_idea_id = created.id, "Created gift idea");
    Ok(created)
}

/// Finds a gift idea by ID.
pub async fn get_gift_idea_by_id(
    db: &DatabaseConnection,
    idea_id: i64,
) -> Result<Option<gift_idea::Model>> {
    GiftIdea::find_by_id(idea_id)
        .one(db)
        .await
        .map_err(Into::into)
}

async fn require_gift_idea(db: &DatabaseConnection, idea_id: i64) -> Result<gift_idea::Model> {
    get_gift_idea_by_id(db, idea_id)
        .await?
        .ok_or(Error::GiftIdeaNotFound { id: idea_id })
}

/// Lists ideas for a recipient, newest first.
pub async fn get_ideas_for_user(
    db: &DatabaseConnection,
    recipient_id: i64,
) -> Result<Vec<gift_idea::Model>> {
    GiftIdea::find()
        .filter(gift_idea::Column::UserId.eq(recipient_id))
        .order_by_desc(gift_idea::Column::CreatedDt)
        .order_by_desc(gift_idea::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists ideas filed under a party, newest first.
pub async fn get_ideas_for_party(
    db: &DatabaseConnection,
    party_id: i64,
) -> Result<Vec<gift_idea::Model>> {
    GiftIdea::find()
        .filter(gift_idea::Column::PartyId.eq(party_id))
        .order_by_desc(gift_idea::Column::CreatedDt)
        .order_by_desc(gift_idea::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Loads the user who suggested an idea.
pub async fn get_idea_creator(
    db: &DatabaseConnection,
    idea: &gift_idea::Model,
) -> Result<Option<user::Model>> {
    idea.find_linked(gift_idea::CreatorLink)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Adds a comment to an idea.
///
/// # Errors
/// Returns an error if the comment is blank, the idea or the author does not
/// exist, or the insert fails.
#[instrument(skip(db, comment))]
pub async fn add_comment(
    db: &DatabaseConnection,
    idea_id: i64,
    created_by_id: i64,
    comment: String,
) -> Result<gift_idea_comment::Model> {
    if comment.trim().is_empty() {
        return Err(Error::Validation {
            message: "Comment cannot be empty".to_string(),
        });
    }

    require_gift_idea(db, idea_id).await?;
    require_user(db, created_by_id).await?;

    let model = gift_idea_comment::ActiveModel {
        idea_id: Set(idea_id),
        comment: Set(comment),
        created_by_id: Set(created_by_id),
        created_dt: Set(Utc::now()),
        ..Default::default()
    };

    let created = model.insert(db).await?;
    debug!(comment_id = created.id, "Added comment");
    Ok(created)
}

/// Lists the comments on an idea in the order they were written.
pub async fn get_comments_for_idea(
    db: &DatabaseConnection,
    idea_id: i64,
) -> Result<Vec<gift_idea_comment::Model>> {
    GiftIdeaComment::find()
        .filter(gift_idea_comment::Column::IdeaId.eq(idea_id))
        .order_by_asc(gift_idea_comment::Column::CreatedDt)
        .order_by_asc(gift_idea_comment::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Records one upvote on an idea.
///
/// Upvotes are not deduplicated: a user who upvotes twice is counted twice.
#[instrument(skip(db))]
pub async fn upvote_idea(
    db: &DatabaseConnection,
    idea_id: i64,
    created_by_id: i64,
) -> Result<gift_idea_upvote::Model> {
    require_gift_idea(db, idea_id).await?;
    require_user(db, created_by_id).await?;

    let model = gift_idea_upvote::ActiveModel {
        idea_id: Set(idea_id),
        created_by_id: Set(created_by_id),
        created_dt: Set(Utc::now()),
        ..Default::default()
    };

    let created = model.insert(db).await?;
    debug!(upvote_id = created.id, "Recorded upvote");
    Ok(created)
}

/// Counts the upvotes on an idea.
pub async fn count_upvotes(db: &DatabaseConnection, idea_id: i64) -> Result<u64> {
    GiftIdeaUpvote::find()
        .filter(gift_idea_upvote::Column::IdeaId.eq(idea_id))
        .count(db)
        .await
        .map_err(Into::into)
}
