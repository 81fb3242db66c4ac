//! Database configuration module for the gift planner.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the database schema always matches the Rust structs without hand-written SQL.

use crate::entities::{
    FundContribution, GiftIdea, GiftIdeaComment, GiftIdeaUpvote, Party, User, UserRole,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use tracing::{debug, info, instrument};

const DEFAULT_DATABASE_URL: &str = "sqlite://gift_planner.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable,
/// falling back to a local `SQLite` file.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    debug!("Connecting to database at {}", database_url);
    Database::connect(&database_url).await.map_err(Into::into)
}

async fn create_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let builder = db.get_database_backend();
    let table_name = entity.table_name().to_owned();
    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(builder.build(&table)).await?;
    debug!("Ensured table '{}'", table_name);
    Ok(())
}

/// Creates every table the planner needs, skipping tables that already exist.
///
/// Parent tables are created before the tables that reference them so that
/// foreign keys resolve.
#[instrument(skip(db))]
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, User).await?;
    create_table(db, &schema, Party).await?;
    create_table(db, &schema, UserRole).await?;
    create_table(db, &schema, GiftIdea).await?;
    create_table(db, &schema, GiftIdeaComment).await?;
    create_table(db, &schema, GiftIdeaUpvote).await?;
    create_table(db, &schema, FundContribution).await?;

    info!("Database tables ensured.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        fund_contribution::Model as FundContributionModel, gift_idea::Model as GiftIdeaModel,
        gift_idea_comment::Model as GiftIdeaCommentModel,
        gift_idea_upvote::Model as GiftIdeaUpvoteModel, party::Model as PartyModel,
        user::Model as UserModel, user_role::Model as UserRoleModel,
    };
    use sea_orm::QuerySelect;

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Every table should be queryable
        let _: Vec<UserModel> = User::find().limit(1).all(&db).await?;
        let _: Vec<PartyModel> = Party::find().limit(1).all(&db).await?;
        let _: Vec<UserRoleModel> = UserRole::find().limit(1).all(&db).await?;
        let _: Vec<GiftIdeaModel> = GiftIdea::find().limit(1).all(&db).await?;
        let _: Vec<GiftIdeaCommentModel> = GiftIdeaComment::find().limit(1).all(&db).await?;
        let _: Vec<GiftIdeaUpvoteModel> = GiftIdeaUpvote::find().limit(1).all(&db).await?;
        let _: Vec<FundContributionModel> = FundContribution::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }
}
