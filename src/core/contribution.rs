//! Fund contribution business logic - A simple ledger of pledged amounts.
//!
//! Amounts are signed and unrestricted; a negative row is a valid record (for
//! example, a correction), so totals are a plain signed sum.

use crate::{
    core::user::require_user,
    entities::{FundContribution, fund_contribution},
    errors::Result,
};
use chrono::Utc;
use sea_orm::{FromQueryResult, QueryOrder, QuerySelect, Set, prelude::*};
use tracing::{info, instrument};

/// Records a contribution of `amount` by a user.
#[instrument(skip(db))]
pub async fn create_fund_contribution(
    db: &DatabaseConnection,
    user_id: i64,
    amount: i32,
) -> Result<fund_contribution::Model> {
    require_user(db, user_id).await?;

    let model = fund_contribution::ActiveModel {
        user_id: Set(user_id),
        amount: Set(amount),
        created_dt: Set(Utc::now()),
        ..Default::default()
    };

    let created = model.insert(db).await?;
    info!(contribution_id = created.id, "Recorded fund contribution");
    Ok(created)
}

/// Lists a user's contributions, newest first.
pub async fn get_contributions_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<fund_contribution::Model>> {
    FundContribution::find()
        .filter(fund_contribution::Column::UserId.eq(user_id))
        .order_by_desc(fund_contribution::Column::CreatedDt)
        .order_by_desc(fund_contribution::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Sums everything a user has contributed. A user with no contributions totals 0.
pub async fn total_contributed_by_user(db: &DatabaseConnection, user_id: i64) -> Result<i64> {
    #[derive(FromQueryResult)]
    struct SumResult {
        total: Option<i64>,
    }

    let result = FundContribution::find()
        .filter(fund_contribution::Column::UserId.eq(user_id))
        .select_only()
        .column_as(fund_contribution::Column::Amount.sum(), "total")
        .into_model::<SumResult>()
        .one(db)
        .await?;

    Ok(result.and_then(|r| r.total).unwrap_or(0))
}
