use sea_orm::{DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, ColumnTrait};
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;
use tracing::info;
use models::enums::TransactionType;
use models::farm_transaction::{self, Entity as TransactionEntity, NewTransaction};
use crate::errors::ServiceError;

/// Income and expense totals and their difference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Balance {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

impl Balance {
    pub fn new(total_income: f64, total_expense: f64) -> Self {
        Self { total_income, total_expense, balance: total_income - total_expense }
    }
}

/// List transactions, newest date first.
pub async fn list_transactions(db: &DatabaseConnection) -> Result<Vec<farm_transaction::Model>, ServiceError> {
    TransactionEntity::find()
        .order_by_desc(farm_transaction::Column::Date)
        .order_by_desc(farm_transaction::Column::CreatedAt)
        .all(db)
        .await
        .map_err(ServiceError::db)
}

pub async fn create_transaction(db: &DatabaseConnection, input: NewTransaction) -> Result<farm_transaction::Model, ServiceError> {
    let created = farm_transaction::create(db, input).await?;
    info!(id = %created.id, kind = created.kind.as_str(), total = created.total, "transaction recorded");
    Ok(created)
}

pub async fn get_transaction(db: &DatabaseConnection, id: Uuid) -> Result<Option<farm_transaction::Model>, ServiceError> {
    TransactionEntity::find_by_id(id).one(db).await.map_err(ServiceError::db)
}

pub async fn delete_transaction(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = TransactionEntity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
    if res.rows_affected > 0 { info!(%id, "transaction deleted"); }
    Ok(res.rows_affected > 0)
}

/// Sum of totals per transaction type over all time.
pub async fn balance(db: &DatabaseConnection) -> Result<Balance, ServiceError> {
    sum_by_kind(db, None).await
}

/// Sum of totals per transaction type for dates within `from..=to`.
pub async fn balance_between(db: &DatabaseConnection, from: NaiveDate, to: NaiveDate) -> Result<Balance, ServiceError> {
    sum_by_kind(db, Some((from, to))).await
}

async fn sum_by_kind(db: &DatabaseConnection, range: Option<(NaiveDate, NaiveDate)>) -> Result<Balance, ServiceError> {
    let mut query = TransactionEntity::find()
        .select_only()
        .column(farm_transaction::Column::Kind)
        .column_as(farm_transaction::Column::Total.sum(), "total")
        .group_by(farm_transaction::Column::Kind);
    if let Some((from, to)) = range {
        query = query.filter(farm_transaction::Column::Date.between(from, to));
    }
    let rows: Vec<(TransactionType, Option<f64>)> = query.into_tuple().all(db).await.map_err(ServiceError::db)?;

    let (mut income, mut expense) = (0.0, 0.0);
    for (kind, total) in rows {
        match kind {
            TransactionType::Income => income = total.unwrap_or_default(),
            TransactionType::Expense => expense = total.unwrap_or_default(),
        }
    }
    Ok(Balance::new(income, expense))
}
