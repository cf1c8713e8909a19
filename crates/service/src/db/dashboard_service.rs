use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, ColumnTrait};
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;
use tracing::debug;
use models::{animal, egg_collection, incubation_batch};
use models::enums::{AnimalStatus, AnimalType, IncubationStatus};
use crate::{db::{egg_collection_service, transaction_service}, errors::ServiceError};

/// Broilers at or past this age are listed as ready for sale.
pub const SALE_READY_BROILER_AGE_DAYS: i32 = 35;
/// Number of entries in each of the dashboard's lists.
pub const DASHBOARD_LIST_LIMIT: u64 = 5;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dashboard {
    /// Active lots of any type.
    pub total_animals: u64,
    pub total_laying: u64,
    pub total_broiler: u64,
    pub total_breeder: u64,
    pub eggs_today: i64,
    pub eggs_month: i64,
    pub active_incubations: u64,
    /// Income minus expense for the current calendar month.
    pub month_balance: f64,
    pub latest_collections: Vec<egg_collection::Model>,
    pub lots_ready_for_sale: Vec<animal::Model>,
}

/// First and last day of the calendar month containing `day`.
pub fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = day - Days::new(u64::from(day.day0()));
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first, last)
}

/// Build the dashboard as seen on `today`.
pub async fn dashboard(db: &DatabaseConnection, today: NaiveDate) -> Result<Dashboard, ServiceError> {
    let (month_start, month_end) = month_bounds(today);

    let mut dash = Dashboard {
        total_animals: 0,
        total_laying: 0,
        total_broiler: 0,
        total_breeder: 0,
        eggs_today: sum_eggs(db, today, today).await?,
        eggs_month: sum_eggs(db, month_start, month_end).await?,
        active_incubations: incubation_batch::Entity::find()
            .filter(incubation_batch::Column::Status.eq(IncubationStatus::Active))
            .count(db)
            .await
            .map_err(ServiceError::db)?,
        month_balance: transaction_service::balance_between(db, month_start, month_end).await?.balance,
        latest_collections: egg_collection_service::latest_collections(db, DASHBOARD_LIST_LIMIT).await?,
        lots_ready_for_sale: lots_ready_for_sale(db).await?,
    };

    for (animal_type, lots) in active_lots_by_type(db).await? {
        let lots = lots.max(0) as u64;
        match animal_type {
            AnimalType::Laying => dash.total_laying = lots,
            AnimalType::Broiler => dash.total_broiler = lots,
            AnimalType::Breeder => dash.total_breeder = lots,
        }
        dash.total_animals += lots;
    }

    debug!(%today, total_animals = dash.total_animals, eggs_today = dash.eggs_today, "dashboard built");
    Ok(dash)
}

async fn active_lots_by_type(db: &DatabaseConnection) -> Result<Vec<(AnimalType, i64)>, ServiceError> {
    animal::Entity::find()
        .select_only()
        .column(animal::Column::AnimalType)
        .column_as(animal::Column::Id.count(), "lots")
        .filter(animal::Column::Status.eq(AnimalStatus::Active))
        .group_by(animal::Column::AnimalType)
        .into_tuple()
        .all(db)
        .await
        .map_err(ServiceError::db)
}

async fn sum_eggs(db: &DatabaseConnection, from: NaiveDate, to: NaiveDate) -> Result<i64, ServiceError> {
    let total: Option<Option<i64>> = egg_collection::Entity::find()
        .select_only()
        .column_as(egg_collection::Column::Count.sum(), "total")
        .filter(egg_collection::Column::Date.between(from, to))
        .into_tuple()
        .one(db)
        .await
        .map_err(ServiceError::db)?;
    Ok(total.flatten().unwrap_or_default())
}

async fn lots_ready_for_sale(db: &DatabaseConnection) -> Result<Vec<animal::Model>, ServiceError> {
    animal::Entity::find()
        .filter(animal::Column::AnimalType.eq(AnimalType::Broiler))
        .filter(animal::Column::Status.eq(AnimalStatus::Active))
        .filter(animal::Column::AgeDays.gte(SALE_READY_BROILER_AGE_DAYS))
        .order_by_desc(animal::Column::AgeDays)
        .limit(DASHBOARD_LIST_LIMIT)
        .all(db)
        .await
        .map_err(ServiceError::db)
}
