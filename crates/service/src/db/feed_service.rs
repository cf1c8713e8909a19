use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use chrono::NaiveDate;
use uuid::Uuid;
use tracing::{info, instrument};
use models::feed_calculation::{self, Entity as FeedCalculationEntity, NewFeedCalculation};
use crate::{errors::ServiceError, feed};

/// Estimate feed for a lot and store the result, dated `calculation_date`.
#[instrument(skip_all, fields(lot = %input.lot, animal_type = input.animal_type.as_str()))]
pub async fn calculate_feed(
    db: &DatabaseConnection,
    input: NewFeedCalculation,
    calculation_date: NaiveDate,
) -> Result<feed_calculation::Model, ServiceError> {
    input.validate()?;
    // validated non-negative above
    let count = input.animal_count as u32;
    let age = input.age_days as u32;
    let stage = feed::FeedStage::for_animal(input.animal_type, age);
    let consumption = feed::estimate(input.animal_type, count, age, input.feed_price_per_kg);
    let stored = feed_calculation::create(db, input, consumption, calculation_date).await?;
    info!(
        id = %stored.id,
        stage = stage.as_str(),
        daily_kg = stored.daily_consumption_kg,
        cost = stored.estimated_cost,
        "feed calculation stored"
    );
    Ok(stored)
}

/// List calculations, newest first.
pub async fn list_calculations(db: &DatabaseConnection) -> Result<Vec<feed_calculation::Model>, ServiceError> {
    FeedCalculationEntity::find()
        .order_by_desc(feed_calculation::Column::CalculationDate)
        .order_by_desc(feed_calculation::Column::CreatedAt)
        .all(db)
        .await
        .map_err(ServiceError::db)
}

pub async fn get_calculation(db: &DatabaseConnection, id: Uuid) -> Result<Option<feed_calculation::Model>, ServiceError> {
    FeedCalculationEntity::find_by_id(id).one(db).await.map_err(ServiceError::db)
}

pub async fn delete_calculation(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = FeedCalculationEntity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::enums::AnimalType;

    fn input(animal_type: AnimalType, count: i32, age: i32, price: f64) -> NewFeedCalculation {
        NewFeedCalculation {
            lot: "Lote-1".into(),
            animal_type,
            animal_count: count,
            age_days: age,
            avg_weight: 1.5,
            feed_price_per_kg: price,
            notes: None,
        }
    }

    #[tokio::test]
    async fn stores_laying_estimate() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let calc = calculate_feed(&db, input(AnimalType::Laying, 100, 120, 0.5), today).await?;
        assert_eq!(calc.daily_consumption_kg, 8.0);
        assert_eq!(calc.monthly_consumption_kg, 240.0);
        assert!((calc.estimated_cost - 120.0).abs() < 1e-9);
        assert_eq!(calc.calculation_date, today);

        let fetched = get_calculation(&db, calc.id).await?.unwrap();
        assert_eq!(fetched, calc);
        Ok(())
    }

    #[tokio::test]
    async fn stores_broiler_estimate() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let calc = calculate_feed(&db, input(AnimalType::Broiler, 200, 25, 0.6), today).await?;
        assert_eq!(calc.daily_consumption_kg, 20.0);
        assert_eq!(calc.monthly_consumption_kg, 600.0);
        assert!((calc.estimated_cost - 360.0).abs() < 1e-9);
        Ok(())
    }

    #[tokio::test]
    async fn negative_count_is_rejected_and_not_stored() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let err = calculate_feed(&db, input(AnimalType::Breeder, -5, 10, 0.5), today).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(list_calculations(&db).await?.is_empty());
        Ok(())
    }
}
