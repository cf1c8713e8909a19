use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{enums::AnimalType, errors, validation::Validator};

/// A stored feed estimate. Derived from its inputs, never updated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feed_calculation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub lot: String,
    pub animal_type: AnimalType,
    pub animal_count: i32,
    pub age_days: i32,
    pub avg_weight: f64,
    pub feed_price_per_kg: f64,
    pub daily_consumption_kg: f64,
    pub monthly_consumption_kg: f64,
    pub estimated_cost: f64,
    pub calculation_date: Date,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewFeedCalculation {
    pub lot: String,
    pub animal_type: AnimalType,
    pub animal_count: i32,
    pub age_days: i32,
    pub avg_weight: f64,
    pub feed_price_per_kg: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewFeedCalculation {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        Validator::new()
            .non_blank("lot", &self.lot)
            .non_negative_count("animal_count", self.animal_count)
            .non_negative_count("age_days", self.age_days)
            .non_negative_amount("avg_weight", self.avg_weight)
            .non_negative_amount("feed_price_per_kg", self.feed_price_per_kg)
            .finish()
    }
}

/// Computed consumption and cost for one calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Consumption {
    pub daily_kg: f64,
    pub monthly_kg: f64,
    pub estimated_cost: f64,
}

pub async fn create(
    db: &DatabaseConnection,
    input: NewFeedCalculation,
    consumption: Consumption,
    calculation_date: Date,
) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        lot: Set(input.lot.trim().to_string()),
        animal_type: Set(input.animal_type),
        animal_count: Set(input.animal_count),
        age_days: Set(input.age_days),
        avg_weight: Set(input.avg_weight),
        feed_price_per_kg: Set(input.feed_price_per_kg),
        daily_consumption_kg: Set(consumption.daily_kg),
        monthly_consumption_kg: Set(consumption.monthly_kg),
        estimated_cost: Set(consumption.estimated_cost),
        calculation_date: Set(calculation_date),
        notes: Set(input.notes),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
