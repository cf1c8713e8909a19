use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{enums::{AnimalType, IncubationStatus}, errors, validation::Validator};

pub const DEFAULT_TEMPERATURE: f64 = 37.5;
pub const DEFAULT_HUMIDITY: f64 = 60.0;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "incubation_batch")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub lot: String,
    pub egg_type: AnimalType,
    pub breed: String,
    pub egg_count: i32,
    pub incubation_date: Date,
    pub expected_hatch_date: Date,
    pub temperature: f64,
    pub humidity: f64,
    pub status: IncubationStatus,
    pub hatched_count: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn default_temperature() -> f64 { DEFAULT_TEMPERATURE }
fn default_humidity() -> f64 { DEFAULT_HUMIDITY }

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewIncubationBatch {
    pub lot: String,
    pub egg_type: AnimalType,
    pub breed: String,
    pub egg_count: i32,
    pub incubation_date: Date,
    pub expected_hatch_date: Date,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_humidity")]
    pub humidity: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewIncubationBatch {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        Validator::new()
            .non_blank("lot", &self.lot)
            .non_blank("breed", &self.breed)
            .non_negative_count("egg_count", self.egg_count)
            .check(
                "expected_hatch_date",
                self.expected_hatch_date >= self.incubation_date,
                "must not precede incubation_date",
            )
            .non_negative_amount("temperature", self.temperature)
            .within("humidity", self.humidity, 0.0, 100.0)
            .finish()
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct IncubationPatch {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub status: Option<IncubationStatus>,
    #[serde(default)]
    pub hatched_count: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl IncubationPatch {
    /// Validate against the stored batch; the hatched count is bounded by its egg count.
    pub fn validate(&self, current: &Model) -> Result<(), errors::ModelError> {
        let mut v = Validator::new();
        if let Some(t) = self.temperature { v.non_negative_amount("temperature", t); }
        if let Some(h) = self.humidity { v.within("humidity", h, 0.0, 100.0); }
        if let Some(n) = self.hatched_count {
            v.non_negative_count("hatched_count", n)
                .check("hatched_count", n <= current.egg_count, "must not exceed egg_count");
        }
        v.finish()
    }

    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(t) = self.temperature { am.temperature = Set(t); }
        if let Some(h) = self.humidity { am.humidity = Set(h); }
        if let Some(s) = self.status { am.status = Set(s); }
        if let Some(n) = self.hatched_count { am.hatched_count = Set(n); }
        if let Some(n) = self.notes { am.notes = Set(Some(n)); }
        am.updated_at = Set(Utc::now().into());
    }
}

pub async fn create(db: &DatabaseConnection, input: NewIncubationBatch) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        lot: Set(input.lot.trim().to_string()),
        egg_type: Set(input.egg_type),
        breed: Set(input.breed.trim().to_string()),
        egg_count: Set(input.egg_count),
        incubation_date: Set(input.incubation_date),
        expected_hatch_date: Set(input.expected_hatch_date),
        temperature: Set(input.temperature),
        humidity: Set(input.humidity),
        status: Set(IncubationStatus::Active),
        hatched_count: Set(0),
        notes: Set(input.notes),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
