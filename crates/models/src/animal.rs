use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{enums::{AnimalStatus, AnimalType}, errors, validation::Validator};

/// An animal lot: a named group of birds managed as a unit.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "animal")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub lot: String,
    pub animal_type: AnimalType,
    pub breed: String,
    pub count: i32,
    pub intake_date: Date,
    pub age_days: i32,
    pub avg_weight: f64,
    pub status: AnimalStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewAnimal {
    pub lot: String,
    pub animal_type: AnimalType,
    pub breed: String,
    pub count: i32,
    pub intake_date: Date,
    pub age_days: i32,
    pub avg_weight: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewAnimal {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        Validator::new()
            .non_blank("lot", &self.lot)
            .non_blank("breed", &self.breed)
            .non_negative_count("count", self.count)
            .non_negative_count("age_days", self.age_days)
            .non_negative_amount("avg_weight", self.avg_weight)
            .finish()
    }
}

/// Fields of a lot that may change after intake. `None` leaves the field untouched.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct AnimalPatch {
    #[serde(default)]
    pub count: Option<i32>,
    #[serde(default)]
    pub age_days: Option<i32>,
    #[serde(default)]
    pub avg_weight: Option<f64>,
    #[serde(default)]
    pub status: Option<AnimalStatus>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AnimalPatch {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        let mut v = Validator::new();
        if let Some(c) = self.count { v.non_negative_count("count", c); }
        if let Some(a) = self.age_days { v.non_negative_count("age_days", a); }
        if let Some(w) = self.avg_weight { v.non_negative_amount("avg_weight", w); }
        v.finish()
    }

    /// Copy the supplied fields onto `am` and refresh `updated_at`.
    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(c) = self.count { am.count = Set(c); }
        if let Some(a) = self.age_days { am.age_days = Set(a); }
        if let Some(w) = self.avg_weight { am.avg_weight = Set(w); }
        if let Some(s) = self.status { am.status = Set(s); }
        if let Some(n) = self.notes { am.notes = Set(Some(n)); }
        am.updated_at = Set(Utc::now().into());
    }
}

pub async fn create(db: &DatabaseConnection, input: NewAnimal) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        lot: Set(input.lot.trim().to_string()),
        animal_type: Set(input.animal_type),
        breed: Set(input.breed.trim().to_string()),
        count: Set(input.count),
        intake_date: Set(input.intake_date),
        age_days: Set(input.age_days),
        avg_weight: Set(input.avg_weight),
        status: Set(AnimalStatus::Active),
        notes: Set(input.notes),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
