use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{enums::EggType, errors, validation::Validator};

/// One collection round. Immutable once stored.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "egg_collection")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date: Date,
    pub source_lot: String,
    pub egg_type: EggType,
    pub count: i32,
    pub total_weight: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewEggCollection {
    pub date: Date,
    pub source_lot: String,
    pub egg_type: EggType,
    pub count: i32,
    pub total_weight: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewEggCollection {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        Validator::new()
            .non_blank("source_lot", &self.source_lot)
            .non_negative_count("count", self.count)
            .non_negative_amount("total_weight", self.total_weight)
            .finish()
    }
}

pub async fn create(db: &DatabaseConnection, input: NewEggCollection) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        date: Set(input.date),
        source_lot: Set(input.source_lot.trim().to_string()),
        egg_type: Set(input.egg_type),
        count: Set(input.count),
        total_weight: Set(input.total_weight),
        notes: Set(input.notes),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
