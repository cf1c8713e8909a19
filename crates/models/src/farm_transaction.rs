use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{enums::TransactionType, errors, validation::Validator};

/// An income or expense entry. Immutable once stored.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "farm_transaction")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date: Date,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub concept: String,
    pub category: String,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub unit_price: f64,
    pub total: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewTransaction {
    pub date: Date,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub concept: String,
    pub category: String,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub unit: Option<String>,
    pub unit_price: f64,
    pub total: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        let mut v = Validator::new();
        v.non_blank("concept", &self.concept)
            .non_blank("category", &self.category)
            .non_negative_amount("unit_price", self.unit_price)
            .non_negative_amount("total", self.total);
        if let Some(q) = self.quantity { v.non_negative_count("quantity", q); }
        if let Some(u) = &self.unit { v.non_blank("unit", u); }
        v.finish()
    }
}

pub async fn create(db: &DatabaseConnection, input: NewTransaction) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        date: Set(input.date),
        kind: Set(input.kind),
        concept: Set(input.concept.trim().to_string()),
        category: Set(input.category.trim().to_string()),
        quantity: Set(input.quantity),
        unit: Set(input.unit),
        unit_price: Set(input.unit_price),
        total: Set(input.total),
        notes: Set(input.notes),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
