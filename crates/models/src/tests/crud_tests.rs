use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, EntityTrait};
use anyhow::Result;

use super::setup_test_db;
use crate::{
    animal::{self, AnimalPatch, NewAnimal},
    egg_collection::{self, NewEggCollection},
    enums::{AnimalStatus, AnimalType, EggType, IncubationStatus, TransactionType},
    errors::ModelError,
    farm_transaction::{self, NewTransaction},
    feed_calculation::{self, Consumption, NewFeedCalculation},
    incubation_batch::{self, IncubationPatch, NewIncubationBatch},
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn laying_lot() -> NewAnimal {
    NewAnimal {
        lot: "Lote-P1".into(),
        animal_type: AnimalType::Laying,
        breed: "Isa Brown".into(),
        count: 100,
        intake_date: day(2024, 3, 1),
        age_days: 120,
        avg_weight: 1.8,
        notes: Some("test lot".into()),
    }
}

#[tokio::test]
async fn animal_create_find_patch() -> Result<()> {
    let db = setup_test_db().await?;

    let created = animal::create(&db, laying_lot()).await?;
    assert_eq!(created.status, AnimalStatus::Active);
    assert_eq!(created.created_at, created.updated_at);

    let found = animal::Entity::find_by_id(created.id).one(&db).await?.expect("stored");
    assert_eq!(found, created);

    let mut am: animal::ActiveModel = found.into();
    AnimalPatch { count: Some(95), status: Some(AnimalStatus::Sold), ..Default::default() }.apply(&mut am);
    let updated = am.update(&db).await?;
    assert_eq!(updated.count, 95);
    assert_eq!(updated.status, AnimalStatus::Sold);
    assert_eq!(updated.breed, "Isa Brown");
    assert_eq!(updated.avg_weight, 1.8);
    assert!(updated.updated_at >= created.updated_at);
    Ok(())
}

#[tokio::test]
async fn animal_rejects_blank_lot_and_negative_count() -> Result<()> {
    let db = setup_test_db().await?;
    let mut input = laying_lot();
    input.lot = "   ".into();
    input.count = -3;

    match animal::create(&db, input).await {
        Err(ModelError::Validation(errors)) => {
            let fields: Vec<_> = errors.fields().collect();
            assert_eq!(fields, vec!["lot", "count"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(animal::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn incubation_defaults_and_hatch_bound() -> Result<()> {
    let db = setup_test_db().await?;
    let input: NewIncubationBatch = serde_json::from_value(serde_json::json!({
        "lot": "Inc-1",
        "egg_type": "laying",
        "breed": "Isa Brown",
        "egg_count": 120,
        "incubation_date": "2024-05-01",
        "expected_hatch_date": "2024-05-22"
    }))?;
    let batch = incubation_batch::create(&db, input).await?;
    assert_eq!(batch.temperature, incubation_batch::DEFAULT_TEMPERATURE);
    assert_eq!(batch.humidity, incubation_batch::DEFAULT_HUMIDITY);
    assert_eq!(batch.status, IncubationStatus::Active);
    assert_eq!(batch.hatched_count, 0);

    let too_many = IncubationPatch { hatched_count: Some(121), ..Default::default() };
    assert!(matches!(too_many.validate(&batch), Err(ModelError::Validation(_))));
    let fine = IncubationPatch { hatched_count: Some(120), ..Default::default() };
    assert!(fine.validate(&batch).is_ok());
    Ok(())
}

#[tokio::test]
async fn incubation_rejects_hatch_before_start() {
    let input = NewIncubationBatch {
        lot: "Inc-2".into(),
        egg_type: AnimalType::Broiler,
        breed: "Ross 308".into(),
        egg_count: 10,
        incubation_date: day(2024, 5, 10),
        expected_hatch_date: day(2024, 5, 1),
        temperature: 37.5,
        humidity: 60.0,
        notes: None,
    };
    let Err(ModelError::Validation(errors)) = input.validate() else { panic!("expected validation error") };
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["expected_hatch_date"]);
}

#[tokio::test]
async fn egg_collection_roundtrip() -> Result<()> {
    let db = setup_test_db().await?;
    let created = egg_collection::create(&db, NewEggCollection {
        date: day(2024, 6, 2),
        source_lot: "Lote-P1".into(),
        egg_type: EggType::Commercial,
        count: 85,
        total_weight: 5.1,
        notes: None,
    }).await?;
    let found = egg_collection::Entity::find_by_id(created.id).one(&db).await?.expect("stored");
    assert_eq!(found.count, 85);
    assert_eq!(found.egg_type, EggType::Commercial);
    assert_eq!(found.date, day(2024, 6, 2));
    Ok(())
}

#[tokio::test]
async fn feed_calculation_stores_consumption() -> Result<()> {
    let db = setup_test_db().await?;
    let input = NewFeedCalculation {
        lot: "Lote-E1".into(),
        animal_type: AnimalType::Broiler,
        animal_count: 200,
        age_days: 25,
        avg_weight: 1.2,
        feed_price_per_kg: 0.6,
        notes: None,
    };
    let consumption = Consumption { daily_kg: 20.0, monthly_kg: 600.0, estimated_cost: 360.0 };
    let stored = feed_calculation::create(&db, input, consumption, day(2024, 6, 2)).await?;
    assert_eq!(stored.daily_consumption_kg, 20.0);
    assert_eq!(stored.monthly_consumption_kg, 600.0);
    assert_eq!(stored.estimated_cost, 360.0);
    assert_eq!(stored.feed_price_per_kg, 0.6);
    assert_eq!(stored.calculation_date, day(2024, 6, 2));
    Ok(())
}

#[tokio::test]
async fn transaction_serializes_kind_as_type() -> Result<()> {
    let db = setup_test_db().await?;
    let input: NewTransaction = serde_json::from_value(serde_json::json!({
        "date": "2024-06-01",
        "type": "income",
        "concept": "Egg sale",
        "category": "sales",
        "quantity": 30,
        "unit": "dozen",
        "unit_price": 3.5,
        "total": 105.0
    }))?;
    let stored = farm_transaction::create(&db, input).await?;
    assert_eq!(stored.kind, TransactionType::Income);

    let json = serde_json::to_value(&stored)?;
    assert_eq!(json["type"], "income");
    assert!(json.get("kind").is_none());
    assert_eq!(json["date"], "2024-06-01");
    Ok(())
}

#[tokio::test]
async fn transaction_rejects_negative_total() {
    let input = NewTransaction {
        date: day(2024, 6, 1),
        kind: TransactionType::Expense,
        concept: "Feed".into(),
        category: "feed".into(),
        quantity: Some(-1),
        unit: None,
        unit_price: 10.0,
        total: -10.0,
        notes: None,
    };
    let Err(ModelError::Validation(errors)) = input.validate() else { panic!("expected validation error") };
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["total", "quantity"]);
}
