//! OpenAPI document. The schemas mirror the JSON shapes of the `models` and
//! `service` types, which do not depend on `utoipa` themselves.

use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub app: String, pub version: String }

#[derive(ToSchema)]
pub struct AnimalDoc {
    pub id: Uuid,
    pub lot: String,
    /// laying | broiler | breeder
    pub animal_type: String,
    pub breed: String,
    pub count: i32,
    #[schema(format = Date)]
    pub intake_date: String,
    pub age_days: i32,
    pub avg_weight: f64,
    /// active | sold | dead | transferred
    pub status: String,
    pub notes: Option<String>,
    #[schema(format = DateTime)]
    pub created_at: String,
    #[schema(format = DateTime)]
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct NewAnimalDoc {
    pub lot: String,
    pub animal_type: String,
    pub breed: String,
    pub count: i32,
    #[schema(format = Date)]
    pub intake_date: String,
    pub age_days: i32,
    pub avg_weight: f64,
    pub notes: Option<String>,
}

#[derive(ToSchema)]
pub struct AnimalPatchDoc {
    pub count: Option<i32>,
    pub age_days: Option<i32>,
    pub avg_weight: Option<f64>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(ToSchema)]
pub struct IncubationBatchDoc {
    pub id: Uuid,
    pub lot: String,
    pub egg_type: String,
    pub breed: String,
    pub egg_count: i32,
    #[schema(format = Date)]
    pub incubation_date: String,
    #[schema(format = Date)]
    pub expected_hatch_date: String,
    pub temperature: f64,
    pub humidity: f64,
    /// active | hatched | failed | cancelled
    pub status: String,
    pub hatched_count: i32,
    pub notes: Option<String>,
    #[schema(format = DateTime)]
    pub created_at: String,
    #[schema(format = DateTime)]
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct NewIncubationBatchDoc {
    pub lot: String,
    pub egg_type: String,
    pub breed: String,
    pub egg_count: i32,
    #[schema(format = Date)]
    pub incubation_date: String,
    #[schema(format = Date)]
    pub expected_hatch_date: String,
    /// Defaults to 37.5
    pub temperature: Option<f64>,
    /// Defaults to 60.0
    pub humidity: Option<f64>,
    pub notes: Option<String>,
}

#[derive(ToSchema)]
pub struct IncubationPatchDoc {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub status: Option<String>,
    pub hatched_count: Option<i32>,
    pub notes: Option<String>,
}

#[derive(ToSchema)]
pub struct EggCollectionDoc {
    pub id: Uuid,
    #[schema(format = Date)]
    pub date: String,
    pub source_lot: String,
    /// commercial | fertile
    pub egg_type: String,
    pub count: i32,
    pub total_weight: f64,
    pub notes: Option<String>,
    #[schema(format = DateTime)]
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct NewEggCollectionDoc {
    #[schema(format = Date)]
    pub date: String,
    pub source_lot: String,
    pub egg_type: String,
    pub count: i32,
    pub total_weight: f64,
    pub notes: Option<String>,
}

#[derive(ToSchema)]
pub struct FeedCalculationDoc {
    pub id: Uuid,
    pub lot: String,
    pub animal_type: String,
    pub animal_count: i32,
    pub age_days: i32,
    pub avg_weight: f64,
    pub feed_price_per_kg: f64,
    pub daily_consumption_kg: f64,
    pub monthly_consumption_kg: f64,
    pub estimated_cost: f64,
    #[schema(format = Date)]
    pub calculation_date: String,
    pub notes: Option<String>,
    #[schema(format = DateTime)]
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct NewFeedCalculationDoc {
    pub lot: String,
    pub animal_type: String,
    pub animal_count: i32,
    pub age_days: i32,
    pub avg_weight: f64,
    pub feed_price_per_kg: f64,
    pub notes: Option<String>,
}

#[derive(ToSchema)]
pub struct TransactionDoc {
    pub id: Uuid,
    #[schema(format = Date)]
    pub date: String,
    /// income | expense
    #[schema(rename = "type")]
    pub kind: String,
    pub concept: String,
    pub category: String,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub unit_price: f64,
    pub total: f64,
    pub notes: Option<String>,
    #[schema(format = DateTime)]
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct NewTransactionDoc {
    #[schema(format = Date)]
    pub date: String,
    #[schema(rename = "type")]
    pub kind: String,
    pub concept: String,
    pub category: String,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub unit_price: f64,
    pub total: f64,
    pub notes: Option<String>,
}

#[derive(ToSchema)]
pub struct BalanceDoc { pub total_income: f64, pub total_expense: f64, pub balance: f64 }

#[derive(ToSchema)]
pub struct DashboardDoc {
    pub total_animals: u64,
    pub total_laying: u64,
    pub total_broiler: u64,
    pub total_breeder: u64,
    pub eggs_today: i64,
    pub eggs_month: i64,
    pub active_incubations: u64,
    pub month_balance: f64,
    pub latest_collections: Vec<EggCollectionDoc>,
    pub lots_ready_for_sale: Vec<AnimalDoc>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Gallinapp", version = "1.0"),
    paths(
        crate::routes::health,
        crate::routes::animals::list,
        crate::routes::animals::create,
        crate::routes::animals::get_one,
        crate::routes::animals::update,
        crate::routes::animals::delete,
        crate::routes::incubation::list,
        crate::routes::incubation::create,
        crate::routes::incubation::get_one,
        crate::routes::incubation::update,
        crate::routes::incubation::delete,
        crate::routes::egg_collections::list,
        crate::routes::egg_collections::today,
        crate::routes::egg_collections::create,
        crate::routes::egg_collections::get_one,
        crate::routes::egg_collections::delete,
        crate::routes::feed::calculate,
        crate::routes::feed::list,
        crate::routes::feed::get_one,
        crate::routes::feed::delete,
        crate::routes::transactions::list,
        crate::routes::transactions::create,
        crate::routes::transactions::balance,
        crate::routes::transactions::get_one,
        crate::routes::transactions::delete,
        crate::routes::dashboard::get,
    ),
    components(
        schemas(
            HealthResponse,
            AnimalDoc,
            NewAnimalDoc,
            AnimalPatchDoc,
            IncubationBatchDoc,
            NewIncubationBatchDoc,
            IncubationPatchDoc,
            EggCollectionDoc,
            NewEggCollectionDoc,
            FeedCalculationDoc,
            NewFeedCalculationDoc,
            TransactionDoc,
            NewTransactionDoc,
            BalanceDoc,
            DashboardDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "animals"),
        (name = "incubation"),
        (name = "egg-collection"),
        (name = "feed"),
        (name = "transactions"),
        (name = "dashboard")
    )
)]
pub struct ApiDoc;
