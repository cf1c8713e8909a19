use models::{enums::AnimalType, feed_calculation::Consumption};

/// Month length used for monthly totals.
pub const DAYS_PER_MONTH: u32 = 30;

/// Growth stage that decides the daily ration of a bird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStage {
    /// Laying pullet, under 42 days.
    Chick,
    /// Laying pullet, 42 to 139 days.
    Rearing,
    /// Laying hen, 140 days and older.
    Production,
    /// Broiler, under 14 days.
    Starter,
    /// Broiler, 14 to 34 days.
    Grower,
    /// Broiler, 35 days and older.
    Finisher,
    Breeder,
}

impl FeedStage {
    pub fn for_animal(animal_type: AnimalType, age_days: u32) -> Self {
        match animal_type {
            AnimalType::Laying => match age_days {
                0..=41 => FeedStage::Chick,
                42..=139 => FeedStage::Rearing,
                _ => FeedStage::Production,
            },
            AnimalType::Broiler => match age_days {
                0..=13 => FeedStage::Starter,
                14..=34 => FeedStage::Grower,
                _ => FeedStage::Finisher,
            },
            AnimalType::Breeder => FeedStage::Breeder,
        }
    }

    /// Daily ration per head, in grams.
    pub fn ration_grams(self) -> u32 {
        match self {
            FeedStage::Chick => 30,
            FeedStage::Rearing => 80,
            FeedStage::Production => 120,
            FeedStage::Starter => 25,
            FeedStage::Grower => 100,
            FeedStage::Finisher => 150,
            FeedStage::Breeder => 160,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FeedStage::Chick => "chick",
            FeedStage::Rearing => "rearing",
            FeedStage::Production => "production",
            FeedStage::Starter => "starter",
            FeedStage::Grower => "grower",
            FeedStage::Finisher => "finisher",
            FeedStage::Breeder => "breeder",
        }
    }
}

/// Daily and monthly feed for `count` birds and the cost of the monthly amount.
///
/// Grams are summed as integers before converting to kilograms so that
/// whole-gram rations produce exact kilogram totals.
pub fn estimate(animal_type: AnimalType, count: u32, age_days: u32, price_per_kg: f64) -> Consumption {
    let grams = u64::from(FeedStage::for_animal(animal_type, age_days).ration_grams()) * u64::from(count);
    let daily_kg = grams as f64 / 1000.0;
    let monthly_kg = daily_kg * f64::from(DAYS_PER_MONTH);
    Consumption { daily_kg, monthly_kg, estimated_cost: monthly_kg * price_per_kg }
}
