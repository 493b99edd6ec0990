pub mod seed;

pub use seed::{SeedGoalStore, SeedTransactionStore};
