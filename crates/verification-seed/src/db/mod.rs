//! Database integration for seeding verification codes.
//!
//! The [`Seeder`] checks for an existing row by code hash and inserts the
//! code only when it is missing.

mod seeder;

pub use seeder::{SeedError, SeedOutcome, Seeder, VerificationCode, run};
