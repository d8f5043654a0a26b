//! Verification code seeding for the local development database.
//!
//! Ensures the admin verification code exists in the `VerificationCode`
//! table, inserting it only when no row with its code hash is present.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use verification_seed::prelude::*;
//!
//! let seeder = Seeder::connect(&SeedConfig::default()).await?;
//! let outcome = seeder.ensure_seeded().await?;
//! println!("{outcome}");
//! ```

pub mod config;
pub mod crypto;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, SeedOutcome, Seeder, VerificationCode, run};
    pub use crate::generators::{
        GeneratedVerificationCode, VerificationCodeGenerator, VerificationCodeInput,
    };
}
