//! Port for loading a season dataset into an empty record store.
//!
//! Adapters insert every record of the dataset in one transaction and refuse
//! to touch a store that already holds teams.

use async_trait::async_trait;
use league_seed::SeedDataset;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised while seeding league records.
    pub enum LeagueSeedRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } => "league seeding connection failed: {message}",
        /// Insert or lookup failed during execution.
        Query { message: String } => "league seeding query failed: {message}",
    }
}

/// Result of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingResult {
    /// The dataset was written.
    Applied,
    /// The store already held teams; nothing was written.
    AlreadySeeded,
}

/// Port for seeding league records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeagueSeedRepository: Send + Sync {
    /// Insert `dataset` when the store holds no team yet.
    ///
    /// All rows are written atomically; a failure leaves the store empty.
    async fn seed_if_empty(
        &self,
        dataset: &SeedDataset,
    ) -> Result<SeedingResult, LeagueSeedRepositoryError>;
}
