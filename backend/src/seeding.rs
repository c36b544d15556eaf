//! Startup seeding of the record store.
//!
//! The dataset comes from `seed_path` when configured, otherwise from the
//! season bundled with `league-seed`. PostgreSQL stores are only written
//! when they hold no teams yet.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use league_seed::{DatasetError, SeedDataset};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{LeagueSeedRepository, LeagueSeedRepositoryError, SeedingResult};

/// Errors returned while loading or applying the seed dataset.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Dataset file could not be read.
    #[error("failed to read dataset at {path}: {source}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Dataset parsing or validation failed.
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
    /// Writing the dataset failed.
    #[error("seeding failed: {0}")]
    Seeding(#[from] LeagueSeedRepositoryError),
}

/// Load the configured dataset, or the bundled season when `path` is `None`.
///
/// # Errors
/// Returns [`StartupSeedingError`] when the file cannot be read or fails
/// validation.
///
/// # Examples
/// ```
/// use fcsmtop::seeding::load_dataset;
///
/// let dataset = load_dataset(None).expect("bundled dataset");
/// assert_eq!(dataset.season(), "2025");
/// ```
pub fn load_dataset(path: Option<&Path>) -> Result<SeedDataset, StartupSeedingError> {
    match path {
        None => Ok(SeedDataset::national_2025()?),
        Some(path) => {
            let contents = read_file(path)?;
            let dataset = SeedDataset::from_json(&contents)?;
            info!(path = %path.display(), season = dataset.season(), "dataset loaded");
            Ok(dataset)
        }
    }
}

fn read_file(path: &Path) -> Result<String, StartupSeedingError> {
    let read_error = |source| StartupSeedingError::DatasetRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "dataset path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    dir.read_to_string(Path::new(file_name)).map_err(read_error)
}

/// Write `dataset` unless the store already holds records.
///
/// # Errors
/// Returns [`StartupSeedingError::Seeding`] when the store rejects the
/// write.
pub async fn seed_store<R>(
    repository: &R,
    dataset: &SeedDataset,
) -> Result<SeedingResult, StartupSeedingError>
where
    R: LeagueSeedRepository + ?Sized,
{
    let result = repository.seed_if_empty(dataset).await?;
    match result {
        SeedingResult::Applied => info!(
            season = dataset.season(),
            league = dataset.league(),
            "league dataset seeded"
        ),
        SeedingResult::AlreadySeeded => {
            info!(season = dataset.season(), "store already seeded; skipping");
        }
    }
    Ok(result)
}
