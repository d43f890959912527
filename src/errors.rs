use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the battle core. Only start-up work (loading data and
/// configuration, creating Pokemon) can fail; move resolution never does.
#[derive(Debug, Error)]
pub enum BattleEngineError {
    /// Error related to loading or validating catalogs
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    /// Error related to species data lookup or processing
    #[error("Species data error: {0}")]
    SpeciesData(#[from] SpeciesDataError),
    /// Error related to engine configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while reading the RON catalogs from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("{catalog} catalog is empty")]
    Empty { catalog: &'static str },
}

/// Errors related to species data operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeciesDataError {
    /// The specified species was not found in the catalog
    #[error("Species not found: {0}")]
    SpeciesNotFound(String),
    /// Species data is malformed or incomplete
    #[error("Malformed species data: {0}")]
    MalformedData(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// A fault raised inside a single ability hook. The dispatcher rolls back
/// whatever the hook touched and carries on as if the ability did nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbilityError {
    #[error("species data missing for {0}")]
    MissingSpecies(String),
    #[error("{ability} hook failed: {reason}")]
    Failed { ability: String, reason: String },
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using SpeciesDataError
pub type SpeciesDataResult<T> = Result<T, SpeciesDataError>;

pub type ConfigResult<T> = Result<T, ConfigError>;

pub type AbilityResult<T> = Result<T, AbilityError>;
