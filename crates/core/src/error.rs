//! Error taxonomy for the Collaboro core.
//!
//! Two families of failures exist in this crate:
//!
//! - [`CatalogError`]: anything that can go wrong while loading and validating
//!   a catalog. Once a catalog is in memory it can no longer fail; queries
//!   and lookups are total functions.
//! - [`InterestError`]: the expression-of-interest write path, which mirrors
//!   the hosted table's behaviour (field validation, duplicate email,
//!   per-email rate limit).

/// Errors raised while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read catalog file: {0}")]
    FileRead(std::io::Error),
    #[error("catalog schema mismatch at {path}: {source}")]
    SchemaMismatch {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to serialize catalog: {0}")]
    Serialization(serde_yaml::Error),
    #[error("duplicate opportunity id: {0}")]
    DuplicateOpportunityId(String),
    #[error("duplicate task id {task_id} in opportunity {opportunity_id}")]
    DuplicateTaskId {
        opportunity_id: String,
        task_id: String,
    },
    #[error("duplicate service point id: {0}")]
    DuplicateServicePointId(String),
    #[error("opportunity {id} has invalid distance {distance_km} km")]
    InvalidDistance { id: String, distance_km: f64 },
    #[error("unsupported search radius: {0} km (allowed: 1, 3, 5, 10)")]
    UnsupportedRadius(u32),
    #[error("unknown opportunity type filter: {0}")]
    UnknownTypeFilter(String),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Errors raised by the expression-of-interest write path.
///
/// The variants follow the failure taxonomy of the hosted lead-capture table:
/// field-level validation failures are recoverable by user correction,
/// a duplicate email means the interest is already recorded, and the rate
/// limit guards against rapid resubmission from the same address.
#[derive(Debug, thiserror::Error)]
pub enum InterestError {
    #[error("first name must contain at least {min} characters")]
    FirstNameTooShort { min: usize },
    #[error("invalid email address")]
    InvalidEmail,
    #[error("a role is required")]
    MissingRole,
    #[error("motivation must contain at least {min} characters")]
    MotivationTooShort { min: usize },
    #[error("this email has already expressed interest")]
    DuplicateEmail,
    #[error("please wait {wait_secs} seconds before submitting again")]
    RateLimited { wait_secs: u64 },
}

pub type InterestResult<T> = std::result::Result<T, InterestError>;
