use thiserror::Error;

/// Startup configuration problems, reported before the server binds its listener.
///
/// Reaching a handler with one of these is a bug, so responses fall through to the generic
/// 500 mapping of [`Error`](super::Error).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: &'static str, reason: String },
    #[error("BCRYPT_COST must be between {min} and {max}, got {cost}")]
    BcryptCostOutOfRange { cost: u32, min: u32, max: u32 },
}
