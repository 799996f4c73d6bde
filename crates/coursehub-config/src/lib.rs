//! # CourseHub Config
//!
//! Configuration types for the CourseHub representation layer.
//!
//! - [`media`]: How stored file names and links become URLs
//!
//! # Example
//!
//! ```ignore
//! use coursehub_config::{MediaConfig, load_dotenv};
//!
//! load_dotenv();
//! let media = MediaConfig::from_env();
//! ```

pub mod media;

pub use media::MediaConfig;

/// Load variables from a `.env` file in the working directory, if present.
///
/// Variables already set in the process environment take precedence.
pub fn load_dotenv() -> bool {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            true
        }
        Err(_) => false,
    }
}
