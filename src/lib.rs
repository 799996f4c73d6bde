//! # CourseHub
//!
//! The data-transfer layer of the CourseHub learning platform: it turns
//! persisted records (courses, enrollments, quizzes, payments, ...) into
//! their outbound representations and validates the registration, login and
//! profile-update write paths.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── coursehub-core/          # ValidationError, URL resolution, serde helpers
//! ├── coursehub-config/        # MediaConfig from the environment
//! ├── coursehub-models/        # IDs, choices, records, inbound DTOs
//! ├── coursehub-db/            # RecordStore boundary + MemoryStore
//! ├── coursehub-auth/          # Validators, Authenticator, bcrypt helpers
//! └── coursehub-observability/ # Console logging
//! src/
//! ├── context.rs               # SerializeContext
//! ├── represent.rs             # Represent trait, to_json, represent_many
//! ├── docs.rs                  # OpenAPI schemas
//! └── modules/                 # One module per entity family
//! ```
//!
//! Each entity family follows the same layout:
//!
//! - `mod.rs`: Module exports
//! - `model.rs`: Response types, one per entity
//! - `mapper.rs`: `Represent` impls and embedding helpers
//!
//! ## Representations
//!
//! Every response type lists its fields explicitly, so a record attribute is
//! exposed only if its response type names it. Related entities are
//! embedded through their own representation; how deep that goes is fixed by
//! the response types. Derived fields (counts, `average_rating`, absolute
//! URLs) are computed on every call.
//!
//! ```ignore
//! use coursehub::{SerializeContext, to_json};
//! use coursehub_core::RequestContext;
//!
//! let request = RequestContext::parse("https://learn.example.com/api/courses/7/")?;
//! let ctx = SerializeContext::new(&store).with_request(&request);
//!
//! let body = to_json(&course, &ctx)?;
//! assert_eq!(body["average_rating"], 4.6);
//! ```
//!
//! ## Write paths
//!
//! See [`coursehub_auth::validate_registration`],
//! [`coursehub_auth::validate_login`] and
//! [`coursehub_auth::validate_profile_update`]. Failures are
//! [`coursehub_core::ValidationError`]s keyed by field, with object-level
//! messages under `non_field_errors`.
//!
//! ## Environment Variables
//!
//! ```bash
//! MEDIA_URL=/media/                    # prefix for uploaded files
//! ABSOLUTE_URL_SCHEMES=http://,https:// # values left untouched
//! LOG_LEVEL=info
//! ```

pub mod context;
pub mod docs;
pub mod modules;
pub mod represent;

pub use context::SerializeContext;
pub use modules::users::{UserView, represent_user};
pub use represent::{Represent, represent_many, to_json};

// Re-export workspace crates for convenience
pub use coursehub_auth;
pub use coursehub_config;
pub use coursehub_core;
pub use coursehub_db;
pub use coursehub_models;
pub use coursehub_observability;
