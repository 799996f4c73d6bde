//! # CourseHub DB
//!
//! The storage boundary of the representation layer.
//!
//! Mappers never query storage directly; they go through [`RecordStore`],
//! which exposes record lookups by primary key and the relation accessors
//! needed for embedding and derived counts. [`MemoryStore`] is the bundled
//! implementation, used by tests and by hosts that preload records.
//!
//! # Example
//!
//! ```ignore
//! use coursehub_db::{MemoryStore, RecordStore};
//!
//! let mut store = MemoryStore::new();
//! store.insert(course);
//! store.insert(enrollment);
//!
//! assert_eq!(store.enrollments_of_course(course_id).len(), 1);
//! ```

pub mod memory;
pub mod store;

pub use memory::{MemoryStore, Stored};
pub use store::RecordStore;
