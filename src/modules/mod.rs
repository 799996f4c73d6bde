//! One module per entity family. Each holds the response types (`model`)
//! and the [`Represent`](crate::represent::Represent) impls (`mapper`).

pub mod achievements;
pub mod assessments;
pub mod catalog;
pub mod commerce;
pub mod community;
pub mod learning;
pub mod users;
