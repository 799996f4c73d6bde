//! The record-to-representation contract shared by every entity.

use serde::Serialize;
use serde_json::Value;

use crate::context::SerializeContext;

/// Projection of a persisted record onto its outbound representation.
///
/// The serde form of [`Represent::Output`] has exactly the keys of
/// [`Represent::FIELDS`], in that order. Output depends only on the record
/// and on what the context can read, so repeated calls give identical
/// results.
pub trait Represent {
    type Output: Serialize;

    /// Exposed fields, in output order.
    const FIELDS: &'static [&'static str];

    /// Fields that appear in the output but are never accepted on write.
    const READ_ONLY_FIELDS: &'static [&'static str];

    fn represent(&self, ctx: &SerializeContext<'_>) -> Self::Output;
}

/// Represent `record` as an order-preserving JSON object.
pub fn to_json<R: Represent>(record: &R, ctx: &SerializeContext<'_>) -> serde_json::Result<Value> {
    serde_json::to_value(record.represent(ctx))
}

pub fn represent_many<R: Represent>(records: &[R], ctx: &SerializeContext<'_>) -> Vec<R::Output> {
    records.iter().map(|record| record.represent(ctx)).collect()
}
