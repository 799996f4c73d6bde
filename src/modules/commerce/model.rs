use chrono::{DateTime, Utc};
use coursehub_core::serde::serialize_decimal;
use coursehub_models::{
    PaymentStatus,
    ids::{CourseRatingId, PaymentId, UserId, WishlistId},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::catalog::CourseResponse;
use crate::modules::users::UserProfile;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PaymentResponse {
    pub id: PaymentId,
    pub student: Option<UserProfile>,
    pub course: Option<CourseResponse>,
    #[serde(serialize_with = "serialize_decimal")]
    #[schema(value_type = String, example = "49.90")]
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    pub payment_method: String,
    pub transaction_id: Option<String>,
    pub payment_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CourseRatingResponse {
    pub id: CourseRatingId,
    pub student: Option<UserProfile>,
    pub course: Option<CourseResponse>,
    pub rating: i32,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WishlistResponse {
    pub id: WishlistId,
    pub course: Option<CourseResponse>,
    pub added_at: DateTime<Utc>,
    pub student: UserId,
}
