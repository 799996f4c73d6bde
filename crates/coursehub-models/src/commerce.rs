//! Payments, ratings and wishlists.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::choices::PaymentStatus;
use crate::ids::{CourseId, CourseRatingId, PaymentId, UserId, WishlistId};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Payment {
    pub id: PaymentId,
    pub student_id: UserId,
    pub course_id: CourseId,
    pub amount: f64,
    /// ISO 4217 code.
    pub currency: String,
    pub status: PaymentStatus,
    pub payment_method: String,
    pub transaction_id: Option<String>,
    pub payment_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CourseRating {
    pub id: CourseRatingId,
    pub student_id: UserId,
    pub course_id: CourseId,
    /// Stars, 1 to 5.
    pub rating: i32,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Wishlist {
    pub id: WishlistId,
    pub student_id: UserId,
    pub course_id: CourseId,
    pub added_at: DateTime<Utc>,
}
