use coursehub_models::{CourseRating, Payment, Wishlist};

use super::model::{CourseRatingResponse, PaymentResponse, WishlistResponse};
use crate::context::SerializeContext;
use crate::modules::catalog::mapper::embed_course;
use crate::modules::users::mapper::embed_user;
use crate::represent::Represent;

impl Represent for Payment {
    type Output = PaymentResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "student",
        "course",
        "amount",
        "currency",
        "status",
        "payment_method",
        "transaction_id",
        "payment_date",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "student", "course", "payment_date"];

    fn represent(&self, ctx: &SerializeContext<'_>) -> PaymentResponse {
        PaymentResponse {
            id: self.id,
            student: embed_user(self.student_id, ctx),
            course: embed_course(self.course_id, ctx),
            amount: self.amount,
            currency: self.currency.clone(),
            status: self.status,
            payment_method: self.payment_method.clone(),
            transaction_id: self.transaction_id.clone(),
            payment_date: self.payment_date,
        }
    }
}

impl Represent for CourseRating {
    type Output = CourseRatingResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "student",
        "course",
        "rating",
        "review",
        "created_at",
        "updated_at",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] =
        &["id", "student", "course", "created_at", "updated_at"];

    fn represent(&self, ctx: &SerializeContext<'_>) -> CourseRatingResponse {
        CourseRatingResponse {
            id: self.id,
            student: embed_user(self.student_id, ctx),
            course: embed_course(self.course_id, ctx),
            rating: self.rating,
            review: self.review.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Represent for Wishlist {
    type Output = WishlistResponse;

    const FIELDS: &'static [&'static str] = &["id", "course", "added_at", "student"];
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "course", "added_at"];

    fn represent(&self, ctx: &SerializeContext<'_>) -> WishlistResponse {
        WishlistResponse {
            id: self.id,
            course: embed_course(self.course_id, ctx),
            added_at: self.added_at,
            student: self.student_id,
        }
    }
}
