//! Strongly-typed ID newtypes for persisted records.
//!
//! Records use auto-incrementing 64-bit primary keys. Each record type gets
//! its own wrapper so a `CourseId` can never be passed where a `LessonId` is
//! expected.
//!
//! # Example
//!
//! ```ignore
//! use coursehub_models::ids::{CourseId, LessonId};
//!
//! fn lessons_of(course: CourseId) { /* ... */ }
//!
//! lessons_of(CourseId::new(7));     // OK
//! // lessons_of(LessonId::new(7));  // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use sqlx::{
    Database, Decode, Encode, Type,
    postgres::{PgHasArrayType, PgTypeInfo},
};
use std::fmt;
use utoipa::ToSchema;

/// Generates an `i64` primary-key newtype with serde, sqlx and OpenAPI support.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
        #[serde(transparent)]
        #[schema(value_type = i64)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }

        // Stored as BIGINT
        impl Type<sqlx::Postgres> for $name {
            fn type_info() -> PgTypeInfo {
                <i64 as Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &PgTypeInfo) -> bool {
                <i64 as Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'q> Encode<'q, sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <i64 as Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }

        impl<'r> Decode<'r, sqlx::Postgres> for $name {
            fn decode(
                value: <sqlx::Postgres as Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                <i64 as Decode<'r, sqlx::Postgres>>::decode(value).map(Self)
            }
        }

        impl PgHasArrayType for $name {
            fn array_type_info() -> PgTypeInfo {
                <i64 as PgHasArrayType>::array_type_info()
            }
        }
    };
}

define_id!(
    /// Primary key of a user account.
    UserId
);
define_id!(CategoryId);
define_id!(CourseId);
define_id!(EnrollmentId);
define_id!(
    /// Primary key of a course module (a chapter grouping lessons).
    ModuleId
);
define_id!(LessonId);
define_id!(LessonProgressId);
define_id!(QuizId);
define_id!(QuestionId);
define_id!(QuestionOptionId);
define_id!(QuizAttemptId);
define_id!(QuizResponseId);
define_id!(AssignmentId);
define_id!(AssignmentSubmissionId);
define_id!(AnnouncementId);
define_id!(MessageId);
define_id!(NotificationId);
define_id!(BadgeId);
define_id!(UserBadgeId);
define_id!(PaymentId);
define_id!(DiscussionThreadId);
define_id!(DiscussionPostId);
define_id!(ProgressId);
define_id!(CertificateId);
define_id!(CourseRatingId);
define_id!(WishlistId);
define_id!(LearningPathId);
