//! Enumerated attribute values.
//!
//! Every choice is stored and serialized as its lowercase string value
//! (`"student"`, `"multiple_choice"`, ...).

use serde::{Deserialize, Serialize};
use sqlx::{
    Database, Decode, Encode, Type,
    postgres::{PgTypeInfo, Postgres},
};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Error returned when a string is not one of a choice's values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice {
    pub value: String,
}

impl fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" is not a valid choice.", self.value)
    }
}

impl std::error::Error for InvalidChoice {}

/// Generates a string-valued enum with serde, sqlx (TEXT) and OpenAPI support.
macro_rules! define_choice {
    (
        $(#[$meta:meta])*
        $name:ident default $default:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = InvalidChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(InvalidChoice {
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl Type<Postgres> for $name {
            fn type_info() -> PgTypeInfo {
                <String as Type<Postgres>>::type_info()
            }

            fn compatible(ty: &PgTypeInfo) -> bool {
                <String as Type<Postgres>>::compatible(ty)
            }
        }

        impl<'q> Encode<'q, Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <&str as Encode<'q, Postgres>>::encode_by_ref(&self.as_str(), buf)
            }
        }

        impl<'r> Decode<'r, Postgres> for $name {
            fn decode(
                value: <Postgres as Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                let s = <&str as Decode<'r, Postgres>>::decode(value)?;
                Ok(s.parse::<$name>()?)
            }
        }
    };
}

define_choice!(
    /// Account role. New accounts are students unless stated otherwise.
    Role default Student {
        Student => "student",
        Instructor => "instructor",
        Admin => "admin",
    }
);

define_choice!(
    Difficulty default Beginner {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
);

define_choice!(
    CourseStatus default Draft {
        Draft => "draft",
        Published => "published",
        Archived => "archived",
    }
);

define_choice!(
    LessonType default Video {
        Video => "video",
        Text => "text",
        Quiz => "quiz",
        Assignment => "assignment",
    }
);

define_choice!(
    QuestionType default MultipleChoice {
        MultipleChoice => "multiple_choice",
        TrueFalse => "true_false",
        ShortAnswer => "short_answer",
    }
);

define_choice!(
    SubmissionStatus default Submitted {
        Submitted => "submitted",
        Late => "late",
        Graded => "graded",
        Returned => "returned",
    }
);

define_choice!(
    NotificationType default Info {
        Info => "info",
        Enrollment => "enrollment",
        Assignment => "assignment",
        Grade => "grade",
        Announcement => "announcement",
        Message => "message",
    }
);

define_choice!(
    BadgeType default Achievement {
        Achievement => "achievement",
        Completion => "completion",
        Participation => "participation",
        Milestone => "milestone",
    }
);

define_choice!(
    PaymentStatus default Pending {
        Pending => "pending",
        Completed => "completed",
        Failed => "failed",
        Refunded => "refunded",
    }
);
