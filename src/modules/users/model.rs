use chrono::NaiveDate;
use coursehub_models::{Email, Role, ids::UserId};
use serde::Serialize;
use utoipa::ToSchema;

/// Restricted user view: identity and role only.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    pub email: Email,
    pub role: Role,
}

/// Profile user view. Also used wherever a user is embedded in another
/// representation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub email: Email,
    pub role: Role,
    pub points: i32,
    pub level: i32,
    pub bio: Option<String>,
    /// Absolute when the request is known.
    pub avatar: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Which user view to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserView {
    Restricted,
    #[default]
    Profile,
}

impl UserView {
    pub const RESTRICTED_FIELDS: &'static [&'static str] = &["id", "username", "email", "role"];

    pub const PROFILE_FIELDS: &'static [&'static str] = &[
        "id",
        "username",
        "email",
        "role",
        "points",
        "level",
        "bio",
        "avatar",
        "date_of_birth",
        "phone",
        "address",
    ];

    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            UserView::Restricted => Self::RESTRICTED_FIELDS,
            UserView::Profile => Self::PROFILE_FIELDS,
        }
    }

    pub const fn read_only_fields(self) -> &'static [&'static str] {
        match self {
            UserView::Restricted => &["id"],
            UserView::Profile => &["id", "points", "level"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum UserRepresentation {
    Restricted(UserSummary),
    Profile(UserProfile),
}
