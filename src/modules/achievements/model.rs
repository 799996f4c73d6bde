use chrono::{DateTime, Utc};
use coursehub_models::{
    BadgeType,
    ids::{BadgeId, UserBadgeId, UserId},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BadgeResponse {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub badge_type: BadgeType,
    pub points_required: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserBadgeResponse {
    pub id: UserBadgeId,
    pub badge: Option<BadgeResponse>,
    pub earned_at: DateTime<Utc>,
    pub user: UserId,
}
