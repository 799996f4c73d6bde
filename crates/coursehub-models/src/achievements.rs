//! Gamification records.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::choices::BadgeType;
use crate::ids::{BadgeId, UserBadgeId, UserId};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Badge {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub badge_type: BadgeType,
    pub points_required: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserBadge {
    pub id: UserBadgeId,
    pub user_id: UserId,
    pub badge_id: BadgeId,
    pub earned_at: DateTime<Utc>,
}
