use coursehub_models::{Badge, UserBadge};

use super::model::{BadgeResponse, UserBadgeResponse};
use crate::context::SerializeContext;
use crate::represent::Represent;

impl Represent for Badge {
    type Output = BadgeResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "description",
        "icon",
        "badge_type",
        "points_required",
        "created_at",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "created_at"];

    fn represent(&self, _ctx: &SerializeContext<'_>) -> BadgeResponse {
        BadgeResponse {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            badge_type: self.badge_type,
            points_required: self.points_required,
            created_at: self.created_at,
        }
    }
}

impl Represent for UserBadge {
    type Output = UserBadgeResponse;

    const FIELDS: &'static [&'static str] = &["id", "badge", "earned_at", "user"];
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "badge", "earned_at"];

    fn represent(&self, ctx: &SerializeContext<'_>) -> UserBadgeResponse {
        UserBadgeResponse {
            id: self.id,
            badge: ctx.store().badge(self.badge_id).map(|badge| badge.represent(ctx)),
            earned_at: self.earned_at,
            user: self.user_id,
        }
    }
}
