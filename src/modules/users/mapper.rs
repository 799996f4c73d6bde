use coursehub_models::{User, ids::UserId};

use super::model::{UserProfile, UserRepresentation, UserSummary, UserView};
use crate::context::SerializeContext;
use crate::represent::Represent;

impl Represent for User {
    type Output = UserProfile;

    const FIELDS: &'static [&'static str] = UserView::PROFILE_FIELDS;
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "points", "level"];

    fn represent(&self, ctx: &SerializeContext<'_>) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
            points: self.points,
            level: self.level,
            bio: self.bio.clone(),
            avatar: ctx.file_url(self.avatar.as_deref()),
            date_of_birth: self.date_of_birth,
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

pub fn represent_user(
    user: &User,
    view: UserView,
    ctx: &SerializeContext<'_>,
) -> UserRepresentation {
    match view {
        UserView::Restricted => UserRepresentation::Restricted(UserSummary::from(user)),
        UserView::Profile => UserRepresentation::Profile(user.represent(ctx)),
    }
}

/// Embedded profile of a related user; `None` when the user is gone.
pub(crate) fn embed_user(id: UserId, ctx: &SerializeContext<'_>) -> Option<UserProfile> {
    ctx.store().user(id).map(|user| user.represent(ctx))
}

pub(crate) fn embed_optional_user(
    id: Option<UserId>,
    ctx: &SerializeContext<'_>,
) -> Option<UserProfile> {
    id.and_then(|id| embed_user(id, ctx))
}
