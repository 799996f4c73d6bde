use chrono::{DateTime, Utc};
use coursehub_models::{
    NotificationType,
    ids::{
        AnnouncementId, DiscussionPostId, DiscussionThreadId, MessageId, NotificationId, UserId,
    },
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::catalog::CourseResponse;
use crate::modules::users::UserProfile;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AnnouncementResponse {
    pub id: AnnouncementId,
    pub course: Option<CourseResponse>,
    pub created_by: Option<UserProfile>,
    pub title: String,
    pub content: String,
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MessageResponse {
    pub id: MessageId,
    pub instructor: Option<UserProfile>,
    pub sender: Option<UserProfile>,
    pub subject: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NotificationResponse {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub is_read: bool,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user: UserId,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DiscussionThreadResponse {
    pub id: DiscussionThreadId,
    pub course: Option<CourseResponse>,
    pub created_by: Option<UserProfile>,
    pub posts_count: usize,
    pub title: String,
    pub content: String,
    pub is_pinned: bool,
    pub is_closed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DiscussionPostResponse {
    pub id: DiscussionPostId,
    pub thread: Option<DiscussionThreadResponse>,
    pub author: Option<UserProfile>,
    pub likes_count: usize,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub parent: Option<DiscussionPostId>,
    /// IDs of the users who liked the post.
    pub likes: Vec<UserId>,
}
