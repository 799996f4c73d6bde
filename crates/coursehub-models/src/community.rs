//! Announcements, messaging, notifications and discussion records.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::choices::NotificationType;
use crate::ids::{
    AnnouncementId, CourseId, DiscussionPostId, DiscussionThreadId, MessageId, NotificationId,
    UserId,
};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub course_id: CourseId,
    pub created_by_id: UserId,
    pub title: String,
    pub content: String,
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
}

/// A direct message between a learner and a course instructor.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Message {
    pub id: MessageId,
    pub instructor_id: UserId,
    pub sender_id: UserId,
    pub subject: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub is_read: bool,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DiscussionThread {
    pub id: DiscussionThreadId,
    pub course_id: CourseId,
    pub created_by_id: UserId,
    pub title: String,
    pub content: String,
    pub is_pinned: bool,
    pub is_closed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post in a thread, optionally replying to another post. Likes are
/// reached through the store.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DiscussionPost {
    pub id: DiscussionPostId,
    pub thread_id: DiscussionThreadId,
    pub author_id: UserId,
    pub parent_id: Option<DiscussionPostId>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
