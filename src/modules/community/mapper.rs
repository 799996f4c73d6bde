use coursehub_models::{
    Announcement, DiscussionPost, DiscussionThread, Message, Notification,
    ids::DiscussionThreadId,
};

use super::model::{
    AnnouncementResponse, DiscussionPostResponse, DiscussionThreadResponse, MessageResponse,
    NotificationResponse,
};
use crate::context::SerializeContext;
use crate::modules::catalog::mapper::embed_course;
use crate::modules::users::mapper::embed_user;
use crate::represent::Represent;

impl Represent for Announcement {
    type Output = AnnouncementResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "course",
        "created_by",
        "title",
        "content",
        "is_pinned",
        "created_at",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "course", "created_by", "created_at"];

    fn represent(&self, ctx: &SerializeContext<'_>) -> AnnouncementResponse {
        AnnouncementResponse {
            id: self.id,
            course: embed_course(self.course_id, ctx),
            created_by: embed_user(self.created_by_id, ctx),
            title: self.title.clone(),
            content: self.content.clone(),
            is_pinned: self.is_pinned,
            created_at: self.created_at,
        }
    }
}

impl Represent for Message {
    type Output = MessageResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "instructor",
        "sender",
        "subject",
        "body",
        "is_read",
        "created_at",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "instructor", "sender", "created_at"];

    fn represent(&self, ctx: &SerializeContext<'_>) -> MessageResponse {
        MessageResponse {
            id: self.id,
            instructor: embed_user(self.instructor_id, ctx),
            sender: embed_user(self.sender_id, ctx),
            subject: self.subject.clone(),
            body: self.body.clone(),
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

impl Represent for Notification {
    type Output = NotificationResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "message",
        "notification_type",
        "is_read",
        "link",
        "created_at",
        "user",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "created_at"];

    // `link` is an in-app route and stays as stored.
    fn represent(&self, _ctx: &SerializeContext<'_>) -> NotificationResponse {
        NotificationResponse {
            id: self.id,
            title: self.title.clone(),
            message: self.message.clone(),
            notification_type: self.notification_type,
            is_read: self.is_read,
            link: self.link.clone(),
            created_at: self.created_at,
            user: self.user_id,
        }
    }
}

impl Represent for DiscussionThread {
    type Output = DiscussionThreadResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "course",
        "created_by",
        "posts_count",
        "title",
        "content",
        "is_pinned",
        "is_closed",
        "created_at",
        "updated_at",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &[
        "id",
        "course",
        "created_by",
        "posts_count",
        "created_at",
        "updated_at",
    ];

    fn represent(&self, ctx: &SerializeContext<'_>) -> DiscussionThreadResponse {
        DiscussionThreadResponse {
            id: self.id,
            course: embed_course(self.course_id, ctx),
            created_by: embed_user(self.created_by_id, ctx),
            posts_count: ctx.store().posts_of_thread(self.id).len(),
            title: self.title.clone(),
            content: self.content.clone(),
            is_pinned: self.is_pinned,
            is_closed: self.is_closed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Represent for DiscussionPost {
    type Output = DiscussionPostResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "thread",
        "author",
        "likes_count",
        "content",
        "created_at",
        "updated_at",
        "parent",
        "likes",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &[
        "id",
        "thread",
        "author",
        "likes_count",
        "created_at",
        "updated_at",
    ];

    fn represent(&self, ctx: &SerializeContext<'_>) -> DiscussionPostResponse {
        let likes = ctx.store().likes_of_post(self.id);

        DiscussionPostResponse {
            id: self.id,
            thread: embed_thread(self.thread_id, ctx),
            author: embed_user(self.author_id, ctx),
            likes_count: likes.len(),
            content: self.content.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            parent: self.parent_id,
            likes,
        }
    }
}

fn embed_thread(
    id: DiscussionThreadId,
    ctx: &SerializeContext<'_>,
) -> Option<DiscussionThreadResponse> {
    ctx.store()
        .discussion_thread(id)
        .map(|thread| thread.represent(ctx))
}
