pub mod mapper;
pub mod model;

pub use model::{
    AnnouncementResponse, DiscussionPostResponse, DiscussionThreadResponse, MessageResponse,
    NotificationResponse,
};
