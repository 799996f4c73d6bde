pub mod mapper;
pub mod model;

pub use model::{BadgeResponse, UserBadgeResponse};
