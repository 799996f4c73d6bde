pub mod mapper;
pub mod model;

pub use model::{CourseRatingResponse, PaymentResponse, WishlistResponse};
