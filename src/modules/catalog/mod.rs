pub mod mapper;
pub mod model;

pub use mapper::average_rating;
pub use model::{CategoryResponse, CourseResponse, LearningPathResponse};
