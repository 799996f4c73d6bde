pub mod mapper;
pub mod model;

pub use mapper::represent_user;
pub use model::{UserProfile, UserRepresentation, UserSummary, UserView};
