//! # CourseHub Models
//!
//! Persisted records, value types and inbound DTOs for CourseHub.
//!
//! Records mirror storage rows: foreign keys are plain `*_id` fields and
//! many-to-many relations are not stored on the record at all. None of them
//! implement `Serialize`; outbound shapes are built by the representation
//! layer so that only allow-listed attributes ever leave the system.
//!
//! # Modules
//!
//! - [`ids`]: Primary key newtypes
//! - [`choices`]: Enumerated attribute values
//! - [`value_types`]: Validated email and phone number types
//! - [`users`]: User accounts and profile updates
//! - [`auth`]: Registration and login requests
//! - [`catalog`]: Categories, courses and learning paths
//! - [`learning`]: Enrollments, modules, lessons and progress
//! - [`assessments`]: Quizzes and assignments
//! - [`community`]: Announcements, messages, notifications and discussions
//! - [`achievements`]: Badges
//! - [`commerce`]: Payments, ratings and wishlists
//!
//! # Example
//!
//! ```ignore
//! use coursehub_models::{RegisterRequest, Role};
//! use validator::Validate;
//!
//! let request: RegisterRequest = serde_json::from_str(body)?;
//! request.validate()?;
//! let new_user = request.into_new_user();
//! assert_eq!(new_user.role, Role::Student);
//! ```

pub mod achievements;
pub mod assessments;
pub mod auth;
pub mod catalog;
pub mod choices;
pub mod commerce;
pub mod community;
pub mod ids;
pub mod learning;
pub mod users;
pub mod value_types;

pub use achievements::{Badge, UserBadge};
pub use assessments::{
    Assignment, AssignmentSubmission, Question, QuestionOption, Quiz, QuizAttempt, QuizResponse,
};
pub use auth::{LoginRequest, RegisterRequest, RegistrationResponse};
pub use catalog::{Category, Course, LearningPath};
pub use choices::{
    BadgeType, CourseStatus, Difficulty, InvalidChoice, LessonType, NotificationType,
    PaymentStatus, QuestionType, Role, SubmissionStatus,
};
pub use commerce::{CourseRating, Payment, Wishlist};
pub use community::{Announcement, DiscussionPost, DiscussionThread, Message, Notification};
pub use ids::*;
pub use learning::{Certificate, Enrollment, Lesson, LessonProgress, Module, Progress};
pub use users::{NewUser, USERNAME_MAX_LENGTH, UpdateProfileDto, User};
pub use value_types::{Email, PhoneNumber, ValueTypeError};
