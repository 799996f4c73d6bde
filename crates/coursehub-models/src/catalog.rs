//! Course catalog records: categories, courses and learning paths.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::choices::{CourseStatus, Difficulty};
use crate::ids::{CategoryId, CourseId, LearningPathId, UserId};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A course as stored.
///
/// `rating` is the stored mean of all ratings and `enrolled_students` a
/// denormalised counter; neither is trusted for output on its own, see the
/// derived `average_rating` and `enrolled_students_count` fields.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub short_description: Option<String>,
    /// Storage name of the uploaded thumbnail image.
    pub thumbnail: Option<String>,
    pub instructor_id: UserId,
    pub category_id: Option<CategoryId>,
    pub difficulty: Difficulty,
    pub status: CourseStatus,
    pub language: String,
    /// Total duration in hours.
    pub duration: i32,
    pub total_lessons: i32,
    pub rating: f64,
    pub total_ratings: i32,
    pub enrolled_students: i32,
    pub price: f64,
    pub original_price: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_featured: bool,
    pub tags: Vec<String>,
    pub requirements: Vec<String>,
    pub learning_outcomes: Vec<String>,
    /// Link to the introduction video, absolute or site-relative.
    pub video_intro: Option<String>,
}

/// An ordered selection of courses. Member courses are reached through
/// the store, not stored on the record.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct LearningPath {
    pub id: LearningPathId,
    pub title: String,
    pub description: String,
    pub created_by_id: UserId,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}
