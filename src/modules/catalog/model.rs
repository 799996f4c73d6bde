use chrono::{DateTime, Utc};
use coursehub_core::serde::{serialize_decimal, serialize_optional_decimal};
use coursehub_models::{
    CourseStatus, Difficulty,
    ids::{CategoryId, CourseId, LearningPathId},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::users::UserProfile;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: CourseId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub short_description: Option<String>,
    pub thumbnail: Option<String>,
    pub instructor: Option<UserProfile>,
    pub category: Option<CategoryResponse>,
    pub difficulty: Difficulty,
    pub status: CourseStatus,
    pub language: String,
    pub duration: i32,
    pub total_lessons: i32,
    pub rating: f64,
    pub total_ratings: i32,
    pub enrolled_students: i32,
    /// Number of enrollment records, counted at read time.
    pub enrolled_students_count: usize,
    pub average_rating: f64,
    #[serde(serialize_with = "serialize_decimal")]
    #[schema(value_type = String, example = "49.90")]
    pub price: f64,
    #[serde(serialize_with = "serialize_optional_decimal")]
    #[schema(value_type = Option<String>, example = "99.00")]
    pub original_price: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_featured: bool,
    pub tags: Vec<String>,
    pub requirements: Vec<String>,
    pub learning_outcomes: Vec<String>,
    pub video_intro: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LearningPathResponse {
    pub id: LearningPathId,
    pub courses: Vec<CourseResponse>,
    pub created_by: Option<UserProfile>,
    pub title: String,
    pub description: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}
