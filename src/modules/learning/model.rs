use chrono::{DateTime, Utc};
use coursehub_models::{
    LessonType,
    ids::{
        CertificateId, CourseId, EnrollmentId, LessonId, LessonProgressId, ModuleId, ProgressId,
        UserId,
    },
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::catalog::CourseResponse;
use crate::modules::users::UserProfile;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EnrollmentResponse {
    pub id: EnrollmentId,
    pub course: Option<CourseResponse>,
    pub student: Option<UserProfile>,
    pub enrolled_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub progress: f64,
    pub is_active: bool,
    pub last_accessed: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ModuleResponse {
    pub id: ModuleId,
    pub lessons_count: usize,
    pub title: String,
    pub description: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub course: CourseId,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LessonResponse {
    pub id: LessonId,
    pub module: Option<ModuleResponse>,
    pub video_url: Option<String>,
    pub file_attachment: Option<String>,
    pub title: String,
    pub content: Option<String>,
    pub lesson_type: LessonType,
    pub duration: i32,
    pub order: i32,
    pub is_preview: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LessonProgressResponse {
    pub id: LessonProgressId,
    pub lesson: Option<LessonResponse>,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub last_accessed: DateTime<Utc>,
    pub time_spent: i32,
    pub student: UserId,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProgressResponse {
    pub id: ProgressId,
    pub course: Option<CourseResponse>,
    pub progress_percentage: f64,
    pub last_accessed: DateTime<Utc>,
    pub student: UserId,
    pub completed_lessons: Vec<LessonId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CertificateResponse {
    pub id: CertificateId,
    pub student: Option<UserProfile>,
    pub course: Option<CourseResponse>,
    pub certificate_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub file_url: Option<String>,
}
