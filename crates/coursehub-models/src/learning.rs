//! Course content and learner progress records.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::choices::LessonType;
use crate::ids::{
    CertificateId, CourseId, EnrollmentId, LessonId, LessonProgressId, ModuleId, ProgressId,
    UserId,
};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub student_id: UserId,
    pub course_id: CourseId,
    pub enrolled_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Completion percentage, 0 to 100.
    pub progress: f64,
    pub is_active: bool,
    pub last_accessed: Option<DateTime<Utc>>,
}

/// A chapter of a course grouping its lessons.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Module {
    pub id: ModuleId,
    pub course_id: CourseId,
    pub title: String,
    pub description: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Lesson {
    pub id: LessonId,
    pub module_id: ModuleId,
    pub title: String,
    pub content: Option<String>,
    pub lesson_type: LessonType,
    /// Link to the lesson video, absolute or site-relative.
    pub video_url: Option<String>,
    /// Storage name of the uploaded attachment.
    pub file_attachment: Option<String>,
    /// Duration in minutes.
    pub duration: i32,
    pub order: i32,
    pub is_preview: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct LessonProgress {
    pub id: LessonProgressId,
    pub student_id: UserId,
    pub lesson_id: LessonId,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub last_accessed: DateTime<Utc>,
    /// Seconds spent on the lesson.
    pub time_spent: i32,
}

/// Per-course progress summary. Completed lessons are reached through the
/// store.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Progress {
    pub id: ProgressId,
    pub student_id: UserId,
    pub course_id: CourseId,
    pub progress_percentage: f64,
    pub last_accessed: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Certificate {
    pub id: CertificateId,
    pub student_id: UserId,
    pub course_id: CourseId,
    /// Public verification code printed on the certificate.
    pub certificate_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub file_url: Option<String>,
}
