use chrono::{DateTime, Utc};
use coursehub_models::{
    QuestionType, SubmissionStatus,
    ids::{
        AssignmentId, AssignmentSubmissionId, CourseId, LessonId, QuestionId, QuestionOptionId,
        QuizAttemptId, QuizId, QuizResponseId, UserId,
    },
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::catalog::CourseResponse;
use crate::modules::learning::LessonResponse;
use crate::modules::users::UserProfile;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct QuestionOptionResponse {
    pub id: QuestionOptionId,
    pub text: String,
    pub is_correct: bool,
    pub order: i32,
    pub question: QuestionId,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct QuestionResponse {
    pub id: QuestionId,
    pub options: Vec<QuestionOptionResponse>,
    pub text: String,
    pub question_type: QuestionType,
    pub points: i32,
    pub order: i32,
    pub explanation: Option<String>,
    pub quiz: QuizId,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct QuizDetail {
    pub id: QuizId,
    pub questions: Vec<QuestionResponse>,
    pub questions_count: usize,
    pub title: String,
    pub description: Option<String>,
    pub time_limit: Option<i32>,
    pub passing_score: i32,
    pub max_attempts: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub course: CourseId,
    pub lesson: Option<LessonId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct QuizAttemptResponse {
    pub id: QuizAttemptId,
    pub quiz: Option<QuizDetail>,
    pub score: Option<f64>,
    pub passed: bool,
    pub attempt_number: i32,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub student: UserId,
}

/// Representation of a `QuizResponse` record: one answer within an attempt.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct QuizResponseDetail {
    pub id: QuizResponseId,
    pub question: Option<QuestionResponse>,
    pub selected_options: Vec<QuestionOptionResponse>,
    pub text_answer: Option<String>,
    pub is_correct: bool,
    pub points_earned: f64,
    pub attempt: QuizAttemptId,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AssignmentResponse {
    pub id: AssignmentId,
    pub course: Option<CourseResponse>,
    pub lesson: Option<LessonResponse>,
    pub submissions_count: usize,
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub max_points: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AssignmentSubmissionResponse {
    pub id: AssignmentSubmissionId,
    pub assignment: Option<AssignmentResponse>,
    pub student: Option<UserProfile>,
    pub graded_by: Option<UserProfile>,
    pub content: Option<String>,
    pub file: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub grade: Option<f64>,
    pub feedback: Option<String>,
    pub status: SubmissionStatus,
    pub graded_at: Option<DateTime<Utc>>,
}
