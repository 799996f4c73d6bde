//! Quiz and assignment records.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::choices::{QuestionType, SubmissionStatus};
use crate::ids::{
    AssignmentId, AssignmentSubmissionId, CourseId, LessonId, QuestionId, QuestionOptionId,
    QuizAttemptId, QuizId, QuizResponseId, UserId,
};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Quiz {
    pub id: QuizId,
    pub course_id: CourseId,
    pub lesson_id: Option<LessonId>,
    pub title: String,
    pub description: Option<String>,
    /// Time limit in minutes, `None` for untimed quizzes.
    pub time_limit: Option<i32>,
    /// Minimum score, in percent, needed to pass.
    pub passing_score: i32,
    pub max_attempts: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Question {
    pub id: QuestionId,
    pub quiz_id: QuizId,
    pub text: String,
    pub question_type: QuestionType,
    pub points: i32,
    pub order: i32,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct QuestionOption {
    pub id: QuestionOptionId,
    pub question_id: QuestionId,
    pub text: String,
    pub is_correct: bool,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct QuizAttempt {
    pub id: QuizAttemptId,
    pub student_id: UserId,
    pub quiz_id: QuizId,
    pub score: Option<f64>,
    pub passed: bool,
    pub attempt_number: i32,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Answer to one question within an attempt. Selected options are reached
/// through the store.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct QuizResponse {
    pub id: QuizResponseId,
    pub attempt_id: QuizAttemptId,
    pub question_id: QuestionId,
    pub text_answer: Option<String>,
    pub is_correct: bool,
    pub points_earned: f64,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Assignment {
    pub id: AssignmentId,
    pub course_id: CourseId,
    pub lesson_id: Option<LessonId>,
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub max_points: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AssignmentSubmission {
    pub id: AssignmentSubmissionId,
    pub assignment_id: AssignmentId,
    pub student_id: UserId,
    pub content: Option<String>,
    /// Storage name of the submitted file.
    pub file: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub grade: Option<f64>,
    pub feedback: Option<String>,
    pub status: SubmissionStatus,
    pub graded_by_id: Option<UserId>,
    pub graded_at: Option<DateTime<Utc>>,
}
