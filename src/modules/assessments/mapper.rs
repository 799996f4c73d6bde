use coursehub_models::{
    Assignment, AssignmentSubmission, Question, QuestionOption, Quiz, QuizAttempt, QuizResponse,
    ids::{AssignmentId, QuestionId, QuizId},
};

use super::model::{
    AssignmentResponse, AssignmentSubmissionResponse, QuestionOptionResponse, QuestionResponse,
    QuizAttemptResponse, QuizDetail, QuizResponseDetail,
};
use crate::context::SerializeContext;
use crate::modules::catalog::mapper::embed_course;
use crate::modules::learning::mapper::embed_lesson;
use crate::modules::users::mapper::{embed_optional_user, embed_user};
use crate::represent::{Represent, represent_many};

impl Represent for QuestionOption {
    type Output = QuestionOptionResponse;

    const FIELDS: &'static [&'static str] = &["id", "text", "is_correct", "order", "question"];
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id"];

    fn represent(&self, _ctx: &SerializeContext<'_>) -> QuestionOptionResponse {
        QuestionOptionResponse {
            id: self.id,
            text: self.text.clone(),
            is_correct: self.is_correct,
            order: self.order,
            question: self.question_id,
        }
    }
}

impl Represent for Question {
    type Output = QuestionResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "options",
        "text",
        "question_type",
        "points",
        "order",
        "explanation",
        "quiz",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "options"];

    fn represent(&self, ctx: &SerializeContext<'_>) -> QuestionResponse {
        let options = ctx.store().options_of_question(self.id);

        QuestionResponse {
            id: self.id,
            options: represent_many(&options, ctx),
            text: self.text.clone(),
            question_type: self.question_type,
            points: self.points,
            order: self.order,
            explanation: self.explanation.clone(),
            quiz: self.quiz_id,
        }
    }
}

impl Represent for Quiz {
    type Output = QuizDetail;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "questions",
        "questions_count",
        "title",
        "description",
        "time_limit",
        "passing_score",
        "max_attempts",
        "is_active",
        "created_at",
        "course",
        "lesson",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] =
        &["id", "questions", "questions_count", "created_at"];

    fn represent(&self, ctx: &SerializeContext<'_>) -> QuizDetail {
        let questions = ctx.store().questions_of_quiz(self.id);

        QuizDetail {
            id: self.id,
            questions_count: questions.len(),
            questions: represent_many(&questions, ctx),
            title: self.title.clone(),
            description: self.description.clone(),
            time_limit: self.time_limit,
            passing_score: self.passing_score,
            max_attempts: self.max_attempts,
            is_active: self.is_active,
            created_at: self.created_at,
            course: self.course_id,
            lesson: self.lesson_id,
        }
    }
}

impl Represent for QuizAttempt {
    type Output = QuizAttemptResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "quiz",
        "score",
        "passed",
        "attempt_number",
        "started_at",
        "completed_at",
        "student",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "quiz", "started_at", "completed_at"];

    fn represent(&self, ctx: &SerializeContext<'_>) -> QuizAttemptResponse {
        QuizAttemptResponse {
            id: self.id,
            quiz: embed_quiz(self.quiz_id, ctx),
            score: self.score,
            passed: self.passed,
            attempt_number: self.attempt_number,
            started_at: self.started_at,
            completed_at: self.completed_at,
            student: self.student_id,
        }
    }
}

impl Represent for QuizResponse {
    type Output = QuizResponseDetail;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "question",
        "selected_options",
        "text_answer",
        "is_correct",
        "points_earned",
        "attempt",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "question", "selected_options"];

    fn represent(&self, ctx: &SerializeContext<'_>) -> QuizResponseDetail {
        let selected = ctx.store().selected_options_of_response(self.id);

        QuizResponseDetail {
            id: self.id,
            question: embed_question(self.question_id, ctx),
            selected_options: represent_many(&selected, ctx),
            text_answer: self.text_answer.clone(),
            is_correct: self.is_correct,
            points_earned: self.points_earned,
            attempt: self.attempt_id,
        }
    }
}

impl Represent for Assignment {
    type Output = AssignmentResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "course",
        "lesson",
        "submissions_count",
        "title",
        "description",
        "due_date",
        "max_points",
        "created_at",
        "updated_at",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &[
        "id",
        "course",
        "lesson",
        "submissions_count",
        "created_at",
        "updated_at",
    ];

    fn represent(&self, ctx: &SerializeContext<'_>) -> AssignmentResponse {
        AssignmentResponse {
            id: self.id,
            course: embed_course(self.course_id, ctx),
            lesson: embed_lesson(self.lesson_id, ctx),
            submissions_count: ctx.store().submissions_of_assignment(self.id).len(),
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date,
            max_points: self.max_points,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Represent for AssignmentSubmission {
    type Output = AssignmentSubmissionResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "assignment",
        "student",
        "graded_by",
        "content",
        "file",
        "submitted_at",
        "grade",
        "feedback",
        "status",
        "graded_at",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &[
        "id",
        "assignment",
        "student",
        "graded_by",
        "submitted_at",
        "graded_at",
    ];

    fn represent(&self, ctx: &SerializeContext<'_>) -> AssignmentSubmissionResponse {
        AssignmentSubmissionResponse {
            id: self.id,
            assignment: embed_assignment(self.assignment_id, ctx),
            student: embed_user(self.student_id, ctx),
            graded_by: embed_optional_user(self.graded_by_id, ctx),
            content: self.content.clone(),
            file: ctx.file_url(self.file.as_deref()),
            submitted_at: self.submitted_at,
            grade: self.grade,
            feedback: self.feedback.clone(),
            status: self.status,
            graded_at: self.graded_at,
        }
    }
}

fn embed_question(id: QuestionId, ctx: &SerializeContext<'_>) -> Option<QuestionResponse> {
    ctx.store().question(id).map(|question| question.represent(ctx))
}

fn embed_quiz(id: QuizId, ctx: &SerializeContext<'_>) -> Option<QuizDetail> {
    ctx.store().quiz(id).map(|quiz| quiz.represent(ctx))
}

fn embed_assignment(id: AssignmentId, ctx: &SerializeContext<'_>) -> Option<AssignmentResponse> {
    ctx.store()
        .assignment(id)
        .map(|assignment| assignment.represent(ctx))
}
