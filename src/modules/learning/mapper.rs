use coursehub_models::{
    Certificate, Enrollment, Lesson, LessonProgress, Module, Progress,
    ids::{LessonId, ModuleId},
};

use super::model::{
    CertificateResponse, EnrollmentResponse, LessonProgressResponse, LessonResponse,
    ModuleResponse, ProgressResponse,
};
use crate::context::SerializeContext;
use crate::modules::catalog::mapper::embed_course;
use crate::modules::users::mapper::embed_user;
use crate::represent::Represent;

impl Represent for Enrollment {
    type Output = EnrollmentResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "course",
        "student",
        "enrolled_at",
        "completed_at",
        "progress",
        "is_active",
        "last_accessed",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &[
        "id",
        "course",
        "student",
        "enrolled_at",
        "completed_at",
        "last_accessed",
    ];

    fn represent(&self, ctx: &SerializeContext<'_>) -> EnrollmentResponse {
        EnrollmentResponse {
            id: self.id,
            course: embed_course(self.course_id, ctx),
            student: embed_user(self.student_id, ctx),
            enrolled_at: self.enrolled_at,
            completed_at: self.completed_at,
            progress: self.progress,
            is_active: self.is_active,
            last_accessed: self.last_accessed,
        }
    }
}

impl Represent for Module {
    type Output = ModuleResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "lessons_count",
        "title",
        "description",
        "order",
        "created_at",
        "course",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "lessons_count", "created_at"];

    fn represent(&self, ctx: &SerializeContext<'_>) -> ModuleResponse {
        ModuleResponse {
            id: self.id,
            lessons_count: ctx.store().lessons_of_module(self.id).len(),
            title: self.title.clone(),
            description: self.description.clone(),
            order: self.order,
            created_at: self.created_at,
            course: self.course_id,
        }
    }
}

impl Represent for Lesson {
    type Output = LessonResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "module",
        "video_url",
        "file_attachment",
        "title",
        "content",
        "lesson_type",
        "duration",
        "order",
        "is_preview",
        "created_at",
        "updated_at",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &[
        "id",
        "module",
        "video_url",
        "file_attachment",
        "created_at",
        "updated_at",
    ];

    fn represent(&self, ctx: &SerializeContext<'_>) -> LessonResponse {
        LessonResponse {
            id: self.id,
            module: embed_module(self.module_id, ctx),
            video_url: ctx.link_url(self.video_url.as_deref()),
            file_attachment: ctx.file_url(self.file_attachment.as_deref()),
            title: self.title.clone(),
            content: self.content.clone(),
            lesson_type: self.lesson_type,
            duration: self.duration,
            order: self.order,
            is_preview: self.is_preview,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Represent for LessonProgress {
    type Output = LessonProgressResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "lesson",
        "is_completed",
        "completed_at",
        "last_accessed",
        "time_spent",
        "student",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] =
        &["id", "lesson", "completed_at", "last_accessed"];

    fn represent(&self, ctx: &SerializeContext<'_>) -> LessonProgressResponse {
        LessonProgressResponse {
            id: self.id,
            lesson: embed_lesson(Some(self.lesson_id), ctx),
            is_completed: self.is_completed,
            completed_at: self.completed_at,
            last_accessed: self.last_accessed,
            time_spent: self.time_spent,
            student: self.student_id,
        }
    }
}

impl Represent for Progress {
    type Output = ProgressResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "course",
        "progress_percentage",
        "last_accessed",
        "student",
        "completed_lessons",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "course", "last_accessed"];

    fn represent(&self, ctx: &SerializeContext<'_>) -> ProgressResponse {
        ProgressResponse {
            id: self.id,
            course: embed_course(self.course_id, ctx),
            progress_percentage: self.progress_percentage,
            last_accessed: self.last_accessed,
            student: self.student_id,
            completed_lessons: ctx.store().completed_lessons_of_progress(self.id),
        }
    }
}

impl Represent for Certificate {
    type Output = CertificateResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "student",
        "course",
        "certificate_id",
        "issued_at",
        "file_url",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = Self::FIELDS;

    fn represent(&self, ctx: &SerializeContext<'_>) -> CertificateResponse {
        CertificateResponse {
            id: self.id,
            student: embed_user(self.student_id, ctx),
            course: embed_course(self.course_id, ctx),
            certificate_id: self.certificate_id,
            issued_at: self.issued_at,
            file_url: self.file_url.clone(),
        }
    }
}

fn embed_module(id: ModuleId, ctx: &SerializeContext<'_>) -> Option<ModuleResponse> {
    ctx.store().module(id).map(|module| module.represent(ctx))
}

pub(crate) fn embed_lesson(id: Option<LessonId>, ctx: &SerializeContext<'_>) -> Option<LessonResponse> {
    id.and_then(|id| ctx.store().lesson(id))
        .map(|lesson| lesson.represent(ctx))
}
