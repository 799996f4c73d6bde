mod common;

use common::*;
use coursehub::{Represent, SerializeContext, represent_many, to_json};
use coursehub_config::MediaConfig;
use coursehub_core::RequestContext;
use coursehub_models::{
    Certificate, CertificateId, Course, Enrollment, EnrollmentId, Lesson, LessonId,
    LessonProgress, LessonProgressId, Module, Progress, ProgressId, User,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_enrollment_embeds_course_and_student() {
    let store = seeded_store();
    let ctx = SerializeContext::new(&store);

    let body = to_json(&enrollment(EnrollmentId::new(1), STUDENT, COURSE), &ctx).unwrap();

    assert_eq!(keys(&body), Enrollment::FIELDS);
    assert_eq!(keys(&body["course"]), Course::FIELDS);
    assert_eq!(keys(&body["course"]["instructor"]), User::FIELDS);
    assert_eq!(keys(&body["student"]), User::FIELDS);
    assert_eq!(body["progress"], json!(50.0));
    assert_eq!(body["completed_at"], json!(null));
}

#[test]
fn test_module_counts_lessons_and_references_course_by_id() {
    let mut store = seeded_store();
    let ctx = SerializeContext::new(&store);

    let body = to_json(&module(), &ctx).unwrap();
    assert_eq!(keys(&body), Module::FIELDS);
    assert_eq!(body["lessons_count"], json!(2));
    assert_eq!(body["course"], json!(1));

    store.insert(lesson(LessonId::new(3), 3));
    let body = to_json(&module(), &SerializeContext::new(&store)).unwrap();
    assert_eq!(body["lessons_count"], json!(3));
}

#[test]
fn test_lesson_urls() {
    let store = seeded_store();
    let request = RequestContext::parse("https://learn.example.com/api/lessons/1/").unwrap();
    let ctx = SerializeContext::new(&store)
        .with_request(&request)
        .with_media(MediaConfig::default().with_media_url("/media/"));

    let body = to_json(&lesson(LESSON, 1), &ctx).unwrap();

    assert_eq!(keys(&body), Lesson::FIELDS);
    assert_eq!(
        body["video_url"],
        json!("https://learn.example.com/api/lessons/1/videos/borrowing.mp4")
    );
    assert_eq!(
        body["file_attachment"],
        json!("https://learn.example.com/media/attachments/slides.pdf")
    );
    assert_eq!(keys(&body["module"]), Module::FIELDS);
}

#[test]
fn test_lesson_absolute_video_kept_and_missing_attachment_null() {
    let store = seeded_store();
    let request = RequestContext::parse("https://learn.example.com/").unwrap();
    let ctx = SerializeContext::new(&store).with_request(&request);

    let mut record = lesson(LESSON, 1);
    record.video_url = Some("http://cdn.example.com/v.mp4".to_string());
    record.file_attachment = None;

    let body = to_json(&record, &ctx).unwrap();
    assert_eq!(body["video_url"], json!("http://cdn.example.com/v.mp4"));
    assert_eq!(body["file_attachment"], json!(null));
}

#[test]
fn test_represent_many_preserves_input_order() {
    let store = seeded_store();
    let ctx = SerializeContext::new(&store);
    let lessons = vec![lesson(LessonId::new(2), 2), lesson(LESSON, 1)];

    let rendered = represent_many(&lessons, &ctx);
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].id, LessonId::new(2));
    assert_eq!(rendered[1].order, 1);
}

#[test]
fn test_lesson_progress_embeds_lesson_with_module() {
    let store = seeded_store();
    let ctx = SerializeContext::new(&store);
    let progress = LessonProgress {
        id: LessonProgressId::new(1),
        student_id: STUDENT,
        lesson_id: LESSON,
        is_completed: true,
        completed_at: Some(at(-1)),
        last_accessed: at(-1),
        time_spent: 840,
    };

    let body = to_json(&progress, &ctx).unwrap();
    assert_eq!(keys(&body), LessonProgress::FIELDS);
    assert_eq!(body["lesson"]["module"]["id"], json!(1));
    assert_eq!(body["student"], json!(2));
}

#[test]
fn test_progress_lists_completed_lessons() {
    let mut store = seeded_store();
    let progress = Progress {
        id: ProgressId::new(1),
        student_id: STUDENT,
        course_id: COURSE,
        progress_percentage: 50.0,
        last_accessed: at(-1),
    };
    store.insert(progress.clone());
    store.complete_lesson(progress.id, LessonId::new(2));
    store.complete_lesson(progress.id, LESSON);

    let ctx = SerializeContext::new(&store);
    let body = to_json(&progress, &ctx).unwrap();

    assert_eq!(keys(&body), Progress::FIELDS);
    assert_eq!(body["completed_lessons"], json!([1, 2]));
    assert_eq!(body["course"]["id"], json!(1));
}

#[test]
fn test_certificate() {
    let store = seeded_store();
    let ctx = SerializeContext::new(&store);
    let certificate = Certificate {
        id: CertificateId::new(1),
        student_id: STUDENT,
        course_id: COURSE,
        certificate_id: certificate_code(),
        issued_at: at(30),
        file_url: None,
    };

    let body = to_json(&certificate, &ctx).unwrap();
    assert_eq!(keys(&body), Certificate::FIELDS);
    assert_eq!(Certificate::READ_ONLY_FIELDS, Certificate::FIELDS);
    assert_eq!(
        body["certificate_id"],
        json!("6f1c2a3b-4d5e-4f60-8a9b-0c1d2e3f4a5b")
    );
    assert_eq!(body["issued_at"], json!("2024-03-31T09:00:00Z"));
    assert_eq!(body["student"]["username"], "student");
}
