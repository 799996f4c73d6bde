#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use coursehub_db::MemoryStore;
use coursehub_models::*;
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Paragraph, Sentence};
use serde_json::Value;
use uuid::Uuid;

pub const INSTRUCTOR: UserId = UserId::new(1);
pub const STUDENT: UserId = UserId::new(2);
pub const GRADER: UserId = UserId::new(3);

pub const CATEGORY: CategoryId = CategoryId::new(1);
pub const COURSE: CourseId = CourseId::new(1);
pub const MODULE: ModuleId = ModuleId::new(1);
pub const LESSON: LessonId = LessonId::new(1);
pub const QUIZ: QuizId = QuizId::new(1);
pub const ASSIGNMENT: AssignmentId = AssignmentId::new(1);
pub const THREAD: DiscussionThreadId = DiscussionThreadId::new(1);
pub const BADGE: BadgeId = BadgeId::new(1);

/// Fixed point in time, `days` after 2024-03-01 09:00 UTC.
pub fn at(days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() + chrono::Duration::days(days)
}

/// Object keys in output order.
pub fn keys(value: &Value) -> Vec<String> {
    value
        .as_object()
        .expect("representation is an object")
        .keys()
        .cloned()
        .collect()
}

pub fn sentence() -> String {
    Sentence(3..8).fake()
}

pub fn user(id: UserId, username: &str, role: Role) -> User {
    let email: String = SafeEmail().fake();
    User {
        id,
        username: username.to_string(),
        email: Email::new_unchecked(email),
        password: String::new(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        role,
        points: 150,
        level: 2,
        bio: Some(sentence()),
        avatar: Some("avatars/user.png".to_string()),
        date_of_birth: None,
        phone: Some("+1 555 123 4567".to_string()),
        address: None,
        is_active: true,
        date_joined: at(-30),
    }
}

pub fn category() -> Category {
    Category {
        id: CATEGORY,
        name: "Programming".to_string(),
        slug: "programming".to_string(),
        description: Some(sentence()),
        icon: Some("code".to_string()),
        created_at: at(-60),
    }
}

pub fn course(id: CourseId) -> Course {
    Course {
        id,
        title: "Practical Rust".to_string(),
        slug: format!("practical-rust-{}", id),
        description: Paragraph(2..4).fake(),
        short_description: Some(sentence()),
        thumbnail: Some("thumbnails/rust.png".to_string()),
        instructor_id: INSTRUCTOR,
        category_id: Some(CATEGORY),
        difficulty: Difficulty::Intermediate,
        status: CourseStatus::Published,
        language: "English".to_string(),
        duration: 12,
        total_lessons: 2,
        rating: 4.567,
        total_ratings: 3,
        enrolled_students: 1,
        price: 49.9,
        original_price: Some(99.0),
        created_at: at(-20),
        updated_at: at(-2),
        is_featured: true,
        tags: vec!["rust".to_string(), "systems".to_string()],
        requirements: vec!["Basic programming".to_string()],
        learning_outcomes: vec!["Write safe code".to_string()],
        video_intro: Some("https://videos.example.com/intro.mp4".to_string()),
    }
}

pub fn enrollment(id: EnrollmentId, student: UserId, course: CourseId) -> Enrollment {
    Enrollment {
        id,
        student_id: student,
        course_id: course,
        enrolled_at: at(-10),
        completed_at: None,
        progress: 50.0,
        is_active: true,
        last_accessed: Some(at(-1)),
    }
}

pub fn module() -> Module {
    Module {
        id: MODULE,
        course_id: COURSE,
        title: "Ownership".to_string(),
        description: Some(sentence()),
        order: 1,
        created_at: at(-19),
    }
}

pub fn lesson(id: LessonId, order: i32) -> Lesson {
    Lesson {
        id,
        module_id: MODULE,
        title: format!("Lesson {}", id),
        content: Some(Paragraph(1..3).fake()),
        lesson_type: LessonType::Video,
        video_url: Some("videos/borrowing.mp4".to_string()),
        file_attachment: Some("attachments/slides.pdf".to_string()),
        duration: 15,
        order,
        is_preview: order == 1,
        created_at: at(-19),
        updated_at: at(-18),
    }
}

pub fn quiz() -> Quiz {
    Quiz {
        id: QUIZ,
        course_id: COURSE,
        lesson_id: Some(LESSON),
        title: "Ownership check".to_string(),
        description: None,
        time_limit: Some(10),
        passing_score: 70,
        max_attempts: 3,
        is_active: true,
        created_at: at(-15),
    }
}

pub fn question(id: QuestionId, order: i32) -> Question {
    Question {
        id,
        quiz_id: QUIZ,
        text: format!("{}?", sentence()),
        question_type: QuestionType::MultipleChoice,
        points: 5,
        order,
        explanation: None,
    }
}

pub fn option(id: QuestionOptionId, question: QuestionId, order: i32, is_correct: bool) -> QuestionOption {
    QuestionOption {
        id,
        question_id: question,
        text: sentence(),
        is_correct,
        order,
    }
}

pub fn assignment() -> Assignment {
    Assignment {
        id: ASSIGNMENT,
        course_id: COURSE,
        lesson_id: Some(LESSON),
        title: "Implement a linked list".to_string(),
        description: Paragraph(1..2).fake(),
        due_date: Some(at(7)),
        max_points: 100,
        created_at: at(-5),
        updated_at: at(-5),
    }
}

pub fn thread() -> DiscussionThread {
    DiscussionThread {
        id: THREAD,
        course_id: COURSE,
        created_by_id: STUDENT,
        title: "Lifetimes question".to_string(),
        content: Paragraph(1..2).fake(),
        is_pinned: false,
        is_closed: false,
        created_at: at(-3),
        updated_at: at(-3),
    }
}

pub fn badge() -> Badge {
    Badge {
        id: BADGE,
        name: "First Steps".to_string(),
        description: sentence(),
        icon: Some("badges/first.png".to_string()),
        badge_type: BadgeType::Milestone,
        points_required: 100,
        created_at: at(-90),
    }
}

/// A store holding one course with its instructor, category, one student
/// enrollment, one module with two lessons, a quiz, an assignment and a
/// discussion thread.
pub fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();

    store.insert(user(INSTRUCTOR, "instructor", Role::Instructor));
    store.insert(user(STUDENT, "student", Role::Student));
    store.insert(user(GRADER, "grader", Role::Instructor));
    store.insert(category());
    store.insert(course(COURSE));
    store.insert(enrollment(EnrollmentId::new(1), STUDENT, COURSE));
    store.insert(module());
    store.insert(lesson(LESSON, 1));
    store.insert(lesson(LessonId::new(2), 2));
    store.insert(quiz());
    store.insert(question(QuestionId::new(1), 1));
    store.insert(question(QuestionId::new(2), 2));
    store.insert(option(QuestionOptionId::new(1), QuestionId::new(1), 1, true));
    store.insert(option(QuestionOptionId::new(2), QuestionId::new(1), 2, false));
    store.insert(assignment());
    store.insert(thread());
    store.insert(badge());

    store
}

pub fn certificate_code() -> Uuid {
    Uuid::from_u128(0x6f1c_2a3b_4d5e_4f60_8a9b_0c1d_2e3f_4a5b)
}
