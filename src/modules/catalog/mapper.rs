use coursehub_models::{
    Category, Course, LearningPath,
    ids::{CategoryId, CourseId},
};

use super::model::{CategoryResponse, CourseResponse, LearningPathResponse};
use crate::context::SerializeContext;
use crate::modules::users::mapper::embed_user;
use crate::represent::{Represent, represent_many};

/// Stored mean rating to one decimal place, or 0.0 for an unrated course.
///
/// Rounds the exact stored value with ties to even, so 4.25 gives 4.2 and
/// 4.35 (stored as 4.34999...) gives 4.3.
pub fn average_rating(rating: f64, total_ratings: i32) -> f64 {
    if total_ratings <= 0 {
        return 0.0;
    }
    format!("{:.1}", rating).parse().unwrap_or(0.0)
}

impl Represent for Category {
    type Output = CategoryResponse;

    const FIELDS: &'static [&'static str] =
        &["id", "name", "slug", "description", "icon", "created_at"];
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "created_at"];

    fn represent(&self, _ctx: &SerializeContext<'_>) -> CategoryResponse {
        CategoryResponse {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            created_at: self.created_at,
        }
    }
}

impl Represent for Course {
    type Output = CourseResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "slug",
        "description",
        "short_description",
        "thumbnail",
        "instructor",
        "category",
        "difficulty",
        "status",
        "language",
        "duration",
        "total_lessons",
        "rating",
        "total_ratings",
        "enrolled_students",
        "enrolled_students_count",
        "average_rating",
        "price",
        "original_price",
        "created_at",
        "updated_at",
        "is_featured",
        "tags",
        "requirements",
        "learning_outcomes",
        "video_intro",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &[
        "id",
        "thumbnail",
        "instructor",
        "category",
        "created_at",
        "updated_at",
        "enrolled_students_count",
        "average_rating",
        "video_intro",
    ];

    fn represent(&self, ctx: &SerializeContext<'_>) -> CourseResponse {
        let store = ctx.store();

        CourseResponse {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            short_description: self.short_description.clone(),
            thumbnail: ctx.file_url(self.thumbnail.as_deref()),
            instructor: embed_user(self.instructor_id, ctx),
            category: embed_category(self.category_id, ctx),
            difficulty: self.difficulty,
            status: self.status,
            language: self.language.clone(),
            duration: self.duration,
            total_lessons: self.total_lessons,
            rating: self.rating,
            total_ratings: self.total_ratings,
            enrolled_students: self.enrolled_students,
            enrolled_students_count: store.enrollments_of_course(self.id).len(),
            average_rating: average_rating(self.rating, self.total_ratings),
            price: self.price,
            original_price: self.original_price,
            created_at: self.created_at,
            updated_at: self.updated_at,
            is_featured: self.is_featured,
            tags: self.tags.clone(),
            requirements: self.requirements.clone(),
            learning_outcomes: self.learning_outcomes.clone(),
            video_intro: ctx.link_url(self.video_intro.as_deref()),
        }
    }
}

impl Represent for LearningPath {
    type Output = LearningPathResponse;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "courses",
        "created_by",
        "title",
        "description",
        "is_published",
        "created_at",
    ];
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "courses", "created_by", "created_at"];

    fn represent(&self, ctx: &SerializeContext<'_>) -> LearningPathResponse {
        let courses = ctx.store().courses_of_learning_path(self.id);

        LearningPathResponse {
            id: self.id,
            courses: represent_many(&courses, ctx),
            created_by: embed_user(self.created_by_id, ctx),
            title: self.title.clone(),
            description: self.description.clone(),
            is_published: self.is_published,
            created_at: self.created_at,
        }
    }
}

fn embed_category(id: Option<CategoryId>, ctx: &SerializeContext<'_>) -> Option<CategoryResponse> {
    id.and_then(|id| ctx.store().category(id))
        .map(|category| category.represent(ctx))
}

pub(crate) fn embed_course(id: CourseId, ctx: &SerializeContext<'_>) -> Option<CourseResponse> {
    ctx.store().course(id).map(|course| course.represent(ctx))
}
