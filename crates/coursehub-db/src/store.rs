use coursehub_models::{
    Assignment, AssignmentSubmission, Badge, Category, Course, DiscussionPost, DiscussionThread,
    Enrollment, Lesson, Module, Question, QuestionOption, Quiz, User,
    ids::{
        AssignmentId, BadgeId, CategoryId, CourseId, DiscussionPostId, DiscussionThreadId,
        LearningPathId, LessonId, ModuleId, ProgressId, QuestionId, QuizId, QuizResponseId, UserId,
    },
};

/// Read access to persisted records.
///
/// Lookups return `None` for a missing record and relation accessors return
/// an empty list when nothing is related; neither case is an error. Children
/// with an `order` attribute come back ordered by `(order, id)`, everything
/// else by `id`.
pub trait RecordStore: Send + Sync {
    fn user(&self, id: UserId) -> Option<User>;

    /// Exact, case-sensitive username match.
    fn user_by_username(&self, username: &str) -> Option<User>;

    fn category(&self, id: CategoryId) -> Option<Category>;
    fn course(&self, id: CourseId) -> Option<Course>;
    fn module(&self, id: ModuleId) -> Option<Module>;
    fn lesson(&self, id: LessonId) -> Option<Lesson>;
    fn quiz(&self, id: QuizId) -> Option<Quiz>;
    fn question(&self, id: QuestionId) -> Option<Question>;
    fn assignment(&self, id: AssignmentId) -> Option<Assignment>;
    fn discussion_thread(&self, id: DiscussionThreadId) -> Option<DiscussionThread>;
    fn badge(&self, id: BadgeId) -> Option<Badge>;

    fn enrollments_of_course(&self, course: CourseId) -> Vec<Enrollment>;
    fn lessons_of_module(&self, module: ModuleId) -> Vec<Lesson>;
    fn questions_of_quiz(&self, quiz: QuizId) -> Vec<Question>;
    fn options_of_question(&self, question: QuestionId) -> Vec<QuestionOption>;
    fn selected_options_of_response(&self, response: QuizResponseId) -> Vec<QuestionOption>;
    fn submissions_of_assignment(&self, assignment: AssignmentId) -> Vec<AssignmentSubmission>;
    fn posts_of_thread(&self, thread: DiscussionThreadId) -> Vec<DiscussionPost>;

    /// Users who liked the post.
    fn likes_of_post(&self, post: DiscussionPostId) -> Vec<UserId>;

    fn completed_lessons_of_progress(&self, progress: ProgressId) -> Vec<LessonId>;
    fn courses_of_learning_path(&self, path: LearningPathId) -> Vec<Course>;
}
