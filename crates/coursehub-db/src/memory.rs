//! In-memory [`RecordStore`] backed by ordered maps.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use coursehub_models::{
    Announcement, Assignment, AssignmentSubmission, Badge, Category, Certificate, Course,
    CourseRating, DiscussionPost, DiscussionThread, Enrollment, LearningPath, Lesson,
    LessonProgress, Message, Module, Notification, Payment, Progress, Question, QuestionOption,
    Quiz, QuizAttempt, QuizResponse, User, UserBadge, Wishlist, ids::*,
};
use tracing::trace;

use crate::store::RecordStore;

/// A record type held by [`MemoryStore`].
pub trait Stored: Clone + Sized {
    type Id: Ord + Copy + fmt::Debug;

    const TABLE: &'static str;

    fn id(&self) -> Self::Id;

    #[doc(hidden)]
    fn table(store: &MemoryStore) -> &BTreeMap<Self::Id, Self>;

    #[doc(hidden)]
    fn table_mut(store: &mut MemoryStore) -> &mut BTreeMap<Self::Id, Self>;
}

macro_rules! memory_tables {
    ($($field:ident: $record:ident => $id:ident),+ $(,)?) => {
        /// Records keyed by primary key, one ordered map per record type,
        /// plus the many-to-many link tables.
        #[derive(Debug, Clone, Default)]
        pub struct MemoryStore {
            $($field: BTreeMap<$id, $record>,)+
            post_likes: BTreeMap<DiscussionPostId, BTreeSet<UserId>>,
            response_selected_options: BTreeMap<QuizResponseId, BTreeSet<QuestionOptionId>>,
            progress_completed_lessons: BTreeMap<ProgressId, BTreeSet<LessonId>>,
            learning_path_courses: BTreeMap<LearningPathId, BTreeSet<CourseId>>,
        }

        $(
            impl Stored for $record {
                type Id = $id;

                const TABLE: &'static str = stringify!($field);

                fn id(&self) -> $id {
                    self.id
                }

                fn table(store: &MemoryStore) -> &BTreeMap<$id, Self> {
                    &store.$field
                }

                fn table_mut(store: &mut MemoryStore) -> &mut BTreeMap<$id, Self> {
                    &mut store.$field
                }
            }
        )+
    };
}

memory_tables! {
    users: User => UserId,
    categories: Category => CategoryId,
    courses: Course => CourseId,
    enrollments: Enrollment => EnrollmentId,
    modules: Module => ModuleId,
    lessons: Lesson => LessonId,
    lesson_progress: LessonProgress => LessonProgressId,
    quizzes: Quiz => QuizId,
    questions: Question => QuestionId,
    question_options: QuestionOption => QuestionOptionId,
    quiz_attempts: QuizAttempt => QuizAttemptId,
    quiz_responses: QuizResponse => QuizResponseId,
    assignments: Assignment => AssignmentId,
    submissions: AssignmentSubmission => AssignmentSubmissionId,
    announcements: Announcement => AnnouncementId,
    messages: Message => MessageId,
    notifications: Notification => NotificationId,
    badges: Badge => BadgeId,
    user_badges: UserBadge => UserBadgeId,
    payments: Payment => PaymentId,
    discussion_threads: DiscussionThread => DiscussionThreadId,
    discussion_posts: DiscussionPost => DiscussionPostId,
    progress: Progress => ProgressId,
    certificates: Certificate => CertificateId,
    course_ratings: CourseRating => CourseRatingId,
    wishlists: Wishlist => WishlistId,
    learning_paths: LearningPath => LearningPathId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record, returning the one it replaced.
    pub fn insert<R: Stored>(&mut self, record: R) -> Option<R> {
        let id = record.id();
        let replaced = R::table_mut(self).insert(id, record);
        trace!(table = R::TABLE, ?id, replaced = replaced.is_some(), "Stored record");
        replaced
    }

    pub fn get<R: Stored>(&self, id: R::Id) -> Option<&R> {
        R::table(self).get(&id)
    }

    pub fn remove<R: Stored>(&mut self, id: R::Id) -> Option<R> {
        R::table_mut(self).remove(&id)
    }

    /// All records of one type, ordered by primary key.
    pub fn all<'a, R: Stored + 'a>(&'a self) -> impl Iterator<Item = &'a R>
    where
        R::Id: 'a,
    {
        R::table(self).values()
    }

    /// Returns `false` if the user already liked the post.
    pub fn like_post(&mut self, post: DiscussionPostId, user: UserId) -> bool {
        self.post_likes.entry(post).or_default().insert(user)
    }

    pub fn select_option(&mut self, response: QuizResponseId, option: QuestionOptionId) -> bool {
        self.response_selected_options
            .entry(response)
            .or_default()
            .insert(option)
    }

    pub fn complete_lesson(&mut self, progress: ProgressId, lesson: LessonId) -> bool {
        self.progress_completed_lessons
            .entry(progress)
            .or_default()
            .insert(lesson)
    }

    pub fn add_course_to_path(&mut self, path: LearningPathId, course: CourseId) -> bool {
        self.learning_path_courses
            .entry(path)
            .or_default()
            .insert(course)
    }

    fn lookup<R: Stored>(&self, id: R::Id) -> Option<R> {
        self.get::<R>(id).cloned()
    }

    fn children<R: Stored>(&self, belongs: impl Fn(&R) -> bool) -> Vec<R> {
        self.all::<R>().filter(|r| belongs(*r)).cloned().collect()
    }

    fn linked<R: Stored>(&self, ids: Option<&BTreeSet<R::Id>>) -> Vec<R> {
        ids.into_iter()
            .flatten()
            .filter_map(|id| self.lookup::<R>(*id))
            .collect()
    }
}

impl RecordStore for MemoryStore {
    fn user(&self, id: UserId) -> Option<User> {
        self.lookup(id)
    }

    fn user_by_username(&self, username: &str) -> Option<User> {
        self.users.values().find(|u| u.username == username).cloned()
    }

    fn category(&self, id: CategoryId) -> Option<Category> {
        self.lookup(id)
    }

    fn course(&self, id: CourseId) -> Option<Course> {
        self.lookup(id)
    }

    fn module(&self, id: ModuleId) -> Option<Module> {
        self.lookup(id)
    }

    fn lesson(&self, id: LessonId) -> Option<Lesson> {
        self.lookup(id)
    }

    fn quiz(&self, id: QuizId) -> Option<Quiz> {
        self.lookup(id)
    }

    fn question(&self, id: QuestionId) -> Option<Question> {
        self.lookup(id)
    }

    fn assignment(&self, id: AssignmentId) -> Option<Assignment> {
        self.lookup(id)
    }

    fn discussion_thread(&self, id: DiscussionThreadId) -> Option<DiscussionThread> {
        self.lookup(id)
    }

    fn badge(&self, id: BadgeId) -> Option<Badge> {
        self.lookup(id)
    }

    fn enrollments_of_course(&self, course: CourseId) -> Vec<Enrollment> {
        self.children(|e: &Enrollment| e.course_id == course)
    }

    fn lessons_of_module(&self, module: ModuleId) -> Vec<Lesson> {
        let mut lessons = self.children(|l: &Lesson| l.module_id == module);
        lessons.sort_by_key(|l| (l.order, l.id));
        lessons
    }

    fn questions_of_quiz(&self, quiz: QuizId) -> Vec<Question> {
        let mut questions = self.children(|q: &Question| q.quiz_id == quiz);
        questions.sort_by_key(|q| (q.order, q.id));
        questions
    }

    fn options_of_question(&self, question: QuestionId) -> Vec<QuestionOption> {
        let mut options = self.children(|o: &QuestionOption| o.question_id == question);
        options.sort_by_key(|o| (o.order, o.id));
        options
    }

    fn selected_options_of_response(&self, response: QuizResponseId) -> Vec<QuestionOption> {
        let mut options: Vec<QuestionOption> =
            self.linked(self.response_selected_options.get(&response));
        options.sort_by_key(|o| (o.order, o.id));
        options
    }

    fn submissions_of_assignment(&self, assignment: AssignmentId) -> Vec<AssignmentSubmission> {
        self.children(|s: &AssignmentSubmission| s.assignment_id == assignment)
    }

    fn posts_of_thread(&self, thread: DiscussionThreadId) -> Vec<DiscussionPost> {
        self.children(|p: &DiscussionPost| p.thread_id == thread)
    }

    fn likes_of_post(&self, post: DiscussionPostId) -> Vec<UserId> {
        self.post_likes
            .get(&post)
            .map(|users| users.iter().copied().collect())
            .unwrap_or_default()
    }

    fn completed_lessons_of_progress(&self, progress: ProgressId) -> Vec<LessonId> {
        self.progress_completed_lessons
            .get(&progress)
            .map(|lessons| lessons.iter().copied().collect())
            .unwrap_or_default()
    }

    fn courses_of_learning_path(&self, path: LearningPathId) -> Vec<Course> {
        self.linked(self.learning_path_courses.get(&path))
    }
}
