use coursehub_models::{LoginRequest, RegisterRequest, RegistrationResponse, UpdateProfileDto};
use utoipa::OpenApi;

use crate::modules::achievements::{BadgeResponse, UserBadgeResponse};
use crate::modules::assessments::{
    AssignmentResponse, AssignmentSubmissionResponse, QuestionOptionResponse, QuestionResponse,
    QuizAttemptResponse, QuizDetail, QuizResponseDetail,
};
use crate::modules::catalog::{CategoryResponse, CourseResponse, LearningPathResponse};
use crate::modules::commerce::{CourseRatingResponse, PaymentResponse, WishlistResponse};
use crate::modules::community::{
    AnnouncementResponse, DiscussionPostResponse, DiscussionThreadResponse, MessageResponse,
    NotificationResponse,
};
use crate::modules::learning::{
    CertificateResponse, EnrollmentResponse, LessonProgressResponse, LessonResponse,
    ModuleResponse, ProgressResponse,
};
use crate::modules::users::{UserProfile, UserRepresentation, UserSummary};

/// OpenAPI schemas of every representation and inbound request.
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(
            CategoryResponse,
            UserSummary,
            UserProfile,
            UserRepresentation,
            CourseResponse,
            EnrollmentResponse,
            ModuleResponse,
            LessonResponse,
            LessonProgressResponse,
            QuestionOptionResponse,
            QuestionResponse,
            QuizDetail,
            QuizAttemptResponse,
            QuizResponseDetail,
            AssignmentResponse,
            AssignmentSubmissionResponse,
            AnnouncementResponse,
            MessageResponse,
            NotificationResponse,
            BadgeResponse,
            UserBadgeResponse,
            PaymentResponse,
            DiscussionThreadResponse,
            DiscussionPostResponse,
            ProgressResponse,
            CertificateResponse,
            CourseRatingResponse,
            WishlistResponse,
            LearningPathResponse,
            RegisterRequest,
            RegistrationResponse,
            LoginRequest,
            UpdateProfileDto,
        )
    ),
    info(
        title = "CourseHub",
        version = "0.1.0",
        description = "Record representations and write-path validation for the CourseHub learning platform.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
