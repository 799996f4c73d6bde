pub mod mapper;
pub mod model;

pub use model::{
    AssignmentResponse, AssignmentSubmissionResponse, QuestionOptionResponse, QuestionResponse,
    QuizAttemptResponse, QuizDetail, QuizResponseDetail,
};
