pub mod mapper;
pub mod model;

pub use model::{
    CertificateResponse, EnrollmentResponse, LessonProgressResponse, LessonResponse,
    ModuleResponse, ProgressResponse,
};
