mod app_error;

pub use app_error::{ApiError, AppError, AppResult};
