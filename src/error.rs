use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
pub enum AppError {
    /// Tenant store could not be created or opened.
    Provisioning(String),
    OwnerExists,
    UserNotFound,
    InvalidCredentials,
    DuplicateUsername,
    Forbidden(String),
    Unauthorized(String),
    BadRequest(String),
    NotFound(String),
    RateLimited(String),
    Render(String),
    Internal(String),
    Database(sqlx::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Provisioning(msg) => write!(f, "Provisioning Error: {msg}"),
            AppError::OwnerExists => write!(f, "Owner already registered for this company"),
            AppError::UserNotFound => write!(f, "User not found"),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::DuplicateUsername => write!(f, "Username already taken"),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {msg}"),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::RateLimited(msg) => write!(f, "Rate Limited: {msg}"),
            AppError::Render(msg) => write!(f, "Render Error: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
            AppError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::OwnerExists => (
                StatusCode::CONFLICT,
                "مالک (owner) قبلاً برای این شرکت ثبت شده است.".to_string(),
            ),
            AppError::UserNotFound => (StatusCode::UNAUTHORIZED, "کاربر یافت نشد".to_string()),
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "رمز عبور اشتباه است".to_string())
            }
            AppError::DuplicateUsername => (
                StatusCode::CONFLICT,
                "این نام کاربری قبلاً ثبت شده است.".to_string(),
            ),
            AppError::Forbidden(_) => {
                (StatusCode::FORBIDDEN, "فقط مدیر دسترسی دارد".to_string())
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::BadRequest(_) => (
                StatusCode::BAD_REQUEST,
                "همه فیلدها الزامی است.".to_string(),
            ),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "یافت نشد".to_string()),
            AppError::RateLimited(_) => (
                StatusCode::TOO_MANY_REQUESTS,
                "تلاش‌های زیاد؛ بعداً دوباره امتحان کنید.".to_string(),
            ),
            AppError::Provisioning(msg) => {
                tracing::error!("Provisioning error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "خطا در سامانه".to_string())
            }
            AppError::Render(msg) => {
                tracing::error!("Invoice render error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "خطا در سامانه".to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "خطا در سامانه".to_string())
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "خطا در سامانه".to_string())
            }
        };

        (status, message).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}
