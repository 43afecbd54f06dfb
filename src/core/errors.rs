//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 핸들러에서 일관된 HTTP 에러 응답을 보장합니다.
//!
//! ## 설계 원칙
//!
//! - **도메인별 분류**: 각 계층(데이터, 비즈니스, 보안)별 에러 타입
//! - **자동 HTTP 변환**: 에러 타입에 따른 자동 상태 코드 매핑
//! - **일관된 응답 형식**: 모든 에러에 대한 표준화된 JSON 응답
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! impl UserService {
//!     async fn register_user(&self, data: RegisterUserRequest) -> AppResult<User> {
//!         // 중복 검사
//!         if self.user_repo.find_by_email(&data.email).await?.is_some() {
//!             return Err(AppError::ValidationError(
//!                 "이미 등록된 이메일입니다".to_string()
//!             ));
//!         }
//!
//!         // 데이터베이스 작업
//!         let user = self.user_repo.create(data).await?;
//!         Ok(user)
//!     }
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 중복 이메일 |
//! | `AuthenticationError` | 401 Unauthorized | 로그인 실패, 토큰 만료/차단 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// `thiserror` 크레이트를 사용하여 자동으로 `Error` trait을 구현하고,
/// `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 중 발생하는 오류를 나타냅니다.
    /// 500 Internal Server Error로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - 연결 타임아웃
    /// - 인덱스 제약 조건 위반
    /// - 쿼리 실행 실패
    ///
    /// # 예제
    /// ```rust,ignore
    /// collection.insert_one(&user).await
    ///     .map_err(|e| AppError::DatabaseError(
    ///         format!("사용자 생성 실패: {}", e)
    ///     ))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 클라이언트가 제공한 데이터가 형식 요구사항이나 비즈니스 규칙을
    /// 만족하지 않을 때 발생합니다. 400 Bad Request로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - 이메일 형식 오류
    /// - 비밀번호/이름 길이 제한 위반
    /// - 차량 정보 규칙 위반
    /// - 중복 이메일로 회원가입 시도
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 요청된 리소스(사용자, 캡틴 등)가 존재하지 않을 때 발생합니다.
    /// 404 Not Found로 응답됩니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// let user = user_repo.find_by_id(&user_id).await?
    ///     .ok_or_else(|| AppError::NotFound(
    ///         format!("사용자를 찾을 수 없습니다: {}", user_id)
    ///     ))?;
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),

    /// 인증 실패 에러
    ///
    /// 요청자의 신원을 확인할 수 없을 때 발생합니다.
    /// 401 Unauthorized로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - 잘못된 이메일 또는 비밀번호
    /// - 만료된 JWT 토큰
    /// - 유효하지 않은 토큰 서명
    /// - 블랙리스트에 등록된(로그아웃된) 토큰
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 서버 에러
    ///
    /// 예상하지 못한 시스템 오류 시 발생합니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 `AppError` 변형을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    ///
    /// # 응답 형식
    ///
    /// 모든 에러 응답은 다음과 같은 표준 JSON 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "Human readable error message"
    /// }
    /// ```
    ///
    /// # 상태 코드 매핑
    ///
    /// - `ValidationError` → 400 Bad Request
    /// - `AuthenticationError` → 401 Unauthorized
    /// - `NotFound` → 404 Not Found
    /// - 나머지 모든 에러 → 500 Internal Server Error
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// 애플리케이션 전체에서 자주 사용되는 `Result<T, AppError>` 패턴을
/// 간소화하기 위한 타입 별칭입니다.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("이메일은 필수입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("사용자를 찾을 수 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("유효하지 않은 토큰".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("연결 실패".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("예상치 못한 오류".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_message_format() {
        let error = AppError::ValidationError("이름이 너무 짧습니다".to_string());
        assert_eq!(error.to_string(), "Validation error: 이름이 너무 짧습니다");
    }
}
