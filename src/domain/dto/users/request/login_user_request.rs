//! 탑승자 로그인 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 탑승자 로그인을 위한 요청 DTO
///
/// 인증 실패 시 이메일 존재 여부가 드러나지 않도록,
/// 서비스 계층은 항상 단일화된 에러 메시지를 반환합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginUserRequest {
    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (최소 6자)
    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_login_request() {
        let request = LoginUserRequest {
            email: "rider@example.com".to_string(),
            password: "secret123".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let request = LoginUserRequest {
            email: "rider@".to_string(),
            password: "secret123".to_string(),
        };

        assert!(request.validate().is_err());
    }
}
