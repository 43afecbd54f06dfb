//! 기사 로그인 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 기사 로그인을 위한 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginCaptainRequest {
    /// 기사 이메일 주소
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
    fn test_short_password_rejected() {
        let request = LoginCaptainRequest {
            email: "captain@example.com".to_string(),
            password: "12345".to_string(),
        };

        assert!(request.validate().is_err());
    }
}
