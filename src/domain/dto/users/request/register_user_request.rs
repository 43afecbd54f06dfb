//! 탑승자 회원가입 요청 DTO
//!
//! 새로운 탑승자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::users::user::Fullname;

/// 성명 입력 DTO
///
/// 회원가입 요청에 중첩되어 사용되며, 기사 회원가입에서도 재사용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FullnameDto {
    /// 이름 (최소 3자)
    #[validate(length(min = 3, message = "이름은 최소 3자 이상이어야 합니다"))]
    pub firstname: String,

    /// 성 (선택)
    pub lastname: Option<String>,
}

impl From<FullnameDto> for Fullname {
    fn from(dto: FullnameDto) -> Self {
        Self {
            firstname: dto.firstname,
            lastname: dto.lastname,
        }
    }
}

/// 새로운 탑승자 계정 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    /// 사용자 성명
    #[validate(nested)]
    pub fullname: FullnameDto,

    /// 사용자 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (최소 6자)
    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterUserRequest {
        RegisterUserRequest {
            fullname: FullnameDto {
                firstname: "Jihoon".to_string(),
                lastname: None,
            },
            email: "rider@example.com".to_string(),
            password: "secret123".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_short_firstname_rejected() {
        let mut request = valid_request();
        request.fullname.firstname = "김".to_string();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut request = valid_request();
        request.password = "12345".to_string();

        assert!(request.validate().is_err());
    }
}
