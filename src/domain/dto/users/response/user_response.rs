use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::users::user::{Fullname, User};

/// 탑승자 응답 DTO
///
/// 비밀번호 해시 등 민감한 정보는 응답에서 제외됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub fullname: Fullname,
    pub email: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            fullname,
            email,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            fullname,
            email,
            created_at,
            updated_at,
        }
    }
}

/// 인증 성공 응답 DTO (JWT 토큰 포함)
///
/// 회원가입(201)과 로그인(200) 응답에 공통으로 사용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUserResponse {
    pub token: String,
    pub user: UserResponse,
}

impl AuthUserResponse {
    /// 새 인증 응답 생성
    pub fn new(user: User, token: String) -> Self {
        Self {
            token,
            user: UserResponse::from(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_user_response_excludes_password_hash() {
        let mut user = User::new(
            Fullname {
                firstname: "Jihoon".to_string(),
                lastname: Some("Kim".to_string()),
            },
            "rider@example.com".to_string(),
            "$2b$04$hash".to_string(),
        );
        user.id = Some(ObjectId::new());

        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "rider@example.com");
        assert_eq!(json["fullname"]["firstname"], "Jihoon");
    }

    #[test]
    fn test_auth_response_shape() {
        let user = User::new(
            Fullname {
                firstname: "Jihoon".to_string(),
                lastname: None,
            },
            "rider@example.com".to_string(),
            "$2b$04$hash".to_string(),
        );

        let response = AuthUserResponse::new(user, "jwt-token".to_string());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["token"], "jwt-token");
        assert!(json["user"].is_object());
    }
}
