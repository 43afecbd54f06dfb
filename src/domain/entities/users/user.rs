//! User Entity Implementation
//!
//! 탑승자 엔티티의 핵심 구현체입니다.
//! 이메일/패스워드 기반 인증을 지원하는 사용자 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 성명 (값 객체)
///
/// 이름과 성을 분리하여 관리합니다. 성(lastname)은 선택 사항입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fullname {
    /// 이름 (최소 3자)
    pub firstname: String,
    /// 성 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}

/// 탑승자 엔티티
///
/// 차량 호출 서비스를 이용하는 일반 사용자를 표현하는 핵심 도메인 엔티티입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 성명
    pub fullname: Fullname,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호 (bcrypt)
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 탑승자 생성
    ///
    /// 비밀번호는 반드시 해시된 상태로 전달되어야 합니다.
    pub fn new(fullname: Fullname, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            fullname,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_id() {
        let user = User::new(
            Fullname {
                firstname: "지훈".to_string(),
                lastname: Some("김".to_string()),
            },
            "rider@example.com".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
        assert_eq!(user.email, "rider@example.com");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_id_string_conversion() {
        let mut user = User::new(
            Fullname {
                firstname: "민수".to_string(),
                lastname: None,
            },
            "rider@example.com".to_string(),
            "$2b$04$hash".to_string(),
        );

        let oid = ObjectId::new();
        user.id = Some(oid);

        assert_eq!(user.id_string(), Some(oid.to_hex()));
    }
}
