//! Blacklisted Token Entity Implementation
//!
//! 로그아웃으로 무효화된 JWT 토큰을 표현하는 엔티티입니다.
//! `created_at` 필드에 걸린 MongoDB TTL 인덱스에 의해
//! 설정된 보관 기간이 지나면 자동으로 삭제됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 블랙리스트 토큰 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlacklistedToken {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 무효화된 JWT 토큰 원문 (unique)
    pub token: String,
    /// 블랙리스트 등록 시간 (TTL 인덱스 기준)
    pub created_at: DateTime,
}

impl BlacklistedToken {
    /// 새 블랙리스트 항목 생성
    pub fn new(token: String) -> Self {
        Self {
            id: None,
            token,
            created_at: DateTime::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_blacklisted_token() {
        let entry = BlacklistedToken::new("eyJhbGciOiJIUzI1NiJ9.payload.sig".to_string());

        assert!(entry.id.is_none());
        assert_eq!(entry.token, "eyJhbGciOiJIUzI1NiJ9.payload.sig");
    }
}
