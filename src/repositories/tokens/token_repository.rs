//! # 토큰 블랙리스트 리포지토리 구현
//!
//! 로그아웃으로 무효화된 JWT 토큰을 관리하는 리포지토리입니다.
//! `blacklisted_tokens` 컬렉션에 저장하며, `created_at` 필드의
//! TTL 인덱스가 보관 기간이 지난 항목을 자동으로 삭제합니다.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::{
    config::JwtConfig,
    core::errors::{AppError, AppResult},
    core::registry::{Repository, RepositoryRegistration, ServiceLocator},
    db::Database,
    domain::entities::tokens::blacklisted_token::BlacklistedToken,
};

/// 토큰 블랙리스트 리포지토리
///
/// ## 동작 방식
///
/// - **로그아웃**: 제출된 토큰을 블랙리스트에 등록
/// - **인증 검사**: 모든 보호된 요청에서 제출된 토큰의 차단 여부 확인
/// - **자동 만료**: TTL 인덱스에 의해 보관 기간 경과 후 자동 삭제
pub struct TokenRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl TokenRepository {
    fn new() -> Self {
        Self {
            db: ServiceLocator::get::<Database>(),
        }
    }

    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// `blacklisted_tokens` 컬렉션 핸들을 반환합니다.
    fn collection(&self) -> Collection<BlacklistedToken> {
        self.db
            .get_database()
            .collection::<BlacklistedToken>(self.collection_name())
    }

    /// 토큰을 블랙리스트에 등록합니다.
    ///
    /// 동일 토큰으로 로그아웃이 동시에 중복 호출되면 두 번째 삽입이
    /// 유니크 인덱스에 걸리므로, 중복 키 에러는 성공으로 처리합니다.
    pub async fn blacklist(&self, token: &str) -> AppResult<()> {
        let entry = BlacklistedToken::new(token.to_string());

        match self.collection().insert_one(&entry).await {
            Ok(_) => {
                log::info!("토큰이 블랙리스트에 등록되었습니다");
                Ok(())
            },
            Err(e) if is_duplicate_key(&e) => {
                log::debug!("이미 블랙리스트에 등록된 토큰입니다");
                Ok(())
            },
            Err(e) => Err(AppError::DatabaseError(e.to_string())),
        }
    }

    /// 토큰이 블랙리스트에 등록되어 있는지 확인합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 무효화된(로그아웃된) 토큰
    /// * `Ok(false)` - 사용 가능한 토큰
    pub async fn is_blacklisted(&self, token: &str) -> AppResult<bool> {
        let entry = self.collection()
            .find_one(doc! { "token": token })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(entry.is_some())
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **토큰 유니크 인덱스**: 중복 등록 방지 및 차단 여부 조회 최적화
    /// 2. **TTL 인덱스**: `created_at` 기준 보관 기간 경과 시 자동 삭제
    ///    (기본 86400초, `TOKEN_BLACKLIST_TTL_SECONDS`로 조정)
    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection();

        let token_index = IndexModel::builder()
            .keys(doc! { "token": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("token_unique".to_string())
                .build())
            .build();

        let ttl_index = IndexModel::builder()
            .keys(doc! { "created_at": 1 })
            .options(IndexOptions::builder()
                .expire_after(Duration::from_secs(JwtConfig::blacklist_ttl_seconds()))
                .name("created_at_ttl".to_string())
                .build())
            .build();

        collection
            .create_indexes([token_index, ttl_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// MongoDB 중복 키(E11000) 쓰기 에러 판별
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}

#[async_trait]
impl Repository for TokenRepository {
    fn name(&self) -> &str {
        "token_repository"
    }

    fn collection_name(&self) -> &str {
        "blacklisted_tokens"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.create_indexes().await?;
        log::info!("✅ blacklisted_tokens 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}

fn construct_token_repository() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(TokenRepository::new()))
}

inventory::submit! {
    RepositoryRegistration {
        name: "token_repository",
        constructor: construct_token_repository,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::error::{Error as MongoError, WriteError};

    #[test]
    fn test_duplicate_key_write_error_is_detected() {
        let write_error: WriteError = mongodb::bson::from_document(doc! {
            "code": 11000,
            "errmsg": "E11000 duplicate key error collection: rideon_dev.blacklisted_tokens",
        })
        .unwrap();
        let err = MongoError::from(ErrorKind::Write(WriteFailure::WriteError(write_error)));

        assert!(is_duplicate_key(&err));
    }

    #[test]
    fn test_other_write_error_codes_are_not_duplicate_key() {
        let write_error: WriteError = mongodb::bson::from_document(doc! {
            "code": 121,
            "errmsg": "Document failed validation",
        })
        .unwrap();
        let err = MongoError::from(ErrorKind::Write(WriteFailure::WriteError(write_error)));

        assert!(!is_duplicate_key(&err));
    }

    #[test]
    fn test_non_write_error_is_not_duplicate_key() {
        let err = MongoError::custom("연결 실패");
        assert!(!is_duplicate_key(&err));
    }
}
