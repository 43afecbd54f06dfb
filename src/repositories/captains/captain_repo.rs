//! # 기사 리포지토리 구현
//!
//! 기사 엔티티의 데이터 액세스 계층입니다.
//! 탑승자 리포지토리와 동일한 패턴으로 `captains` 컬렉션을 관리합니다.

use std::any::Any;
use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, Collection, IndexModel};
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::{Repository, RepositoryRegistration, ServiceLocator},
    db::Database,
    domain::entities::captains::captain::Captain,
};

/// 기사 데이터 액세스 리포지토리
pub struct CaptainRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl CaptainRepository {
    fn new() -> Self {
        Self {
            db: ServiceLocator::get::<Database>(),
        }
    }

    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// `captains` 컬렉션 핸들을 반환합니다.
    fn collection(&self) -> Collection<Captain> {
        self.db.get_database().collection::<Captain>(self.collection_name())
    }

    /// 이메일 주소로 기사 조회
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Captain>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 기사 조회
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Captain>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 기사 생성
    ///
    /// 이메일 중복 여부를 사전에 검증한 후 저장합니다.
    pub async fn create(&self, mut captain: Captain) -> AppResult<Captain> {
        // 중복 확인
        if self.find_by_email(&captain.email).await?.is_some() {
            return Err(AppError::ValidationError("이미 사용 중인 이메일입니다".to_string()));
        }

        let result = self.collection()
            .insert_one(&captain)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        captain.id = result.inserted_id.as_object_id();

        Ok(captain)
    }

    /// 데이터베이스 인덱스 생성
    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl Repository for CaptainRepository {
    fn name(&self) -> &str {
        "captain_repository"
    }

    fn collection_name(&self) -> &str {
        "captains"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.create_indexes().await?;
        log::info!("✅ captains 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}

fn construct_captain_repository() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(CaptainRepository::new()))
}

inventory::submit! {
    RepositoryRegistration {
        name: "captain_repository",
        constructor: construct_captain_repository,
    }
}
