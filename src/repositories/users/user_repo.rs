//! # 탑승자 리포지토리 구현
//!
//! 탑승자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용합니다.
//!
//! ## 특징
//!
//! - **싱글톤 관리**: ServiceLocator를 통한 의존성 주입
//! - **데이터 무결성**: 이메일 유니크 제약 조건 및 인덱스 관리

use std::any::Any;
use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, Collection, IndexModel};
use crate::{
    core::errors::{AppError, AppResult},
    core::registry::{Repository, RepositoryRegistration, ServiceLocator},
    db::Database,
    domain::entities::users::user::User,
};

/// 탑승자 데이터 액세스 리포지토리
///
/// `users` 컬렉션에 대한 CRUD 연산을 담당합니다.
///
/// ## 에러 처리
///
/// 모든 메서드는 `AppResult<T>` 타입을 반환하며,
/// 다음과 같은 에러 상황을 처리합니다:
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ValidationError**: 잘못된 ObjectId 형식, 이메일 중복
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    fn new() -> Self {
        Self {
            db: ServiceLocator::get::<Database>(),
        }
    }

    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// `users` 컬렉션 핸들을 반환합니다.
    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(self.collection_name())
    }

    /// 이메일 주소로 탑승자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    /// * `Err(AppError)` - 데이터베이스 오류
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 탑승자 조회
    ///
    /// # 인자
    ///
    /// * `id` - MongoDB ObjectId의 16진수 문자열 표현
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 탑승자 생성
    ///
    /// 이메일 중복 여부를 사전에 검증한 후 저장합니다.
    /// 유니크 인덱스가 존재하므로 검증 사이의 레이스 윈도우에서도
    /// 중복 삽입은 데이터베이스 수준에서 거부됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ValidationError)` - 이메일 중복
    pub async fn create(&self, mut user: User) -> AppResult<User> {
        // 중복 확인
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ValidationError("이미 사용 중인 이메일입니다".to_string()));
        }

        // DB에 저장
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행됩니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스**: 중복 이메일 방지 및 조회 최적화
    /// 2. **생성일 인덱스**: 최근 가입자 조회 및 정렬 최적화
    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection();

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 생성일 인덱스
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
impl Repository for UserRepository {
    fn name(&self) -> &str {
        "user_repository"
    }

    fn collection_name(&self) -> &str {
        "users"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.create_indexes().await?;
        log::info!("✅ users 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}

fn construct_user_repository() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(UserRepository::new()))
}

inventory::submit! {
    RepositoryRegistration {
        name: "user_repository",
        constructor: construct_user_repository,
    }
}
