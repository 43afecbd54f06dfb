//! 탑승자 비즈니스 로직 서비스 구현
//!
//! 탑승자 계정의 생성, 조회, 비밀번호 인증을 담당하는 서비스입니다.
//! Repository 레이어 위에서 bcrypt 해싱과 자격증명 검증을 처리합니다.

use std::any::Any;
use std::sync::Arc;
use bcrypt::hash;
use crate::{
    config::PasswordConfig,
    core::errors::{AppError, AppResult},
    core::registry::{ServiceLocator, ServiceRegistration},
    domain::dto::users::request::RegisterUserRequest,
    domain::dto::users::response::UserResponse,
    domain::entities::users::user::User,
    repositories::users::user_repo::UserRepository,
};

/// 탑승자 비즈니스 로직 서비스
///
/// ## 주요 책임
///
/// - **회원가입**: 비밀번호 해싱 후 탑승자 계정 생성
/// - **인증**: 이메일/비밀번호 자격증명 검증
/// - **조회**: ID 기반 프로필 조회 (민감 정보 제외 DTO 반환)
pub struct UserService {
    /// 탑승자 리포지토리
    user_repo: Arc<UserRepository>,
}

impl UserService {
    fn new() -> Self {
        Self {
            user_repo: ServiceLocator::get::<UserRepository>(),
        }
    }

    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 새로운 탑승자 계정 생성
    ///
    /// 비밀번호를 bcrypt로 해싱한 뒤 탑승자 엔티티를 저장합니다.
    /// 해싱 비용은 환경별로 다르게 적용됩니다 (`PasswordConfig::bcrypt_cost`).
    ///
    /// # 인자
    ///
    /// * `request` - 검증된 회원가입 요청 DTO
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 저장된 탑승자 엔티티 (ID 포함)
    /// * `Err(AppError::ValidationError)` - 이미 사용 중인 이메일
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    /// * `Err(AppError::DatabaseError)` - 저장 실패
    pub async fn register_user(&self, request: RegisterUserRequest) -> AppResult<User> {
        let start_time = std::time::Instant::now();

        // 환경별 bcrypt cost 사용
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        // 비밀번호 해싱
        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        let hash_duration = hash_start.elapsed();

        log::info!("Password hashing took: {:?}", hash_duration);

        let user = User::new(request.fullname.into(), request.email, password_hash);

        // 저장
        let created_user = self.user_repo.create(user).await?;

        let total_duration = start_time.elapsed();
        log::info!("Total user creation took: {:?}", total_duration);

        Ok(created_user)
    }

    /// ID로 탑승자 조회
    ///
    /// # 인자
    ///
    /// * `id` - 조회할 탑승자의 MongoDB ObjectId (16진수 문자열)
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 탑승자 정보 DTO (민감 정보 제외)
    /// * `Err(AppError::NotFound)` - 해당 ID의 탑승자가 존재하지 않음
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn get_user_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 이메일/비밀번호 자격증명 검증
    ///
    /// 보안을 위해 존재하지 않는 이메일과 틀린 비밀번호 모두
    /// 동일한 에러 메시지를 반환합니다.
    ///
    /// # 인자
    ///
    /// * `email` - 탑승자의 이메일 주소
    /// * `password` - 평문 비밀번호 (bcrypt로 검증됨)
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 인증된 탑승자 엔티티
    /// * `Err(AppError::AuthenticationError)` - 잘못된 이메일 또는 비밀번호
    /// * `Err(AppError::InternalError)` - 비밀번호 검증 시스템 오류
    pub async fn verify_password(&self, email: &str, password: &str) -> AppResult<User> {
        let start_time = std::time::Instant::now();

        let user = self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string()))?;

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        let verify_duration = verify_start.elapsed();

        log::debug!("Password verification took: {:?}", verify_duration);

        if !is_valid {
            return Err(AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string()));
        }

        let total_duration = start_time.elapsed();
        log::debug!("Total password verification took: {:?}", total_duration);

        Ok(user)
    }
}

fn construct_user_service() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(UserService::new()))
}

inventory::submit! {
    ServiceRegistration {
        name: "user_service",
        constructor: construct_user_service,
    }
}
