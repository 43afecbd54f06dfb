//! 기사 비즈니스 로직 서비스 구현
//!
//! 탑승자 서비스와 동일한 패턴으로 기사 계정의 생성, 조회,
//! 비밀번호 인증을 담당합니다. 차량 정보가 함께 저장됩니다.

use std::any::Any;
use std::sync::Arc;
use bcrypt::hash;
use crate::{
    config::PasswordConfig,
    core::errors::{AppError, AppResult},
    core::registry::{ServiceLocator, ServiceRegistration},
    domain::dto::captains::request::RegisterCaptainRequest,
    domain::dto::captains::response::CaptainResponse,
    domain::entities::captains::captain::Captain,
    repositories::captains::captain_repo::CaptainRepository,
};

/// 기사 비즈니스 로직 서비스
pub struct CaptainService {
    /// 기사 리포지토리
    captain_repo: Arc<CaptainRepository>,
}

impl CaptainService {
    fn new() -> Self {
        Self {
            captain_repo: ServiceLocator::get::<CaptainRepository>(),
        }
    }

    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 새로운 기사 계정 생성
    ///
    /// 비밀번호를 bcrypt로 해싱한 뒤 차량 정보와 함께 저장합니다.
    /// 신규 기사는 비활성(inactive) 상태로 시작합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Captain)` - 저장된 기사 엔티티 (ID 포함)
    /// * `Err(AppError::ValidationError)` - 이미 사용 중인 이메일
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    pub async fn register_captain(&self, request: RegisterCaptainRequest) -> AppResult<Captain> {
        let start_time = std::time::Instant::now();

        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        let hash_duration = hash_start.elapsed();

        log::info!("Password hashing took: {:?}", hash_duration);

        let captain = Captain::new(
            request.fullname.into(),
            request.email,
            password_hash,
            request.vehicle.into(),
        );

        let created_captain = self.captain_repo.create(captain).await?;

        let total_duration = start_time.elapsed();
        log::info!("Total captain creation took: {:?}", total_duration);

        Ok(created_captain)
    }

    /// ID로 기사 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(CaptainResponse)` - 기사 정보 DTO (민감 정보 제외)
    /// * `Err(AppError::NotFound)` - 해당 ID의 기사가 존재하지 않음
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn get_captain_by_id(&self, id: &str) -> AppResult<CaptainResponse> {
        let captain = self.captain_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("기사를 찾을 수 없습니다".to_string()))?;

        Ok(CaptainResponse::from(captain))
    }

    /// 이메일/비밀번호 자격증명 검증
    ///
    /// 탑승자 서비스와 동일하게 실패 원인에 관계없이
    /// 통합된 에러 메시지를 반환합니다.
    pub async fn verify_password(&self, email: &str, password: &str) -> AppResult<Captain> {
        let captain = self.captain_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string()))?;

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, &captain.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string()));
        }

        Ok(captain)
    }
}

fn construct_captain_service() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(CaptainService::new()))
}

inventory::submit! {
    ServiceRegistration {
        name: "captain_service",
        constructor: construct_captain_service,
    }
}
