//! # Core Framework Module
//!
//! 백엔드 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//! 의존성 주입 컨테이너와 전역 에러 처리 시스템을 포함합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 싱글톤 인스턴스 관리
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 등록 수집
//! - **의존성 해결**: `Arc<T>` 타입 기반 의존성 주입
//! - **순환 참조 감지**: 설계 문제의 조기 발견
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 자동 구현
//! - **자동 변환**: thiserror 기반 에러 정의
//!
//! ## 사용 패턴
//!
//! ### 애플리케이션 초기화
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     // 1. 인프라 컴포넌트 등록
//!     let database = Arc::new(Database::new().await?);
//!     ServiceLocator::set(database);
//!
//!     // 2. 모든 서비스/리포지토리 초기화
//!     ServiceLocator::initialize_all().await?;
//!
//!     // 3. 웹 서버 시작
//!     HttpServer::new(|| App::new().configure(routes::configure_all_routes))
//!         .bind("0.0.0.0:8080")?
//!         .run()
//!         .await
//! }
//! ```
//!
//! ### 에러 처리
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! // 서비스 메서드에서 에러 발생
//! async fn get_user_by_id(&self, user_id: &str) -> AppResult<User> {
//!     self.user_repo.find_by_id(user_id).await?
//!         .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
//! }
//!
//! // 핸들러에서 자동 HTTP 응답 변환
//! async fn profile_handler(user: AuthenticatedPrincipal) -> AppResult<HttpResponse> {
//!     let user = UserService::instance().get_user_by_id(&user.principal_id).await?;
//!     Ok(HttpResponse::Ok().json(UserResponse::from(user)))
//! }
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! ❌ Circular dependency detected for type: UserService
//! panic: Circular dependency detected: UserService is already being initialized
//! ```
//! **해결**: 서비스 계층 구조를 재설계하여 단방향 의존성으로 변경
//!
//! ### 미등록 타입 에러
//! ```text
//! panic: Service not found: TokenService. Make sure it's registered...
//! ```
//! **해결**: `inventory::submit!` 등록 추가 또는 `ServiceLocator::set()` 으로 수동 등록

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
