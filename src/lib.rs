//! 라이드온 백엔드
//!
//! Rust 기반의 라이드 헤일링 서비스 백엔드입니다.
//! 탑승자(user)와 기사(captain) 계정의 JWT 토큰 기반 인증,
//! 그리고 서비스 레지스트리를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **계정 관리**: 탑승자/기사 회원가입, 로그인, 프로필 조회
//! - **JWT 인증**: HMAC-SHA256 서명 토큰 기반 상태 없는 인증
//! - **토큰 무효화**: 로그아웃 시 블랙리스트 등록, TTL 인덱스로 자동 정리
//! - **싱글톤 DI**: inventory 기반 자동 의존성 주입
//! - **MongoDB**: 계정 및 블랙리스트 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use rideon_backend::services::users::UserService;
//! use rideon_backend::services::auth::TokenService;
//! use rideon_backend::config::PrincipalKind;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let user_service = UserService::instance();
//! let token_service = TokenService::instance();
//!
//! // 탑승자 생성 및 토큰 발급
//! let user = user_service.register_user(request).await?;
//! let id = user.id_string().unwrap();
//! let token = token_service.generate_token(&id, PrincipalKind::User)?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
