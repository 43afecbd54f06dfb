//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 인증을 담당하는 서비스를 제공합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 관리
//! - 쿠키/Authorization 헤더 양쪽에서 토큰 추출
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::instance();
//! let token = token_service.generate_token(&id, PrincipalKind::User)?;
//! ```

pub mod token_service;

pub use token_service::*;
