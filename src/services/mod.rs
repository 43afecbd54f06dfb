//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! ServiceLocator를 통해 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 도메인별로 모듈화되어 탑승자/기사 계정 관리와 토큰 인증을 담당합니다.
//!
//! # Features
//!
//! - 탑승자/기사 계정 생명주기 관리 (생성, 조회, 인증)
//! - JWT 토큰 기반 인증 시스템
//! - 자동 의존성 주입 및 싱글톤 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, auth::TokenService};
//!
//! let user_service = UserService::instance();
//! let token_service = TokenService::instance();
//! ```

pub mod users;
pub mod captains;
pub mod auth;
