//! # Domain Models Module
//!
//! 엔티티도 DTO도 아닌, 계층 간 전달에 사용되는 도메인 모델을 정의합니다.
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 인증 미들웨어 → 핸들러로 전달되는 인증 주체 모델
//! - [`token`] - JWT 클레임 구조체

pub mod auth;
pub mod token;
