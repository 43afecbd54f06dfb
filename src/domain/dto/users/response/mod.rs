//! # 탑승자 응답 DTO 모듈
//!
//! 탑승자 도메인과 관련된 HTTP 응답 데이터 전송 객체(DTO)들을 정의합니다.
//!
//! ## 설계 원칙
//!
//! - **데이터 은닉**: 비밀번호 해시 등 민감한 정보는 응답에서 제외
//! - **명시적 변환**: `From<Entity>` 구현을 통한 타입 변환

pub mod user_response;

pub use user_response::{AuthUserResponse, UserResponse};
