//! # 기사 응답 DTO 모듈
//!
//! 기사 도메인과 관련된 HTTP 응답 데이터 전송 객체(DTO)들을 정의합니다.

pub mod captain_response;

pub use captain_response::{AuthCaptainResponse, CaptainResponse};
