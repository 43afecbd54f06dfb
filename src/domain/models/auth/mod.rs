//! 인증 모델 모듈
//!
//! 인증 미들웨어와 핸들러 사이에서 전달되는 인증 주체 모델을 정의합니다.

pub mod authenticated_principal;

pub use authenticated_principal::AuthenticatedPrincipal;
