//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 데이터 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (MongoDB 문서)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 계층 간 전달 모델 (인증 주체, JWT 클레임)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB에 영속되는 비즈니스 객체들입니다: 탑승자(User),
//! 기사(Captain), 블랙리스트 토큰(BlacklistedToken).
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 계약을 정의합니다. 요청 DTO는 `validator` 검증 규칙을 가지고,
//! 응답 DTO는 민감한 정보를 제외한 `From<Entity>` 변환을 제공합니다.
//!
//! ### [`models`] - 계층 간 전달 모델
//!
//! 인증 미들웨어가 핸들러로 전달하는 `AuthenticatedPrincipal`과
//! JWT 클레임(`TokenClaims`)을 포함합니다.

pub mod entities;
pub mod dto;
pub mod models;
