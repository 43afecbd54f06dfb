//! # Domain Entities Module
//!
//! 비즈니스의 핵심 개념을 나타내는 영속 가능한 객체들을 정의합니다.
//!
//! ## 특징
//!
//! - **영속성**: MongoDB에 저장되는 도메인 객체
//! - **식별성**: `ObjectId` 기반의 고유 식별자
//! - **팩토리 생성자**: 생성 규칙을 강제하는 `new` 함수
//!
//! ## 모듈 구성
//!
//! - [`users`] - 탑승자 엔티티
//! - [`captains`] - 기사 엔티티 (차량 정보 포함)
//! - [`tokens`] - 무효화된 토큰 블랙리스트 엔티티
//!
//! ## 주의사항
//!
//! - **순환 참조 금지**: 엔티티 간 직접 참조보다는 ID 참조 사용
//! - **인덱스 설계**: 쿼리 패턴에 맞는 인덱스는 각 리포지토리의 `init`에서 생성

pub mod users;
pub mod captains;
pub mod tokens;
