//! # Data Transfer Objects Module
//!
//! 클라이언트와 서버 간의 데이터 교환 계약을 정의하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! dto/
//! ├── users/           # 탑승자 요청/응답 DTO
//! └── captains/        # 기사 요청/응답 DTO
//! ```
//!
//! ## 설계 원칙
//!
//! 1. **작은 인터페이스**: 각 DTO는 특정 용도에만 최적화
//! 2. **명시적 변환**: From/Into trait을 통한 엔티티 ↔ DTO 변환
//! 3. **검증 우선**: 모든 요청 DTO는 `validator` 검증 규칙을 가짐

pub mod users;
pub mod captains;
