//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 탑승자 계정 엔드포인트
//!   - 회원가입 (`POST /users/register`)
//!   - 로그인 (`POST /users/login`)
//!   - 프로필 조회 (`GET /users/profile`)
//!   - 로그아웃 (`GET /users/logout`)
//!
//! - **`captains`**: 기사 계정 엔드포인트 (차량 정보 포함)
//!   - 회원가입 (`POST /captains/register`)
//!   - 로그인 (`POST /captains/login`)
//!   - 프로필 조회 (`GET /captains/profile`)
//!   - 로그아웃 (`GET /captains/logout`)
//!
//! ## 주요 특징
//!
//! - **비동기 처리**: 모든 핸들러가 `async/await` 사용
//! - **타입 안전성**: 요청/응답 타입의 컴파일 타임 검증
//! - **검증 통합**: validator 크레이트로 입력 검증
//! - **통합 에러 처리**: AppError와 `?` 연산자로 에러 자동 전파

pub mod users;
pub mod captains;
