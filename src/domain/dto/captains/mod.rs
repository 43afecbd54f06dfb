//! # Captain Data Transfer Objects Module
//!
//! 기사 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! captains/
//! ├── request/                         # 클라이언트 → 서버 요청 DTO
//! │   ├── register_captain_request.rs  # 회원가입 요청 (차량 정보 포함)
//! │   └── login_captain_request.rs     # 로그인 요청
//! └── response/                        # 서버 → 클라이언트 응답 DTO
//!     └── captain_response.rs          # 기사/인증 응답
//! ```

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
