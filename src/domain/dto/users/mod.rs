//! # User Data Transfer Objects Module
//!
//! 탑승자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 사용자 데이터 교환을 위한 계약을 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                      # 클라이언트 → 서버 요청 DTO
//! │   ├── register_user_request.rs  # 회원가입 요청
//! │   └── login_user_request.rs     # 로그인 요청
//! └── response/                     # 서버 → 클라이언트 응답 DTO
//!     └── user_response.rs          # 사용자/인증 응답
//! ```
//!
//! ## JSON 응답 예제
//!
//! ### 인증 성공 응답 (회원가입 201 / 로그인 200)
//! ```json
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": {
//!     "id": "507f1f77bcf86cd799439011",
//!     "fullname": { "firstname": "지훈", "lastname": "김" },
//!     "email": "rider@example.com",
//!     "created_at": "2026-01-01T00:00:00Z",
//!     "updated_at": "2026-01-01T00:00:00Z"
//!   }
//! }
//! ```

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
