//! Users Entity Module
//!
//! 탑승자 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//! 이메일/패스워드 기반 인증을 지원하는 User 엔티티와
//! 성명 값 객체(Fullname)를 포함합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::{Fullname, User};
//!
//! let user = User::new(
//!     Fullname { firstname: "지훈".to_string(), lastname: Some("김".to_string()) },
//!     "rider@example.com".to_string(),
//!     hashed_password,
//! );
//! ```

pub mod user;
