//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! 횡단 관심사(Cross-cutting concerns)를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - JWT 토큰 기반 인증 검증 (쿠키/Bearer 토큰)
//! - 토큰 블랙리스트 확인 (로그아웃된 토큰 차단)
//! - 주체 종류(탑승자/기사) 검증
//! - 주체 정보를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::auth_middleware::AuthMiddleware;
//!
//! App::new()
//!     .service(
//!         web::scope("/users")
//!             .service(register_user)
//!             .service(login_user)
//!             .service(
//!                 web::scope("")
//!                     .wrap(AuthMiddleware::users())
//!                     .service(get_user_profile)
//!                     .service(logout_user)
//!             )
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
