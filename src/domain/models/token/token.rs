//! JWT 인증 토큰 클레임 구조체
//!
//! RFC 7519 JWT 표준 클레임과 애플리케이션 특화 클레임을 정의합니다.
use serde::{Deserialize, Serialize};
use crate::config::PrincipalKind;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (탑승자/기사 ID, ObjectId hex)
/// - `kind`: 주체 종류 (`user` | `captain`)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (주체 ID)
    pub sub: String,
    /// 주체 종류
    pub kind: PrincipalKind,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}
