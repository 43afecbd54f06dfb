//! # Authentication Configuration Module
//!
//! JWT 토큰 발급과 토큰 블랙리스트 관련 설정을 관리하는 모듈입니다.
//! 모든 설정은 환경 변수에서 읽어오며, 설정되지 않은 경우
//! 개발 환경에 적합한 기본값을 제공합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! ### 토큰 블랙리스트 설정
//! ```bash
//! export TOKEN_BLACKLIST_TTL_SECONDS="86400"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{JwtConfig, PrincipalKind};
//!
//! // JWT 토큰 생성 설정
//! let secret = JwtConfig::secret();
//! let expiration = JwtConfig::expiration_hours();
//!
//! // 주체 종류 처리
//! let kind = PrincipalKind::from_str("captain")?;
//! ```

use std::env;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰 서명 비밀키, 만료 시간, 블랙리스트 보관 기간을 관리합니다.
///
/// ## JWT 보안 모범 사례
///
/// 1. **강력한 비밀키 사용**: 최소 256비트 (32바이트) 랜덤 키
/// 2. **적절한 만료 시간**: 보안과 사용성의 균형 고려
/// 3. **로그아웃 토큰 무효화**: 블랙리스트를 통한 즉시 차단
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 이 키는 JWT 토큰의 무결성을 보장하는 핵심 요소입니다.
    /// 강력한 암호화 키를 사용해야 하며, 절대 노출되어서는 안 됩니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// # 안전한 JWT 키 생성
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 24시간
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// # 1시간으로 설정
    /// export JWT_EXPIRATION_HOURS="1"
    /// ```
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }

    /// 블랙리스트 토큰의 보관 기간을 초 단위로 반환합니다.
    ///
    /// 로그아웃된 토큰은 이 기간 동안 블랙리스트에 유지되며,
    /// MongoDB TTL 인덱스에 의해 자동으로 삭제됩니다.
    /// 토큰 자체의 만료 시간 이상으로 설정해야 차단 효과가 보장됩니다.
    ///
    /// # 기본값
    ///
    /// 86400초 (24시간, 기본 토큰 만료 시간과 동일)
    pub fn blacklist_ttl_seconds() -> u64 {
        env::var("TOKEN_BLACKLIST_TTL_SECONDS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .unwrap_or(86400)
    }
}

/// 인증 주체의 종류를 나타내는 열거형
///
/// 이 서비스는 두 종류의 주체를 다룹니다: 탑승자(user)와 기사(captain).
/// JWT 클레임의 `kind` 필드에 기록되어, 인증 미들웨어가 토큰이
/// 보호된 스코프와 일치하는 주체의 것인지 검증하는 데 사용됩니다.
///
/// ## 직렬화 지원
///
/// `serde`를 통해 소문자 문자열(`"user"` / `"captain"`)로
/// 직렬화/역직렬화되므로 JWT 클레임에 그대로 사용할 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    /// 탑승자 (일반 사용자)
    User,
    /// 기사 (차량 운행자)
    Captain,
}

impl PrincipalKind {
    /// 문자열에서 PrincipalKind를 생성합니다.
    ///
    /// # 인자
    ///
    /// * `s` - 주체 종류 이름 (대소문자 무관)
    ///
    /// # 반환값
    ///
    /// * `Ok(PrincipalKind)` - 유효한 주체 종류인 경우
    /// * `Err(String)` - 지원하지 않는 값인 경우
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "user" => Ok(PrincipalKind::User),
            "captain" => Ok(PrincipalKind::Captain),
            _ => Err(format!("Unsupported principal kind: {}", s)),
        }
    }

    /// PrincipalKind를 문자열로 변환합니다.
    ///
    /// 로깅과 JWT 클레임 기록에 사용됩니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrincipalKind::User => "user",
            PrincipalKind::Captain => "captain",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_kind_from_string() {
        assert_eq!(PrincipalKind::from_str("user").unwrap(), PrincipalKind::User);
        assert_eq!(
            PrincipalKind::from_str("captain").unwrap(),
            PrincipalKind::Captain
        );

        // 대소문자 무관 테스트
        assert_eq!(PrincipalKind::from_str("USER").unwrap(), PrincipalKind::User);
        assert_eq!(
            PrincipalKind::from_str("Captain").unwrap(),
            PrincipalKind::Captain
        );

        // 지원하지 않는 값 테스트
        assert!(PrincipalKind::from_str("admin").is_err());
        assert!(PrincipalKind::from_str("").is_err());
    }

    #[test]
    fn test_principal_kind_as_string() {
        assert_eq!(PrincipalKind::User.as_str(), "user");
        assert_eq!(PrincipalKind::Captain.as_str(), "captain");
    }

    #[test]
    fn test_principal_kind_roundtrip() {
        for &kind_str in &["user", "captain"] {
            let kind = PrincipalKind::from_str(kind_str).unwrap();
            assert_eq!(kind.as_str(), kind_str);
        }
    }

    #[test]
    fn test_principal_kind_serialization() {
        // JWT 클레임에 쓰이는 소문자 직렬화 형식 검증
        let kind = PrincipalKind::Captain;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"captain\"");

        let deserialized: PrincipalKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, deserialized);
    }

    #[test]
    fn test_jwt_expiration_default() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }

    #[test]
    fn test_blacklist_ttl_default() {
        if env::var("TOKEN_BLACKLIST_TTL_SECONDS").is_err() {
            assert_eq!(JwtConfig::blacklist_ttl_seconds(), 86400);
        }
    }
}
