//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 탑승자/기사 공용 액세스 토큰의 생성, 검증, 추출을 담당합니다.

use std::any::Any;
use std::sync::Arc;
use actix_web::HttpRequest;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    config::{JwtConfig, PrincipalKind},
    core::errors::{AppError, AppResult},
    core::registry::{ServiceLocator, ServiceRegistration},
    domain::models::token::token::TokenClaims,
};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 안전한 JWT 토큰을 생성하고 검증합니다.
/// 토큰의 `kind` 클레임으로 탑승자(user)와 기사(captain)를 구분합니다.
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    fn new() -> Self {
        Self {}
    }

    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 인증 주체를 위한 JWT 액세스 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `principal_id` - 토큰을 발급받을 주체의 ID (ObjectId hex)
    /// * `kind` - 주체 종류 (탑승자/기사)
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 생성된 JWT 액세스 토큰
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_service = TokenService::instance();
    /// let id = user.id_string().ok_or_else(|| {
    ///     AppError::InternalError("사용자 ID가 없습니다".to_string())
    /// })?;
    /// let token = token_service.generate_token(&id, PrincipalKind::User)?;
    /// ```
    pub fn generate_token(&self, principal_id: &str, kind: PrincipalKind) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: principal_id.to_string(),
            kind,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Returns
    ///
    /// * `Ok(TokenClaims)` - 검증된 토큰의 클레임 정보
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    /// * `AppError::InternalError` - 기타 시스템 오류
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                },
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("토큰 서명이 유효하지 않습니다".to_string())
                },
                _ => AppError::InternalError(format!("토큰 검증 실패: {}", e))
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Arguments
    ///
    /// * `auth_header` - HTTP Authorization 헤더 값 전체
    ///
    /// # Returns
    ///
    /// * `Ok(&str)` - Bearer 접두사를 제거한 순수 토큰 문자열
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
        }
    }

    /// HTTP 요청에서 토큰 추출
    ///
    /// `token` 쿠키를 우선 확인하고, 없으면 Authorization 헤더의
    /// Bearer 토큰을 확인합니다. 둘 다 없으면 인증 에러를 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `req` - 토큰을 추출할 HTTP 요청
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 추출된 토큰 문자열
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 없음 또는 잘못된 헤더 형식
    pub fn extract_request_token(&self, req: &HttpRequest) -> AppResult<String> {
        if let Some(cookie) = req.cookie("token") {
            return Ok(cookie.value().to_string());
        }

        let auth_header = req.headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::AuthenticationError("인증 토큰이 제공되지 않았습니다".to_string())
            })?;

        self.extract_bearer_token(auth_header).map(|token| token.to_string())
    }
}

fn construct_token_service() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(TokenService::new()))
}

inventory::submit! {
    ServiceRegistration {
        name: "token_service",
        constructor: construct_token_service,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;

    fn service() -> TokenService {
        TokenService::new()
    }

    #[test]
    fn test_generate_and_verify_token() {
        let token_service = service();
        let token = token_service
            .generate_token("507f1f77bcf86cd799439011", PrincipalKind::Captain)
            .unwrap();

        let claims = token_service.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "507f1f77bcf86cd799439011");
        assert_eq!(claims.kind, PrincipalKind::Captain);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_token_rejects_garbage() {
        let token_service = service();
        let result = token_service.verify_token("not-a-jwt");
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_verify_token_rejects_expired() {
        // Validation::default()의 기본 leeway(60초)를 넘기기 위해 1시간 전 만료 토큰 생성
        let now = Utc::now();
        let claims = TokenClaims {
            sub: "507f1f77bcf86cd799439011".to_string(),
            kind: PrincipalKind::User,
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let secret = JwtConfig::secret();
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap();

        let result = service().verify_token(&token);
        match result {
            Err(AppError::AuthenticationError(msg)) => {
                assert_eq!(msg, "토큰이 만료되었습니다");
            },
            other => panic!("만료 에러가 아닙니다: {:?}", other.map(|c| c.sub)),
        }
    }

    #[test]
    fn test_verify_token_rejects_wrong_signature() {
        // 서명 키가 다른 토큰은 형식이 올바르더라도 인증 에러로 처리
        let now = Utc::now();
        let claims = TokenClaims {
            sub: "507f1f77bcf86cd799439011".to_string(),
            kind: PrincipalKind::User,
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        };
        let wrong_secret = format!("{}-other", JwtConfig::secret());
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(wrong_secret.as_ref()),
        )
        .unwrap();

        let result = service().verify_token(&token);
        match result {
            Err(AppError::AuthenticationError(msg)) => {
                assert_eq!(msg, "토큰 서명이 유효하지 않습니다");
            },
            other => panic!("서명 에러가 아닙니다: {:?}", other.map(|c| c.sub)),
        }
    }

    #[test]
    fn test_extract_bearer_token() {
        let token_service = service();
        assert_eq!(
            token_service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
        assert!(token_service.extract_bearer_token("Basic abc").is_err());
    }

    #[actix_web::test]
    async fn test_extract_request_token_prefers_cookie() {
        let req = TestRequest::default()
            .cookie(Cookie::new("token", "cookie-token"))
            .insert_header(("Authorization", "Bearer header-token"))
            .to_http_request();

        let token = service().extract_request_token(&req).unwrap();
        assert_eq!(token, "cookie-token");
    }

    #[actix_web::test]
    async fn test_extract_request_token_falls_back_to_header() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer header-token"))
            .to_http_request();

        let token = service().extract_request_token(&req).unwrap();
        assert_eq!(token, "header-token");
    }

    #[actix_web::test]
    async fn test_extract_request_token_missing() {
        let req = TestRequest::default().to_http_request();
        assert!(service().extract_request_token(&req).is_err());
    }
}
