use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::config::PrincipalKind;

/// JWT 토큰에서 추출된 인증 주체 정보
///
/// 인증 미들웨어가 토큰 검증 후 요청 확장(extensions)에 저장하며,
/// 핸들러는 `FromRequest` 추출자를 통해 이 정보를 받습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedPrincipal {
    /// 주체 고유 ID (ObjectId hex)
    pub principal_id: String,

    /// 주체 종류 (탑승자/기사)
    pub kind: PrincipalKind,
}

impl AuthenticatedPrincipal {
    /// 탑승자 토큰인지 확인
    pub fn is_user(&self) -> bool {
        self.kind == PrincipalKind::User
    }

    /// 기사 토큰인지 확인
    pub fn is_captain(&self) -> bool {
        self.kind == PrincipalKind::Captain
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedPrincipal {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedPrincipal>() {
            Some(principal) => ready(Ok(principal.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extraction_from_request_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedPrincipal {
            principal_id: "507f1f77bcf86cd799439011".to_string(),
            kind: PrincipalKind::User,
        });

        let principal = AuthenticatedPrincipal::extract(&req).await.unwrap();
        assert_eq!(principal.principal_id, "507f1f77bcf86cd799439011");
        assert!(principal.is_user());
        assert!(!principal.is_captain());
    }

    #[actix_web::test]
    async fn test_extraction_fails_without_middleware() {
        let req = TestRequest::default().to_http_request();

        let result = AuthenticatedPrincipal::extract(&req).await;
        assert!(result.is_err());
    }
}
