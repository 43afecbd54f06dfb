//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::config::PrincipalKind;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::auth::authenticated_principal::AuthenticatedPrincipal;
use crate::domain::models::token::token::TokenClaims;
use crate::repositories::tokens::token_repository::TokenRepository;
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub kind: PrincipalKind,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let kind = self.kind;

        Box::pin(async move {
            let auth_result = authenticate_request(&req, kind).await;

            match auth_result {
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({
                            "error": "authentication_required",
                            "message": "유효한 인증 토큰이 필요합니다"
                        }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                },
                Ok(principal) => {
                    log::debug!("인증 성공: 주체 ID {}", principal.principal_id);
                    // 주체 정보를 Request Extensions에 저장
                    req.extensions_mut().insert(principal);
                },
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 JWT 토큰을 추출하고 검증
///
/// 블랙리스트에 등록된(로그아웃된) 토큰과 주체 종류가 다른 토큰은
/// 서명이 유효하더라도 거부됩니다.
async fn authenticate_request(
    req: &ServiceRequest,
    kind: PrincipalKind,
) -> AppResult<AuthenticatedPrincipal> {
    let token_service = TokenService::instance();

    // 쿠키 또는 Authorization 헤더에서 토큰 추출
    let token = token_service.extract_request_token(req.request())?;

    // 로그아웃된 토큰인지 확인
    let blacklisted = TokenRepository::instance().is_blacklisted(&token).await?;

    // 토큰 검증 및 클레임 추출
    let claims = token_service.verify_token(&token)?;

    authorize(claims, blacklisted, kind)
}

/// 검증된 클레임에 대한 인가 판정
///
/// 무효화된 토큰을 거부한 뒤 주체 종류 일치를 확인합니다
/// (탑승자 토큰으로 기사 라우트 접근 차단).
fn authorize(
    claims: TokenClaims,
    blacklisted: bool,
    kind: PrincipalKind,
) -> AppResult<AuthenticatedPrincipal> {
    if blacklisted {
        return Err(AppError::AuthenticationError("무효화된 토큰입니다".to_string()));
    }

    if claims.kind != kind {
        return Err(AppError::AuthenticationError("접근 권한이 없는 토큰입니다".to_string()));
    }

    Ok(AuthenticatedPrincipal {
        principal_id: claims.sub,
        kind: claims.kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(kind: PrincipalKind) -> TokenClaims {
        TokenClaims {
            sub: "507f1f77bcf86cd799439011".to_string(),
            kind,
            iat: 1_700_000_000,
            exp: 1_700_003_600,
        }
    }

    #[test]
    fn test_authorize_rejects_blacklisted_token() {
        let result = authorize(claims(PrincipalKind::User), true, PrincipalKind::User);
        match result {
            Err(AppError::AuthenticationError(msg)) => {
                assert_eq!(msg, "무효화된 토큰입니다");
            },
            other => panic!("블랙리스트 거부가 아닙니다: {:?}", other.map(|p| p.principal_id)),
        }
    }

    #[test]
    fn test_authorize_rejects_captain_token_on_user_scope() {
        let result = authorize(claims(PrincipalKind::Captain), false, PrincipalKind::User);
        match result {
            Err(AppError::AuthenticationError(msg)) => {
                assert_eq!(msg, "접근 권한이 없는 토큰입니다");
            },
            other => panic!("주체 종류 거부가 아닙니다: {:?}", other.map(|p| p.principal_id)),
        }
    }

    #[test]
    fn test_authorize_rejects_user_token_on_captain_scope() {
        let result = authorize(claims(PrincipalKind::User), false, PrincipalKind::Captain);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_authorize_accepts_matching_kind() {
        let principal = authorize(claims(PrincipalKind::Captain), false, PrincipalKind::Captain)
            .unwrap();
        assert_eq!(principal.principal_id, "507f1f77bcf86cd799439011");
        assert_eq!(principal.kind, PrincipalKind::Captain);
    }
}
