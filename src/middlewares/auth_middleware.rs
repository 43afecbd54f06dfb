//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 인증 주체 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::config::PrincipalKind;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 보호된 라우트 앞에 배치되어 다음을 순서대로 수행합니다.
///
/// 1. `token` 쿠키 또는 Authorization 헤더에서 토큰 추출
/// 2. 토큰 블랙리스트(로그아웃 여부) 확인
/// 3. JWT 서명/만료 검증
/// 4. 토큰의 주체 종류가 이 미들웨어의 `kind`와 일치하는지 확인
/// 5. [`AuthenticatedPrincipal`](crate::domain::models::auth::AuthenticatedPrincipal)을
///    request extension에 저장
pub struct AuthMiddleware {
    /// 이 미들웨어가 허용하는 인증 주체 종류
    kind: PrincipalKind,
}

impl AuthMiddleware {
    /// 특정 주체 종류를 요구하는 인증 미들웨어 생성
    pub fn new(kind: PrincipalKind) -> Self {
        Self { kind }
    }

    /// 탑승자 전용 인증 미들웨어 생성
    pub fn users() -> Self {
        Self::new(PrincipalKind::User)
    }

    /// 기사 전용 인증 미들웨어 생성
    pub fn captains() -> Self {
        Self::new(PrincipalKind::Captain)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            kind: self.kind,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_middleware_kind() {
        let middleware = AuthMiddleware::users();
        assert_eq!(middleware.kind, PrincipalKind::User);
    }

    #[test]
    fn test_captains_middleware_kind() {
        let middleware = AuthMiddleware::captains();
        assert_eq!(middleware.kind, PrincipalKind::Captain);
    }
}
