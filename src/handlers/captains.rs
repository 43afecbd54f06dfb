//! # 기사 HTTP 핸들러
//!
//! 탑승자 핸들러와 동일한 구성으로 기사 계정의 회원가입, 로그인,
//! 프로필 조회, 로그아웃 엔드포인트를 처리합니다.
//! 회원가입 시 차량 정보가 함께 등록됩니다.

use actix_web::{cookie::Cookie, get, post, web, HttpRequest, HttpResponse};
use validator::Validate;
use crate::config::PrincipalKind;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::captains::request::{LoginCaptainRequest, RegisterCaptainRequest};
use crate::domain::dto::captains::response::AuthCaptainResponse;
use crate::domain::models::auth::authenticated_principal::AuthenticatedPrincipal;
use crate::repositories::tokens::token_repository::TokenRepository;
use crate::services::auth::TokenService;
use crate::services::captains::captain_service::CaptainService;

/// 기사 회원가입 핸들러
///
/// 새로운 기사 계정을 차량 정보와 함께 생성하고 JWT 토큰을 발급합니다.
///
/// # 엔드포인트
///
/// `POST /captains/register`
///
/// # 요청 본문
///
/// ```json
/// {
///   "fullname": { "firstname": "Minsu", "lastname": "Lee" },
///   "email": "captain@example.com",
///   "password": "secure123",
///   "vehicle": {
///     "color": "black",
///     "plate": "34나5678",
///     "capacity": 4,
///     "vehicle_type": "car"
///   }
/// }
/// ```
#[post("/register")]
pub async fn register_captain(
    payload: web::Json<RegisterCaptainRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let captain_service = CaptainService::instance();
    let captain = captain_service.register_captain(payload.into_inner()).await?;

    let captain_id = captain.id_string().ok_or_else(|| {
        AppError::InternalError("기사 ID가 없습니다".to_string())
    })?;
    let token = TokenService::instance().generate_token(&captain_id, PrincipalKind::Captain)?;

    log::info!("기사 회원가입 성공: {}", captain.email);

    Ok(HttpResponse::Created().json(AuthCaptainResponse::new(captain, token)))
}

/// 기사 로그인 핸들러
///
/// # 엔드포인트
///
/// `POST /captains/login`
///
/// # 응답
///
/// * `200 OK` - 토큰과 기사 정보, `Set-Cookie: token=...`
/// * `401 Unauthorized` - 잘못된 이메일 또는 비밀번호
#[post("/login")]
pub async fn login_captain(
    payload: web::Json<LoginCaptainRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let request = payload.into_inner();
    let captain_service = CaptainService::instance();
    let captain = captain_service.verify_password(&request.email, &request.password).await?;

    let captain_id = captain.id_string().ok_or_else(|| {
        AppError::InternalError("기사 ID가 없습니다".to_string())
    })?;
    let token = TokenService::instance().generate_token(&captain_id, PrincipalKind::Captain)?;

    log::info!("기사 로그인 성공: {}", captain.email);

    let cookie = Cookie::build("token", token.clone())
        .path("/")
        .http_only(true)
        .finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(AuthCaptainResponse::new(captain, token)))
}

/// 기사 프로필 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /captains/profile`
#[get("/profile")]
pub async fn get_captain_profile(
    principal: AuthenticatedPrincipal,
) -> AppResult<HttpResponse> {
    let captain_service = CaptainService::instance();
    let captain = captain_service.get_captain_by_id(&principal.principal_id).await?;

    Ok(HttpResponse::Ok().json(captain))
}

/// 기사 로그아웃 핸들러
///
/// 제출된 토큰을 블랙리스트에 등록하고 `token` 쿠키를 제거합니다.
///
/// # 엔드포인트
///
/// `GET /captains/logout`
#[get("/logout")]
pub async fn logout_captain(req: HttpRequest) -> AppResult<HttpResponse> {
    let token = TokenService::instance().extract_request_token(&req)?;

    TokenRepository::instance().blacklist(&token).await?;

    let mut removal_cookie = Cookie::build("token", "")
        .path("/")
        .http_only(true)
        .finish();
    removal_cookie.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie)
        .json(serde_json::json!({
            "message": "로그아웃되었습니다"
        })))
}
