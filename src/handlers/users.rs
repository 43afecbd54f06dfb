//! # 탑승자 HTTP 핸들러
//!
//! 탑승자 계정의 회원가입, 로그인, 프로필 조회, 로그아웃
//! 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 인증 | 상태 코드 |
//! |--------|------|------|------|-----------|
//! | `POST` | `/users/register` | 회원가입 | 불필요 | 201 Created |
//! | `POST` | `/users/login` | 로그인 | 불필요 | 200 OK |
//! | `GET` | `/users/profile` | 프로필 조회 | 필요 | 200 OK |
//! | `GET` | `/users/logout` | 로그아웃 | 필요 | 200 OK |

use actix_web::{cookie::Cookie, get, post, web, HttpRequest, HttpResponse};
use validator::Validate;
use crate::config::PrincipalKind;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::{LoginUserRequest, RegisterUserRequest};
use crate::domain::dto::users::response::AuthUserResponse;
use crate::domain::models::auth::authenticated_principal::AuthenticatedPrincipal;
use crate::repositories::tokens::token_repository::TokenRepository;
use crate::services::auth::TokenService;
use crate::services::users::user_service::UserService;

/// 탑승자 회원가입 핸들러
///
/// 새로운 탑승자 계정을 생성하고 JWT 토큰을 즉시 발급합니다.
///
/// # 엔드포인트
///
/// `POST /users/register`
///
/// # 요청 본문
///
/// ```json
/// {
///   "fullname": { "firstname": "Jihoon", "lastname": "Kim" },
///   "email": "rider@example.com",
///   "password": "secure123"
/// }
/// ```
///
/// # 응답
///
/// * `201 Created` - 토큰과 탑승자 정보 (`password_hash` 제외)
/// * `400 Bad Request` - 입력 검증 실패 또는 이미 사용 중인 이메일
#[post("/register")]
pub async fn register_user(
    payload: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_service = UserService::instance();
    let user = user_service.register_user(payload.into_inner()).await?;

    let user_id = user.id_string().ok_or_else(|| {
        AppError::InternalError("사용자 ID가 없습니다".to_string())
    })?;
    let token = TokenService::instance().generate_token(&user_id, PrincipalKind::User)?;

    log::info!("탑승자 회원가입 성공: {}", user.email);

    Ok(HttpResponse::Created().json(AuthUserResponse::new(user, token)))
}

/// 탑승자 로그인 핸들러
///
/// 이메일/비밀번호 자격증명을 검증하고 JWT 토큰을 발급합니다.
/// 토큰은 응답 본문과 HttpOnly `token` 쿠키 양쪽으로 전달됩니다.
///
/// # 엔드포인트
///
/// `POST /users/login`
///
/// # 응답
///
/// * `200 OK` - 토큰과 탑승자 정보, `Set-Cookie: token=...`
/// * `400 Bad Request` - 입력 검증 실패
/// * `401 Unauthorized` - 잘못된 이메일 또는 비밀번호
#[post("/login")]
pub async fn login_user(
    payload: web::Json<LoginUserRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let request = payload.into_inner();
    let user_service = UserService::instance();
    let user = user_service.verify_password(&request.email, &request.password).await?;

    let user_id = user.id_string().ok_or_else(|| {
        AppError::InternalError("사용자 ID가 없습니다".to_string())
    })?;
    let token = TokenService::instance().generate_token(&user_id, PrincipalKind::User)?;

    log::info!("탑승자 로그인 성공: {}", user.email);

    let cookie = Cookie::build("token", token.clone())
        .path("/")
        .http_only(true)
        .finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(AuthUserResponse::new(user, token)))
}

/// 탑승자 프로필 조회 핸들러
///
/// 인증 미들웨어가 검증한 주체의 프로필을 반환합니다.
///
/// # 엔드포인트
///
/// `GET /users/profile`
///
/// # 응답
///
/// * `200 OK` - 탑승자 정보 (`password_hash` 제외)
/// * `401 Unauthorized` - 인증 실패 (미들웨어에서 차단)
/// * `404 Not Found` - 토큰은 유효하지만 계정이 삭제된 경우
#[get("/profile")]
pub async fn get_user_profile(
    principal: AuthenticatedPrincipal,
) -> AppResult<HttpResponse> {
    let user_service = UserService::instance();
    let user = user_service.get_user_by_id(&principal.principal_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 탑승자 로그아웃 핸들러
///
/// 제출된 토큰을 블랙리스트에 등록하여 무효화하고
/// `token` 쿠키를 제거합니다. 블랙리스트 항목은 TTL 인덱스에 의해
/// 보관 기간이 지나면 자동 삭제됩니다.
///
/// # 엔드포인트
///
/// `GET /users/logout`
#[get("/logout")]
pub async fn logout_user(req: HttpRequest) -> AppResult<HttpResponse> {
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
