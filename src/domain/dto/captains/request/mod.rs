//! # 기사 요청 DTO 모듈
//!
//! 기사 도메인과 관련된 HTTP 요청 데이터 전송 객체(DTO)들을 정의합니다.
//! 탑승자 요청과 동일한 검증 계층을 거치며, 회원가입 시
//! 운행 차량 정보(VehicleDto)가 추가로 검증됩니다.

pub mod register_captain_request;
pub mod login_captain_request;

pub use register_captain_request::{RegisterCaptainRequest, VehicleDto};
pub use login_captain_request::LoginCaptainRequest;
