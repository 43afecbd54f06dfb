use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::captains::captain::{Captain, CaptainStatus, Vehicle};
use crate::domain::entities::users::user::Fullname;

/// 기사 응답 DTO
///
/// 비밀번호 해시 등 민감한 정보는 응답에서 제외됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptainResponse {
    pub id: String,
    pub fullname: Fullname,
    pub email: String,
    pub vehicle: Vehicle,
    pub status: CaptainStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Captain> for CaptainResponse {
    fn from(captain: Captain) -> Self {
        let Captain {
            id,
            fullname,
            email,
            vehicle,
            status,
            created_at,
            updated_at,
            ..
        } = captain;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            fullname,
            email,
            vehicle,
            status,
            created_at,
            updated_at,
        }
    }
}

/// 기사 인증 성공 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthCaptainResponse {
    pub token: String,
    pub captain: CaptainResponse,
}

impl AuthCaptainResponse {
    /// 새 인증 응답 생성
    pub fn new(captain: Captain, token: String) -> Self {
        Self {
            token,
            captain: CaptainResponse::from(captain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::captains::captain::VehicleType;

    #[test]
    fn test_captain_response_excludes_password_hash() {
        let captain = Captain::new(
            Fullname {
                firstname: "Donghyun".to_string(),
                lastname: None,
            },
            "captain@example.com".to_string(),
            "$2b$04$hash".to_string(),
            Vehicle {
                color: "black".to_string(),
                plate: "34나5678".to_string(),
                capacity: 4,
                vehicle_type: VehicleType::Car,
            },
        );

        let response = CaptainResponse::from(captain);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["status"], "inactive");
        assert_eq!(json["vehicle"]["vehicle_type"], "car");
    }
}
