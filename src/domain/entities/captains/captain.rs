//! Captain Entity Implementation
//!
//! 기사(캡틴) 엔티티의 핵심 구현체입니다.
//! 탑승자와 동일한 인증 정보에 더해 운행 차량 정보와 운행 상태를 관리합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::Fullname;

/// 차량 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    /// 승용차
    Car,
    /// 오토바이
    Motorcycle,
    /// 삼륜차 (오토릭샤)
    Auto,
}

/// 기사 운행 상태
///
/// 신규 가입한 기사는 `Inactive` 상태로 시작하며,
/// 운행을 시작하면 `Active`로 전환됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptainStatus {
    /// 운행 중
    Active,
    /// 운행 중지 (기본값)
    Inactive,
}

/// 운행 차량 정보 (값 객체)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// 차량 색상 (최소 3자)
    pub color: String,
    /// 차량 번호판 (최소 3자)
    pub plate: String,
    /// 탑승 정원 (최소 1명)
    pub capacity: u32,
    /// 차량 종류
    pub vehicle_type: VehicleType,
}

/// 기사 엔티티
///
/// 차량을 운행하는 기사를 표현하는 핵심 도메인 엔티티입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Captain {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 기사 성명
    pub fullname: Fullname,
    /// 기사 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호 (bcrypt)
    pub password_hash: String,
    /// 운행 차량 정보
    pub vehicle: Vehicle,
    /// 운행 상태
    pub status: CaptainStatus,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Captain {
    /// 새 기사 생성
    ///
    /// 비밀번호는 반드시 해시된 상태로 전달되어야 하며,
    /// 운행 상태는 `Inactive`로 시작합니다.
    pub fn new(fullname: Fullname, email: String, password_hash: String, vehicle: Vehicle) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            fullname,
            email,
            password_hash,
            vehicle,
            status: CaptainStatus::Inactive,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vehicle() -> Vehicle {
        Vehicle {
            color: "black".to_string(),
            plate: "34나5678".to_string(),
            capacity: 4,
            vehicle_type: VehicleType::Car,
        }
    }

    #[test]
    fn test_new_captain_starts_inactive() {
        let captain = Captain::new(
            Fullname {
                firstname: "동현".to_string(),
                lastname: Some("이".to_string()),
            },
            "captain@example.com".to_string(),
            "$2b$04$hash".to_string(),
            sample_vehicle(),
        );

        assert_eq!(captain.status, CaptainStatus::Inactive);
        assert!(captain.id.is_none());
        assert_eq!(captain.vehicle.capacity, 4);
    }

    #[test]
    fn test_vehicle_type_serialization() {
        // 저장 형식은 소문자 문자열
        assert_eq!(
            serde_json::to_string(&VehicleType::Motorcycle).unwrap(),
            "\"motorcycle\""
        );
        assert_eq!(serde_json::to_string(&VehicleType::Auto).unwrap(), "\"auto\"");

        let parsed: VehicleType = serde_json::from_str("\"car\"").unwrap();
        assert_eq!(parsed, VehicleType::Car);
    }

    #[test]
    fn test_captain_status_serialization() {
        assert_eq!(
            serde_json::to_string(&CaptainStatus::Inactive).unwrap(),
            "\"inactive\""
        );

        let parsed: CaptainStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(parsed, CaptainStatus::Active);
    }
}
