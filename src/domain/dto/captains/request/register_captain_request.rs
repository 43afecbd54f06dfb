//! 기사 회원가입 요청 DTO
//!
//! 새로운 기사 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 탑승자 회원가입과 동일한 인증 정보에 더해 운행 차량 정보를 검증합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::dto::users::request::FullnameDto;
use crate::domain::entities::captains::captain::{Vehicle, VehicleType};

/// 운행 차량 입력 DTO
///
/// `vehicle_type`은 serde 역직렬화 단계에서 `car` / `motorcycle` / `auto`
/// 외의 값을 거부합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VehicleDto {
    /// 차량 색상 (최소 3자)
    #[validate(length(min = 3, message = "차량 색상은 최소 3자 이상이어야 합니다"))]
    pub color: String,

    /// 차량 번호판 (최소 3자)
    #[validate(length(min = 3, message = "차량 번호판은 최소 3자 이상이어야 합니다"))]
    pub plate: String,

    /// 탑승 정원 (최소 1명)
    #[validate(range(min = 1, message = "탑승 정원은 최소 1명 이상이어야 합니다"))]
    pub capacity: u32,

    /// 차량 종류
    pub vehicle_type: VehicleType,
}

impl From<VehicleDto> for Vehicle {
    fn from(dto: VehicleDto) -> Self {
        Self {
            color: dto.color,
            plate: dto.plate,
            capacity: dto.capacity,
            vehicle_type: dto.vehicle_type,
        }
    }
}

/// 새로운 기사 계정 생성을 위한 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterCaptainRequest {
    /// 기사 성명
    #[validate(nested)]
    pub fullname: FullnameDto,

    /// 기사 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (최소 6자)
    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: String,

    /// 운행 차량 정보
    #[validate(nested)]
    pub vehicle: VehicleDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterCaptainRequest {
        RegisterCaptainRequest {
            fullname: FullnameDto {
                firstname: "Donghyun".to_string(),
                lastname: Some("Lee".to_string()),
            },
            email: "captain@example.com".to_string(),
            password: "secret123".to_string(),
            vehicle: VehicleDto {
                color: "black".to_string(),
                plate: "34나5678".to_string(),
                capacity: 4,
                vehicle_type: VehicleType::Car,
            },
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_short_color_rejected() {
        let mut request = valid_request();
        request.vehicle.color = "b".to_string();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_short_plate_rejected() {
        let mut request = valid_request();
        request.vehicle.plate = "12".to_string();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut request = valid_request();
        request.vehicle.capacity = 0;

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_unknown_vehicle_type_fails_deserialization() {
        let json = r#"{
            "fullname": { "firstname": "Donghyun" },
            "email": "captain@example.com",
            "password": "secret123",
            "vehicle": {
                "color": "black",
                "plate": "34나5678",
                "capacity": 4,
                "vehicle_type": "truck"
            }
        }"#;

        let parsed: Result<RegisterCaptainRequest, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }
}
