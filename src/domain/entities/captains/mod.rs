//! Captains Entity Module
//!
//! 기사(캡틴) 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//! 운행 차량 정보(Vehicle)와 운행 상태(CaptainStatus)를 포함합니다.

pub mod captain;
