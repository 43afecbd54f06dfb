//! 기사 비즈니스 로직 서비스 모듈

pub mod captain_service;

pub use captain_service::*;
