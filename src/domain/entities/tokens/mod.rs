//! Tokens Entity Module
//!
//! 토큰 블랙리스트 엔티티를 정의하는 모듈입니다.
//! 로그아웃된 JWT 토큰은 TTL 인덱스가 걸린 컬렉션에 저장되어
//! 만료될 때까지 재사용이 차단됩니다.

pub mod blacklisted_token;
