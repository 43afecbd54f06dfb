//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! ServiceLocator를 통해 싱글톤으로 관리되는 리포지토리들을 제공합니다.
//! MongoDB를 주 저장소로 사용합니다.
//!
//! # Features
//!
//! - 싱글톤 패턴을 통한 메모리 효율적인 인스턴스 관리
//! - 부팅 시점의 인덱스 생성 (`Repository::init`)
//! - 자동 의존성 주입을 통한 간편한 설정
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let user_repo = UserRepository::instance();
//! let user = user_repo.find_by_email("rider@example.com").await?;
//! ```

pub mod users;
pub mod captains;
pub mod tokens;
