//! # cardinal-automation
//!
//! 입력 주입 어댑터 크레이트.
//! enigo 기반 실제 마우스/키보드 드라이버와 NoOp 드라이버,
//! 그리고 루프 시작 전 1회 수행되는 세션 부트스트랩을 제공한다.

pub mod bootstrap;
pub mod input_driver;
