//! # cardinal-vision
//!
//! 프레임 캡처 어댑터 크레이트.
//! xcap으로 게임 영역 스냅샷을 획득하여 코어의 [`cardinal_core::models::frame::Frame`]으로
//! 변환한다. 픽셀 획득 방식은 이 크레이트 밖으로 새지 않는다.

pub mod capture;
