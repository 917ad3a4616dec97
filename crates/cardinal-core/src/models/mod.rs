//! 도메인 데이터 구조체.
//!
//! 게임 영역/좌표, 색상, 캡처 프레임, 이동 방향.
//! 모든 타입은 틱 하나에 스코프되거나 (Frame, Openings),
//! 부트스트랩 이후 프로세스 수명 동안 불변이다 (Region, ProbeLayout).

pub mod color;
pub mod direction;
pub mod frame;
pub mod geometry;
