//! # cardinal-agent
//!
//! 인지-판단 제어 루프 크레이트.
//! 매 틱 (캡처) → (고정 좌표 샘플) → (색상 분류) → (방향 결정) → (키 주입)
//! 사이클을 수행한다. 시퀀싱과 타이밍이 있는 유일한 컴포넌트이며,
//! 나머지는 전부 순수 함수 또는 어댑터다.

pub mod classifier;
pub mod control_loop;
pub mod policy;
