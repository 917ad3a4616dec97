//! 방향 결정 정책.
//!
//! 4방향 개방 상태에서 이동 방향 하나를 고르는 순수 함수.
//! 우선순위는 고정: 왼쪽 > 오른쪽 > 위 > 아래 (관찰 가능한 동작을
//! 결정하는 값이므로 변경하면 안 된다). 모두 막혀 있으면 `None`.

use cardinal_core::models::direction::{Direction, Openings};

/// 개방 상태 → 이동 방향.
///
/// 항상 정확히 하나가 열리는 게임에서 `None`은 나오지 않아야 하지만,
/// 에러 없이 처리한다 (호출자가 로깅 후 입력 주입을 생략).
pub fn decide(openings: Openings) -> Option<Direction> {
    if openings.left {
        Some(Direction::Left)
    } else if openings.right {
        Some(Direction::Right)
    } else if openings.up {
        Some(Direction::Up)
    } else if openings.down {
        Some(Direction::Down)
    } else {
        None
    }
}
