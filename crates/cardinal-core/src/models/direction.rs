//! 이동 방향과 틱별 개방 상태.

use std::fmt;

/// 4방향 이동.
///
/// "이동 없음"은 별도 variant 대신 `Option<Direction>`으로 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// 왼쪽
    Left,
    /// 오른쪽
    Right,
    /// 위
    Up,
    /// 아래
    Down,
}

impl Direction {
    /// 입력 드라이버에 전달할 키 이름
    pub fn key_name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_name())
    }
}

/// 틱 하나의 4방향 개방/차단 상태.
///
/// 매 틱 프로브 샘플에서 새로 계산되며 캐시되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Openings {
    /// 왼쪽이 열려 있는가
    pub left: bool,
    /// 오른쪽이 열려 있는가
    pub right: bool,
    /// 위쪽이 열려 있는가
    pub up: bool,
    /// 아래쪽이 열려 있는가
    pub down: bool,
}
