//! 게임 영역과 샘플 좌표.
//!
//! 게임 화면은 항상 550x550 고정 레이아웃이며, 프로브 좌표는
//! 이 크기 기준으로 캘리브레이션된 상수다. 영역 크기가 바뀌어도
//! 좌표는 적응하지 않는다.

use serde::{Deserialize, Serialize};

/// 게임 화면 너비 (픽셀, 고정)
pub const GAME_WIDTH: u32 = 550;

/// 게임 화면 높이 (픽셀, 고정)
pub const GAME_HEIGHT: u32 = 550;

/// 2D 좌표.
///
/// 프로브 좌표는 캡처 영역 원점 기준 상대 좌표,
/// 클릭 좌표는 화면 절대 좌표로 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// x 좌표
    pub x: u32,
    /// y 좌표
    pub y: u32,
}

impl Point {
    /// 새 좌표 생성
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// 게임 윈도우가 차지하는 화면 영역.
///
/// 부트스트랩 시 한 번 구성되며 이후 불변. 코어 루프는 읽기 전용으로 공유한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// 좌측 상단 x (화면 절대 좌표)
    pub left: i32,
    /// 좌측 상단 y (화면 절대 좌표)
    pub top: i32,
    /// 너비
    pub width: u32,
    /// 높이
    pub height: u32,
}

impl Region {
    /// 고정 550x550 게임 영역 생성
    pub const fn game(left: i32, top: i32) -> Self {
        Self {
            left,
            top,
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
        }
    }

    /// PLAY 버튼의 화면 절대 좌표
    pub fn play_button(&self) -> (i32, i32) {
        (self.left + 275, self.top + 522)
    }

    /// 영역 중앙의 화면 절대 좌표 (포커스 클릭용)
    pub fn center(&self) -> (i32, i32) {
        (
            self.left + (self.width / 2) as i32,
            self.top + (self.height / 2) as i32,
        )
    }
}

/// 5개 샘플 좌표 세트 (영역 상대).
///
/// 중앙은 조작 대상 사각형의 정렬 여부 판별용,
/// 나머지 넷은 각 방향의 벽 유무 판별용 프로브.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeLayout {
    /// 사각형 중앙 위치
    pub center: Point,
    /// 왼쪽 벽 프로브
    pub left: Point,
    /// 오른쪽 벽 프로브
    pub right: Point,
    /// 위쪽 벽 프로브
    pub up: Point,
    /// 아래쪽 벽 프로브
    pub down: Point,
}

impl Default for ProbeLayout {
    fn default() -> Self {
        // 550x550 기준 캘리브레이션 값
        Self {
            center: Point::new(GAME_WIDTH / 2, GAME_HEIGHT / 2),
            left: Point::new(88, 270),
            right: Point::new(460, 275),
            up: Point::new(270, 88),
            down: Point::new(275, 460),
        }
    }
}
