//! 장애물 분류기.
//!
//! 샘플 색상을 기준 색상과 비교해 개방/차단, 중앙 정렬 여부를 판별한다.
//! 비교는 정확한 일치만 사용한다 — 안티앨리어싱이나 오버레이가 끼면
//! 에러 없이 오분류되는 알려진 취약점 (설정에서 색상 재캘리브레이션 가능).

use cardinal_core::config::GameConfig;
use cardinal_core::models::color::Rgb;

/// 장애물 분류기 — 순수 함수, O(1)
#[derive(Debug, Clone, Copy)]
pub struct ObstacleClassifier {
    square_color: Rgb,
    wall_color: Rgb,
}

impl ObstacleClassifier {
    /// 기준 색상으로 분류기 생성
    pub fn new(square_color: Rgb, wall_color: Rgb) -> Self {
        Self {
            square_color,
            wall_color,
        }
    }

    /// 설정에서 분류기 생성
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.square_color, config.wall_color)
    }

    /// 프로브 색상이 벽이 아니면 열려 있다
    pub fn is_open(&self, color: Rgb) -> bool {
        color != self.wall_color
    }

    /// 중앙 색상이 사각형 색상과 일치하면 이동 준비 완료
    pub fn is_centered(&self, color: Rgb) -> bool {
        color == self.square_color
    }
}
