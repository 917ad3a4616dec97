//! 봇 설정 구조체.
//!
//! 게임 영역 원점, 분류 색상, 루프 폴링 주기, 부트스트랩 지연 등
//! 런타임 설정을 정의한다. JSON 파일/CLI 인자에서 로드.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::color::Rgb;
use crate::models::geometry::{ProbeLayout, Region};

/// 최상위 봇 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    /// 캡처 영역 설정
    #[serde(default)]
    pub capture: CaptureConfig,
    /// 게임 분류 설정 (색상, 프로브 좌표)
    #[serde(default)]
    pub game: GameConfig,
    /// 제어 루프 설정
    #[serde(default)]
    pub agent: AgentConfig,
    /// 부트스트랩 설정
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
}

// ============================================================
// 캡처 영역 설정
// ============================================================

/// 캡처 영역 설정 — 게임 윈도우 좌측 상단 원점
///
/// 게임 화면 크기는 550x550 고정이므로 원점만 설정한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// 게임 영역 좌측 x (화면 절대 좌표)
    #[serde(default = "default_region_left")]
    pub left: i32,
    /// 게임 영역 상단 y (화면 절대 좌표)
    #[serde(default = "default_region_top")]
    pub top: i32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            left: default_region_left(),
            top: default_region_top(),
        }
    }
}

// ============================================================
// 게임 분류 설정
// ============================================================

/// 게임 분류 설정 — 기준 색상과 프로브 좌표
///
/// 색상 비교는 정확한 일치만 사용한다. 기본값은 원본 게임 렌더링 기준
/// 캘리브레이션 값이며, 디스플레이 환경이 다르면 재측정이 필요하다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// 조작 대상 사각형 색상
    #[serde(default = "default_square_color")]
    pub square_color: Rgb,
    /// 벽 색상
    #[serde(default = "default_wall_color")]
    pub wall_color: Rgb,
    /// 샘플 좌표 세트
    #[serde(default)]
    pub probes: ProbeLayout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            square_color: default_square_color(),
            wall_color: default_wall_color(),
            probes: ProbeLayout::default(),
        }
    }
}

// ============================================================
// 제어 루프 설정
// ============================================================

/// 제어 루프 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// 틱 사이 폴링 간격 (밀리초)
    ///
    /// 0이면 busy-poll (지연 없이 yield만 수행). 게임이 지연에 민감하므로
    /// 0이 기본값이며, CPU 사용량 제어가 필요할 때만 올린다.
    #[serde(default)]
    pub poll_interval_ms: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self { poll_interval_ms: 0 }
    }
}

// ============================================================
// 부트스트랩 설정
// ============================================================

/// 부트스트랩 설정 — 루프 시작 전 1회 수행되는 셋업
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// 음소거 키 (음소거는 일부 인게임 효과도 비활성화한다)
    #[serde(default = "default_mute_key")]
    pub mute_key: String,
    /// 포커스 클릭 후 대기 (밀리초)
    #[serde(default = "default_focus_settle_ms")]
    pub focus_settle_ms: u64,
    /// 나머지 단계 사이 대기 (밀리초)
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            mute_key: default_mute_key(),
            focus_settle_ms: default_focus_settle_ms(),
            settle_ms: default_settle_ms(),
        }
    }
}

// ============================================================
// BotConfig impl
// ============================================================

impl BotConfig {
    /// 기본 설정값 반환
    pub fn default_config() -> Self {
        Self::default()
    }

    /// 설정된 원점 기준 게임 영역 반환
    pub fn region(&self) -> Region {
        Region::game(self.capture.left, self.capture.top)
    }

    /// 루프 폴링 간격을 Duration으로 반환
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.agent.poll_interval_ms)
    }
}

// ============================================================
// 기본값 함수
// ============================================================

fn default_region_left() -> i32 {
    1178
}
fn default_region_top() -> i32 {
    345
}
fn default_square_color() -> Rgb {
    Rgb::new(249, 8, 42)
}
fn default_wall_color() -> Rgb {
    Rgb::new(176, 1, 26)
}
fn default_mute_key() -> String {
    "m".to_string()
}
fn default_focus_settle_ms() -> u64 {
    1_000
}
fn default_settle_ms() -> u64 {
    250
}
