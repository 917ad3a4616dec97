//! 입력 드라이버 구현.
//!
//! `EnigoInputDriver` (실제 입력)와 `NoOpInputDriver` (테스트/드라이런용)를 제공한다.

use async_trait::async_trait;
use tracing::debug;

use cardinal_core::error::BotError;
use cardinal_core::ports::input_driver::InputDriver;

// ============================================================
// NoOpInputDriver — 테스트/드라이런용
// ============================================================

/// No-Op 입력 드라이버 — 모든 입력을 로깅만 하고 실행하지 않음
///
/// 테스트, `--dry-run` 모드에서 사용.
pub struct NoOpInputDriver;

#[async_trait]
impl InputDriver for NoOpInputDriver {
    async fn mouse_click(&self, button: &str, x: i32, y: i32) -> Result<(), BotError> {
        debug!(button, x, y, "[NoOp] 마우스 클릭");
        Ok(())
    }

    async fn key_press(&self, key: &str) -> Result<(), BotError> {
        debug!(key, "[NoOp] 키 누름");
        Ok(())
    }

    async fn key_release(&self, key: &str) -> Result<(), BotError> {
        debug!(key, "[NoOp] 키 놓음");
        Ok(())
    }

    fn platform(&self) -> &str {
        "noop"
    }
}

// ============================================================
// EnigoInputDriver — 실제 마우스/키보드 입력
// ============================================================

/// 실제 마우스/키보드 입력 드라이버 (enigo 기반)
///
/// macOS: Accessibility 권한 필요
/// Windows: UIAccess 또는 관리자 권한 필요
/// Linux: X11 또는 Wayland + uinput 권한 필요
#[cfg(feature = "enigo")]
pub struct EnigoInputDriver {
    /// enigo 인스턴스 (Send지만 !Sync → tokio::sync::Mutex 사용)
    enigo: tokio::sync::Mutex<enigo::Enigo>,
}

#[cfg(feature = "enigo")]
impl EnigoInputDriver {
    /// 새 EnigoInputDriver 생성
    pub fn new() -> Result<Self, BotError> {
        let settings = enigo::Settings::default();
        let enigo = enigo::Enigo::new(&settings)
            .map_err(|e| BotError::Injection(format!("입력 드라이버 초기화 실패: {e}")))?;
        Ok(Self {
            enigo: tokio::sync::Mutex::new(enigo),
        })
    }

    /// 문자열 → enigo 키 매핑
    ///
    /// 봇이 합성하는 키는 방향키와 단일 문자(음소거 "m")뿐이다.
    fn parse_key(key: &str) -> Result<enigo::Key, BotError> {
        match key.to_lowercase().as_str() {
            "up" | "uparrow" => Ok(enigo::Key::UpArrow),
            "down" | "downarrow" => Ok(enigo::Key::DownArrow),
            "left" | "leftarrow" => Ok(enigo::Key::LeftArrow),
            "right" | "rightarrow" => Ok(enigo::Key::RightArrow),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Ok(enigo::Key::Unicode(ch)),
                    _ => Err(BotError::Injection(format!("알 수 없는 키: {key}"))),
                }
            }
        }
    }
}

#[cfg(feature = "enigo")]
#[async_trait]
impl InputDriver for EnigoInputDriver {
    async fn mouse_click(&self, button: &str, x: i32, y: i32) -> Result<(), BotError> {
        use enigo::Mouse;
        debug!(button, x, y, "[Enigo] 마우스 클릭");
        let mut enigo = self.enigo.lock().await;
        enigo
            .move_mouse(x, y, enigo::Coordinate::Abs)
            .map_err(|e| BotError::Injection(format!("마우스 이동 실패: {e}")))?;
        let btn = match parse_mouse_button(button) {
            "right" => enigo::Button::Right,
            "middle" => enigo::Button::Middle,
            _ => enigo::Button::Left,
        };
        enigo
            .button(btn, enigo::Direction::Click)
            .map_err(|e| BotError::Injection(format!("마우스 클릭 실패: {e}")))?;
        Ok(())
    }

    async fn key_press(&self, key: &str) -> Result<(), BotError> {
        use enigo::Keyboard;
        debug!(key, "[Enigo] 키 누름");
        let parsed = Self::parse_key(key)?;
        let mut enigo = self.enigo.lock().await;
        enigo
            .key(parsed, enigo::Direction::Press)
            .map_err(|e| BotError::Injection(format!("키 누름 실패: {e}")))?;
        Ok(())
    }

    async fn key_release(&self, key: &str) -> Result<(), BotError> {
        use enigo::Keyboard;
        debug!(key, "[Enigo] 키 놓음");
        let parsed = Self::parse_key(key)?;
        let mut enigo = self.enigo.lock().await;
        enigo
            .key(parsed, enigo::Direction::Release)
            .map_err(|e| BotError::Injection(format!("키 놓음 실패: {e}")))?;
        Ok(())
    }

    fn platform(&self) -> &str {
        #[cfg(target_os = "macos")]
        {
            "macos"
        }
        #[cfg(target_os = "windows")]
        {
            "windows"
        }
        #[cfg(target_os = "linux")]
        {
            "linux"
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            "unknown"
        }
    }
}

// ============================================================
// 마우스 버튼 매핑 유틸
// ============================================================

/// 문자열 → 마우스 버튼 매핑
///
/// 인식 가능한 값: "left", "right", "middle". 그 외는 왼쪽 버튼.
pub fn parse_mouse_button(button: &str) -> &str {
    match button.to_lowercase().as_str() {
        "left" | "l" => "left",
        "right" | "r" => "right",
        "middle" | "m" => "middle",
        _ => "left",
    }
}

/// 플랫폼별 입력 드라이버 생성 팩토리
///
/// `enigo` feature 활성화 시 실제 입력 드라이버 반환,
/// 초기화 실패 또는 feature 비활성화 시 NoOp 드라이버 반환.
pub fn create_platform_input_driver() -> Box<dyn InputDriver> {
    #[cfg(feature = "enigo")]
    {
        match EnigoInputDriver::new() {
            Ok(driver) => {
                tracing::info!("실제 입력 드라이버 (enigo) 초기화 완료");
                return Box::new(driver);
            }
            Err(e) => {
                tracing::warn!("enigo 초기화 실패, NoOp 폴백: {e}");
            }
        }
    }
    Box::new(NoOpInputDriver)
}

// ============================================================
// 테스트
// ============================================================
