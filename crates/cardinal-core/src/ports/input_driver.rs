//! 입력 드라이버 포트.
//!
//! 마우스/키보드 조작을 위한 크로스 플랫폼 인터페이스를 정의한다.

use async_trait::async_trait;

use crate::error::BotError;

/// 입력 드라이버 — 마우스/키보드 시뮬레이션 인터페이스
///
/// 구현체: `EnigoInputDriver` (실제 입력), `NoOpInputDriver` (테스트/드라이런용)
#[async_trait]
pub trait InputDriver: Send + Sync {
    /// 마우스 클릭
    async fn mouse_click(&self, button: &str, x: i32, y: i32) -> Result<(), BotError>;

    /// 키 누름
    async fn key_press(&self, key: &str) -> Result<(), BotError>;

    /// 키 놓음
    async fn key_release(&self, key: &str) -> Result<(), BotError>;

    /// 키 탭 (누름 + 놓음)
    async fn key_tap(&self, key: &str) -> Result<(), BotError> {
        self.key_press(key).await?;
        self.key_release(key).await
    }

    /// 플랫폼 이름 (예: "macos", "windows", "linux")
    fn platform(&self) -> &str;
}
