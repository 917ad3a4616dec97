//! 세션 부트스트랩.
//!
//! 제어 루프 시작 전 1회 수행되는 셋업 글루: 게임 윈도우에 포커스를 주고,
//! 음소거하고, PLAY 버튼을 눌러 새 게임을 시작한다.
//! 게임은 시작 화면(PLAY 버튼이 보이는 상태)이어야 한다.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use cardinal_core::config::BootstrapConfig;
use cardinal_core::error::BotError;
use cardinal_core::models::geometry::Region;
use cardinal_core::ports::input_driver::InputDriver;

/// 세션 부트스트랩 — 포커스 / 음소거 / 게임 시작
pub struct SessionBootstrap {
    input: Arc<dyn InputDriver>,
    region: Region,
    config: BootstrapConfig,
}

impl SessionBootstrap {
    /// 새 부트스트랩 생성
    pub fn new(input: Arc<dyn InputDriver>, region: Region, config: BootstrapConfig) -> Self {
        Self {
            input,
            region,
            config,
        }
    }

    /// 셋업 시퀀스 실행: 포커스 클릭 → 음소거 → PLAY 클릭
    pub async fn run(&self) -> Result<(), BotError> {
        // 영역 중앙 클릭으로 포커스 획득
        let (cx, cy) = self.region.center();
        debug!(cx, cy, "게임 윈도우 포커스 클릭");
        self.input.mouse_click("left", cx, cy).await?;
        self.settle(self.config.focus_settle_ms).await;

        // 음소거 (일부 인게임 효과도 비활성화된다)
        debug!(key = %self.config.mute_key, "게임 음소거");
        self.input.key_tap(&self.config.mute_key).await?;
        self.settle(self.config.settle_ms).await;

        // PLAY 버튼 클릭으로 새 게임 시작
        let (px, py) = self.region.play_button();
        self.input.mouse_click("left", px, py).await?;
        self.settle(self.config.settle_ms).await;
        info!("새 게임 시작");

        Ok(())
    }

    async fn settle(&self, ms: u64) {
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}
