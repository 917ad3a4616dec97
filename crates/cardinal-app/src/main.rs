//! # cardinal-app
//!
//! Cardinal Bot 바이너리 진입점.
//! DI 컨테이너 역할, 부트스트랩, 제어 루프와 라이프사이클 오케스트레이션.
//!
//! 게임 윈도우가 화면에 보이고 PLAY 버튼이 노출된 상태에서 실행해야 한다.

mod lifecycle;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cardinal_agent::control_loop::ControlLoop;
use cardinal_automation::bootstrap::SessionBootstrap;
use cardinal_automation::input_driver::{create_platform_input_driver, NoOpInputDriver};
use cardinal_core::config_manager::ConfigManager;
use cardinal_core::ports::input_driver::InputDriver;
use cardinal_vision::capture::XcapFrameSource;

use crate::lifecycle::LifecycleManager;

/// Cardinal Bot
///
/// Cardinal 회피 게임을 자동으로 플레이하는 스크린 봇
#[derive(Parser, Debug)]
#[command(name = "cardinal")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 게임 영역 좌측 x 오버라이드
    #[arg(long)]
    left: Option<i32>,

    /// 게임 영역 상단 y 오버라이드
    #[arg(long)]
    top: Option<i32>,

    /// 틱 사이 폴링 간격 오버라이드 (밀리초, 0 = busy-poll)
    #[arg(long)]
    poll_interval: Option<u64>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,

    /// 드라이런 (입력 주입 없이 로깅만)
    #[arg(long)]
    dry_run: bool,

    /// 부트스트랩 생략 (이미 게임이 진행 중일 때)
    #[arg(long)]
    skip_bootstrap: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // tracing 초기화
    let log_filter = format!(
        "cardinal={lvl},cardinal_app={lvl},cardinal_core={lvl},cardinal_vision={lvl},cardinal_automation={lvl},cardinal_agent={lvl}",
        lvl = args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    info!("Cardinal Bot 시작 (Ctrl-C로 중단)");
    info!("마우스 이동을 중단하려면 Ctrl-C 후 다시 실행하세요.");

    // 설정 로드 + CLI 오버라이드
    let config_manager = match args.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    }
    .context("설정 로드 실패")?;
    info!("설정 파일: {}", config_manager.config_path().display());

    let mut config = config_manager.get();
    if let Some(left) = args.left {
        config.capture.left = left;
    }
    if let Some(top) = args.top {
        config.capture.top = top;
    }
    if let Some(poll_interval) = args.poll_interval {
        config.agent.poll_interval_ms = poll_interval;
    }

    let region = config.region();
    info!(
        "게임 영역: ({}, {}) {}x{}",
        region.left, region.top, region.width, region.height
    );

    // ── 어댑터 생성 (DI 와이어링) ──

    let frames: Arc<dyn cardinal_core::ports::frame_source::FrameSource> =
        Arc::new(XcapFrameSource::new());

    let input: Arc<dyn InputDriver> = if args.dry_run {
        info!("드라이런 모드: 입력 주입 비활성화");
        Arc::new(NoOpInputDriver)
    } else {
        Arc::from(create_platform_input_driver())
    };
    info!("입력 드라이버 플랫폼: {}", input.platform());

    // ── 부트스트랩 (1회) ──

    if args.skip_bootstrap {
        info!("부트스트랩 생략");
    } else {
        SessionBootstrap::new(input.clone(), region, config.bootstrap.clone())
            .run()
            .await
            .context("세션 부트스트랩 실패")?;
    }

    // ── 제어 루프 ──

    let lifecycle = LifecycleManager::new();
    let control = ControlLoop::from_config(frames, input, &config);

    let shutdown_rx = lifecycle.subscribe();
    let runner = tokio::spawn(async move {
        control.run(shutdown_rx).await;
    });

    // OS 시그널 대기
    lifecycle.wait_for_signal().await;
    runner.await.context("제어 루프 태스크 join 실패")?;

    info!("Cardinal Bot 종료");
    Ok(())
}
