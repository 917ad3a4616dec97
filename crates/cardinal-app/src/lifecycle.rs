//! 라이프사이클 관리.
//!
//! 제어 루프에는 프로그램적 종료 조건이 없다 — 의도된 유일한 종료 경로는
//! 운영자의 OS 시그널이다. 시그널 수신을 watch 채널 하나로 루프에 전파한다.

use tokio::sync::watch;
use tracing::info;

/// 종료 신호 전파기.
///
/// 송신 측만 보관하고 수신기는 [`subscribe`](Self::subscribe)로 만든다.
pub struct LifecycleManager {
    shutdown_tx: watch::Sender<bool>,
}

impl LifecycleManager {
    /// 새 라이프사이클 관리자 생성 (아직 종료 신호 없음)
    pub fn new() -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self { shutdown_tx }
    }

    /// 제어 루프에 넘길 종료 수신기 생성
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.shutdown_tx.subscribe()
    }

    /// OS 시그널(SIGINT, SIGTERM)을 기다렸다가 종료 신호를 발송
    pub async fn wait_for_signal(&self) {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigint = signal(SignalKind::interrupt()).expect("SIGINT 핸들러 등록 실패");
            let mut sigterm = signal(SignalKind::terminate()).expect("SIGTERM 핸들러 등록 실패");

            tokio::select! {
                _ = sigint.recv() => {
                    info!("SIGINT 수신");
                }
                _ = sigterm.recv() => {
                    info!("SIGTERM 수신");
                }
            }
        }

        #[cfg(not(unix))]
        {
            tokio::signal::ctrl_c()
                .await
                .expect("Ctrl+C 핸들러 등록 실패");
            info!("Ctrl+C 수신");
        }

        self.shutdown();
    }

    fn shutdown(&self) {
        info!("종료 신호 발송");
        let _ = self.shutdown_tx.send(true);
    }
}
