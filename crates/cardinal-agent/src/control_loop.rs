//! 제어 루프.
//!
//! 틱 하나 = 중앙 정렬 대기 → 방향 결정 → 행동. 프레임은 틱 스코프의
//! 리소스 가드라서 조기 반환/에러 경로를 포함한 모든 탈출 경로에서
//! 정확히 한 번 해제된다. 루프는 외부 종료 신호까지 무한 반복하며,
//! 틱 내부 에러는 로깅 후 해당 틱만 버린다.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use cardinal_core::config::BotConfig;
use cardinal_core::error::BotError;
use cardinal_core::models::direction::{Direction, Openings};
use cardinal_core::models::geometry::{ProbeLayout, Region};
use cardinal_core::ports::frame_source::FrameSource;
use cardinal_core::ports::input_driver::InputDriver;

use crate::classifier::ObstacleClassifier;
use crate::policy;

/// 틱 하나의 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// 사각형이 아직 중앙에 없음 — 프레임을 버리고 다시 폴링
    NotCentered,
    /// 열린 방향으로 키를 주입함
    Moved(Direction),
    /// 4방향 모두 차단 — 입력 주입 생략 (에러 아님)
    Blocked,
}

/// 제어 루프 — 인지-판단 사이클 오케스트레이션
pub struct ControlLoop {
    frames: Arc<dyn FrameSource>,
    input: Arc<dyn InputDriver>,
    classifier: ObstacleClassifier,
    region: Region,
    probes: ProbeLayout,
    poll_interval: Duration,
}

impl ControlLoop {
    /// 새 제어 루프 생성
    pub fn new(
        frames: Arc<dyn FrameSource>,
        input: Arc<dyn InputDriver>,
        classifier: ObstacleClassifier,
        region: Region,
        probes: ProbeLayout,
        poll_interval: Duration,
    ) -> Self {
        Self {
            frames,
            input,
            classifier,
            region,
            probes,
            poll_interval,
        }
    }

    /// 설정에서 제어 루프 생성
    pub fn from_config(
        frames: Arc<dyn FrameSource>,
        input: Arc<dyn InputDriver>,
        config: &BotConfig,
    ) -> Self {
        Self::new(
            frames,
            input,
            ObstacleClassifier::from_config(&config.game),
            config.region(),
            config.game.probes,
            config.poll_interval(),
        )
    }

    /// 종료 신호까지 루프 실행.
    ///
    /// 종료 신호는 매 틱 시작 시 확인하므로 중단 지연은 폴링 한 회로
    /// 제한된다. 틱 에러는 전파하지 않는다 — 로깅 후 다음 틱에서
    /// 중앙 정렬 대기부터 다시 시작한다.
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) {
        info!(
            "제어 루프 시작: 영역 ({}, {}) {}x{}, 폴링 {}ms",
            self.region.left,
            self.region.top,
            self.region.width,
            self.region.height,
            self.poll_interval.as_millis()
        );

        let mut ticks: u64 = 0;
        let mut moves: u64 = 0;
        let mut abandoned: u64 = 0;
        // 마지막 이동 방향 — 결정에는 쓰지 않고 로깅 전용
        let mut last_direction: Option<Direction> = None;

        loop {
            if *shutdown_rx.borrow() {
                break;
            }

            ticks += 1;
            match self.tick().await {
                Ok(TickOutcome::NotCentered) => {}
                Ok(TickOutcome::Moved(direction)) => {
                    moves += 1;
                    last_direction = Some(direction);
                    debug!(%direction, "이동");
                }
                Ok(TickOutcome::Blocked) => {
                    debug!("열린 방향 없음 — 입력 생략");
                }
                Err(e) => {
                    abandoned += 1;
                    warn!("틱 중단: {e}");
                }
            }

            if self.poll_interval.is_zero() {
                // busy-poll: 지연 없이 스케줄러에만 양보
                tokio::task::yield_now().await;
            } else {
                tokio::select! {
                    _ = tokio::time::sleep(self.poll_interval) => {}
                    _ = shutdown_rx.changed() => {}
                }
            }
        }

        info!(
            ticks,
            moves,
            abandoned,
            last_direction = last_direction.map(|d| d.key_name()).unwrap_or("-"),
            "제어 루프 종료"
        );
    }

    /// 틱 하나 수행.
    ///
    /// 캡처한 프레임은 이 함수의 스코프에 묶여 있어 어떤 반환 경로로도
    /// 누수되지 않는다. 중앙 정렬 전이면 벽 샘플 없이 바로 버린다.
    async fn tick(&self) -> Result<TickOutcome, BotError> {
        // 중앙 정렬 대기
        let frame = self.frames.capture(self.region).await?;
        let center = frame.sample(self.probes.center)?;
        if !self.classifier.is_centered(center) {
            return Ok(TickOutcome::NotCentered);
        }

        // 방향 결정 — 같은 프레임에서 4방향 프로브 샘플
        let openings = Openings {
            left: self.classifier.is_open(frame.sample(self.probes.left)?),
            right: self.classifier.is_open(frame.sample(self.probes.right)?),
            up: self.classifier.is_open(frame.sample(self.probes.up)?),
            down: self.classifier.is_open(frame.sample(self.probes.down)?),
        };

        // 행동
        match policy::decide(openings) {
            Some(direction) => {
                self.input.key_tap(direction.key_name()).await?;
                Ok(TickOutcome::Moved(direction))
            }
            None => Ok(TickOutcome::Blocked),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use cardinal_core::models::color::Rgb;
    use cardinal_core::models::frame::Frame;
    use cardinal_core::models::geometry::{GAME_HEIGHT, GAME_WIDTH};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const SQUARE: Rgb = Rgb::new(249, 8, 42);
    const WALL: Rgb = Rgb::new(176, 1, 26);
    const OPEN: Rgb = Rgb::new(30, 30, 30);

    /// 프레임 스크립트 — 틱 하나가 보게 될 화면
    #[derive(Clone, Copy)]
    enum Script {
        /// 프로브 5점의 색을 지정한 550x550 프레임
        Colors {
            center: Rgb,
            left: Rgb,
            right: Rgb,
            up: Rgb,
            down: Rgb,
        },
        /// 캡처 자체가 실패
        CaptureFail,
        /// 프로브 좌표가 벗어나는 작은 프레임 (샘플 에러 유도)
        Tiny,
    }

    fn not_centered() -> Script {
        Script::Colors {
            center: OPEN,
            left: OPEN,
            right: OPEN,
            up: OPEN,
            down: OPEN,
        }
    }

    /// 스크립트를 재생하는 프레임 소스.
    ///
    /// 건네준 프레임 수와 해제된 프레임 수를 센다 (리소스 수지 검증용).
    /// 스크립트 소진 후에는 중앙 미정렬 프레임을 무한 반복한다.
    struct ScriptedFrameSource {
        scripts: Mutex<VecDeque<Script>>,
        handed_out: AtomicUsize,
        released: Arc<AtomicUsize>,
    }

    impl ScriptedFrameSource {
        fn new(scripts: Vec<Script>) -> Self {
            Self {
                scripts: Mutex::new(scripts.into()),
                handed_out: AtomicUsize::new(0),
                released: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn handed_out(&self) -> usize {
            self.handed_out.load(Ordering::SeqCst)
        }

        fn released(&self) -> usize {
            self.released.load(Ordering::SeqCst)
        }

        fn build_frame(&self, script: Script) -> Result<Frame, BotError> {
            let probes = ProbeLayout::default();
            let (width, height, pixels) = match script {
                Script::Colors {
                    center,
                    left,
                    right,
                    up,
                    down,
                } => {
                    let mut pixels = vec![OPEN.to_packed(); (GAME_WIDTH * GAME_HEIGHT) as usize];
                    let mut put = |p: cardinal_core::models::geometry::Point, c: Rgb| {
                        pixels[(p.y * GAME_WIDTH + p.x) as usize] = c.to_packed();
                    };
                    put(probes.center, center);
                    put(probes.left, left);
                    put(probes.right, right);
                    put(probes.up, up);
                    put(probes.down, down);
                    (GAME_WIDTH, GAME_HEIGHT, pixels)
                }
                Script::Tiny => (10, 10, vec![OPEN.to_packed(); 100]),
                Script::CaptureFail => unreachable!(),
            };

            self.handed_out.fetch_add(1, Ordering::SeqCst);
            let released = self.released.clone();
            Ok(Frame::from_packed(width, height, pixels)?.with_release_hook(move || {
                released.fetch_add(1, Ordering::SeqCst);
            }))
        }
    }

    #[async_trait]
    impl FrameSource for ScriptedFrameSource {
        async fn capture(&self, _region: Region) -> Result<Frame, BotError> {
            let script = self
                .scripts
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(not_centered);
            match script {
                Script::CaptureFail => Err(BotError::Capture("백엔드 실패".to_string())),
                other => self.build_frame(other),
            }
        }
    }

    /// 키/클릭 호출을 기록하는 입력 드라이버
    struct RecordingInputDriver {
        events: Mutex<Vec<String>>,
    }

    impl RecordingInputDriver {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }

        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl InputDriver for RecordingInputDriver {
        async fn mouse_click(&self, _button: &str, _x: i32, _y: i32) -> Result<(), BotError> {
            Ok(())
        }

        async fn key_press(&self, key: &str) -> Result<(), BotError> {
            self.events.lock().unwrap().push(format!("press:{key}"));
            Ok(())
        }

        async fn key_release(&self, key: &str) -> Result<(), BotError> {
            self.events.lock().unwrap().push(format!("release:{key}"));
            Ok(())
        }

        fn platform(&self) -> &str {
            "test"
        }
    }

    fn build_loop(
        scripts: Vec<Script>,
        poll_interval: Duration,
    ) -> (ControlLoop, Arc<ScriptedFrameSource>, Arc<RecordingInputDriver>) {
        let frames = Arc::new(ScriptedFrameSource::new(scripts));
        let input = Arc::new(RecordingInputDriver::new());
        let control = ControlLoop::new(
            frames.clone(),
            input.clone(),
            ObstacleClassifier::new(SQUARE, WALL),
            Region::game(0, 0),
            ProbeLayout::default(),
            poll_interval,
        );
        (control, frames, input)
    }

    fn centered(left: Rgb, right: Rgb, up: Rgb, down: Rgb) -> Script {
        Script::Colors {
            center: SQUARE,
            left,
            right,
            up,
            down,
        }
    }

    #[tokio::test]
    async fn waits_for_center_then_decides() {
        // 3연속 미정렬 후 정렬 — 폐기/재시도 3회 뒤 결정으로 진행
        let (control, frames, _input) = build_loop(
            vec![
                not_centered(),
                not_centered(),
                not_centered(),
                centered(OPEN, WALL, WALL, WALL),
            ],
            Duration::ZERO,
        );

        for _ in 0..3 {
            assert_matches!(control.tick().await, Ok(TickOutcome::NotCentered));
        }
        assert_matches!(control.tick().await, Ok(TickOutcome::Moved(Direction::Left)));

        // 리소스 수지: 건네준 프레임 수 == 해제된 프레임 수
        assert_eq!(frames.handed_out(), 4);
        assert_eq!(frames.released(), 4);
    }

    #[tokio::test]
    async fn left_wall_right_open_presses_right_once() {
        let (control, frames, input) =
            build_loop(vec![centered(WALL, OPEN, WALL, WALL)], Duration::ZERO);

        assert_matches!(control.tick().await, Ok(TickOutcome::Moved(Direction::Right)));
        assert_eq!(
            input.events(),
            vec!["press:right".to_string(), "release:right".to_string()]
        );
        assert_eq!(frames.handed_out(), frames.released());
    }

    #[tokio::test]
    async fn all_walls_blocked_injects_nothing() {
        let (control, frames, input) =
            build_loop(vec![centered(WALL, WALL, WALL, WALL)], Duration::ZERO);

        assert_matches!(control.tick().await, Ok(TickOutcome::Blocked));
        assert!(input.events().is_empty());
        assert_eq!(frames.handed_out(), 1);
        assert_eq!(frames.released(), 1);
    }

    #[tokio::test]
    async fn sample_error_releases_frame() {
        // 프로브가 벗어나는 프레임 — 틱은 에러로 버려지지만 프레임은 해제된다
        let (control, frames, _input) = build_loop(vec![Script::Tiny], Duration::ZERO);

        assert_matches!(
            control.tick().await,
            Err(BotError::SampleOutOfBounds { .. })
        );
        assert_eq!(frames.handed_out(), 1);
        assert_eq!(frames.released(), 1);
    }

    #[tokio::test]
    async fn capture_error_propagates_without_leak() {
        let (control, frames, _input) = build_loop(vec![Script::CaptureFail], Duration::ZERO);

        assert_matches!(control.tick().await, Err(BotError::Capture(_)));
        assert_eq!(frames.handed_out(), 0);
        assert_eq!(frames.released(), 0);
    }

    #[tokio::test]
    async fn run_recovers_from_abandoned_tick() {
        // 캡처 실패 틱 이후 루프가 계속 돌아 이동까지 도달한다
        let (control, _frames, input) = build_loop(
            vec![Script::CaptureFail, centered(WALL, OPEN, WALL, WALL)],
            Duration::from_millis(1),
        );
        let control = Arc::new(control);
        let input_probe = input.clone();

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let runner = {
            let control = control.clone();
            tokio::spawn(async move { control.run(shutdown_rx).await })
        };

        tokio::time::timeout(Duration::from_secs(5), async {
            while input_probe.events().len() < 2 {
                tokio::time::sleep(Duration::from_millis(2)).await;
            }
        })
        .await
        .expect("이동 입력이 주입되어야 함");

        shutdown_tx.send(true).unwrap();
        runner.await.unwrap();
        assert_eq!(input.events()[0], "press:right");
    }

    #[tokio::test]
    async fn shutdown_during_busy_poll_exits_promptly() {
        // 스크립트 없음 → 중앙 미정렬 프레임으로 무한 busy-poll
        let (control, frames, _input) = build_loop(vec![], Duration::ZERO);
        let control = Arc::new(control);

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let runner = {
            let control = control.clone();
            tokio::spawn(async move { control.run(shutdown_rx).await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        shutdown_tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(1), runner)
            .await
            .expect("종료 신호 후 제한 시간 내 종료")
            .unwrap();

        // 진행 중이던 프레임 포함 전부 해제됨
        assert_eq!(frames.handed_out(), frames.released());
    }
}
