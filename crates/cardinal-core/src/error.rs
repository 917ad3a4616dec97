//! Cardinal Bot 핵심 에러 타입.
//!
//! 어댑터 crate(비전/자동화)는 백엔드 에러를 이 타입으로 래핑한다.
//! 루프 경로의 에러는 틱 경계에서 복구되며 프로세스를 종료시키지 않는다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 캡처, 샘플링, 입력 주입, 설정 등 도메인 공통 에러를 정의한다.
#[derive(Debug, Error)]
pub enum BotError {
    /// 캡처 백엔드 실패 (모니터 조회, 스크린 캡처)
    #[error("캡처 에러: {0}")]
    Capture(String),

    /// 샘플 좌표가 캡처 영역을 벗어남
    ///
    /// 고정 상수 좌표에서는 발생하지 않아야 하지만,
    /// 신뢰하지 않고 항상 검사한다.
    #[error("샘플 좌표 범위 초과 — ({x}, {y}), 프레임 {width}x{height}")]
    SampleOutOfBounds {
        /// 샘플 x 좌표 (영역 상대)
        x: u32,
        /// 샘플 y 좌표 (영역 상대)
        y: u32,
        /// 프레임 너비
        width: u32,
        /// 프레임 높이
        height: u32,
    },

    /// 입력 주입 실패 (OS가 합성 입력을 거부)
    #[error("입력 주입 에러: {0}")]
    Injection(String),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),
}
