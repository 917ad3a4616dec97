//! RGB 색상.
//!
//! 분류는 정확한 채널 일치로만 수행한다 (허용 오차 없음).
//! 렌더링 변형(스케일링, 색 프로파일, 오버레이)이 있으면 에러 없이
//! 오분류가 발생하는 알려진 취약점이다 — 실제 디스플레이 기준 캘리브레이션이
//! 필요한 미해결 항목으로 남겨둔다.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 8비트 3채널 RGB 색상
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// 빨강 채널
    pub r: u8,
    /// 초록 채널
    pub g: u8,
    /// 파랑 채널
    pub b: u8,
}

impl Rgb {
    /// 채널값으로 색상 생성
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 24비트 packed 값에서 언팩
    ///
    /// 비트 레이아웃은 캡처 백엔드와 공유하는 고정 규약:
    /// 비트 16–23 = R, 8–15 = G, 0–7 = B.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// 24비트 packed 값으로 팩 (from_packed의 역연산)
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
