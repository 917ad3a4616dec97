//! 캡처 프레임.
//!
//! 한 틱에 스코프되는 캡처 스냅샷. 해제는 `Drop`으로 구조적으로 보장되어
//! 조기 반환 경로마다 수동 해제를 반복할 필요가 없다.

use crate::error::BotError;
use crate::models::color::Rgb;
use crate::models::geometry::Point;
use std::fmt;

/// 해제 훅 — 프레임 drop 시 정확히 한 번 호출된다
type ReleaseHook = Box<dyn FnOnce() + Send>;

/// 캡처된 프레임 하나.
///
/// 캡처 영역의 픽셀을 24비트 packed 값(`(r<<16)|(g<<8)|b`)으로 보관한다.
/// 소유권이 곧 리소스 수명: 스코프를 벗어나면 해제된다.
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    on_release: Option<ReleaseHook>,
}

impl Frame {
    /// packed 픽셀 버퍼에서 프레임 생성
    ///
    /// 버퍼 길이가 `width * height`와 다르면 에러.
    pub fn from_packed(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self, BotError> {
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(BotError::Internal(format!(
                "픽셀 버퍼 길이 불일치: {} != {}x{}",
                pixels.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
            on_release: None,
        })
    }

    /// 해제 관찰 훅 설치 (테스트의 리소스 수지 검증용)
    pub fn with_release_hook(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_release = Some(Box::new(hook));
        self
    }

    /// 지정 좌표의 픽셀 색상 추출.
    ///
    /// 좌표는 영역 원점 기준 상대 좌표. 고정 상수 좌표라도 신뢰하지 않고
    /// 경계를 검사한다 (`SampleOutOfBounds`). 부작용 없음.
    pub fn sample(&self, coord: Point) -> Result<Rgb, BotError> {
        if coord.x >= self.width || coord.y >= self.height {
            return Err(BotError::SampleOutOfBounds {
                x: coord.x,
                y: coord.y,
                width: self.width,
                height: self.height,
            });
        }
        let index = (coord.y as usize) * (self.width as usize) + (coord.x as usize);
        Ok(Rgb::from_packed(self.pixels[index]))
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        if let Some(hook) = self.on_release.take() {
            hook();
        }
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
