//! 스크린 캡처.
//!
//! xcap 기반 멀티모니터 캡처. 영역 원점을 포함하는 모니터를 찾아
//! 전체 모니터 이미지를 캡처한 뒤 게임 영역만 잘라 packed 픽셀로 변환한다.

use async_trait::async_trait;
use image::RgbaImage;
use tracing::debug;
use xcap::Monitor;

use cardinal_core::error::BotError;
use cardinal_core::models::color::Rgb;
use cardinal_core::models::frame::Frame;
use cardinal_core::models::geometry::Region;
use cardinal_core::ports::frame_source::FrameSource;

/// 프레임 소스 — xcap 기반
pub struct XcapFrameSource;

impl XcapFrameSource {
    /// 새 캡처 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 영역 원점을 포함하는 모니터 반환 (없으면 주 모니터 폴백)
    fn find_monitor(region: Region) -> Result<Monitor, BotError> {
        let monitors =
            Monitor::all().map_err(|e| BotError::Capture(format!("모니터 목록 조회 실패: {e}")))?;

        monitors
            .into_iter()
            .find(|m| {
                let x = m.x().unwrap_or(0);
                let y = m.y().unwrap_or(0);
                let w = m.width().unwrap_or(0) as i32;
                let h = m.height().unwrap_or(0) as i32;
                region.left >= x && region.left < x + w && region.top >= y && region.top < y + h
            })
            .or_else(|| {
                Monitor::all()
                    .ok()?
                    .into_iter()
                    .find(|m| m.is_primary().unwrap_or(false))
            })
            .ok_or_else(|| BotError::Capture("영역을 포함하는 모니터를 찾을 수 없음".to_string()))
    }

    /// 모니터 이미지에서 영역을 잘라 packed 픽셀 버퍼로 변환
    fn crop_region(
        image: &RgbaImage,
        monitor_x: i32,
        monitor_y: i32,
        region: Region,
    ) -> Result<Vec<u32>, BotError> {
        let offset_x = region.left - monitor_x;
        let offset_y = region.top - monitor_y;
        if offset_x < 0
            || offset_y < 0
            || (offset_x as u32 + region.width) > image.width()
            || (offset_y as u32 + region.height) > image.height()
        {
            return Err(BotError::Capture(format!(
                "영역이 모니터 이미지 밖: 오프셋 ({offset_x}, {offset_y}), 이미지 {}x{}",
                image.width(),
                image.height()
            )));
        }

        let mut pixels = Vec::with_capacity((region.width * region.height) as usize);
        for y in 0..region.height {
            for x in 0..region.width {
                let p = image.get_pixel(offset_x as u32 + x, offset_y as u32 + y);
                pixels.push(Rgb::new(p[0], p[1], p[2]).to_packed());
            }
        }
        Ok(pixels)
    }
}

impl Default for XcapFrameSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FrameSource for XcapFrameSource {
    async fn capture(&self, region: Region) -> Result<Frame, BotError> {
        let monitor = Self::find_monitor(region)?;
        let monitor_x = monitor.x().unwrap_or(0);
        let monitor_y = monitor.y().unwrap_or(0);

        let image = monitor
            .capture_image()
            .map_err(|e| BotError::Capture(format!("스크린 캡처 실패: {e}")))?;

        debug!(
            "모니터 캡처 완료: {}x{}, 영역 ({}, {}) {}x{}",
            image.width(),
            image.height(),
            region.left,
            region.top,
            region.width,
            region.height
        );

        let pixels = Self::crop_region(&image, monitor_x, monitor_y, region)?;
        Frame::from_packed(region.width, region.height, pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardinal_core::models::geometry::Point;

    fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, image::Rgba(rgba))
    }

    #[test]
    fn crop_packs_rgb_channels() {
        let mut image = solid_image(100, 100, [10, 20, 30, 255]);
        image.put_pixel(15, 25, image::Rgba([249, 8, 42, 255]));

        let region = Region {
            left: 10,
            top: 20,
            width: 50,
            height: 40,
        };
        let pixels = XcapFrameSource::crop_region(&image, 0, 0, region).unwrap();
        let frame = Frame::from_packed(region.width, region.height, pixels).unwrap();

        assert_eq!(frame.sample(Point::new(0, 0)).unwrap(), Rgb::new(10, 20, 30));
        // 영역 상대 좌표 (15-10, 25-20)
        assert_eq!(frame.sample(Point::new(5, 5)).unwrap(), Rgb::new(249, 8, 42));
    }

    #[test]
    fn crop_respects_monitor_offset() {
        let mut image = solid_image(60, 60, [0, 0, 0, 255]);
        image.put_pixel(0, 0, image::Rgba([1, 2, 3, 255]));

        // 모니터 원점 (100, 200), 영역 원점 동일 → 오프셋 (0, 0)
        let region = Region {
            left: 100,
            top: 200,
            width: 10,
            height: 10,
        };
        let pixels = XcapFrameSource::crop_region(&image, 100, 200, region).unwrap();
        assert_eq!(Rgb::from_packed(pixels[0]), Rgb::new(1, 2, 3));
    }

    #[test]
    fn crop_out_of_monitor_is_error() {
        let image = solid_image(60, 60, [0, 0, 0, 255]);
        let region = Region {
            left: 50,
            top: 0,
            width: 20,
            height: 20,
        };
        assert!(XcapFrameSource::crop_region(&image, 0, 0, region).is_err());

        let negative = Region {
            left: -5,
            top: 0,
            width: 10,
            height: 10,
        };
        assert!(XcapFrameSource::crop_region(&image, 0, 0, negative).is_err());
    }
}
