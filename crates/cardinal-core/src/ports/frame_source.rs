//! 프레임 캡처 포트.
//!
//! 픽셀이 물리적으로 어떻게 획득되는지는 어댑터의 책임이다.
//! 코어 루프는 영역 하나를 넘기고 틱 스코프의 [`Frame`]을 돌려받는다.

use async_trait::async_trait;

use crate::error::BotError;
use crate::models::frame::Frame;
use crate::models::geometry::Region;

/// 프레임 캡처 — 화면 영역 스냅샷 인터페이스
///
/// 구현체: `XcapFrameSource` (실제 캡처), 테스트용 스크립트 소스
#[async_trait]
pub trait FrameSource: Send + Sync {
    /// 지정 영역의 프레임 하나를 캡처
    ///
    /// 반환된 프레임은 호출한 틱이 끝나기 전에 drop되어야 한다.
    async fn capture(&self, region: Region) -> Result<Frame, BotError>;
}
