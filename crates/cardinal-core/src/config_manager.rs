//! 설정 파일 관리.
//!
//! 플랫폼별 설정 디렉토리의 JSON 파일에서 설정을 로드한다 (없으면 기본값 생성).
//! 설정은 부트스트랩 이후 불변이므로 런타임 변경 API는 없다 — 값을 바꾸려면
//! 파일을 고치고 재시작한다.

use crate::config::BotConfig;
use crate::error::BotError;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 설정 파일 이름
const CONFIG_FILE_NAME: &str = "config.json";

/// 설정 관리자 — 시작 시 1회 로드
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// 로드된 설정 (이후 불변)
    config: BotConfig,
    /// 설정 파일 경로
    config_path: PathBuf,
}

impl ConfigManager {
    /// 플랫폼 기본 경로에서 설정 로드
    ///
    /// 설정 파일이 없으면 기본 설정을 생성하고 저장한다.
    pub fn new() -> Result<Self, BotError> {
        let config_path = Self::default_config_path()?;
        Self::with_path(config_path)
    }

    /// 지정된 경로로 설정 로드
    pub fn with_path(config_path: PathBuf) -> Result<Self, BotError> {
        // 설정 디렉토리 생성
        if let Some(parent) = config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    BotError::Config(format!(
                        "설정 디렉토리 생성 실패: {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
                info!("설정 디렉토리 생성: {}", parent.display());
            }
        }

        // 설정 파일 로드 또는 기본값 생성
        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            let default_config = BotConfig::default_config();
            Self::save_to_file(&config_path, &default_config)?;
            info!("기본 설정 파일 생성: {}", config_path.display());
            default_config
        };

        Ok(Self {
            config,
            config_path,
        })
    }

    /// 로드된 설정 반환 (복제본)
    pub fn get(&self) -> BotConfig {
        self.config.clone()
    }

    /// 설정 파일 경로 반환
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// 플랫폼별 기본 설정 파일 경로
    fn default_config_path() -> Result<PathBuf, BotError> {
        let dirs = ProjectDirs::from("com", "pseudotop", "cardinal-bot")
            .ok_or_else(|| BotError::Config("설정 디렉토리를 결정할 수 없습니다".to_string()))?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// 파일에서 설정 로드
    fn load_from_file(path: &Path) -> Result<BotConfig, BotError> {
        let content = fs::read_to_string(path).map_err(|e| {
            BotError::Config(format!("설정 파일 읽기 실패: {}: {}", path.display(), e))
        })?;

        let config: BotConfig = serde_json::from_str(&content).map_err(|e| {
            BotError::Config(format!("설정 파일 파싱 실패: {}: {}", path.display(), e))
        })?;

        debug!("설정 파일 로드 완료: {}", path.display());
        Ok(config)
    }

    /// 파일에 설정 저장 (기본 설정 파일 최초 생성용)
    fn save_to_file(path: &Path, config: &BotConfig) -> Result<(), BotError> {
        let content = serde_json::to_string_pretty(config)
            .map_err(|e| BotError::Config(format!("설정 직렬화 실패: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            BotError::Config(format!("설정 파일 저장 실패: {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}
