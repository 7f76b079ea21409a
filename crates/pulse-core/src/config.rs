//! 설정 관리.
//!
//! 설정은 다음 순서로 덮어씁니다:
//! 1. 코드 기본값
//! 2. TOML 설정 파일 (없으면 건너뜀)
//! 3. `PULSE__` 접두사 환경 변수 (예: `PULSE__DATA__RANGE=1y`)

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// 가격 데이터 소스 설정
    pub data: DataConfig,
    /// HTTP 서버 설정
    pub server: ServerConfig,
    /// 로깅 설정
    pub logging: LoggingConfig,
}

/// 가격 데이터 소스 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DataConfig {
    /// Yahoo Finance API 기본 URL
    pub base_url: String,
    /// 조회 기간 (Yahoo range 형식: 1mo, 6mo, 1y 등)
    pub range: String,
    /// 봉 간격 (Yahoo interval 형식: 1d, 1wk 등)
    pub interval: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
    /// HTTP User-Agent 헤더
    pub user_agent: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            range: "6mo".to_string(),
            interval: "1d".to_string(),
            timeout_secs: 15,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
                .to_string(),
        }
    }
}

/// HTTP 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
    /// 예측 요청 1건의 최대 처리 시간 (초)
    pub predict_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            predict_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// "host:port" 형식 바인딩 주소.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// `path`가 없으면 [`DEFAULT_CONFIG_PATH`]를 시도하며, 파일이 없어도 에러가 아닙니다.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));

        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            // 파일에서 로드
            .add_source(config::File::from(file).required(path.is_some()))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("PULSE")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
