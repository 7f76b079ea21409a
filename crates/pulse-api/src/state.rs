//! 애플리케이션 상태.
//!
//! 모든 핸들러가 `Arc<AppState>`로 공유합니다. 가변 상태는 없습니다.

use std::sync::Arc;
use std::time::{Duration, Instant};

use pulse_analytics::Predictor;
use pulse_core::ServerConfig;
use pulse_data::{Lookback, PriceSource};

/// 공유 애플리케이션 상태.
#[derive(Clone)]
pub struct AppState {
    /// 예측기
    pub predictor: Predictor,
    /// 예측 1건 처리 제한 시간
    pub predict_timeout: Duration,
    /// API 버전
    pub version: String,
    /// 서버 시작 시각
    pub started_at: Instant,
}

impl AppState {
    /// 데이터 제공자와 서버 설정으로 상태를 생성합니다.
    pub fn new(source: Arc<dyn PriceSource>, lookback: Lookback, server: &ServerConfig) -> Self {
        Self {
            predictor: Predictor::new(source, lookback),
            predict_timeout: Duration::from_secs(server.predict_timeout_secs),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: Instant::now(),
        }
    }

    /// 예측 제한 시간을 변경합니다.
    pub fn with_predict_timeout(mut self, timeout: Duration) -> Self {
        self.predict_timeout = timeout;
        self
    }

    /// 서버 업타임 (초).
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// 테스트용 상태 생성.
#[cfg(test)]
pub fn create_test_state(source: pulse_data::InMemoryPriceSource) -> AppState {
    AppState::new(
        Arc::new(source),
        Lookback::default(),
        &ServerConfig::default(),
    )
}
