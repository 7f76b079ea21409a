//! 데이터 Provider 모듈.
//!
//! 심볼과 조회 기간을 받아 시간순 종가 시계열을 반환하는 Provider들을 정의합니다.
//!
//! ## Yahoo Finance
//! - `YahooChartClient`: v8 chart API 클라이언트 (조정 종가 우선)
//!
//! ## 메모리
//! - `InMemoryPriceSource`: 고정 시계열 제공자 (테스트, 오프라인 실행)

pub mod memory;
pub mod yahoo;

use async_trait::async_trait;
use pulse_core::{DataConfig, PredictResult, PriceSeries, Symbol};

pub use memory::InMemoryPriceSource;
pub use yahoo::YahooChartClient;

/// 조회 기간과 봉 간격.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookback {
    /// Yahoo range 형식 (예: "6mo")
    pub range: String,
    /// Yahoo interval 형식 (예: "1d")
    pub interval: String,
}

impl Lookback {
    /// 새 조회 기간을 생성합니다.
    pub fn new(range: impl Into<String>, interval: impl Into<String>) -> Self {
        Self {
            range: range.into(),
            interval: interval.into(),
        }
    }

    /// 최근 6개월 일봉.
    pub fn six_months_daily() -> Self {
        Self::new("6mo", "1d")
    }

    /// 데이터 설정에서 조회 기간을 생성합니다.
    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(config.range.clone(), config.interval.clone())
    }
}

impl Default for Lookback {
    fn default() -> Self {
        Self::six_months_daily()
    }
}

/// 종가 시계열 제공자.
///
/// 구현체는 알 수 없는 심볼이나 빈 응답을 `PredictError::NoData`로,
/// 그 외 조회 실패를 `PredictError::Fetch`로 구분해서 반환해야 합니다.
/// 재시도는 구현체의 책임이 아닙니다.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// 로그에 표시할 제공자 이름.
    fn name(&self) -> &str;

    /// 시간순 (오래된 것부터) 종가를 조회합니다.
    async fn fetch_closes(&self, symbol: &Symbol, lookback: &Lookback)
        -> PredictResult<PriceSeries>;
}
