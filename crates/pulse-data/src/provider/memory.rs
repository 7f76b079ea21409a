//! 메모리 기반 종가 제공자.
//!
//! 네트워크 없이 고정된 시계열을 반환합니다. 등록되지 않은 심볼은 `NoData`입니다.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use pulse_core::{PredictError, PredictResult, PriceSeries, Symbol};

use super::{Lookback, PriceSource};

/// 고정 시계열 제공자.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPriceSource {
    series: HashMap<String, Vec<f64>>,
}

impl InMemoryPriceSource {
    /// 빈 제공자를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 심볼의 종가 시계열을 등록합니다 (오래된 것부터).
    ///
    /// 심볼은 대문자로 정규화해서 저장합니다.
    pub fn with_series(mut self, symbol: &str, closes: impl Into<Vec<f64>>) -> Self {
        self.insert(symbol, closes);
        self
    }

    /// 심볼의 종가 시계열을 등록하거나 교체합니다.
    pub fn insert(&mut self, symbol: &str, closes: impl Into<Vec<f64>>) {
        self.series.insert(symbol.to_ascii_uppercase(), closes.into());
    }

    /// 등록된 심볼 수.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// 등록된 심볼이 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[async_trait]
impl PriceSource for InMemoryPriceSource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_closes(
        &self,
        symbol: &Symbol,
        lookback: &Lookback,
    ) -> PredictResult<PriceSeries> {
        debug!(symbol = %symbol, range = %lookback.range, "Reading in-memory series");

        match self.series.get(symbol.as_str()) {
            Some(closes) if !closes.is_empty() => Ok(PriceSeries::new(closes.clone())),
            _ => Err(PredictError::NoData {
                symbol: symbol.to_string(),
            }),
        }
    }
}
