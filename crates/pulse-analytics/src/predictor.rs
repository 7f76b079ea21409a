//! 예측 파이프라인.
//!
//! 심볼 검증 → 종가 조회 → 패턴 감지 → 신호 계산을 한 번에 수행합니다.
//! 상태를 갖지 않으므로 `Arc`로 공유해 여러 요청에서 동시에 사용할 수 있습니다.

use std::sync::Arc;

use pulse_core::{prediction_span, PredictResult, PredictionResult, Symbol};
use pulse_data::{Lookback, PriceSource};
use serde::Serialize;
use tracing::{debug, info, Instrument};

use crate::patterns::{PatternDetector, PatternFlags};
use crate::signal_engine::{IndicatorSnapshot, SignalEngine};

/// 중간값과 패턴을 포함한 예측 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedPrediction {
    /// 최종 예측 결과
    pub prediction: PredictionResult,
    /// 지표 중간값
    pub indicators: IndicatorSnapshot,
    /// 패턴별 감지 여부
    pub patterns: PatternFlags,
}

/// 예측기.
pub struct Predictor<S: PriceSource + ?Sized = dyn PriceSource> {
    source: Arc<S>,
    lookback: Lookback,
    detector: PatternDetector,
    engine: SignalEngine,
}

impl<S: PriceSource + ?Sized> Clone for Predictor<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            lookback: self.lookback.clone(),
            detector: self.detector,
            engine: self.engine,
        }
    }
}

impl<S: PriceSource + ?Sized> Predictor<S> {
    /// 새 예측기를 생성합니다.
    pub fn new(source: Arc<S>, lookback: Lookback) -> Self {
        Self {
            source,
            lookback,
            detector: PatternDetector::new(),
            engine: SignalEngine::new(),
        }
    }

    /// 원시 심볼 입력의 예측 결과를 계산합니다.
    pub async fn predict(&self, raw_symbol: &str) -> PredictResult<PredictionResult> {
        let symbol = Symbol::parse(raw_symbol)?;
        self.predict_symbol(&symbol).await
    }

    /// 검증된 심볼의 예측 결과를 계산합니다.
    pub async fn predict_symbol(&self, symbol: &Symbol) -> PredictResult<PredictionResult> {
        self.analyze(symbol)
            .await
            .map(|detailed| detailed.prediction)
    }

    /// 중간값과 패턴을 포함한 예측 결과를 계산합니다.
    ///
    /// 데이터가 비어 있으면 `NoData`, 20개 미만이면 `InsufficientData`입니다.
    pub async fn predict_detailed(&self, raw_symbol: &str) -> PredictResult<DetailedPrediction> {
        let symbol = Symbol::parse(raw_symbol)?;
        self.analyze(&symbol).await
    }

    async fn analyze(&self, symbol: &Symbol) -> PredictResult<DetailedPrediction> {
        let span = prediction_span!(symbol, self.source.name());
        self.run(symbol).instrument(span).await
    }

    async fn run(&self, symbol: &Symbol) -> PredictResult<DetailedPrediction> {
        info!(asset_class = %symbol.asset_class(), "Fetching data for {}...", symbol);
        let series = self.source.fetch_closes(symbol, &self.lookback).await?;
        let prices = series.as_slice();
        debug!(bars = prices.len(), "Close series loaded");

        let patterns = self.detector.detect(prices);
        let (prediction, indicators) = self
            .engine
            .score_with_snapshot(prices, &patterns)
            .map_err(|e| e.for_symbol(symbol))?;

        info!(
            signal = %prediction.signal,
            confidence = prediction.confidence,
            patterns = prediction.patterns_detected,
            "Prediction complete"
        );

        Ok(DetailedPrediction {
            prediction,
            indicators,
            patterns,
        })
    }
}
