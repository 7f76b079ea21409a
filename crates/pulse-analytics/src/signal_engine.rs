//! 시그널 엔진.
//!
//! 종가 시계열과 패턴 감지 결과로부터 최종 신호, 신뢰도, 예상 가격을 계산합니다.
//!
//! # 계산 순서
//!
//! 1. 단기(5)/장기(20) 이동평균, 5봉 모멘텀, 20봉 변동계수
//! 2. 이동평균 밴드(±2%)로 기본 신호 결정
//! 3. 기본 신호가 HOLD일 때만 패턴 우세 방향으로 전환
//! 4. 신뢰도 = 50 + 이평 강도 + 모멘텀 강도 + 패턴 가산 - 변동성 감점 (50 ~ 95)
//! 5. 예상 가격 = 단기 이평 60% + 모멘텀 투영 40%

use pulse_core::{round2, PredictionResult, Signal, MAX_CONFIDENCE, MIN_CONFIDENCE};
use serde::{Deserialize, Serialize};

use crate::indicators::{
    ensure_len, trend::SmaParams, IndicatorResult, MomentumCalculator, TrendIndicators,
    VolatilityIndicators,
};
use crate::patterns::PatternFlags;

/// 시그널 엔진 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalParams {
    /// 단기 이동평균 기간
    pub short_window: usize,
    /// 장기 이동평균 기간 (최소 데이터 길이)
    pub long_window: usize,
    /// 모멘텀 기준 봉 (끝에서 몇 번째)
    pub momentum_lookback: usize,
    /// 결과에 포함할 이력 길이
    pub history_len: usize,
    /// 매수 밴드 (단기 > 장기 × 값)
    pub buy_band: f64,
    /// 매도 밴드 (단기 < 장기 × 값)
    pub sell_band: f64,
    /// 이평 괴리 가중치
    pub ma_weight: f64,
    /// 이평 강도 상한
    pub ma_cap: f64,
    /// 모멘텀 가중치
    pub momentum_weight: f64,
    /// 모멘텀 강도 상한
    pub momentum_cap: f64,
    /// 패턴 1개당 가산점
    pub pattern_weight: i64,
    /// 패턴 가산 절대값 상한
    pub pattern_cap: i64,
    /// 변동성 가중치
    pub volatility_weight: f64,
    /// 변동성 감점 상한
    pub volatility_cap: f64,
    /// 신뢰도 하한 (시작값)
    pub min_confidence: u8,
    /// 신뢰도 상한
    pub max_confidence: u8,
    /// 예상 가격의 단기 이평 비중
    pub ma_projection_weight: f64,
    /// 예상 가격의 모멘텀 투영 비중
    pub momentum_projection_weight: f64,
    /// 모멘텀 투영 감쇠
    pub momentum_damping: f64,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            short_window: 5,
            long_window: 20,
            momentum_lookback: 5,
            history_len: pulse_core::HISTORY_LEN,
            buy_band: 1.02,
            sell_band: 0.98,
            ma_weight: 200.0,
            ma_cap: 30.0,
            momentum_weight: 100.0,
            momentum_cap: 20.0,
            pattern_weight: 5,
            pattern_cap: 15,
            volatility_weight: 20.0,
            volatility_cap: 10.0,
            min_confidence: MIN_CONFIDENCE,
            max_confidence: MAX_CONFIDENCE,
            ma_projection_weight: 0.6,
            momentum_projection_weight: 0.4,
            momentum_damping: 0.5,
        }
    }
}

impl SignalParams {
    /// 엔진이 요구하는 최소 종가 수.
    pub fn required_len(&self) -> usize {
        self.long_window
            .max(self.short_window)
            .max(self.momentum_lookback)
    }
}

/// 시그널 계산 중간값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    /// 단기 이동평균
    pub ma_short: f64,
    /// 장기 이동평균
    pub ma_long: f64,
    /// (단기 - 장기) / 장기
    pub ma_diff: f64,
    /// 5봉 변화율
    pub momentum: f64,
    /// 20봉 변동계수
    pub volatility: f64,
    /// 감지된 강세 패턴 수
    pub bullish_count: u32,
    /// 감지된 약세 패턴 수
    pub bearish_count: u32,
    /// 이동평균만으로 결정된 신호
    pub base_signal: Signal,
    /// 패턴 보정 후 최종 신호
    pub signal: Signal,
}

/// 시그널 엔진.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalEngine {
    params: SignalParams,
    trend: TrendIndicators,
    momentum: MomentumCalculator,
    volatility: VolatilityIndicators,
}

impl SignalEngine {
    /// 기본 파라미터로 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 파라미터를 지정해 생성.
    pub fn with_params(params: SignalParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// 현재 파라미터.
    pub fn params(&self) -> &SignalParams {
        &self.params
    }

    /// 지표와 신호를 계산합니다 (결과 레코드는 만들지 않음).
    pub fn analyze(&self, prices: &[f64], flags: &PatternFlags) -> IndicatorResult<IndicatorSnapshot> {
        let p = &self.params;
        ensure_len(prices, p.required_len())?;

        let ma_short = self.trend.sma(prices, SmaParams { period: p.short_window })?;
        let ma_long = self.trend.sma(prices, SmaParams { period: p.long_window })?;
        let momentum = self.momentum.rate_of_change(prices, p.momentum_lookback)?;
        let volatility = self
            .volatility
            .coefficient_of_variation(prices, p.long_window)?;

        let bullish_count = flags.bullish_count();
        let bearish_count = flags.bearish_count();

        let ma_diff = (ma_short - ma_long) / ma_long;

        let base_signal = if ma_short > ma_long * p.buy_band {
            Signal::Buy
        } else if ma_short < ma_long * p.sell_band {
            Signal::Sell
        } else {
            Signal::Hold
        };

        // 패턴은 HOLD만 뒤집음
        let signal = match base_signal {
            Signal::Hold if bullish_count > bearish_count => Signal::Buy,
            Signal::Hold if bearish_count > bullish_count => Signal::Sell,
            other => other,
        };

        Ok(IndicatorSnapshot {
            ma_short,
            ma_long,
            ma_diff,
            momentum,
            volatility,
            bullish_count,
            bearish_count,
            base_signal,
            signal,
        })
    }

    /// 중간값에서 신뢰도를 계산합니다.
    ///
    /// 가산/감점은 순서대로 합산한 뒤 소수점 이하를 버리고 범위로 자릅니다.
    pub fn confidence(&self, snapshot: &IndicatorSnapshot) -> u8 {
        let p = &self.params;

        let ma_strength = (snapshot.ma_diff.abs() * p.ma_weight).min(p.ma_cap);
        let momentum_strength = (snapshot.momentum.abs() * p.momentum_weight).min(p.momentum_cap);
        let pattern_boost = ((i64::from(snapshot.bullish_count)
            - i64::from(snapshot.bearish_count))
            * p.pattern_weight)
            .clamp(-p.pattern_cap, p.pattern_cap);
        let volatility_penalty = (snapshot.volatility * p.volatility_weight).min(p.volatility_cap);

        let mut confidence = f64::from(p.min_confidence);
        confidence += ma_strength;
        confidence += momentum_strength;
        confidence += pattern_boost as f64;
        confidence -= volatility_penalty;

        let truncated = confidence.trunc();
        if truncated.is_nan() {
            return p.min_confidence;
        }
        truncated.clamp(f64::from(p.min_confidence), f64::from(p.max_confidence)) as u8
    }

    /// 예측 결과를 계산합니다.
    pub fn score(&self, prices: &[f64], flags: &PatternFlags) -> IndicatorResult<PredictionResult> {
        self.score_with_snapshot(prices, flags)
            .map(|(result, _)| result)
    }

    /// 예측 결과와 중간값을 함께 계산합니다.
    pub fn score_with_snapshot(
        &self,
        prices: &[f64],
        flags: &PatternFlags,
    ) -> IndicatorResult<(PredictionResult, IndicatorSnapshot)> {
        let snapshot = self.analyze(prices, flags)?;
        let p = &self.params;

        // analyze에서 길이를 확인했으므로 비어 있지 않음
        let current_price = prices[prices.len() - 1];
        let history = prices[prices.len().saturating_sub(p.history_len)..]
            .iter()
            .map(|v| round2(*v))
            .collect();

        let momentum_projection = current_price * (1.0 + snapshot.momentum * p.momentum_damping);
        let predicted_price = round2(
            snapshot.ma_short * p.ma_projection_weight
                + momentum_projection * p.momentum_projection_weight,
        );

        let result = PredictionResult {
            current_price: round2(current_price),
            predicted_price,
            signal: snapshot.signal,
            confidence: self.confidence(&snapshot),
            history,
            patterns_detected: snapshot.bullish_count + snapshot.bearish_count,
        };

        Ok((result, snapshot))
    }
}
