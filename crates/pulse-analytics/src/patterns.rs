//! 차트 패턴 감지.
//!
//! 최근 최대 20개 종가에서 7가지 단순화된 차트 패턴을 찾습니다.
//! 각 패턴은 독립적으로 판정되며 동시에 여러 개가 감지될 수 있습니다.
//!
//! ## 강세 패턴
//! - **강세 장악형**: 하락 후 반등
//! - **컵 앤 핸들**: 저점 이후 좌측 고점 수준으로 회복
//! - **이중 바닥**: 비슷한 두 저점 이후 반등
//! - **상승 삼각형**: 격봉 샘플이 감소하지 않음
//!
//! ## 약세 패턴
//! - **약세 장악형**: 상승 후 반락
//! - **이중 천장**: 비슷한 두 고점 이후 하락
//! - **하락 삼각형**: 격봉 샘플이 증가하지 않음

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::fmt;

/// 패턴 감지에 필요한 최소 종가 수.
pub const MIN_PATTERN_LEN: usize = 5;

/// 패턴 감지에 사용하는 최근 종가 수.
pub const PATTERN_WINDOW: usize = 20;

/// 패턴 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternBias {
    /// 상승 시사
    Bullish,
    /// 하락 시사
    Bearish,
}

/// 차트 패턴 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartPatternType {
    /// Bullish Engulfing - 강세 장악형 (상승 반전)
    BullishEngulfing,
    /// Bearish Engulfing - 약세 장악형 (하락 반전)
    BearishEngulfing,
    /// Cup and Handle - 컵 앤 핸들 (상승 지속)
    CupHandle,
    /// Double Bottom - 이중 바닥 (상승 반전)
    DoubleBottom,
    /// Double Top - 이중 천장 (하락 반전)
    DoubleTop,
    /// Ascending Triangle - 상승 삼각형 (상승 지속)
    AscendingTriangle,
    /// Descending Triangle - 하락 삼각형 (하락 지속)
    DescendingTriangle,
}

impl ChartPatternType {
    /// 전체 패턴 (직렬화 순서).
    pub const ALL: [ChartPatternType; 7] = [
        ChartPatternType::BullishEngulfing,
        ChartPatternType::BearishEngulfing,
        ChartPatternType::CupHandle,
        ChartPatternType::DoubleBottom,
        ChartPatternType::DoubleTop,
        ChartPatternType::AscendingTriangle,
        ChartPatternType::DescendingTriangle,
    ];

    /// snake_case 이름.
    pub fn name(&self) -> &'static str {
        match self {
            ChartPatternType::BullishEngulfing => "bullish_engulfing",
            ChartPatternType::BearishEngulfing => "bearish_engulfing",
            ChartPatternType::CupHandle => "cup_handle",
            ChartPatternType::DoubleBottom => "double_bottom",
            ChartPatternType::DoubleTop => "double_top",
            ChartPatternType::AscendingTriangle => "ascending_triangle",
            ChartPatternType::DescendingTriangle => "descending_triangle",
        }
    }

    /// 패턴이 시사하는 방향.
    pub fn bias(&self) -> PatternBias {
        match self {
            ChartPatternType::BullishEngulfing
            | ChartPatternType::CupHandle
            | ChartPatternType::DoubleBottom
            | ChartPatternType::AscendingTriangle => PatternBias::Bullish,
            ChartPatternType::BearishEngulfing
            | ChartPatternType::DoubleTop
            | ChartPatternType::DescendingTriangle => PatternBias::Bearish,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ChartPatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 패턴별 감지 여부.
///
/// JSON으로는 `{"bullish_engulfing": 0, "cup_handle": 1, ...}` 형태로 직렬화됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternFlags {
    flags: [bool; 7],
}

impl PatternFlags {
    /// 모든 패턴이 꺼진 상태.
    pub fn none() -> Self {
        Self::default()
    }

    /// 패턴 감지 여부.
    pub fn get(&self, pattern: ChartPatternType) -> bool {
        self.flags[pattern.index()]
    }

    /// 패턴 값을 설정한 사본을 반환합니다.
    pub fn with(mut self, pattern: ChartPatternType, detected: bool) -> Self {
        self.flags[pattern.index()] = detected;
        self
    }

    /// (패턴, 감지 여부) 순회.
    pub fn iter(&self) -> impl Iterator<Item = (ChartPatternType, bool)> + '_ {
        ChartPatternType::ALL.iter().map(|p| (*p, self.get(*p)))
    }

    /// 감지된 패턴 목록.
    pub fn detected(&self) -> Vec<ChartPatternType> {
        self.iter().filter(|(_, on)| *on).map(|(p, _)| p).collect()
    }

    /// 감지된 강세 패턴 수.
    pub fn bullish_count(&self) -> u32 {
        self.count_bias(PatternBias::Bullish)
    }

    /// 감지된 약세 패턴 수.
    pub fn bearish_count(&self) -> u32 {
        self.count_bias(PatternBias::Bearish)
    }

    /// 감지된 전체 패턴 수.
    pub fn total(&self) -> u32 {
        self.flags.iter().filter(|f| **f).count() as u32
    }

    fn count_bias(&self, bias: PatternBias) -> u32 {
        self.iter()
            .filter(|(p, on)| *on && p.bias() == bias)
            .count() as u32
    }
}

impl Serialize for PatternFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ChartPatternType::ALL.len()))?;
        for (pattern, on) in self.iter() {
            map.serialize_entry(pattern.name(), &u8::from(on))?;
        }
        map.end()
    }
}

/// 차트 패턴 감지기.
#[derive(Debug, Clone, Copy)]
pub struct PatternDetector {
    window: usize,
}

impl Default for PatternDetector {
    fn default() -> Self {
        Self {
            window: PATTERN_WINDOW,
        }
    }
}

impl PatternDetector {
    /// 기본 감지기 (최근 20개).
    pub fn new() -> Self {
        Self::default()
    }

    /// 종가 시계열에서 패턴을 감지합니다.
    ///
    /// 5개 미만이면 모든 패턴이 꺼진 결과를 반환합니다.
    pub fn detect(&self, prices: &[f64]) -> PatternFlags {
        if prices.len() < MIN_PATTERN_LEN {
            return PatternFlags::none();
        }

        let recent = &prices[prices.len().saturating_sub(self.window)..];
        let n = recent.len();
        // 끝에서 k번째 (k = 1이 최신)
        let back = |k: usize| recent[n - k];

        let mut flags = PatternFlags::none();

        if n >= 3 {
            flags = flags
                .with(
                    ChartPatternType::BullishEngulfing,
                    back(2) < back(3) && back(1) > back(2),
                )
                .with(
                    ChartPatternType::BearishEngulfing,
                    back(2) > back(3) && back(1) < back(2),
                );
        }

        if n >= 8 {
            let mid = min_of(&recent[n - 8..n - 2]);
            let left = back(8);
            let right = back(1);
            flags = flags.with(
                ChartPatternType::CupHandle,
                left > mid && right > mid && (left - right).abs() < mid * 0.1,
            );

            let samples = [back(8), back(6), back(4), back(2)];
            flags = flags
                .with(
                    ChartPatternType::AscendingTriangle,
                    samples.windows(2).all(|w| w[0] <= w[1]),
                )
                .with(
                    ChartPatternType::DescendingTriangle,
                    samples.windows(2).all(|w| w[0] >= w[1]),
                );
        }

        if n >= 10 {
            let earlier = &recent[n - 10..n - 5];
            let later = &recent[n - 5..];

            let low1 = min_of(earlier);
            let low2 = min_of(later);
            flags = flags.with(
                ChartPatternType::DoubleBottom,
                (low1 - low2).abs() < low1 * 0.05 && back(1) > low1 * 1.05,
            );

            let high1 = max_of(earlier);
            let high2 = max_of(later);
            flags = flags.with(
                ChartPatternType::DoubleTop,
                (high1 - high2).abs() < high1 * 0.05 && back(1) < high1 * 0.95,
            );
        }

        flags
    }
}

fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(prices: &[f64]) -> PatternFlags {
        PatternDetector::new().detect(prices)
    }

    #[test]
    fn test_short_series_has_no_patterns() {
        for len in 0..MIN_PATTERN_LEN {
            let prices: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
            assert_eq!(detect(&prices), PatternFlags::none());
        }
    }

    #[test]
    fn test_engulfing() {
        let bullish = detect(&[10.0, 10.0, 10.0, 9.0, 11.0]);
        assert!(bullish.get(ChartPatternType::BullishEngulfing));
        assert!(!bullish.get(ChartPatternType::BearishEngulfing));

        let bearish = detect(&[10.0, 10.0, 10.0, 11.0, 9.0]);
        assert!(bearish.get(ChartPatternType::BearishEngulfing));
        assert!(!bearish.get(ChartPatternType::BullishEngulfing));
    }

    #[test]
    fn test_windowed_rules_need_enough_data() {
        // 7개: 컵 앤 핸들/삼각형 판정 안 함
        let flags = detect(&[5.0; 7]);
        assert_eq!(flags.total(), 0);

        // 8개 평탄: 두 삼각형 모두 성립
        let flags = detect(&[5.0; 8]);
        assert!(flags.get(ChartPatternType::AscendingTriangle));
        assert!(flags.get(ChartPatternType::DescendingTriangle));
        assert!(!flags.get(ChartPatternType::CupHandle));
    }

    #[test]
    fn test_monotonic_rise() {
        let prices: Vec<f64> = (100..120).map(f64::from).collect();
        let flags = detect(&prices);

        assert!(flags.get(ChartPatternType::AscendingTriangle));
        assert!(!flags.get(ChartPatternType::DescendingTriangle));
        assert!(flags.get(ChartPatternType::DoubleBottom));
        assert_eq!(flags.bullish_count(), 2);
        assert_eq!(flags.bearish_count(), 0);
    }

    #[test]
    fn test_only_last_twenty_are_used() {
        let mut prices = vec![1.0; 50];
        prices.extend((100..120).map(f64::from));
        let tail: Vec<f64> = (100..120).map(f64::from).collect();

        assert_eq!(detect(&prices), detect(&tail));
    }

    #[test]
    fn test_bias_partition() {
        let bullish: Vec<_> = ChartPatternType::ALL
            .iter()
            .filter(|p| p.bias() == PatternBias::Bullish)
            .collect();
        assert_eq!(bullish.len(), 4);
        assert_eq!(ChartPatternType::DoubleTop.bias(), PatternBias::Bearish);
    }

    #[test]
    fn test_flags_serialize_as_zero_one_map() {
        let flags = PatternFlags::none().with(ChartPatternType::CupHandle, true);
        let value = serde_json::to_value(flags).unwrap();

        assert_eq!(value["cup_handle"], 1);
        assert_eq!(value["double_top"], 0);
        assert_eq!(value.as_object().unwrap().len(), 7);
        assert_eq!(flags.detected(), vec![ChartPatternType::CupHandle]);
    }
}
