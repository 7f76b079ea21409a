//! 고정 시계열에 대한 패턴/신호 회귀 테스트

use pulse_analytics::{ChartPatternType, PatternDetector, PatternFlags, SignalEngine};
use pulse_core::{PredictionResult, Signal};

fn run(prices: &[f64]) -> (PatternFlags, PredictionResult) {
    let flags = PatternDetector::new().detect(prices);
    let result = SignalEngine::new().score(prices, &flags).unwrap();
    (flags, result)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn as_f64(values: &[i32]) -> Vec<f64> {
    values.iter().map(|v| f64::from(*v)).collect()
}

#[test]
fn test_breakout_jump_is_strong_buy() {
    let mut prices: Vec<f64> = (100..119).map(f64::from).collect();
    prices.push(200.0);

    let (flags, result) = run(&prices);

    assert_eq!(
        flags.detected(),
        vec![
            ChartPatternType::DoubleBottom,
            ChartPatternType::AscendingTriangle
        ]
    );
    assert_eq!(result.signal, Signal::Buy);
    assert_eq!(result.confidence, 95);
    assert_eq!(result.predicted_price, 189.49);
    assert_eq!(result.current_price, 200.0);
    assert_eq!(result.patterns_detected, 2);
    assert_eq!(result.history.len(), 20);
}

#[test]
fn test_monotonic_rise() {
    let prices: Vec<f64> = (100..120).map(f64::from).collect();
    let (flags, result) = run(&prices);

    assert!(flags.get(ChartPatternType::AscendingTriangle));
    assert!(!flags.get(ChartPatternType::DescendingTriangle));
    assert_eq!(result.signal, Signal::Buy);
    assert_eq!(result.confidence, 76);
    assert_eq!(result.predicted_price, 118.63);
}

#[test]
fn test_flat_series_holds() {
    let prices = vec![50.0; 25];
    let (flags, result) = run(&prices);

    assert!(flags.get(ChartPatternType::AscendingTriangle));
    assert!(flags.get(ChartPatternType::DescendingTriangle));
    assert!(!flags.get(ChartPatternType::CupHandle));
    assert!(!flags.get(ChartPatternType::DoubleBottom));
    assert!(!flags.get(ChartPatternType::DoubleTop));
    assert_eq!(result.signal, Signal::Hold);
    assert_eq!(result.confidence, 50);
    assert_eq!(result.predicted_price, 50.0);
    assert_eq!(result.patterns_detected, 2);
}

#[test]
fn test_steady_decline_sells() {
    let prices: Vec<f64> = (0..25).map(|i| 200.0 - 2.0 * f64::from(i)).collect();
    let (flags, result) = run(&prices);

    assert_eq!(flags.detected(), vec![ChartPatternType::DescendingTriangle]);
    assert_eq!(result.signal, Signal::Sell);
    assert_eq!(result.confidence, 66);
    assert_eq!(result.predicted_price, 152.88);
    assert_eq!(result.current_price, 152.0);
    assert_eq!(result.patterns_detected, 1);
}

#[test]
fn test_v_shape_recovery() {
    let mut prices: Vec<f64> = (0..11).map(|i| 110.0 - 2.0 * f64::from(i)).collect();
    prices.extend((0..11).map(|i| 92.0 + 2.0 * f64::from(i)));

    let (flags, result) = run(&prices);

    assert_eq!(flags.detected(), vec![ChartPatternType::AscendingTriangle]);
    assert_eq!(result.signal, Signal::Buy);
    assert_eq!(result.confidence, 77);
    assert_eq!(result.predicted_price, 111.32);
}

#[test]
fn test_hold_flipped_to_buy_by_patterns() {
    let prices = as_f64(&[
        100, 101, 99, 102, 98, 103, 97, 104, 96, 105, 95, 106, 94, 107, 93, 108, 92, 109, 91,
        110, 100, 99,
    ]);

    let flags = PatternDetector::new().detect(&prices);
    let engine = SignalEngine::new();
    let snapshot = engine.analyze(&prices, &flags).unwrap();
    let result = engine.score(&prices, &flags).unwrap();

    assert_eq!(
        flags.detected(),
        vec![
            ChartPatternType::CupHandle,
            ChartPatternType::DoubleBottom,
            ChartPatternType::DoubleTop
        ]
    );
    assert_close(snapshot.ma_short, 101.8);
    assert_close(snapshot.ma_long, 100.4);
    assert_eq!(snapshot.base_signal, Signal::Hold);
    assert_eq!(result.signal, Signal::Buy);
    assert_eq!(result.confidence, 65);
    assert_eq!(result.predicted_price, 98.86);
    assert_eq!(result.patterns_detected, 3);
}

#[test]
fn test_bullish_engulfing_breaks_tie() {
    let mut prices = vec![100.0; 17];
    prices.extend([101.0, 100.0, 101.0]);

    let (flags, result) = run(&prices);

    assert!(flags.get(ChartPatternType::BullishEngulfing));
    assert_eq!(flags.bullish_count(), 2);
    assert_eq!(flags.bearish_count(), 1);
    assert_eq!(result.signal, Signal::Buy);
    assert_eq!(result.confidence, 56);
    assert_eq!(result.predicted_price, 100.84);
}

#[test]
fn test_bearish_engulfing_breaks_tie_and_floors_confidence() {
    let mut prices = vec![100.0; 17];
    prices.extend([99.0, 100.0, 99.0]);

    let (flags, result) = run(&prices);

    assert!(flags.get(ChartPatternType::BearishEngulfing));
    assert_eq!(result.signal, Signal::Sell);
    // 46.54 → 하한 50
    assert_eq!(result.confidence, 50);
    assert_eq!(result.predicted_price, 99.16);
}

#[test]
fn test_bullish_pattern_does_not_flip_sell() {
    let prices = as_f64(&[
        86, 101, 104, 93, 85, 114, 118, 106, 110, 98, 115, 118, 107, 102, 96, 96, 99, 96, 88, 119,
    ]);

    let flags = PatternDetector::new().detect(&prices);
    let engine = SignalEngine::new();
    let snapshot = engine.analyze(&prices, &flags).unwrap();
    let result = engine.score(&prices, &flags).unwrap();

    assert_eq!(flags.detected(), vec![ChartPatternType::BullishEngulfing]);
    assert_eq!(snapshot.base_signal, Signal::Sell);
    assert_eq!(result.signal, Signal::Sell);
    assert_eq!(result.confidence, 78);
    assert_eq!(result.predicted_price, 113.06);
    assert_eq!(result.current_price, 119.0);
}

#[test]
fn test_history_preserves_order() {
    let prices: Vec<f64> = (0..45).map(|i| 10.0 + f64::from(i) * 0.333).collect();
    let (_, result) = run(&prices);

    assert_eq!(result.history.len(), 30);
    assert!(result.history.windows(2).all(|w| w[0] < w[1]));
    for (h, p) in result.history.iter().zip(&prices[15..]) {
        assert_close(*h, (p * 100.0).round_ties_even() / 100.0);
    }
}
