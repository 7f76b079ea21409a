//! 데이터 소스 연결 점검 명령.
//!
//! 각 심볼의 최근 1일 데이터를 조회해 `SYMBOL: OK` / `SYMBOL: FAIL`을 출력합니다.

use pulse_core::Symbol;
use pulse_data::{Lookback, PriceSource};
use tracing::warn;

/// 심볼 인자가 없을 때 점검하는 암호화폐 심볼.
pub const DEFAULT_CHECK_SYMBOLS: [&str; 5] = ["BTC-USD", "ETH-USD", "MATIC-USD", "SOL-USD", "ADA-USD"];

/// 심볼 1개의 점검 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// 입력 심볼 (정규화 가능하면 대문자)
    pub symbol: String,
    /// 조회된 봉 수 (실패 시 0)
    pub bars: usize,
    /// 실패 사유
    pub error: Option<String>,
}

impl CheckReport {
    /// 데이터가 1개 이상 조회되었는지 여부.
    pub fn is_ok(&self) -> bool {
        self.error.is_none() && self.bars > 0
    }

    /// `SYMBOL: OK` 형식의 한 줄 요약.
    pub fn line(&self) -> String {
        let status = if self.is_ok() { "OK" } else { "FAIL" };
        format!("{}: {}", self.symbol, status)
    }
}

/// 점검용 조회 기간 (최근 1일).
pub fn check_lookback() -> Lookback {
    Lookback::new("1d", "1d")
}

/// 심볼들을 순서대로 점검합니다.
pub async fn check_symbols<S: PriceSource + ?Sized>(
    source: &S,
    symbols: &[String],
) -> Vec<CheckReport> {
    let lookback = check_lookback();
    let mut reports = Vec::with_capacity(symbols.len());

    for raw in symbols {
        let report = match Symbol::parse(raw) {
            Ok(symbol) => match source.fetch_closes(&symbol, &lookback).await {
                Ok(series) => CheckReport {
                    symbol: symbol.to_string(),
                    bars: series.len(),
                    error: None,
                },
                Err(e) => CheckReport {
                    symbol: symbol.to_string(),
                    bars: 0,
                    error: Some(e.to_string()),
                },
            },
            Err(e) => CheckReport {
                symbol: raw.clone(),
                bars: 0,
                error: Some(e.to_string()),
            },
        };

        if let Some(error) = &report.error {
            warn!(symbol = %report.symbol, error = %error, "Data source check failed");
        }
        reports.push(report);
    }

    reports
}

/// 인자가 없으면 기본 심볼 목록을 반환합니다.
pub fn symbols_or_default(symbols: Vec<String>) -> Vec<String> {
    if symbols.is_empty() {
        DEFAULT_CHECK_SYMBOLS.iter().map(|s| s.to_string()).collect()
    } else {
        symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_data::InMemoryPriceSource;

    #[test]
    fn test_default_symbols() {
        let symbols = symbols_or_default(Vec::new());
        assert_eq!(symbols.len(), 5);
        assert_eq!(symbols[0], "BTC-USD");

        let symbols = symbols_or_default(vec!["AAPL".to_string()]);
        assert_eq!(symbols, vec!["AAPL".to_string()]);
    }

    #[tokio::test]
    async fn test_check_reports() {
        let source = InMemoryPriceSource::new().with_series("BTC-USD", vec![65000.0]);
        let symbols = vec![
            "btc-usd".to_string(),
            "ETH-USD".to_string(),
            "bad symbol".to_string(),
        ];

        let reports = check_symbols(&source, &symbols).await;
        let lines: Vec<String> = reports.iter().map(CheckReport::line).collect();

        assert_eq!(
            lines,
            vec!["BTC-USD: OK", "ETH-USD: FAIL", "bad symbol: FAIL"]
        );
        assert_eq!(reports[0].bars, 1);
        assert!(reports[2].error.as_deref().unwrap().contains("Invalid symbol"));
    }
}
