//! 예측 파이프라인의 에러 타입.
//!
//! 호출자가 메시지 문자열이 아니라 에러 종류로 분기할 수 있도록
//! 닫힌 열거형으로 정의합니다. 모든 에러는 현재 호출에서 종료 조건이며
//! 내부적으로 재시도하지 않습니다.

use std::fmt;

use thiserror::Error;

use crate::types::MAX_SYMBOL_LEN;

/// 심볼 검증 실패 사유.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolIssue {
    /// 빈 문자열
    Empty,
    /// 최대 길이 초과
    TooLong { length: usize },
    /// 허용되지 않는 문자 포함
    InvalidCharacter { character: char },
}

impl fmt::Display for SymbolIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolIssue::Empty => write!(f, "symbol is empty"),
            SymbolIssue::TooLong { length } => {
                write!(f, "{} characters, at most {} allowed", length, MAX_SYMBOL_LEN)
            }
            SymbolIssue::InvalidCharacter { character } => {
                write!(f, "unsupported character '{}'", character)
            }
        }
    }
}

/// 예측 에러.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    /// 잘못된 심볼 (비어 있음, 최대 길이 초과, 허용되지 않는 문자)
    #[error("Invalid symbol: {symbol} ({reason})")]
    InvalidSymbol { symbol: String, reason: SymbolIssue },

    /// 알 수 없는 심볼 또는 빈 시계열
    #[error("No data found for {symbol}. Invalid symbol or no data available.")]
    NoData { symbol: String },

    /// 필요한 관측치보다 짧은 시계열
    #[error("Insufficient data for {symbol}. Only {actual} days of data available.")]
    InsufficientData {
        symbol: String,
        required: usize,
        actual: usize,
    },

    /// 그 외 데이터 조회 실패 (원본 메시지 보존)
    #[error("Error fetching data: {message}")]
    Fetch { symbol: String, message: String },
}

/// 예측 작업을 위한 Result 타입.
pub type PredictResult<T> = Result<T, PredictError>;

impl PredictError {
    /// 데이터 조회 실패 에러를 생성합니다.
    pub fn fetch(symbol: impl Into<String>, message: impl Into<String>) -> Self {
        PredictError::Fetch {
            symbol: symbol.into(),
            message: message.into(),
        }
    }

    /// 에러가 발생한 심볼.
    pub fn symbol(&self) -> &str {
        match self {
            PredictError::InvalidSymbol { symbol, .. }
            | PredictError::NoData { symbol }
            | PredictError::InsufficientData { symbol, .. }
            | PredictError::Fetch { symbol, .. } => symbol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message_includes_count() {
        let err = PredictError::InsufficientData {
            symbol: "AAPL".to_string(),
            required: 20,
            actual: 19,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data for AAPL. Only 19 days of data available."
        );
    }

    #[test]
    fn test_no_data_message() {
        let err = PredictError::NoData {
            symbol: "ZZZZ".to_string(),
        };
        assert!(err.to_string().starts_with("No data found for ZZZZ"));
    }

    #[test]
    fn test_invalid_symbol_reason() {
        let err = PredictError::InvalidSymbol {
            symbol: "A".repeat(16),
            reason: SymbolIssue::TooLong { length: 16 },
        };
        assert_eq!(
            err.to_string(),
            format!(
                "Invalid symbol: {} (16 characters, at most {} allowed)",
                "A".repeat(16),
                MAX_SYMBOL_LEN
            )
        );
        assert_eq!(err.symbol().len(), 16);
    }

    #[test]
    fn test_fetch_error_keeps_upstream_message() {
        let err = PredictError::fetch("BTC-USD", "connection reset");
        assert_eq!(err.to_string(), "Error fetching data: connection reset");
        assert_eq!(err.symbol(), "BTC-USD");
    }
}
