//! 심볼 및 자산 유형 정의.
//!
//! 이 모듈은 조회 가능한 상품 심볼 관련 타입을 정의합니다:
//! - `AssetClass` - 자산 유형 (주식, 암호화폐)
//! - `Symbol` - 검증된 Yahoo Finance 형식 티커

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PredictError, SymbolIssue};

/// 심볼 최대 길이.
pub const MAX_SYMBOL_LEN: usize = 15;

/// 기본 조회 심볼.
pub const DEFAULT_SYMBOL: &str = "AAPL";

/// 암호화폐 페어로 인식하는 호가 통화.
const CRYPTO_QUOTES: &[&str] = &[
    "USD", "USDT", "USDC", "EUR", "GBP", "JPY", "INR", "KRW", "BTC", "ETH",
];

/// 자산 유형 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    /// 주식/ETF/지수
    Equity,
    /// 암호화폐 페어 (예: BTC-USD)
    Crypto,
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetClass::Equity => write!(f, "equity"),
            AssetClass::Crypto => write!(f, "crypto"),
        }
    }
}

/// 검증된 티커 심볼.
///
/// 항상 대문자이며 1~15자의 `A-Z 0-9 . - ^ =` 문자로만 구성됩니다.
/// 예: "AAPL", "RELIANCE.NS", "BTC-USD", "^GSPC".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// 원시 입력을 검증한 뒤 대문자로 정규화합니다.
    ///
    /// 길이와 문자 검사는 원시 입력 기준입니다. ASCII가 아닌 문자는
    /// 대문자 변환 전에 거부하므로 다른 티커로 바뀌지 않습니다.
    pub fn parse(raw: &str) -> Result<Self, PredictError> {
        let reject = |reason| PredictError::InvalidSymbol {
            symbol: raw.to_string(),
            reason,
        };

        if raw.is_empty() {
            return Err(reject(SymbolIssue::Empty));
        }

        let length = raw.chars().count();
        if length > MAX_SYMBOL_LEN {
            return Err(reject(SymbolIssue::TooLong { length }));
        }

        if let Some(character) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || ".-^=".contains(*c)))
        {
            return Err(reject(SymbolIssue::InvalidCharacter { character }));
        }

        Ok(Self(raw.to_ascii_uppercase()))
    }

    /// 심볼 문자열.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 자산 유형을 추정합니다.
    pub fn asset_class(&self) -> AssetClass {
        match self.crypto_quote() {
            Some(_) => AssetClass::Crypto,
            None => AssetClass::Equity,
        }
    }

    /// 호가 통화 코드를 추정합니다.
    ///
    /// 암호화폐는 페어의 호가 통화, 주식은 거래소 접미사 기준입니다.
    pub fn currency(&self) -> &str {
        match self.asset_class() {
            AssetClass::Crypto => self.crypto_quote().unwrap_or("USD"),
            AssetClass::Equity => {
                let suffix = self.0.rsplit_once('.').map(|(_, s)| s).unwrap_or("");
                match suffix {
                    "NS" | "BO" => "INR",
                    "KS" | "KQ" => "KRW",
                    "L" => "GBP",
                    "T" => "JPY",
                    "DE" | "PA" | "AS" | "MI" => "EUR",
                    "HK" => "HKD",
                    _ => "USD",
                }
            }
        }
    }

    /// 응답에 표시할 통화 라벨 (예: "USD ($)").
    pub fn currency_label(&self) -> String {
        let code = self.currency();
        match currency_sign(code) {
            Some(sign) => format!("{} ({})", code, sign),
            None => code.to_string(),
        }
    }

    fn crypto_quote(&self) -> Option<&str> {
        let (base, quote) = self.0.rsplit_once('-')?;
        if base.is_empty() {
            return None;
        }
        CRYPTO_QUOTES.iter().find(|q| **q == quote).copied()
    }
}

fn currency_sign(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "INR" => Some("₹"),
        "KRW" => Some("₩"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "EUR" => Some("€"),
        _ => None,
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Symbol {
    type Error = PredictError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self(DEFAULT_SYMBOL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_is_uppercased() {
        let symbol = Symbol::parse("btc-usd").unwrap();
        assert_eq!(symbol.as_str(), "BTC-USD");
        assert_eq!(symbol.to_string(), "BTC-USD");
    }

    #[test]
    fn test_symbol_accepts_exchange_suffix() {
        assert!(Symbol::parse("RELIANCE.NS").is_ok());
        assert!(Symbol::parse("^GSPC").is_ok());
        assert!(Symbol::parse("EURUSD=X").is_ok());
    }

    #[test]
    fn test_empty_symbol_rejected() {
        let err = Symbol::parse("").unwrap_err();
        assert!(matches!(
            err,
            PredictError::InvalidSymbol {
                reason: SymbolIssue::Empty,
                ..
            }
        ));
    }

    #[test]
    fn test_length_boundary() {
        assert!(Symbol::parse(&"A".repeat(15)).is_ok());

        let err = Symbol::parse(&"A".repeat(16)).unwrap_err();
        assert!(matches!(
            err,
            PredictError::InvalidSymbol {
                reason: SymbolIssue::TooLong { length: 16 },
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_character_rejected() {
        let err = Symbol::parse("AA PL").unwrap_err();
        assert!(matches!(
            err,
            PredictError::InvalidSymbol {
                reason: SymbolIssue::InvalidCharacter { character: ' ' },
                ..
            }
        ));
        // 원본 입력이 에러에 그대로 남아야 함
        assert_eq!(err.symbol(), "AA PL");
    }

    #[test]
    fn test_non_ascii_rejected_before_uppercasing() {
        // 유니코드 대문자 변환으로 ASCII 티커가 되는 입력
        for raw in ["aap\u{131}", "\u{FB00}", "\u{DF}"] {
            let err = Symbol::parse(raw).unwrap_err();
            assert!(
                matches!(
                    err,
                    PredictError::InvalidSymbol {
                        reason: SymbolIssue::InvalidCharacter { .. },
                        ..
                    }
                ),
                "{:?} should be rejected",
                raw
            );
            assert_eq!(err.symbol(), raw);
        }
    }

    #[test]
    fn test_length_counts_raw_characters() {
        let raw = "\u{FB03}".repeat(6);
        let err = Symbol::parse(&raw).unwrap_err();
        assert!(matches!(
            err,
            PredictError::InvalidSymbol {
                reason: SymbolIssue::InvalidCharacter { character: '\u{FB03}' },
                ..
            }
        ));

        let err = Symbol::parse(&"\u{131}".repeat(16)).unwrap_err();
        assert!(matches!(
            err,
            PredictError::InvalidSymbol {
                reason: SymbolIssue::TooLong { length: 16 },
                ..
            }
        ));
    }

    #[test]
    fn test_asset_class() {
        assert_eq!(Symbol::parse("ETH-USD").unwrap().asset_class(), AssetClass::Crypto);
        assert_eq!(Symbol::parse("AAPL").unwrap().asset_class(), AssetClass::Equity);
        // 클래스 주식 표기는 암호화폐가 아님
        assert_eq!(Symbol::parse("BRK-B").unwrap().asset_class(), AssetClass::Equity);
    }

    #[test]
    fn test_currency_guess() {
        assert_eq!(Symbol::parse("RELIANCE.NS").unwrap().currency(), "INR");
        assert_eq!(Symbol::parse("005930.KS").unwrap().currency(), "KRW");
        assert_eq!(Symbol::parse("BTC-USDT").unwrap().currency(), "USDT");
        assert_eq!(Symbol::parse("AAPL").unwrap().currency(), "USD");
        assert_eq!(Symbol::parse("AAPL").unwrap().currency_label(), "USD ($)");
        assert_eq!(Symbol::parse("TCS.BO").unwrap().currency_label(), "INR (₹)");
    }

    #[test]
    fn test_serde_validates() {
        let symbol: Symbol = serde_json::from_str("\"spy\"").unwrap();
        assert_eq!(symbol.as_str(), "SPY");
        assert!(serde_json::from_str::<Symbol>("\"\"").is_err());
    }
}
