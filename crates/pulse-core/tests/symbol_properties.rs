//! Symbol 검증 속성 테스트

use proptest::prelude::*;
use pulse_core::{PredictError, Symbol, SymbolIssue, MAX_SYMBOL_LEN};

proptest! {
    /// 허용 문자로만 이루어진 1~15자 입력은 항상 통과하고 대문자로 정규화됨
    #[test]
    fn valid_tickers_always_parse(raw in "[a-zA-Z0-9.^=-]{1,15}") {
        let symbol = Symbol::parse(&raw).unwrap();
        prop_assert_eq!(symbol.as_str(), raw.to_ascii_uppercase());
    }

    /// 15자를 넘는 입력은 항상 TooLong으로 거부
    #[test]
    fn long_tickers_always_rejected(raw in "[A-Z]{16,40}") {
        let err = Symbol::parse(&raw).unwrap_err();
        let is_too_long = matches!(
            err,
            PredictError::InvalidSymbol { reason: SymbolIssue::TooLong { .. }, .. }
        );
        prop_assert!(is_too_long);
    }

    /// ASCII가 아닌 문자가 하나라도 있으면 대문자 변환 결과와 무관하게 거부
    #[test]
    fn non_ascii_input_always_rejected(
        prefix in "[a-z0-9]{0,5}",
        bad in any::<char>().prop_filter("non-ascii", |c| !c.is_ascii()),
        suffix in "[a-z0-9]{0,5}",
    ) {
        let raw = format!("{}{}{}", prefix, bad, suffix);
        let err = Symbol::parse(&raw).unwrap_err();
        let rejected_at_bad_char = matches!(
            err,
            PredictError::InvalidSymbol {
                reason: SymbolIssue::InvalidCharacter { character },
                ..
            } if character == bad
        );
        prop_assert!(rejected_at_bad_char);
    }
}

#[test]
fn test_max_length_constant() {
    assert_eq!(MAX_SYMBOL_LEN, 15);
    assert_eq!(Symbol::default().as_str(), "AAPL");
}
