//! 가격 데이터 조회.
//!
//! 이 crate는 다음을 제공합니다:
//! - 종가 시계열 제공자 추상화 (`PriceSource`)
//! - Yahoo Finance 차트 API 클라이언트
//! - 테스트/오프라인용 메모리 제공자

pub mod provider;

pub use provider::{InMemoryPriceSource, Lookback, PriceSource, YahooChartClient};
