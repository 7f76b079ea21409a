//! # Pulse Analytics
//!
//! 종가 시계열에서 매매 신호를 계산합니다.
//!
//! ## 구성
//! - [`indicators`]: 이동평균, 모멘텀, 변동성 비율
//! - [`patterns`]: 최근 20개 종가에서 7가지 차트 패턴 감지
//! - [`signal_engine`]: 지표와 패턴을 합쳐 신호/신뢰도/예상 가격 산출
//! - [`predictor`]: 데이터 조회부터 결과 생성까지의 파이프라인
//!
//! 지표, 패턴, 신호 계산은 모두 I/O 없는 순수 함수입니다.

pub mod indicators;
pub mod patterns;
pub mod predictor;
pub mod signal_engine;

pub use indicators::{IndicatorError, IndicatorResult};
pub use patterns::{ChartPatternType, PatternBias, PatternDetector, PatternFlags};
pub use predictor::{DetailedPrediction, Predictor};
pub use signal_engine::{IndicatorSnapshot, SignalEngine, SignalParams};
