//! 예측 도메인 모델.

mod prediction;

pub use prediction::*;
