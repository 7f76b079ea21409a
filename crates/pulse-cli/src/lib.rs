//! 시그널 엔진 CLI 도구.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 단일 심볼 예측 (JSON 출력)
//! - 데이터 소스 연결 점검

pub mod commands;
