//! 시그널 엔진 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 기본 심볼(AAPL) 예측
//! pulse
//!
//! # 인도 주식 / 암호화폐
//! pulse RELIANCE.NS
//! pulse BTC-USD --pretty
//!
//! # 지표와 패턴 포함
//! pulse MSFT --explain
//!
//! # 데이터 소스 점검
//! pulse check
//! pulse check AAPL 005930.KS
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use pulse_analytics::Predictor;
use pulse_cli::commands::check::{check_symbols, symbols_or_default, CheckReport};
use pulse_cli::commands::predict::{error_json, execute, PredictOptions};
use pulse_core::{init_logging, AppConfig, LogConfig};
use pulse_data::{Lookback, YahooChartClient};
use tracing::info;

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "PulseAI signal engine - 이동평균/모멘텀/차트 패턴 기반 BUY/SELL/HOLD 신호", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    predict: PredictArgs,
}

#[derive(Args)]
struct PredictArgs {
    /// 종목 심볼 (예: AAPL, RELIANCE.NS, BTC-USD). 생략 시 AAPL
    symbol: Option<String>,

    /// 설정 파일 경로 (기본: config/default.toml, 없으면 건너뜀)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 지표 중간값과 패턴 감지 결과 포함
    #[arg(long)]
    explain: bool,

    /// JSON 들여쓰기 출력
    #[arg(long)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 데이터 소스 연결 점검 (기본: 주요 암호화폐 5종)
    Check {
        /// 점검할 심볼 목록
        symbols: Vec<String>,

        /// 설정 파일 경로
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// 설정 로드, 로깅 초기화, Yahoo 클라이언트 생성.
fn bootstrap(config_path: Option<&PathBuf>) -> anyhow::Result<(AppConfig, YahooChartClient)> {
    let config = AppConfig::load(config_path.map(PathBuf::as_path))
        .context("Failed to load configuration")?;

    // 로깅 실패는 치명적이지 않음 (이미 초기화된 경우 등)
    if let Err(e) = init_logging(LogConfig::from_settings(&config.logging)) {
        eprintln!("Logging initialization failed: {}", e);
    }

    let client = YahooChartClient::new(&config.data).context("Failed to build HTTP client")?;
    Ok((config, client))
}

async fn run_predict(args: PredictArgs) -> ExitCode {
    let options = PredictOptions {
        symbol: args.symbol,
        explain: args.explain,
        pretty: args.pretty,
    };

    let (config, client) = match bootstrap(args.config.as_ref()) {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("{}", error_json(&format!("{:#}", e), options.reported_symbol()));
            return ExitCode::FAILURE;
        }
    };

    let predictor = Predictor::new(Arc::new(client), Lookback::from_config(&config.data));

    match execute(&predictor, &options).await {
        Ok(body) => {
            println!("{}", body);
            ExitCode::SUCCESS
        }
        Err(body) => {
            eprintln!("{}", body);
            ExitCode::FAILURE
        }
    }
}

async fn run_check(symbols: Vec<String>, config_path: Option<PathBuf>) -> ExitCode {
    let (_, client) = match bootstrap(config_path.as_ref()) {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let symbols = symbols_or_default(symbols);
    let reports = check_symbols(&client, &symbols).await;

    for report in &reports {
        println!("{}", report.line());
    }

    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    info!(checked = reports.len(), failed, "Data source check complete");

    if reports.iter().all(CheckReport::is_ok) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env 파일은 선택 사항
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check { symbols, config }) => run_check(symbols, config).await,
        None => run_predict(cli.predict).await,
    }
}
