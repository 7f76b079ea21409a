//! Yahoo Finance v8 chart API 클라이언트.
//!
//! `{base_url}/v8/finance/chart/{symbol}?range=..&interval=..&events=history`를 호출해
//! 조정 종가(없으면 종가)를 시간순으로 반환합니다.
//!
//! 에러 분류:
//! - HTTP 404, chart 에러 코드 `Not Found`, 결과 없음 → `PredictError::NoData`
//! - 그 외 전송/HTTP/파싱 실패 → `PredictError::Fetch`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};

use pulse_core::{DataConfig, PredictError, PredictResult, PriceSeries, Symbol};

use super::{Lookback, PriceSource};

/// 알 수 없는 심볼에 대해 Yahoo가 돌려주는 에러 코드.
const NOT_FOUND_CODE: &str = "Not Found";

/// Yahoo Finance API v8 응답 구조
#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    code: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct YahooResult {
    timestamp: Option<Vec<i64>>,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    #[serde(default)]
    quote: Vec<YahooQuote>,
    #[serde(rename = "adjclose")]
    adj_close: Option<Vec<YahooAdjClose>>,
}

#[derive(Debug, Deserialize)]
struct YahooQuote {
    close: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Deserialize)]
struct YahooAdjClose {
    #[serde(rename = "adjclose")]
    adj_close: Option<Vec<Option<f64>>>,
}

impl YahooError {
    fn is_not_found(&self) -> bool {
        self.code == NOT_FOUND_CODE
    }
}

/// Yahoo Finance chart API 기반 종가 제공자.
#[derive(Debug, Clone)]
pub struct YahooChartClient {
    client: Client,
    base_url: String,
}

impl YahooChartClient {
    /// 데이터 설정으로 클라이언트를 생성합니다.
    pub fn new(config: &DataConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 기본 URL을 교체합니다 (테스트 서버 등).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn chart_url(&self, symbol: &Symbol) -> String {
        format!("{}/v8/finance/chart/{}", self.base_url, symbol)
    }

    async fn request_chart(
        &self,
        symbol: &Symbol,
        lookback: &Lookback,
    ) -> PredictResult<YahooChartResponse> {
        let url = self.chart_url(symbol);
        debug!(
            url = %url,
            range = %lookback.range,
            interval = %lookback.interval,
            "Fetching from Yahoo Finance"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("range", lookback.range.as_str()),
                ("interval", lookback.interval.as_str()),
                ("events", "history"),
            ])
            .send()
            .await
            .map_err(|e| PredictError::fetch(symbol.as_str(), e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(PredictError::NoData {
                symbol: symbol.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| PredictError::fetch(symbol.as_str(), e.to_string()))?;
        debug!(status = %status, bytes = body.len(), "Yahoo Finance response");

        if !status.is_success() {
            // 에러 응답도 chart.error 형식인 경우가 있음
            if let Ok(parsed) = serde_json::from_str::<YahooChartResponse>(&body) {
                if parsed.chart.error.as_ref().is_some_and(YahooError::is_not_found) {
                    return Err(PredictError::NoData {
                        symbol: symbol.to_string(),
                    });
                }
            }
            return Err(PredictError::fetch(
                symbol.as_str(),
                format!("Yahoo Finance API error: {}", status),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            PredictError::fetch(
                symbol.as_str(),
                format!("Failed to parse Yahoo Finance response: {}", e),
            )
        })
    }
}

/// 응답에서 시간순 종가를 추출합니다.
///
/// 조정 종가를 우선 사용하고, 값이 없는 봉은 종가로 대체합니다.
/// 둘 다 없거나 유효하지 않은 봉은 건너뜁니다.
fn extract_closes(symbol: &Symbol, response: YahooChartResponse) -> PredictResult<PriceSeries> {
    let no_data = || PredictError::NoData {
        symbol: symbol.to_string(),
    };

    if let Some(error) = response.chart.error {
        if error.is_not_found() {
            return Err(no_data());
        }
        return Err(PredictError::fetch(
            symbol.as_str(),
            format!(
                "Yahoo Finance error: {} - {}",
                error.code,
                error.description.unwrap_or_default()
            ),
        ));
    }

    let result = response
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(no_data)?;

    let timestamps = result.timestamp.unwrap_or_default();
    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .and_then(|q| q.close)
        .unwrap_or_default();
    let adj_closes = result
        .indicators
        .adj_close
        .and_then(|ac| ac.into_iter().next())
        .and_then(|ac| ac.adj_close)
        .unwrap_or_default();

    let mut bars: Vec<(i64, f64)> = timestamps
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            let adj = adj_closes.get(i).copied().flatten();
            let close = closes.get(i).copied().flatten();
            adj.filter(|v| is_valid_price(*v))
                .or(close.filter(|v| is_valid_price(*v)))
                .map(|price| (ts, price))
        })
        .collect();

    let skipped = timestamps.len() - bars.len();
    if skipped > 0 {
        warn!(symbol = %symbol, skipped, "Skipped bars without a close price");
    }

    if bars.is_empty() {
        return Err(no_data());
    }

    // 시간순 정렬 (오래된 것부터)
    bars.sort_by_key(|(ts, _)| *ts);

    if let (Some(first), Some(last)) = (bars.first(), bars.last()) {
        debug!(
            symbol = %symbol,
            from = ?chrono::DateTime::from_timestamp(first.0, 0),
            to = ?chrono::DateTime::from_timestamp(last.0, 0),
            "Close series range"
        );
    }

    Ok(bars.into_iter().map(|(_, price)| price).collect())
}

fn is_valid_price(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[async_trait]
impl PriceSource for YahooChartClient {
    fn name(&self) -> &str {
        "yahoo"
    }

    async fn fetch_closes(
        &self,
        symbol: &Symbol,
        lookback: &Lookback,
    ) -> PredictResult<PriceSeries> {
        let response = self.request_chart(symbol, lookback).await?;
        let series = extract_closes(symbol, response)?;

        info!(
            symbol = %symbol,
            bars = series.len(),
            "Fetched close prices from Yahoo Finance"
        );

        Ok(series)
    }
}
