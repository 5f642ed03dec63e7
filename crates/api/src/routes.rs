use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::Request,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use stocksim_core::domain::{PricePoint, StockRef};
use stocksim_core::generate::fundamentals::{generate_fundamentals, Fundamentals};
use stocksim_core::generate::history::generate_history;
use stocksim_core::generate::market::{
    generate_breadth, generate_indices, generate_movers, generate_overview,
    generate_sector_performance, generate_sentiment, IndexQuote, MarketBreadth, MarketOverview,
    MarketSentiment, Mover, SectorPerformance,
};
use stocksim_core::generate::news::{generate_news, StockNews};
use stocksim_core::generate::portfolio::{
    generate_performance, generate_portfolio, Portfolio, PortfolioPerformance,
};
use stocksim_core::generate::prediction::{
    generate_prediction, generate_projection, Forecast, Projection,
};
use stocksim_core::generate::profile::{generate_stock_details, StockDetails};
use stocksim_core::generate::recommendations::{
    generate_recommendations, generate_recommended, RecommendedList, SampledRecommendation,
};
use stocksim_core::generate::screener::{fundamental_screener, ScreenerRow};
use stocksim_core::generate::technical::{generate_technical, TechnicalReport};
use stocksim_core::seed::Stream;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::error::ApiError;
use crate::params::{self, Params};
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Clone, Copy, Default)]
struct RequestUuid;

impl MakeRequestId for RequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let value = Uuid::new_v4().to_string().parse().ok()?;
        Some(RequestId::new(value))
    }
}

pub fn router(state: AppState, cors_permissive: bool) -> Router {
    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/search", get(search))
        .route("/api/stocks/list", get(stocks_list))
        .route("/api/stock/recommended", get(recommended))
        .route("/api/stock/:symbol", get(stock_details))
        .route("/api/stock/:symbol/historical", get(historical))
        .route("/api/stock/:symbol/predict", get(predict))
        .route("/api/stock/:symbol/prediction", get(prediction))
        .route("/api/stock/:symbol/fundamentals", get(fundamentals))
        .route("/api/stock/:symbol/news", get(news))
        .route("/api/stock/:symbol/technical", get(technical))
        .route("/api/stock_news/:symbol", get(news))
        .route("/api/market/indices", get(indices))
        .route("/api/market/overview", get(overview))
        .route("/api/market/breadth", get(breadth))
        .route("/api/market/sentiment", get(sentiment))
        .route("/api/market/sector-performance", get(sector_performance))
        .route("/api/market/top-gainers", get(top_gainers))
        .route("/api/market/top-losers", get(top_losers))
        .route("/api/market/most-active", get(most_active))
        .route("/api/recommendations", get(recommendations))
        .route("/api/portfolio", get(portfolio))
        .route("/api/portfolio/performance", get(portfolio_performance))
        .route("/api/fundamental/screener", get(screener))
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id,
                )
            }),
        )
        .layer(SetRequestIdLayer::x_request_id(RequestUuid));

    if cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": state.clock().timestamp(),
    }))
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Json<Vec<StockRef>> {
    let query = params.get("query").map(String::as_str).unwrap_or_default();
    Json(state.reference.search(query).into_iter().copied().collect())
}

async fn stocks_list(State(state): State<AppState>) -> Json<Vec<StockRef>> {
    Json(state.reference.all().to_vec())
}

async fn stock_details(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> ApiResult<StockDetails> {
    let stock = state.resolve(&symbol)?;
    let clock = state.clock();
    let mut rng = state.rng(&clock, Stream::Quote, stock.symbol);
    let curated = state.reference.override_for(stock.symbol);
    Ok(Json(generate_stock_details(&mut rng, stock, curated, &clock)?))
}

async fn historical(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<Params>,
) -> ApiResult<Vec<PricePoint>> {
    let stock = state.resolve(&symbol)?;
    let days = params::bounded(&params, "days", 365, params::HISTORY_DAYS)?;
    let clock = state.clock();
    let mut rng = state.rng(&clock, Stream::History, stock.symbol);
    tracing::debug!(symbol = stock.symbol, days, "history");
    Ok(Json(generate_history(&mut rng, stock.symbol, days, clock.as_of)))
}

async fn predict(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<Params>,
) -> ApiResult<Forecast> {
    let stock = state.resolve(&symbol)?;
    let days = params::bounded(&params, "days", 30, params::FORECAST_DAYS)?;
    let clock = state.clock();
    let mut rng = state.rng(&clock, Stream::Forecast, stock.symbol);
    let curated = state.reference.override_for(stock.symbol);
    Ok(Json(generate_prediction(&mut rng, stock, curated, days, &clock)))
}

async fn prediction(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<Params>,
) -> ApiResult<Projection> {
    let stock = state.resolve(&symbol)?;
    let days = params::bounded(&params, "days", 30, params::FORECAST_DAYS)?;
    let clock = state.clock();
    let mut rng = state.rng(&clock, Stream::Projection, stock.symbol);
    Ok(Json(generate_projection(&mut rng, stock, days, clock.as_of)))
}

async fn fundamentals(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> ApiResult<Fundamentals> {
    let stock = state.resolve(&symbol)?;
    let clock = state.clock();
    let mut rng = state.rng(&clock, Stream::Fundamentals, stock.symbol);
    Ok(Json(generate_fundamentals(&mut rng, stock, clock.as_of)))
}

async fn news(State(state): State<AppState>, Path(symbol): Path<String>) -> ApiResult<StockNews> {
    let stock = state.resolve(&symbol)?;
    let clock = state.clock();
    let mut rng = state.rng(&clock, Stream::News, stock.symbol);
    Ok(Json(generate_news(&mut rng, stock, &clock)?))
}

async fn technical(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> ApiResult<TechnicalReport> {
    let stock = state.resolve(&symbol)?;
    let clock = state.clock();
    let mut rng = state.rng(&clock, Stream::Technical, stock.symbol);
    Ok(Json(generate_technical(&mut rng, stock, &clock)))
}

async fn indices(State(state): State<AppState>) -> Json<Vec<IndexQuote>> {
    let clock = state.clock();
    let mut rng = state.rng(&clock, Stream::Market, "indices");
    Json(generate_indices(&mut rng, &clock))
}

async fn overview(State(state): State<AppState>) -> Json<MarketOverview> {
    let clock = state.clock();
    let mut rng = state.rng(&clock, Stream::Market, "overview");
    Json(generate_overview(&mut rng, state.reference.all(), &clock))
}

async fn breadth(State(state): State<AppState>) -> Json<MarketBreadth> {
    let clock = state.clock();
    let mut rng = state.rng(&clock, Stream::Market, "breadth");
    Json(generate_breadth(&mut rng, &clock))
}

async fn sentiment(State(state): State<AppState>) -> Json<MarketSentiment> {
    let clock = state.clock();
    let mut rng = state.rng(&clock, Stream::Market, "sentiment");
    Json(generate_sentiment(&mut rng))
}

async fn sector_performance(State(state): State<AppState>) -> Json<Vec<SectorPerformance>> {
    let clock = state.clock();
    let mut rng = state.rng(&clock, Stream::Market, "sectors");
    Json(generate_sector_performance(&mut rng))
}

#[derive(Clone, Copy)]
enum MoverList {
    Gainers,
    Losers,
    MostActive,
}

fn movers(state: &AppState, params: &Params, list: MoverList) -> ApiResult<Vec<Mover>> {
    let limit = params::bounded(params, "limit", 5, params::MOVER_LIMIT)?;
    let clock = state.clock();
    let mut rng = state.rng(&clock, Stream::Movers, &limit.to_string());
    let all = generate_movers(&mut rng, state.reference.all(), limit);
    Ok(Json(match list {
        MoverList::Gainers => all.gainers,
        MoverList::Losers => all.losers,
        MoverList::MostActive => all.most_active,
    }))
}

async fn top_gainers(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> ApiResult<Vec<Mover>> {
    movers(&state, &params, MoverList::Gainers)
}

async fn top_losers(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> ApiResult<Vec<Mover>> {
    movers(&state, &params, MoverList::Losers)
}

async fn most_active(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> ApiResult<Vec<Mover>> {
    movers(&state, &params, MoverList::MostActive)
}

async fn recommendations(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> ApiResult<Vec<SampledRecommendation>> {
    let count = params::bounded(&params, "count", 5, params::RECOMMENDATION_COUNT)?;
    let clock = state.clock();
    let mut rng = state.rng(&clock, Stream::Recommendations, &format!("sample/{count}"));
    Ok(Json(generate_recommendations(&mut rng, state.reference.all(), count)))
}

async fn recommended(State(state): State<AppState>) -> Json<RecommendedList> {
    let clock = state.clock();
    Json(generate_recommended(&state.reference, |symbol| {
        state.rng(&clock, Stream::Recommendations, symbol)
    }))
}

async fn portfolio(State(state): State<AppState>) -> Json<Portfolio> {
    let clock = state.clock();
    let mut rng = state.rng(&clock, Stream::Portfolio, "holdings");
    Json(generate_portfolio(&mut rng))
}

async fn portfolio_performance(State(state): State<AppState>) -> Json<PortfolioPerformance> {
    let clock = state.clock();
    let mut rng = state.rng(&clock, Stream::Portfolio, "performance");
    Json(generate_performance(&mut rng, clock.as_of))
}

async fn screener(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> ApiResult<Vec<ScreenerRow>> {
    let filter = params::screener_filter(&params)?;
    Ok(Json(fundamental_screener(state.reference.all(), &filter)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::NaiveDate;
    use http_body_util::BodyExt;
    use stocksim_core::config::MissPolicy;
    use stocksim_core::reference::ReferenceTable;
    use tower::ServiceExt;

    const UNKNOWN_SYMBOL_PATHS: [&str; 8] = [
        "/api/stock/UNKNOWN123",
        "/api/stock/UNKNOWN123/historical",
        "/api/stock/UNKNOWN123/predict",
        "/api/stock/UNKNOWN123/prediction",
        "/api/stock/UNKNOWN123/fundamentals",
        "/api/stock/UNKNOWN123/news",
        "/api/stock/UNKNOWN123/technical",
        "/api/stock_news/UNKNOWN123",
    ];

    fn app(policy: MissPolicy) -> Router {
        let state = AppState::new(
            ReferenceTable::builtin(),
            policy,
            NaiveDate::from_ymd_opt(2026, 1, 5),
        );
        router(state, true)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn historical_returns_requested_days_in_order() {
        let (status, body) =
            get(app(MissPolicy::NotFound), "/api/stock/RELIANCE/historical?days=5").await;
        assert_eq!(status, StatusCode::OK);
        let points = body.as_array().unwrap();
        assert_eq!(points.len(), 5);
        for key in ["date", "open", "high", "low", "close", "volume"] {
            assert!(points[0].get(key).is_some(), "missing {key}");
        }
        let dates: Vec<NaiveDate> = points
            .iter()
            .map(|p| NaiveDate::parse_from_str(p["date"].as_str().unwrap(), "%Y-%m-%d").unwrap())
            .collect();
        assert!(dates.windows(2).all(|w| (w[1] - w[0]).num_days() == 1));
        assert_eq!(dates[4], NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
    }

    #[tokio::test]
    async fn same_request_same_day_is_reproducible() {
        for path in [
            "/api/stock/TCS/predict?days=10",
            "/api/stock/TCS",
            "/api/stock/TCS/technical",
            "/api/stock/TCS/prediction?days=10",
            "/api/market/indices",
            "/api/market/breadth",
            "/api/market/overview",
        ] {
            let (_, a) = get(app(MissPolicy::NotFound), path).await;
            let (_, b) = get(app(MissPolicy::NotFound), path).await;
            assert_eq!(a, b, "{path}");
        }

        let (_, a) = get(app(MissPolicy::NotFound), "/api/stock/TCS/predict?days=10").await;
        assert_eq!(a["daily_predictions"].as_array().unwrap().len(), 10);
        assert_eq!(a["recommendation"]["updated"], "2026-01-05T15:30:00.000000");
    }

    #[tokio::test]
    async fn unknown_symbol_is_404_on_every_symbol_endpoint() {
        for path in UNKNOWN_SYMBOL_PATHS {
            let (status, body) = get(app(MissPolicy::NotFound), path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
            assert_eq!(body, json!({"error": "Stock not found"}), "{path}");
        }
    }

    #[tokio::test]
    async fn index_fallback_serves_nifty_on_every_symbol_endpoint() {
        for path in UNKNOWN_SYMBOL_PATHS {
            let (status, body) = get(app(MissPolicy::IndexFallback), path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            if path.ends_with("/historical") {
                assert!(!body.as_array().unwrap().is_empty(), "{path}");
            } else {
                assert_eq!(body["symbol"], "NIFTY", "{path}");
            }
        }
    }

    #[tokio::test]
    async fn out_of_range_parameters_are_rejected() {
        for path in [
            "/api/stock/TCS/historical?days=0",
            "/api/stock/TCS/historical?days=abc",
            "/api/stock/TCS/predict?days=366",
            "/api/market/top-gainers?limit=16",
            "/api/recommendations?count=0",
            "/api/fundamental/screener?min_pe=40&max_pe=10",
        ] {
            let (status, body) = get(app(MissPolicy::NotFound), path).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
            assert_eq!(body["error"], "bad_request");
        }
    }

    #[tokio::test]
    async fn indices_satisfy_change_percent_invariant() {
        let (status, body) = get(app(MissPolicy::NotFound), "/api/market/indices").await;
        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert!(!items.is_empty());
        for item in items {
            let value = item["value"].as_f64().unwrap();
            let change = item["change"].as_f64().unwrap();
            let pct = item["changePercent"].as_f64().unwrap();
            assert_eq!(pct, (change / value * 100.0 * 100.0).round() / 100.0);
        }
    }

    #[tokio::test]
    async fn recommended_route_is_not_a_symbol() {
        let (status, body) = get(app(MissPolicy::NotFound), "/api/stock/recommended").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn search_and_list() {
        let (_, body) = get(app(MissPolicy::NotFound), "/api/search?query=tata").await;
        let hits = body.as_array().unwrap();
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|h| {
            let text = format!("{} {}", h["symbol"], h["name"]).to_lowercase();
            text.contains("tata")
        }));

        let (_, body) = get(app(MissPolicy::NotFound), "/api/search?query=").await;
        assert_eq!(body, json!([]));

        let (_, body) = get(app(MissPolicy::NotFound), "/api/stocks/list").await;
        assert_eq!(body.as_array().unwrap().len(), 49);
    }

    #[tokio::test]
    async fn movers_respect_limit() {
        let (_, body) = get(app(MissPolicy::NotFound), "/api/market/top-losers?limit=7").await;
        let losers = body.as_array().unwrap();
        assert_eq!(losers.len(), 7);
        assert!(losers.iter().all(|l| l["changePercent"].as_f64().unwrap() < 0.0));
    }

    #[tokio::test]
    async fn health_and_request_id() {
        let response = app(MissPolicy::NotFound)
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].as_str().unwrap().starts_with("2026-01-05T"));
    }

    #[tokio::test]
    async fn screener_bounds_hold() {
        let uri = "/api/fundamental/screener?min_pe=20&max_pe=30&sector=Banking";
        let (status, body) = get(app(MissPolicy::NotFound), uri).await;
        assert_eq!(status, StatusCode::OK);
        for row in body.as_array().unwrap() {
            let pe = row["pe"].as_u64().unwrap();
            assert!((20..=30).contains(&pe));
            assert_eq!(row["sector"], "Banking");
        }
    }
}
