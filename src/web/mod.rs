mod pages;

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::encoding::{Dimension, FeatureVector, TABLE_VERSION};
use crate::gateway::{PredictionError, PredictionGateway};

#[derive(Clone)]
pub struct AppState {
    pub gateway: PredictionGateway,
}

/// Build the Axum router for the prediction service.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/ipl", get(ipl_handler))
        .route("/about", get(about_handler))
        .route("/ipl/predict", post(predict_form_handler))
        .route("/api/predict", post(predict_json_handler))
        .route("/api/health", get(health_handler))
        .route("/api/tables", get(tables_handler))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

impl IntoResponse for PredictionError {
    fn into_response(self) -> Response {
        let status = match self {
            PredictionError::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            PredictionError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            PredictionError::UnmappablePrediction(_) | PredictionError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        error_response(status, self.to_string())
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn home_handler() -> impl IntoResponse {
    Html(pages::home_page())
}

async fn ipl_handler() -> impl IntoResponse {
    Html(pages::ipl_page(None))
}

async fn about_handler() -> impl IntoResponse {
    Html(pages::about_page())
}

/// POST /ipl/predict (form-encoded)
async fn predict_form_handler(
    State(state): State<Arc<AppState>>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Response {
    let Form(fields) = match form {
        Ok(f) => f,
        Err(rejection) => {
            warn!("Malformed prediction form: {}", rejection);
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };
    match state.gateway.predict(&fields) {
        Ok(prediction) => {
            let text = format!("Predicted Winner: {}", prediction.winner);
            Html(pages::ipl_page(Some(&text))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

#[derive(Debug, Serialize)]
struct PredictResponse {
    winner: &'static str,
    class: i64,
    features: FeatureVector,
    predicted_at: DateTime<Utc>,
}

/// POST /api/predict (JSON object of the same six fields)
async fn predict_json_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<HashMap<String, String>>, JsonRejection>,
) -> Response {
    let Json(fields) = match body {
        Ok(b) => b,
        Err(rejection) => {
            warn!("Malformed prediction request: {}", rejection);
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };
    match state.gateway.predict(&fields) {
        Ok(p) => Json(PredictResponse {
            winner: p.winner,
            class: p.class,
            features: p.features,
            predicted_at: Utc::now(),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/health
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "model_loaded": state.gateway.is_available(),
        "model": state.gateway.model_name(),
        "table_version": TABLE_VERSION,
    }))
}

/// GET /api/tables
async fn tables_handler() -> impl IntoResponse {
    let tables: BTreeMap<Dimension, Vec<&'static str>> = Dimension::ALL
        .iter()
        .map(|d| {
            let table = d.table();
            (table.dimension(), table.labels().collect())
        })
        .collect();
    Json(json!({
        "table_version": TABLE_VERSION,
        "tables": tables,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModelError, Predictor};
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    struct FixedPredictor(i64);

    impl Predictor for FixedPredictor {
        fn predict(&self, _features: &FeatureVector) -> Result<i64, ModelError> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn app(class: Option<i64>) -> Router {
        let gateway = match class {
            Some(c) => PredictionGateway::new(Arc::new(FixedPredictor(c))),
            None => PredictionGateway::unavailable(),
        };
        router(AppState { gateway })
    }

    const MI_VS_CSK: &str = "team1=Mumbai+Indians&team2=Chennai+Super+Kings\
        &venue=Wankhede+Stadium&city=Mumbai&toss_winner=Mumbai+Indians&toss_decision=bat";

    fn form_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/ipl/predict")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_string(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(resp: Response) -> Value {
        serde_json::from_str(&body_string(resp).await).unwrap()
    }

    #[tokio::test]
    async fn test_form_prediction_renders_winner() {
        let resp = app(Some(7)).oneshot(form_request(MI_VS_CSK)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_string(resp).await;
        assert!(html.contains("Predicted Winner: Mumbai Indians"));
    }

    #[tokio::test]
    async fn test_form_invalid_input_returns_json_error() {
        let body = "team1=Mumbai+Indians&team2=Chennai+Super+Kings\
            &venue=Lords&city=Mumbai&toss_winner=Mumbai+Indians&toss_decision=bat";
        let resp = app(Some(7)).oneshot(form_request(body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "Invalid input values. Check venue.");
    }

    #[tokio::test]
    async fn test_form_without_model_returns_unavailable() {
        let resp = app(None).oneshot(form_request(MI_VS_CSK)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "Model not loaded. Check logs.");
    }

    #[tokio::test]
    async fn test_unmappable_class_returns_error() {
        let resp = app(Some(99)).oneshot(form_request(MI_VS_CSK)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_json(resp).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_form_without_content_type_is_bad_request() {
        let req = Request::builder()
            .method("POST")
            .uri("/ipl/predict")
            .body(Body::from(MI_VS_CSK))
            .unwrap();
        let resp = app(Some(7)).oneshot(req).await.unwrap();
        assert!(resp.status().is_client_error());
        assert!(body_json(resp).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_json_prediction() {
        let body = json!({
            "team1": "Mumbai Indians",
            "team2": "Chennai Super Kings",
            "venue": "Wankhede Stadium",
            "city": "Mumbai",
            "toss_winner": "Mumbai Indians",
            "toss_decision": "Bat",
        });
        let req = Request::builder()
            .method("POST")
            .uri("/api/predict")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let resp = app(Some(7)).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["winner"], "Mumbai Indians");
        assert_eq!(json["class"], 7);
        assert_eq!(json["features"], json!([7, 0, 55, 26, 7, 0]));
        assert!(json["predicted_at"].is_string());
    }

    #[tokio::test]
    async fn test_health_reports_model_state() {
        let req = || Request::builder().uri("/api/health").body(Body::empty()).unwrap();

        let json = body_json(app(Some(7)).oneshot(req()).await.unwrap()).await;
        assert_eq!(json["model_loaded"], true);
        assert_eq!(json["model"], "fixed");
        assert_eq!(json["table_version"], TABLE_VERSION);

        let json = body_json(app(None).oneshot(req()).await.unwrap()).await;
        assert_eq!(json["model_loaded"], false);
        assert!(json["model"].is_null());
    }

    #[tokio::test]
    async fn test_tables_endpoint() {
        let req = Request::builder().uri("/api/tables").body(Body::empty()).unwrap();
        let json = body_json(app(None).oneshot(req).await.unwrap()).await;
        assert_eq!(json["tables"]["team"][7], "Mumbai Indians");
        assert_eq!(json["tables"]["toss_decision"], json!(["bat", "field"]));
        assert_eq!(json["tables"]["venue"].as_array().unwrap().len(), 58);
    }

    #[tokio::test]
    async fn test_pages_render() {
        for uri in ["/", "/ipl", "/about"] {
            let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let resp = app(None).oneshot(req).await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        }
    }
}
