use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 UNIT ECONOMICS
        // ========================================
        .route(
            "/api/unit-economics/options",
            get(handlers::a001_unit_economics::get_options),
        )
        .route(
            "/api/unit-economics/defaults",
            get(handlers::a001_unit_economics::get_defaults),
        )
        .route(
            "/api/unit-economics/rates",
            get(handlers::a001_unit_economics::get_rates),
        )
        .route(
            "/api/unit-economics/calculate",
            post(handlers::a001_unit_economics::calculate),
        )
        .route(
            "/api/unit-economics/calculate/batch",
            post(handlers::a001_unit_economics::calculate_batch),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::CalculatorConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        configure_routes(Arc::new(AppState::new(CalculatorConfig { max_batch_size: 3 })))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_calculate_default_listing() {
        let (status, body) = post_json(
            "/api/unit-economics/calculate",
            json!({
                "cost": 100000,
                "sellingPrice": 150000,
                "category": "Телефоны",
                "weight": 1,
                "deliveryZone": "city",
                "paymentType": "gold"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["commissionPercent"], 15.0);
        assert_eq!(body["result"]["commissionAmount"], 22500.0);
        assert_eq!(body["result"]["deliveryCost"], 799.0);
        assert_eq!(body["result"]["profit"], 26701.0);
        assert_eq!(body["formatted"]["profitPercent"], "17.80%");
    }

    #[tokio::test]
    async fn test_calculate_unknown_category_falls_back() {
        let (status, body) = post_json(
            "/api/unit-economics/calculate",
            json!({
                "cost": 100000,
                "sellingPrice": 150000,
                "category": "Яхты",
                "weight": 1,
                "deliveryZone": "city",
                "paymentType": "gold"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["input"]["category"], "Неизвестная категория");
        assert_eq!(body["result"]["commissionPercent"], 12.0);
    }

    #[tokio::test]
    async fn test_calculate_rejects_negative_weight() {
        let (status, body) = post_json(
            "/api/unit-economics/calculate",
            json!({
                "cost": 100000,
                "sellingPrice": 150000,
                "category": "Телефоны",
                "weight": -1,
                "deliveryZone": "city",
                "paymentType": "gold"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Вес"));
    }

    #[tokio::test]
    async fn test_calculate_rejects_unknown_payment_type() {
        let (status, body) = post_json(
            "/api/unit-economics/calculate",
            json!({
                "cost": 1,
                "sellingPrice": 2,
                "category": "Телефоны",
                "weight": 1,
                "deliveryZone": "city",
                "paymentType": "barter"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_batch_reports_each_item() {
        let good = json!({
            "cost": 1000,
            "sellingPrice": 4000,
            "category": "Продукты",
            "weight": 2,
            "deliveryZone": "country",
            "paymentType": "red"
        });
        let bad = json!({
            "cost": -5,
            "sellingPrice": 4000,
            "category": "Продукты",
            "weight": 2,
            "deliveryZone": "country",
            "paymentType": "red"
        });
        let (status, body) = post_json(
            "/api/unit-economics/calculate/batch",
            json!({ "items": [good, bad] }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["succeeded"], 1);
        assert_eq!(body["failed"], 1);
        assert_eq!(body["items"][0]["result"]["deliveryCost"], 0.0);
        assert_eq!(body["items"][0]["result"]["commissionPercent"], 5.0);
        assert!(body["items"][1]["error"].is_string());
    }

    #[tokio::test]
    async fn test_batch_over_limit_is_rejected() {
        let item = serde_json::to_value(contracts::domain::a001_unit_economics::ListingInput::default())
            .unwrap();
        let (status, _) = post_json(
            "/api/unit-economics/calculate/batch",
            json!({ "items": [item.clone(), item.clone(), item.clone(), item] }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reference_endpoints() {
        let (status, options) = get_json("/api/unit-economics/options").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(options["categories"].as_array().unwrap().len(), 23);

        let (status, defaults) = get_json("/api/unit-economics/defaults").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(defaults["sellingPrice"], 150000.0);

        let (status, rates) = get_json("/api/unit-economics/rates").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(rates["installmentPercent"], 15.0);
        assert_eq!(rates["freeDeliveryThreshold"], 5000.0);
    }
}
