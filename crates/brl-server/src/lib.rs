//! HTTP server for the BookLeaf Royalty Ledger.
//!
//! Serves the royalty-accounting JSON API over a shared in-memory
//! [`brl_ledger::RoyaltyLedger`]: author listings and detail, per-author
//! sales history, withdrawal creation, and withdrawal history. All routes
//! allow CORS; requests are traced via `tower-http`.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::{ApiError, ServerError, ServerResult};
pub use handler::SharedLedger;
pub use router::build_router;
pub use server::RoyaltyServer;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use tower::util::ServiceExt;

    use brl_ledger::RoyaltyLedger;

    use super::*;

    fn app() -> Router {
        build_router(Arc::new(RoyaltyLedger::seeded()))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn home_lists_endpoints() {
        let response = app().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["message"], "BookLeaf Author Royalty API");
        assert_eq!(json["endpoints"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn health_endpoint() {
        let response = app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn authors_listing_carries_financials() {
        let response = app().oneshot(get("/authors")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let authors = json.as_array().unwrap();
        assert_eq!(authors.len(), 3);
        assert_eq!(authors[0]["name"], "Priya Sharma");
        assert_eq!(authors[0]["total_earnings"], 3825);
        assert_eq!(authors[0]["current_balance"], 3825);
        assert_eq!(authors[1]["total_earnings"], 9975);
        assert_eq!(authors[2]["total_earnings"], 400);
    }

    #[tokio::test]
    async fn author_detail_shape() {
        let response = app().oneshot(get("/authors/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["email"], "priya@email.com");
        assert_eq!(json["total_books"], 2);
        assert_eq!(json["books"][0]["title"], "The Silent River");
        assert_eq!(json["books"][0]["total_sold"], 65);
        assert_eq!(json["books"][0]["total_royalty"], 2925);
        // Bank details never cross the HTTP surface.
        assert!(json.get("bank_account").is_none());
        assert!(json.get("ifsc").is_none());
    }

    #[tokio::test]
    async fn unknown_author_is_404_everywhere() {
        for uri in [
            "/authors/999",
            "/authors/999/sales",
            "/authors/999/withdrawals",
        ] {
            let response = app().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
            let json = body_json(response).await;
            assert_eq!(json["error"], "Author not found", "{uri}");
        }
    }

    #[tokio::test]
    async fn sales_are_newest_first() {
        let response = app().oneshot(get("/authors/1/sales")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let sales = json.as_array().unwrap();
        assert_eq!(sales.len(), 3);
        assert_eq!(sales[0]["sale_date"], "2025-01-12");
        assert_eq!(sales[0]["royalty_earned"], 1800);
        assert_eq!(sales[2]["sale_date"], "2025-01-05");
    }

    #[tokio::test]
    async fn withdrawal_flow() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json("/withdrawals", r#"{"author_id": 1, "amount": 2000}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["id"], 1);
        assert_eq!(json["author_id"], 1);
        assert_eq!(json["amount"], 2000);
        assert_eq!(json["status"], "pending");
        assert_eq!(json["new_balance"], 1825);
        assert!(json["created_at"].as_str().unwrap().ends_with('Z'));

        let response = app
            .clone()
            .oneshot(get("/authors/1/withdrawals"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let history = json.as_array().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0]["amount"], 2000);
        assert!(history[0].get("author_id").is_none());

        let response = app.clone().oneshot(get("/authors")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json[0]["current_balance"], 1825);
    }

    #[tokio::test]
    async fn withdrawal_below_minimum_is_400() {
        let response = app()
            .oneshot(post_json("/withdrawals", r#"{"author_id": 1, "amount": 400}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Minimum withdrawal amount is ₹500");
    }

    #[tokio::test]
    async fn withdrawal_over_balance_is_400() {
        let response = app()
            .oneshot(post_json("/withdrawals", r#"{"author_id": 3, "amount": 500}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Insufficient balance. Current balance: ₹400");
    }

    #[tokio::test]
    async fn withdrawal_for_unknown_author_is_404() {
        let response = app()
            .oneshot(post_json("/withdrawals", r#"{"author_id": 999, "amount": 1000}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Author not found");
    }

    #[tokio::test]
    async fn withdrawal_with_missing_fields_is_400() {
        for body in ["{}", r#"{"author_id": 1}"#, r#"{"amount": 900}"#, "not json"] {
            let response = app()
                .oneshot(post_json("/withdrawals", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
            let json = body_json(response).await;
            assert_eq!(
                json["error"], "Missing required fields: author_id and amount",
                "{body}"
            );
        }
    }
}
