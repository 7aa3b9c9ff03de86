use std::sync::Arc;

use async_trait::async_trait;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use shared::{
    domain::FilterGroup,
    protocol::{FoodItem, PreferenceRequest, RecommendationResponse},
};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

use super::*;

#[derive(Clone)]
enum Reply {
    Json(serde_json::Value),
    Status(StatusCode),
    Raw(&'static str),
}

#[derive(Clone)]
struct ServerState {
    tx: Arc<Mutex<Option<oneshot::Sender<serde_json::Value>>>>,
    reply: Reply,
}

async fn handle_recommend(
    State(state): State<ServerState>,
    Json(payload): Json<serde_json::Value>,
) -> axum::response::Response {
    use axum::response::IntoResponse;

    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(payload);
    }
    match state.reply {
        Reply::Json(body) => Json(body).into_response(),
        Reply::Status(status) => (status, "boom").into_response(),
        Reply::Raw(body) => (StatusCode::OK, body).into_response(),
    }
}

async fn spawn_recommender(
    reply: Reply,
) -> anyhow::Result<(String, oneshot::Receiver<serde_json::Value>)> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (tx, rx) = oneshot::channel();
    let state = ServerState {
        tx: Arc::new(Mutex::new(Some(tx))),
        reply,
    };
    let app = Router::new()
        .route("/recommend", post(handle_recommend))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}"), rx))
}

fn sample_body() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "count": 2,
        "recommendations": [
            {"name": "Hilsa Fish Curry", "price": 450, "calories": "medium",
             "spice": "hot", "protein": 28, "prep": "long",
             "categories": ["non_veg", "seafood"], "trending": true},
            {"name": "Masala Dosa", "price": 150, "calories": "low",
             "spice": "mild", "protein": 6.5, "prep": "quick",
             "categories": ["vegetarian"], "trending": false}
        ]
    })
}

#[tokio::test]
async fn posts_camel_case_preferences_to_recommend() {
    let (server_url, payload_rx) = spawn_recommender(Reply::Json(sample_body()))
        .await
        .expect("spawn server");
    let api = HttpRecommender::new(&server_url).expect("client");

    let mut session = Session::new(server_url);
    session.selection.select(FilterGroup::Cuisine, "bangladeshi");
    session.selection.toggle_category("seafood");
    session.form.max_price = "800".to_string();
    session.form.vegetarian_only = true;

    let completion = submit(&mut session, &api).await;
    assert_eq!(completion, Completion::Loaded { count: 2 });

    let payload = payload_rx.await.expect("payload");
    assert_eq!(
        payload,
        serde_json::json!({
            "minPrice": 0,
            "maxPrice": 800,
            "calorieLevel": "any",
            "mealType": "any",
            "cuisine": "bangladeshi",
            "categories": ["seafood"],
            "spiceLevel": "any",
            "prepTime": "any",
            "vegetarianOnly": true
        })
    );

    match session.results() {
        ResultsPhase::Loaded(grid) => {
            assert_eq!(grid.cards()[0].name, "Hilsa Fish Curry");
            assert_eq!(grid.cards()[0].icon, "🐟");
            assert!(grid.cards()[0].trending);
            assert_eq!(grid.cards()[1].name, "Masala Dosa");
            assert_eq!(grid.cards()[1].details[3].value, "6.5g");
        }
        other => panic!("unexpected results phase: {other:?}"),
    }
}

#[tokio::test]
async fn empty_reply_shows_placeholder() {
    let body = serde_json::json!({"success": true, "count": 0, "recommendations": []});
    let (server_url, _payload_rx) = spawn_recommender(Reply::Json(body))
        .await
        .expect("spawn server");
    let api = HttpRecommender::new(&server_url).expect("client");
    let mut session = Session::new(server_url);

    assert_eq!(submit(&mut session, &api).await, Completion::Empty);
    assert_eq!(session.page(), Page::Results);
    assert_eq!(session.results(), &ResultsPhase::Empty);
    assert!(session.take_notice().is_none());
}

#[tokio::test]
async fn reply_without_success_flag_shows_placeholder() {
    let body = serde_json::json!({"error": "no match"});
    let (server_url, _payload_rx) = spawn_recommender(Reply::Json(body))
        .await
        .expect("spawn server");
    let api = HttpRecommender::new(&server_url).expect("client");
    let mut session = Session::new(server_url);

    assert_eq!(submit(&mut session, &api).await, Completion::Empty);
    assert_eq!(session.results(), &ResultsPhase::Empty);
    assert!(session.take_notice().is_none());
}

#[tokio::test]
async fn partial_item_still_renders_a_card() {
    let body = serde_json::json!({
        "success": true,
        "count": 1,
        "recommendations": [{"name": "Pad Thai", "price": 220, "spice": "hot"}]
    });
    let (server_url, _payload_rx) = spawn_recommender(Reply::Json(body))
        .await
        .expect("spawn server");
    let api = HttpRecommender::new(&server_url).expect("client");
    let mut session = Session::new(server_url);

    assert_eq!(
        submit(&mut session, &api).await,
        Completion::Loaded { count: 1 }
    );
    match session.results() {
        ResultsPhase::Loaded(grid) => {
            let card = &grid.cards()[0];
            assert_eq!(card.name, "Pad Thai");
            assert_eq!(card.price, "৳220");
            assert_eq!(card.details[3].value, render::MISSING_VALUE);
        }
        other => panic!("unexpected results phase: {other:?}"),
    }
}

#[tokio::test]
async fn non_ok_status_maps_to_status_error() {
    let (server_url, _payload_rx) =
        spawn_recommender(Reply::Status(StatusCode::INTERNAL_SERVER_ERROR))
            .await
            .expect("spawn server");
    let api = HttpRecommender::new(&server_url).expect("client");

    let err = api
        .recommend(&PreferenceRequest::default())
        .await
        .expect_err("must fail");
    assert!(
        matches!(err, RecommendError::Status { status: 500 }),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error_and_reverts_to_entry() {
    let (server_url, _payload_rx) = spawn_recommender(Reply::Raw("<html>not json</html>"))
        .await
        .expect("spawn server");
    let api = HttpRecommender::new(&server_url).expect("client");

    let err = api
        .recommend(&PreferenceRequest::default())
        .await
        .expect_err("must fail");
    assert!(matches!(err, RecommendError::Decode(_)), "unexpected error: {err}");

    let mut session = Session::new(server_url);
    assert_eq!(submit(&mut session, &api).await, Completion::Failed);
    assert_eq!(session.page(), Page::Preferences);
    assert!(session.take_notice().is_some());
}

#[tokio::test]
async fn unreachable_server_is_a_transport_failure() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let server_url = format!("http://{addr}");
    let api = HttpRecommender::new(&server_url).expect("client");
    let err = api
        .recommend(&PreferenceRequest::default())
        .await
        .expect_err("must fail");
    assert!(err.is_transport(), "unexpected error: {err}");

    let mut session = Session::new(server_url);
    assert_eq!(submit(&mut session, &api).await, Completion::Failed);
    assert_eq!(session.page(), Page::Preferences);
    assert!(session.take_notice().is_some());
    assert!(session.take_notice().is_none());
}

struct CannedRecommender {
    items: Vec<FoodItem>,
    calls: Arc<Mutex<Vec<PreferenceRequest>>>,
}

#[async_trait]
impl RecommenderApi for CannedRecommender {
    async fn recommend(
        &self,
        request: &PreferenceRequest,
    ) -> Result<RecommendationResponse, RecommendError> {
        self.calls.lock().await.push(request.clone());
        Ok(RecommendationResponse {
            success: true,
            count: self.items.len() as i64,
            recommendations: self.items.clone(),
        })
    }
}

#[tokio::test]
async fn resubmitting_replaces_previous_cards() {
    let items: Vec<FoodItem> = serde_json::from_value(sample_body()["recommendations"].clone())
        .expect("items");
    let calls = Arc::new(Mutex::new(Vec::new()));
    let api = CannedRecommender {
        items,
        calls: calls.clone(),
    };
    let mut session = Session::new("http://localhost:5000");

    submit(&mut session, &api).await;
    let first = session.results().clone();
    session.form.min_price = "abc".to_string();
    submit(&mut session, &api).await;

    assert_eq!(session.results(), &first);
    let calls = calls.lock().await;
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].min_price, 0);
}
