// handlers/pages/mod.rs - landing page and the informational pages.
//
// The exchange/info/feedback submissions are logged only; nothing is
// persisted for them.

use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};

/// GET / - public landing shell
pub async fn landing() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head><title>Resort Property Ventures</title></head>
<body>
  <h1>Welcome to Resort Property Ventures</h1>
  <p><a href="/login">Go to Login</a></p>
</body>
</html>"#,
    )
}

/// GET /exchange
pub async fn exchange_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head><title>RPV Exchange</title></head>
<body><h1>Exchange</h1><p>Request a week exchange with another property.</p></body>
</html>"#,
    )
}

/// GET /info
pub async fn info_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head><title>RPV Information</title></head>
<body><h1>Information</h1><p>Resort policies and contact details.</p></body>
</html>"#,
    )
}

/// GET /feedback
pub async fn feedback_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head><title>RPV Feedback</title></head>
<body><h1>Feedback</h1><p>Tell us about your stay.</p></body>
</html>"#,
    )
}

/// POST /exchange
pub async fn exchange_submit(Json(fields): Json<Value>) -> Json<Value> {
    tracing::info!("Exchange request submitted: {}", fields);
    Json(json!({
        "success": true,
        "message": "Exchange request received"
    }))
}

/// POST /info
pub async fn info_submit(Json(fields): Json<Value>) -> Json<Value> {
    tracing::info!("Info request submitted: {}", fields);
    Json(json!({
        "success": true,
        "message": "Information request received"
    }))
}

/// POST /feedback
pub async fn feedback_submit(Json(fields): Json<Value>) -> Json<Value> {
    tracing::info!("Feedback submitted: {}", fields);
    Json(json!({
        "success": true,
        "message": "Feedback received"
    }))
}
