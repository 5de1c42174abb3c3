mod common;

use anyhow::Result;
use serde_json::json;

#[tokio::test]
async fn schedules_require_a_session() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = common::no_redirect_client();

    let res = client
        .get(format!("{}/schedules?property_name=Mammoth", server.base_url))
        .send()
        .await?;

    assert!(res.status().is_redirection(), "expected redirect, got {}", res.status());
    Ok(())
}

#[tokio::test]
async fn schedule_mutations_unreachable_without_session() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = common::no_redirect_client();

    let payload = json!({
        "property_id": 1,
        "owner_id": 1,
        "start_date": "2026-08-07",
        "end_date": "2026-08-14",
        "status": "booked"
    });

    for path in ["/schedules/add", "/schedules/edit/1", "/schedules/delete/1"] {
        let res = client
            .post(format!("{}{}", server.base_url, path))
            .json(&payload)
            .send()
            .await?;

        assert!(
            res.status().is_redirection(),
            "{} should redirect without a session, got {}",
            path,
            res.status()
        );
    }
    Ok(())
}

#[tokio::test]
async fn informational_pages_require_a_session() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = common::no_redirect_client();

    for path in ["/exchange", "/info", "/feedback"] {
        let res = client.get(format!("{}{}", server.base_url, path)).send().await?;
        assert!(
            res.status().is_redirection(),
            "{} should redirect without a session, got {}",
            path,
            res.status()
        );
    }
    Ok(())
}
