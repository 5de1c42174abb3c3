mod common;

use anyhow::Result;
use serde_json::json;

#[tokio::test]
async fn directory_requires_a_session() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = common::no_redirect_client();

    let res = client
        .get(format!("{}/directory", server.base_url))
        .send()
        .await?;

    assert!(res.status().is_redirection(), "expected redirect, got {}", res.status());
    let location = res
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(location, "/login");
    Ok(())
}

#[tokio::test]
async fn directory_rejects_stale_session_cookies() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = common::no_redirect_client();

    // A well-formed session id that the store has never seen
    let res = client
        .get(format!("{}/directory", server.base_url))
        .header("cookie", "rpv_session=00000000-0000-0000-0000-000000000000")
        .send()
        .await?;

    assert!(res.status().is_redirection(), "expected redirect, got {}", res.status());
    Ok(())
}

#[tokio::test]
async fn directory_mutations_unreachable_without_session() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = common::no_redirect_client();

    // Authentication runs before the role check: no session means a
    // redirect, never a 403
    let payload = json!({
        "primary_first_name": "John",
        "primary_last_name": "Doe",
        "secondary_first_name": null,
        "secondary_last_name": null,
        "contact_info": "555-0100",
        "email": "john@example.com",
        "notes": ""
    });

    for path in ["/directory/add", "/directory/edit/1", "/directory/delete/1"] {
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
