//! Router-level tests driven with `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use configs::DatabaseConfig;
use serde_json::{json, Value};
use server::routes::{build_router, RouterOptions};
use server::state::ServerState;
use service::media::MediaUrls;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

async fn app_with(enable_admin: bool, media_root: &str) -> anyhow::Result<Router> {
    let db = models::db::connect_and_migrate(&DatabaseConfig::in_memory()).await?;
    let state = ServerState::new(db, MediaUrls::new("/media/"));
    let opts = RouterOptions { media_root: media_root.to_string(), enable_admin };
    Ok(build_router(state, &opts, CorsLayer::very_permissive()))
}

async fn app(enable_admin: bool) -> anyhow::Result<Router> {
    app_with(enable_admin, "media").await
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&v)?)
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(req.body(body)?).await?;
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}

async fn get(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Method::GET, uri, None).await
}

#[tokio::test]
async fn health_and_docs() -> anyhow::Result<()> {
    let app = app(false).await?;
    let (status, body) = get(&app, "/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, doc) = get(&app, "/api-docs/openapi.json").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/api/modules/{slug}/").is_some());
    assert!(doc["paths"]["/api/contact-message/"]["post"].get("requestBody").is_some());
    Ok(())
}

#[tokio::test]
async fn empty_lists_and_trailing_slash() -> anyhow::Result<()> {
    let app = app(false).await?;
    for uri in ["/api/categories/", "/api/categories", "/api/clients/", "/api/clients?category=", "/api/modules"] {
        let (status, body) = get(&app, uri).await?;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn singletons_are_created_on_read() -> anyhow::Result<()> {
    let app = app(false).await?;
    let (status, info) = get(&app, "/api/contact-info/").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(info["hours_weekday"], "9:00 AM - 6:00 PM");
    assert!(info.get("id").is_none());

    let (_, hardware) = get(&app, "/api/hardware").await?;
    assert_eq!(hardware["distributor"]["button_link"], "/contact");
    assert_eq!(hardware["features"], json!([]));

    let (_, home) = get(&app, "/api/home/").await?;
    assert_eq!(home["hero"]["secondary_button_text"], "Explore Modules");
    assert_eq!(home["hero"]["background_image"], Value::Null);
    assert_eq!(home["clients"], json!([]));
    Ok(())
}

#[tokio::test]
async fn contact_message_validation() -> anyhow::Result<()> {
    let app = app(true).await?;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/contact-message/",
        Some(json!({"name": "Ali", "email": "ali@example.com", "subject": "", "message": "hi"})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "All fields are required"}));

    let (status, body) = send(&app, Method::POST, "/api/contact-message", Some(json!({"name": "Ali"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "All fields are required");

    let (_, inbox) = get(&app, "/admin/contact-messages").await?;
    assert_eq!(inbox, json!([]));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/contact-message/",
        Some(json!({"name": "Ali", "email": "ali@example.com", "subject": "Demo", "message": "Call me"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": "Message sent successfully"}));

    let (_, inbox) = get(&app, "/admin/contact-messages?is_read=false").await?;
    assert_eq!(inbox.as_array().map(Vec::len), Some(1));
    assert_eq!(inbox[0]["is_read"], false);
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_bad_request() -> anyhow::Result<()> {
    let app = app(false).await?;
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/contact-message/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))?;
    let res = app.oneshot(req).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&to_bytes(res.into_body(), usize::MAX).await?)?;
    assert_eq!(body["error"], "Invalid JSON body");
    Ok(())
}

#[tokio::test]
async fn clients_filter_by_category() -> anyhow::Result<()> {
    let app = app(true).await?;
    let (status, cat) = send(&app, Method::POST, "/admin/content/categories", Some(json!({"name": "Banking"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    let cat_id = cat["id"].as_i64().unwrap();
    send(&app, Method::POST, "/admin/content/clients", Some(json!({"name": "HBL", "category_id": cat_id, "logo": "clients/hbl.png"}))).await?;
    send(&app, Method::POST, "/admin/content/clients", Some(json!({"name": "Solo"}))).await?;

    let (_, filtered) = get(&app, &format!("/api/clients/?category={cat_id}")).await?;
    assert_eq!(
        filtered,
        json!([{"id": filtered[0]["id"], "name": "HBL", "logo": "/media/clients/hbl.png", "category_id": cat_id}])
    );

    let (_, none) = get(&app, "/api/clients/?category=4242").await?;
    assert_eq!(none, json!([]));

    let (status, _) = get(&app, "/api/clients/?category=abc").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, all) = get(&app, "/api/clients").await?;
    assert_eq!(all.as_array().map(Vec::len), Some(2));
    assert_eq!(all[1]["logo"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn module_detail_not_found() -> anyhow::Result<()> {
    let app = app(true).await?;
    send(&app, Method::POST, "/admin/content/modules", Some(json!({"name": "Payroll", "content": "<p>Pay</p>"}))).await?;
    let (_, hidden) =
        send(&app, Method::POST, "/admin/content/modules", Some(json!({"name": "Legacy", "is_active": false}))).await?;
    assert_eq!(hidden["slug"], "legacy");

    let (status, module) = get(&app, "/api/modules/payroll/").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(module["content"], "<p>Pay</p>");
    assert_eq!(module["featured_image"], Value::Null);

    for uri in ["/api/modules/legacy/", "/api/modules/unknown"] {
        let (status, body) = get(&app, uri).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"error": "Module not found"}));
    }
    Ok(())
}

#[tokio::test]
async fn admin_is_off_by_default() -> anyhow::Result<()> {
    let app = app(false).await?;
    let (status, _) = get(&app, "/admin/content/stats").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn admin_content_lifecycle() -> anyhow::Result<()> {
    let app = app(true).await?;
    let (status, _) = get(&app, "/admin/content/widgets").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) =
        send(&app, Method::POST, "/admin/content/devices", Some(json!({"name": "X", "icon": "NopeIcon"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("icon"));

    let (_, stat) = send(&app, Method::POST, "/admin/content/stats", Some(json!({"value": "500+", "label": "Clients"}))).await?;
    let id = stat["id"].as_i64().unwrap();

    let (status, patched) =
        send(&app, Method::PATCH, &format!("/admin/content/stats/{id}"), Some(json!({"is_active": false}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["is_active"], false);

    let (_, home) = get(&app, "/api/home/").await?;
    assert_eq!(home["stats"], json!([]));
    let (_, admin_list) = get(&app, "/admin/content/stats").await?;
    assert_eq!(admin_list.as_array().map(Vec::len), Some(1));

    let (status, _) = send(&app, Method::DELETE, &format!("/admin/content/stats/{id}"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::DELETE, &format!("/admin/content/stats/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn admin_non_numeric_id_is_json_error() -> anyhow::Result<()> {
    let app = app(true).await?;
    for (method, uri) in [
        (Method::GET, "/admin/content/stats/abc"),
        (Method::DELETE, "/admin/content/stats/abc"),
        (Method::DELETE, "/admin/contact-messages/abc"),
    ] {
        let res = app.clone().oneshot(Request::builder().method(method).uri(uri).body(Body::empty())?).await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{uri}");
        let ct = res.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()).unwrap_or_default().to_string();
        assert!(ct.starts_with("application/json"), "{uri}: {ct}");
        let body: Value = serde_json::from_slice(&to_bytes(res.into_body(), usize::MAX).await?)?;
        assert_eq!(body["error"], "Invalid path parameter", "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn admin_singleton_update_shows_publicly() -> anyhow::Result<()> {
    let app = app(true).await?;
    let (status, saved) =
        send(&app, Method::PUT, "/admin/contact-info", Some(json!({"sales_phone": "+92 300 0000000"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["id"], 1);

    let (_, info) = get(&app, "/api/contact-info").await?;
    assert_eq!(info["sales_phone"], "+92 300 0000000");
    assert_eq!(info["hours_sunday"], "Closed");

    let (_, hero) = send(&app, Method::PUT, "/admin/hero", Some(json!({"background_image": "hero/bg.jpg"}))).await?;
    assert_eq!(hero["background_image"], "hero/bg.jpg");
    let (_, home) = get(&app, "/api/home").await?;
    assert_eq!(home["hero"]["background_image"], "/media/hero/bg.jpg");
    Ok(())
}

#[tokio::test]
async fn serves_media_files() -> anyhow::Result<()> {
    let root = std::env::temp_dir().join(format!("site_cms_api_media_{}", std::process::id()));
    tokio::fs::create_dir_all(root.join("clients")).await?;
    tokio::fs::write(root.join("clients/logo.txt"), b"logo").await?;

    let app = app_with(false, &root.to_string_lossy()).await?;
    let res = app
        .oneshot(Request::builder().uri("/media/clients/logo.txt").body(Body::empty())?)
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(&to_bytes(res.into_body(), usize::MAX).await?[..], b"logo");

    tokio::fs::remove_dir_all(&root).await?;
    Ok(())
}
