//! Dashboard API router.
//!
//! Returns a composable `Router` with every endpoint under `/api/`.
//! When a front-end directory is given it is served for all other paths.
//!
//! Layers (outermost → innermost): CORS → no-store cache header →
//! access log → handler.

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the dashboard router.
///
/// Endpoint handlers use `State<ApiContext>` (provided via `with_state`).
pub fn dashboard_api_router(core: Arc<CoreState>, static_dir: Option<PathBuf>) -> Router {
    build_router(ApiContext::new(core), static_dir)
}

fn build_router(ctx: ApiContext, static_dir: Option<PathBuf>) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/views/:view", get(endpoints::views::show))
        .route("/dashboard", get(endpoints::dashboard::summary))
        .route(
            "/patients",
            get(endpoints::patients::list).post(endpoints::patients::create),
        )
        .route("/patients/:id", get(endpoints::patients::detail))
        .route(
            "/appointments",
            get(endpoints::appointments::list).post(endpoints::appointments::create),
        )
        .route(
            "/appointments/form-options",
            get(endpoints::appointments::form_options),
        )
        .route(
            "/doctors",
            get(endpoints::doctors::list).post(endpoints::doctors::create),
        )
        .route("/departments", get(endpoints::departments::list))
        .route("/schedule", get(endpoints::schedule::grid))
        .route("/schedule/week", post(endpoints::schedule::change_week))
        .route("/sort", post(endpoints::sort::sort_table))
        .route("/search", get(endpoints::search::global))
        .route("/settings", get(endpoints::settings::status))
        .route(
            "/settings/test-connection",
            post(endpoints::settings::test_connection),
        )
        .route("/sync", post(endpoints::sync::resync))
        .route("/sync/pending", get(endpoints::sync::pending))
        .route("/sync/retry", post(endpoints::sync::retry))
        .route(
            "/notifications/latest",
            get(endpoints::notifications::latest),
        )
        .route("/clock", get(endpoints::clock::current))
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::access_log::log_request))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new().nest("/api", api);
    let app = match static_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Serving front end");
            app.fallback_service(ServeDir::new(dir))
        }
        None => app,
    };
    app.layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::RemoteConfig;
    use crate::remote::MockRemoteStore;
    use crate::store::test_support::sample_store;

    fn test_core() -> Arc<CoreState> {
        Arc::new(CoreState::default())
    }

    fn seeded_core() -> Arc<CoreState> {
        let core = test_core();
        *core.write_store().unwrap() = sample_store();
        core
    }

    fn router(core: &Arc<CoreState>) -> Router {
        dashboard_api_router(core.clone(), None)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_storage_status() {
        let core = test_core();
        let response = router(&core).oneshot(get_req("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), "no-store");

        let json = response_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["storage"]["label"], "Local Storage Only");
        assert_eq!(json["pending_writes"], 0);
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let core = test_core();
        let response = router(&core)
            .oneshot(get_req("/api/nonexistent"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn view_switch_sets_current_view() {
        let core = seeded_core();
        let response = router(&core)
            .oneshot(get_req("/api/views/doctors"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["view"], "doctors");
        assert_eq!(json["container_id"], "doctorsView");
        assert_eq!(json["content"]["cards"].as_array().unwrap().len(), 2);
        assert_eq!(core.current_view().unwrap(), crate::models::View::Doctors);
    }

    #[tokio::test]
    async fn unknown_view_is_not_found() {
        let core = test_core();
        let response = router(&core)
            .oneshot(get_req("/api/views/lobby"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn dashboard_recomputes_analytics() {
        let core = seeded_core();
        let response = router(&core)
            .oneshot(get_req("/api/dashboard"))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["totals"]["patients"], 3);
        assert_eq!(json["analytics"]["patient_age_distribution"]["Child"], 1);
        assert_eq!(
            json["analytics"]["patient_department_distribution"]["Cardiology"],
            2
        );
    }

    #[tokio::test]
    async fn patients_list_filters_and_paginates() {
        let core = seeded_core();
        let response = router(&core)
            .oneshot(get_req("/api/patients?search=LOVE&status=all&page=1"))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["state"], "rows");
        assert_eq!(json["total_items"], 1);
        assert_eq!(json["rows"][0]["full_name"], "Ada Lovelace");

        let response = router(&core)
            .oneshot(get_req("/api/patients?search=nobody"))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["state"], "no_matches");
    }

    #[tokio::test]
    async fn patient_detail_and_missing_patient() {
        let core = seeded_core();
        let response = router(&core)
            .oneshot(get_req("/api/patients/2"))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["full_name"], "Grace Hopper");

        let response = router(&core)
            .oneshot(get_req("/api/patients/99"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn add_patient_returns_created() {
        let core = test_core();
        let body = serde_json::json!({
            "first_name": "Mary",
            "last_name": "Shelley",
            "gender": "F",
            "age": "28",
            "phone": "555-0142",
            "address": "4 Elm St",
            "blood_group": "A-"
        });
        let response = router(&core)
            .oneshot(post_json("/api/patients", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = response_json(response).await;
        assert_eq!(json["record"]["patient_id"], 1);
        assert_eq!(json["record"]["status"], "New Patient");
        assert_eq!(json["synced"], true);
        assert_eq!(core.read_store().unwrap().patients.len(), 1);
    }

    #[tokio::test]
    async fn appointment_without_patient_is_422_and_not_stored() {
        let core = seeded_core();
        let body = serde_json::json!({
            "patient_id": "",
            "doctor_id": "1",
            "date": "2026-10-21",
            "time": "10:00",
            "treatment": "Checkup"
        });
        let response = router(&core)
            .oneshot(post_json("/api/appointments", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION");
        assert_eq!(core.read_store().unwrap().appointments.len(), 3);

        let toast = core.latest_notification().unwrap().unwrap();
        assert_eq!(toast.kind, crate::models::NotificationKind::Warning);
    }

    #[tokio::test]
    async fn appointments_filter_by_doctor() {
        let core = seeded_core();
        let response = router(&core)
            .oneshot(get_req("/api/appointments?doctor_id=2"))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["total_items"], 1);
        assert_eq!(json["rows"][0]["doctor_name"], "Dr. Osei");

        let response = router(&core)
            .oneshot(get_req("/api/appointments?doctor_id=x"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn form_options_need_patients() {
        let core = test_core();
        let response = router(&core)
            .oneshot(get_req("/api/appointments/form-options"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = response_json(response).await;
        assert_eq!(
            json["error"]["message"],
            "Please add patients first before scheduling appointments"
        );
    }

    #[tokio::test]
    async fn sort_toggles_between_calls() {
        let core = seeded_core();
        let body = serde_json::json!({ "collection": "patients", "column": "age" });

        let response = router(&core)
            .oneshot(post_json("/api/sort", body.clone()))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["sort"]["order"], "asc");

        let response = router(&core)
            .oneshot(post_json("/api/sort", body))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["sort"]["order"], "desc");
        assert_eq!(core.read_store().unwrap().patients[0].age, 70);
    }

    #[tokio::test]
    async fn search_navigates_to_patients() {
        let core = seeded_core();
        let response = router(&core)
            .oneshot(get_req("/api/search?term=hopper"))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["patient_id"], 2);
        assert_eq!(json["shown"]["view"], "patients");
    }

    #[tokio::test]
    async fn departments_and_schedule_render() {
        let core = seeded_core();
        let response = router(&core)
            .oneshot(get_req("/api/departments"))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["cards"].as_array().unwrap().len(), 3);

        let response = router(&core)
            .oneshot(post_json("/api/schedule/week", serde_json::json!({ "offset": -1 })))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["direction"], "previous");
        assert_eq!(json["schedule"]["rows"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn resync_without_remote_warns() {
        let core = test_core();
        let response = router(&core)
            .oneshot(post_json("/api/sync", serde_json::json!({})))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["outcome"], "skipped");

        let response = router(&core)
            .oneshot(get_req("/api/notifications/latest"))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["notification"]["message"], "Google Sheets not configured");
        assert_eq!(json["notification"]["kind"], "warning");
    }

    #[tokio::test]
    async fn failed_save_is_listed_as_pending_until_retried() {
        let mock = Arc::new(MockRemoteStore::unreachable());
        let core = Arc::new(CoreState::with_remote(
            RemoteConfig::new("https://sheets.test/exec", true),
            mock.clone(),
        ));
        *core.write_store().unwrap() = sample_store();

        let body = serde_json::json!({
            "patient_id": "1",
            "doctor_id": "1",
            "date": "2026-10-21",
            "time": "10:00",
            "treatment": "Checkup"
        });
        let response = router(&core)
            .oneshot(post_json("/api/appointments", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = response_json(response).await;
        assert_eq!(json["synced"], false);

        let response = router(&core)
            .oneshot(get_req("/api/sync/pending"))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["count"], 1);
        assert_eq!(json["dropped"], 0);
        assert_eq!(json["writes"][0]["request"]["sheet"], "Appointments");

        mock.set_fail_saves(false);
        let response = router(&core)
            .oneshot(post_json("/api/sync/retry", serde_json::json!({})))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["succeeded"], 1);
        assert_eq!(json["remaining"], 0);
    }

    #[tokio::test]
    async fn settings_test_connection_requires_url() {
        let core = test_core();
        let response = router(&core)
            .oneshot(post_json(
                "/api/settings/test-connection",
                serde_json::json!({ "url": " " }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = router(&core)
            .oneshot(get_req("/api/settings"))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["badge"], "Not Configured");
    }

    #[tokio::test]
    async fn add_doctor_stub_and_clock() {
        let core = test_core();
        let response = router(&core)
            .oneshot(post_json("/api/doctors", serde_json::json!({})))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(
            json["notification"]["message"],
            "Add Doctor functionality - Coming Soon!"
        );

        let response = router(&core).oneshot(get_req("/api/clock")).await.unwrap();
        let json = response_json(response).await;
        assert!(!json["text"].as_str().unwrap().is_empty());
    }
}
