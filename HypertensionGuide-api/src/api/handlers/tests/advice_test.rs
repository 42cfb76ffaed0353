#[cfg(test)]
mod advice_tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use chrono::{Duration, TimeZone, Utc};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use hypertension_guide_domain::testing::{
        crisis_input, grade_1_input, stable_trend, MockAdviceService, MockHealthService,
    };

    use crate::api::handlers::advice::AdviceServiceHandle;
    use crate::api::routes::create_app_with_services;

    fn app_with(service: MockAdviceService) -> Router {
        let advice: AdviceServiceHandle = Arc::new(service);
        create_app_with_services(advice, Arc::new(MockHealthService::new()), "test")
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn readings_json(values: &[(f64, f64)]) -> Value {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap();
        Value::Array(
            values
                .iter()
                .enumerate()
                .map(|(day, (systolic, diastolic))| {
                    json!({
                        "systolic": systolic,
                        "diastolic": diastolic,
                        "measured_at": (start + Duration::days(day as i64)).to_rfc3339(),
                    })
                })
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_create_advice_returns_envelope() {
        let body = serde_json::to_value(grade_1_input()).unwrap();
        let (status, json) = post_json(app_with(MockAdviceService::new()), "/api/v1/advice", body).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["advice_id"].is_string());
        assert!(json["generated_at"].is_string());
        assert_eq!(json["advice"]["assessment"]["blood_pressure_level"], "GRADE_1");
        assert_eq!(json["advice"]["basic_assessment"]["bmi"], 25.71);
        assert!(json["report"].as_str().unwrap().contains("[Blood pressure assessment]"));
    }

    #[tokio::test]
    async fn test_crisis_advice_flags_emergency() {
        let body = serde_json::to_value(crisis_input()).unwrap();
        let (status, json) = post_json(app_with(MockAdviceService::new()), "/api/v1/advice", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["advice"]["emergency"]["is_emergency"], true);
        assert_eq!(json["advice"]["emergency"]["urgency"], "EMERGENCY");
        assert!(!json["advice"]["warnings"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let body = json!({ "age": 50, "systolic_bp": 150.0, "diastolic_bp": 95.0 });
        let (status, json) = post_json(app_with(MockAdviceService::new()), "/api/v1/advice", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
        assert!(json["message"].as_str().unwrap().contains("gender"));
    }

    #[tokio::test]
    async fn test_mock_validation_failure_is_bad_request() {
        let body = serde_json::to_value(grade_1_input()).unwrap();
        let (status, json) = post_json(
            app_with(MockAdviceService::new().with_validation_failure()),
            "/api/v1/advice",
            body,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["message"].as_str().unwrap().contains("mock is configured"));
    }

    #[tokio::test]
    async fn test_classify_reading() {
        let (status, json) = post_json(
            app_with(MockAdviceService::new()),
            "/api/v1/assessment/classify",
            json!({ "systolic": 190.0, "diastolic": 120.0 }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["blood_pressure_level"], "GRADE_3");
        assert_eq!(json["label"], "Grade 3 hypertension");
        assert_eq!(json["emergency"]["is_emergency"], true);
    }

    #[tokio::test]
    async fn test_classify_rejects_inverted_reading() {
        let (status, json) = post_json(
            app_with(MockAdviceService::new()),
            "/api/v1/assessment/classify",
            json!({ "systolic": 90.0, "diastolic": 120.0 }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["message"].as_str().unwrap().contains("lower than systolic"));
    }

    #[tokio::test]
    async fn test_trend_with_enough_readings() {
        let mut values = vec![(150.0, 95.0); 7];
        values.extend(vec![(138.0, 88.0); 7]);
        let (status, json) = post_json(
            app_with(MockAdviceService::new()),
            "/api/v1/readings/trend",
            readings_json(&values),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["direction"], "FALLING");
        assert_eq!(json["systolic_change"], -12.0);
        assert_eq!(json["reading_count"], 14);
    }

    #[tokio::test]
    async fn test_trend_with_too_few_readings() {
        let (status, json) = post_json(
            app_with(MockAdviceService::new()),
            "/api/v1/readings/trend",
            readings_json(&[(140.0, 90.0)]),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"], "insufficient_data");
    }

    #[tokio::test]
    async fn test_trend_from_configured_mock() {
        let (status, json) = post_json(
            app_with(MockAdviceService::new().with_trend(stable_trend())),
            "/api/v1/readings/trend",
            readings_json(&[(130.0, 85.0)]),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["direction"], "STABLE");
        assert_eq!(json["reading_count"], 1);
    }
}
