#[cfg(test)]
mod health_tests {
    use std::sync::Arc;

    use axum::{body::to_bytes, response::IntoResponse, Extension};
    use axum::http::StatusCode;
    use serde_json::Value;

    use hypertension_guide_domain::health::{ComponentStatus, HealthServiceTrait, SystemStatus};
    use hypertension_guide_domain::testing::MockHealthService;

    use crate::api::handlers::health::{
        create_health_service, health_check, initialize_server_start_time, AppEnvironment,
        HealthServiceHandle,
    };

    async fn call(service: MockHealthService) -> (StatusCode, Value) {
        initialize_server_start_time();
        let handle: HealthServiceHandle = Arc::new(service);

        let response = health_check(Extension(handle), Extension(AppEnvironment("test".to_string())))
            .await
            .into_response();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_healthy_service() {
        let (status, json) = call(MockHealthService::new()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["environment"], "test");
        assert!(json["version"].is_string());
        assert!(json["uptime"].is_u64());
        assert_eq!(json["components"]["rule_engine"]["status"], "ok");
        assert!(json["components"].get("additional").is_none());
    }

    #[tokio::test]
    async fn test_unhealthy_engine() {
        let (status, json) = call(MockHealthService::new().with_unhealthy_engine()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["status"], "error");
        assert_eq!(json["components"]["rule_engine"]["status"], "error");
        assert_eq!(
            json["components"]["rule_engine"]["message"],
            "Rule engine self-check failed"
        );
    }

    #[tokio::test]
    async fn test_degraded_custom_component() {
        let service = MockHealthService::new()
            .with_system_status(SystemStatus::Degraded)
            .with_component("narrator", ComponentStatus::Degraded, Some("LLM narrator unavailable".to_string()));
        let (status, json) = call(service).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["components"]["additional"]["narrator"]["status"], "degraded");
    }

    #[test]
    fn test_default_health_service_passes_self_check() {
        let service = create_health_service();
        assert!(service.check_rule_engine_status().is_ok());
        assert_eq!(service.get_system_health().status, SystemStatus::Healthy);
    }
}
