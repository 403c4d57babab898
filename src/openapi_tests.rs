#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_schema_generation() {
        // Test that the OpenAPI schema can be generated without errors
        let openapi = ApiDoc::openapi();

        // Verify that the schema contains the expected components
        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        // Check that ErrorResponse schema is properly defined
        assert!(components.schemas.contains_key("ErrorResponse"));

        // Check that HealthResponse schema is properly defined
        assert!(components.schemas.contains_key("HealthResponse"));

        // Check that the chart payload schemas are properly defined
        assert!(components.schemas.contains_key("ChartDescription"));
        assert!(components.schemas.contains_key("DashboardMeta"));

        // Verify that the schema can be serialized to JSON without errors
        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_documented_paths() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/api/v1/dashboard/meta"));
        assert!(paths.contains_key("/api/v1/dashboard/chart"));
    }

    #[test]
    fn test_health_response_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let health_response_schema = components.schemas.get("HealthResponse").unwrap();

        // Verify HealthResponse has the expected structure
        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) =
            health_response_schema
        {
            let properties = &obj.properties;
            assert!(properties.contains_key("status"));
            assert!(properties.contains_key("version"));
            assert!(properties.contains_key("dataset"));
        } else {
            panic!("HealthResponse should be an object schema");
        }
    }
}
