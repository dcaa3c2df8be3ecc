//! Stored-procedure calls and client-level headers end to end.

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use pgrest_client::ClientConfig;
    use serde_json::json;

    use crate::async_client;

    #[tokio::test]
    async fn test_should_post_rpc_params_as_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/rpc/add_them")
                    .json_body(json!({"a": 1, "b": 2}));
                then.status(200).body("3");
            })
            .await;

        let client = async_client(&server.base_url());
        let (result, count) = client
            .rpc("add_them", json!({"a": 1, "b": 2}))
            .execute()
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result, json!(3));
        assert_eq!(count, None);
    }

    #[tokio::test]
    async fn test_should_filter_rpc_result_set() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/rpc/list_cities")
                    .query_param("population", "gte.1000000")
                    .json_body(json!({"country": "IN"}));
                then.status(200).json_body(json!([{"name": "Mumbai"}]));
            })
            .await;

        let client = async_client(&server.base_url());
        let (rows, _) = client
            .rpc("list_cities", json!({"country": "IN"}))
            .gte("population", 1_000_000)
            .execute()
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(rows, json!([{"name": "Mumbai"}]));
    }

    #[tokio::test]
    async fn test_should_carry_auth_and_schema_headers_on_the_wire() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/countries")
                    .header("authorization", "Bearer secret-token")
                    .header("accept-profile", "tenant_a");
                then.status(200).json_body(json!([]));
            })
            .await;

        let client = async_client(&server.base_url())
            .schema("tenant_a")
            .auth(Some("secret-token"), None, "")
            .unwrap();
        let (rows, _) = client
            .from_("countries")
            .select(["*"], None)
            .execute()
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(rows, json!([]));
    }

    #[tokio::test]
    async fn test_should_treat_empty_body_as_null() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/rpc/fire_and_forget");
                then.status(204);
            })
            .await;

        let client = async_client(&server.base_url());
        let (result, count) = client
            .rpc("fire_and_forget", json!({}))
            .execute()
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(result.is_null());
        assert_eq!(count, None);
    }

    #[test]
    fn test_should_read_config_from_env() {
        // SAFETY: tests in this binary that touch the environment run here only.
        unsafe {
            std::env::set_var("PGREST_BASE_URL", "http://db.internal:3000");
            std::env::set_var("PGREST_SCHEMA", "reporting");
        }
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "http://db.internal:3000");
        assert_eq!(config.schema, "reporting");
        unsafe {
            std::env::remove_var("PGREST_BASE_URL");
            std::env::remove_var("PGREST_SCHEMA");
        }
    }
}
