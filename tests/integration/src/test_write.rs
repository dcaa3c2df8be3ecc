//! Write-path tests: insert, upsert, update, delete.

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use pgrest_client::{CountMethod, InsertOptions};
    use serde_json::json;

    use crate::{async_client, blocking_client};

    #[tokio::test]
    async fn test_should_insert_row_with_counted_representation() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/countries")
                    .header("prefer", "return=representation,count=exact")
                    .header("content-type", "application/json")
                    .json_body(json!({"name": "Wadiya"}));
                then.status(201)
                    .header("content-range", "*/1")
                    .json_body(json!([{"id": 8, "name": "Wadiya"}]));
            })
            .await;

        let client = async_client(&server.base_url());
        let (rows, count) = client
            .from_("countries")
            .insert(
                json!({"name": "Wadiya"}),
                InsertOptions::counted(CountMethod::Exact),
            )
            .execute()
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(rows, json!([{"id": 8, "name": "Wadiya"}]));
        assert_eq!(count, Some(1));
    }

    #[tokio::test]
    async fn test_should_upsert_many_rows_as_json_array() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/countries")
                    .header("prefer", "return=representation,resolution=merge-duplicates")
                    .json_body(json!([{"id": 1, "name": "India"}, {"id": 2, "name": "Chile"}]));
                then.status(201)
                    .json_body(json!([{"id": 1, "name": "India"}, {"id": 2, "name": "Chile"}]));
            })
            .await;

        let client = async_client(&server.base_url());
        let rows = vec![json!({"id": 1, "name": "India"}), json!({"id": 2, "name": "Chile"})];
        let (returned, count) = client
            .from_("countries")
            .insert_many(rows, InsertOptions::upserting())
            .execute()
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(returned.as_array().map(Vec::len), Some(2));
        assert_eq!(count, None);
    }

    #[tokio::test]
    async fn test_should_patch_only_matching_rows() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/countries")
                    .query_param("id", "eq.1")
                    .header("prefer", "return=representation")
                    .json_body(json!({"capital": "New Delhi"}));
                then.status(200)
                    .json_body(json!([{"id": 1, "capital": "New Delhi"}]));
            })
            .await;

        let client = async_client(&server.base_url());
        let (rows, _) = client
            .from_("countries")
            .update(json!({"capital": "New Delhi"}), None)
            .eq("id", 1)
            .execute()
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(rows, json!([{"id": 1, "capital": "New Delhi"}]));
    }

    #[test]
    fn test_should_delete_without_body_through_blocking_transport() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(DELETE)
                .path("/countries")
                .query_param("id", "eq.7")
                .header("prefer", "return=representation,count=exact");
            then.status(200)
                .header("content-range", "*/1")
                .json_body(json!([{"id": 7}]));
        });

        let client = blocking_client(&server.base_url());
        let (rows, count) = client
            .from_("countries")
            .delete(Some(CountMethod::Exact))
            .eq("id", 7)
            .execute_blocking()
            .unwrap();

        mock.assert();
        assert_eq!(rows, json!([{"id": 7}]));
        assert_eq!(count, Some(1));
    }

    #[tokio::test]
    async fn test_should_negate_filter_on_write_chain() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/countries")
                    .query_param("status", "not.eq.retired");
                then.status(200).json_body(json!([]));
            })
            .await;

        let client = async_client(&server.base_url());
        let (rows, _) = client
            .from_("countries")
            .update(json!({"status": "active"}), None)
            .not_()
            .eq("status", "retired")
            .execute()
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(rows, json!([]));
    }
}
