//! Read-path tests: select, filters, ordering, pagination, counting.

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use pgrest_client::{Column, CountMethod, OrderOptions};
    use serde_json::json;

    use crate::{async_client, blocking_client};

    #[tokio::test]
    async fn test_should_send_full_select_chain() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/countries")
                    .query_param("select", "id,name")
                    .query_param("status", "eq.active")
                    .query_param("order", "name.desc")
                    .header("range-unit", "items")
                    .header("range", "0-9");
                then.status(200).json_body(json!([{"id": 1, "name": "India"}]));
            })
            .await;

        let client = async_client(&server.base_url());
        let (rows, count) = client
            .from_("countries")
            .select(["id", "name"], None)
            .eq("status", "active")
            .order("name", OrderOptions::descending())
            .limit(10, 0)
            .execute()
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(rows, json!([{"id": 1, "name": "India"}]));
        assert_eq!(count, None);
    }

    #[tokio::test]
    async fn test_should_return_total_count_when_requested() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/countries")
                    .query_param("select", "*")
                    .header("prefer", "count=exact");
                then.status(206)
                    .header("content-range", "0-9/42")
                    .json_body(json!([{"id": 1}]));
            })
            .await;

        let client = async_client(&server.base_url());
        let (rows, count) = client
            .from_("countries")
            .select(["*"], Some(CountMethod::Exact))
            .execute()
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(rows, json!([{"id": 1}]));
        assert_eq!(count, Some(42));
    }

    #[tokio::test]
    async fn test_should_issue_head_for_count_only_select() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::HEAD)
                    .path("/countries")
                    .header("prefer", "count=planned");
                then.status(200).header("content-range", "*/1000");
            })
            .await;

        let client = async_client(&server.base_url());
        let (rows, count) = client
            .from_("countries")
            .select(Vec::<String>::new(), Some(CountMethod::Planned))
            .execute()
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(rows.is_null());
        assert_eq!(count, Some(1000));
    }

    #[tokio::test]
    async fn test_should_send_condition_tree_as_group_param() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/countries")
                    .query_param("or", "(name.eq.India,population.gt.100000)");
                then.status(200).json_body(json!([]));
            })
            .await;

        let client = async_client(&server.base_url());
        let cond = Column::new("name").eq("India") | Column::new("population").gt(100_000);
        let (rows, _) = client
            .from_("countries")
            .select(["*"], None)
            .where_(&cond)
            .execute()
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(rows, json!([]));
    }

    #[tokio::test]
    async fn test_should_request_single_object() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/countries")
                    .query_param("id", "eq.1")
                    .header("accept", "application/vnd.pgrst.object+json");
                then.status(200).json_body(json!({"id": 1}));
            })
            .await;

        let client = async_client(&server.base_url());
        let (row, _) = client
            .from_("countries")
            .select(["*"], None)
            .eq("id", 1)
            .single()
            .execute()
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(row, json!({"id": 1}));
    }

    #[test]
    fn test_should_execute_same_chain_through_blocking_transport() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/countries")
                .query_param("select", "id")
                .query_param("status", "eq.active")
                .header("range", "5-14");
            then.status(200).json_body(json!([{"id": 6}]));
        });

        let client = blocking_client(&server.base_url());
        let (rows, count) = client
            .from_("countries")
            .select(["id"], None)
            .eq("status", "active")
            .range(5, 15)
            .execute_blocking()
            .unwrap();

        mock.assert();
        assert_eq!(rows, json!([{"id": 6}]));
        assert_eq!(count, None);
    }
}
