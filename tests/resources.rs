mod common;

use crate::common::{bearer_header, client_for, mock_auth, setup_server};
use httpmock::Method::{GET, POST};
use serde_json::json;

#[tokio::test]
async fn orders_filters_by_account() {
    let server = setup_server();
    let _auth = mock_auth(&server);
    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/order/")
            .query_param("accounts", "A1")
            .header("authorization", bearer_header());
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "activities": [] }));
    });

    let client = client_for(&server);
    client.orders(Some("A1")).await.unwrap();

    api.assert();
}

#[tokio::test]
async fn orders_without_account_omits_the_filter() {
    let server = setup_server();
    let _auth = mock_auth(&server);
    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/order/")
            .query_param_missing("accounts");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "activities": [] }));
    });

    let client = client_for(&server);
    client.orders(None).await.unwrap();

    api.assert();
}

#[tokio::test]
async fn performance_uses_v2_with_a_range() {
    let server = setup_server();
    let _auth = mock_auth(&server);
    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/portfolio/performance/")
            .query_param("range", "ytd");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "performance": {} }));
    });

    let client = client_for(&server);
    client.performance("ytd").await.unwrap();

    api.assert();
}

#[tokio::test]
async fn holdings_passes_the_range() {
    let server = setup_server();
    let _auth = mock_auth(&server);
    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/portfolio/holdings/")
            .query_param("range", "max");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "holdings": [] }));
    });

    let client = client_for(&server);
    client.holdings("max").await.unwrap();

    api.assert();
}

#[tokio::test]
async fn position_builds_the_nested_path() {
    let server = setup_server();
    let _auth = mock_auth(&server);
    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/portfolio/position/YAHOO/AAPL/");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "symbol": "AAPL" }));
    });

    let client = client_for(&server);
    client.position("YAHOO", "AAPL").await.unwrap();

    api.assert();
}

#[tokio::test]
async fn investments_and_dividends_group_by_period() {
    let server = setup_server();
    let _auth = mock_auth(&server);
    let investments = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/portfolio/investments/")
            .query_param("range", "max")
            .query_param("groupBy", "month");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "investments": [] }));
    });
    let dividends = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/portfolio/dividends/")
            .query_param("range", "1y")
            .query_param("groupBy", "day");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "dividends": [] }));
    });

    let client = client_for(&server);
    client.investments("month", "max").await.unwrap();
    client.dividends("day", "1y").await.unwrap();

    investments.assert();
    dividends.assert();
}

#[tokio::test]
async fn market_data_endpoints_build_admin_paths() {
    let server = setup_server();
    let _auth = mock_auth(&server);
    let overview = server.mock(|when, then| {
        when.method(GET).path("/api/v1/admin/market-data/");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "marketData": [] }));
    });
    let symbol = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/admin/market-data/COINGECKO/bitcoin/");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "marketData": [] }));
    });

    let client = client_for(&server);
    client.market_data_admin().await.unwrap();
    client.market_data("COINGECKO", "bitcoin").await.unwrap();

    overview.assert();
    symbol.assert();
}

#[tokio::test]
async fn import_posts_the_body_and_discards_the_response() {
    let server = setup_server();
    let _auth = mock_auth(&server);

    let activities = json!({
        "activities": [{
            "currency": "USD",
            "dataSource": "YAHOO",
            "date": "2021-09-15T00:00:00.000Z",
            "fee": 19.0,
            "quantity": 5,
            "symbol": "MSFT",
            "type": "BUY",
            "unitPrice": 298.58
        }]
    });

    let api = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/import/")
            .header("authorization", bearer_header())
            .json_body(activities.clone());
        then.status(201)
            .header("content-type", "application/json")
            .json_body(json!({ "activities": [{ "id": "f3a..." }] }));
    });

    let client = client_for(&server);
    client.import_transactions(&activities).await.unwrap();

    api.assert();
}

#[tokio::test]
async fn payloads_come_back_verbatim() {
    let server = setup_server();
    let _auth = mock_auth(&server);

    let payload = json!({
        "summary": { "currentValue": 100_000.5, "ordersCount": 42 },
        "accounts": { "abc": { "name": "Brokerage", "current": 99_000.0 } },
        "holdings": [{ "symbol": "VTI", "allocationInPercentage": 0.61 }]
    });
    let expected = payload.clone();

    let _api = server.mock(|when, then| {
        when.method(GET).path("/api/v1/portfolio/details/");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(payload);
    });

    let client = client_for(&server);
    let got = client.details().await.unwrap();

    assert_eq!(got, expected);
}
