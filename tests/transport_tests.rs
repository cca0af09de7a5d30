//! Integration tests running the client over an in-memory transport.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use global_catalog::auth::{Authenticator, BearerTokenAuthenticator};
use global_catalog::clients::{DetailedResponse, HttpRequest, Transport, TransportError};
use global_catalog::service::{
    GetAuditLogsOptions, GetCatalogEntryOptions, GetChildObjectsOptions, ListCatalogEntriesOptions,
};
use global_catalog::{CatalogConfig, CatalogError, GlobalCatalog, ServiceUrl};
use serde_json::{json, Value};

/// Replays scripted responses in order and records every request.
#[derive(Debug, Default)]
struct ScriptedTransport {
    responses: Mutex<VecDeque<(u16, Value)>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    fn new(responses: Vec<(u16, Value)>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: &HttpRequest) -> Result<DetailedResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((500, json!({"message": "script exhausted"})));

        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/json".to_string()],
        );
        Ok(DetailedResponse::new(status, headers, body.to_string().into_bytes()))
    }
}

fn catalog(transport: Arc<ScriptedTransport>, authenticator: Arc<dyn Authenticator>) -> GlobalCatalog {
    let config = CatalogConfig::builder()
        .service_url(ServiceUrl::new("https://catalog.test/api/v1").unwrap())
        .authenticator(authenticator)
        .user_agent_prefix("catalog-sync/2.0")
        .build()
        .unwrap();
    GlobalCatalog::with_transport(&config, transport)
}

fn bearer() -> Arc<dyn Authenticator> {
    Arc::new(BearerTokenAuthenticator::new("t0k3n").unwrap())
}

#[tokio::test]
async fn test_every_request_is_authenticated_and_identified() {
    let transport = ScriptedTransport::new(vec![(200, json!({"id": "svc"}))]);
    let catalog = catalog(Arc::clone(&transport), bearer());

    catalog
        .get_catalog_entry(Some(&GetCatalogEntryOptions::new("svc")))
        .await
        .unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.header("Authorization"), Some("Bearer t0k3n"));
    let user_agent = request.header("User-Agent").unwrap();
    assert!(user_agent.starts_with("catalog-sync/2.0 | global-catalog-sdk-rust/"));
}

#[tokio::test]
async fn test_caller_user_agent_is_kept() {
    let transport = ScriptedTransport::new(vec![(200, json!({"resources": []}))]);
    let catalog = catalog(Arc::clone(&transport), bearer());

    let options = ListCatalogEntriesOptions::new().with_header("user-agent", "custom/1.0");
    catalog.list_catalog_entries(Some(&options)).await.unwrap();

    assert_eq!(transport.requests()[0].header("User-Agent"), Some("custom/1.0"));
}

#[tokio::test]
async fn test_audit_logs_can_be_walked_page_by_page() {
    let transport = ScriptedTransport::new(vec![
        (
            200,
            json!({
                "offset": 0, "limit": 2, "count": 3, "resource_count": 2,
                "next": "https://catalog.test/api/v1/svc/logs?_offset=2&_limit=2",
                "resources": [{"seq": 1}, {"seq": 2}]
            }),
        ),
        (
            200,
            json!({
                "offset": 2, "limit": 2, "count": 3, "resource_count": 1,
                "prev": "https://catalog.test/api/v1/svc/logs?_offset=0&_limit=2",
                "resources": [{"seq": 3}]
            }),
        ),
    ]);
    let catalog = catalog(Arc::clone(&transport), bearer());

    let mut seen = Vec::new();
    let mut options = GetAuditLogsOptions::new("svc").with_limit(2);
    loop {
        let page = catalog.get_audit_logs(Some(&options)).await.unwrap();
        seen.extend(page.resources.iter().map(|record| record["seq"].clone()));
        match page.next_offset() {
            Some(offset) => options = options.with_offset(offset),
            None => break,
        }
    }

    assert_eq!(seen, vec![json!(1), json!(2), json!(3)]);
    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].query_values("_offset").is_empty());
    assert_eq!(requests[1].query_values("_offset"), vec!["2"]);
    assert_eq!(requests[1].query_values("_limit"), vec!["2"]);
}

#[tokio::test]
async fn test_children_of_unknown_entry() {
    let transport = ScriptedTransport::new(vec![(
        404,
        json!({"message": "Parent svc does not exist"}),
    )]);
    let catalog = catalog(Arc::clone(&transport), bearer());

    let err = catalog
        .get_child_objects(Some(&GetChildObjectsOptions::new("svc", "*")))
        .await
        .unwrap_err();

    assert_eq!(transport.requests()[0].url, "https://catalog.test/api/v1/svc/%2A");
    match err {
        CatalogError::Request(error) => {
            assert_eq!(error.status, 404);
            assert_eq!(error.message, "Parent svc does not exist");
            assert_eq!(error.error_body, Some(json!({"message": "Parent svc does not exist"})));
        }
        other => panic!("expected a request error, got {other:?}"),
    }
}
