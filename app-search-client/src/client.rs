//! App Search client facade.
//!
//! One method per remote operation. Each method assembles a parameter map
//! under the wire-level field names, resolves the operation's endpoint,
//! attaches params and body, and executes the request through the injected
//! transport, returning the decoded response body verbatim. Responses stay
//! generic JSON values; the service evolves its schemas server-side and the
//! client does not pin them.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::endpoints::{Endpoint, Operation};
use crate::errors::ClientError;
use crate::interfaces::Transport;
use crate::serializer;
use crate::types::{self, ClickRequest, CurationRequest, Page, SearchRequest};

/// The client for the App Search HTTP API.
///
/// Holds no mutable state; each call builds a fresh endpoint and performs
/// exactly one transport round-trip, so concurrent calls are independent.
/// Connection concerns (base URL, credentials, retry, timeouts) belong to
/// the injected [`Transport`].
pub struct AppSearchClient {
    transport: Box<dyn Transport>,
}

impl AppSearchClient {
    /// Create a client over the given transport.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    // Engines

    /// Create an engine.
    ///
    /// The language is omitted from the request when `None`; the service
    /// then creates a universal engine.
    pub async fn create_engine(
        &self,
        name: &str,
        language: Option<&str>,
    ) -> Result<Value, ClientError> {
        let mut body = Map::new();
        body.insert("name".to_string(), Value::from(name));
        if let Some(language) = language {
            body.insert("language".to_string(), Value::from(language));
        }

        let mut endpoint = Operation::CreateEngine.endpoint();
        endpoint.set_body(Value::Object(body));

        self.perform_request(endpoint).await
    }

    /// Retrieve an engine by name.
    pub async fn get_engine(&self, engine_name: &str) -> Result<Value, ClientError> {
        let mut endpoint = Operation::GetEngine.endpoint();
        endpoint.set_params(engine_params(engine_name));

        self.perform_request(endpoint).await
    }

    /// Delete an engine and all its documents.
    pub async fn delete_engine(&self, engine_name: &str) -> Result<Value, ClientError> {
        let mut endpoint = Operation::DeleteEngine.endpoint();
        endpoint.set_params(engine_params(engine_name));

        self.perform_request(endpoint).await
    }

    /// List engines, paginated.
    pub async fn list_engines(&self, page: Page) -> Result<Value, ClientError> {
        let mut endpoint = Operation::ListEngines.endpoint();
        endpoint.set_params(types::to_params(&page)?);

        self.perform_request(endpoint).await
    }

    // Schema

    /// Retrieve the schema of an engine.
    pub async fn get_schema(&self, engine_name: &str) -> Result<Value, ClientError> {
        let mut endpoint = Operation::GetSchema.endpoint();
        endpoint.set_params(engine_params(engine_name));

        self.perform_request(endpoint).await
    }

    /// Update the schema of an engine.
    pub async fn update_schema<T: Serialize>(
        &self,
        engine_name: &str,
        schema: &T,
    ) -> Result<Value, ClientError> {
        let mut endpoint = Operation::UpdateSchema.endpoint();
        endpoint.set_params(engine_params(engine_name));
        endpoint.set_body(to_body(schema)?);

        self.perform_request(endpoint).await
    }

    // Documents

    /// Index documents into an engine, creating or replacing by id.
    pub async fn index_documents<T: Serialize>(
        &self,
        engine_name: &str,
        documents: &[T],
    ) -> Result<Value, ClientError> {
        let mut endpoint = Operation::IndexDocuments.endpoint();
        endpoint.set_params(engine_params(engine_name));
        endpoint.set_body(to_body(documents)?);

        self.perform_request(endpoint).await
    }

    /// Partially update documents; only the fields present in each entry
    /// change.
    pub async fn update_documents<T: Serialize>(
        &self,
        engine_name: &str,
        documents: &[T],
    ) -> Result<Value, ClientError> {
        let mut endpoint = Operation::UpdateDocuments.endpoint();
        endpoint.set_params(engine_params(engine_name));
        endpoint.set_body(to_body(documents)?);

        self.perform_request(endpoint).await
    }

    /// Delete documents by id.
    pub async fn delete_documents(
        &self,
        engine_name: &str,
        ids: &[&str],
    ) -> Result<Value, ClientError> {
        let mut endpoint = Operation::DeleteDocuments.endpoint();
        endpoint.set_params(engine_params(engine_name));
        endpoint.set_body(to_body(ids)?);

        self.perform_request(endpoint).await
    }

    /// Retrieve documents by id.
    pub async fn get_documents(
        &self,
        engine_name: &str,
        ids: &[&str],
    ) -> Result<Value, ClientError> {
        let mut params = engine_params(engine_name);
        params.insert("ids".to_string(), to_body(ids)?);

        let mut endpoint = Operation::GetDocuments.endpoint();
        endpoint.set_params(params);

        self.perform_request(endpoint).await
    }

    /// List all documents of an engine, paginated.
    pub async fn list_documents(
        &self,
        engine_name: &str,
        page: Page,
    ) -> Result<Value, ClientError> {
        let mut params = engine_params(engine_name);
        params.extend(types::to_params(&page)?);

        let mut endpoint = Operation::ListDocuments.endpoint();
        endpoint.set_params(params);

        self.perform_request(endpoint).await
    }

    // Search

    /// Execute a search query against an engine.
    pub async fn search(
        &self,
        engine_name: &str,
        request: &SearchRequest,
    ) -> Result<Value, ClientError> {
        let mut params = engine_params(engine_name);
        params.extend(types::to_params(request)?);

        let mut endpoint = Operation::Search.endpoint();
        endpoint.set_params(params);

        self.perform_request(endpoint).await
    }

    /// Execute several search queries in a single request.
    pub async fn multi_search(
        &self,
        engine_name: &str,
        queries: &[SearchRequest],
    ) -> Result<Value, ClientError> {
        let mut params = engine_params(engine_name);
        params.insert("queries".to_string(), to_body(queries)?);

        let mut endpoint = Operation::MultiSearch.endpoint();
        endpoint.set_params(params);

        self.perform_request(endpoint).await
    }

    /// Record a clickthrough for a past search.
    pub async fn send_click(
        &self,
        engine_name: &str,
        click: &ClickRequest,
    ) -> Result<Value, ClientError> {
        let mut params = engine_params(engine_name);
        params.extend(types::to_params(click)?);

        let mut endpoint = Operation::SendClick.endpoint();
        endpoint.set_params(params);

        self.perform_request(endpoint).await
    }

    // Curations

    /// Create a curation.
    pub async fn create_curation(
        &self,
        engine_name: &str,
        curation: &CurationRequest,
    ) -> Result<Value, ClientError> {
        let mut params = engine_params(engine_name);
        params.extend(types::to_params(curation)?);

        let mut endpoint = Operation::CreateCuration.endpoint();
        endpoint.set_params(params);

        self.perform_request(endpoint).await
    }

    /// Retrieve a curation by id.
    pub async fn get_curation(
        &self,
        engine_name: &str,
        curation_id: &str,
    ) -> Result<Value, ClientError> {
        let mut endpoint = Operation::GetCuration.endpoint();
        endpoint.set_params(curation_params(engine_name, curation_id));

        self.perform_request(endpoint).await
    }

    /// Replace a curation.
    pub async fn update_curation(
        &self,
        engine_name: &str,
        curation_id: &str,
        curation: &CurationRequest,
    ) -> Result<Value, ClientError> {
        let mut params = curation_params(engine_name, curation_id);
        params.extend(types::to_params(curation)?);

        let mut endpoint = Operation::UpdateCuration.endpoint();
        endpoint.set_params(params);

        self.perform_request(endpoint).await
    }

    /// Delete a curation.
    pub async fn delete_curation(
        &self,
        engine_name: &str,
        curation_id: &str,
    ) -> Result<Value, ClientError> {
        let mut endpoint = Operation::DeleteCuration.endpoint();
        endpoint.set_params(curation_params(engine_name, curation_id));

        self.perform_request(endpoint).await
    }

    /// List the curations of an engine, paginated.
    pub async fn list_curations(
        &self,
        engine_name: &str,
        page: Page,
    ) -> Result<Value, ClientError> {
        let mut params = engine_params(engine_name);
        params.extend(types::to_params(&page)?);

        let mut endpoint = Operation::ListCurations.endpoint();
        endpoint.set_params(params);

        self.perform_request(endpoint).await
    }

    // Synonyms

    /// Create a synonym set.
    pub async fn create_synonym_set(
        &self,
        engine_name: &str,
        synonyms: &[&str],
    ) -> Result<Value, ClientError> {
        let mut params = engine_params(engine_name);
        params.insert("synonyms".to_string(), to_body(synonyms)?);

        let mut endpoint = Operation::CreateSynonymSet.endpoint();
        endpoint.set_params(params);

        self.perform_request(endpoint).await
    }

    /// Retrieve a synonym set by id.
    pub async fn get_synonym_set(
        &self,
        engine_name: &str,
        synonym_set_id: &str,
    ) -> Result<Value, ClientError> {
        let mut endpoint = Operation::GetSynonymSet.endpoint();
        endpoint.set_params(synonym_params(engine_name, synonym_set_id));

        self.perform_request(endpoint).await
    }

    /// Delete a synonym set.
    pub async fn delete_synonym_set(
        &self,
        engine_name: &str,
        synonym_set_id: &str,
    ) -> Result<Value, ClientError> {
        let mut endpoint = Operation::DeleteSynonymSet.endpoint();
        endpoint.set_params(synonym_params(engine_name, synonym_set_id));

        self.perform_request(endpoint).await
    }

    /// List the synonym sets of an engine, paginated.
    pub async fn list_synonyms(
        &self,
        engine_name: &str,
        page: Page,
    ) -> Result<Value, ClientError> {
        let mut params = engine_params(engine_name);
        params.extend(types::to_params(&page)?);

        let mut endpoint = Operation::ListSynonyms.endpoint();
        endpoint.set_params(params);

        self.perform_request(endpoint).await
    }

    // Search settings

    /// Retrieve the search settings of an engine.
    pub async fn get_search_settings(&self, engine_name: &str) -> Result<Value, ClientError> {
        let mut endpoint = Operation::GetSearchSettings.endpoint();
        endpoint.set_params(engine_params(engine_name));

        self.perform_request(endpoint).await
    }

    /// Update the search settings of an engine.
    pub async fn update_search_settings<T: Serialize>(
        &self,
        engine_name: &str,
        settings: &T,
    ) -> Result<Value, ClientError> {
        let mut endpoint = Operation::UpdateSearchSettings.endpoint();
        endpoint.set_params(engine_params(engine_name));
        endpoint.set_body(to_body(settings)?);

        self.perform_request(endpoint).await
    }

    /// Reset the search settings of an engine to their defaults.
    pub async fn reset_search_settings(&self, engine_name: &str) -> Result<Value, ClientError> {
        let mut endpoint = Operation::ResetSearchSettings.endpoint();
        endpoint.set_params(engine_params(engine_name));

        self.perform_request(endpoint).await
    }

    /// Execute a populated endpoint through the transport.
    ///
    /// Shared by all operations: render the URI, filter the query
    /// parameters, serialize the body if one was set, perform the single
    /// round-trip, and decode the response body. Transport failures
    /// propagate unchanged.
    async fn perform_request(&self, endpoint: Endpoint) -> Result<Value, ClientError> {
        let method = endpoint.method();
        let uri = endpoint.uri()?;
        let query = endpoint.query_params();
        let body = endpoint.body().map(serializer::serialize);

        debug!(%method, %uri, "Sending request");

        let response = self.transport.send(method, &uri, &query, body).await?;

        serializer::deserialize(&response.body, &response.headers)
    }
}

fn engine_params(engine_name: &str) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("engine_name".to_string(), Value::from(engine_name));
    params
}

fn curation_params(engine_name: &str, curation_id: &str) -> Map<String, Value> {
    let mut params = engine_params(engine_name);
    params.insert("curation_id".to_string(), Value::from(curation_id));
    params
}

fn synonym_params(engine_name: &str, synonym_set_id: &str) -> Map<String, Value> {
    let mut params = engine_params(engine_name);
    params.insert("synonym_set_id".to_string(), Value::from(synonym_set_id));
    params
}

fn to_body<T: Serialize + ?Sized>(value: &T) -> Result<Value, ClientError> {
    serde_json::to_value(value).map_err(|e| ClientError::serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::json;

    use crate::endpoints::HttpMethod;
    use crate::errors::TransportError;
    use crate::interfaces::HttpResponse;

    /// One captured transport call.
    #[derive(Debug, Clone)]
    struct RecordedRequest {
        method: HttpMethod,
        uri: String,
        query: Map<String, Value>,
        body: Option<String>,
    }

    /// Mock transport for testing: records every request and replays a
    /// canned response.
    struct MockTransport {
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
        response: HttpResponse,
        should_fail: bool,
    }

    impl MockTransport {
        fn new(response: HttpResponse) -> Self {
            Self {
                requests: Arc::new(Mutex::new(Vec::new())),
                response,
                should_fail: false,
            }
        }

        fn failing() -> Self {
            let mut mock = Self::new(json_response("{}"));
            mock.should_fail = true;
            mock
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(
            &self,
            method: HttpMethod,
            uri: &str,
            query: &Map<String, Value>,
            body: Option<String>,
        ) -> Result<HttpResponse, TransportError> {
            if self.should_fail {
                return Err(TransportError::with_status("Mock failure", 500));
            }
            self.requests.lock().unwrap().push(RecordedRequest {
                method,
                uri: uri.to_string(),
                query: query.clone(),
                body,
            });
            Ok(self.response.clone())
        }
    }

    fn json_response(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: HashMap::from([(
                "content_type".to_string(),
                "application/json".to_string(),
            )]),
            body: body.to_string(),
        }
    }

    /// Client plus a handle on the requests the mock captured.
    fn client_with_capture(response: HttpResponse) -> (AppSearchClient, Arc<Mutex<Vec<RecordedRequest>>>) {
        let mock = MockTransport::new(response);
        let requests = Arc::clone(&mock.requests);
        (AppSearchClient::new(Box::new(mock)), requests)
    }

    fn client() -> (AppSearchClient, Arc<Mutex<Vec<RecordedRequest>>>) {
        client_with_capture(json_response("{}"))
    }

    fn last_request(requests: &Arc<Mutex<Vec<RecordedRequest>>>) -> RecordedRequest {
        requests.lock().unwrap().last().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_list_engines_without_paging_sends_no_query_params() {
        let (client, requests) = client();

        client.list_engines(Page::new()).await.unwrap();

        let request = last_request(&requests);
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.uri, "/engines");
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_list_engines_with_paging() {
        let (client, requests) = client();

        client
            .list_engines(Page::new().with_current(2).with_size(10))
            .await
            .unwrap();

        let request = last_request(&requests);
        assert_eq!(request.uri, "/engines");
        assert_eq!(request.query.len(), 2);
        assert_eq!(request.query.get("page.current"), Some(&json!(2)));
        assert_eq!(request.query.get("page.size"), Some(&json!(10)));
    }

    #[tokio::test]
    async fn test_get_engine_renders_route_parameter() {
        let (client, requests) = client();

        client.get_engine("my-engine").await.unwrap();

        let request = last_request(&requests);
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.uri, "/engines/my-engine");
        assert!(request.query.is_empty());
    }

    #[tokio::test]
    async fn test_get_engine_percent_encodes_name() {
        let (client, requests) = client();

        client.get_engine("my engine").await.unwrap();

        assert_eq!(last_request(&requests).uri, "/engines/my%20engine");
    }

    #[tokio::test]
    async fn test_create_engine_without_language_omits_it() {
        let (client, requests) = client();

        client.create_engine("my-engine", None).await.unwrap();

        let request = last_request(&requests);
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.uri, "/engines");
        assert_eq!(request.body.as_deref(), Some(r#"{"name":"my-engine"}"#));
    }

    #[tokio::test]
    async fn test_create_engine_with_language() {
        let (client, requests) = client();

        client.create_engine("my-engine", Some("en")).await.unwrap();

        let body: Value =
            serde_json::from_str(last_request(&requests).body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"name": "my-engine", "language": "en"}));
    }

    #[tokio::test]
    async fn test_delete_engine() {
        let (client, requests) = client();

        client.delete_engine("my-engine").await.unwrap();

        let request = last_request(&requests);
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.uri, "/engines/my-engine");
    }

    #[tokio::test]
    async fn test_index_documents_serializes_array_body() {
        let (client, requests) = client();

        client
            .index_documents("my-engine", &[json!({"id": "doc-1", "title": "First"})])
            .await
            .unwrap();

        let request = last_request(&requests);
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.uri, "/engines/my-engine/documents");
        assert!(request.query.is_empty());
        let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!([{"id": "doc-1", "title": "First"}]));
    }

    #[tokio::test]
    async fn test_update_documents_uses_patch() {
        let (client, requests) = client();

        client
            .update_documents("my-engine", &[json!({"id": "doc-1", "title": "New"})])
            .await
            .unwrap();

        assert_eq!(last_request(&requests).method, HttpMethod::Patch);
    }

    #[tokio::test]
    async fn test_delete_documents_sends_ids_as_body() {
        let (client, requests) = client();

        client
            .delete_documents("my-engine", &["doc-1", "doc-2"])
            .await
            .unwrap();

        let request = last_request(&requests);
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.body.as_deref(), Some(r#"["doc-1","doc-2"]"#));
    }

    #[tokio::test]
    async fn test_get_documents_sends_ids_as_query_param() {
        let (client, requests) = client();

        client
            .get_documents("my-engine", &["doc-1", "doc-2"])
            .await
            .unwrap();

        let request = last_request(&requests);
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.uri, "/engines/my-engine/documents");
        assert_eq!(request.query.get("ids"), Some(&json!(["doc-1", "doc-2"])));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_list_documents_path_and_paging() {
        let (client, requests) = client();

        client
            .list_documents("my-engine", Page::new().with_current(3))
            .await
            .unwrap();

        let request = last_request(&requests);
        assert_eq!(request.uri, "/engines/my-engine/documents/list");
        assert_eq!(request.query.len(), 1);
        assert_eq!(request.query.get("page.current"), Some(&json!(3)));
    }

    #[tokio::test]
    async fn test_search_minimal_query_params() {
        let (client, requests) = client();

        client
            .search("my-engine", &SearchRequest::new("cat"))
            .await
            .unwrap();

        let request = last_request(&requests);
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.uri, "/engines/my-engine/search");
        assert_eq!(request.query.len(), 1);
        assert_eq!(request.query.get("query"), Some(&json!("cat")));
    }

    #[tokio::test]
    async fn test_search_forwards_wire_named_options() {
        let (client, requests) = client();

        let search = SearchRequest::new("cat")
            .with_page(Page::new().with_current(1).with_size(25))
            .with_filters(json!({"world_heritage_site": "true"}))
            .with_result_fields(json!({"title": {"raw": {}}}))
            .with_analytics_tags(vec!["mobile".to_string()]);
        client.search("my-engine", &search).await.unwrap();

        let request = last_request(&requests);
        assert_eq!(request.query.get("query"), Some(&json!("cat")));
        assert_eq!(request.query.get("page.current"), Some(&json!(1)));
        assert_eq!(request.query.get("page.size"), Some(&json!(25)));
        assert_eq!(
            request.query.get("filters"),
            Some(&json!({"world_heritage_site": "true"}))
        );
        assert_eq!(
            request.query.get("result_fields"),
            Some(&json!({"title": {"raw": {}}}))
        );
        assert_eq!(request.query.get("analytics.tags"), Some(&json!(["mobile"])));
        assert!(!request.query.contains_key("engine_name"));
    }

    #[tokio::test]
    async fn test_multi_search_sends_queries_param() {
        let (client, requests) = client();

        client
            .multi_search(
                "my-engine",
                &[SearchRequest::new("cat"), SearchRequest::new("dog")],
            )
            .await
            .unwrap();

        let request = last_request(&requests);
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.uri, "/engines/my-engine/multi_search");
        assert_eq!(
            request.query.get("queries"),
            Some(&json!([{"query": "cat"}, {"query": "dog"}]))
        );
    }

    #[tokio::test]
    async fn test_send_click_required_arguments_only() {
        let (client, requests) = client();

        client
            .send_click("my-engine", &ClickRequest::new("cat", "doc-1"))
            .await
            .unwrap();

        let request = last_request(&requests);
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.uri, "/engines/my-engine/click");
        assert_eq!(request.query.len(), 2);
        assert_eq!(request.query.get("query"), Some(&json!("cat")));
        assert_eq!(request.query.get("document_id"), Some(&json!("doc-1")));
    }

    #[tokio::test]
    async fn test_create_curation() {
        let (client, requests) = client();

        let curation = CurationRequest::new(vec!["cat".to_string()])
            .with_promoted(vec!["doc-1".to_string()]);
        client.create_curation("my-engine", &curation).await.unwrap();

        let request = last_request(&requests);
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.uri, "/engines/my-engine/curations");
        assert_eq!(request.query.get("queries"), Some(&json!(["cat"])));
        assert_eq!(request.query.get("promoted"), Some(&json!(["doc-1"])));
        assert!(!request.query.contains_key("hidden"));
    }

    #[tokio::test]
    async fn test_update_curation_renders_both_route_parameters() {
        let (client, requests) = client();

        let curation = CurationRequest::new(vec!["cat".to_string()]);
        client
            .update_curation("my-engine", "cur-1234", &curation)
            .await
            .unwrap();

        let request = last_request(&requests);
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.uri, "/engines/my-engine/curations/cur-1234");
        assert!(!request.query.contains_key("curation_id"));
    }

    #[tokio::test]
    async fn test_curation_get_and_delete() {
        let (client, requests) = client();

        client.get_curation("my-engine", "cur-1").await.unwrap();
        assert_eq!(
            last_request(&requests).uri,
            "/engines/my-engine/curations/cur-1"
        );

        client.delete_curation("my-engine", "cur-1").await.unwrap();
        assert_eq!(last_request(&requests).method, HttpMethod::Delete);
    }

    #[tokio::test]
    async fn test_synonym_set_lifecycle_requests() {
        let (client, requests) = client();

        client
            .create_synonym_set("my-engine", &["car", "automobile"])
            .await
            .unwrap();
        let request = last_request(&requests);
        assert_eq!(request.uri, "/engines/my-engine/synonyms");
        assert_eq!(
            request.query.get("synonyms"),
            Some(&json!(["car", "automobile"]))
        );

        client.get_synonym_set("my-engine", "syn-1").await.unwrap();
        assert_eq!(
            last_request(&requests).uri,
            "/engines/my-engine/synonyms/syn-1"
        );

        client
            .delete_synonym_set("my-engine", "syn-1")
            .await
            .unwrap();
        assert_eq!(last_request(&requests).method, HttpMethod::Delete);

        client
            .list_synonyms("my-engine", Page::new().with_size(5))
            .await
            .unwrap();
        let request = last_request(&requests);
        assert_eq!(request.uri, "/engines/my-engine/synonyms");
        assert_eq!(request.query.get("page.size"), Some(&json!(5)));
    }

    #[tokio::test]
    async fn test_search_settings_requests() {
        let (client, requests) = client();

        client.get_search_settings("my-engine").await.unwrap();
        assert_eq!(
            last_request(&requests).uri,
            "/engines/my-engine/search_settings"
        );

        client
            .update_search_settings("my-engine", &json!({"search_fields": {"title": {}}}))
            .await
            .unwrap();
        let request = last_request(&requests);
        assert_eq!(request.method, HttpMethod::Post);
        let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"search_fields": {"title": {}}}));

        client.reset_search_settings("my-engine").await.unwrap();
        let request = last_request(&requests);
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.uri, "/engines/my-engine/search_settings/reset");
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_body_omitted_when_not_set() {
        let (client, requests) = client();

        // A body-capable endpoint with no body set must reach the transport
        // with no body segment at all, not an empty string.
        let mut endpoint = Operation::UpdateSchema.endpoint();
        endpoint.set_params(engine_params("my-engine"));
        client.perform_request(endpoint).await.unwrap();

        assert!(last_request(&requests).body.is_none());
    }

    #[tokio::test]
    async fn test_returns_decoded_response_body() {
        let (client, _requests) =
            client_with_capture(json_response(r#"{"name":"my-engine","language":"en"}"#));

        let decoded = client.get_engine("my-engine").await.unwrap();

        assert_eq!(decoded, json!({"name": "my-engine", "language": "en"}));
    }

    #[tokio::test]
    async fn test_non_json_response_passes_through() {
        let response = HttpResponse {
            status: 200,
            headers: HashMap::from([("content_type".to_string(), "text/plain".to_string())]),
            body: "plain text".to_string(),
        };
        let (client, _requests) = client_with_capture(response);

        let decoded = client.get_engine("my-engine").await.unwrap();

        assert_eq!(decoded, Value::String("plain text".to_string()));
    }

    #[tokio::test]
    async fn test_malformed_json_response_fails_with_raw_body() {
        let (client, _requests) = client_with_capture(json_response("{bad json"));

        let err = client.get_engine("my-engine").await.unwrap_err();

        match err {
            ClientError::MalformedResponse { body, .. } => assert_eq!(body, "{bad json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_propagates_unchanged() {
        let client = AppSearchClient::new(Box::new(MockTransport::failing()));

        let err = client.get_engine("my-engine").await.unwrap_err();

        match err {
            ClientError::Transport(transport) => {
                assert_eq!(transport.status, Some(500));
                assert_eq!(transport.message, "Mock failure");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_route_parameter_surfaces_before_transport() {
        let (client, requests) = client();

        // No engine_name in the parameter map: the URI cannot render and the
        // transport must never be called.
        let endpoint = Operation::GetEngine.endpoint();
        let err = client.perform_request(endpoint).await.unwrap_err();

        assert!(matches!(err, ClientError::MissingRouteParameter(_)));
        assert!(requests.lock().unwrap().is_empty());
    }
}
