//! Request types for the client facade.
//!
//! The original client took long positional argument lists with trailing
//! nullable defaults; here the optional arguments live in per-operation
//! request structs instead. A `None` field is omitted from the wire request
//! entirely, never sent as null or empty. Serde renames map the struct
//! fields to the dotted wire names the service expects (`page.current`,
//! `analytics.tags`).

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::ClientError;

/// Pagination window for list operations.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Page {
    /// The current page, starting at 1.
    #[serde(rename = "page.current", skip_serializing_if = "Option::is_none")]
    pub current: Option<u64>,
    /// The number of results to show on each page.
    #[serde(rename = "page.size", skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl Page {
    /// Create an empty window; the server applies its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page to fetch.
    pub fn with_current(mut self, current: u64) -> Self {
        self.current = Some(current);
        self
    }

    /// Set the page size.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}

/// A search query with its optional refinements.
///
/// Composite options (filters, sort, facets, boosts, group, field
/// selections) are arbitrary JSON values passed to the service as-is; their
/// schemas evolve server-side and the client does not pin them.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    /// Search query text.
    pub query: String,
    /// Pagination window.
    #[serde(flatten)]
    pub page: Page,
    /// Search query filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
    /// Sort orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Value>,
    /// Facet specifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<Value>,
    /// Fields and weights to search over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_fields: Option<Value>,
    /// Query boosts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boosts: Option<Value>,
    /// Result group specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Value>,
    /// Fields to return in results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_fields: Option<Value>,
    /// Analytics tags recorded against this search.
    #[serde(rename = "analytics.tags", skip_serializing_if = "Option::is_none")]
    pub analytics_tags: Option<Vec<String>>,
}

impl SearchRequest {
    /// Create a search for the given query text.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: Page::default(),
            filters: None,
            sort: None,
            facets: None,
            search_fields: None,
            boosts: None,
            group: None,
            result_fields: None,
            analytics_tags: None,
        }
    }

    /// Set the pagination window.
    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    /// Set the query filters.
    pub fn with_filters(mut self, filters: Value) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Set the sort orders.
    pub fn with_sort(mut self, sort: Value) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the facet specifications.
    pub fn with_facets(mut self, facets: Value) -> Self {
        self.facets = Some(facets);
        self
    }

    /// Set the fields and weights to search over.
    pub fn with_search_fields(mut self, search_fields: Value) -> Self {
        self.search_fields = Some(search_fields);
        self
    }

    /// Set the query boosts.
    pub fn with_boosts(mut self, boosts: Value) -> Self {
        self.boosts = Some(boosts);
        self
    }

    /// Set the result group specification.
    pub fn with_group(mut self, group: Value) -> Self {
        self.group = Some(group);
        self
    }

    /// Set the fields to return in results.
    pub fn with_result_fields(mut self, result_fields: Value) -> Self {
        self.result_fields = Some(result_fields);
        self
    }

    /// Set the analytics tags for this search.
    pub fn with_analytics_tags(mut self, tags: Vec<String>) -> Self {
        self.analytics_tags = Some(tags);
        self
    }
}

/// A clickthrough event to record against a past search.
#[derive(Debug, Clone, Serialize)]
pub struct ClickRequest {
    /// The query the user searched with.
    pub query: String,
    /// The id of the document that was clicked on.
    pub document_id: String,
    /// The request id returned in the meta of the search response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Additional tags to track with the clickthrough.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ClickRequest {
    /// Create a click event for the given query and document.
    pub fn new(query: impl Into<String>, document_id: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            document_id: document_id.into(),
            request_id: None,
            tags: None,
        }
    }

    /// Set the originating search request id.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set the analytics tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// A curation: a manual override of search results for specific queries.
#[derive(Debug, Clone, Serialize)]
pub struct CurationRequest {
    /// The queries the curation applies to.
    pub queries: Vec<String>,
    /// Document ids to pin at the top of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoted: Option<Vec<String>>,
    /// Document ids to hide from results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<Vec<String>>,
}

impl CurationRequest {
    /// Create a curation for the given queries.
    pub fn new(queries: Vec<String>) -> Self {
        Self {
            queries,
            promoted: None,
            hidden: None,
        }
    }

    /// Set the promoted document ids.
    pub fn with_promoted(mut self, promoted: Vec<String>) -> Self {
        self.promoted = Some(promoted);
        self
    }

    /// Set the hidden document ids.
    pub fn with_hidden(mut self, hidden: Vec<String>) -> Self {
        self.hidden = Some(hidden);
        self
    }
}

/// Serialize a request struct into a wire-named parameter map.
pub(crate) fn to_params<T: Serialize>(value: &T) -> Result<Map<String, Value>, ClientError> {
    match serde_json::to_value(value).map_err(|e| ClientError::serialization(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(ClientError::serialization(format!(
            "expected a parameter object, got {other}"
        ))),
    }
}
