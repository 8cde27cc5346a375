//! Endpoint catalog and request descriptors.
//!
//! Each remote operation is described by a static [`EndpointSpec`]: an HTTP
//! method, a URI template with `{placeholder}` tokens, and a whitelist of
//! query parameter names the operation is permitted to forward. The closed
//! [`Operation`] enum maps operation names to their specs, and an
//! [`Endpoint`] is built fresh per request to render the final URI and
//! filter the candidate parameter map.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::{Map, Value};

use crate::errors::ClientError;

/// Characters escaped when a route parameter is substituted into a path
/// segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const PAGING_PARAMS: &[&str] = &["page.current", "page.size"];

/// HTTP methods used by the App Search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static metadata describing one remote operation.
#[derive(Debug)]
pub struct EndpointSpec {
    /// HTTP method of the operation.
    pub method: HttpMethod,
    /// URI template containing `{placeholder}` tokens.
    pub uri: &'static str,
    /// Query parameter names the operation may forward to the server.
    pub param_whitelist: &'static [&'static str],
    /// Whether the operation expects a JSON request body.
    pub accepts_body: bool,
}

/// The closed set of App Search operations.
///
/// The original client resolved operation names to endpoint classes at
/// runtime; here the catalog is a plain enum so unknown operations are
/// caught at compile time wherever possible. String resolution is still
/// available through [`Operation::from_name`] for callers that carry the
/// canonical operation names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateCuration,
    CreateEngine,
    CreateSynonymSet,
    DeleteCuration,
    DeleteDocuments,
    DeleteEngine,
    DeleteSynonymSet,
    GetCuration,
    GetDocuments,
    GetEngine,
    GetSchema,
    GetSearchSettings,
    GetSynonymSet,
    IndexDocuments,
    ListCurations,
    ListDocuments,
    ListEngines,
    ListSynonyms,
    MultiSearch,
    ResetSearchSettings,
    Search,
    SendClick,
    UpdateCuration,
    UpdateDocuments,
    UpdateSchema,
    UpdateSearchSettings,
}

impl Operation {
    /// Resolve a canonical operation name.
    ///
    /// Fails with [`ClientError::UnknownOperation`] for names outside the
    /// catalog.
    pub fn from_name(name: &str) -> Result<Self, ClientError> {
        match name {
            "CreateCuration" => Ok(Self::CreateCuration),
            "CreateEngine" => Ok(Self::CreateEngine),
            "CreateSynonymSet" => Ok(Self::CreateSynonymSet),
            "DeleteCuration" => Ok(Self::DeleteCuration),
            "DeleteDocuments" => Ok(Self::DeleteDocuments),
            "DeleteEngine" => Ok(Self::DeleteEngine),
            "DeleteSynonymSet" => Ok(Self::DeleteSynonymSet),
            "GetCuration" => Ok(Self::GetCuration),
            "GetDocuments" => Ok(Self::GetDocuments),
            "GetEngine" => Ok(Self::GetEngine),
            "GetSchema" => Ok(Self::GetSchema),
            "GetSearchSettings" => Ok(Self::GetSearchSettings),
            "GetSynonymSet" => Ok(Self::GetSynonymSet),
            "IndexDocuments" => Ok(Self::IndexDocuments),
            "ListCurations" => Ok(Self::ListCurations),
            "ListDocuments" => Ok(Self::ListDocuments),
            "ListEngines" => Ok(Self::ListEngines),
            "ListSynonyms" => Ok(Self::ListSynonyms),
            "MultiSearch" => Ok(Self::MultiSearch),
            "ResetSearchSettings" => Ok(Self::ResetSearchSettings),
            "Search" => Ok(Self::Search),
            "SendClick" => Ok(Self::SendClick),
            "UpdateCuration" => Ok(Self::UpdateCuration),
            "UpdateDocuments" => Ok(Self::UpdateDocuments),
            "UpdateSchema" => Ok(Self::UpdateSchema),
            "UpdateSearchSettings" => Ok(Self::UpdateSearchSettings),
            other => Err(ClientError::unknown_operation(other)),
        }
    }

    /// Canonical name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateCuration => "CreateCuration",
            Self::CreateEngine => "CreateEngine",
            Self::CreateSynonymSet => "CreateSynonymSet",
            Self::DeleteCuration => "DeleteCuration",
            Self::DeleteDocuments => "DeleteDocuments",
            Self::DeleteEngine => "DeleteEngine",
            Self::DeleteSynonymSet => "DeleteSynonymSet",
            Self::GetCuration => "GetCuration",
            Self::GetDocuments => "GetDocuments",
            Self::GetEngine => "GetEngine",
            Self::GetSchema => "GetSchema",
            Self::GetSearchSettings => "GetSearchSettings",
            Self::GetSynonymSet => "GetSynonymSet",
            Self::IndexDocuments => "IndexDocuments",
            Self::ListCurations => "ListCurations",
            Self::ListDocuments => "ListDocuments",
            Self::ListEngines => "ListEngines",
            Self::ListSynonyms => "ListSynonyms",
            Self::MultiSearch => "MultiSearch",
            Self::ResetSearchSettings => "ResetSearchSettings",
            Self::Search => "Search",
            Self::SendClick => "SendClick",
            Self::UpdateCuration => "UpdateCuration",
            Self::UpdateDocuments => "UpdateDocuments",
            Self::UpdateSchema => "UpdateSchema",
            Self::UpdateSearchSettings => "UpdateSearchSettings",
        }
    }

    /// Static descriptor metadata for the operation.
    pub fn spec(&self) -> &'static EndpointSpec {
        match self {
            Self::CreateCuration => &EndpointSpec {
                method: HttpMethod::Post,
                uri: "/engines/{engine_name}/curations",
                param_whitelist: &["queries", "promoted", "hidden"],
                accepts_body: false,
            },
            Self::CreateEngine => &EndpointSpec {
                method: HttpMethod::Post,
                uri: "/engines",
                param_whitelist: &[],
                accepts_body: true,
            },
            Self::CreateSynonymSet => &EndpointSpec {
                method: HttpMethod::Post,
                uri: "/engines/{engine_name}/synonyms",
                param_whitelist: &["synonyms"],
                accepts_body: false,
            },
            Self::DeleteCuration => &EndpointSpec {
                method: HttpMethod::Delete,
                uri: "/engines/{engine_name}/curations/{curation_id}",
                param_whitelist: &[],
                accepts_body: false,
            },
            Self::DeleteDocuments => &EndpointSpec {
                method: HttpMethod::Delete,
                uri: "/engines/{engine_name}/documents",
                param_whitelist: &[],
                accepts_body: true,
            },
            Self::DeleteEngine => &EndpointSpec {
                method: HttpMethod::Delete,
                uri: "/engines/{engine_name}",
                param_whitelist: &[],
                accepts_body: false,
            },
            Self::DeleteSynonymSet => &EndpointSpec {
                method: HttpMethod::Delete,
                uri: "/engines/{engine_name}/synonyms/{synonym_set_id}",
                param_whitelist: &[],
                accepts_body: false,
            },
            Self::GetCuration => &EndpointSpec {
                method: HttpMethod::Get,
                uri: "/engines/{engine_name}/curations/{curation_id}",
                param_whitelist: &[],
                accepts_body: false,
            },
            Self::GetDocuments => &EndpointSpec {
                method: HttpMethod::Get,
                uri: "/engines/{engine_name}/documents",
                param_whitelist: &["ids"],
                accepts_body: false,
            },
            Self::GetEngine => &EndpointSpec {
                method: HttpMethod::Get,
                uri: "/engines/{engine_name}",
                param_whitelist: &[],
                accepts_body: false,
            },
            Self::GetSchema => &EndpointSpec {
                method: HttpMethod::Get,
                uri: "/engines/{engine_name}/schema",
                param_whitelist: &[],
                accepts_body: false,
            },
            Self::GetSearchSettings => &EndpointSpec {
                method: HttpMethod::Get,
                uri: "/engines/{engine_name}/search_settings",
                param_whitelist: &[],
                accepts_body: false,
            },
            Self::GetSynonymSet => &EndpointSpec {
                method: HttpMethod::Get,
                uri: "/engines/{engine_name}/synonyms/{synonym_set_id}",
                param_whitelist: &[],
                accepts_body: false,
            },
            Self::IndexDocuments => &EndpointSpec {
                method: HttpMethod::Post,
                uri: "/engines/{engine_name}/documents",
                param_whitelist: &[],
                accepts_body: true,
            },
            Self::ListCurations => &EndpointSpec {
                method: HttpMethod::Get,
                uri: "/engines/{engine_name}/curations",
                param_whitelist: PAGING_PARAMS,
                accepts_body: false,
            },
            Self::ListDocuments => &EndpointSpec {
                method: HttpMethod::Get,
                uri: "/engines/{engine_name}/documents/list",
                param_whitelist: PAGING_PARAMS,
                accepts_body: false,
            },
            Self::ListEngines => &EndpointSpec {
                method: HttpMethod::Get,
                uri: "/engines",
                param_whitelist: PAGING_PARAMS,
                accepts_body: false,
            },
            Self::ListSynonyms => &EndpointSpec {
                method: HttpMethod::Get,
                uri: "/engines/{engine_name}/synonyms",
                param_whitelist: PAGING_PARAMS,
                accepts_body: false,
            },
            Self::MultiSearch => &EndpointSpec {
                method: HttpMethod::Post,
                uri: "/engines/{engine_name}/multi_search",
                param_whitelist: &["queries"],
                accepts_body: false,
            },
            Self::ResetSearchSettings => &EndpointSpec {
                method: HttpMethod::Post,
                uri: "/engines/{engine_name}/search_settings/reset",
                param_whitelist: &[],
                accepts_body: false,
            },
            Self::Search => &EndpointSpec {
                method: HttpMethod::Get,
                uri: "/engines/{engine_name}/search",
                param_whitelist: &[
                    "query",
                    "page.current",
                    "page.size",
                    "filters",
                    "sort",
                    "facets",
                    "search_fields",
                    "boosts",
                    "group",
                    "result_fields",
                    "analytics.tags",
                ],
                accepts_body: false,
            },
            Self::SendClick => &EndpointSpec {
                method: HttpMethod::Post,
                uri: "/engines/{engine_name}/click",
                param_whitelist: &["query", "document_id", "request_id", "tags"],
                accepts_body: false,
            },
            Self::UpdateCuration => &EndpointSpec {
                method: HttpMethod::Put,
                uri: "/engines/{engine_name}/curations/{curation_id}",
                param_whitelist: &["queries", "promoted", "hidden"],
                accepts_body: false,
            },
            Self::UpdateDocuments => &EndpointSpec {
                method: HttpMethod::Patch,
                uri: "/engines/{engine_name}/documents",
                param_whitelist: &[],
                accepts_body: true,
            },
            Self::UpdateSchema => &EndpointSpec {
                method: HttpMethod::Post,
                uri: "/engines/{engine_name}/schema",
                param_whitelist: &[],
                accepts_body: true,
            },
            Self::UpdateSearchSettings => &EndpointSpec {
                method: HttpMethod::Post,
                uri: "/engines/{engine_name}/search_settings",
                param_whitelist: &[],
                accepts_body: true,
            },
        }
    }

    /// Build a fresh endpoint instance for this operation.
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.spec())
    }
}

/// Build an endpoint from a canonical operation name.
///
/// The factory entry point for callers that resolve operations dynamically.
pub fn build(name: &str) -> Result<Endpoint, ClientError> {
    Operation::from_name(name).map(|op| op.endpoint())
}

/// A single request in flight: static spec plus per-call parameters and body.
///
/// Constructed fresh per request and consumed once by the transport call.
#[derive(Debug)]
pub struct Endpoint {
    spec: &'static EndpointSpec,
    params: Map<String, Value>,
    body: Option<Value>,
}

impl Endpoint {
    fn new(spec: &'static EndpointSpec) -> Self {
        Self {
            spec,
            params: Map::new(),
            body: None,
        }
    }

    /// Store the full candidate parameter map. No validation happens here;
    /// route placeholders are checked when the URI is rendered.
    pub fn set_params(&mut self, params: Map<String, Value>) {
        self.params = params;
    }

    /// Store the request body. Only meaningful for operations whose spec
    /// declares body support.
    pub fn set_body(&mut self, body: Value) {
        self.body = Some(body);
    }

    pub fn method(&self) -> HttpMethod {
        self.spec.method
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Render the URI template into the final request path.
    ///
    /// Every `{placeholder}` token must resolve to a scalar value in the
    /// stored parameter map; values are substituted percent-encoded.
    pub fn uri(&self) -> Result<String, ClientError> {
        let mut rendered = String::with_capacity(self.spec.uri.len());
        let mut rest = self.spec.uri;

        while let Some(open) = rest.find('{') {
            rendered.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = match after.find('}') {
                Some(i) => i,
                None => {
                    // Unterminated token; emit the template text verbatim.
                    rendered.push('{');
                    rendered.push_str(after);
                    return Ok(rendered);
                }
            };
            rendered.push_str(&self.route_value(&after[..close])?);
            rest = &after[close + 1..];
        }

        rendered.push_str(rest);
        Ok(rendered)
    }

    /// The query parameters to forward to the transport.
    ///
    /// Route placeholders are excluded (already consumed by the URI), only
    /// whitelisted names are kept, and null values are dropped. Unknown
    /// parameter names are silently omitted rather than rejected, so newer
    /// callers keep working against this catalog. Composite values pass
    /// through untouched; flattening them into the query string is the
    /// transport's encoding convention.
    pub fn query_params(&self) -> Map<String, Value> {
        self.params
            .iter()
            .filter(|(name, value)| {
                !value.is_null()
                    && !self.is_route_placeholder(name)
                    && self.spec.param_whitelist.contains(&name.as_str())
            })
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    fn is_route_placeholder(&self, name: &str) -> bool {
        self.spec.uri.contains(&format!("{{{name}}}"))
    }

    fn route_value(&self, name: &str) -> Result<String, ClientError> {
        match self.params.get(name) {
            None | Some(Value::Null) => Err(ClientError::missing_route_parameter(name)),
            Some(Value::String(s)) => Ok(utf8_percent_encode(s, PATH_SEGMENT).to_string()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(_) => Err(ClientError::invalid_route_parameter_value(name)),
        }
    }
}
