use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::schema::SchemaSummary;

/// HTTP method of a supported operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// The lowercase key used for this method inside a path item.
    pub fn key(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
        }
    }

    /// Match a path-item key. Only the exact lowercase spelling is an operation.
    pub fn from_key(key: &str) -> Option<HttpMethod> {
        HttpMethod::ALL.into_iter().find(|m| m.key() == key)
    }
}

/// Parameter location (`in`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

impl ParameterLocation {
    pub const ALL: [ParameterLocation; 4] = [
        ParameterLocation::Path,
        ParameterLocation::Query,
        ParameterLocation::Header,
        ParameterLocation::Cookie,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
        }
    }

    pub fn parse(value: &str) -> Option<ParameterLocation> {
        ParameterLocation::ALL
            .into_iter()
            .find(|l| l.as_str() == value)
    }
}

/// A normalized parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    /// `None` when `in` is missing or not one of the four known locations.
    #[serde(rename = "in")]
    pub location: Option<ParameterLocation>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaSummary>,
    pub deprecated: bool,
    pub allow_empty_value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
}

/// An unresolved `$ref` or an inline parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParameterOrRef {
    Ref {
        #[serde(rename = "ref")]
        ref_path: String,
    },
    Parameter(Parameter),
}

impl ParameterOrRef {
    pub fn as_parameter(&self) -> Option<&Parameter> {
        match self {
            ParameterOrRef::Parameter(p) => Some(p),
            ParameterOrRef::Ref { .. } => None,
        }
    }
}

/// One media type entry of a body or response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaContent {
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Value>,
}

/// A normalized request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    /// `None` when the body declares no `content` map at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<MediaContent>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestBodyOrRef {
    Ref {
        #[serde(rename = "ref")]
        ref_path: String,
    },
    RequestBody(RequestBody),
}

impl RequestBodyOrRef {
    /// Content entries of an inline body; empty for references.
    pub fn content(&self) -> &[MediaContent] {
        match self {
            RequestBodyOrRef::RequestBody(body) => body.content.as_deref().unwrap_or_default(),
            RequestBodyOrRef::Ref { .. } => &[],
        }
    }
}

/// A normalized response header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HeaderOrRef {
    Ref {
        #[serde(rename = "ref")]
        ref_path: String,
    },
    Header {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        required: bool,
        deprecated: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        schema: Option<SchemaSummary>,
    },
}

/// One declared response status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseOrRef {
    Ref {
        status: String,
        #[serde(rename = "ref")]
        ref_path: String,
    },
    Response {
        status: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        headers: Option<IndexMap<String, HeaderOrRef>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<Vec<MediaContent>>,
    },
}

impl ResponseOrRef {
    pub fn status(&self) -> &str {
        match self {
            ResponseOrRef::Ref { status, .. } | ResponseOrRef::Response { status, .. } => status,
        }
    }
}

/// The normalized form of one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Declared operationId, or `{method}_{segments}` when absent.
    pub id: String,
    /// The operationId exactly as declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Summary, else the id, else `"{METHOD} {path}"`.
    pub name: String,
    pub method: HttpMethod,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub parameters: Vec<ParameterOrRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBodyOrRef>,
    pub responses: Vec<ResponseOrRef>,
    pub deprecated: bool,
    /// The operation's `security` list, untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Value>,
}

impl Endpoint {
    /// Inline parameters declared at `location`, in merge order.
    pub fn parameters_in(&self, location: ParameterLocation) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter_map(ParameterOrRef::as_parameter)
            .filter(move |p| p.location == Some(location))
    }

    /// `$ref` strings of parameters that were left unresolved.
    pub fn parameter_refs(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().filter_map(|p| match p {
            ParameterOrRef::Ref { ref_path } => Some(ref_path.as_str()),
            ParameterOrRef::Parameter(_) => None,
        })
    }
}
