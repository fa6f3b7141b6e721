//! Serde model of the subset of Postman Collection v2.1 that clientgen emits.

use serde::Serialize;

pub const SCHEMA_URL: &str = "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

#[derive(Debug, Clone, Serialize)]
pub struct Collection {
    pub info: Info,
    pub item: Vec<Item>,
    pub variable: Vec<Variable>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Info {
    #[serde(rename = "_postman_id")]
    pub postman_id: String,
    pub name: String,
    pub schema: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub name: String,
    pub request: Request,
}

#[derive(Debug, Clone, Serialize)]
pub struct Request {
    pub method: String,
    pub header: Vec<Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    pub url: Url,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    pub mode: String,
    pub raw: String,
    pub options: BodyOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyOptions {
    pub raw: RawOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawOptions {
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Url {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
    pub variable: Vec<PathVariable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Vec<QueryParam>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathVariable {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryParam {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub disabled: bool,
}

/// Collection-level variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}
