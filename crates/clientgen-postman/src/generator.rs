use clientgen_core::ir::{ApiSpec, Endpoint, MediaContent, ParameterLocation};
use clientgen_core::transform::identifiers::assign_tag_names;
use clientgen_core::{CodeGenerator, GeneratedFile};
use log::debug;
use uuid::Uuid;

use crate::collection::{
    Body, BodyOptions, Collection, Header, Info, Item, QueryParam, RawOptions, Request,
    SCHEMA_URL, Variable,
};
use crate::url::build_url;

pub const FILE_SUFFIX: &str = ".postman_collection.json";

/// Raw body placed in every request that declares content.
const BODY_STUB: &str = "{\n  \n}";

#[derive(Debug, thiserror::Error)]
pub enum PostmanError {
    #[error("failed to serialize collection: {0}")]
    Json(#[from] serde_json::Error),
}

/// Emits one `{slug}.postman_collection.json` per tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostmanGenerator;

impl CodeGenerator for PostmanGenerator {
    type Error = PostmanError;

    fn generate(&self, api: &ApiSpec) -> Result<Vec<GeneratedFile>, PostmanError> {
        let tags = api.sorted_tags();
        let tag_names = assign_tag_names(tags.iter().copied());

        tags.iter()
            .map(|tag| {
                let endpoints = &api.groups[*tag];
                let collection =
                    build_collection(&api.info.title, tag, endpoints.iter().map(|e| e.as_ref()));
                let mut content = serde_json::to_string_pretty(&collection)?;
                content.push('\n');

                let slug = &tag_names[*tag].slug;
                debug!("emitted {slug}{FILE_SUFFIX} with {} requests", collection.item.len());
                Ok::<_, PostmanError>(GeneratedFile {
                    path: format!("{slug}{FILE_SUFFIX}"),
                    content,
                })
            })
            .collect()
    }
}

/// Collection document for one tag. Every call draws a fresh `_postman_id`.
pub fn build_collection<'a>(
    title: &str,
    tag: &str,
    endpoints: impl IntoIterator<Item = &'a Endpoint>,
) -> Collection {
    Collection {
        info: Info {
            postman_id: Uuid::new_v4().to_string(),
            name: format!("{title} - {tag}"),
            schema: SCHEMA_URL.to_string(),
            description: format!("Requests for the {tag} endpoints of {title}."),
        },
        item: endpoints.into_iter().map(build_item).collect(),
        variable: vec![Variable {
            key: "baseUrl".to_string(),
            value: String::new(),
            kind: "string".to_string(),
            description: "Base URL of the API, for example https://api.example.com".to_string(),
        }],
    }
}

/// The content entry a request body stub is modelled on: the first JSON-like
/// mime type, else the first entry.
pub fn body_content(endpoint: &Endpoint) -> Option<&MediaContent> {
    let content = endpoint.request_body.as_ref()?.content();
    content
        .iter()
        .find(|c| c.mime_type.contains("json"))
        .or_else(|| content.first())
}

pub fn build_item(endpoint: &Endpoint) -> Item {
    let mut header = Vec::new();
    let mut body = None;
    if let Some(content) = body_content(endpoint) {
        header.push(Header {
            key: "Content-Type".to_string(),
            value: content.mime_type.clone(),
        });
        let language = if content.mime_type.contains("json") {
            "json"
        } else {
            "text"
        };
        body = Some(Body {
            mode: "raw".to_string(),
            raw: BODY_STUB.to_string(),
            options: BodyOptions {
                raw: RawOptions {
                    language: language.to_string(),
                },
            },
        });
    }

    let mut url = build_url(&endpoint.path);
    let query: Vec<QueryParam> = endpoint
        .parameters_in(ParameterLocation::Query)
        .map(|p| QueryParam {
            key: p.name.clone(),
            value: String::new(),
            description: p.description.clone(),
            disabled: !p.required,
        })
        .collect();
    if !query.is_empty() {
        url.query = Some(query);
    }

    Item {
        name: endpoint.name.clone(),
        request: Request {
            method: endpoint.method.as_str().to_string(),
            header,
            body,
            url,
        },
    }
}
