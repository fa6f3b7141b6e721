use std::sync::Arc;

use clientgen_core::ir::{HttpMethod, ParameterLocation, RequestBodyOrRef, UNTAGGED};
use clientgen_core::parse;
use clientgen_core::transform::{build_api_spec, build_tag_groups};

const CLUBS: &str = include_str!("fixtures/clubs.json");

fn names(endpoints: &[Arc<clientgen_core::ir::Endpoint>]) -> Vec<&str> {
    endpoints.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn groups_in_first_appearance_order() {
    let doc = parse::from_json(CLUBS).unwrap();
    let groups = build_tag_groups(&doc);
    let tags: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(tags, vec!["Posts", "Moderation", "Reports", UNTAGGED, "Items"]);
}

#[test]
fn lists_are_sorted_by_name() {
    let doc = parse::from_json(CLUBS).unwrap();
    let groups = build_tag_groups(&doc);
    assert_eq!(
        names(&groups["Posts"]),
        vec!["Archive post", "Create post", "Get post", "List posts"]
    );
    assert_eq!(names(&groups["Reports"]), vec!["Alpha import", "Zebra export"]);
    assert_eq!(
        names(&groups["Items"]),
        vec!["DELETE /items/{id}", "GET /items/{id}"]
    );
}

#[test]
fn multi_tag_operation_shares_one_endpoint() {
    let doc = parse::from_json(CLUBS).unwrap();
    let groups = build_tag_groups(&doc);

    let in_posts = groups["Posts"]
        .iter()
        .find(|e| e.id == "createClubPost")
        .unwrap();
    let in_moderation = &groups["Moderation"][0];
    assert!(Arc::ptr_eq(in_posts, in_moderation));

    let appearances = groups
        .values()
        .flatten()
        .filter(|e| e.id == "createClubPost")
        .count();
    assert_eq!(appearances, 2);
}

#[test]
fn unsupported_methods_and_malformed_items_are_skipped() {
    let doc = parse::from_json(CLUBS).unwrap();
    let groups = build_tag_groups(&doc);
    let all: Vec<_> = groups.values().flatten().collect();
    assert!(all.iter().all(|e| e.name != "Trace is not supported"));
    assert!(all.iter().all(|e| e.path != "/broken"));
    assert!(all.iter().all(|e| e.method != HttpMethod::Put));
}

#[test]
fn path_level_parameter_wins_over_operation_duplicate() {
    let doc = parse::from_json(CLUBS).unwrap();
    let groups = build_tag_groups(&doc);
    let list = groups["Posts"]
        .iter()
        .find(|e| e.id == "listClubPosts")
        .unwrap();

    let path_params: Vec<_> = list.parameters_in(ParameterLocation::Path).collect();
    assert_eq!(path_params.len(), 1);
    assert_eq!(path_params[0].name, "clubId");
    assert!(path_params[0].required);
    assert_eq!(path_params[0].description, None);

    let query: Vec<&str> = list
        .parameters_in(ParameterLocation::Query)
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(query, vec!["limit", "cursor"]);
}

#[test]
fn shared_path_parameter_reaches_every_operation() {
    let doc = parse::from_json(CLUBS).unwrap();
    let groups = build_tag_groups(&doc);
    for endpoint in &groups["Items"] {
        let params: Vec<_> = endpoint.parameters_in(ParameterLocation::Path).collect();
        assert_eq!(params.len(), 1, "{}", endpoint.name);
        assert_eq!(params[0].name, "id");
        assert!(params[0].required);
        assert_eq!(endpoint.parameters.len(), 1);
    }
}

#[test]
fn untagged_ping_scenario() {
    let doc = parse::from_json(CLUBS).unwrap();
    let groups = build_tag_groups(&doc);
    let ping = &groups[UNTAGGED][0];
    assert_eq!(ping.id, "get_ping");
    assert_eq!(ping.name, "Ping");
    assert_eq!(ping.method, HttpMethod::Get);
    assert_eq!(ping.path, "/ping");
    assert_eq!(ping.operation_id, None);
}

#[test]
fn refs_are_passed_through_unresolved() {
    let doc = parse::from_json(CLUBS).unwrap();
    let groups = build_tag_groups(&doc);
    let import = &groups["Reports"][0];
    assert_eq!(
        import.request_body,
        Some(RequestBodyOrRef::Ref {
            ref_path: "#/components/requestBodies/Import".to_string()
        })
    );

    let list = groups["Posts"]
        .iter()
        .find(|e| e.id == "listClubPosts")
        .unwrap();
    let statuses: Vec<&str> = list.responses.iter().map(|r| r.status()).collect();
    assert_eq!(statuses, vec!["200", "404"]);
}

#[test]
fn deprecated_and_security_are_carried() {
    let doc = parse::from_json(CLUBS).unwrap();
    let groups = build_tag_groups(&doc);
    let archive = &groups["Posts"][0];
    assert_eq!(archive.id, "deleteClubPost");
    assert!(archive.deprecated);
    assert_eq!(
        archive.security,
        Some(serde_json::json!([{ "bearerAuth": ["posts:write"] }]))
    );
}

#[test]
fn api_spec_info_and_counts() {
    let doc = parse::from_json(CLUBS).unwrap();
    let api = build_api_spec(&doc);
    assert_eq!(api.info.title, "Club Hub API");
    assert_eq!(api.info.version.as_deref(), Some("2.1.0"));
    assert_eq!(api.endpoint_count(), 10);
    assert_eq!(
        api.sorted_tags(),
        vec!["Items", "Moderation", "Posts", "Reports", UNTAGGED]
    );
}

#[test]
fn yaml_input_is_equivalent() {
    let yaml = r#"
openapi: 3.0.0
info:
  title: Tiny
paths:
  /ping:
    get:
      summary: Ping
      responses:
        200:
          description: pong
"#;
    let doc = parse::from_yaml(yaml).unwrap();
    let api = build_api_spec(&doc);
    assert_eq!(api.info.title, "Tiny");
    let ping = &api.groups[UNTAGGED][0];
    assert_eq!(ping.responses[0].status(), "200");
}

#[test]
fn invalid_json_is_an_input_error() {
    assert!(parse::from_json("{ not json").is_err());
    assert!(parse::from_json("\"just a string\"").is_err());
}
