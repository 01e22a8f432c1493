use std::path::Path;

use darkroom_scaffold::generator::query::{render_query, Operation, QueryDialect};
use darkroom_scaffold::generator::{
    generate_endpoint, Area, GenOptions, GenerationRequest, MetadataRegistry, Pattern,
    PatternRegistry,
};
use tempfile::TempDir;

#[test]
fn test_resolve_matches_override_precedence_rule() {
    let patterns = PatternRegistry::new();
    assert_eq!(
        patterns.resolve(Area::Admin, &GenOptions::default()),
        Pattern::OrmBacked
    );
    assert_eq!(
        patterns.resolve(
            Area::Admin,
            &GenOptions {
                force_simple_pattern: true,
                ..Default::default()
            }
        ),
        Pattern::DirectClient
    );
    assert_eq!(
        patterns.resolve(
            Area::Client,
            &GenOptions {
                force_orm_pattern: true,
                ..Default::default()
            }
        ),
        Pattern::OrmBacked
    );
}

#[test]
fn test_sql_dialect_argument_list_matches_placeholders() {
    let metadata = MetadataRegistry::embedded().unwrap();
    let meta = metadata.resource("downloads");
    let op = Operation::create(
        &meta,
        None,
        vec![
            ("imageId".to_string(), "String(imageId)".to_string()),
            ("clientAddress".to_string(), "getClientAddress(req)".to_string()),
            ("userAgent".to_string(), "ua".to_string()),
        ],
    );
    let rendered = render_query(QueryDialect::ParameterizedSql, &op);
    // id + three data columns
    assert!(rendered.contains("($1, $2, $3, $4)"));
    assert!(rendered.contains("[generateId(), String(imageId), getClientAddress(req), ua]"));
}

#[test]
fn test_client_area_generates_one_direct_client_file() {
    let dir = TempDir::new().unwrap();
    let metadata = MetadataRegistry::embedded().unwrap();
    let patterns = PatternRegistry::new();
    let request = GenerationRequest::new("client", "clients", GenOptions::default()).unwrap();

    let reports = generate_endpoint(&request, &metadata, &patterns, dir.path()).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].pattern, Pattern::DirectClient);
    assert!(reports[0]
        .path
        .ends_with(Path::new("client").join("clients.ts")));
}

#[test]
fn test_nested_flag_inserts_slug_segment() {
    let dir = TempDir::new().unwrap();
    let metadata = MetadataRegistry::embedded().unwrap();
    let patterns = PatternRegistry::new();
    let request = GenerationRequest::new(
        "client",
        "images",
        GenOptions {
            nested: true,
            dynamic: true,
            ..Default::default()
        },
    )
    .unwrap();

    let reports = generate_endpoint(&request, &metadata, &patterns, dir.path()).unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0]
        .path
        .ends_with(Path::new("client").join("[slug]").join("images").join("[id].ts")));
}
