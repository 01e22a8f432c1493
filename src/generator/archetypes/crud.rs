use super::{method_branch, respond};
use crate::generator::fragments::{Fragment, FragmentBuilder, HandlerFragment, ImportNeeds, SourceUnit};
use crate::generator::metadata::{to_camel_ident, MetadataRegistry};
use crate::generator::query::Operation;
use crate::generator::request::GenerationRequest;

/// Full-CRUD handler: one branch per verb, each delegating to the query
/// dialect; anything outside the four verbs is refused by the guard.
pub(super) fn compose(
    fb: &FragmentBuilder,
    req: &GenerationRequest,
    metadata: &MetadataRegistry,
) -> SourceUnit {
    let meta = metadata.resource(&req.resource);
    let list_binding = to_camel_ident(&req.resource);
    let data: Vec<(String, String)> = meta
        .fields
        .iter()
        .map(|field| (field.clone(), format!("req.body.{field}")))
        .collect();

    let mut unit = SourceUnit::default();
    unit.push(fb.type_block(&meta));
    for fragment in fb.imports(&ImportNeeds {
        identity: true,
        ..Default::default()
    }) {
        unit.push(fragment);
    }
    unit.push(fb.connection_setup());

    let enumerate = Operation::enumerate(&meta, &list_binding).with_includes(meta.relations.clone());
    let create = Operation::create(&meta, Some("created"), data.clone());
    let update = Operation::update(
        &meta,
        Some("updated"),
        vec![("id".to_string(), "req.body.id".to_string())],
        data,
    );
    let delete = Operation::delete(&meta, vec![("id".to_string(), "req.body.id".to_string())]);

    let branches = vec![
        method_branch(
            "GET",
            &format!(
                "{}\n{}",
                fb.query_operation(&enumerate),
                respond(fb, &format!("return res.status(200).json({list_binding});"))
            ),
        ),
        method_branch(
            "POST",
            &format!(
                "{}\n{}",
                fb.query_operation(&create),
                respond(fb, "return res.status(201).json(created);")
            ),
        ),
        method_branch(
            "PUT",
            &format!(
                "{}\n{}",
                fb.query_operation(&update),
                respond(fb, "return res.status(200).json(updated);")
            ),
        ),
        method_branch(
            "DELETE",
            &format!(
                "{}\n{}",
                fb.query_operation(&delete),
                respond(fb, "return res.status(204).end();")
            ),
        ),
    ];

    unit.push(Fragment::Handler(HandlerFragment {
        identity_check: Some(fb.identity_check()),
        method_guard: fb.method_guard(&["GET", "POST", "PUT", "DELETE"]),
        prologue: fb.client_acquire(),
        body: branches.join("\n\n"),
        error_handler: fb.error_handler(&req.resource),
    }));

    if let Some(id_generator) = fb.id_generator() {
        unit.push(id_generator);
    }
    unit
}
