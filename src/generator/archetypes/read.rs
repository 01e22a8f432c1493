use super::respond;
use crate::generator::fragments::{Fragment, FragmentBuilder, HandlerFragment, ImportNeeds, SourceUnit};
use crate::generator::metadata::{to_camel_ident, MetadataRegistry};
use crate::generator::query::Operation;
use crate::generator::request::GenerationRequest;

/// Plain-read handler: one GET branch wrapping a single enumerate operation.
pub(super) fn compose(
    fb: &FragmentBuilder,
    req: &GenerationRequest,
    metadata: &MetadataRegistry,
) -> SourceUnit {
    let meta = metadata.resource(&req.resource);
    let binding = to_camel_ident(&req.resource);

    let mut unit = SourceUnit::default();
    unit.push(fb.type_block(&meta));
    for fragment in fb.imports(&ImportNeeds {
        identity: true,
        ..Default::default()
    }) {
        unit.push(fragment);
    }
    unit.push(fb.connection_setup());

    let enumerate = Operation::enumerate(&meta, &binding).with_includes(meta.relations.clone());
    let body = format!(
        "{}\n{}",
        fb.query_operation(&enumerate),
        respond(fb, &format!("return res.status(200).json({binding});"))
    );

    unit.push(Fragment::Handler(HandlerFragment {
        identity_check: Some(fb.identity_check()),
        method_guard: fb.method_guard(&["GET"]),
        prologue: fb.client_acquire(),
        body,
        error_handler: fb.error_handler(&req.resource),
    }));
    unit
}
