use super::respond;
use crate::generator::fragments::{Fragment, FragmentBuilder, HandlerFragment, ImportNeeds, SourceUnit};
use crate::generator::metadata::MetadataRegistry;
use crate::generator::query::Operation;
use crate::generator::request::GenerationRequest;

/// Credential-verification handler: look up the gallery by its unique key,
/// reject expired links, compare the supplied password against the stored
/// hash with bcrypt (never plaintext equality), record the access, and
/// return the gallery without its secret field.
///
/// The credential comparison is the access control here, so no up-front
/// identity-check block is emitted.
pub(super) fn compose(
    fb: &FragmentBuilder,
    req: &GenerationRequest,
    metadata: &MetadataRegistry,
) -> SourceUnit {
    let meta = metadata.resource("galleries");
    let log_meta = metadata.resource("access-logs");
    let key = meta.unique_key.clone();
    let entity = meta.model.clone();

    let mut unit = SourceUnit::default();
    unit.push(fb.type_block(&meta));
    for fragment in fb.imports(&ImportNeeds {
        credential: true,
        ..Default::default()
    }) {
        unit.push(fragment);
    }
    unit.push(fb.connection_setup());

    let lookup = Operation::single_read(&meta, &entity, vec![(key.clone(), key.clone())]);
    let access_log = Operation::create(
        &log_meta,
        None,
        vec![
            ("gallerySlug".to_string(), key.clone()),
            (
                "clientAddress".to_string(),
                "req.socket.remoteAddress || 'unknown'".to_string(),
            ),
        ],
    );

    let mut body = String::new();
    body.push_str(&format!("const {{ {key}, password }} = req.body || {{}};\n"));
    body.push_str(&format!(
        "if (!{key} || !password) {{\n  return res.status(400).json({{ error: 'Missing credentials' }});\n}}\n\n"
    ));
    body.push_str(&fb.query_operation(&lookup));
    body.push_str(&format!(
        "\nif (!{entity}) {{\n  return res.status(404).json({{ error: 'Not found' }});\n}}\n"
    ));
    body.push_str(&format!(
        "if ({entity}.expiresAt && new Date({entity}.expiresAt) < new Date()) {{\n  return res.status(410).json({{ error: 'Gallery link expired' }});\n}}\n\n"
    ));
    body.push_str(&format!(
        "const valid = await compare(password, {entity}.passwordHash);\n"
    ));
    body.push_str("if (!valid) {\n  return res.status(401).json({ error: 'Invalid password' });\n}\n\n");
    body.push_str(&fb.query_operation(&access_log));
    body.push_str(&format!(
        "\n\nconst {{ passwordHash, ...safe }} = {entity};\n"
    ));
    body.push_str(&respond(fb, "return res.status(200).json(safe);"));

    unit.push(Fragment::Handler(HandlerFragment {
        identity_check: None,
        method_guard: fb.method_guard(&["POST"]),
        prologue: fb.client_acquire(),
        body,
        error_handler: fb.error_handler(&req.resource),
    }));

    if let Some(id_generator) = fb.id_generator() {
        unit.push(id_generator);
    }
    unit
}
