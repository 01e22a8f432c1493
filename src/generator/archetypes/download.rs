use super::respond;
use crate::generator::fragments::{Fragment, FragmentBuilder, HandlerFragment, ImportNeeds, SourceUnit};
use crate::generator::metadata::MetadataRegistry;
use crate::generator::query::Operation;
use crate::generator::request::GenerationRequest;

/// Tracked-download handler: resolve gallery and image, enforce the usage
/// ceiling *before* any usage record is written, read the artifact, record
/// the download keyed by the caller's resolved address, then respond.
pub(super) fn compose(
    fb: &FragmentBuilder,
    req: &GenerationRequest,
    metadata: &MetadataRegistry,
) -> SourceUnit {
    let gallery_meta = metadata.resource("galleries");
    let image_meta = metadata.resource("images");
    let download_meta = metadata.resource("downloads");

    let mut unit = SourceUnit::default();
    unit.push(fb.type_block(&gallery_meta));
    for fragment in fb.imports(&ImportNeeds {
        storage: true,
        ..Default::default()
    }) {
        unit.push(fragment);
    }
    unit.push(fb.connection_setup());

    let gallery_lookup = Operation::single_read(
        &gallery_meta,
        "gallery",
        vec![("slug".to_string(), "String(slug)".to_string())],
    );
    let image_lookup = Operation::single_read(
        &image_meta,
        "image",
        vec![("id".to_string(), "String(imageId)".to_string())],
    );
    let record = Operation::create(
        &download_meta,
        None,
        vec![
            ("imageId".to_string(), "String(imageId)".to_string()),
            ("clientAddress".to_string(), "getClientAddress(req)".to_string()),
            (
                "userAgent".to_string(),
                "req.headers['user-agent'] || ''".to_string(),
            ),
        ],
    );
    let bump_count = Operation::update(
        &gallery_meta,
        None,
        vec![("id".to_string(), "gallery.id".to_string())],
        vec![(
            "downloadCount".to_string(),
            "gallery.downloadCount + 1".to_string(),
        )],
    );

    let mut body = String::new();
    body.push_str("const { slug, imageId } = req.query;\n\n");
    body.push_str(&fb.query_operation(&gallery_lookup));
    body.push_str("\nif (!gallery) {\n  return res.status(404).json({ error: 'Gallery not found' });\n}\n\n");
    body.push_str(&fb.query_operation(&image_lookup));
    body.push_str("\nif (!image) {\n  return res.status(404).json({ error: 'Image not found' });\n}\n\n");
    // Ceiling check stays ahead of the artifact read and the usage write.
    body.push_str("if (gallery.downloadCount >= gallery.downloadLimit) {\n  return res.status(429).json({ error: 'Download limit reached' });\n}\n\n");
    body.push_str("const filePath = path.join(process.env.STORAGE_ROOT || 'storage', gallery.slug, image.filename);\n");
    body.push_str("const data = await fs.promises.readFile(filePath);\n\n");
    body.push_str(&fb.query_operation(&record));
    body.push('\n');
    body.push_str(&fb.query_operation(&bump_count));
    body.push_str("\n\nres.setHeader('Content-Type', image.mimeType || 'application/octet-stream');\n");
    body.push_str("res.setHeader('Content-Disposition', `attachment; filename=\"${image.filename}\"`);\n");
    body.push_str(&respond(fb, "return res.status(200).send(data);"));

    unit.push(Fragment::Handler(HandlerFragment {
        identity_check: None,
        method_guard: fb.method_guard(&["GET"]),
        prologue: fb.client_acquire(),
        body,
        error_handler: fb.error_handler(&req.resource),
    }));

    if let Some(id_generator) = fb.id_generator() {
        unit.push(id_generator);
    }
    unit.push(fb.client_address_util());
    unit
}
