use super::respond;
use crate::generator::fragments::{
    indent, Fragment, FragmentBuilder, HandlerFragment, ImportNeeds, SourceUnit,
};
use crate::generator::metadata::MetadataRegistry;
use crate::generator::query::Operation;
use crate::generator::request::GenerationRequest;

/// Multipart-upload handler: resolve the owning gallery, bootstrap the
/// upload directory idempotently, write each posted file's metadata record,
/// and report what was created. Emits the Next.js route config that turns
/// the built-in body parser off, which formidable requires.
pub(super) fn compose(
    fb: &FragmentBuilder,
    req: &GenerationRequest,
    metadata: &MetadataRegistry,
) -> SourceUnit {
    let gallery_meta = metadata.resource("galleries");
    let image_meta = metadata.resource("images");

    let mut unit = SourceUnit::default();
    unit.push(fb.type_block(&image_meta));
    for fragment in fb.imports(&ImportNeeds {
        identity: true,
        multipart: true,
        ..Default::default()
    }) {
        unit.push(fragment);
    }
    unit.push(fb.connection_setup());
    unit.push(Fragment::ConfigBlock(
        "export const config = {\n  api: {\n    bodyParser: false,\n  },\n};".to_string(),
    ));

    let gallery_lookup = Operation::single_read(
        &gallery_meta,
        "gallery",
        vec![("id".to_string(), "galleryId".to_string())],
    );
    let record = Operation::create(
        &image_meta,
        Some("record"),
        vec![
            ("galleryId".to_string(), "galleryId".to_string()),
            ("filename".to_string(), "file.newFilename".to_string()),
            (
                "mimeType".to_string(),
                "file.mimetype || 'application/octet-stream'".to_string(),
            ),
            ("sizeBytes".to_string(), "file.size".to_string()),
        ],
    );

    let mut body = String::new();
    body.push_str("const galleryId = String(req.query.galleryId || '');\n");
    body.push_str("if (!galleryId) {\n  return res.status(400).json({ error: 'Missing galleryId' });\n}\n\n");
    body.push_str(&fb.query_operation(&gallery_lookup));
    body.push_str("\nif (!gallery) {\n  return res.status(404).json({ error: 'Gallery not found' });\n}\n\n");
    body.push_str("const uploadDir = path.join(process.env.STORAGE_ROOT || 'storage', gallery.slug);\n");
    body.push_str("await fs.promises.mkdir(uploadDir, { recursive: true });\n\n");
    body.push_str("const form = formidable({ multiples: true, uploadDir, keepExtensions: true });\n");
    body.push_str("const [, files] = await form.parse(req);\n");
    body.push_str(
        "const uploaded = Array.isArray(files.file) ? files.file : [files.file].filter(Boolean);\n\n",
    );
    body.push_str("const created = [];\n");
    body.push_str("for (const file of uploaded) {\n");
    body.push_str(&indent(&fb.query_operation(&record), 2));
    body.push_str("\n  created.push(record);\n}\n\n");
    body.push_str(&respond(
        fb,
        "return res.status(201).json({ count: created.length, images: created });",
    ));

    unit.push(Fragment::Handler(HandlerFragment {
        identity_check: Some(fb.identity_check()),
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
