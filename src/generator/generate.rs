use std::path::Path;

use super::archetypes::Archetype;
use super::emit::{emit, GeneratedFile};
use super::error::ScaffoldError;
use super::fragments::FragmentBuilder;
use super::metadata::MetadataRegistry;
use super::paths;
use super::registry::{Pattern, PatternRegistry};
use super::request::{Area, GenerationRequest};
use super::templates::render_source_unit;

/// Outcome of one attempted emission
#[derive(Debug, Clone)]
pub struct EmitReport {
    pub path: std::path::PathBuf,
    pub pattern: Pattern,
    pub archetype: Archetype,
    /// False when the emission was skipped on a conflict
    pub written: bool,
}

/// Run one generation request end to end.
///
/// Binds the pattern, composes the archetype, and emits the primary file.
/// For the admin area with no pattern-override flag, additionally emits the
/// counterpart file under the other pattern; a conflict on either file is
/// reported and tolerated without aborting the run.
///
/// # Errors
///
/// Returns an error on I/O or rendering failure. Per-file conflicts are
/// reported in the returned list, not as errors.
pub fn generate_endpoint(
    req: &GenerationRequest,
    metadata: &MetadataRegistry,
    patterns: &PatternRegistry,
    out_root: &Path,
) -> anyhow::Result<Vec<EmitReport>> {
    let archetype = Archetype::select(req);
    let primary = patterns.resolve(req.area, &req.options);
    tracing::debug!(
        area = %req.area,
        resource = %req.resource,
        archetype = archetype.name(),
        "selected archetype"
    );

    let mut reports = Vec::new();
    reports.push(emit_one(req, metadata, patterns, out_root, archetype, primary)?);

    // Dual generation applies only to the admin area, and an explicit
    // override flag suppresses it.
    if req.area == Area::Admin && !req.options.has_pattern_override() {
        reports.push(emit_one(
            req,
            metadata,
            patterns,
            out_root,
            archetype,
            primary.counterpart(),
        )?);
    }

    Ok(reports)
}

fn emit_one(
    req: &GenerationRequest,
    metadata: &MetadataRegistry,
    patterns: &PatternRegistry,
    out_root: &Path,
    archetype: Archetype,
    pattern: Pattern,
) -> anyhow::Result<EmitReport> {
    let builder = FragmentBuilder::new(pattern);
    let unit = archetype.compose(&builder, req, metadata);
    let content = render_source_unit(&unit)?;
    let path = paths::resolve(out_root, req, archetype, pattern, patterns);
    let file = GeneratedFile {
        path: path.clone(),
        content,
    };

    match emit(&file, req.options.force) {
        Ok(_) => {
            println!(
                "✅ Generated {} handler ({}) → {}",
                archetype.name(),
                pattern.name(),
                path.display()
            );
            Ok(EmitReport {
                path,
                pattern,
                archetype,
                written: true,
            })
        }
        Err(ScaffoldError::FileConflict(existing)) => {
            println!(
                "⚠️  Skipping existing handler file: {} (use --force to overwrite)",
                existing.display()
            );
            Ok(EmitReport {
                path: existing,
                pattern,
                archetype,
                written: false,
            })
        }
        Err(err) => Err(err.into()),
    }
}
