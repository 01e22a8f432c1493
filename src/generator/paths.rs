use std::path::{Path, PathBuf};

use super::archetypes::Archetype;
use super::registry::{Pattern, PatternRegistry};
use super::request::GenerationRequest;

/// Conventional request-handler directory tree root
pub const HANDLER_ROOT: &str = "pages/api";

/// Filename suffix marking the automatically generated alternate-pattern
/// counterpart
pub const ALTERNATE_SUFFIX: &str = "-simple";

/// Derive the output path for one generated file.
///
/// Base shape is `<root>/<area>/<resource>.ts`. `nested` inserts a literal
/// `[slug]` segment before the resource; `dynamic` turns the resource into a
/// directory whose file is the bracketed parameter name (the download
/// archetype always uses `imageId` and is always nested+dynamic). The
/// alternate suffix is applied only to the counterpart file: bound pattern
/// differs from the area default and no override flag was given.
pub fn resolve(
    root: &Path,
    req: &GenerationRequest,
    archetype: Archetype,
    pattern: Pattern,
    patterns: &PatternRegistry,
) -> PathBuf {
    let nested = req.options.nested || archetype.forces_nested_dynamic();
    let dynamic = req.options.dynamic || archetype.forces_nested_dynamic();

    let mut dir = root.join(req.area.as_str());
    if nested {
        dir = dir.join("[slug]");
    }

    let is_counterpart =
        pattern != patterns.default_for(req.area) && !req.options.has_pattern_override();
    let suffix = if is_counterpart { ALTERNATE_SUFFIX } else { "" };

    let path = if dynamic {
        dir.join(&req.resource)
            .join(format!("[{}]{}.ts", archetype.dynamic_param(), suffix))
    } else {
        dir.join(format!("{}{}.ts", req.resource, suffix))
    };
    tracing::debug!(path = %path.display(), pattern = pattern.name(), "resolved output path");
    path
}
