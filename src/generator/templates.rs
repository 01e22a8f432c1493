use askama::Template;

use super::fragments::{Fragment, SourceUnit};

/// Skeleton for one emitted TypeScript source unit
///
/// The template fixes the structural order: imports, type block, connection
/// setup, route config, handler, trailing utilities. Composition decides the
/// content; this serializer decides the layout.
#[derive(Template)]
#[template(path = "endpoint.ts.txt", escape = "none")]
pub struct EndpointTemplate {
    /// Import lines, in composition order
    pub imports: Vec<String>,
    /// TypeScript interface block (may be empty)
    pub type_block: String,
    /// Module-scope connection bootstrap (may be empty)
    pub connection_setup: String,
    /// Next.js route config export (may be empty)
    pub config_block: String,
    /// The exported handler function
    pub handler: String,
    /// Trailing utility functions
    pub utilities: Vec<String>,
}

/// Serialize a source unit into file content
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_source_unit(unit: &SourceUnit) -> anyhow::Result<String> {
    let mut imports = Vec::new();
    let mut type_block = String::new();
    let mut connection_setup = String::new();
    let mut config_block = String::new();
    let mut handler = String::new();
    let mut utilities = Vec::new();

    for fragment in &unit.fragments {
        match fragment {
            Fragment::Import(line) => {
                // Conditional needs can overlap (e.g. multipart and storage
                // both want `path`); keep the first occurrence.
                if !imports.contains(line) {
                    imports.push(line.clone());
                }
            }
            Fragment::TypeBlock(block) => type_block = block.clone(),
            Fragment::ConnectionSetup(block) => connection_setup = block.clone(),
            Fragment::ConfigBlock(block) => config_block = block.clone(),
            Fragment::Handler(h) => handler = h.render(),
            Fragment::Utility(util) => utilities.push(util.clone()),
        }
    }

    let rendered = EndpointTemplate {
        imports,
        type_block,
        connection_setup,
        config_block,
        handler,
        utilities,
    }
    .render()?;
    Ok(rendered)
}
