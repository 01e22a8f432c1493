//! Archetype composers.
//!
//! Each composer assembles the same fixed skeleton (type block, imports,
//! connection setup, exported handler with method guard, per-method body,
//! error handler, trailing utilities) and differs only in the per-method
//! body it builds from Fragment Builder output.

mod auth;
mod crud;
mod download;
mod read;
mod upload;

use super::fragments::{indent, FragmentBuilder, SourceUnit};
use super::metadata::MetadataRegistry;
use super::request::GenerationRequest;

/// Structural shape of a generated handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Archetype {
    /// Four-branch enumerate/create/update/delete handler
    Crud,
    /// Single-POST credential verification
    Auth,
    /// Single-GET tracked artifact download
    Download,
    /// Single-POST multipart upload
    Upload,
    /// Single-GET enumeration
    Read,
}

impl Archetype {
    /// Selection precedence: `--crud` > `--auth` > resource `download` >
    /// resource `upload` / `--multipart` > plain read.
    pub fn select(req: &GenerationRequest) -> Archetype {
        if req.options.crud {
            Archetype::Crud
        } else if req.options.auth {
            Archetype::Auth
        } else if req.resource == "download" {
            Archetype::Download
        } else if req.resource == "upload" || req.options.multipart {
            Archetype::Upload
        } else {
            Archetype::Read
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Crud => "crud",
            Archetype::Auth => "auth",
            Archetype::Download => "download",
            Archetype::Upload => "upload",
            Archetype::Read => "read",
        }
    }

    /// Bracketed parameter name used when the route is dynamic
    pub fn dynamic_param(&self) -> &'static str {
        match self {
            Archetype::Download => "imageId",
            _ => "id",
        }
    }

    /// The download archetype is always addressed as
    /// `[slug]/download/[imageId]`, regardless of flags.
    pub fn forces_nested_dynamic(&self) -> bool {
        matches!(self, Archetype::Download)
    }

    /// Assemble one complete source unit for this shape
    pub fn compose(
        &self,
        fb: &FragmentBuilder,
        req: &GenerationRequest,
        metadata: &MetadataRegistry,
    ) -> SourceUnit {
        match self {
            Archetype::Crud => crud::compose(fb, req, metadata),
            Archetype::Auth => auth::compose(fb, req, metadata),
            Archetype::Download => download::compose(fb, req, metadata),
            Archetype::Upload => upload::compose(fb, req, metadata),
            Archetype::Read => read::compose(fb, req, metadata),
        }
    }
}

/// A success return, preceded by the direct-client release when the pattern
/// checks out a connection.
pub(super) fn respond(fb: &FragmentBuilder, line: &str) -> String {
    match fb.client_release() {
        Some(release) => format!("{release}\n{line}"),
        None => line.to_string(),
    }
}

/// One `if (req.method === ...)` branch
pub(super) fn method_branch(method: &str, inner: &str) -> String {
    format!("if (req.method === '{method}') {{\n{}\n}}", indent(inner, 2))
}
