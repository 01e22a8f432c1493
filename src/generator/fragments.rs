//! Typed fragment nodes and the per-pattern fragment builder.
//!
//! Composers assemble a `SourceUnit` from fragment nodes; the serializer in
//! `templates` lays the buckets out in a fixed structural order. Keeping
//! fragments as typed values rather than pre-concatenated strings lets the
//! archetype composers be tested without string-matching whole files.

use super::metadata::{ts_field_type, ResourceMeta};
use super::query::{render_query, Operation, QueryDialect};
use super::registry::Pattern;

/// One node of a composed source unit
#[derive(Debug, Clone)]
pub enum Fragment {
    /// A single import line
    Import(String),
    /// TypeScript interface block for the primary entity
    TypeBlock(String),
    /// Next.js route config export (e.g. disabling the body parser)
    ConfigBlock(String),
    /// Module-scope connection bootstrap
    ConnectionSetup(String),
    /// The exported handler function
    Handler(HandlerFragment),
    /// Trailing utility function
    Utility(String),
}

/// The exported handler function, in fixed structural order
#[derive(Debug, Clone)]
pub struct HandlerFragment {
    /// Identity-check block, when the archetype guards access up front
    pub identity_check: Option<String>,
    /// HTTP-method dispatch guard
    pub method_guard: String,
    /// Lines emitted between the guard and the try block (direct-client
    /// connection checkout)
    pub prologue: Option<String>,
    /// Per-method body inside the try block
    pub body: String,
    /// Catch block contents
    pub error_handler: String,
}

impl HandlerFragment {
    /// Render the complete exported function
    pub fn render(&self) -> String {
        let mut out = String::from(
            "export default async function handler(req: NextApiRequest, res: NextApiResponse) {\n",
        );
        if let Some(check) = &self.identity_check {
            out.push_str(&indent(check, 2));
            out.push_str("\n\n");
        }
        out.push_str(&indent(&self.method_guard, 2));
        out.push('\n');
        if let Some(prologue) = &self.prologue {
            out.push('\n');
            out.push_str(&indent(prologue, 2));
            out.push('\n');
        }
        out.push_str("\n  try {\n");
        out.push_str(&indent(&self.body, 4));
        out.push('\n');
        out.push_str("  } catch (err) {\n");
        out.push_str(&indent(&self.error_handler, 4));
        out.push('\n');
        out.push_str("  }\n}");
        out
    }
}

/// Ordered fragment list for one generated file
#[derive(Debug, Clone, Default)]
pub struct SourceUnit {
    pub fragments: Vec<Fragment>,
}

impl SourceUnit {
    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }
}

/// Conditional-import switches beyond the pattern's required set
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportNeeds {
    /// Emit the identity-check block (pulls session imports for ORM)
    pub identity: bool,
    /// Credential comparison (`bcryptjs`)
    pub credential: bool,
    /// Multipart parsing (`formidable`)
    pub multipart: bool,
    /// Filesystem/storage access (`path`, `fs`)
    pub storage: bool,
}

/// Pure, deterministic fragment factory for one bound pattern
#[derive(Debug, Clone, Copy)]
pub struct FragmentBuilder {
    pattern: Pattern,
}

impl FragmentBuilder {
    pub fn new(pattern: Pattern) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn dialect(&self) -> QueryDialect {
        self.pattern.dialect()
    }

    /// Base handler-signature imports plus pattern and flag-conditional ones
    pub fn imports(&self, needs: &ImportNeeds) -> Vec<Fragment> {
        let mut lines: Vec<String> =
            vec!["import type { NextApiRequest, NextApiResponse } from 'next';".to_string()];
        for line in self.pattern.required_imports(needs.identity) {
            lines.push(line.to_string());
        }
        if needs.credential {
            lines.push("import { compare } from 'bcryptjs';".to_string());
        }
        if needs.multipart {
            lines.push("import formidable from 'formidable';".to_string());
        }
        if needs.multipart || needs.storage {
            lines.push("import path from 'path';".to_string());
            lines.push("import fs from 'fs';".to_string());
        }
        lines.into_iter().map(Fragment::Import).collect()
    }

    /// Pattern's connection bootstrap, verbatim
    pub fn connection_setup(&self) -> Fragment {
        Fragment::ConnectionSetup(self.pattern.connection_setup().to_string())
    }

    /// Pattern's identity-check block
    pub fn identity_check(&self) -> String {
        self.pattern.identity_check().to_string()
    }

    /// Method dispatch guard: equality check for one verb, membership check
    /// for several; anything else is answered 405 with an `Allow` header.
    pub fn method_guard(&self, methods: &[&str]) -> String {
        let allow = methods
            .iter()
            .map(|m| format!("'{m}'"))
            .collect::<Vec<_>>()
            .join(", ");
        let condition = if methods.len() == 1 {
            format!("req.method !== '{}'", methods[0])
        } else {
            format!("![{allow}].includes(req.method || '')")
        };
        format!(
            "if ({condition}) {{\n  res.setHeader('Allow', [{allow}]);\n  return res.status(405).json({{ error: 'Method not allowed' }});\n}}"
        )
    }

    /// Direct-client connection checkout, emitted before the try block
    pub fn client_acquire(&self) -> Option<String> {
        match self.pattern {
            Pattern::OrmBacked => None,
            Pattern::DirectClient => Some("const client = await pool.connect();".to_string()),
        }
    }

    /// Direct-client release line for success paths
    pub fn client_release(&self) -> Option<&'static str> {
        match self.pattern {
            Pattern::OrmBacked => None,
            Pattern::DirectClient => Some("client.release();"),
        }
    }

    /// Uniform catch block: log, pattern-specific cleanup, generic 500.
    /// Internal error detail never reaches the response body.
    pub fn error_handler(&self, resource: &str) -> String {
        let mut out = format!("console.error('{resource} handler error:', err);\n");
        if let Some(release) = self.client_release() {
            out.push_str(release);
            out.push('\n');
        }
        out.push_str("return res.status(500).json({ error: 'Internal server error' });");
        out
    }

    /// Render an operation in this pattern's dialect
    pub fn query_operation(&self, op: &Operation) -> String {
        render_query(self.dialect(), op)
    }

    /// TypeScript interface for the primary entity
    pub fn type_block(&self, meta: &ResourceMeta) -> Fragment {
        let mut out = format!("interface {} {{\n  id: string;\n", meta.type_name());
        for field in &meta.fields {
            out.push_str(&format!("  {}: {};\n", field, ts_field_type(field)));
        }
        out.push('}');
        Fragment::TypeBlock(out)
    }

    /// Identifier generator; only the direct-client dialect needs one since
    /// the ORM layer supplies id defaults.
    pub fn id_generator(&self) -> Option<Fragment> {
        match self.pattern {
            Pattern::OrmBacked => None,
            Pattern::DirectClient => Some(Fragment::Utility(
                "function generateId(): string {\n  return Date.now().toString(36) + Math.random().toString(36).slice(2, 10);\n}"
                    .to_string(),
            )),
        }
    }

    /// Client network-address extractor for download/upload tracking
    pub fn client_address_util(&self) -> Fragment {
        Fragment::Utility(
            "function getClientAddress(req: NextApiRequest): string {\n  const forwarded = req.headers['x-forwarded-for'];\n  if (typeof forwarded === 'string') {\n    return forwarded.split(',')[0].trim();\n  }\n  return req.socket.remoteAddress || 'unknown';\n}"
                .to_string(),
        )
    }
}

/// Indent every non-empty line by `spaces`
pub fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
