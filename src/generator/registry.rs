use super::query::QueryDialect;
use super::request::{Area, GenOptions};

/// Architectural convention bound to one generated file
///
/// A request always binds exactly one pattern; fragments from the two
/// patterns are never mixed within a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Session identity check + Prisma-style ORM query layer
    OrmBacked,
    /// Credential-comparison check + parameterized `pg` client
    DirectClient,
}

impl Pattern {
    /// Short name used in console output
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::OrmBacked => "orm",
            Pattern::DirectClient => "simple",
        }
    }

    /// The other pattern
    pub fn counterpart(&self) -> Pattern {
        match self {
            Pattern::OrmBacked => Pattern::DirectClient,
            Pattern::DirectClient => Pattern::OrmBacked,
        }
    }

    /// Query dialect this pattern renders operations in
    pub fn dialect(&self) -> QueryDialect {
        match self {
            Pattern::OrmBacked => QueryDialect::OrmCall,
            Pattern::DirectClient => QueryDialect::ParameterizedSql,
        }
    }

    /// Ordered import lines required by the pattern
    ///
    /// Identity-check imports are only included when the composed handler
    /// actually emits the identity check; the direct-client check compares
    /// a header against an environment variable and needs no import.
    pub fn required_imports(&self, with_identity: bool) -> Vec<&'static str> {
        match self {
            Pattern::OrmBacked => {
                let mut lines = vec!["import { PrismaClient } from '@prisma/client';"];
                if with_identity {
                    lines.push("import { getServerSession } from 'next-auth/next';");
                    lines.push("import { authOptions } from '@/lib/auth';");
                }
                lines
            }
            Pattern::DirectClient => vec!["import { Pool } from 'pg';"],
        }
    }

    /// Connection bootstrap, emitted verbatim at module scope
    pub fn connection_setup(&self) -> &'static str {
        match self {
            Pattern::OrmBacked => "const prisma = new PrismaClient();",
            Pattern::DirectClient => {
                "const pool = new Pool({ connectionString: process.env.DATABASE_URL });"
            }
        }
    }

    /// Identity-check block, emitted at the top of the handler body
    pub fn identity_check(&self) -> &'static str {
        match self {
            Pattern::OrmBacked => {
                "const session = await getServerSession(req, res, authOptions);\n\
                 if (!session) {\n\
                 \x20 return res.status(401).json({ error: 'Unauthorized' });\n\
                 }"
            }
            Pattern::DirectClient => {
                "if (req.headers['x-admin-token'] !== process.env.ADMIN_TOKEN) {\n\
                 \x20 return res.status(401).json({ error: 'Unauthorized' });\n\
                 }"
            }
        }
    }
}

/// Static area → default-pattern table
///
/// Constructed once per invocation and passed explicitly into the
/// orchestrator; it carries no mutable state.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternRegistry;

impl PatternRegistry {
    pub fn new() -> Self {
        PatternRegistry
    }

    /// Registered default pattern for an area
    pub fn default_for(&self, area: Area) -> Pattern {
        match area {
            Area::Admin => Pattern::OrmBacked,
            Area::Client => Pattern::DirectClient,
        }
    }

    /// Bind a pattern: an explicit override flag always wins, otherwise the
    /// area default applies.
    pub fn resolve(&self, area: Area, options: &GenOptions) -> Pattern {
        let pattern = if options.force_orm_pattern {
            Pattern::OrmBacked
        } else if options.force_simple_pattern {
            Pattern::DirectClient
        } else {
            self.default_for(area)
        };
        tracing::debug!(area = %area, pattern = pattern.name(), "resolved pattern");
        pattern
    }
}
