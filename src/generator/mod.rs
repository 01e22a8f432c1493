//! # Generator Module
//!
//! The endpoint scaffolding generator: a small compiler-like pipeline that
//! turns a declarative request (area + resource + flags) into one or two
//! complete Next.js API route handler files.
//!
//! ## Pipeline
//!
//! ```text
//! CLI request → Pattern Registry → Archetype Composer → Fragment Builder
//!             → Path Resolver → Emission Gate → file(s) on disk
//! ```
//!
//! 1. **Pattern Registry** (`registry`) binds exactly one architectural
//!    pattern: `OrmBacked` (session check + Prisma-style queries) or
//!    `DirectClient` (credential check + parameterized `pg` client). An
//!    explicit override flag always wins; otherwise the area default.
//! 2. **Archetype Composers** (`archetypes`) assemble the handler shape:
//!    full CRUD, credential verification, tracked download, multipart
//!    upload, or plain read.
//! 3. **Fragment Builder** (`fragments`, `query`) produces the typed nodes a
//!    composer assembles: imports, connection setup, identity check, method
//!    guard, query operations, error handler, utilities. The direct-client
//!    dialect renders every value through a `$n` placeholder and a parallel
//!    argument array, never into the SQL string.
//! 4. **Path Resolver** (`paths`) derives `pages/api/...` output paths,
//!    including `[slug]` nesting, bracketed dynamic filenames, and the
//!    `-simple` counterpart suffix.
//! 5. **Emission Gate** (`emit`) refuses to clobber existing files unless
//!    `--force` is given.
//! 6. **Orchestrator** (`generate`) wires the steps together and, for the
//!    admin area without an override flag, also emits the counterpart file
//!    under the other pattern.
//!
//! ## Emitted structure
//!
//! ```text
//! pages/api/
//! ├── admin/
//! │   ├── galleries.ts            # ORM-backed (area default)
//! │   └── galleries-simple.ts     # direct-client counterpart
//! └── client/
//!     └── [slug]/
//!         └── download/
//!             └── [imageId].ts
//! ```

pub mod archetypes;
pub mod emit;
pub mod error;
pub mod fragments;
pub mod generate;
pub mod metadata;
pub mod paths;
pub mod query;
pub mod registry;
pub mod request;
pub mod templates;

pub use archetypes::Archetype;
pub use emit::{emit as emit_file, EmitOutcome, GeneratedFile};
pub use error::ScaffoldError;
pub use fragments::{Fragment, FragmentBuilder, ImportNeeds, SourceUnit};
pub use generate::{generate_endpoint, EmitReport};
pub use metadata::{MetadataRegistry, ResourceMeta};
pub use paths::{ALTERNATE_SUFFIX, HANDLER_ROOT};
pub use query::{Operation, QueryDialect};
pub use registry::{Pattern, PatternRegistry};
pub use request::{Area, GenOptions, GenerationRequest};
pub use templates::render_source_unit;
