//! # darkroom-scaffold
//!
//! Endpoint scaffolding generator for the Darkroom photography-portfolio
//! app. Given a declarative request (a target area, a resource name, and a
//! set of flags) it emits one or two complete Next.js API route handler
//! files, each internally consistent with one of the two architectural
//! conventions used across the portfolio codebase:
//!
//! - **ORM-backed**: next-auth session identity check + Prisma query layer
//! - **Direct-client**: credential-comparison check + parameterized `pg`
//!   client (`$1, $2, …` placeholders, values only ever in the argument
//!   array)
//!
//! ## Modules
//!
//! - **[`generator`]** - the whole pipeline: pattern registry, fragment
//!   builder, archetype composers, path resolver, emission gate,
//!   orchestrator
//! - **[`cli`]** - the `darkroom-gen generate` command surface
//!
//! ## Usage
//!
//! ```bash
//! darkroom-gen generate admin galleries --crud
//! darkroom-gen generate client download
//! darkroom-gen generate client access --auth
//! ```
//!
//! The admin area dual-generates: absent an explicit pattern-override flag,
//! every admin request also produces the counterpart file under the other
//! pattern with a `-simple` filename suffix, so both conventions stay
//! available side by side.
//!
//! Execution is single-threaded and synchronous: one process, one
//! invocation, no state carried across runs beyond the files on disk.

pub mod cli;
pub mod generator;

pub use generator::{
    generate_endpoint, Archetype, Area, EmitReport, GenOptions, GenerationRequest,
    MetadataRegistry, Pattern, PatternRegistry, ScaffoldError,
};
