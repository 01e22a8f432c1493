#[cfg(test)]
mod tests;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::generator::{
    generate_endpoint, GenOptions, GenerationRequest, MetadataRegistry, PatternRegistry,
    HANDLER_ROOT,
};

#[derive(Parser)]
#[command(name = "darkroom-gen")]
#[command(about = "Darkroom endpoint scaffolding CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold one or two API route handler files for an area/resource
    Generate {
        /// Target area: admin or client
        area: String,

        /// Resource name, e.g. galleries or download
        resource: String,

        /// Generate a full-CRUD handler
        #[arg(long, default_value_t = false)]
        crud: bool,

        /// Generate a credential-verification handler
        #[arg(long, default_value_t = false)]
        auth: bool,

        /// Bind the direct-client pattern regardless of area default
        #[arg(long, default_value_t = false, conflicts_with = "force_orm_pattern")]
        force_simple_pattern: bool,

        /// Bind the ORM-backed pattern regardless of area default
        #[arg(long, default_value_t = false)]
        force_orm_pattern: bool,

        /// Generate a multipart-upload handler
        #[arg(long, default_value_t = false)]
        multipart: bool,

        /// Insert a [slug] segment before the resource segment
        #[arg(long, default_value_t = false)]
        nested: bool,

        /// Emit a bracketed dynamic-parameter filename
        #[arg(long, default_value_t = false)]
        dynamic: bool,

        /// Overwrite existing files
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

/// Parse the command line and run the generator.
///
/// # Errors
///
/// Returns an error for an invalid area, conflicting flags, or I/O failure;
/// per-file conflicts are reported on stdout and do not fail the run.
pub fn run_cli() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            area,
            resource,
            crud,
            auth,
            force_simple_pattern,
            force_orm_pattern,
            multipart,
            nested,
            dynamic,
            force,
        } => {
            let options = GenOptions {
                crud,
                auth,
                force_simple_pattern,
                force_orm_pattern,
                multipart,
                nested,
                dynamic,
                force,
            };
            let request = GenerationRequest::new(&area, &resource, options)?;
            let metadata = MetadataRegistry::embedded()?;
            let patterns = PatternRegistry::new();
            generate_endpoint(&request, &metadata, &patterns, Path::new(HANDLER_ROOT))?;
            println!(
                "ℹ️  Next steps: review the generated handler(s), wire them into the app, and adjust metadata/resources.json if the field lists have drifted."
            );
            Ok(())
        }
    }
}
