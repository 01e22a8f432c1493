#![allow(clippy::unwrap_used, clippy::expect_used)]

use clap::Parser;

use super::{Cli, Commands};

#[test]
fn test_parse_generate_flags() {
    let cli = Cli::try_parse_from([
        "darkroom-gen",
        "generate",
        "admin",
        "galleries",
        "--crud",
        "--nested",
        "--force",
    ])
    .unwrap();
    match cli.command {
        Commands::Generate {
            area,
            resource,
            crud,
            nested,
            dynamic,
            force,
            ..
        } => {
            assert_eq!(area, "admin");
            assert_eq!(resource, "galleries");
            assert!(crud);
            assert!(nested);
            assert!(force);
            assert!(!dynamic);
        }
    }
}

#[test]
fn test_pattern_overrides_conflict_at_parse_time() {
    let result = Cli::try_parse_from([
        "darkroom-gen",
        "generate",
        "admin",
        "galleries",
        "--force-simple-pattern",
        "--force-orm-pattern",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_missing_positional_arguments_are_usage_errors() {
    assert!(Cli::try_parse_from(["darkroom-gen", "generate"]).is_err());
    assert!(Cli::try_parse_from(["darkroom-gen", "generate", "admin"]).is_err());
}
