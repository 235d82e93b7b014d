//! sitedef - configuration resolver for the MCP Hub documentation site.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use sitedef::{
    cli::{Cli, Commands},
    debug,
    env::BuildEnv,
    log, logger, site,
    version::{GitTags, TagSource},
};
use std::{fs, path::Path};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Resolve {
            output,
            pretty,
            repo,
        } => resolve(cli.env(), output.as_deref(), *pretty, repo.as_deref()),
        Commands::Check => check(),
    }
}

// =============================================================================
// Resolve Command
// =============================================================================

/// Resolve the record and emit it to stdout or a file.
fn resolve(env: BuildEnv, output: Option<&Path>, pretty: bool, repo: Option<&Path>) -> Result<()> {
    debug!("resolve"; "environment: {env:?}");

    let tags = match repo {
        Some(dir) => GitTags::at(dir),
        None => GitTags::new(),
    };
    let config = site::resolve(env, &tags)?;
    let json = config.to_json(pretty)?;

    match output {
        Some(path) => {
            fs::write(path, &json)?;
            log!("resolve"; "wrote {} ({} head entries)", path.display(), config.head.len());
        }
        None => println!("{json}"),
    }
    Ok(())
}

// =============================================================================
// Check Command
// =============================================================================

/// Run structural validation without emitting the record.
fn check() -> Result<()> {
    // Structural checks only: development mode never consults tags.
    struct NoTags;
    impl TagSource for NoTags {
        fn latest_tag(&self) -> Result<String> {
            anyhow::bail!("tag lookup disabled")
        }
    }

    let config = site::resolve(BuildEnv::Development, &NoTags)?;
    log!(
        "check";
        "configuration ok ({} sidebar entries, {} social links)",
        config.theme.sidebar.len(),
        config.theme.social_links.len()
    );
    Ok(())
}
