// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use the_decorator::config::{load_and_validate_config, validate_config, Section, WalkthroughConfig};
use the_decorator::errors::ConfigError;
use the_decorator::observability::init_tracing;
use the_decorator::observability::messages::{
    config::{ConfigInvalid, ConfigLoaded},
    StructuredLog,
};
use the_decorator::walkthrough::Walkthrough;

#[derive(Parser, Debug)]
#[command(name = "the-decorator")]
#[command(version)]
#[command(about = "A guided tour of function decorators: counting, logging, failure interception and more", long_about = None)]
struct Cli {
    /// YAML walkthrough configuration (every field is optional)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run only this section; repeat to run several (overrides the config's list)
    #[arg(short, long = "section", value_name = "NAME")]
    sections: Vec<Section>,

    /// List the available sections and exit
    #[arg(long)]
    list_sections: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.list_sections {
        for section in Section::all() {
            println!("{:<12} {}", section.as_str(), section.title());
        }
        return ExitCode::SUCCESS;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => load(path)?,
        None => WalkthroughConfig::default(),
    };

    if !cli.sections.is_empty() {
        config.sections = cli.sections;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_tracing(&config.log_filter);
    if let Some(path) = &cli.config {
        ConfigLoaded {
            path: &path.display().to_string(),
            section_count: config.sections.len(),
        }
        .log();
    }

    println!("🎀 Introduction to decorators");
    println!("═════════════════════════════");

    let sink = config.output.sink();
    let mut walkthrough = Walkthrough::new(config, sink, io::stdout().lock());
    walkthrough.run().context("walkthrough failed")?;

    Ok(())
}

fn load(path: &Path) -> anyhow::Result<WalkthroughConfig> {
    load_and_validate_config(path).map_err(|e| {
        // Tracing is not installed yet; the subscriber's filter comes from this file.
        init_tracing("warn");
        ConfigInvalid {
            path: &path.display().to_string(),
            error: &e,
        }
        .log();
        anyhow::Error::new(e)
    })
}
