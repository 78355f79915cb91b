//! # django-rs-bootstrap5 showcase
//!
//! Renders one of the demo pages to stdout:
//!
//! ```bash
//! cargo run --package bootstrap5-showcase -- --page form --layout horizontal --submitted
//! cargo run --package bootstrap5-showcase -- --page pagination --settings bootstrap5.toml
//! ```
//!
//! Settings come from `--settings` (TOML or JSON) when given, otherwise from
//! the defaults plus `BOOTSTRAP5_*` environment variables.

mod pages;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use django_rs_bootstrap5::core::logging::setup_logging;
use django_rs_bootstrap5::prelude::*;

use pages::DemoPage;

#[derive(Debug, Parser)]
#[command(name = "showcase", version, about = "Render django-rs-bootstrap5 demo pages")]
struct Cli {
    /// The page to render.
    #[arg(long, value_enum, default_value = "form")]
    page: DemoPage,

    /// Form layout: default, horizontal, inline or floating.
    #[arg(long, default_value = "default")]
    layout: String,

    /// Settings file (TOML, or JSON by extension).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Render the form as a failed submission.
    #[arg(long)]
    submitted: bool,

    /// Log filter, e.g. `debug` or `bootstrap5=trace`.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Human-readable logs instead of JSON.
    #[arg(long)]
    debug: bool,
}

fn run(cli: &Cli) -> BootstrapResult<String> {
    Layout::parse(&cli.layout)?;
    let bootstrap = django_rs_bootstrap5::setup(cli.settings.as_deref())?;
    let mut tera = bootstrap5_tera(bootstrap)?;
    pages::add_templates(&mut tera)?;
    let context = pages::context(cli.page, &cli.layout, cli.submitted)?;
    tracing::info!(page = ?cli.page, layout = %cli.layout, "rendering showcase page");
    tera.render(cli.page.template_name(), &context)
        .map_err(|err| BootstrapError::TemplateError(error_chain(&err)))
}

/// Tera nests the cause of a render failure; flatten it for display.
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(&cli.log_level, cli.debug);

    match run(&cli) {
        Ok(html) => {
            println!("{html}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "showcase failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
