//! iconbake binary.
//!
//! Runs the full compilation pipeline once against a project root:
//! merge the catalogs, compile every glyph, rebuild the search index
//! and emit the settings documents.

mod cli;
mod config;

use anyhow::Context;
use clap::Parser;
use iconbake_compile::BuildCtx;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::Config;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let config = match cli.config_path() {
		Some(path) => {
			debug!(path = %path.display(), "loading configuration");
			Config::load(&path)?
		}
		None => Config::default(),
	};

	let ctx = BuildCtx::new(&cli.root)
		.layout(config.layout)
		.write_assets(!cli.skip_assets);

	info!(root = %ctx.root.display(), assets = ctx.write_assets, "starting build");

	let report = iconbake_compile::run(&ctx)
		.with_context(|| format!("build failed in {}", ctx.root.display()))?;

	println!(
		"{} glyphs, {} icons, version {}, {} styles",
		report.glyphs,
		report.icons,
		report.version,
		report.styles.len()
	);
	println!("index: {}", report.database.display());

	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("iconbake=debug,info")
		} else {
			EnvFilter::new("info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
