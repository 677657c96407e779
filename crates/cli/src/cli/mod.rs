use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "iconbake")]
#[command(about = "Compile an icon catalog into SVG assets and a search index")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Project root all layout paths are resolved against
	#[arg(long, short = 'r', value_name = "DIR", default_value = ".")]
	pub root: PathBuf,

	/// Layout configuration file (defaults to iconbake.toml in the root, if present)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Skip writing SVG assets; the index and settings are still built
	#[arg(long, visible_aliases = ["dev", "watch"])]
	pub skip_assets: bool,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,
}

impl Cli {
	/// Config file to load: the explicit one, or the default if it exists.
	pub fn config_path(&self) -> Option<PathBuf> {
		if let Some(path) = &self.config {
			return Some(path.clone());
		}
		let default = self.root.join(crate::config::DEFAULT_CONFIG_FILE);
		default.exists().then_some(default)
	}
}
