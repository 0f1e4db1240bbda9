use gateway_config::Config;

use crate::args::Args;

/// Loads the TOML configuration. No `--config` means defaults; a path that
/// cannot be read or parsed is a startup error.
pub(crate) fn load(args: &Args) -> anyhow::Result<Config> {
    match &args.config {
        Some(path) => Ok(Config::load(path)?),
        None => Ok(Config::default()),
    }
}
