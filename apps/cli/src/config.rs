//! Layered form settings: defaults, then the `--config` file, then `GROK_*`
//! variables, then command-line flags.

use anyhow::{Context, ensure};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use grok_form::FormConfig;

use crate::cli::Cli;

const ENV_PREFIX: &str = "GROK_";
const ENV_KEYS: &[&str] = &["min_chars", "required_fields"];

pub fn load(cli: &Cli) -> anyhow::Result<FormConfig> {
    figment(cli)?
        .extract()
        .context("invalid form configuration")
}

fn figment(cli: &Cli) -> anyhow::Result<Figment> {
    let mut figment = Figment::from(Serialized::defaults(FormConfig::default()));

    if let Some(path) = &cli.config {
        ensure!(path.is_file(), "config file {} not found", path.display());
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS));

    if let Some(min_chars) = cli.min_chars {
        figment = figment.merge(Serialized::default("min_chars", min_chars));
    }

    Ok(figment)
}
