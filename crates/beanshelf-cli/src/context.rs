use crate::args::Cli;
use anyhow::{Context, Result};
use beanshelf_providers::{BundledDataset, HttpTransport, SourceFetcher};
use beanshelf_runtime::{Config, resolve_workspace_path};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Per-invocation settings resolved from flags, env and config.toml.
pub struct ExecutionContext {
    data_dir: PathBuf,
    primary_url: Option<String>,
    secondary_url: Option<String>,
    timeout_ms: Option<u64>,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(cli: &Cli) -> Result<Self> {
        let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
        Ok(Self {
            data_dir,
            primary_url: cli.primary_url.clone(),
            secondary_url: cli.secondary_url.clone(),
            timeout_ms: cli.timeout_ms,
            config: OnceCell::new(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    /// config.toml (or defaults) with command-line overrides applied.
    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let path = self.config_path();
            let config = Config::load_from(&path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            Ok(config.with_overrides(
                self.primary_url.clone(),
                self.secondary_url.clone(),
                self.timeout_ms,
            )?)
        })
    }

    pub fn fetcher(&self) -> Result<SourceFetcher<HttpTransport>> {
        let endpoints = self.config()?.endpoints();
        let transport = HttpTransport::new(endpoints.timeout)?;
        Ok(SourceFetcher::new(
            transport,
            endpoints,
            BundledDataset::builtin(),
        ))
    }
}
