use crate::client::ConfiguredClient;
use feedbacksense_core::{Config, FeedbackStore};
use feedbacksense_store::{JsonFileStore, Paths, DATA_DIR_VAR};
use std::future::Future;
use std::path::PathBuf;

pub type AppStore = FeedbackStore<ConfiguredClient, JsonFileStore>;

/// Resolved config plus the directory holding persisted feedback
pub struct AppContext {
    pub config: Config,
    pub store_dir: PathBuf,
}

impl AppContext {
    pub fn load() -> anyhow::Result<Self> {
        let paths = Paths::new()?;
        let data_dir_from_env = std::env::var_os(DATA_DIR_VAR).is_some_and(|v| !v.is_empty());
        Self::load_from(&paths, data_dir_from_env)
    }

    /// Read `config.json` under `paths` and apply environment overrides.
    ///
    /// When the data directory came from the environment it wins over the
    /// `data_dir` config field.
    pub fn load_from(paths: &Paths, data_dir_from_env: bool) -> anyhow::Result<Self> {
        let mut config = Config::from_file(&paths.config_file())?;
        config.apply_env();
        if data_dir_from_env {
            config.data_dir = None;
        }

        let store_dir = paths.store_dir(config.data_dir.as_deref());
        tracing::debug!(
            store_dir = %store_dir.display(),
            model = %config.model,
            has_api_key = config.has_api_key(),
            "loaded config"
        );
        Ok(Self { config, store_dir })
    }

    pub fn open_store(&self) -> AppStore {
        let client = ConfiguredClient::from_config(&self.config);
        if !client.is_configured() {
            tracing::debug!("no API key set; model calls will fail");
        }
        FeedbackStore::open(client, JsonFileStore::new(&self.store_dir))
            .with_min_report_items(self.config.report_threshold())
    }
}

/// Drive a store future to completion on a single-threaded runtime
pub fn block_on<F: Future>(future: F) -> anyhow::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}
