use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// File storage configuration
///
/// Thumbnails are written under the public static root; the stored
/// reference paths are relative to it.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub public_dir: String,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self {
            public_dir: env_or_default("PUBLIC_DIR", "public"),
        }
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let storage = StorageConfig::from_env();

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            storage,
            environment,
        })
    }
}
