use crate::events::AppEvent;
use async_channel::Sender;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use orbit::geometry::{CENTER_SIZE, ITEM_SIZE, Metrics, ORBIT_RADIUS};
use orbit::project::{self, Project};
use orbit::{NavConfig, NavConfigError, NavItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub location: String,
    pub links: Vec<ProfileLink>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Anto".to_string(),
            tagline: "Developer & Designer crafting digital experiences".to_string(),
            email: "hello@mrmcblob.com".to_string(),
            location: "Available Worldwide".to_string(),
            links: vec![
                ProfileLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/Mrmcblob".to_string(),
                },
                ProfileLink {
                    label: "Discord".to_string(),
                    url: "https://discord.com/users/970700037216665640".to_string(),
                },
            ],
        }
    }
}

fn default_radius() -> f64 {
    ORBIT_RADIUS
}

fn default_item_size() -> f64 {
    ITEM_SIZE
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_item_size")]
    pub item_size: f64,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default = "project::default_projects")]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub profile: Profile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            item_size: default_item_size(),
            nav: NavConfig::default(),
            projects: project::default_projects(),
            profile: Profile::default(),
        }
    }
}

impl Config {
    pub fn metrics(&self) -> Metrics {
        Metrics {
            radius: self.radius,
            item_size: self.item_size,
            center_size: CENTER_SIZE,
        }
    }

    pub fn build_items(&self) -> Result<NavItems, ConfigError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::InvalidMetric("radius", self.radius));
        }
        if !(self.item_size.is_finite() && self.item_size > 0.0) {
            return Err(ConfigError::InvalidMetric("item_size", self.item_size));
        }
        Ok(self.nav.build()?)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Navigation error: {0}")]
    Nav(#[from] NavConfigError),
    #[error("'{0}' must be a positive number, got {1}")]
    InvalidMetric(&'static str, f64),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("com", "mrmcblob", "folio").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Overrides come from `FOLIO_` variables, with `__` between nested keys:
/// `FOLIO_RADIUS`, `FOLIO_NAV__HOME`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("FOLIO")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(environment())
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_setup() -> Config {
    if let Ok(path) = get_config_path()
        && !path.exists()
    {
        match write_default_config() {
            Ok(path) => log::info!("Wrote default config to {}", path.display()),
            Err(e) => log::warn!("Could not write default config: {}", e),
        }
    }

    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

const RELOAD_DEBOUNCE: Duration = Duration::from_millis(150);

fn is_config_change(event: &notify::Event, config_path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let Some(config_dir) = config_path.parent().map(Path::to_path_buf) else {
        return;
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )
    .and_then(|mut w| w.watch(&config_dir, RecursiveMode::NonRecursive).map(|_| w));

    // kept alive for as long as the loop below runs
    let _watcher = match watcher {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to watch {}: {}", config_dir.display(), ConfigError::from(e));
            return;
        }
    };

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) if is_config_change(&event, &config_path) => {
                tokio::time::sleep(RELOAD_DEBOUNCE).await;
                while bridge_rx.try_recv().is_ok() {}

                log::debug!("Config file changed");
                if tx.send(AppEvent::ConfigReload).await.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
