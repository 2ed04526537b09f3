use anyhow::{anyhow, Result};
use ecoleta_core::entities::Coordinate;
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "ecoleta.toml";

const ENV_NAME_API_URL: &str = "ECOLETA_API_URL";
const ENV_NAME_GEOGRAPHY_URL: &str = "ECOLETA_GEOGRAPHY_URL";

#[derive(Debug)]
pub struct Config {
    pub backend: Backend,
    pub geography: Geography,
    pub network: Network,
    pub bootstrap: Bootstrap,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.override_with(|name| env::var(name).ok());
        Ok(cfg)
    }

    fn override_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_NAME_API_URL) {
            log::debug!("Use backend API from {ENV_NAME_API_URL}");
            self.backend.api_url = normalize_url(url);
        }
        if let Some(url) = lookup(ENV_NAME_GEOGRAPHY_URL) {
            log::debug!("Use geography API from {ENV_NAME_GEOGRAPHY_URL}");
            self.geography.api_url = normalize_url(url);
        }
    }
}

#[derive(Debug)]
pub struct Backend {
    pub api_url: String,
}

#[derive(Debug)]
pub struct Geography {
    pub api_url: String,
}

#[derive(Debug)]
pub struct Network {
    /// Upper bound of every request.
    pub timeout: Duration,
}

#[derive(Debug)]
pub struct Bootstrap {
    /// Stands in for the device position.
    pub position: Option<Coordinate>,
}

fn normalize_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            backend,
            geography,
            network,
            bootstrap,
        } = from;

        let raw::Backend { api_url } = backend.unwrap_or_default();
        if api_url.trim().is_empty() {
            return Err(anyhow!("No backend API URL defined"));
        }
        let backend = Backend {
            api_url: normalize_url(api_url),
        };

        let raw::Geography { api_url } = geography.unwrap_or_default();
        if api_url.trim().is_empty() {
            return Err(anyhow!("No geography API URL defined"));
        }
        let geography = Geography {
            api_url: normalize_url(api_url),
        };

        let raw::Network { timeout } = network.unwrap_or_default();
        if timeout.is_zero() {
            return Err(anyhow!("The network timeout must not be zero"));
        }
        let network = Network { timeout };

        let raw::Bootstrap { position } = bootstrap.unwrap_or_default();
        let position = position
            .map(|raw::Position { lat, lng }| {
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
                    return Err(anyhow!("Invalid bootstrap position ({lat},{lng})"));
                }
                Ok(Coordinate::new(lat, lng))
            })
            .transpose()?;
        let bootstrap = Bootstrap { position };

        Ok(Self {
            backend,
            geography,
            network,
            bootstrap,
        })
    }
}
