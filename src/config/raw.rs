use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("ecoleta.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub backend: Option<Backend>,
    pub geography: Option<Geography>,
    pub network: Option<Network>,
    pub bootstrap: Option<Bootstrap>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Backend {
    pub api_url: String,
}

impl Default for Backend {
    fn default() -> Self {
        Config::default().backend.expect("Backend configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geography {
    pub api_url: String,
}

impl Default for Geography {
    fn default() -> Self {
        Config::default().geography.expect("Geography configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Network {
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl Default for Network {
    fn default() -> Self {
        Config::default().network.expect("Network configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Bootstrap {
    pub position: Option<Position>,
}

#[derive(Clone, Copy, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}
