use log::info;
use sedir_states::State;
use serde::Deserialize;
use thiserror::Error;
use ustr::Ustr;

pub const DEFAULT_API_BASE_URL: &str = "https://api.stackexchange.com/2.3";
pub const DEFAULT_SITE: &str = "stackoverflow";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Upper bound enforced by the StackExchange API for `pagesize`.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment configuration: {0}")]
    Env(#[from] serde_env::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Base URL without trailing slash, e.g. `https://api.stackexchange.com/2.3`.
    pub api_base_url: String,
    /// StackExchange site parameter.
    pub site: Ustr,
    /// Optional app key, raises the daily request quota.
    pub api_key: Option<String>,
    page_size: u32,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into().trim_end_matches('/').to_owned(),
            ..Self::default()
        }
    }

    pub fn with_site(mut self, site: &str) -> Self {
        self.site = Ustr::from(site);
        self
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    /// Clamped to `1..=MAX_PAGE_SIZE`.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.api_base_url)
    }

    /// Defaults overlaid with `SEDIR_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawEnv = serde_env::from_iter(vars)?;
        Ok(raw.into_config())
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            site: Ustr::from(DEFAULT_SITE),
            api_key: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl State for BusinessConfig {}

#[derive(Debug, Default, Deserialize)]
struct RawEnv {
    sedir_api_base_url: Option<String>,
    sedir_site: Option<String>,
    sedir_api_key: Option<String>,
    stackexchange_api_key: Option<String>,
    sedir_page_size: Option<u32>,
}

impl RawEnv {
    fn into_config(self) -> BusinessConfig {
        let RawEnv {
            sedir_api_base_url,
            sedir_site,
            sedir_api_key,
            stackexchange_api_key,
            sedir_page_size,
        } = self;

        let mut config = match sedir_api_base_url {
            Some(url) => {
                info!("Using SEDIR_API_BASE_URL: {url}");
                BusinessConfig::new(url)
            }
            None => BusinessConfig::default(),
        };
        if let Some(site) = sedir_site {
            config = config.with_site(&site);
        }
        config = config.with_api_key(sedir_api_key.or(stackexchange_api_key));
        if let Some(page_size) = sedir_page_size {
            config = config.with_page_size(page_size);
        }
        config
    }
}
