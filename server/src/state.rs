use color_eyre::eyre::WrapErr;
use serde::Serialize;
use tracing::instrument;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
    pub port: u16,
}

impl AppConfig {
    #[instrument(name = "AppConfig::from_env")]
    pub fn from_env() -> crate::Result<Self> {
        Self::from_vars(
            std::env::var("APP_BASE_URL").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
        )
    }

    fn from_vars(base_url: Option<&str>, port: Option<&str>) -> crate::Result<Self> {
        let base_url = base_url.unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(base_url).wrap_err("Invalid APP_BASE_URL not parsable")?;

        let port = match port {
            Some(port) => port.parse::<u16>().wrap_err("Invalid PORT, must be a number")?,
            None => DEFAULT_PORT,
        };

        Ok(Self { base_url, port })
    }

    pub fn app_url(&self, path: &str) -> String {
        let mut url = self.base_url.clone();

        url.set_path(path);

        url.into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub git_commit: &'static str,
    pub rustc_version: &'static str,
}

impl VersionInfo {
    #[instrument(name = "VersionInfo::from_env")]
    pub fn from_env() -> Self {
        Self {
            git_commit: env!("VERGEN_GIT_SHA"),
            rustc_version: env!("VERGEN_RUSTC_SEMVER"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub app: AppConfig,
    pub versions: VersionInfo,
}

impl AppState {
    #[instrument(name = "AppState::from_env", err)]
    pub fn from_env() -> crate::Result<Self> {
        Ok(Self {
            app: AppConfig::from_env()?,
            versions: VersionInfo::from_env(),
        })
    }
}
