use thiserror::Error;

const DEFAULT_API_BASE: &str =
    "https://contabilidad-orquestador-production.up.railway.app/api/Contabilidad";

/// Base address of the orchestrator, fixed at build time.
/// `ORQUESTADOR_API_BASE=https://... trunk build` overrides the production address.
pub const API_BASE_URL: &str = match option_env!("ORQUESTADOR_API_BASE") {
    Some(url) => url,
    None => DEFAULT_API_BASE,
};

/// `en-US` or `es-BO`, also fixed at build time.
const LOCALE_TAG: Option<&str> = option_env!("ORQUESTADOR_LOCALE");

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("api base address is empty")]
    EmptyBase,
    #[error("api base address must start with http:// or https://, got {0}")]
    UnsupportedScheme(String),
    #[error("unsupported locale {0}")]
    UnknownLocale(String),
}

/// Number and date conventions used by the formatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locale {
    EnUs,
    EsBo,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Result<Self, ConfigError> {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" => Ok(Locale::EnUs),
            "es-bo" | "es" => Ok(Locale::EsBo),
            other => Err(ConfigError::UnknownLocale(other.to_string())),
        }
    }

    pub fn thousands_separator(self) -> char {
        match self {
            Locale::EnUs => ',',
            Locale::EsBo => '.',
        }
    }

    pub fn decimal_separator(self) -> char {
        match self {
            Locale::EnUs => '.',
            Locale::EsBo => ',',
        }
    }

    pub fn date_pattern(self) -> &'static str {
        match self {
            Locale::EnUs => "%-m/%-d/%Y",
            Locale::EsBo => "%d/%m/%Y",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    pub api_base: String,
    pub currency_prefix: String,
    pub locale: Locale,
}

impl DashboardConfig {
    pub fn new(api_base: &str) -> Result<Self, ConfigError> {
        let trimmed = api_base.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBase);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
        }

        Ok(Self {
            api_base: trimmed.to_string(),
            currency_prefix: "Bs.".to_string(),
            locale: Locale::EnUs,
        })
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Reads the build-time overrides, falling back to the defaults when
    /// one of them is malformed.
    pub fn from_build_env() -> Self {
        let config = match Self::new(API_BASE_URL) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring ORQUESTADOR_API_BASE: {}", err);
                Self::default()
            }
        };

        match LOCALE_TAG.map(Locale::from_tag) {
            Some(Ok(locale)) => config.with_locale(locale),
            Some(Err(err)) => {
                log::warn!("ignoring ORQUESTADOR_LOCALE: {}", err);
                config
            }
            None => config,
        }
    }

    pub fn resource_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            currency_prefix: "Bs.".to_string(),
            locale: Locale::EnUs,
        }
    }
}
