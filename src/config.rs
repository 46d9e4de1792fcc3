use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// When set, the product list route sends `Cache-Control: public, max-age=N`.
    pub cache_max_age_secs: Option<u32>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading keys through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let cache_max_age_secs = match lookup("CACHE_MAX_AGE_SECS") {
            Some(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u32>()
                    .context("CACHE_MAX_AGE_SECS must be a non-negative number")?,
            ),
            _ => None,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            cache_max_age_secs,
        })
    }

    pub fn cache_control(&self) -> Option<String> {
        self.cache_max_age_secs
            .map(|secs| format!("public, max-age={}", secs))
    }
}
