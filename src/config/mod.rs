use once_cell::sync::Lazy;

use crate::crawler::tgju;

/// Built-in settings. There is no config file and nothing is read from the
/// environment; every value here is fixed at compile time.
#[derive(Default, Debug, Clone)]
pub struct App {
    pub source: Source,
    pub transport: Transport,
    pub spinner: Spinner,
}

/// 報價來源頁面與請求標頭
#[derive(Debug, Clone)]
pub struct Source {
    pub url: String,
    /// Overall deadline for one fetch, covering send and body read.
    pub timeout_secs: u64,
    pub user_agent: &'static str,
    pub accept: &'static str,
    pub accept_language: &'static str,
}

impl Default for Source {
    fn default() -> Self {
        Source {
            url: format!("https://{}/", tgju::HOST),
            timeout_secs: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            accept_language: "fa-IR,fa;q=0.9,en-US;q=0.8,en;q=0.7",
        }
    }
}

/// Connection pool settings for the shared reqwest client.
#[derive(Debug, Clone)]
pub struct Transport {
    pub max_idle_per_host: usize,
    pub idle_timeout_secs: u64,
    /// reqwest has no separate TLS handshake timeout; the connect timeout covers both.
    pub connect_timeout_secs: u64,
}

impl Default for Transport {
    fn default() -> Self {
        Transport {
            max_idle_per_host: 10,
            idle_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Spinner {
    pub enabled: bool,
    pub interval_millis: u64,
}

impl Default for Spinner {
    fn default() -> Self {
        Spinner {
            enabled: true,
            interval_millis: 100,
        }
    }
}

pub static SETTINGS: Lazy<App> = Lazy::new(App::default);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let app = App::default();
        assert_eq!(app.source.url, "https://www.tgju.org/");
        assert_eq!(app.source.timeout_secs, 30);
        assert!(app.source.user_agent.starts_with("Mozilla/5.0"));
        assert!(app.source.accept_language.starts_with("fa-IR"));
        assert_eq!(app.transport.max_idle_per_host, 10);
        assert_eq!(app.transport.idle_timeout_secs, 30);
        assert_eq!(app.transport.connect_timeout_secs, 10);
        assert!(app.spinner.enabled);
        assert_eq!(app.spinner.interval_millis, 100);
    }

    #[test]
    fn test_settings_ignore_environment() {
        std::env::set_var("TOMAN_SOURCE_URL", "http://env-override.invalid/");
        assert_eq!(SETTINGS.source.url, "https://www.tgju.org/");
        std::env::remove_var("TOMAN_SOURCE_URL");
    }
}
