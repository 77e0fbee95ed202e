//! Harness configuration.
//!
//! One [`Config`] value is constructed at test start (usually via
//! [`Config::from_env`]) and handed to the session layer by value.
//! Nothing in the harness reads the environment after that point.

use std::path::PathBuf;
use std::time::Duration;

use playwright_rs::Viewport;

/// Environment variable naming the application root URL.
pub const BASE_URL_ENV: &str = "STOREFRONT_BASE_URL";

/// Environment variable toggling headful runs (`0` or `false` disables
/// headless mode for local debugging).
pub const HEADLESS_ENV: &str = "STOREFRONT_HEADLESS";

/// Environment variable overriding the screenshot artifact directory.
pub const SCREENSHOT_DIR_ENV: &str = "STOREFRONT_SCREENSHOT_DIR";

/// Placeholder host used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://demo.ecommerce.local";

/// Default budget for explicit element waits.
pub const DEFAULT_WAIT_BUDGET: Duration = Duration::from_millis(5000);

/// Browser context settings fixed across the whole suite.
const VIEWPORT_WIDTH: u32 = 1280;
const VIEWPORT_HEIGHT: u32 = 720;
const LOCALE: &str = "en-US";
const TIMEZONE_ID: &str = "America/New_York";

/// Suite configuration, passed by value into [`crate::Session`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Application root URL, without a trailing slash.
    pub base_url: String,
    /// Whether the browser launches headless.
    pub headless: bool,
    /// Fixed viewport applied to the browser context.
    pub viewport: Viewport,
    /// Fixed locale applied to the browser context.
    pub locale: String,
    /// Fixed timezone applied to the browser context.
    pub timezone_id: String,
    /// Directory screenshot artifacts are written into.
    pub screenshot_dir: PathBuf,
    /// Budget for explicit element waits.
    pub wait_budget: Duration,
}

impl Config {
    /// Creates a configuration for the given application root.
    ///
    /// A trailing slash on `base_url` is stripped so route suffixes can
    /// be appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            headless: true,
            viewport: Viewport {
                width: VIEWPORT_WIDTH,
                height: VIEWPORT_HEIGHT,
            },
            locale: LOCALE.to_string(),
            timezone_id: TIMEZONE_ID.to_string(),
            screenshot_dir: PathBuf::from("screenshots"),
            wait_budget: DEFAULT_WAIT_BUDGET,
        }
    }

    /// Reads the configuration from the environment.
    ///
    /// Falls back to [`DEFAULT_BASE_URL`] when `STOREFRONT_BASE_URL` is
    /// unset, mirroring how the suite behaves on a fresh checkout.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(base_url);
        if let Ok(value) = std::env::var(HEADLESS_ENV) {
            config.headless = !matches!(value.as_str(), "0" | "false" | "no");
        }
        if let Ok(dir) = std::env::var(SCREENSHOT_DIR_ENV) {
            config.screenshot_dir = PathBuf::from(dir);
        }
        config
    }
}
