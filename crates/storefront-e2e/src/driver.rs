//! Primitive browser operations shared by every page object.
//!
//! [`PageDriver`] is the only layer that talks to the automation engine.
//! Page objects compose a driver value instead of subclassing anything,
//! so engine quirks and wait strategy live in exactly one place.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use playwright_rs::{GotoOptions, Locator, Page, WaitUntil, expect};
use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};

/// Ceiling for navigation and settle waits.
const NAVIGATION_BUDGET: Duration = Duration::from_secs(30);

/// Poll cadence inside settle loops.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Quiet window the document must hold `complete` before a navigation
/// counts as settled.
const SETTLE_QUIET: Duration = Duration::from_millis(250);

/// Composes a selector scoped to the `index`-th container match.
///
/// Locator strings stay static per page type; dynamic sub-selectors are
/// only ever built this way, using the engine's chaining syntax.
pub fn scoped(container: &str, index: usize, inner: &str) -> String {
    format!("{container} >> nth={index} >> {inner}")
}

/// Thin, uniform surface over one browser tab.
///
/// Cheap to clone; every clone addresses the same tab. Element-addressed
/// primitives resolve to the first match of their selector.
#[derive(Clone)]
pub struct PageDriver {
    page: Page,
    config: Arc<Config>,
}

impl PageDriver {
    pub(crate) fn new(page: Page, config: Arc<Config>) -> Self {
        Self { page, config }
    }

    /// The application root this driver navigates relative to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn first(&self, selector: &str) -> Locator {
        self.page.locator(selector).await.first()
    }

    /// Navigates to `base_url` + `path` and blocks until network idle.
    pub async fn navigate(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(%url, "navigate");
        let options = GotoOptions::new()
            .wait_until(WaitUntil::NetworkIdle)
            .timeout(NAVIGATION_BUDGET);
        self.page.goto(&url, Some(options)).await?;
        Ok(())
    }

    /// Fills the first element matching `selector` with `text`.
    pub async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        debug!(selector, "fill");
        self.first(selector).await.fill(text, None).await?;
        Ok(())
    }

    /// Clicks the first element matching `selector`.
    pub async fn click(&self, selector: &str) -> Result<()> {
        debug!(selector, "click");
        self.first(selector).await.click(None).await?;
        Ok(())
    }

    /// Trimmed text content of the first match, or the empty string when
    /// the node carries no text. Fails if the selector resolves to
    /// nothing within the engine timeout.
    pub async fn get_text(&self, selector: &str) -> Result<String> {
        let text = self.first(selector).await.text_content().await?;
        Ok(text.map(|t| t.trim().to_string()).unwrap_or_default())
    }

    /// Attribute value of the first match, or the empty string when the
    /// attribute is absent.
    pub async fn get_attribute(&self, selector: &str, name: &str) -> Result<String> {
        let value = self.first(selector).await.get_attribute(name).await?;
        Ok(value.unwrap_or_default())
    }

    /// Whether the first match is visible. Absent elements report
    /// `false`, never an error.
    pub async fn is_visible(&self, selector: &str) -> Result<bool> {
        Ok(self.first(selector).await.is_visible().await?)
    }

    /// Whether the first match is enabled. Absent elements report
    /// `false`, never an error.
    pub async fn is_enabled(&self, selector: &str) -> Result<bool> {
        let candidates = self.page.locator(selector).await;
        if candidates.count().await? == 0 {
            return Ok(false);
        }
        Ok(candidates.first().is_enabled().await?)
    }

    /// Number of elements matching `selector` right now.
    pub async fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.page.locator(selector).await.count().await?)
    }

    /// Blocks until `selector` is visible, up to `timeout` (default
    /// 5000 ms from [`Config::wait_budget`]).
    pub async fn wait_for_element(&self, selector: &str, timeout: Option<Duration>) -> Result<()> {
        let budget = timeout.unwrap_or(self.config.wait_budget);
        debug!(selector, budget_ms = budget.as_millis() as u64, "wait_for_element");
        let locator = self.page.locator(selector).await;
        expect(locator)
            .with_timeout(budget)
            .to_be_visible()
            .await
            .map_err(|err| match err {
                playwright_rs::Error::AssertionTimeout(_) => Error::WaitTimeout {
                    what: format!("element '{selector}'"),
                    budget_ms: budget.as_millis() as u64,
                },
                other => Error::Automation(other),
            })
    }

    /// Selects `value` on the first `<select>` matching `selector`.
    /// Fails when `value` is not one of the control's options.
    pub async fn select_option(&self, selector: &str, value: &str) -> Result<()> {
        debug!(selector, value, "select_option");
        let _ = self.first(selector).await.select_option(value, None).await?;
        Ok(())
    }

    /// Current URL of the tab.
    pub fn url(&self) -> String {
        self.page.url()
    }

    /// Current document title.
    pub async fn title(&self) -> Result<String> {
        Ok(self.page.title().await?)
    }

    /// Blocks until an in-flight navigation settles.
    ///
    /// The engine exposes no load-state wait, so this probes
    /// `document.readyState` until it holds `complete` across a short
    /// quiet window. Probe failures while the outgoing document is torn
    /// down count as "still navigating".
    pub async fn wait_for_navigation(&self) -> Result<()> {
        self.settle(NAVIGATION_BUDGET).await
    }

    async fn settle(&self, budget: Duration) -> Result<()> {
        let deadline = Instant::now() + budget;
        // Give a just-triggered navigation one beat to leave the old
        // document before the first probe.
        sleep(POLL_INTERVAL).await;
        loop {
            if self.document_complete().await {
                sleep(SETTLE_QUIET).await;
                if self.document_complete().await {
                    return Ok(());
                }
            }
            if Instant::now() >= deadline {
                return Err(Error::WaitTimeout {
                    what: "navigation to settle".to_string(),
                    budget_ms: budget.as_millis() as u64,
                });
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn document_complete(&self) -> bool {
        matches!(
            self.page.evaluate_value("document.readyState").await.as_deref(),
            Ok("complete")
        )
    }

    /// Writes a PNG of the current page to
    /// `<screenshot_dir>/<name>.png` and returns the path.
    pub async fn take_screenshot(&self, name: &str) -> Result<PathBuf> {
        let dir = &self.config.screenshot_dir;
        tokio::fs::create_dir_all(dir).await.map_err(|source| Error::Artifact {
            path: dir.display().to_string(),
            source,
        })?;
        let path = dir.join(format!("{name}.png"));
        debug!(path = %path.display(), "take_screenshot");
        self.page.screenshot_to_file(&path, None).await?;
        Ok(path)
    }

    /// Reloads the current page and blocks until network idle.
    pub async fn refresh(&self) -> Result<()> {
        debug!("refresh");
        let options = GotoOptions::new()
            .wait_until(WaitUntil::NetworkIdle)
            .timeout(NAVIGATION_BUDGET);
        self.page.reload(Some(options)).await?;
        Ok(())
    }

    /// Navigates one entry back in the tab history and settles.
    ///
    /// The engine has no dedicated back call; the history API stands in.
    /// With no history entry to return to this is a no-op, like the
    /// history API itself.
    pub async fn go_back(&self) -> Result<()> {
        debug!("go_back");
        let before = self.page.url();
        self.page.evaluate_expression("window.history.back()").await?;
        let deadline = Instant::now() + self.config.wait_budget;
        while self.page.url() == before && Instant::now() < deadline {
            sleep(POLL_INTERVAL).await;
        }
        self.settle(NAVIGATION_BUDGET).await
    }
}
