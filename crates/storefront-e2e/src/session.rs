//! Per-test automation session.
//!
//! Each test owns the full stack: engine process, headless browser,
//! browser context, one tab. Nothing is pooled or shared across tests;
//! isolation comes from relaunching, a deliberate speed-for-simplicity
//! trade.

use std::sync::Arc;

use playwright_rs::{
    Browser, BrowserContext, BrowserContextOptions, LaunchOptions, Page, Playwright,
};
use tracing::{debug, info};

use crate::config::Config;
use crate::driver::PageDriver;
use crate::error::Result;
use crate::pages::{CartPage, CheckoutPage, LoginPage, ProductPage};

/// How the session responds to native dialogs (alert/confirm/prompt).
///
/// Fixed at session construction; there is no per-call handler
/// registration anywhere in the harness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogPolicy {
    /// Accept every dialog as it appears.
    #[default]
    AutoAccept,
    /// Dismiss every dialog as it appears.
    AutoDismiss,
    /// Leave dialogs unhandled. An unhandled dialog blocks the tab, so
    /// this is only for tests that never trigger one.
    Manual,
}

/// One isolated browser session with page objects bound to its tab.
///
/// Lifecycle per test: engine started, browser launched, tab opened,
/// app reset to the root, test body, then [`Session::close`] tears the
/// stack down in reverse order.
pub struct Session {
    playwright: Playwright,
    browser: Browser,
    context: BrowserContext,
    page: Page,
    config: Arc<Config>,
}

impl Session {
    /// Launches a session with the default dialog policy.
    pub async fn launch(config: Config) -> Result<Self> {
        Self::launch_with(config, DialogPolicy::default()).await
    }

    /// Launches the engine, a browser, a context with the suite's fixed
    /// viewport/locale/timezone, and one tab wired to `policy`.
    pub async fn launch_with(config: Config, policy: DialogPolicy) -> Result<Self> {
        info!(base_url = %config.base_url, ?policy, "launching session");

        let playwright = Playwright::launch().await?;
        let browser = playwright
            .chromium()
            .launch_with_options(LaunchOptions::new().headless(config.headless))
            .await?;
        let options = BrowserContextOptions::builder()
            .viewport(config.viewport.clone())
            .locale(config.locale.clone())
            .timezone_id(config.timezone_id.clone())
            .build();
        let context = browser.new_context_with_options(options).await?;
        let page = context.new_page().await?;

        match policy {
            DialogPolicy::AutoAccept => {
                page.on_dialog(|dialog| async move { dialog.accept(None).await })
                    .await?;
            }
            DialogPolicy::AutoDismiss => {
                page.on_dialog(|dialog| async move { dialog.dismiss().await })
                    .await?;
            }
            DialogPolicy::Manual => {}
        }

        Ok(Self {
            playwright,
            browser,
            context,
            page,
            config: Arc::new(config),
        })
    }

    /// The configuration this session was launched with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A primitive driver bound to this session's tab.
    pub fn driver(&self) -> PageDriver {
        PageDriver::new(self.page.clone(), Arc::clone(&self.config))
    }

    /// Login page object bound to this session's tab.
    pub fn login_page(&self) -> LoginPage {
        LoginPage::new(self.driver())
    }

    /// Product listing page object bound to this session's tab.
    pub fn product_page(&self) -> ProductPage {
        ProductPage::new(self.driver())
    }

    /// Cart page object bound to this session's tab.
    pub fn cart_page(&self) -> CartPage {
        CartPage::new(self.driver())
    }

    /// Checkout page object bound to this session's tab.
    pub fn checkout_page(&self) -> CheckoutPage {
        CheckoutPage::new(self.driver())
    }

    /// Navigates to the application root and waits for network idle.
    ///
    /// Run before every test body so each test starts from the landing
    /// page no matter where the previous one ended.
    pub async fn reset(&self) -> Result<()> {
        debug!("reset to application root");
        self.driver().navigate("").await
    }

    /// Convenience flow for tests that need a signed-in user.
    pub async fn login_as(&self, email: &str, password: &str) -> Result<()> {
        let login = self.login_page();
        login.navigate().await?;
        login.login(email, password).await
    }

    /// Tears down tab, browser, and engine, in that order.
    pub async fn close(self) -> Result<()> {
        debug!("closing session");
        self.page.close().await?;
        self.context.close().await?;
        self.browser.close().await?;
        self.playwright.shutdown().await?;
        Ok(())
    }
}
