//! Login page object.

use crate::driver::PageDriver;
use crate::error::Result;

const ROUTE: &str = "/login";

const EMAIL_INPUT: &str = "input[name='email']";
const PASSWORD_INPUT: &str = "input[name='password']";
const LOGIN_BUTTON: &str = "button:has-text('Sign In')";
const REGISTER_LINK: &str = "a:has-text('Create Account')";
const FORGOT_PASSWORD_LINK: &str = "a:has-text('Forgot Password')";
const ERROR_MESSAGE: &str = ".alert-danger";
const SUCCESS_MESSAGE: &str = ".alert-success";

/// The `/login` page: credential form plus register and password-reset
/// links.
pub struct LoginPage {
    driver: PageDriver,
}

impl LoginPage {
    pub(crate) fn new(driver: PageDriver) -> Self {
        Self { driver }
    }

    /// Opens the login page and waits for network idle.
    pub async fn navigate(&self) -> Result<()> {
        self.driver.navigate(ROUTE).await
    }

    /// Fills both credential fields, submits, and waits for the
    /// resulting navigation to settle.
    ///
    /// Never decides whether the login worked; callers inspect the
    /// resulting URL or banner.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        self.driver.fill(EMAIL_INPUT, email).await?;
        self.driver.fill(PASSWORD_INPUT, password).await?;
        self.driver.click(LOGIN_BUTTON).await?;
        self.driver.wait_for_navigation().await
    }

    /// Error banner text, or the empty string when no banner is shown.
    pub async fn error_message(&self) -> Result<String> {
        if self.driver.is_visible(ERROR_MESSAGE).await? {
            return self.driver.get_text(ERROR_MESSAGE).await;
        }
        Ok(String::new())
    }

    /// Success banner text, or the empty string when no banner is shown.
    pub async fn success_message(&self) -> Result<String> {
        if self.driver.is_visible(SUCCESS_MESSAGE).await? {
            return self.driver.get_text(SUCCESS_MESSAGE).await;
        }
        Ok(String::new())
    }

    /// Follows the "Create Account" link.
    pub async fn click_register_link(&self) -> Result<()> {
        self.driver.click(REGISTER_LINK).await?;
        self.driver.wait_for_navigation().await
    }

    /// Follows the "Forgot Password" link.
    pub async fn click_forgot_password(&self) -> Result<()> {
        self.driver.click(FORGOT_PASSWORD_LINK).await?;
        self.driver.wait_for_navigation().await
    }

    pub async fn is_login_button_enabled(&self) -> Result<bool> {
        self.driver.is_enabled(LOGIN_BUTTON).await
    }

    pub async fn is_email_field_visible(&self) -> Result<bool> {
        self.driver.is_visible(EMAIL_INPUT).await
    }

    pub async fn is_password_field_visible(&self) -> Result<bool> {
        self.driver.is_visible(PASSWORD_INPUT).await
    }

    /// Current URL of the tab this page is bound to.
    pub fn url(&self) -> String {
        self.driver.url()
    }
}
