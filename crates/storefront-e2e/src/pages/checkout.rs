//! Checkout page object.

use crate::driver::PageDriver;
use crate::error::Result;

const ROUTE: &str = "/checkout";

const FIRST_NAME_INPUT: &str = "input[name='first_name']";
const LAST_NAME_INPUT: &str = "input[name='last_name']";
const EMAIL_INPUT: &str = "input[name='email']";
const PHONE_INPUT: &str = "input[name='phone']";
const ADDRESS_INPUT: &str = "input[name='address']";
const CITY_INPUT: &str = "input[name='city']";
const STATE_INPUT: &str = "input[name='state']";
const ZIP_INPUT: &str = "input[name='zip']";
const COUNTRY_SELECT: &str = "select[name='country']";
const SHIPPING_METHOD_SELECT: &str = "select[name='shipping_method']";
const CARD_NUMBER_INPUT: &str = "input[name='card_number']";
const CARD_EXPIRY_INPUT: &str = "input[name='expiry']";
const CARD_CVV_INPUT: &str = "input[name='cvv']";
const PLACE_ORDER_BUTTON: &str = "button:has-text('Place Order')";
const BACK_TO_CART_BUTTON: &str = "button:has-text('Back to Cart')";
const ORDER_SUMMARY: &str = ".order-summary";
const ERROR_MESSAGE: &str = ".alert-danger";
const SUCCESS_MESSAGE: &str = ".alert-success";

/// Shipping form contents.
#[derive(Debug, Clone)]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl Default for ShippingAddress {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            country: "US".to_string(),
        }
    }
}

/// Payment form contents.
#[derive(Debug, Clone)]
pub struct PaymentCard {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

/// The `/checkout` page: shipping, shipping method, payment, and order
/// placement.
pub struct CheckoutPage {
    driver: PageDriver,
}

impl CheckoutPage {
    pub(crate) fn new(driver: PageDriver) -> Self {
        Self { driver }
    }

    /// Opens the checkout page and waits for network idle.
    pub async fn navigate(&self) -> Result<()> {
        self.driver.navigate(ROUTE).await
    }

    /// Fills every shipping field. No submission, no validation.
    pub async fn fill_shipping_address(&self, address: &ShippingAddress) -> Result<()> {
        self.driver.fill(FIRST_NAME_INPUT, &address.first_name).await?;
        self.driver.fill(LAST_NAME_INPUT, &address.last_name).await?;
        self.driver.fill(EMAIL_INPUT, &address.email).await?;
        self.driver.fill(PHONE_INPUT, &address.phone).await?;
        self.driver.fill(ADDRESS_INPUT, &address.address).await?;
        self.driver.fill(CITY_INPUT, &address.city).await?;
        self.driver.fill(STATE_INPUT, &address.state).await?;
        self.driver.fill(ZIP_INPUT, &address.zip).await?;
        self.driver.select_option(COUNTRY_SELECT, &address.country).await
    }

    /// Fills the payment fields. No submission, no validation.
    pub async fn fill_payment_info(&self, card: &PaymentCard) -> Result<()> {
        self.driver.fill(CARD_NUMBER_INPUT, &card.number).await?;
        self.driver.fill(CARD_EXPIRY_INPUT, &card.expiry).await?;
        self.driver.fill(CARD_CVV_INPUT, &card.cvv).await
    }

    /// Selects a shipping method by option value.
    pub async fn select_shipping_method(&self, method: &str) -> Result<()> {
        self.driver.select_option(SHIPPING_METHOD_SELECT, method).await
    }

    /// Submits the order and waits for the resulting navigation.
    pub async fn place_order(&self) -> Result<()> {
        self.driver.click(PLACE_ORDER_BUTTON).await?;
        self.driver.wait_for_navigation().await
    }

    /// Returns to the cart.
    pub async fn click_back_to_cart(&self) -> Result<()> {
        self.driver.click(BACK_TO_CART_BUTTON).await?;
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

    /// Whether the order summary panel is shown.
    pub async fn is_order_summary_visible(&self) -> Result<bool> {
        self.driver.is_visible(ORDER_SUMMARY).await
    }

    /// The fixed checkout pipeline: shipping, shipping method, payment,
    /// submit. No intermediate validation; the caller reads the
    /// resulting page state.
    pub async fn complete_checkout(
        &self,
        address: &ShippingAddress,
        card: &PaymentCard,
        shipping_method: &str,
    ) -> Result<()> {
        self.fill_shipping_address(address).await?;
        self.select_shipping_method(shipping_method).await?;
        self.fill_payment_info(card).await?;
        self.place_order().await
    }

    /// Current URL of the tab this page is bound to.
    pub fn url(&self) -> String {
        self.driver.url()
    }
}
