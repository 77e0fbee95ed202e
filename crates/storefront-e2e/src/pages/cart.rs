//! Shopping cart page object.

use crate::driver::{PageDriver, scoped};
use crate::error::Result;

const ROUTE: &str = "/cart";

const CART_ITEMS: &str = ".cart-item";
const ITEM_QUANTITY: &str = ".item-quantity";
const ITEM_PRICE: &str = ".item-price";
const QUANTITY_INPUT: &str = "input[name='quantity']";
const UPDATE_QUANTITY_BUTTON: &str = "button:has-text('Update')";
const REMOVE_BUTTON: &str = "button:has-text('Remove')";
const SUBTOTAL: &str = ".subtotal";
const TAX: &str = ".tax";
const TOTAL: &str = ".total";
const CHECKOUT_BUTTON: &str = "button:has-text('Proceed to Checkout')";
const CONTINUE_SHOPPING_BUTTON: &str = "button:has-text('Continue Shopping')";
const EMPTY_CART_MESSAGE: &str = ".empty-cart-message";

/// The `/cart` page: item rows with per-row quantity and remove
/// controls, plus totals.
///
/// Row operations address the Nth `.cart-item` container and are silent
/// no-ops when the row or its nested control is missing; absence is not
/// an error at this layer.
pub struct CartPage {
    driver: PageDriver,
}

impl CartPage {
    pub(crate) fn new(driver: PageDriver) -> Self {
        Self { driver }
    }

    /// Opens the cart and waits for network idle.
    pub async fn navigate(&self) -> Result<()> {
        self.driver.navigate(ROUTE).await
    }

    /// Number of rows currently in the cart.
    pub async fn cart_item_count(&self) -> Result<usize> {
        self.driver.count(CART_ITEMS).await
    }

    async fn text_or_empty(&self, selector: &str) -> Result<String> {
        if self.driver.count(selector).await? == 0 {
            return Ok(String::new());
        }
        self.driver.get_text(selector).await
    }

    /// Subtotal text, or the empty string when the cart shows none.
    pub async fn subtotal(&self) -> Result<String> {
        self.text_or_empty(SUBTOTAL).await
    }

    /// Tax text, or the empty string when the cart shows none.
    pub async fn tax(&self) -> Result<String> {
        self.text_or_empty(TAX).await
    }

    /// Total text, or the empty string when the cart shows none.
    pub async fn total(&self) -> Result<String> {
        self.text_or_empty(TOTAL).await
    }

    /// Price shown on the first row, or the empty string.
    pub async fn first_item_price(&self) -> Result<String> {
        self.text_or_empty(&scoped(CART_ITEMS, 0, ITEM_PRICE)).await
    }

    /// Quantity shown on the first row, or the empty string.
    pub async fn first_item_quantity(&self) -> Result<String> {
        self.text_or_empty(&scoped(CART_ITEMS, 0, ITEM_QUANTITY)).await
    }

    /// Removes the first row. No-op when the cart is empty.
    pub async fn remove_first_item(&self) -> Result<()> {
        let remove = scoped(CART_ITEMS, 0, REMOVE_BUTTON);
        if self.driver.count(&remove).await? == 0 {
            return Ok(());
        }
        self.driver.click(&remove).await?;
        self.driver.wait_for_navigation().await
    }

    /// Sets the quantity on the `item_index`-th row (0-based) and
    /// applies it. No-op when the row or either control is missing.
    pub async fn update_item_quantity(&self, item_index: usize, new_quantity: &str) -> Result<()> {
        if item_index >= self.cart_item_count().await? {
            return Ok(());
        }
        let quantity = scoped(CART_ITEMS, item_index, QUANTITY_INPUT);
        if self.driver.count(&quantity).await? == 0 {
            return Ok(());
        }
        self.driver.fill(&quantity, new_quantity).await?;
        let update = scoped(CART_ITEMS, item_index, UPDATE_QUANTITY_BUTTON);
        if self.driver.count(&update).await? == 0 {
            return Ok(());
        }
        self.driver.click(&update).await?;
        self.driver.wait_for_navigation().await
    }

    /// Whether the empty-cart marker is shown.
    pub async fn is_cart_empty(&self) -> Result<bool> {
        self.driver.is_visible(EMPTY_CART_MESSAGE).await
    }

    /// Proceeds to checkout.
    pub async fn click_checkout(&self) -> Result<()> {
        self.driver.click(CHECKOUT_BUTTON).await?;
        self.driver.wait_for_navigation().await
    }

    /// Returns to the product listing.
    pub async fn click_continue_shopping(&self) -> Result<()> {
        self.driver.click(CONTINUE_SHOPPING_BUTTON).await?;
        self.driver.wait_for_navigation().await
    }

    /// Current URL of the tab this page is bound to.
    pub fn url(&self) -> String {
        self.driver.url()
    }
}
