//! Product listing page object.

use crate::driver::{PageDriver, scoped};
use crate::error::Result;

const ROUTE: &str = "/products";

const SEARCH_INPUT: &str = "input[name='search']";
const SEARCH_BUTTON: &str = "button:has-text('Search')";
const PRODUCT_ITEMS: &str = ".product-item";
const PRODUCT_TITLE: &str = ".product-title";
const PRODUCT_PRICE: &str = ".product-price";
const PRODUCT_RATING: &str = ".product-rating";
const ADD_TO_CART_BUTTON: &str = "button:has-text('Add to Cart')";
const FILTER_CATEGORY: &str = "select[name='category']";
const FILTER_PRICE_MIN: &str = "input[name='price_min']";
const FILTER_PRICE_MAX: &str = "input[name='price_max']";
const APPLY_FILTER_BUTTON: &str = "button:has-text('Apply Filters')";
const SORT_DROPDOWN: &str = "select[name='sort']";
const NO_RESULTS_MESSAGE: &str = ".no-results";

/// The `/products` page: search, filters, sorting, and the listing
/// itself.
///
/// List-scoped queries look inside the first `.product-item` container
/// and report the empty string when either the container or the nested
/// node is absent.
pub struct ProductPage {
    driver: PageDriver,
}

impl ProductPage {
    pub(crate) fn new(driver: PageDriver) -> Self {
        Self { driver }
    }

    /// Opens the product listing and waits for network idle.
    pub async fn navigate(&self) -> Result<()> {
        self.driver.navigate(ROUTE).await
    }

    /// Searches the catalog by name. The empty string is a legal query.
    pub async fn search_product(&self, name: &str) -> Result<()> {
        self.driver.fill(SEARCH_INPUT, name).await?;
        self.driver.click(SEARCH_BUTTON).await?;
        self.driver.wait_for_navigation().await
    }

    /// Number of products currently listed.
    pub async fn product_count(&self) -> Result<usize> {
        self.driver.count(PRODUCT_ITEMS).await
    }

    async fn first_item_text(&self, inner: &str) -> Result<String> {
        let selector = scoped(PRODUCT_ITEMS, 0, inner);
        if self.driver.count(&selector).await? == 0 {
            return Ok(String::new());
        }
        self.driver.get_text(&selector).await
    }

    /// Title of the first listed product, or the empty string when the
    /// listing is empty.
    pub async fn first_product_title(&self) -> Result<String> {
        self.first_item_text(PRODUCT_TITLE).await
    }

    /// Price of the first listed product, or the empty string.
    pub async fn first_product_price(&self) -> Result<String> {
        self.first_item_text(PRODUCT_PRICE).await
    }

    /// Rating of the first listed product, or the empty string.
    pub async fn first_product_rating(&self) -> Result<String> {
        self.first_item_text(PRODUCT_RATING).await
    }

    /// Clicks the first listed product and waits for the details page.
    /// Silently does nothing when the listing is empty.
    pub async fn click_first_product(&self) -> Result<()> {
        if self.driver.count(PRODUCT_ITEMS).await? == 0 {
            return Ok(());
        }
        self.driver.click(PRODUCT_ITEMS).await?;
        self.driver.wait_for_navigation().await
    }

    /// Clicks the page-level "Add to Cart" control.
    ///
    /// The suite assumes exactly one instance is visible, the one for
    /// the first displayed product.
    pub async fn add_first_product_to_cart(&self) -> Result<()> {
        self.driver.click(ADD_TO_CART_BUTTON).await?;
        self.driver.wait_for_navigation().await
    }

    /// Applies a category filter.
    pub async fn filter_by_category(&self, category: &str) -> Result<()> {
        self.driver.select_option(FILTER_CATEGORY, category).await?;
        self.driver.click(APPLY_FILTER_BUTTON).await?;
        self.driver.wait_for_navigation().await
    }

    /// Applies a price range filter. Bounds are decimal strings.
    pub async fn filter_by_price_range(&self, min_price: &str, max_price: &str) -> Result<()> {
        self.driver.fill(FILTER_PRICE_MIN, min_price).await?;
        self.driver.fill(FILTER_PRICE_MAX, max_price).await?;
        self.driver.click(APPLY_FILTER_BUTTON).await?;
        self.driver.wait_for_navigation().await
    }

    /// Reorders the listing; the control submits on change.
    pub async fn sort_products(&self, sort_option: &str) -> Result<()> {
        self.driver.select_option(SORT_DROPDOWN, sort_option).await?;
        self.driver.wait_for_navigation().await
    }

    /// Whether the no-results marker is shown.
    pub async fn is_no_results_displayed(&self) -> Result<bool> {
        self.driver.is_visible(NO_RESULTS_MESSAGE).await
    }

    /// Current URL of the tab this page is bound to.
    pub fn url(&self) -> String {
        self.driver.url()
    }
}
