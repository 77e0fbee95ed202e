//! storefront-e2e: page-object end-to-end suite for the storefront web
//! application.
//!
//! The harness layers a Page Object Model over the `playwright-rs`
//! automation client. Tests never touch the client directly: a
//! [`Session`] owns the engine/browser/tab stack for exactly one test,
//! and page objects ([`LoginPage`], [`ProductPage`], [`CartPage`],
//! [`CheckoutPage`]) expose the application's user-facing actions over a
//! shared [`PageDriver`] primitive surface.
//!
//! # Example
//!
//! ```ignore
//! use storefront_e2e::{Config, Session};
//!
//! #[tokio::main]
//! async fn main() -> storefront_e2e::Result<()> {
//!     let session = Session::launch(Config::from_env()).await?;
//!     session.reset().await?;
//!
//!     let products = session.product_page();
//!     products.navigate().await?;
//!     products.search_product("Laptop").await?;
//!     assert!(products.product_count().await? > 0);
//!
//!     session.close().await
//! }
//! ```
//!
//! Test-selection categories (`smoke`, `regression`, `ui`, `slow`) are
//! encoded as test-name prefixes, so `cargo test smoke_` runs the smoke
//! subset. Browser-driving tests additionally gate on `STOREFRONT_E2E=1`
//! and print a `[SKIP]` line when the automation stack is unavailable.

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod pages;
pub mod session;

pub use config::Config;
pub use driver::PageDriver;
pub use error::{Error, Result};
pub use pages::{CartPage, CheckoutPage, LoginPage, PaymentCard, ProductPage, ShippingAddress};
pub use session::{DialogPolicy, Session};
