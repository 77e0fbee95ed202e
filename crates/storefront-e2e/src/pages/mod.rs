//! Page objects for the storefront routes.
//!
//! Each page type composes a [`crate::PageDriver`] and a fixed set of
//! locator constants. Composite actions chain primitives and wait for
//! navigation to settle; they never classify the outcome, which is left
//! to the test's assertions.

mod cart;
mod checkout;
mod login;
mod products;

pub use cart::CartPage;
pub use checkout::{CheckoutPage, PaymentCard, ShippingAddress};
pub use login::LoginPage;
pub use products::ProductPage;
