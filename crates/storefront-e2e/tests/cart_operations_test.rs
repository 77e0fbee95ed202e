// Shopping cart operations suite.
//
// Category prefixes: smoke_ / regression_ / ui_ / slow_. Cart state
// lives on the mock store, so every test gets a fresh server and a
// fresh browser session.


use store_server::{StoreServer, launch_session};

macro_rules! require_browsers {
    () => {
        if !store_server::browsers_enabled() {
            eprintln!(
                "[SKIP] {} requires STOREFRONT_E2E=1 (Playwright driver + browsers)",
                module_path!()
            );
            return;
        }
    };
}

macro_rules! skip_test {
    ($reason:expr) => {{
        eprintln!("[SKIP] {}: {}", module_path!(), $reason);
        return;
    }};
}

#[tokio::test]
async fn smoke_add_product_to_cart() {
    require_browsers!();
    let store = StoreServer::start().await;
    let session = launch_session(&store).await;
    let products = session.product_page();
    let cart = session.cart_page();

    products.navigate().await.expect("failed to open products page");
    products.search_product("Laptop").await.expect("search failed");

    if products.product_count().await.expect("count failed") == 0 {
        session.close().await.expect("failed to close session");
        skip_test!("no products seeded for 'Laptop'");
    }

    products.add_first_product_to_cart().await.expect("add to cart failed");
    cart.navigate().await.expect("failed to open cart page");

    assert!(cart.cart_item_count().await.expect("count failed") > 0);

    session.close().await.expect("failed to close session");
    store.shutdown();
}

#[tokio::test]
async fn smoke_view_empty_cart() {
    require_browsers!();
    let store = StoreServer::start().await;
    let session = launch_session(&store).await;
    let cart = session.cart_page();

    cart.navigate().await.expect("failed to open cart page");

    assert!(cart.is_cart_empty().await.expect("empty-cart query failed"));

    session.close().await.expect("failed to close session");
    store.shutdown();
}

#[tokio::test]
async fn regression_remove_item_from_cart() {
    require_browsers!();
    let store = StoreServer::start().await;
    let session = launch_session(&store).await;
    let products = session.product_page();
    let cart = session.cart_page();

    products.navigate().await.expect("failed to open products page");
    products.search_product("Laptop").await.expect("search failed");

    if products.product_count().await.expect("count failed") == 0 {
        session.close().await.expect("failed to close session");
        skip_test!("no products seeded for 'Laptop'");
    }

    products.add_first_product_to_cart().await.expect("add to cart failed");
    cart.navigate().await.expect("failed to open cart page");
    let initial_count = cart.cart_item_count().await.expect("count failed");

    cart.remove_first_item().await.expect("remove failed");

    assert!(
        cart.cart_item_count().await.expect("count failed") < initial_count,
        "removing the first row did not shrink the cart"
    );

    session.close().await.expect("failed to close session");
    store.shutdown();
}

#[tokio::test]
async fn regression_update_item_quantity() {
    require_browsers!();
    let store = StoreServer::start().await;
    let session = launch_session(&store).await;
    let products = session.product_page();
    let cart = session.cart_page();

    products.navigate().await.expect("failed to open products page");
    products.search_product("Laptop").await.expect("search failed");

    if products.product_count().await.expect("count failed") == 0 {
        session.close().await.expect("failed to close session");
        skip_test!("no products seeded for 'Laptop'");
    }

    products.add_first_product_to_cart().await.expect("add to cart failed");
    cart.navigate().await.expect("failed to open cart page");
    cart.update_item_quantity(0, "3").await.expect("quantity update failed");

    assert_eq!(cart.first_item_quantity().await.expect("quantity query failed"), "3");

    session.close().await.expect("failed to close session");
    store.shutdown();
}

#[tokio::test]
async fn ui_cart_displays_item_details() {
    require_browsers!();
    let store = StoreServer::start().await;
    let session = launch_session(&store).await;
    let products = session.product_page();
    let cart = session.cart_page();

    products.navigate().await.expect("failed to open products page");
    products.search_product("Laptop").await.expect("search failed");

    if products.product_count().await.expect("count failed") == 0 {
        session.close().await.expect("failed to close session");
        skip_test!("no products seeded for 'Laptop'");
    }

    products.add_first_product_to_cart().await.expect("add to cart failed");
    cart.navigate().await.expect("failed to open cart page");

    assert_ne!(cart.first_item_price().await.expect("price query failed"), "");
    assert_ne!(cart.first_item_quantity().await.expect("quantity query failed"), "");

    session.close().await.expect("failed to close session");
    store.shutdown();
}

#[tokio::test]
async fn regression_cart_totals_calculation() {
    require_browsers!();
    let store = StoreServer::start().await;
    let session = launch_session(&store).await;
    let products = session.product_page();
    let cart = session.cart_page();

    products.navigate().await.expect("failed to open products page");
    products.search_product("Laptop").await.expect("search failed");

    if products.product_count().await.expect("count failed") == 0 {
        session.close().await.expect("failed to close session");
        skip_test!("no products seeded for 'Laptop'");
    }

    products.add_first_product_to_cart().await.expect("add to cart failed");
    cart.navigate().await.expect("failed to open cart page");

    assert_ne!(cart.subtotal().await.expect("subtotal query failed"), "");
    assert_ne!(cart.tax().await.expect("tax query failed"), "");
    assert_ne!(cart.total().await.expect("total query failed"), "");

    session.close().await.expect("failed to close session");
    store.shutdown();
}

#[tokio::test]
async fn regression_continue_shopping_navigation() {
    require_browsers!();
    let store = StoreServer::start().await;
    let session = launch_session(&store).await;
    let products = session.product_page();
    let cart = session.cart_page();

    products.navigate().await.expect("failed to open products page");
    products.search_product("Laptop").await.expect("search failed");

    if products.product_count().await.expect("count failed") == 0 {
        session.close().await.expect("failed to close session");
        skip_test!("no products seeded for 'Laptop'");
    }

    products.add_first_product_to_cart().await.expect("add to cart failed");
    cart.navigate().await.expect("failed to open cart page");
    cart.click_continue_shopping().await.expect("continue shopping failed");

    let url = cart.url();
    assert!(
        url.contains("/products") || url.contains("/shop"),
        "expected the listing, got {url}"
    );

    session.close().await.expect("failed to close session");
    store.shutdown();
}

#[tokio::test]
async fn slow_add_multiple_products_to_cart() {
    require_browsers!();
    let store = StoreServer::start().await;
    let session = launch_session(&store).await;
    let products = session.product_page();
    let cart = session.cart_page();

    products.navigate().await.expect("failed to open products page");
    products.search_product("Laptop").await.expect("search failed");

    if products.product_count().await.expect("count failed") == 0 {
        session.close().await.expect("failed to close session");
        skip_test!("no products seeded for 'Laptop'");
    }
    products.add_first_product_to_cart().await.expect("add to cart failed");

    products.navigate().await.expect("failed to open products page");
    products.search_product("Mouse").await.expect("search failed");

    if products.product_count().await.expect("count failed") == 0 {
        session.close().await.expect("failed to close session");
        skip_test!("no products seeded for 'Mouse'");
    }
    products.add_first_product_to_cart().await.expect("add to cart failed");

    cart.navigate().await.expect("failed to open cart page");
    assert!(cart.cart_item_count().await.expect("count failed") >= 2);

    session.close().await.expect("failed to close session");
    store.shutdown();
}

#[tokio::test]
async fn regression_cart_persistence_after_navigation() {
    require_browsers!();
    let store = StoreServer::start().await;
    let session = launch_session(&store).await;
    let products = session.product_page();
    let cart = session.cart_page();

    products.navigate().await.expect("failed to open products page");
    products.search_product("Laptop").await.expect("search failed");

    if products.product_count().await.expect("count failed") == 0 {
        session.close().await.expect("failed to close session");
        skip_test!("no products seeded for 'Laptop'");
    }

    products.add_first_product_to_cart().await.expect("add to cart failed");
    cart.navigate().await.expect("failed to open cart page");
    let initial_count = cart.cart_item_count().await.expect("count failed");

    // An unrelated navigation must not disturb the cart contents.
    products.navigate().await.expect("failed to open products page");
    cart.navigate().await.expect("failed to open cart page");

    assert_eq!(cart.cart_item_count().await.expect("count failed"), initial_count);

    session.close().await.expect("failed to close session");
    store.shutdown();
}
