//! The full purchase funnel: login, sort, add via both paths, trim the
//! cart, check out, reconcile the order summary, and confirm completion.

use cartflow_core::price::{self, DEFAULT_TAX_RATE, PRICE_TOLERANCE};
use cartflow_core::{CheckoutInfo, Persona};
use cartflow_pages::{
    CartPage, CheckoutCompletePage, CheckoutOverviewPage, CheckoutPage, InventoryPage, SortOption,
};
use cartflow_suite::Session;

#[tokio::test]
#[ignore = "Requires Chrome browser and a reachable storefront"]
async fn full_purchase_flow_reaches_confirmation() {
    let session = Session::login_as(Persona::Standard)
        .await
        .expect("standard user session");
    let driver = &session.driver;

    // Inventory: sort, then add one item by each path
    let inventory = InventoryPage::new(driver);
    inventory.wait_for_listing().await.expect("listing rendered");
    inventory
        .select_sort(SortOption::PriceAscending)
        .await
        .expect("select low-to-high");
    inventory
        .assert_sorted_by_price_ascending()
        .await
        .expect("prices non-decreasing");

    inventory
        .add_to_cart_direct(0)
        .await
        .expect("add first item directly");
    inventory
        .add_to_cart_via_detail(1)
        .await
        .expect("add second item via detail page");
    inventory
        .assert_cart_badge(2)
        .await
        .expect("badge reads 2");

    // Cart: drop one item, keep the other
    inventory.open_cart().await.expect("open cart");
    let cart = CartPage::new(driver);
    cart.wait_for_cart().await.expect("cart rendered");
    cart.assert_item_count(2).await.expect("two items in cart");
    cart.remove_item(0).await.expect("remove first item");
    cart.assert_item_count(1).await.expect("one item left");
    cart.checkout().await.expect("proceed to checkout");

    // Step one: shipping info
    let checkout = CheckoutPage::new(driver);
    checkout
        .assert_on_step_one()
        .await
        .expect("on checkout step one");
    checkout
        .complete_step_one(&CheckoutInfo::random())
        .await
        .expect("submit shipping info");

    // Overview: reconcile the displayed aggregates
    let overview = CheckoutOverviewPage::new(driver);
    overview.wait_for_summary().await.expect("summary rendered");
    overview
        .assert_subtotal_matches_items()
        .await
        .expect("subtotal equals line items");
    overview
        .assert_total_reconciles()
        .await
        .expect("total equals subtotal plus tax");

    let subtotal = overview.subtotal().await.expect("read subtotal");
    let expected_total = price::calculate_total(subtotal, DEFAULT_TAX_RATE);
    let actual_total = overview.total().await.expect("read total");
    assert!(
        price::validate_total(actual_total, expected_total, PRICE_TOLERANCE),
        "displayed total {actual_total} differs from calculated {expected_total}"
    );

    // Finish and confirm
    overview.finish().await.expect("finish purchase");
    CheckoutCompletePage::new(driver)
        .assert_order_complete()
        .await
        .expect("order confirmation");

    session.close().await.expect("close session");
}

#[tokio::test]
#[ignore = "Requires Chrome browser and a reachable storefront"]
async fn cancelling_step_one_returns_to_cart() {
    let session = Session::login_as(Persona::Standard)
        .await
        .expect("standard user session");
    let driver = &session.driver;

    let inventory = InventoryPage::new(driver);
    inventory.wait_for_listing().await.expect("listing rendered");
    inventory.add_to_cart_direct(0).await.expect("add item");
    inventory.open_cart().await.expect("open cart");

    let cart = CartPage::new(driver);
    cart.wait_for_cart().await.expect("cart rendered");
    cart.checkout().await.expect("proceed to checkout");

    let checkout = CheckoutPage::new(driver);
    checkout
        .assert_on_step_one()
        .await
        .expect("on checkout step one");
    checkout.cancel().await.expect("cancel checkout");

    cart.wait_for_cart().await.expect("back on cart page");
    cart.assert_item_count(1).await.expect("cart kept its item");

    // Emptying the cart removes the badge entirely
    cart.remove_item(0).await.expect("empty the cart");
    cart.assert_empty().await.expect("cart drained");
    cart.continue_shopping().await.expect("back to inventory");
    inventory.wait_for_listing().await.expect("listing rendered again");
    inventory
        .assert_cart_badge(0)
        .await
        .expect("badge absent once cart is empty");

    session.close().await.expect("close session");
}
