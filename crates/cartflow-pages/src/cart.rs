//! Cart screen: line items, removal, and the checkout hand-off.

use crate::error::{check, Result};
use cartflow_browser::{test_id, test_id_prefix, Driver};
use cartflow_core::price;

/// One line item scraped from the cart or overview listing.
///
/// Derived from visible text per assertion, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Sum of price x quantity over the scraped line items.
#[must_use]
pub fn items_subtotal(items: &[CartItem]) -> f64 {
    items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum()
}

/// Scrape every line item from a listing that uses the shared
/// `inventory-item` markup (cart and checkout overview render the same
/// structure).
pub(crate) async fn scrape_items(driver: &Driver) -> Result<Vec<CartItem>> {
    let count = driver.count(&test_id("inventory-item")).await?;
    let mut items = Vec::with_capacity(count);

    for index in 0..count {
        let name = driver
            .text_nth(&test_id("inventory-item-name"), index)
            .await?;
        let price_label = driver
            .text_nth(&test_id("inventory-item-price"), index)
            .await?;
        let quantity_label = driver
            .text_nth(&test_id("inventory-item-quantity"), index)
            .await
            .unwrap_or_default();

        items.push(CartItem {
            name,
            price: price::parse_price(&price_label)?,
            quantity: quantity_label.trim().parse().unwrap_or(1),
        });
    }

    Ok(items)
}

pub struct CartPage<'a> {
    driver: &'a Driver,
}

impl<'a> CartPage<'a> {
    pub fn new(driver: &'a Driver) -> Self {
        Self { driver }
    }

    /// Navigate to the cart page.
    pub async fn open(&self) -> Result<()> {
        self.driver.goto("/cart.html").await?;
        Ok(())
    }

    /// Wait until the cart list has rendered.
    pub async fn wait_for_cart(&self) -> Result<()> {
        self.driver.wait_for(&test_id("cart-list")).await?;
        Ok(())
    }

    pub async fn item_count(&self) -> Result<usize> {
        Ok(self.driver.count(&test_id("inventory-item")).await?)
    }

    /// All line items, scraped from visible text.
    pub async fn items(&self) -> Result<Vec<CartItem>> {
        scrape_items(self.driver).await
    }

    /// Remove the nth line item.
    pub async fn remove_item(&self, index: usize) -> Result<()> {
        let selector = format!("{} {}", test_id("inventory-item"), test_id_prefix("remove"));
        self.driver.click_nth(&selector, index).await?;
        Ok(())
    }

    pub async fn checkout(&self) -> Result<()> {
        self.driver.click(&test_id("checkout")).await?;
        Ok(())
    }

    pub async fn continue_shopping(&self) -> Result<()> {
        self.driver.click(&test_id("continue-shopping")).await?;
        Ok(())
    }

    /// Sum of price x quantity over the current line items.
    pub async fn total_price(&self) -> Result<f64> {
        Ok(items_subtotal(&self.items().await?))
    }

    pub async fn assert_empty(&self) -> Result<()> {
        let count = self.item_count().await?;
        check("cart item count", 0, count, count == 0)
    }

    pub async fn assert_item_count(&self, expected: usize) -> Result<()> {
        let count = self.item_count().await?;
        check("cart item count", expected, count, count == expected)
    }

    /// A line item with the given name is present.
    pub async fn assert_contains(&self, name: &str) -> Result<()> {
        let items = self.items().await?;
        let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
        check(
            "cart contents",
            format!("an item named {name:?}"),
            format!("{names:?}"),
            names.contains(&name),
        )
    }

    pub async fn assert_checkout_available(&self) -> Result<()> {
        let visible = self.driver.is_visible(&test_id("checkout")).await?;
        check("checkout button", "visible", "hidden", visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            name: name.to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_items_subtotal() {
        let items = [item("Backpack", 29.99, 1), item("Bike Light", 9.99, 2)];
        assert!((items_subtotal(&items) - 49.97).abs() < 1e-9);
    }

    #[test]
    fn test_items_subtotal_empty() {
        assert_eq!(items_subtotal(&[]), 0.0);
    }
}
