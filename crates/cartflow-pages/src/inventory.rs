//! Inventory screen: product listing, sorting, and the two add-to-cart
//! paths (direct button, or via the product detail page).

use crate::error::{check, check_eq, Result};
use cartflow_browser::{test_id, test_id_prefix, Driver};
use cartflow_core::{ordering, price};

/// Options of the product sort dropdown, by wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    /// Name, A to Z
    NameAscending,
    /// Name, Z to A
    NameDescending,
    /// Price, low to high
    PriceAscending,
    /// Price, high to low
    PriceDescending,
}

impl SortOption {
    /// The `<option>` value the storefront uses for this ordering.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            SortOption::NameAscending => "az",
            SortOption::NameDescending => "za",
            SortOption::PriceAscending => "lohi",
            SortOption::PriceDescending => "hilo",
        }
    }
}

pub struct InventoryPage<'a> {
    driver: &'a Driver,
}

impl<'a> InventoryPage<'a> {
    pub fn new(driver: &'a Driver) -> Self {
        Self { driver }
    }

    /// Navigate to the inventory page.
    pub async fn open(&self) -> Result<()> {
        self.driver.goto("/inventory.html").await?;
        Ok(())
    }

    /// Wait until the product list has rendered.
    pub async fn wait_for_listing(&self) -> Result<()> {
        self.driver
            .wait_for_visible(&test_id("inventory-item"))
            .await?;
        Ok(())
    }

    pub async fn select_sort(&self, option: SortOption) -> Result<()> {
        self.driver
            .select_option(&test_id("product-sort-container"), option.value())
            .await?;
        Ok(())
    }

    pub async fn item_count(&self) -> Result<usize> {
        Ok(self.driver.count(&test_id("inventory-item")).await?)
    }

    pub async fn product_names(&self) -> Result<Vec<String>> {
        Ok(self.driver.texts(&test_id("inventory-item-name")).await?)
    }

    /// Visible prices, parsed from their `$<number>` labels.
    pub async fn product_prices(&self) -> Result<Vec<f64>> {
        let labels = self.driver.texts(&test_id("inventory-item-price")).await?;
        labels
            .iter()
            .map(|label| price::parse_price(label).map_err(Into::into))
            .collect()
    }

    /// `src` attribute of the nth product image.
    pub async fn product_image_source(&self, index: usize) -> Result<Option<String>> {
        let selector = format!("{} img", test_id("inventory-item"));
        Ok(self.driver.attribute_nth(&selector, index, "src").await?)
    }

    /// Add the nth product via its inline button, waiting for the button to
    /// toggle to Remove.
    pub async fn add_to_cart_direct(&self, index: usize) -> Result<()> {
        tracing::debug!(index, "adding to cart via inline button");
        self.driver
            .click_nth(&test_id_prefix("add-to-cart"), index)
            .await?;
        self.driver
            .wait_for_count_at_least(&test_id_prefix("remove"), index + 1)
            .await?;
        Ok(())
    }

    /// Add the nth product by opening its detail page, adding there, and
    /// returning to the listing.
    pub async fn add_to_cart_via_detail(&self, index: usize) -> Result<()> {
        tracing::debug!(index, "adding to cart via detail page");
        self.driver
            .click_nth(&test_id("inventory-item-name"), index)
            .await?;
        self.driver
            .wait_for_visible(&test_id("inventory-item-name"))
            .await?;
        self.driver.click(&test_id_prefix("add-to-cart")).await?;
        self.driver.click(&test_id("back-to-products")).await?;
        self.driver
            .wait_for_count_at_least(&test_id_prefix("remove"), index + 1)
            .await?;
        Ok(())
    }

    /// Remove the nth in-cart product via its inline button.
    pub async fn remove_from_cart(&self, index: usize) -> Result<()> {
        self.driver
            .click_nth(&test_id_prefix("remove"), index)
            .await?;
        Ok(())
    }

    /// Current cart badge count; 0 when the badge is absent.
    pub async fn cart_badge_count(&self) -> Result<usize> {
        let badge = test_id("shopping-cart-badge");
        if self.driver.is_visible(&badge).await? {
            let text = self.driver.text(&badge).await?;
            Ok(text.trim().parse().unwrap_or(0))
        } else {
            Ok(0)
        }
    }

    pub async fn open_cart(&self) -> Result<()> {
        self.driver.click(&test_id("shopping-cart-link")).await?;
        Ok(())
    }

    /// Displayed prices match their own ascending sort.
    pub async fn assert_sorted_by_price_ascending(&self) -> Result<()> {
        let prices = self.product_prices().await?;
        check(
            "inventory price order",
            "non-decreasing",
            format!("{prices:?}"),
            ordering::is_non_decreasing(&prices),
        )
    }

    /// Displayed prices match their own descending sort.
    pub async fn assert_sorted_by_price_descending(&self) -> Result<()> {
        let prices = self.product_prices().await?;
        check(
            "inventory price order",
            "non-increasing",
            format!("{prices:?}"),
            ordering::is_non_increasing(&prices),
        )
    }

    /// Displayed names match their own lexicographic sort.
    pub async fn assert_sorted_by_name_ascending(&self) -> Result<()> {
        let names = self.product_names().await?;
        check(
            "inventory name order",
            "lexicographic",
            format!("{names:?}"),
            ordering::is_lexicographic(&names),
        )
    }

    /// Displayed names match their own reverse lexicographic sort.
    pub async fn assert_sorted_by_name_descending(&self) -> Result<()> {
        let names = self.product_names().await?;
        check(
            "inventory name order",
            "reverse lexicographic",
            format!("{names:?}"),
            ordering::is_reverse_lexicographic(&names),
        )
    }

    /// The badge is absent for an empty cart, otherwise reads the exact
    /// decimal count.
    pub async fn assert_cart_badge(&self, expected: usize) -> Result<()> {
        let badge = test_id("shopping-cart-badge");
        if expected == 0 {
            let visible = self.driver.is_visible(&badge).await?;
            check("cart badge", "absent", "visible", !visible)
        } else {
            self.driver.wait_for_visible(&badge).await?;
            let actual = self.driver.text(&badge).await?;
            check_eq("cart badge", &expected.to_string(), actual.trim())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_option_wire_values() {
        assert_eq!(SortOption::NameAscending.value(), "az");
        assert_eq!(SortOption::NameDescending.value(), "za");
        assert_eq!(SortOption::PriceAscending.value(), "lohi");
        assert_eq!(SortOption::PriceDescending.value(), "hilo");
    }
}
