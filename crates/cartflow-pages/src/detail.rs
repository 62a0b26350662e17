//! Product detail screen, reached by clicking a product name on the
//! inventory listing.

use crate::error::{check, Result};
use cartflow_browser::{test_id, Driver};
use cartflow_core::price;

pub struct ProductDetailPage<'a> {
    driver: &'a Driver,
}

impl<'a> ProductDetailPage<'a> {
    pub fn new(driver: &'a Driver) -> Self {
        Self { driver }
    }

    /// Open the nth product's detail page from the inventory listing.
    pub async fn open_from_inventory(&self, index: usize) -> Result<()> {
        self.driver
            .click_nth(&test_id("inventory-item-name"), index)
            .await?;
        self.driver
            .wait_for_visible(&test_id("inventory-item-name"))
            .await?;
        Ok(())
    }

    pub async fn add_to_cart(&self) -> Result<()> {
        self.driver.click(&test_id("add-to-cart")).await?;
        Ok(())
    }

    pub async fn remove_from_cart(&self) -> Result<()> {
        self.driver.click(&test_id("remove")).await?;
        Ok(())
    }

    pub async fn back_to_products(&self) -> Result<()> {
        self.driver.click(&test_id("back-to-products")).await?;
        Ok(())
    }

    pub async fn name(&self) -> Result<String> {
        Ok(self.driver.text(&test_id("inventory-item-name")).await?)
    }

    /// Displayed price, parsed from its `$<number>` label.
    pub async fn price(&self) -> Result<f64> {
        let label = self.driver.text(&test_id("inventory-item-price")).await?;
        Ok(price::parse_price(&label)?)
    }

    pub async fn description(&self) -> Result<String> {
        Ok(self.driver.text(&test_id("inventory-item-desc")).await?)
    }

    /// Name, price, and description are all rendered.
    pub async fn assert_details_visible(&self) -> Result<()> {
        for (what, selector) in [
            ("product name", test_id("inventory-item-name")),
            ("product price", test_id("inventory-item-price")),
            ("product description", test_id("inventory-item-desc")),
        ] {
            let visible = self.driver.is_visible(&selector).await?;
            check(what, "visible", "hidden", visible)?;
        }
        Ok(())
    }
}
