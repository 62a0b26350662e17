//! Checkout completion screen: the order confirmation.

use crate::error::{check, check_eq, Result};
use cartflow_browser::{test_id, Driver};
use cartflow_core::testdata::banners;

pub struct CheckoutCompletePage<'a> {
    driver: &'a Driver,
}

impl<'a> CheckoutCompletePage<'a> {
    pub fn new(driver: &'a Driver) -> Self {
        Self { driver }
    }

    /// Navigate to the completion page.
    pub async fn open(&self) -> Result<()> {
        self.driver.goto("/checkout-complete.html").await?;
        Ok(())
    }

    /// Wait until the confirmation header has rendered.
    pub async fn wait_for_confirmation(&self) -> Result<()> {
        self.driver
            .wait_for_visible(&test_id("complete-header"))
            .await?;
        Ok(())
    }

    pub async fn back_home(&self) -> Result<()> {
        self.driver.click(&test_id("back-to-products")).await?;
        Ok(())
    }

    pub async fn header_text(&self) -> Result<String> {
        Ok(self.driver.text(&test_id("complete-header")).await?)
    }

    pub async fn body_text(&self) -> Result<String> {
        Ok(self.driver.text(&test_id("complete-text")).await?)
    }

    /// Full confirmation check: route, header, dispatch notice, courier
    /// image, and the back-home button.
    pub async fn assert_order_complete(&self) -> Result<()> {
        let url = self.driver.current_url().await?;
        check(
            "completion URL",
            "a URL on /checkout-complete.html",
            &url,
            url.contains("/checkout-complete.html"),
        )?;

        self.wait_for_confirmation().await?;
        let header = self.header_text().await?;
        check_eq("completion header", banners::ORDER_COMPLETE, header.trim())?;

        let body = self.body_text().await?;
        check(
            "completion text",
            format!("text containing {:?}", banners::ORDER_DISPATCHED),
            format!("{body:?}"),
            body.contains(banners::ORDER_DISPATCHED),
        )?;

        let pony = self.driver.is_visible(&test_id("pony-express")).await?;
        check("pony express image", "visible", "hidden", pony)?;

        let back = self
            .driver
            .is_visible(&test_id("back-to-products"))
            .await?;
        check("back home button", "visible", "hidden", back)
    }
}
