//! Checkout overview: order line items and the subtotal/tax/total summary.
//!
//! Beyond reading the displayed aggregates, this page recomputes them from
//! the scraped line items to catch pricing regressions in the system under
//! test.

use crate::cart::{items_subtotal, scrape_items, CartItem};
use crate::error::{check, Result};
use cartflow_browser::{test_id, Driver};
use cartflow_core::price::{self, PRICE_TOLERANCE};

/// The displayed order aggregates, parsed from their currency labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSummary {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

pub struct CheckoutOverviewPage<'a> {
    driver: &'a Driver,
}

impl<'a> CheckoutOverviewPage<'a> {
    pub fn new(driver: &'a Driver) -> Self {
        Self { driver }
    }

    /// Navigate to the checkout overview.
    pub async fn open(&self) -> Result<()> {
        self.driver.goto("/checkout-step-two.html").await?;
        Ok(())
    }

    /// Wait until the summary labels have rendered.
    pub async fn wait_for_summary(&self) -> Result<()> {
        self.driver
            .wait_for_visible(&test_id("subtotal-label"))
            .await?;
        Ok(())
    }

    /// All order line items, scraped from visible text.
    pub async fn items(&self) -> Result<Vec<CartItem>> {
        scrape_items(self.driver).await
    }

    pub async fn subtotal(&self) -> Result<f64> {
        let label = self.driver.text(&test_id("subtotal-label")).await?;
        Ok(price::parse_price(&label)?)
    }

    pub async fn tax(&self) -> Result<f64> {
        let label = self.driver.text(&test_id("tax-label")).await?;
        Ok(price::parse_price(&label)?)
    }

    pub async fn total(&self) -> Result<f64> {
        let label = self.driver.text(&test_id("total-label")).await?;
        Ok(price::parse_price(&label)?)
    }

    /// The three displayed aggregates.
    pub async fn summary(&self) -> Result<OrderSummary> {
        Ok(OrderSummary {
            subtotal: self.subtotal().await?,
            tax: self.tax().await?,
            total: self.total().await?,
        })
    }

    /// Complete the purchase.
    pub async fn finish(&self) -> Result<()> {
        tracing::debug!("finishing purchase");
        self.driver.click(&test_id("finish")).await?;
        Ok(())
    }

    pub async fn cancel(&self) -> Result<()> {
        self.driver.click(&test_id("cancel")).await?;
        Ok(())
    }

    /// Displayed total equals subtotal plus tax, within the price tolerance.
    pub async fn assert_total_reconciles(&self) -> Result<()> {
        let summary = self.summary().await?;
        let expected = summary.subtotal + summary.tax;
        check(
            "order total",
            format!("{expected:.2} (subtotal + tax)"),
            format!("{:.2}", summary.total),
            price::validate_total(summary.total, expected, PRICE_TOLERANCE),
        )
    }

    /// Displayed subtotal equals the sum of scraped line items, within the
    /// price tolerance.
    pub async fn assert_subtotal_matches_items(&self) -> Result<()> {
        let expected = items_subtotal(&self.items().await?);
        let actual = self.subtotal().await?;
        check(
            "order subtotal",
            format!("{expected:.2} (sum of line items)"),
            format!("{actual:.2}"),
            price::validate_total(actual, expected, PRICE_TOLERANCE),
        )
    }

    pub async fn assert_on_overview(&self) -> Result<()> {
        let url = self.driver.current_url().await?;
        check(
            "checkout URL",
            "a URL on /checkout-step-two.html",
            &url,
            url.contains("/checkout-step-two.html"),
        )
    }
}
