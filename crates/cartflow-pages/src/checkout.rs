//! Checkout step one: shipping information entry.

use crate::error::{check, check_eq, Result};
use cartflow_browser::{test_id, Driver};
use cartflow_core::CheckoutInfo;

pub struct CheckoutPage<'a> {
    driver: &'a Driver,
}

impl<'a> CheckoutPage<'a> {
    pub fn new(driver: &'a Driver) -> Self {
        Self { driver }
    }

    /// Navigate to checkout step one.
    pub async fn open(&self) -> Result<()> {
        self.driver.goto("/checkout-step-one.html").await?;
        Ok(())
    }

    pub async fn fill_first_name(&self, first_name: &str) -> Result<()> {
        self.driver.fill(&test_id("firstName"), first_name).await?;
        Ok(())
    }

    pub async fn fill_last_name(&self, last_name: &str) -> Result<()> {
        self.driver.fill(&test_id("lastName"), last_name).await?;
        Ok(())
    }

    pub async fn fill_postal_code(&self, postal_code: &str) -> Result<()> {
        self.driver
            .fill(&test_id("postalCode"), postal_code)
            .await?;
        Ok(())
    }

    /// Fill all three shipping fields.
    pub async fn fill_info(&self, info: &CheckoutInfo) -> Result<()> {
        self.fill_first_name(&info.first_name).await?;
        self.fill_last_name(&info.last_name).await?;
        self.fill_postal_code(&info.postal_code).await
    }

    pub async fn continue_to_overview(&self) -> Result<()> {
        self.driver.click(&test_id("continue")).await?;
        Ok(())
    }

    pub async fn cancel(&self) -> Result<()> {
        self.driver.click(&test_id("cancel")).await?;
        Ok(())
    }

    /// Fill the shipping form and continue to the overview.
    pub async fn complete_step_one(&self, info: &CheckoutInfo) -> Result<()> {
        self.fill_info(info).await?;
        self.continue_to_overview().await
    }

    pub async fn error_text(&self) -> Result<String> {
        Ok(self.driver.text(&test_id("error")).await?)
    }

    pub async fn is_error_visible(&self) -> Result<bool> {
        Ok(self.driver.is_visible(&test_id("error")).await?)
    }

    /// The validation banner is visible and reads exactly `expected`.
    pub async fn assert_error_message(&self, expected: &str) -> Result<()> {
        self.driver.wait_for_visible(&test_id("error")).await?;
        let actual = self.error_text().await?;
        check_eq("checkout error banner", expected, &actual)
    }

    pub async fn assert_on_step_one(&self) -> Result<()> {
        let url = self.driver.current_url().await?;
        check(
            "checkout URL",
            "a URL on /checkout-step-one.html",
            &url,
            url.contains("/checkout-step-one.html"),
        )
    }

    pub async fn assert_on_step_two(&self) -> Result<()> {
        let url = self.driver.current_url().await?;
        check(
            "checkout URL",
            "a URL on /checkout-step-two.html",
            &url,
            url.contains("/checkout-step-two.html"),
        )
    }
}
