//! Login screen: credential entry and the error banner.

use crate::error::{check, check_eq, Result};
use cartflow_browser::{test_id, Driver};

pub struct LoginPage<'a> {
    driver: &'a Driver,
}

impl<'a> LoginPage<'a> {
    pub fn new(driver: &'a Driver) -> Self {
        Self { driver }
    }

    /// Navigate to the login page.
    pub async fn open(&self) -> Result<()> {
        self.driver.goto("/").await?;
        Ok(())
    }

    pub async fn fill_username(&self, username: &str) -> Result<()> {
        self.driver.fill(&test_id("username"), username).await?;
        Ok(())
    }

    pub async fn fill_password(&self, password: &str) -> Result<()> {
        self.driver.fill(&test_id("password"), password).await?;
        Ok(())
    }

    pub async fn submit(&self) -> Result<()> {
        self.driver.click(&test_id("login-button")).await?;
        Ok(())
    }

    /// Fill both credential fields and submit.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        tracing::debug!(username, "logging in");
        self.fill_username(username).await?;
        self.fill_password(password).await?;
        self.submit().await
    }

    pub async fn error_text(&self) -> Result<String> {
        Ok(self.driver.text(&test_id("error")).await?)
    }

    pub async fn is_error_visible(&self) -> Result<bool> {
        Ok(self.driver.is_visible(&test_id("error")).await?)
    }

    /// Successful login lands on the inventory route.
    pub async fn assert_logged_in(&self) -> Result<()> {
        self.driver.wait_for_page_load().await?;
        let url = self.driver.current_url().await?;
        check(
            "post-login URL",
            "a URL on /inventory.html",
            &url,
            url.contains("/inventory.html"),
        )
    }

    /// The error banner is visible and reads exactly `expected`.
    pub async fn assert_error_message(&self, expected: &str) -> Result<()> {
        self.driver.wait_for_visible(&test_id("error")).await?;
        let actual = self.error_text().await?;
        check_eq("login error banner", expected, &actual)
    }

    /// The error banner is visible and contains `fragment`.
    pub async fn assert_error_contains(&self, fragment: &str) -> Result<()> {
        self.driver.wait_for_visible(&test_id("error")).await?;
        let actual = self.error_text().await?;
        check(
            "login error banner",
            format!("text containing {fragment:?}"),
            format!("{actual:?}"),
            actual.contains(fragment),
        )
    }

    /// A failed login stays on the login route.
    pub async fn assert_still_on_login_page(&self) -> Result<()> {
        let url = self.driver.current_url().await?;
        check(
            "post-login URL",
            "the login route",
            &url,
            url.ends_with('/'),
        )
    }
}
