use crate::error::{BrowserError, Result};
use cartflow_core::{SuiteConfig, TimeoutConfig};
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::{Element, Page};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use url::Url;

/// Build a selector for the stable `data-test` attribute the application
/// under test decorates its elements with.
#[must_use]
pub fn test_id(id: &str) -> String {
    format!("[data-test=\"{id}\"]")
}

/// Build a prefix-match selector for `data-test` attributes with dynamic
/// suffixes, e.g. `add-to-cart-sauce-labs-backpack`.
#[must_use]
pub fn test_id_prefix(prefix: &str) -> String {
    format!("[data-test^=\"{prefix}\"]")
}

fn join_url(base: &Url, path: &str) -> Result<Url> {
    base.join(path)
        .map_err(|e| BrowserError::Navigation(format!("cannot join {path:?} onto base: {e}")))
}

/// Escape a string for embedding inside a single-quoted JS literal.
fn js_quote(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Shared navigation/query capability object.
///
/// Page objects hold a reference to a `Driver` rather than extending a base
/// type; this is the one seam between screen models and the browser.
/// Timeout failures surface as [`BrowserError::Timeout`], distinct from the
/// page layer's assertion failures.
pub struct Driver {
    page: Page,
    base_url: Url,
    timeouts: TimeoutConfig,
}

impl Driver {
    /// Bind a page to the configured storefront base URL.
    pub fn new(page: Page, config: &SuiteConfig) -> Result<Self> {
        let base_url = Url::parse(&config.target.base_url)
            .map_err(|e| BrowserError::Navigation(format!("invalid base URL: {e}")))?;

        Ok(Self {
            page,
            base_url,
            timeouts: config.timeouts.clone(),
        })
    }

    /// Navigate to a path relative to the base URL and wait for the page to
    /// settle.
    pub async fn goto(&self, path: &str) -> Result<()> {
        let target = join_url(&self.base_url, path)?;
        tracing::debug!(url = %target, "navigating");
        self.page.goto(target.as_str()).await?;
        self.wait_for_page_load().await
    }

    /// Block until the document is fully loaded, then wait out a short
    /// quiescence window for late re-renders.
    pub async fn wait_for_page_load(&self) -> Result<()> {
        let deadline = Instant::now() + Duration::from_millis(self.timeouts.navigation_ms);
        loop {
            let ready: String = self
                .eval("document.readyState")
                .await
                .unwrap_or_default();
            if ready == "complete" {
                break;
            }
            if Instant::now() >= deadline {
                return Err(BrowserError::Timeout {
                    what: "document.readyState == complete".to_string(),
                    waited_ms: self.timeouts.navigation_ms,
                });
            }
            tokio::time::sleep(Duration::from_millis(self.timeouts.poll_interval_ms)).await;
        }

        tokio::time::sleep(Duration::from_millis(self.timeouts.quiescence_ms)).await;
        Ok(())
    }

    /// Current page URL.
    pub async fn current_url(&self) -> Result<String> {
        self.page
            .url()
            .await?
            .ok_or_else(|| BrowserError::Navigation("page has no URL".to_string()))
    }

    /// Wait for a selector to be attached to the DOM and return its element
    /// handle.
    pub async fn wait_for(&self, selector: &str) -> Result<Element> {
        let deadline = Instant::now() + Duration::from_millis(self.timeouts.wait_ms);
        loop {
            if let Ok(element) = self.page.find_element(selector).await {
                return Ok(element);
            }
            if Instant::now() >= deadline {
                return Err(BrowserError::Timeout {
                    what: selector.to_string(),
                    waited_ms: self.timeouts.wait_ms,
                });
            }
            tokio::time::sleep(Duration::from_millis(self.timeouts.poll_interval_ms)).await;
        }
    }

    /// Wait for a selector to be both attached and visible.
    pub async fn wait_for_visible(&self, selector: &str) -> Result<()> {
        let deadline = Instant::now() + Duration::from_millis(self.timeouts.wait_ms);
        loop {
            if self.is_visible(selector).await.unwrap_or(false) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(BrowserError::Timeout {
                    what: format!("{selector} to become visible"),
                    waited_ms: self.timeouts.wait_ms,
                });
            }
            tokio::time::sleep(Duration::from_millis(self.timeouts.poll_interval_ms)).await;
        }
    }

    /// Wait for a selector to be absent or hidden.
    pub async fn wait_for_hidden(&self, selector: &str) -> Result<()> {
        let deadline = Instant::now() + Duration::from_millis(self.timeouts.wait_ms);
        loop {
            if !self.is_visible(selector).await.unwrap_or(false) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(BrowserError::Timeout {
                    what: format!("{selector} to become hidden"),
                    waited_ms: self.timeouts.wait_ms,
                });
            }
            tokio::time::sleep(Duration::from_millis(self.timeouts.poll_interval_ms)).await;
        }
    }

    /// Wait until at least `n` elements match the selector.
    pub async fn wait_for_count_at_least(&self, selector: &str, n: usize) -> Result<()> {
        let deadline = Instant::now() + Duration::from_millis(self.timeouts.wait_ms);
        loop {
            if self.count(selector).await.unwrap_or(0) >= n {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(BrowserError::Timeout {
                    what: format!("{n} matches of {selector}"),
                    waited_ms: self.timeouts.wait_ms,
                });
            }
            tokio::time::sleep(Duration::from_millis(self.timeouts.poll_interval_ms)).await;
        }
    }

    /// Whether the first element matching the selector is rendered.
    pub async fn is_visible(&self, selector: &str) -> Result<bool> {
        let expr = format!(
            "(() => {{ const el = document.querySelector('{}'); \
             return !!(el && (el.offsetWidth || el.offsetHeight || el.getClientRects().length)); }})()",
            js_quote(selector)
        );
        self.eval(&expr).await
    }

    /// Click the first element matching the selector.
    pub async fn click(&self, selector: &str) -> Result<()> {
        tracing::debug!(selector, "click");
        let element = self.wait_for(selector).await?;
        element.scroll_into_view().await?;
        element.click().await?;
        Ok(())
    }

    /// Click the nth element matching the selector.
    pub async fn click_nth(&self, selector: &str, index: usize) -> Result<()> {
        tracing::debug!(selector, index, "click");
        let element = self.nth(selector, index).await?;
        element.scroll_into_view().await?;
        element.click().await?;
        Ok(())
    }

    /// Clear a form field and type the given value into it.
    pub async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        tracing::debug!(selector, "fill");
        let element = self.wait_for(selector).await?;
        element.click().await?;

        let clear = format!(
            "(() => {{ const el = document.querySelector('{}'); if (el) el.value = ''; }})()",
            js_quote(selector)
        );
        self.page.evaluate(clear).await?;

        element.type_str(value).await?;
        Ok(())
    }

    /// Choose an option of a `<select>` by value and dispatch `change`.
    ///
    /// CDP has no select primitive, so this goes through script.
    pub async fn select_option(&self, selector: &str, value: &str) -> Result<()> {
        tracing::debug!(selector, value, "select option");
        self.wait_for(selector).await?;
        let expr = format!(
            "(() => {{ const el = document.querySelector('{}'); if (!el) return false; \
             el.value = '{}'; el.dispatchEvent(new Event('change', {{ bubbles: true }})); \
             return el.value === '{}'; }})()",
            js_quote(selector),
            js_quote(value),
            js_quote(value)
        );
        let selected: bool = self.eval(&expr).await?;
        if selected {
            Ok(())
        } else {
            Err(BrowserError::Evaluation(format!(
                "option {value:?} not accepted by {selector}"
            )))
        }
    }

    /// Text content of the first element matching the selector.
    pub async fn text(&self, selector: &str) -> Result<String> {
        let element = self.wait_for(selector).await?;
        Ok(element.inner_text().await?.unwrap_or_default())
    }

    /// Text content of the nth element matching the selector.
    pub async fn text_nth(&self, selector: &str, index: usize) -> Result<String> {
        let element = self.nth(selector, index).await?;
        Ok(element.inner_text().await?.unwrap_or_default())
    }

    /// Text contents of every element matching the selector, in DOM order.
    pub async fn texts(&self, selector: &str) -> Result<Vec<String>> {
        let mut out = Vec::new();
        for element in self.page.find_elements(selector).await? {
            out.push(element.inner_text().await?.unwrap_or_default());
        }
        Ok(out)
    }

    /// Attribute value of the first element matching the selector.
    pub async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let element = self.wait_for(selector).await?;
        Ok(element.attribute(name).await?)
    }

    /// Attribute value of the nth element matching the selector.
    pub async fn attribute_nth(
        &self,
        selector: &str,
        index: usize,
        name: &str,
    ) -> Result<Option<String>> {
        let element = self.nth(selector, index).await?;
        Ok(element.attribute(name).await?)
    }

    /// Number of elements currently matching the selector.
    pub async fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.page.find_elements(selector).await?.len())
    }

    /// Full-page screenshot as PNG bytes.
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        let bytes = self
            .page
            .screenshot(ScreenshotParams::builder().full_page(true).build())
            .await?;
        Ok(bytes)
    }

    async fn nth(&self, selector: &str, index: usize) -> Result<Element> {
        // Ensure at least one match is attached before indexing
        self.wait_for(selector).await?;
        let elements = self.page.find_elements(selector).await?;
        elements
            .into_iter()
            .nth(index)
            .ok_or_else(|| BrowserError::SelectorNotFound(format!("{selector} (index {index})")))
    }

    async fn eval<T: DeserializeOwned>(&self, expr: &str) -> Result<T> {
        self.page
            .evaluate(expr.to_string())
            .await?
            .into_value()
            .map_err(|e| BrowserError::Evaluation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_id_selector() {
        assert_eq!(test_id("login-button"), "[data-test=\"login-button\"]");
        assert_eq!(test_id("shopping-cart-badge"), "[data-test=\"shopping-cart-badge\"]");
    }

    #[test]
    fn test_test_id_prefix_selector() {
        assert_eq!(test_id_prefix("add-to-cart"), "[data-test^=\"add-to-cart\"]");
        assert_eq!(test_id_prefix("remove"), "[data-test^=\"remove\"]");
    }

    #[test]
    fn test_selector_helpers_exported_at_crate_root() {
        assert_eq!(crate::test_id("cart-list"), test_id("cart-list"));
        assert_eq!(crate::test_id_prefix("remove"), test_id_prefix("remove"));
    }

    #[test]
    fn test_join_url_relative_paths() {
        let base = Url::parse("https://www.saucedemo.com").unwrap();
        assert_eq!(
            join_url(&base, "/inventory.html").unwrap().as_str(),
            "https://www.saucedemo.com/inventory.html"
        );
        assert_eq!(
            join_url(&base, "/").unwrap().as_str(),
            "https://www.saucedemo.com/"
        );
    }

    #[test]
    fn test_js_quote_escapes_single_quotes() {
        assert_eq!(js_quote("a'b"), "a\\'b");
        assert_eq!(js_quote("[data-test=\"username\"]"), "[data-test=\"username\"]");
    }
}
