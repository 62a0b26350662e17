use crate::driver::Driver;
use crate::error::{BrowserError, Result};
use cartflow_core::SuiteConfig;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;

/// Owns a Chromium instance and its CDP event loop.
///
/// Each test scenario launches its own engine, so no browser state is shared
/// between tests.
pub struct BrowserEngine {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl BrowserEngine {
    /// Launch Chromium with the suite's browser settings.
    pub async fn launch(config: &SuiteConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .window_size(config.browser.viewport_width, config.browser.viewport_height);
        if !config.browser.headless {
            builder = builder.with_head();
        }
        let browser_config = builder.build().map_err(BrowserError::Launch)?;

        let (browser, mut handler) = Browser::launch(browser_config).await?;
        tracing::debug!(headless = config.browser.headless, "launched chromium");

        // Drive the CDP event stream until the browser goes away
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        Ok(Self {
            browser,
            handler_task,
        })
    }

    /// Open a fresh page and wrap it in a [`Driver`] bound to the configured
    /// storefront base URL.
    pub async fn open(&self, config: &SuiteConfig) -> Result<Driver> {
        let page = self.browser.new_page("about:blank").await?;
        Driver::new(page, config)
    }

    /// Close the browser and reap the child process.
    pub async fn shutdown(mut self) -> Result<()> {
        self.browser.close().await?;
        let _ = self.browser.wait().await;
        self.handler_task.abort();
        Ok(())
    }
}
