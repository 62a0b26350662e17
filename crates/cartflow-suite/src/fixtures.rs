//! Test session setup: browser launch and persona login.

use cartflow_browser::{BrowserEngine, Driver};
use cartflow_core::{Persona, SuiteConfig};
use cartflow_pages::LoginPage;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static TRACING: OnceLock<()> = OnceLock::new();

/// Initialize the tracing subscriber once per test process.
///
/// Filter via `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// One isolated test session: its own browser instance and page.
///
/// Each scenario owns its session exclusively; there is no state shared
/// between tests. Dropping the session kills the browser process, so
/// teardown happens on every exit path including panics.
pub struct Session {
    /// Suite configuration the session was launched with
    pub config: SuiteConfig,
    /// Driver bound to the session's page
    pub driver: Driver,
    engine: BrowserEngine,
}

impl Session {
    /// Launch a browser and open a blank page.
    pub async fn launch() -> anyhow::Result<Self> {
        init_tracing();

        let config = SuiteConfig::load_with_env()?;
        let engine = BrowserEngine::launch(&config).await?;
        let driver = engine.open(&config).await?;

        tracing::info!(base_url = %config.target.base_url, "session ready");
        Ok(Self {
            config,
            driver,
            engine,
        })
    }

    /// Launch a session already logged in as the given persona, landed on
    /// the inventory page.
    pub async fn login_as(persona: Persona) -> anyhow::Result<Self> {
        let session = Self::launch().await?;

        {
            let login = LoginPage::new(&session.driver);
            login.open().await?;
            let creds = persona.credentials();
            login.login(creds.username, creds.password).await?;
            login.assert_logged_in().await?;
        }

        tracing::info!(%persona, "logged in");
        Ok(session)
    }

    /// Shut the browser down cleanly.
    pub async fn close(self) -> anyhow::Result<()> {
        self.engine.shutdown().await?;
        Ok(())
    }
}
