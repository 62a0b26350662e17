use cartflow_browser::{test_id, BrowserEngine};
use cartflow_core::SuiteConfig;

#[tokio::test]
#[ignore = "Requires Chrome browser to be installed"]
async fn test_engine_launch_and_shutdown() {
    let config = SuiteConfig::default();
    let engine = BrowserEngine::launch(&config)
        .await
        .expect("launch browser");
    engine.shutdown().await.expect("shutdown browser");
}

#[tokio::test]
#[ignore = "Requires Chrome browser and a reachable storefront"]
async fn test_driver_navigation_and_query() {
    let config = SuiteConfig::load_with_env().expect("load config");
    let engine = BrowserEngine::launch(&config)
        .await
        .expect("launch browser");
    let driver = engine.open(&config).await.expect("open page");

    driver.goto("/").await.expect("navigate to login page");

    let url = driver.current_url().await.expect("current url");
    assert!(url.starts_with(&config.target.base_url));

    // The login form is addressed through the data-test contract
    driver
        .wait_for_visible(&test_id("login-button"))
        .await
        .expect("login button visible");
    assert_eq!(driver.count(&test_id("username")).await.expect("count"), 1);

    engine.shutdown().await.expect("shutdown browser");
}
