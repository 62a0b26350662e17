//! Authentication scenarios: successful logins, the locked-out account,
//! and credential validation banners.

use cartflow_core::testdata::{banners, invalid, Persona};
use cartflow_pages::LoginPage;
use cartflow_suite::Session;

#[tokio::test]
#[ignore = "Requires Chrome browser and a reachable storefront"]
async fn login_personas_reach_inventory() {
    for persona in [Persona::Standard, Persona::Problem, Persona::Performance] {
        let session = Session::launch().await.expect("launch session");
        {
            let login = LoginPage::new(&session.driver);
            login.open().await.expect("open login page");
            let creds = persona.credentials();
            login
                .login(creds.username, creds.password)
                .await
                .expect("submit credentials");
            login
                .assert_logged_in()
                .await
                .unwrap_or_else(|e| panic!("{persona} not redirected to inventory: {e}"));
        }
        session.close().await.expect("close session");
    }
}

#[tokio::test]
#[ignore = "Requires Chrome browser and a reachable storefront"]
async fn locked_out_user_sees_locked_banner() {
    let session = Session::launch().await.expect("launch session");
    {
        let login = LoginPage::new(&session.driver);
        login.open().await.expect("open login page");
        let creds = Persona::Locked.credentials();
        login
            .login(creds.username, creds.password)
            .await
            .expect("submit credentials");
        login
            .assert_error_message(banners::LOCKED_OUT)
            .await
            .expect("locked-out banner");
        login
            .assert_still_on_login_page()
            .await
            .expect("still on login page");
    }
    session.close().await.expect("close session");
}

#[tokio::test]
#[ignore = "Requires Chrome browser and a reachable storefront"]
async fn wrong_password_sees_mismatch_banner() {
    let session = Session::launch().await.expect("launch session");
    {
        let login = LoginPage::new(&session.driver);
        login.open().await.expect("open login page");
        login
            .login(Persona::Standard.credentials().username, invalid::PASSWORD)
            .await
            .expect("submit credentials");
        login
            .assert_error_message(banners::INVALID_CREDENTIALS)
            .await
            .expect("mismatch banner");
    }
    session.close().await.expect("close session");
}

#[tokio::test]
#[ignore = "Requires Chrome browser and a reachable storefront"]
async fn empty_username_sees_required_banner() {
    let session = Session::launch().await.expect("launch session");
    {
        let login = LoginPage::new(&session.driver);
        login.open().await.expect("open login page");
        login.submit().await.expect("submit empty form");
        login
            .assert_error_message(banners::USERNAME_REQUIRED)
            .await
            .expect("username-required banner");
    }
    session.close().await.expect("close session");
}

#[tokio::test]
#[ignore = "Requires Chrome browser and a reachable storefront"]
async fn empty_password_sees_required_banner() {
    let session = Session::launch().await.expect("launch session");
    {
        let login = LoginPage::new(&session.driver);
        login.open().await.expect("open login page");
        login
            .fill_username(Persona::Standard.credentials().username)
            .await
            .expect("fill username");
        login.submit().await.expect("submit without password");
        login
            .assert_error_message(banners::PASSWORD_REQUIRED)
            .await
            .expect("password-required banner");
    }
    session.close().await.expect("close session");
}
