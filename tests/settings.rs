#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

mod common;

use esi_client::error::Kind;
use esi_client::{Channel, Client, Config, SettingsUpdate};
use httpmock::Method::GET;
use httpmock::MockServer;
use reqwest::StatusCode;
use secrecy::ExposeSecret as _;
use serde_json::json;

use crate::common::{TOKEN, TempConfig, client};

#[test]
fn client_creates_missing_config() -> anyhow::Result<()> {
    let config = TempConfig::new();
    assert!(!config.path().exists());

    Client::new(Config::builder().settings_path(config.path()).build())?;

    assert_eq!(
        config.read(),
        json!({
            "authToken": "",
            "language": "en/us",
            "link": "https://esi.evetech.net/latest/",
            "projectName": ""
        })
    );

    Ok(())
}

#[test]
fn skip_bootstrap_leaves_filesystem_alone() -> anyhow::Result<()> {
    let config = TempConfig::new();

    let client = Client::new(
        Config::builder()
            .settings_path(config.path())
            .skip_bootstrap(true)
            .build(),
    )?;

    assert!(!config.path().exists());
    assert_eq!(client.util().settings()?.link, Channel::Latest.link());

    Ok(())
}

#[test]
fn token_option_is_persisted() -> anyhow::Result<()> {
    let config = TempConfig::new();

    let client = Client::new(
        Config::builder()
            .settings_path(config.path())
            .token(TOKEN)
            .build(),
    )?;

    assert_eq!(config.read()["authToken"], TOKEN);
    let settings = client.util().settings()?;
    assert_eq!(
        settings.auth_token().map(|t| t.expose_secret().to_owned()),
        Some(TOKEN.to_owned())
    );

    Ok(())
}

#[test]
fn bogus_route_is_rejected_and_nothing_is_written() -> anyhow::Result<()> {
    let server = MockServer::start();
    let (client, config) = client(&server, Some(TOKEN))?;
    let before = config.read();

    let err = client
        .util()
        .set_settings(
            &SettingsUpdate::builder()
                .route("bogus")
                .language("de")
                .build(),
        )
        .unwrap_err();

    assert_eq!(err.kind(), Kind::InvalidChannel);
    assert_eq!(config.read(), before);
    assert_eq!(client.util().settings()?.language, "en/us");

    Ok(())
}

#[test]
fn partial_update_keeps_other_fields() -> anyhow::Result<()> {
    let server = MockServer::start();
    let (client, config) = client(&server, Some(TOKEN))?;

    let settings = client
        .util()
        .set_settings(&SettingsUpdate::builder().route("dev").build())?;

    assert_eq!(settings.link, "https://esi.evetech.net/dev/");
    assert_eq!(
        config.read(),
        json!({
            "authToken": TOKEN,
            "language": "en/us",
            "link": "https://esi.evetech.net/dev/",
            "projectName": common::PROJECT
        })
    );

    Ok(())
}

#[test]
fn empty_token_clears_it() -> anyhow::Result<()> {
    let server = MockServer::start();
    let (client, config) = client(&server, Some(TOKEN))?;

    let settings = client
        .util()
        .set_settings(&SettingsUpdate::builder().auth_token("").build())?;

    assert!(settings.auth_token().is_none());
    assert_eq!(config.read()["authToken"], "");

    Ok(())
}

#[tokio::test]
async fn language_change_applies_to_next_request() -> anyhow::Result<()> {
    let server = MockServer::start();
    let (client, _config) = client(&server, None)?;

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/latest/universe/factions/")
            .query_param("language", "de")
            .header("accept-language", "de");
        then.status(StatusCode::OK).json_body(json!([]));
    });

    client
        .util()
        .set_settings(&SettingsUpdate::builder().language("de").build())?;
    client.universe().factions().await?;

    mock.assert();

    Ok(())
}

#[test]
fn malformed_config_falls_back_to_defaults() -> anyhow::Result<()> {
    let config = TempConfig::new();
    std::fs::write(config.path(), "{ \"link\": ")?;

    let client = Client::new(Config::builder().settings_path(config.path()).build())?;
    let settings = client.util().settings()?;

    assert_eq!(settings.link, Channel::Latest.link());
    assert_eq!(settings.language, "en/us");

    Ok(())
}

#[test]
fn both_configs_unusable_is_config_unavailable() -> anyhow::Result<()> {
    let config = TempConfig::new();
    let fallback = TempConfig::new();
    std::fs::write(config.path(), "not json")?;
    std::fs::write(fallback.path(), "not json either")?;

    let client = Client::new(
        Config::builder()
            .settings_path(config.path())
            .fallback_path(fallback.path())
            .build(),
    )?;
    let err = client.util().settings().unwrap_err();

    assert_eq!(err.kind(), Kind::ConfigUnavailable);

    Ok(())
}
