#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

mod common;

use std::sync::Arc;

use esi_client::client::USER_AGENT_PREFIX;
use esi_client::error::{Kind, Remote};
use esi_client::{Client, Config, EtagCache, Method, Request};
use httpmock::Method::{DELETE, GET, POST};
use httpmock::MockServer;
use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::common::{PROJECT, TOKEN, TempConfig, client};

mod conditional {
    use super::*;

    #[tokio::test]
    async fn status_is_revalidated_with_etag() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, None)?;

        let mut first = server.mock(|when, then| {
            when.method(GET)
                .path("/latest/status/")
                .query_param("datasource", "tranquility")
                .query_param("language", "en-us");
            then.status(StatusCode::OK)
                .header("etag", "\"v1\"")
                .json_body(json!({ "players": 23061 }));
        });

        let response = client.status().status().await?;
        assert_eq!(response.data, json!({ "players": 23061 }));
        assert_eq!(response.etag(), Some("\"v1\""));
        first.assert();
        first.delete();

        let stats = client.util().cache_stats();
        assert_eq!(stats.size, 1);
        assert_eq!(stats.entries[0].etag, "\"v1\"");
        let stored_at = stats.entries[0].timestamp;

        let revalidated = server.mock(|when, then| {
            when.method(GET)
                .path("/latest/status/")
                .header("if-none-match", "\"v1\"");
            then.status(StatusCode::NOT_MODIFIED);
        });

        let cached = client.status().status().await?;
        revalidated.assert();
        assert_eq!(cached, response);

        // 304 does not store again
        let stats = client.util().cache_stats();
        assert_eq!(stats.size, 1);
        assert_eq!(stats.entries[0].timestamp, stored_at);

        Ok(())
    }

    #[tokio::test]
    async fn not_modified_without_entry_returns_no_data() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, None)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/latest/status/");
            then.status(StatusCode::NOT_MODIFIED)
                .header("x-esi-request-id", "abc");
        });

        let response = client.status().status().await?;

        mock.assert();
        assert_eq!(response.data, Value::Null);
        assert_eq!(response.header("x-esi-request-id"), Some("abc"));
        assert!(client.util().cache_stats().keys.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn responses_without_etag_are_not_cached() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, None)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/latest/incursions/");
            then.status(StatusCode::OK).json_body(json!([]));
        });

        client.incursions().incursions().await?;
        client.incursions().incursions().await?;

        mock.assert_calls(2);
        assert!(client.cache().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn cleared_entry_is_fetched_again() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, None)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/latest/universe/races/");
            then.status(StatusCode::OK)
                .header("etag", "\"r1\"")
                .json_body(json!([{ "race_id": 1 }]));
        });

        client.universe().races().await?;
        let key = client.util().cache_stats().keys[0].clone();
        assert!(key.starts_with("GET_"));
        assert!(key.contains("/latest/universe/races/?datasource=tranquility"));

        assert_eq!(client.util().clear_cache(Some(&key)), 1);
        assert_eq!(client.util().clear_cache(Some(&key)), 0);

        client.universe().races().await?;
        mock.assert_calls(2);

        Ok(())
    }

    #[tokio::test]
    async fn clients_can_share_a_cache() -> anyhow::Result<()> {
        let server = MockServer::start();
        let cache = Arc::new(EtagCache::new());
        let (_, config) = client(&server, None)?;
        let first = Client::with_cache(
            Config::builder().settings_path(config.path()).build(),
            Arc::clone(&cache),
        )?;
        let second = Client::with_cache(
            Config::builder().settings_path(config.path()).build(),
            Arc::clone(&cache),
        )?;

        server.mock(|when, then| {
            when.method(GET).path("/latest/status/");
            then.status(StatusCode::OK)
                .header("etag", "\"v1\"")
                .json_body(json!({ "players": 1 }));
        });

        first.status().status().await?;

        assert_eq!(second.util().cache_stats().size, 1);
        assert_eq!(cache.len(), 1);

        Ok(())
    }
}

mod auth {
    use super::*;

    #[tokio::test]
    async fn token_is_sent_as_header_and_query() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, Some(TOKEN))?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/latest/characters/90000001/wallet/")
                .query_param("token", TOKEN)
                .header("authorization", format!("Bearer {TOKEN}"));
            then.status(StatusCode::OK).json_body(json!(1_000_000.5));
        });

        let response = client.wallet().character().balance(90_000_001).await?;

        mock.assert();
        assert_eq!(response.data, json!(1_000_000.5));

        Ok(())
    }

    #[tokio::test]
    async fn missing_token_fails_without_network() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, None)?;

        let mock = server.mock(|when, then| {
            when.path("/latest/characters/90000001/skillqueue/");
            then.status(StatusCode::OK).json_body(json!([]));
        });

        let err = client.skills().queue(90_000_001).await.unwrap_err();

        assert_eq!(err.kind(), Kind::AuthRequired);
        mock.assert_calls(0);

        Ok(())
    }

    #[tokio::test]
    async fn public_endpoints_do_not_send_token() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, Some(TOKEN))?;

        let leaked = server.mock(|when, then| {
            when.query_param_exists("token");
            then.status(StatusCode::BAD_REQUEST);
        });
        let public = server.mock(|when, then| {
            when.method(GET).path("/latest/alliances/");
            then.status(StatusCode::OK).json_body(json!([99_000_006]));
        });

        client.alliance().alliances().await?;

        public.assert();
        leaked.assert_calls(0);

        Ok(())
    }
}

mod errors {
    use super::*;

    #[tokio::test]
    async fn remote_error_carries_message_and_redacted_url() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, Some(TOKEN))?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/latest/characters/90000001/assets/");
            then.status(StatusCode::FORBIDDEN).json_body(json!({
                "error": "token is not valid for scope(s): esi-assets.read_assets.v1"
            }));
        });

        let err = client
            .character()
            .assets()
            .assets(90_000_001)
            .await
            .unwrap_err();

        mock.assert();
        assert_eq!(err.kind(), Kind::Remote);

        let remote = err.downcast_ref::<Remote>().unwrap();
        assert_eq!(remote.status_code, StatusCode::FORBIDDEN);
        assert_eq!(remote.method, Method::Get);
        assert_eq!(
            remote.message,
            "token is not valid for scope(s): esi-assets.read_assets.v1"
        );

        let url = err.url().unwrap();
        assert!(url.contains("/latest/characters/90000001/assets/?datasource=tranquility"));
        assert!(!url.contains(TOKEN), "{url} leaks the token");
        assert!(!err.to_string().contains(TOKEN));

        Ok(())
    }

    #[tokio::test]
    async fn remote_error_without_json_uses_status_text() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, None)?;

        server.mock(|when, then| {
            when.method(GET).path("/latest/status/");
            then.status(StatusCode::BAD_GATEWAY).body("<html>upstream</html>");
        });

        let err = client.status().status().await.unwrap_err();
        let remote = err.downcast_ref::<Remote>().unwrap();

        assert_eq!(remote.message, "Bad Gateway");
        assert!(client.cache().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() -> anyhow::Result<()> {
        let config = TempConfig::new();
        config.write(&json!({
            "authToken": TOKEN,
            "language": "",
            "link": "http://127.0.0.1:1/latest/",
            "projectName": ""
        }));
        let client = Client::new(Config::builder().settings_path(config.path()).build())?;

        let err = client.location().online(90_000_001).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Transport);
        assert_eq!(
            err.url(),
            Some("http://127.0.0.1:1/latest/characters/90000001/online/?datasource=tranquility")
        );
        assert!(!err.to_string().contains(TOKEN));

        Ok(())
    }

    #[tokio::test]
    async fn link_without_scheme_is_internal_error() -> anyhow::Result<()> {
        let config = TempConfig::new();
        config.write(&json!({
            "authToken": "",
            "language": "en/us",
            "link": "esi.evetech.net/latest/",
            "projectName": ""
        }));
        let client = Client::new(Config::builder().settings_path(config.path()).build())?;

        let err = client.status().status().await.unwrap_err();

        assert_eq!(err.kind(), Kind::Internal);
        assert!(err.url().is_none());
        assert!(
            err.to_string().contains("esi.evetech.net/latest/"),
            "error should name the configured link: {err}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn reserved_characters_in_arguments_keep_datasource() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, None)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .query_param("datasource", "tranquility")
                .query_param("language", "en-us");
            then.status(StatusCode::OK).json_body(json!({ "killmail_id": 1 }));
        });

        client.killmails().info(1, "ab?c#d").await?;

        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn non_object_query_is_internal_error() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, None)?;

        let err = client
            .execute(&Request::builder().path("wars").query(json!("max_war_id=1")).build())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), Kind::Internal);

        Ok(())
    }
}

mod methods {
    use super::*;

    #[tokio::test]
    async fn post_sends_json_body_and_is_not_cached() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, None)?;

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/latest/characters/affiliation/")
                .json_body(json!([2_112_625_428, 95_465_499]));
            then.status(StatusCode::OK)
                .header("etag", "\"a1\"")
                .json_body(json!([
                    { "character_id": 2_112_625_428, "corporation_id": 98_000_001 }
                ]));
        });

        let response = client
            .character()
            .affiliation(&[2_112_625_428, 95_465_499])
            .await?;

        mock.assert();
        assert_eq!(response.data[0]["corporation_id"], 98_000_001);
        assert!(client.cache().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn delete_carries_query() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, Some(TOKEN))?;

        let mock = server.mock(|when, then| {
            when.method(DELETE)
                .path("/latest/characters/90000001/contacts/")
                .query_param("contact_ids", "1,2");
            then.status(StatusCode::NO_CONTENT);
        });

        let response = client.character().contacts().delete(90_000_001, &[1, 2]).await?;

        mock.assert();
        assert_eq!(response.data, Value::Null);

        Ok(())
    }

    #[tokio::test]
    async fn delete_may_carry_a_body() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, None)?;

        let mock = server.mock(|when, then| {
            when.method(DELETE)
                .path("/latest/fittings/")
                .json_body(json!({ "fitting_id": 7 }));
            then.status(StatusCode::NO_CONTENT);
        });

        client
            .execute(
                &Request::builder()
                    .path("fittings")
                    .method(Method::Delete)
                    .body(json!({ "fitting_id": 7 }))
                    .build(),
            )
            .await?;

        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn get_never_sends_a_body() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, None)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/latest/status/").body("");
            then.status(StatusCode::OK).json_body(json!({}));
        });

        client
            .execute(
                &Request::builder()
                    .path("status")
                    .body(json!({ "ignored": true }))
                    .build(),
            )
            .await?;

        mock.assert();

        Ok(())
    }
}

mod headers {
    use super::*;

    #[tokio::test]
    async fn identifies_project_and_language() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, None)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/latest/status/")
                .header("user-agent", format!("{USER_AGENT_PREFIX} (for: {PROJECT})"))
                .header("accept-language", "en-us")
                .header("accept", "application/json");
            then.status(StatusCode::OK).json_body(json!({}));
        });

        client.status().status().await?;
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn user_agent_override() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (_, config) = client(&server, None)?;
        let client = Client::new(
            Config::builder()
                .settings_path(config.path())
                .user_agent("killboard/2.0 (ops@example.com)")
                .build(),
        )?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/latest/status/")
                .header("user-agent", "killboard/2.0 (ops@example.com)");
            then.status(StatusCode::OK).json_body(json!({}));
        });

        client.status().status().await?;
        mock.assert();

        Ok(())
    }
}

mod concurrency {
    use futures_util::future::join_all;

    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_requests_each_populate_the_cache() -> anyhow::Result<()> {
        let server = MockServer::start();
        let (client, _config) = client(&server, None)?;

        let ids: Vec<i64> = (30_000_001..30_000_017).collect();
        let mocks: Vec<_> = ids
            .iter()
            .map(|id| {
                server.mock(|when, then| {
                    when.method(GET).path(format!("/latest/universe/systems/{id}/"));
                    then.status(StatusCode::OK)
                        .header("etag", format!("\"{id}\""))
                        .json_body(json!({ "system_id": id }));
                })
            })
            .collect();

        let systems = client.universe().systems();
        let responses = join_all(ids.iter().map(|id| systems.system(*id))).await;

        for (id, response) in ids.iter().zip(&responses) {
            assert_eq!(response.as_ref().unwrap().data["system_id"], *id);
        }
        for mock in &mocks {
            mock.assert();
        }
        assert_eq!(client.util().cache_stats().size, ids.len());

        Ok(())
    }
}
