//! Exercises the top-level entry points against the real process environment,
//! populated from `tests/data/.test.env`.

mod common;

use docker_secrets::{SecretsError, get_secret, list_identifiers, resolve, resolve_blocking};
use indexmap::IndexMap;

use common::{init_tracing_once, load_test_env};

fn setup() {
    init_tracing_once();
    load_test_env();
}

#[tokio::test]
async fn resolves_list_of_path_variables() {
    setup();

    let secrets = resolve(["SECRET1_PATH", "SECRET2_PATH", "SECRET3_PATH"], false)
        .await
        .unwrap();

    assert_eq!(get_secret(&secrets, "SECRET1_PATH").unwrap(), "secret1");
    assert_eq!(get_secret(&secrets, "SECRET2_PATH").unwrap(), "secret2");
    assert_eq!(get_secret(&secrets, "SECRET3_PATH").unwrap(), "secret3");
    assert_eq!(
        list_identifiers(&secrets),
        vec!["SECRET1_PATH", "SECRET2_PATH", "SECRET3_PATH"]
    );
}

#[tokio::test]
async fn missing_keys_are_left_out() {
    setup();

    let secrets = resolve(
        ["SECRET1_PATH", "MISSING_KEY_PATH", "MISSING_FILE_PATH", "EMPTY_PATH"],
        false,
    )
    .await
    .unwrap();

    assert_eq!(list_identifiers(&secrets), vec!["SECRET1_PATH"]);
    assert_eq!(
        get_secret(&secrets, "MISSING_KEY_PATH"),
        Err(SecretsError::NotFound("MISSING_KEY_PATH".to_string()))
    );
}

#[tokio::test]
async fn map_input_with_env_fallback() {
    setup();
    let keys: IndexMap<String, String> = [
        ("SECRET1", "SECRET1_PATH"),
        ("SECRET2", "SECRET2_PATH"),
        ("SECRET3", "SECRET3_PATH"),
        ("SECRET_ONLY_IN_ENV", "SECRET_ONLY_IN_ENV_PATH"),
        ("MISSING_KEY", "MISSING_KEY_PATH"),
    ]
    .into_iter()
    .map(|(id, key)| (id.to_string(), key.to_string()))
    .collect();

    let without = resolve(keys.clone(), false).await.unwrap();
    assert_eq!(list_identifiers(&without), vec!["SECRET1", "SECRET2", "SECRET3"]);

    let with = resolve(keys, true).await.unwrap();
    assert_eq!(
        list_identifiers(&with),
        vec!["SECRET1", "SECRET2", "SECRET3", "SECRET_ONLY_IN_ENV"]
    );
    // SECRET2 is also set directly, but the file wins.
    assert_eq!(get_secret(&with, "SECRET2").unwrap(), "secret2");
    assert_eq!(get_secret(&with, "SECRET_ONLY_IN_ENV").unwrap(), "secret4");
    assert!(get_secret(&with, "MISSING_KEY").is_err());
}

#[test]
fn blocking_entry_point_matches_scenarios() {
    setup();

    let secrets = resolve_blocking(["SECRET1_PATH"], false).unwrap();
    assert_eq!(get_secret(&secrets, "SECRET1_PATH").unwrap(), "secret1");

    let secrets = resolve_blocking(["X"], true).unwrap();
    assert_eq!(get_secret(&secrets, "X").unwrap(), "direct");

    let secrets = resolve_blocking(["X"], false).unwrap();
    assert!(list_identifiers(&secrets).is_empty());
    assert_eq!(
        get_secret(&secrets, "X"),
        Err(SecretsError::NotFound("X".to_string()))
    );
}

#[test]
fn blocking_entry_point_rejects_empty_input() {
    setup();

    let result = resolve_blocking(Vec::<&str>::new(), true);

    assert!(matches!(result, Err(SecretsError::InvalidInput(_))));
}

#[test]
fn resolver_from_env_keeps_fallback_off_without_flag() {
    setup();

    let secrets = docker_secrets::SecretResolver::from_env()
        .resolve_blocking(["X"])
        .unwrap();

    assert!(secrets.is_empty());
}
