//! `call_api` against the real process environment.
//!
//! Kept in its own test binary with a single test: removing a variable is
//! only sound while no other thread reads the environment, and every other
//! test that builds an HTTP client does (proxy lookup).

use keyprobe_api::call_api;
use keyprobe_types::{ConfigError, ProbeError};

#[tokio::test(flavor = "current_thread")]
async fn test_call_api_without_token_is_config_error() {
    // SAFETY: this binary runs one test on a current-thread runtime and
    // nothing has been spawned yet, so no other thread touches the environment.
    unsafe {
        std::env::remove_var("ANTHROPIC_AUTH_TOKEN");
        // Nothing listens here if a request were ever attempted.
        std::env::set_var("ANTHROPIC_BASE_URL", "http://127.0.0.1:9");
    }

    let err = call_api("What is 2+2?").await.unwrap_err();

    match err {
        ProbeError::Config(ConfigError::MissingKey { key, .. }) => {
            assert_eq!(key, "ANTHROPIC_AUTH_TOKEN");
        }
        other => panic!("expected MissingKey, got: {other:?}"),
    }
}
