//! Backend credential surface and setup validation.
//!
//! The hosted backend is configured through six environment values (loaded
//! from the environment or a `.env` file via dotenvy). [`is_configured`] is
//! the pure predicate that flags placeholder values copied straight out of
//! the setup guide; [`check_setup`] applies it to every required variable.

use std::env;

/// Environment variables the backend client requires.
pub const REQUIRED_ENV_VARS: [&str; 6] = [
    "SKILLSWAP_API_KEY",
    "SKILLSWAP_AUTH_DOMAIN",
    "SKILLSWAP_PROJECT_ID",
    "SKILLSWAP_STORAGE_BUCKET",
    "SKILLSWAP_SENDER_ID",
    "SKILLSWAP_APP_ID",
];

/// Literal placeholder values shipped in the setup guide.
const PLACEHOLDER_VALUES: [&str; 2] = ["your_project_id", "your_api_key_here"];

/// Whether a credential value looks like a real value rather than a
/// placeholder: non-empty, no `your_` fragment, no `...` ellipsis, and not
/// one of the known placeholder strings.
pub fn is_configured(value: &str) -> bool {
    !value.is_empty()
        && !value.contains("your_")
        && !value.contains("...")
        && !PLACEHOLDER_VALUES.contains(&value)
}

/// Configuration state of one required variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupStatus {
    pub name: &'static str,
    pub configured: bool,
}

/// Check every required variable against the current environment.
pub fn check_setup() -> Vec<SetupStatus> {
    REQUIRED_ENV_VARS
        .iter()
        .map(|&name| SetupStatus {
            name,
            configured: env::var(name).is_ok_and(|value| is_configured(&value)),
        })
        .collect()
}
