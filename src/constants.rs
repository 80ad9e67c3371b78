// src/constants.rs
//
// Application-wide constants shared between configuration and transport.

/// Value shipped in a freshly written config file.
///
/// An endpoint still equal to this is treated exactly like a missing one.
///
/// Used in: `infrastructure/config.rs`, `infrastructure/http.rs`
pub const ENDPOINT_PLACEHOLDER: &str = "PASTE_YOUR_APPS_SCRIPT_WEB_APP_URL_HERE";

/// Transport timeout for a single request, in seconds.
///
/// There is no retry; a request that hangs keeps its control in flight until
/// this elapses.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable consulted when `--endpoint` is not given.
///
/// Used in: `cli/args.rs`
pub const ENDPOINT_ENV_VAR: &str = "TERMSYNC_ENDPOINT";

/// Directory below the platform config dir holding `config.toml`.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_DIR_NAME: &str = "termsync";
