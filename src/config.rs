//! Client Configuration
//!
//! Build-time settings, provided to the view tree via context.

/// Compile-time override for the task store location
const API_BASE_OVERRIDE: Option<&str> = option_env!("TASK_API_BASE");
/// Compile-time pause after a list fetch, in milliseconds
const LIST_PACING_OVERRIDE: Option<&str> = option_env!("TASK_LIST_PACING_MS");

/// Default lifetime of a notice, in milliseconds
pub const DEFAULT_NOTICE_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the task store, without trailing slash
    pub api_base: String,
    /// Pause after a successful list fetch (0 = off)
    pub list_pacing_ms: u32,
    /// How long notices stay on screen
    pub notice_ms: u32,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: normalize_base(&api_base.into()),
            list_pacing_ms: 0,
            notice_ms: DEFAULT_NOTICE_MS,
        }
    }

    /// Resolve the configuration for the running page
    pub fn from_build() -> Self {
        let mut config = match API_BASE_OVERRIDE {
            Some(base) if !base.trim().is_empty() => Self::new(base),
            _ => Self::new(page_origin()),
        };
        config.list_pacing_ms = parse_ms(LIST_PACING_OVERRIDE);
        config
    }

    /// Absolute URL of a store path such as `/task`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

/// Unset or unparsable values mean no pause
fn parse_ms(value: Option<&str>) -> u32 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
