//! Session configuration from the environment.

pub const SEED_DEMO_VAR: &str = "SMARTWASTE_SEED_DEMO";
pub const TOP_URGENT_VAR: &str = "SMARTWASTE_TOP_URGENT";

/// Dashboard "top urgent items" list length.
pub const DEFAULT_TOP_URGENT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Start the session with the demo items.
    pub seed_demo: bool,
    /// How many items the dashboard's urgent list shows.
    pub top_urgent: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed_demo: true,
            top_urgent: DEFAULT_TOP_URGENT,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys use defaults; unparsable values
    /// are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed_demo = match lookup(SEED_DEMO_VAR) {
            None => defaults.seed_demo,
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                tracing::warn!(var = SEED_DEMO_VAR, value = %raw, "not a boolean; using default");
                defaults.seed_demo
            }),
        };

        let top_urgent = match lookup(TOP_URGENT_VAR) {
            None => defaults.top_urgent,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    tracing::warn!(
                        var = TOP_URGENT_VAR,
                        value = %raw,
                        "not a positive integer; using default"
                    );
                    defaults.top_urgent
                }
            },
        };

        Self {
            seed_demo,
            top_urgent,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
