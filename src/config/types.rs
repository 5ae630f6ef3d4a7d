use std::time::Duration;

use url::Url;

/// Root of the catalog site searches are sent to
const DEFAULT_BASE_URL: &str = "https://www.novelupdates.com/";

/// Where searches are sent and how the client identifies itself
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Base URL of the catalog site; search pages live under `page/{n}/`
    pub base_url: Url,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL parses"),
            user_agent: format!("noveldex/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl SiteConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            ..Default::default()
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Tuning knobs for a single search crawl
///
/// The raw values are accepted as-is; the accessors apply the
/// normalization rules the crawl actually runs with.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum results collected from each results page; 0 means unlimited
    pub max_results: u32,

    /// Seconds to pause at every politeness stop
    pub sleep_time: f64,

    /// Number of fetches between politeness pauses
    pub interval: i32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: 1,
            sleep_time: 7.0,
            interval: 4,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_sleep_time(mut self, sleep_time: f64) -> Self {
        self.sleep_time = sleep_time;
        self
    }

    pub fn with_interval(mut self, interval: i32) -> Self {
        self.interval = interval;
        self
    }

    /// Pause cadence with degenerate values ruled out: 0 behaves as 1 and
    /// a negative interval as its absolute value.
    pub fn normalized_interval(&self) -> u32 {
        match self.interval.unsigned_abs() {
            0 => 1,
            n => n,
        }
    }

    /// Length of one politeness pause
    pub fn sleep_duration(&self) -> Duration {
        Duration::from_secs_f64(self.sleep_time.max(0.0))
    }

    /// The result cap with 0 mapped to the unlimited sentinel
    pub fn result_cap(&self) -> ResultCap {
        match self.max_results {
            0 => ResultCap::Unlimited,
            n => ResultCap::Capped(n as usize),
        }
    }
}

/// Cap on collected results, keeping "no maximum" distinct from any
/// literal count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCap {
    Unlimited,
    Capped(usize),
}

impl ResultCap {
    /// The numeric limit, or `None` when unlimited
    pub fn limit(&self) -> Option<usize> {
        match self {
            ResultCap::Unlimited => None,
            ResultCap::Capped(n) => Some(*n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = SearchOptions::default();
        assert_eq!(options.max_results, 1);
        assert_eq!(options.sleep_time, 7.0);
        assert_eq!(options.interval, 4);
    }

    #[test]
    fn test_zero_interval_behaves_as_one() {
        let options = SearchOptions::new().with_interval(0);
        assert_eq!(options.normalized_interval(), 1);
    }

    #[test]
    fn test_negative_interval_behaves_as_absolute_value() {
        let options = SearchOptions::new().with_interval(-3);
        assert_eq!(options.normalized_interval(), 3);
        assert_eq!(
            options.normalized_interval(),
            SearchOptions::new().with_interval(3).normalized_interval()
        );
    }

    #[test]
    fn test_zero_max_results_is_unlimited() {
        let options = SearchOptions::new().with_max_results(0);
        assert_eq!(options.result_cap(), ResultCap::Unlimited);
        assert_eq!(options.result_cap().limit(), None);
    }

    #[test]
    fn test_nonzero_max_results_is_capped() {
        let options = SearchOptions::new().with_max_results(5);
        assert_eq!(options.result_cap(), ResultCap::Capped(5));
        assert_eq!(options.result_cap().limit(), Some(5));
    }

    #[test]
    fn test_negative_sleep_time_clamps_to_zero() {
        let options = SearchOptions::new().with_sleep_time(-2.0);
        assert_eq!(options.sleep_duration(), Duration::ZERO);
    }

    #[test]
    fn test_site_config_defaults() {
        let site = SiteConfig::default();
        assert_eq!(site.base_url.as_str(), "https://www.novelupdates.com/");
        assert!(site.user_agent.starts_with("noveldex/"));
    }

    #[test]
    fn test_site_config_user_agent_override() {
        let site = SiteConfig::default().with_user_agent("custom/2.0");
        assert_eq!(site.user_agent, "custom/2.0");
    }
}
