use crate::constants::DEFAULT_JARO_WINKLER_CONFIG;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JaroWinklerConfig {
    /// How strongly a shared prefix (up to four characters) boosts the Jaro distance.
    ///
    /// Values above `0.25` can push scores past `1.0`.
    pub prefix_scaling_factor: f64,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        DEFAULT_JARO_WINKLER_CONFIG
    }
}
