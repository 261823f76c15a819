/// Decimal precision for derived return values
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Minimum number of points a window needs before a return can be derived
pub const MIN_SERIES_POINTS: usize = 2;

/// Prefix shared by all settings environment variables
pub const ENV_PREFIX: &str = "PULSEFOLIO_";
