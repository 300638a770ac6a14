// Single source of truth for all default values.

// --- Drift ---
pub const DEFAULT_DRIFT_DISTANCE_THRESHOLD: f64 = 0.3;

// --- Fusion ---
pub const DEFAULT_MASKING_FACE_NEGATIVE_THRESHOLD: f64 = 0.4;
pub const DEFAULT_MASKING_TEXT_POSITIVE_THRESHOLD: f64 = 0.8;
pub const DEFAULT_FUSION_WINDOW_DAYS: u32 = 7;

// --- Severity ---
pub const DEFAULT_DRIFT_WEIGHT: f64 = 0.6;
pub const DEFAULT_VOLATILITY_WEIGHT: f64 = 0.4;
pub const DEFAULT_MEDIUM_THRESHOLD: f64 = 0.3;
pub const DEFAULT_HIGH_THRESHOLD: f64 = 0.6;
pub const DEFAULT_CRITICAL_THRESHOLD: f64 = 0.8;
pub const DEFAULT_SHORT_WINDOW_DAYS: u32 = 3;
pub const DEFAULT_SHORT_WINDOW_DAMPING: f64 = 0.8;

// --- Timeline ---
pub const DEFAULT_TIMELINE_SIGMA: f64 = 1.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
