use crate::models::CanonicalLabel;

/// Affect engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Label taxonomy ----

/// Fixed alias table applied after lower-casing a raw classifier label.
/// `happines` is a misspelling some classifiers emit and must stay as-is.
pub const LABEL_ALIASES: [(&str, &str); 5] = [
    ("angry", "anger"),
    ("disgust", "anger"),
    ("sad", "sadness"),
    ("joy", "happy"),
    ("happines", "happy"),
];

/// Labels counted as negative affect for masking detection.
pub const NEGATIVE_LABELS: [CanonicalLabel; 3] = [
    CanonicalLabel::Sadness,
    CanonicalLabel::Anger,
    CanonicalLabel::Fear,
];

/// Labels counted as positive or neutral affect for masking detection.
pub const POSITIVE_OR_NEUTRAL_LABELS: [CanonicalLabel; 4] = [
    CanonicalLabel::Happy,
    CanonicalLabel::Love,
    CanonicalLabel::Surprise,
    CanonicalLabel::Neutral,
];

// ---- Rounding ----

/// Decimal places kept on drift severity.
pub const DRIFT_SEVERITY_DECIMALS: u32 = 3;

/// Decimal places kept on fusion alignment and stability scores.
pub const FUSION_SCORE_DECIMALS: u32 = 2;

/// Decimal places kept on severity assessment scores.
pub const SEVERITY_SCORE_DECIMALS: u32 = 2;

/// Decimal places kept on average classifier confidence.
pub const CONFIDENCE_DECIMALS: u32 = 2;

// ---- Fixed messages ----

/// Appended to masking details when masking fires.
pub const MASKING_DETAIL: &str =
    "Face shows significant negative emotion while text remains positive/neutral.";

/// Message carried by the insufficient-data fusion result.
pub const INSUFFICIENT_DATA_MESSAGE: &str = "Not enough data for fusion analysis.";

pub const SUMMARY_LOW: &str = "Emotional fluctuations are within normal range.";
/// `{window_days}` is substituted with the analysis window.
pub const SUMMARY_MEDIUM: &str = "Sustained emotional drift detected over {window_days} days.";
pub const SUMMARY_HIGH: &str = "Significant emotional drift combined with high volatility.";
pub const SUMMARY_CRITICAL: &str = "Persistent high-intensity negative patterns detected.";

/// Caveat appended when short-window dampening lowers a high severity.
pub const SHORT_WINDOW_CAVEAT: &str = "Short timeframe limits confidence in high severity.";

// ---- Conversation advice ----

/// Number of trailing classifier results used for the last-message emotion.
pub const LAST_MESSAGE_WINDOW: usize = 5;
