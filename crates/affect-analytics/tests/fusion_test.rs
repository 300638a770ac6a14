use chrono::{DateTime, Duration, TimeZone, Utc};

use affect_analytics::fusion::{analyze_fusion_at, evaluate};
use affect_analytics::Normalizer;
use affect_core::config::AffectConfig;
use affect_core::constants::{INSUFFICIENT_DATA_MESSAGE, MASKING_DETAIL};
use affect_core::models::{EmotionObservation, FusionOutcome, Modality, SeverityLevel};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
}

fn text_at(minutes_ago: i64, label: &str) -> EmotionObservation {
    EmotionObservation::text(now() - Duration::minutes(minutes_ago), label, 0.9)
}

fn face_at(minutes_ago: i64, label: &str) -> EmotionObservation {
    EmotionObservation::face(now() - Duration::minutes(minutes_ago), label, 0.9)
}

fn run(
    text: &[EmotionObservation],
    face: &[EmotionObservation],
    window_days: u32,
) -> FusionOutcome {
    analyze_fusion_at(
        text,
        face,
        window_days,
        now(),
        &Normalizer::new(),
        &AffectConfig::default(),
    )
}

#[test]
fn happy_text_against_sad_face_is_masking() {
    // Ten of each over the last day, face half an hour before each text.
    let text: Vec<_> = (1..=10).map(|h| text_at(h * 60, "happy")).collect();
    let face: Vec<_> = (1..=10).map(|h| face_at(h * 60 + 30, "sadness")).collect();

    let outcome = run(&text, &face, 7);
    let result = outcome.result().expect("both channels have data");

    assert_eq!(result.alignment_score, 0.0);
    assert!(result.masking_detected);
    assert_eq!(result.masking_details, vec![MASKING_DETAIL.to_string()]);
    assert_eq!(result.dominant_modality, Modality::Text);

    // Strict alternation: every adjacent pair switches.
    assert_eq!(result.stability_score, 0.0);
    // Both halves hold five of each label, so drift is zero and
    // severity comes from volatility alone: 0.4 * 1.0.
    assert_eq!(result.severity.level, SeverityLevel::Medium);
    assert_eq!(result.severity.score, 0.4);
    assert!(!result.severity.recommend_support);
    assert_eq!(
        result.severity.summary,
        "Sustained emotional drift detected over 7 days."
    );
}

#[test]
fn empty_channel_yields_insufficient_data() {
    let text = vec![text_at(10, "happy")];
    for outcome in [run(&text, &[], 7), run(&[], &text, 7), run(&[], &[], 7)] {
        assert!(!outcome.is_analyzed());
        assert_eq!(outcome, FusionOutcome::insufficient(INSUFFICIENT_DATA_MESSAGE));
        assert_eq!(outcome.alignment_score(), 0.0);
        assert_eq!(outcome.stability_score(), 0.0);
        assert!(!outcome.masking_detected());
    }
}

#[test]
fn window_cutoff_is_inclusive() {
    let text = vec![text_at(60, "happy")];
    let on_boundary = vec![face_at(7 * 24 * 60, "happy")];
    assert!(run(&text, &on_boundary, 7).is_analyzed());

    let past_boundary = vec![EmotionObservation::face(
        now() - Duration::days(7) - Duration::seconds(1),
        "happy",
        0.9,
    )];
    assert!(!run(&text, &past_boundary, 7).is_analyzed());
}

#[test]
fn stale_observations_are_dropped_before_analysis() {
    // The old sad face entry falls outside a one-day window.
    let text = vec![text_at(60, "happy"), text_at(30, "happy")];
    let face = vec![face_at(3 * 24 * 60, "sadness"), face_at(45, "happy")];

    let result = run(&text, &face, 1);
    let result = result.result().expect("analyzed");
    assert_eq!(result.alignment_score, 1.0);
    assert!(!result.masking_detected);
    assert_eq!(result.stability_score, 1.0);
    assert_eq!(result.severity.level, SeverityLevel::Low);
}

#[test]
fn all_neutral_channels_fall_back_to_synthetic_neutral() {
    let text = vec![text_at(60, "neutral"), text_at(50, "Neutral")];
    let face = vec![face_at(40, "neutral")];

    let outcome = run(&text, &face, 7);
    let result = outcome.result().expect("analyzed");
    assert_eq!(result.alignment_score, 1.0);
    assert!(!result.masking_detected);
}

#[test]
fn neutral_only_text_does_not_align_with_happy_face() {
    let text = vec![text_at(60, "neutral")];
    let face = vec![face_at(40, "happy")];
    assert_eq!(run(&text, &face, 7).alignment_score(), 0.0);
}

#[test]
fn neutral_is_excluded_from_masking_shares() {
    // Text working set is {happy: 1.0}; face is {sadness: 0.5, happy: 0.5}.
    let text = vec![
        text_at(90, "neutral"),
        text_at(80, "neutral"),
        text_at(70, "happy"),
    ];
    let face = vec![face_at(60, "sad"), face_at(50, "joy")];

    let outcome = run(&text, &face, 7);
    assert!(outcome.masking_detected());
    assert_eq!(outcome.alignment_score(), 0.5);
}

#[test]
fn masking_thresholds_are_strict() {
    // Text positive share is exactly 0.8.
    let text = vec![
        text_at(90, "happy"),
        text_at(80, "happy"),
        text_at(70, "happy"),
        text_at(60, "happy"),
        text_at(50, "anger"),
    ];
    let face = vec![face_at(40, "fear")];
    let outcome = run(&text, &face, 7);
    assert!(!outcome.masking_detected());
    assert!(outcome.result().expect("analyzed").masking_details.is_empty());
}

#[test]
fn face_dominates_only_with_more_observations() {
    let text = vec![text_at(60, "happy")];
    let face = vec![face_at(50, "happy"), face_at(40, "happy")];
    let result = run(&text, &face, 7);
    assert_eq!(
        result.result().expect("analyzed").dominant_modality,
        Modality::Face
    );

    let result = run(&face, &text, 7);
    assert_eq!(
        result.result().expect("analyzed").dominant_modality,
        Modality::Text
    );
}

#[test]
fn equal_timestamps_keep_text_before_face() {
    // Merged stream: text happy, face sadness, text happy. Two switches.
    let text = vec![text_at(10, "happy"), text_at(5, "happy")];
    let face = vec![face_at(10, "sadness")];
    let result = run(&text, &face, 7);
    assert_eq!(result.stability_score(), 0.0);

    // Merged stream: text sadness, face happy, face happy. One switch.
    let text = vec![text_at(10, "sadness")];
    let face = vec![face_at(10, "happy"), face_at(5, "happy")];
    assert_eq!(run(&text, &face, 7).stability_score(), 0.5);
}

#[test]
fn evaluation_reports_dampening() {
    // Positive text early, negative face late: the midpoint split sees a
    // full dominant flip with a stable stream.
    let text: Vec<_> = (0..4).map(|i| text_at(600 - i * 10, "happy")).collect();
    let face: Vec<_> = (0..4).map(|i| face_at(60 - i * 10, "sadness")).collect();

    let evaluation = evaluate(
        &text,
        &face,
        1,
        now(),
        &Normalizer::new(),
        &AffectConfig::default(),
    );
    let result = evaluation.outcome.result().expect("analyzed");
    // base = 0.6 * 1.0 + 0.4 * (1 - 6/7) ≈ 0.657 → HIGH, dampened.
    assert!(evaluation.severity_dampened);
    assert_eq!(result.severity.level, SeverityLevel::Medium);
    assert!(!result.severity.recommend_support);
    assert_eq!(result.stability_score, 0.86);
}

#[test]
fn fusion_result_serializes_flat() {
    let text = vec![text_at(60, "happy")];
    let face = vec![face_at(50, "happy")];
    let value = serde_json::to_value(run(&text, &face, 7)).expect("serializes");
    assert_eq!(value["dominant_modality"], "Text");
    assert_eq!(value["severity"]["level"], "LOW");
    assert!(value.get("message").is_none());

    let insufficient = serde_json::to_value(run(&text, &[], 7)).expect("serializes");
    assert_eq!(insufficient["message"], INSUFFICIENT_DATA_MESSAGE);
}

#[test]
fn masking_rule_on_explicit_distributions() {
    use affect_analytics::fusion::masking::detect_masking;
    use affect_core::config::FusionConfig;
    use affect_core::models::{CanonicalLabel, EmotionDistribution};

    let text = EmotionDistribution::from_entries(vec![
        (CanonicalLabel::Happy, 0.85),
        (CanonicalLabel::Neutral, 0.15),
    ]);
    let face = EmotionDistribution::from_entries(vec![
        (CanonicalLabel::Sadness, 0.5),
        (CanonicalLabel::Happy, 0.5),
    ]);
    let verdict = detect_masking(&text, &face, &FusionConfig::default());
    assert!(verdict.detected);
    assert_eq!(verdict.face_negative_share, 0.5);
    assert_eq!(verdict.details, vec![MASKING_DETAIL.to_string()]);

    let calmer_face = EmotionDistribution::from_entries(vec![
        (CanonicalLabel::Sadness, 0.3),
        (CanonicalLabel::Happy, 0.7),
    ]);
    let verdict = detect_masking(&text, &calmer_face, &FusionConfig::default());
    assert!(!verdict.detected);
    assert!(verdict.details.is_empty());
}

#[test]
fn stability_rounds_exact_halves_to_even() {
    // Merged stream: happy x3, sadness x3, happy x2, fear. Three switches
    // over eight pairs: 0.625.
    let text = vec![
        text_at(90, "happy"),
        text_at(80, "happy"),
        text_at(70, "happy"),
        text_at(30, "happy"),
        text_at(20, "happy"),
    ];
    let face = vec![
        face_at(60, "sadness"),
        face_at(50, "sadness"),
        face_at(40, "sadness"),
        face_at(10, "fear"),
    ];
    assert_eq!(run(&text, &face, 7).stability_score(), 0.62);
}

#[test]
fn unbounded_window_keeps_every_observation() {
    let text = vec![EmotionObservation::text(
        now() - Duration::days(365 * 50),
        "happy",
        0.9,
    )];
    let face = vec![face_at(10, "happy")];

    let outcome = run(&text, &face, u32::MAX);
    assert!(outcome.is_analyzed());
    assert_eq!(outcome.alignment_score(), 1.0);
}
