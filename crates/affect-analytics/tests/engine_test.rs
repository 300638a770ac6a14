use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use affect_analytics::{AffectEngine, FusionRequest};
use affect_analytics::{IDriftDetector, IFusionAnalyzer, ISeverityScorer};
use affect_core::config::AffectConfig;
use affect_core::errors::{AffectError, AffectErrorCode, ConfigError};
use affect_core::models::{CanonicalLabel, DriftAlert, EmotionObservation, SeverityLevel};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
}

fn series(start: DateTime<Utc>, label: &str, n: i64, face: bool) -> Vec<EmotionObservation> {
    (0..n)
        .map(|i| {
            let at = start - Duration::minutes(i * 10);
            if face {
                EmotionObservation::face(at, label, 0.8)
            } else {
                EmotionObservation::text(at, label, 0.8)
            }
        })
        .collect()
}

#[test]
fn engine_rejects_invalid_config() {
    let mut config = AffectConfig::default();
    config.severity.high_threshold = 0.9;
    let err = AffectEngine::with_config(config).unwrap_err();
    assert!(matches!(
        err,
        AffectError::Config(ConfigError::ThresholdOrder { .. })
    ));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn engine_rejects_malformed_toml() {
    let err = AffectEngine::from_toml("[drift\ndistance_threshold = ").unwrap_err();
    assert!(err.coded_string().starts_with("[CONFIG_PARSE_ERROR]"));
}

#[test]
fn engine_applies_configured_aliases() {
    let engine = AffectEngine::from_toml(
        r#"
[normalizer.extra_aliases]
glad = "happy"
"#,
    )
    .unwrap();
    assert_eq!(engine.normalize(Some("Glad")), CanonicalLabel::Happy);
    assert_eq!(engine.normalize(Some("joy")), CanonicalLabel::Happy);
    assert_eq!(engine.normalize(None), CanonicalLabel::Unknown);
}

#[test]
fn engine_uses_configured_drift_threshold() {
    let engine = AffectEngine::from_toml("[drift]\ndistance_threshold = 0.05\n").unwrap();
    let old = vec![CanonicalLabel::Happy; 10];
    let mut new = vec![CanonicalLabel::Happy; 9];
    new.push(CanonicalLabel::Fear);
    assert!(engine.detect_drift(&old, &new).drift);
    assert!(!AffectEngine::new().detect_drift(&old, &new).drift);
}

#[test]
fn engine_counts_analyses() {
    let engine = AffectEngine::new();
    let old = vec![CanonicalLabel::Happy; 3];
    let new = vec![CanonicalLabel::Sadness; 3];
    engine.detect_drift(&old, &new);
    engine.detect_drift(&old, &old);

    let drift = engine.detect_drift(&old, &new);
    engine.assess_severity(&drift, 1.0, 7);
    engine.assess_severity(&drift, 1.0, 1);

    let text = series(now(), "happy", 5, false);
    let face = series(now() - Duration::minutes(5), "sadness", 5, true);
    engine.analyze_fusion_at(&text, &face, 7, now());
    engine.analyze_fusion_at(&text, &[], 7, now());

    let metrics = engine.metrics();
    assert_eq!(metrics.drift_checks, 3);
    assert_eq!(metrics.drifts_flagged, 2);
    assert_eq!(metrics.fusion_analyses, 2);
    assert_eq!(metrics.insufficient_data, 1);
    assert_eq!(metrics.masking_detections, 1);
    // Two direct assessments plus one inside fusion.
    assert_eq!(metrics.severity_assessments, 3);
    assert_eq!(metrics.dampened_assessments, 1);
    assert_eq!(metrics.support_recommendations, 1);
}

#[test]
fn batch_results_keep_request_order() {
    let engine = AffectEngine::new();
    let requests: Vec<FusionRequest> = (0..16)
        .map(|i| FusionRequest {
            text: series(now(), "happy", 4, false),
            face: if i % 2 == 0 {
                series(now(), "sadness", 4, true)
            } else {
                Vec::new()
            },
            window_days: 7,
        })
        .collect();

    let outcomes = engine.analyze_fusion_batch(&requests, now());
    assert_eq!(outcomes.len(), requests.len());
    for (i, outcome) in outcomes.iter().enumerate() {
        assert_eq!(outcome.is_analyzed(), i % 2 == 0, "request {i}");
    }
    assert_eq!(engine.metrics().fusion_analyses, 16);
    assert_eq!(engine.metrics().insufficient_data, 8);
}

#[test]
fn default_window_comes_from_config() {
    let engine = AffectEngine::from_toml("[fusion]\ndefault_window_days = 1\n").unwrap();
    let recent = Utc::now() - Duration::hours(2);
    let stale = Utc::now() - Duration::days(3);

    let text = vec![EmotionObservation::text(recent, "happy", 0.9)];
    let face = vec![EmotionObservation::face(stale, "happy", 0.9)];
    assert!(!engine.analyze_fusion_default(&text, &face).is_analyzed());

    let face = vec![EmotionObservation::face(recent, "happy", 0.9)];
    assert!(engine.analyze_fusion_default(&text, &face).is_analyzed());
}

#[test]
fn engine_scans_weekly_timeline_by_default() {
    let engine = AffectEngine::new();
    // Four consecutive weeks starting Monday 2026-03-02.
    let week = |offset: i64, label: &str| {
        EmotionObservation::text(
            Utc.with_ymd_and_hms(2026, 3, 3, 10, 0, 0).unwrap() + Duration::weeks(offset),
            label,
            0.7,
        )
    };
    let observations = vec![
        week(0, "happy"),
        week(1, "happy"),
        week(2, "happy"),
        week(3, "anger"),
    ];

    let windows = engine.build_timeline(&observations);
    assert_eq!(windows.len(), 4);
    assert_eq!(
        windows[0].start,
        Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap()
    );

    let drift = engine.scan_timeline(&observations);
    assert_eq!(drift.scores.len(), 3);
    assert_eq!(drift.flagged().count(), 1);
}

#[test]
fn engine_summarizes_and_advises() {
    let engine = AffectEngine::new();
    let stats = engine.summarize(&series(now(), "Joy", 3, false));
    assert_eq!(stats.dominant, Some(CanonicalLabel::Happy));

    let (summary, advice) = engine
        .advise(&[Some("angry"), None, Some(""), Some("disgust"), Some("sad")])
        .expect("labelled messages");
    assert_eq!(summary.labelled_count, 3);
    assert_eq!(summary.dominant_emotion, CanonicalLabel::Anger);
    assert_eq!(advice.strategy_title, "De-escalation Strategy");
    assert!(engine.advise(&[None, Some("unknown")]).is_none());
}

#[test]
fn drift_alert_only_for_detected_drift() {
    let engine = AffectEngine::new();
    let drift = engine.detect_drift(
        &[CanonicalLabel::Happy, CanonicalLabel::Happy],
        &[CanonicalLabel::Fear],
    );
    let alert = DriftAlert::from_drift("subject-1", &drift, now()).expect("drift fired");
    assert_eq!(alert.subject, "subject-1");
    assert_eq!(alert.from_emotion, Some(CanonicalLabel::Happy));
    assert_eq!(alert.to_emotion, Some(CanonicalLabel::Fear));
    assert_eq!(alert.severity, 1.0);

    let calm = engine.detect_drift(&[CanonicalLabel::Happy], &[CanonicalLabel::Happy]);
    assert!(DriftAlert::from_drift("subject-1", &calm, now()).is_none());
}

#[test]
fn engine_is_usable_through_trait_objects() {
    let engine = Arc::new(AffectEngine::new());
    let scorer: Arc<dyn ISeverityScorer> = engine.clone();
    let detector: Arc<dyn IDriftDetector> = engine.clone();
    let analyzer: Arc<dyn IFusionAnalyzer> = engine.clone();

    let drift = detector.detect_drift(&[CanonicalLabel::Happy], &[CanonicalLabel::Sadness]);
    assert_eq!(
        scorer.assess_severity(&drift, 1.0, 7).level,
        SeverityLevel::Critical
    );
    let text = series(now(), "happy", 2, false);
    assert!(analyzer.analyze_fusion_at(&text, &text, 7, now()).is_analyzed());
    assert_eq!(engine.metrics().drift_checks, 1);
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = Arc::new(AffectEngine::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                engine.detect_drift(&[CanonicalLabel::Happy], &[CanonicalLabel::Love]);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(engine.metrics().drift_checks, 4);
    assert_eq!(engine.metrics().drifts_flagged, 4);
}
