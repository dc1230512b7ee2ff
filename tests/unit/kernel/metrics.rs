use super::*;

#[test]
fn defaults_hold_all_counters_at_zero() {
    let metrics = DebugMetrics::default();
    assert_eq!(metrics.len(), DEFAULT_COUNTERS.len());
    for name in DEFAULT_COUNTERS {
        assert_eq!(metrics.get(name), Some(0.0));
    }
}

#[test]
fn merge_keeps_unspecified_keys() {
    let mut metrics = DebugMetrics::default();
    metrics.merge(&MetricsPatch::from([("a", 1.0)]));
    metrics.merge(&MetricsPatch::from([("b", 2.0)]));

    assert_eq!(metrics.get("a"), Some(1.0));
    assert_eq!(metrics.get("b"), Some(2.0));
    assert_eq!(metrics.fps(), 0.0);
    assert_eq!(metrics.len(), DEFAULT_COUNTERS.len() + 2);
}

#[test]
fn later_patch_entries_win() {
    let patch = MetricsPatch::new().with(FPS, 30.0).with(FPS, 60.0);
    let metrics = DebugMetrics::default().merged(&patch);
    assert_eq!(metrics.fps(), 60.0);
}

#[test]
fn merged_leaves_the_original_untouched() {
    let base = DebugMetrics::default();
    let next = base.merged(&MetricsPatch::from([(NODES, 5.0)]));
    assert_eq!(base.nodes(), 0.0);
    assert_eq!(next.nodes(), 5.0);
}

#[test]
fn equality_treats_nan_as_a_value() {
    let nan = DebugMetrics::default().merged(&MetricsPatch::from([(FPS, f64::NAN)]));
    assert_eq!(nan, nan.clone());
    assert_ne!(nan, DebugMetrics::default());

    let other_key = DebugMetrics::default().merged(&MetricsPatch::from([("x", f64::NAN)]));
    assert_ne!(nan, other_key);
}

#[test]
fn metrics_serialize_as_a_flat_map() {
    let metrics = DebugMetrics::default().merged(&MetricsPatch::from([(FPS, 60.0)]));
    let value = serde_json::to_value(&metrics).unwrap();
    assert_eq!(value["fps"], 60.0);
    assert_eq!(value["extDepsIssues"], 0.0);
}

#[test]
fn frame_counter_reports_zero_until_two_frames() {
    let mut counter = FrameCounter::default();
    assert_eq!(counter.fps(), 0.0);
    assert_eq!(counter.tick(Instant::now()), 0.0);
}

#[test]
fn frame_counter_estimates_rate_within_window() {
    let start = Instant::now();
    let mut counter = FrameCounter::new(Duration::from_secs(1));
    let mut fps = 0.0;
    for i in 0..=10u64 {
        fps = counter.tick(start + Duration::from_millis(i * 10));
    }
    assert!((fps - 100.0).abs() < 0.5, "fps = {fps}");
}

#[test]
fn frame_counter_drops_frames_outside_window() {
    let start = Instant::now();
    let mut counter = FrameCounter::new(Duration::from_millis(100));
    counter.tick(start);
    counter.tick(start + Duration::from_millis(10));
    // Both early frames fall out of the window.
    counter.tick(start + Duration::from_millis(500));
    let fps = counter.tick(start + Duration::from_millis(550));
    assert!((fps - 20.0).abs() < 0.5, "fps = {fps}");
}
