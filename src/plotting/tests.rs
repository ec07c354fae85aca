use super::*;

#[test]
fn series_never_exceeds_capacity() {
    let mut series = TimeSeries::new(100);
    for i in 0..1000 {
        series.push(i as f32);
        assert!(series.len() <= 100);
    }
    assert_eq!(series.len(), 100);
    assert_eq!(series.capacity(), 100);
}

#[test]
fn series_keeps_newest_in_order() {
    let mut series = TimeSeries::new(100);
    for i in 0..150 {
        series.push(i as f32);
    }
    let expected: Vec<f32> = (50..150).map(|i| i as f32).collect();
    assert_eq!(series.values(), expected);
    assert_eq!(series.latest(), Some(149.0));
}

#[test]
fn range_covers_stored_samples_only() {
    let mut series = TimeSeries::new(3);
    assert_eq!(series.range(), None);
    for v in [-5.0, 1.0, 2.0, 0.5] {
        series.push(v);
    }
    // -5.0 was evicted
    assert_eq!(series.range(), Some((0.5, 2.0)));
}

#[test]
fn zero_capacity_still_holds_latest() {
    let mut series = TimeSeries::new(0);
    series.push(1.0);
    series.push(2.0);
    assert_eq!(series.values(), vec![2.0]);
}

#[test]
fn force_plots_record_both_series() {
    let mut plots = ForcePlots::new(4);
    plots.record(3.0, 0.2);
    plots.record(3.0, -0.2);
    assert_eq!(plots.lorentz.values(), vec![3.0, 3.0]);
    assert_eq!(plots.electric.values(), vec![0.2, -0.2]);
    plots.lorentz.clear();
    assert!(plots.lorentz.is_empty());
}
