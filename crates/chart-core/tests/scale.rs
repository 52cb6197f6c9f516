// File: crates/chart-core/tests/scale.rs
// Purpose: Linear scale mapping, domain nicing, tick generation and tick label formatting.

use event_chart_core::scale::{nice_domain, tick_increment, ticks, LinearScale};
use event_chart_core::TickFormat;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn maps_domain_onto_range() {
    let s = LinearScale::new((-5.0, 5.0), (80.0, 1120.0));
    assert!(approx(s.to_px(-5.0), 80.0));
    assert!(approx(s.to_px(0.0), 600.0));
    assert!(approx(s.to_px(5.0), 1120.0));
    assert!(approx(s.from_px(600.0), 0.0));

    // Inverted range for the vertical axis.
    let y = LinearScale::new((-4.0, 4.0), (540.0, 40.0));
    assert!(approx(y.to_px(0.0), 290.0));
    assert!(approx(y.to_px(4.0), 40.0));
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let s = LinearScale::new((2.0, 2.0), (0.0, 100.0));
    assert!(approx(s.to_px(2.0), 50.0));
}

#[test]
fn tick_increment_picks_round_steps() {
    assert!(approx(tick_increment(0.0, 10.0, 10), 1.0));
    assert!(approx(tick_increment(0.0, 100.0, 10), 10.0));
    assert!(approx(tick_increment(0.0, 35.0, 10), 5.0));
    // Sub-unit steps are reported as negative reciprocals.
    assert!(approx(tick_increment(0.0, 1.0, 10), -10.0));
    assert!(approx(tick_increment(-3.74, 3.74, 10), -1.0));
    assert_eq!(tick_increment(1.0, 1.0, 10), 0.0);
}

#[test]
fn nice_rounds_outward() {
    assert_eq!(nice_domain(-5.0, 5.0, 10), (-5.0, 5.0));
    assert_eq!(nice_domain(-3.74, 3.74, 10), (-4.0, 4.0));
    assert_eq!(nice_domain(0.13, 0.87, 10), (0.1, 0.9));
    // The step grows from 2 to 5 after the first rounding, so nicing iterates.
    assert_eq!(nice_domain(-7.0, 23.0, 10), (-10.0, 25.0));
    assert_eq!(nice_domain(-12.0, 97.0, 10), (-20.0, 100.0));
    // Reversed domains stay reversed.
    assert_eq!(nice_domain(3.74, -3.74, 10), (4.0, -4.0));
}

#[test]
fn nice_keeps_symmetric_domains_symmetric() {
    for m in [0.37, 1.1, 3.74, 12.5, 47.3, 260.0] {
        let (lo, hi) = nice_domain(-m, m, 10);
        assert_eq!(lo, -hi, "domain for {m} lost symmetry: [{lo}, {hi}]");
        assert!(hi >= m);
    }
}

#[test]
fn ticks_are_round_and_inclusive() {
    assert_eq!(ticks(-5.0, 5.0, 10), (-5..=5).map(f64::from).collect::<Vec<_>>());
    assert_eq!(ticks(-4.0, 4.0, 10), (-4..=4).map(f64::from).collect::<Vec<_>>());
    assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(ticks(-10.0, 25.0, 10), vec![-10.0, -5.0, 0.0, 5.0, 10.0, 15.0, 20.0, 25.0]);
    assert_eq!(ticks(-8.0, 24.0, 10), vec![-5.0, 0.0, 5.0, 10.0, 15.0, 20.0]);
    assert_eq!(ticks(3.0, 3.0, 10), vec![3.0]);
    assert!(ticks(0.0, 1.0, 0).is_empty());
}

#[test]
fn scale_ticks_follow_niced_domain() {
    let s = LinearScale::new((-3.74, 3.74), (540.0, 40.0)).nice(10);
    assert_eq!(s.domain(), (-4.0, 4.0));
    assert_eq!(s.ticks(10).len(), 9);
}

#[test]
fn tick_labels() {
    assert_eq!(TickFormat::Integer.format(-5.0), "-5");
    assert_eq!(TickFormat::Integer.format(2.5), "3");
    assert_eq!(TickFormat::Integer.format(-0.2), "0");
    assert_eq!(TickFormat::Percent.format(4.0), "4%");
    assert_eq!(TickFormat::Percent.format(-0.5), "-0.5%");
    assert_eq!(TickFormat::Percent.format(0.1 + 0.2), "0.3%");
    assert_eq!(TickFormat::Percent.format(-0.0), "0%");
}
