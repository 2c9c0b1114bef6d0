// File: crates/heatmap-core/tests/scales.rs
// Purpose: Validate band/quantize/point scale math against known inputs.

use heatmap_core::axis::{keep_year_tick, year_ticks};
use heatmap_core::scale::{BandScale, PointScale, QuantizeScale};

#[test]
fn band_scale_collapses_duplicates_in_order() {
    let years = [1753, 1753, 1754, 1754, 1753];
    let scale = BandScale::new(years, 200.0, 1800.0);
    assert_eq!(scale.domain(), &[1753, 1754]);
    assert_eq!(scale.bandwidth(), 800.0);
    assert_eq!(scale.position(&1754), Some(1000.0));
    assert_eq!(scale.position(&1800), None);
}

#[test]
fn band_scale_pixel_lookup() {
    let scale = BandScale::new([10, 20, 30, 40], 0.0, 400.0);
    assert_eq!(scale.index_at(0.0), Some(0));
    assert_eq!(scale.index_at(99.9), Some(0));
    assert_eq!(scale.index_at(100.0), Some(1));
    assert_eq!(scale.index_at(399.9), Some(3));
    assert_eq!(scale.index_at(400.0), None);
    assert_eq!(scale.index_at(-1.0), None);
}

#[test]
fn year_decimation_selects_every_tenth_from_offset_seven() {
    // 1753..=2015 is the 263-entry domain of the real dataset.
    let scale = BandScale::new(1753..=2015, 200.0, 1800.0);
    assert_eq!(scale.len(), 263);

    let kept: Vec<usize> = (0..scale.len()).filter(|i| keep_year_tick(*i)).collect();
    assert_eq!(&kept[..3], &[7, 17, 27]);

    let ticks = year_ticks(&scale);
    assert_eq!(ticks.len(), kept.len());
    assert_eq!(ticks[0].label, "1760");
    assert_eq!(ticks[1].label, "1770");
    assert_eq!(ticks[2].label, "1780");
}

#[test]
fn quantize_domain_splits_into_nine_equal_buckets() {
    // base 8.0, variances spanning [-5.0, 6.0]
    let scale = QuantizeScale::new(8.0 - 5.0, 8.0 + 6.0, 9);
    assert_eq!(scale.domain(), (3.0, 14.0));
    assert!((scale.bucket_width() - 11.0 / 9.0).abs() < 1e-12);
    assert_eq!(scale.thresholds().len(), 8);

    assert_eq!(scale.bucket_of(3.0), 0);
    assert_eq!(scale.bucket_of(14.0), 8);
    assert_eq!(scale.bucket_of(2.0), 0, "below-domain values clamp low");
    assert_eq!(scale.bucket_of(15.0), 8, "above-domain values clamp high");
    assert_eq!(scale.bucket_of(3.0 + 11.0 / 9.0 + 1e-9), 1);
}

#[test]
fn quantize_degenerate_domain_widens() {
    let scale = QuantizeScale::new(5.0, 5.0, 9);
    let (min, max) = scale.domain();
    assert_eq!(min, 5.0);
    assert!(max > min);
    assert_eq!(scale.bucket_of(5.0), 0);
}

#[test]
fn point_scale_reserves_one_step_of_outer_padding() {
    // 10 legend boundary points over a 700-unit run.
    let scale = PointScale::new(10, 200.0, 900.0);
    assert!((scale.step() - 700.0 / 11.0).abs() < 1e-4);
    assert!((scale.position(0) - (200.0 + 700.0 / 11.0)).abs() < 1e-4);
    assert!((scale.position(9) - (200.0 + 700.0 * 10.0 / 11.0)).abs() < 1e-3);
}
