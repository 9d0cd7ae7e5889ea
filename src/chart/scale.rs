//! Linear scales and the factory that derives them from the dataset.

use crate::config::ChartConfig;
use crate::data::{DataSet, XField};

/// Affine mapping from a numeric domain to a pixel range.
///
/// Domain and range are kept exactly as given, so an inverted range
/// (`[height, 0]`) plots larger values higher up. Values outside the domain
/// map outside the range; nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Create a scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Domain bounds as `(low, high)`.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Range bounds.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value to the range.
    ///
    /// A zero-width domain maps everything to the middle of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Nice tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        nice_ticks(lo, hi, count)
    }
}

/// Step between ticks so that roughly `count` ticks cover `[min, max]`.
///
/// The step is 1, 2, 5 or 10 times a power of ten.
pub fn tick_step(min: f64, max: f64, count: usize) -> f64 {
    let raw = (max - min) / count.max(1) as f64;
    let power = 10_f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    power * factor
}

/// Nice tick positions within `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) {
        return Vec::new();
    }
    if count == 0 || max <= min {
        return vec![min];
    }

    let step = tick_step(min, max, count);
    // Sub-unit steps divide by the inverse to keep 0.6 from becoming 0.6000000000000001.
    let inverse = if step < 1.0 { Some((1.0 / step).round()) } else { None };
    let (first, last) = match inverse {
        Some(inv) => ((min * inv).ceil(), (max * inv).floor()),
        None => ((min / step).ceil(), (max / step).floor()),
    };

    let mut ticks = Vec::new();
    let mut k = first;
    while k <= last {
        let tick = match inverse {
            Some(inv) => k / inv,
            None => k * step,
        };
        ticks.push(if tick == 0.0 { 0.0 } else { tick });
        k += 1.0;
    }
    ticks
}

/// Derives scales from the dataset using the configured padding and plot size.
#[derive(Debug, Clone)]
pub struct ScaleFactory {
    low_padding: f64,
    high_padding: f64,
    plot_width: f64,
    plot_height: f64,
}

impl ScaleFactory {
    /// Create a factory for the given chart geometry.
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            low_padding: config.scale.low_padding,
            high_padding: config.scale.high_padding,
            plot_width: config.plot_width(),
            plot_height: config.plot_height(),
        }
    }

    /// Horizontal scale for `field`: `[min * 0.8, max * 1.2] -> [0, width]`.
    ///
    /// `DataSet` is never empty, so the domain always exists.
    pub fn compute_scale(&self, dataset: &DataSet, field: XField) -> LinearScale {
        let (min, max) = dataset.extent(field);
        LinearScale::new(
            (min * self.low_padding, max * self.high_padding),
            (0.0, self.plot_width),
        )
    }

    /// Fixed vertical scale: `[0, max(healthcare)] -> [height, 0]`.
    pub fn vertical_scale(&self, dataset: &DataSet) -> LinearScale {
        LinearScale::new(
            (0.0, dataset.max_healthcare()),
            (self.plot_height, 0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::two_states;

    fn factory() -> ScaleFactory {
        ScaleFactory::new(&ChartConfig::default())
    }

    #[test]
    fn test_padded_domain() {
        let ds = two_states();
        let scale = factory().compute_scale(&ds, XField::Poverty);
        let (lo, hi) = scale.domain();
        assert!((lo - 8.0).abs() < 1e-9);
        assert!((hi - 24.0).abs() < 1e-9);
        assert_eq!(scale.range(), (0.0, 760.0));
    }

    #[test]
    fn test_domain_for_every_field() {
        let ds = two_states();
        for field in XField::ALL {
            let (min, max) = ds.extent(field);
            let (lo, hi) = factory().compute_scale(&ds, field).domain();
            assert!((lo - 0.8 * min).abs() < 1e-9, "{field}");
            assert!((hi - 1.2 * max).abs() < 1e-9, "{field}");
        }
    }

    #[test]
    fn test_vertical_scale_is_inverted() {
        let ds = two_states();
        let y = factory().vertical_scale(&ds);
        assert_eq!(y.domain(), (0.0, 15.0));
        assert_eq!(y.apply(0.0), 400.0);
        assert_eq!(y.apply(15.0), 0.0);
    }

    #[test]
    fn test_apply() {
        let scale = LinearScale::new((8.0, 24.0), (0.0, 800.0));
        assert_eq!(scale.apply(8.0), 0.0);
        assert_eq!(scale.apply(16.0), 400.0);
        assert_eq!(scale.apply(24.0), 800.0);
    }

    #[test]
    fn test_zero_width_domain_maps_to_middle() {
        let scale = LinearScale::new((0.0, 0.0), (0.0, 100.0));
        assert_eq!(scale.apply(0.0), 50.0);
    }

    #[test]
    fn test_nice_ticks_stay_in_domain() {
        let ticks = nice_ticks(8.0, 24.0, 6);
        assert_eq!(ticks, vec![8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0]);

        let ticks = nice_ticks(24.0, 48.0, 6);
        assert!(ticks.iter().all(|t| (24.0..=48.0).contains(t)));
        assert_eq!(ticks.first(), Some(&25.0));
        assert_eq!(ticks.last(), Some(&45.0));
    }

    #[test]
    fn test_sub_unit_ticks_are_clean() {
        let ticks = nice_ticks(0.0, 1.0, 5);
        assert_eq!(ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_degenerate_tick_domain() {
        assert_eq!(nice_ticks(3.0, 3.0, 6), vec![3.0]);
        assert!(nice_ticks(f64::NAN, 1.0, 6).is_empty());
    }
}
