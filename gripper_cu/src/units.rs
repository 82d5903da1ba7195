//! Bus-unit / ratio conversion.
//!
//! The bus carries position and torque as integers in
//! `[0, resolution]`; the actuator driver works in `[0.0, 1.0]`
//! ratios. Both directions clamp unconditionally: a malformed bus
//! payload degrades to the nearest valid ratio, and rounding on the
//! way back never overshoots the bus resolution.

/// Converter for one bus resolution.
///
/// The resolution is configuration supplied at construction, not a
/// process-wide constant. Copy-sized so adapters hold it by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusScale {
    resolution: u16,
}

impl BusScale {
    /// Create a converter for the given resolution.
    ///
    /// # Panics
    /// Panics if `resolution` is zero. Config validation rejects a
    /// zero resolution before any converter is built.
    pub fn new(resolution: u16) -> Self {
        assert!(resolution > 0, "bus resolution must be nonzero");
        Self { resolution }
    }

    /// The bus integer resolution.
    #[inline]
    pub const fn resolution(&self) -> u16 {
        self.resolution
    }

    /// Convert a bus integer to a ratio, clamped to `[0.0, 1.0]`.
    ///
    /// Accepts `i32` so out-of-range payloads from wider or signed
    /// bus encodings still degrade to a valid ratio.
    #[inline]
    pub fn to_ratio(&self, value: i32) -> f64 {
        (value as f64 / self.resolution as f64).clamp(0.0, 1.0)
    }

    /// Convert a ratio to bus units, rounded and clamped to
    /// `[0, resolution]`.
    #[inline]
    pub fn to_bus_units(&self, ratio: f64) -> u16 {
        let scaled = (ratio * self.resolution as f64).round();
        scaled.clamp(0.0, self.resolution as f64) as u16
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
