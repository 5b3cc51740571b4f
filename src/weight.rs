use std::fmt;

/// Fixed-point weight in kilograms with 3 decimal places, stored as scaled grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Weight(i64);

impl Weight {
    const SCALE: i64 = 1_000;

    pub fn from_float(kg: f64) -> Self {
        Weight((kg * Self::SCALE as f64).round() as i64)
    }

    pub const fn from_grams(grams: i64) -> Self {
        Weight(grams)
    }

    pub fn kg(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SCALE;
        let frac = self.0 % Self::SCALE;
        write!(f, "{whole}.{frac:03}kg")
    }
}
