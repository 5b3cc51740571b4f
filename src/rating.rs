//! Rate estimation: chargeable weight and weight-bracket pricing.
//!
//! Both the estimate and the booking paths price through this module, so a
//! quote and the amount actually charged can never drift apart.

use thiserror::Error;

use crate::model::Parcel;
use crate::{Amount, Weight};

/// Divisor converting parcel volume (cm³) into volumetric weight (kg).
pub const VOLUMETRIC_FACTOR: f64 = 5000.0;

/// Bracket ceilings every rate table prices, ascending. Chargeable weights
/// above the last ceiling are not shippable.
pub const BRACKET_CEILINGS: [Weight; 19] = [
    Weight::from_grams(500),
    Weight::from_grams(1_000),
    Weight::from_grams(2_000),
    Weight::from_grams(3_000),
    Weight::from_grams(5_000),
    Weight::from_grams(7_000),
    Weight::from_grams(10_000),
    Weight::from_grams(12_000),
    Weight::from_grams(15_000),
    Weight::from_grams(17_000),
    Weight::from_grams(20_000),
    Weight::from_grams(22_000),
    Weight::from_grams(25_000),
    Weight::from_grams(28_000),
    Weight::from_grams(30_000),
    Weight::from_grams(35_000),
    Weight::from_grams(40_000),
    Weight::from_grams(45_000),
    Weight::from_grams(50_000),
];

/// Error during rating.
#[derive(Debug, Error)]
pub enum RatingError {
    #[error("invalid parcel dimensions: {0}x{1}x{2}cm at {3}kg")]
    InvalidDimensions(f64, f64, f64, f64),

    #[error("chargeable weight {0} exceeds the supported 50kg limit")]
    WeightExceedsSupportedLimit(Weight),
}

/// Compute the chargeable weight of a parcel: the greater of its physical
/// and volumetric weight.
pub fn chargeable_weight(parcel: &Parcel) -> Result<Weight, RatingError> {
    let Parcel {
        length_cm: l,
        breadth_cm: b,
        height_cm: h,
        weight_kg: w,
    } = *parcel;

    let positive = |v: f64| v.is_finite() && v > 0.0;
    if !(positive(l) && positive(b) && positive(h) && positive(w)) {
        return Err(RatingError::InvalidDimensions(l, b, h, w));
    }

    let volumetric = (l * b * h) / VOLUMETRIC_FACTOR;
    Ok(Weight::from_float(w.max(volumetric)))
}

/// Per-user price list over the fixed bracket ceilings.
///
/// Immutable once installed; an admin rate update replaces the whole table.
#[derive(Debug, Clone)]
pub struct RateTable {
    rows: Vec<(Weight, Amount)>,
}

impl RateTable {
    /// Build a table from one price per bracket ceiling.
    pub fn new(prices: [Amount; 19]) -> Self {
        Self {
            rows: BRACKET_CEILINGS.iter().copied().zip(prices).collect(),
        }
    }

    /// Default price list used when a user registers without a negotiated
    /// table: a flat base plus a per-kilogram component.
    pub fn standard() -> Self {
        let mut prices = [Amount::default(); 19];
        for (price, ceiling) in prices.iter_mut().zip(BRACKET_CEILINGS) {
            *price = Amount::from_float(40.0 + 20.0 * ceiling.kg());
        }
        Self::new(prices)
    }

    /// Price for a chargeable weight: the bracket with the smallest ceiling
    /// that is >= the weight. A weight exactly on a ceiling uses that
    /// bracket, not the next one up.
    pub fn price_for(&self, chargeable: Weight) -> Result<Amount, RatingError> {
        self.rows
            .iter()
            .find(|(ceiling, _)| *ceiling >= chargeable)
            .map(|(_, price)| *price)
            .ok_or(RatingError::WeightExceedsSupportedLimit(chargeable))
    }
}
