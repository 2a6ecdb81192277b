use std::fmt::{Display, Formatter};

use crate::quantity::Quantity;

/// Carbon dioxide mass attributed to the consumed electricity.
pub type KilogramsCo2 = Quantity<f64, 0, 0, 1>;

impl Display for KilogramsCo2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} kg CO2", self.0)
    }
}
