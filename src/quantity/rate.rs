use std::fmt::{Display, Formatter};

use crate::quantity::Quantity;

/// Grid intensity: how much carbon one kilowatt-hour carries.
pub type EmissionRate = Quantity<f64, -1, -1, 1>;

impl Display for EmissionRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} kg CO2/kWh", self.0)
    }
}
