use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, energy::KilowattHours, time::Minutes};

/// Steady-state power draw of the machine tool.
pub type Kilowatts = Quantity<f64, 1, 0, 0>;

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kW", self.0)
    }
}

impl Mul<Minutes> for Kilowatts {
    type Output = KilowattHours;

    fn mul(self, rhs: Minutes) -> Self::Output {
        rhs * self
    }
}
