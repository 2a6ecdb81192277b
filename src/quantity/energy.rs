use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, carbon::KilogramsCo2, rate::EmissionRate};

pub type KilowattHours = Quantity<f64, 1, 1, 0>;

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} kWh", self.0)
    }
}

impl Mul<EmissionRate> for KilowattHours {
    type Output = KilogramsCo2;

    fn mul(self, rhs: EmissionRate) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
