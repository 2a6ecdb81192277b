use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, energy::KilowattHours, power::Kilowatts};

/// Machining time as reported by the CAM data source.
pub type Minutes = Quantity<f64, 0, 1, 0>;

impl Display for Minutes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} min", self.0)
    }
}

impl Mul<Kilowatts> for Minutes {
    type Output = KilowattHours;

    fn mul(self, rhs: Kilowatts) -> Self::Output {
        Quantity(self.0 / 60.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_times_kilowatts() {
        // 30 minutes at 2 kW is 1 kWh.
        assert_eq!(Minutes(30.0) * Kilowatts(2.0), KilowattHours(1.0));
    }
}
