pub mod carbon;
pub mod energy;
pub mod power;
pub mod rate;
pub mod time;

use std::{
    fmt::{Debug, Formatter},
    ops::{Div, Mul},
};

use serde::{Deserialize, Serialize};

/// Scalar with dimension exponents over power, time, and carbon mass.
///
/// Cross-unit products are only defined where a concrete alias provides them,
/// so mixing up, say, minutes and an emission rate fails to compile.
#[derive(
    Clone,
    Copy,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
)]
pub struct Quantity<T, const POWER: isize, const TIME: isize, const CARBON: isize>(pub T);

impl<T: Debug, const POWER: isize, const TIME: isize, const CARBON: isize> Debug
    for Quantity<T, POWER, TIME, CARBON>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl<T, const POWER: isize, const TIME: isize, const CARBON: isize> std::iter::Sum
    for Quantity<T, POWER, TIME, CARBON>
where
    T: std::iter::Sum,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|quantity| quantity.0).sum())
    }
}

impl<T, const POWER: isize, const TIME: isize, const CARBON: isize> Mul<T>
    for Quantity<T, POWER, TIME, CARBON>
where
    T: Mul<T>,
{
    type Output = Quantity<T::Output, POWER, TIME, CARBON>;

    fn mul(self, rhs: T) -> Self::Output {
        Quantity(self.0 * rhs)
    }
}

impl<T, const POWER: isize, const TIME: isize, const CARBON: isize> Div<T>
    for Quantity<T, POWER, TIME, CARBON>
where
    T: Div<T>,
{
    type Output = Quantity<T::Output, POWER, TIME, CARBON>;

    fn div(self, rhs: T) -> Self::Output {
        Quantity(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Bare = Quantity<f64, 0, 0, 0>;

    #[test]
    fn test_sum() {
        let total: Bare = [Bare(1.5), Bare(2.5)].into_iter().sum();
        assert_eq!(total, Bare(4.0));
    }

    #[test]
    fn test_scalar_mul() {
        assert_eq!(Bare(2.0) * 3.0, Bare(6.0));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("0.475".parse::<Bare>().unwrap(), Bare(0.475));
    }
}
