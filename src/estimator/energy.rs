use crate::{
    estimator::time::TimeBreakdown,
    quantity::{energy::KilowattHours, power::Kilowatts, time::Minutes},
};

/// The three steady-state power draws used to convert time into energy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerProfile {
    pub cutting: Kilowatts,
    pub rapid: Kilowatts,
    pub idle: Kilowatts,
}

impl Default for PowerProfile {
    fn default() -> Self {
        Self { cutting: Kilowatts(5.0), rapid: Kilowatts(3.0), idle: Kilowatts(1.0) }
    }
}

/// Converts time components into energy components: `minutes / 60 × kW`.
///
/// Callers either pass an explicit power per component or `None` to fall back
/// to the stored profile. There is no bounds checking anywhere on this path;
/// negative times or powers propagate into negative energies.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnergyEstimator {
    pub profile: PowerProfile,
}

impl EnergyEstimator {
    #[must_use]
    pub const fn new(profile: PowerProfile) -> Self {
        Self { profile }
    }

    #[must_use]
    pub fn component_energy(time: Minutes, power: Kilowatts) -> KilowattHours {
        time * power
    }

    #[must_use]
    pub fn cutting_energy(&self, time: Minutes, power: Option<Kilowatts>) -> KilowattHours {
        Self::component_energy(time, power.unwrap_or(self.profile.cutting))
    }

    #[must_use]
    pub fn rapid_energy(&self, time: Minutes, power: Option<Kilowatts>) -> KilowattHours {
        Self::component_energy(time, power.unwrap_or(self.profile.rapid))
    }

    #[must_use]
    pub fn idle_energy(&self, time: Minutes, power: Option<Kilowatts>) -> KilowattHours {
        Self::component_energy(time, power.unwrap_or(self.profile.idle))
    }

    #[must_use]
    pub fn breakdown(&self, time: &TimeBreakdown, cutting_power: Option<Kilowatts>) -> EnergyBreakdown {
        EnergyBreakdown {
            cutting: self.cutting_energy(time.cutting, cutting_power),
            rapid: self.rapid_energy(time.rapid, None),
            idle: self.idle_energy(time.idle, None),
        }
    }
}

/// Per-component energy use of a job.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyBreakdown {
    pub cutting: KilowattHours,
    pub rapid: KilowattHours,
    pub idle: KilowattHours,
}

impl EnergyBreakdown {
    #[must_use]
    pub fn total(&self) -> KilowattHours {
        self.cutting + self.rapid + self.idle
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_component_energy_converts_minutes_to_hours() {
        assert_eq!(
            EnergyEstimator::component_energy(Minutes(30.0), Kilowatts(2.0)),
            KilowattHours(1.0),
        );
    }

    #[test]
    fn test_component_energy_is_linear_in_both_inputs() {
        let base = EnergyEstimator::component_energy(Minutes(10.0), Kilowatts(5.0));
        let double_time = EnergyEstimator::component_energy(Minutes(20.0), Kilowatts(5.0));
        let double_power = EnergyEstimator::component_energy(Minutes(10.0), Kilowatts(10.0));
        assert_relative_eq!(double_time.0, base.0 * 2.0);
        assert_relative_eq!(double_power.0, base.0 * 2.0);
    }

    #[test]
    fn test_zero_time_costs_nothing_at_any_power() {
        for power in [-3.0, 0.0, 17.5] {
            assert_eq!(
                EnergyEstimator::component_energy(Minutes(0.0), Kilowatts(power)),
                KilowattHours(0.0),
            );
        }
    }

    #[test]
    fn test_missing_power_falls_back_to_the_profile() {
        let model = EnergyEstimator::default();
        assert_relative_eq!(model.cutting_energy(Minutes(60.0), None).0, 5.0);
        assert_relative_eq!(model.rapid_energy(Minutes(60.0), None).0, 3.0);
        assert_relative_eq!(model.idle_energy(Minutes(60.0), None).0, 1.0);
    }

    #[test]
    fn test_explicit_power_wins_over_the_profile() {
        let model = EnergyEstimator::default();
        assert_relative_eq!(model.cutting_energy(Minutes(60.0), Some(Kilowatts(7.5))).0, 7.5);
    }

    #[test]
    fn test_negative_time_propagates() {
        let energy = EnergyEstimator::component_energy(Minutes(-30.0), Kilowatts(2.0));
        assert_relative_eq!(energy.0, -1.0);
    }

    #[test]
    fn test_total_is_the_exact_sum() {
        let breakdown = EnergyBreakdown {
            cutting: KilowattHours(1.3083),
            rapid: KilowattHours(0.2355),
            idle: KilowattHours(0.2333),
        };
        assert_eq!(
            breakdown.total(),
            KilowattHours(1.3083) + KilowattHours(0.2355) + KilowattHours(0.2333),
        );
    }
}
