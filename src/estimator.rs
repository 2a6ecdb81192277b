pub mod carbon;
pub mod energy;
pub mod time;

pub use self::{
    energy::{EnergyBreakdown, EnergyEstimator, PowerProfile},
    time::{TimeBreakdown, TimeEstimator},
};
use crate::{
    job::Job,
    prelude::*,
    quantity::{carbon::KilogramsCo2, power::Kilowatts, rate::EmissionRate},
};

/// Everything the pipeline derives from one job.
#[derive(Clone, Debug)]
pub struct JobEstimate {
    pub time: TimeBreakdown,
    pub energy: EnergyBreakdown,
    pub emission_factor: EmissionRate,
    pub carbon: KilogramsCo2,
}

/// Runs the whole pipeline: operations → time → energy → carbon.
///
/// `cutting_powers`, when given, holds one predicted cutting power per
/// operation and replaces the profile's fixed cutting power; rapid and idle
/// draws always come from the profile.
#[instrument(skip_all, fields(n_operations = job.operations.len()))]
pub fn estimate_job(
    job: &Job,
    time_model: &TimeEstimator,
    energy_model: &EnergyEstimator,
    emission_factor: EmissionRate,
    cutting_powers: Option<&[Kilowatts]>,
) -> JobEstimate {
    let time = time_model.breakdown(job.total_cutting_time(), job.operations.len());
    debug!(cutting = %time.cutting, rapid = %time.rapid, idle = %time.idle, "time modelled");

    let mut energy = energy_model.breakdown(&time, None);
    if let Some(powers) = cutting_powers {
        energy.cutting = job
            .operations
            .iter()
            .zip(powers)
            .map(|(operation, power)| operation.cutting_time * *power)
            .sum();
    }
    debug!(total = %energy.total(), "energy modelled");

    let carbon = carbon::emission(energy.total(), emission_factor);
    info!(%carbon, %emission_factor, "carbon modelled");

    JobEstimate { time, energy, emission_factor, carbon }
}
