use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    emission,
    estimator::{PowerProfile, TimeEstimator},
    predictor::PredictorConfig,
    quantity::{power::Kilowatts, rate::EmissionRate, time::Minutes},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate energy use and carbon emissions for a machining job.
    Estimate(Box<EstimateArgs>),

    /// Predict cutting power for one set of machining parameters.
    Predict(Box<PredictArgs>),

    /// Print the built-in emission-factor tables.
    Factors,

    /// Model bookkeeping: record training and calibration intents.
    Model(Box<ModelArgs>),
}

#[derive(Parser)]
pub struct ModelArgs {
    #[command(subcommand)]
    pub command: ModelCommand,
}

#[derive(Subcommand)]
pub enum ModelCommand {
    /// Record a training request for the local model.
    Train(TrainArgs),

    /// Record an observed-versus-predicted calibration sample.
    Calibrate(CalibrateArgs),
}

#[derive(Parser)]
pub struct TrainArgs {
    /// Training data file to record. The file is not opened here.
    pub data: PathBuf,
}

#[derive(Parser)]
pub struct CalibrateArgs {
    /// Measured cutting power in kilowatts.
    #[clap(long)]
    pub actual: Kilowatts,

    /// Predicted cutting power in kilowatts.
    #[clap(long)]
    pub predicted: Kilowatts,
}

#[derive(Parser)]
pub struct EstimateArgs {
    /// Job description file (`.toml` or `.json`).
    #[clap(required_unless_present = "sample")]
    pub job: Option<PathBuf>,

    /// Use the built-in sample job instead of a file.
    #[clap(long, conflicts_with = "job")]
    pub sample: bool,

    /// Replace the profile's fixed cutting power with per-operation
    /// predictions.
    #[clap(long = "predict-cutting-power")]
    pub predict_cutting_power: bool,

    #[clap(flatten)]
    pub time: TimeArgs,

    #[clap(flatten)]
    pub power: PowerArgs,

    #[clap(flatten)]
    pub grid: GridArgs,

    #[clap(flatten)]
    pub delegation: DelegationArgs,

    #[clap(flatten)]
    pub stock: StockArgs,
}

#[derive(Clone, Copy, Parser)]
pub struct TimeArgs {
    /// Rapid-move time as a fraction of cutting time.
    #[clap(long, default_value = "0.3", env = "KERF_RAPID_TIME_FACTOR")]
    pub rapid_time_factor: f64,

    /// Tool-change and dwell overhead per operation, in minutes.
    #[clap(long, default_value = "2.0", env = "KERF_IDLE_TIME_PER_OP")]
    pub idle_time_per_op: Minutes,

    /// One-off setup time per job, in minutes.
    #[clap(long, default_value = "10.0", env = "KERF_SETUP_TIME")]
    pub setup_time: Minutes,
}

impl TimeArgs {
    #[must_use]
    pub const fn estimator(&self) -> TimeEstimator {
        TimeEstimator {
            rapid_time_factor: self.rapid_time_factor,
            idle_time_per_op: self.idle_time_per_op,
            setup_time: self.setup_time,
        }
    }
}

#[derive(Clone, Copy, Parser)]
pub struct PowerArgs {
    /// Cutting power draw in kilowatts.
    #[clap(long, default_value = "5.0", env = "KERF_CUTTING_POWER")]
    pub cutting_power: Kilowatts,

    /// Rapid-move power draw in kilowatts.
    #[clap(long, default_value = "3.0", env = "KERF_RAPID_POWER")]
    pub rapid_power: Kilowatts,

    /// Idle power draw in kilowatts.
    #[clap(long, default_value = "1.0", env = "KERF_IDLE_POWER")]
    pub idle_power: Kilowatts,
}

impl PowerArgs {
    #[must_use]
    pub const fn profile(&self) -> PowerProfile {
        PowerProfile {
            cutting: self.cutting_power,
            rapid: self.rapid_power,
            idle: self.idle_power,
        }
    }
}

#[derive(Clone, Parser)]
pub struct GridArgs {
    /// Region or country whose grid intensity to use (e.g. `DE`, `France`).
    #[clap(long, env = "KERF_REGION")]
    pub region: Option<String>,

    /// Grid mix whose intensity to use (e.g. `wind`, `coal`).
    #[clap(long, env = "KERF_GRID_MIX", conflicts_with = "region")]
    pub grid_mix: Option<String>,

    /// Emission factor in kg CO2 per kWh; overrides the built-in tables.
    #[clap(long, env = "KERF_EMISSION_FACTOR")]
    pub emission_factor: Option<EmissionRate>,
}

impl GridArgs {
    /// The explicit factor wins, then the region table, then the grid-mix
    /// table, then the world average.
    #[must_use]
    pub fn resolve(&self) -> EmissionRate {
        if let Some(factor) = self.emission_factor {
            factor
        } else if let Some(region) = &self.region {
            emission::for_region(region)
        } else if let Some(grid_mix) = &self.grid_mix {
            emission::for_grid_mix(grid_mix)
        } else {
            emission::WORLD_AVERAGE
        }
    }
}

#[derive(Clone, Parser)]
pub struct DelegationArgs {
    /// Delegate predictions to the external service.
    #[clap(long = "external")]
    pub use_external: bool,

    /// API key for the external prediction service.
    #[clap(long, env = "KERF_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier sent to the external service.
    #[clap(long, default_value = "cutting-power-v1", env = "KERF_MODEL_ID")]
    pub model_id: String,

    /// Local model artifact to record before predicting.
    #[clap(long, env = "KERF_MODEL_PATH")]
    pub model_path: Option<PathBuf>,
}

impl DelegationArgs {
    #[must_use]
    pub fn config(&self, enabled: bool) -> PredictorConfig {
        PredictorConfig {
            enabled,
            use_external: self.use_external,
            api_key: self.api_key.clone(),
            model_id: self.model_id.clone(),
            model_path: None,
        }
    }
}

#[derive(Clone, Parser)]
pub struct StockArgs {
    /// Stock material; falls back to the job file's `material`.
    #[clap(long)]
    pub material: Option<String>,

    /// Depth of cut in mm; falls back to the job file's `depth_of_cut`.
    #[clap(long)]
    pub depth_of_cut: Option<f64>,

    /// Machine type reported to the external service; falls back to the job
    /// file's `machine`.
    #[clap(long)]
    pub machine: Option<String>,
}

#[derive(Parser)]
pub struct PredictArgs {
    /// Stock material (e.g. `Steel_S45C`, `Al6061`).
    #[clap(long)]
    pub material: String,

    /// Tool diameter in mm.
    #[clap(long, default_value = "10.0")]
    pub tool_diameter: f64,

    /// Spindle speed in RPM.
    #[clap(long, default_value = "8000")]
    pub spindle_speed: f64,

    /// Feed rate in mm/min.
    #[clap(long, default_value = "1200")]
    pub feed_rate: f64,

    /// Depth of cut in mm.
    #[clap(long, default_value = "2.0")]
    pub depth_of_cut: f64,

    /// Operation type (e.g. `Milling`, `Drilling`).
    #[clap(long, default_value = "Milling")]
    pub operation: String,

    /// Machine type reported to the external service.
    #[clap(long, default_value = "3axis_VMC")]
    pub machine: String,

    /// Use the coarse material-and-operation heuristic instead of the
    /// parameter-weighting formula.
    #[clap(long)]
    pub heuristic: bool,

    #[clap(flatten)]
    pub delegation: DelegationArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_resolution_precedence() {
        let mut args = GridArgs {
            region: Some("FR".to_string()),
            grid_mix: None,
            emission_factor: Some(EmissionRate(0.1)),
        };
        assert_eq!(args.resolve(), EmissionRate(0.1));

        args.emission_factor = None;
        assert_eq!(args.resolve(), EmissionRate(0.059));

        args.region = None;
        args.grid_mix = Some("wind".to_string());
        assert_eq!(args.resolve(), EmissionRate(0.015));

        args.grid_mix = None;
        assert_eq!(args.resolve(), emission::WORLD_AVERAGE);
    }

    #[test]
    fn test_default_arguments_parse() {
        let args = Args::try_parse_from(["kerf", "estimate", "--sample"]).unwrap();
        let Command::Estimate(estimate) = args.command else {
            panic!("expected the estimate command");
        };
        assert!(estimate.sample);
        assert_eq!(estimate.time.rapid_time_factor, 0.3);
        assert_eq!(estimate.power.profile(), PowerProfile::default());
        assert_eq!(estimate.delegation.config(false).mode(), crate::predictor::PredictionMode::Heuristic);
    }
}
