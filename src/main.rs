#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod emission;
mod estimator;
mod job;
mod predictor;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, EstimateArgs, ModelCommand, PredictArgs},
    estimator::EnergyEstimator,
    job::Job,
    predictor::{CuttingPowerPredictor, PowerQuery, PredictorConfig, ReferenceModel},
    prelude::*,
    quantity::power::Kilowatts,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Estimate(args) => estimate(&args),
        Command::Predict(args) => predict(&args),
        Command::Factors => {
            println!("{}", tables::build_region_table());
            println!("{}", tables::build_grid_table());
            Ok(())
        }
        Command::Model(args) => {
            let mut predictor = new_predictor(PredictorConfig::default());
            match args.command {
                ModelCommand::Train(args) => predictor.train_model(args.data),
                ModelCommand::Calibrate(args) => {
                    let error = predictor.calibrate(args.actual, args.predicted);
                    println!("prediction error: {error}");
                }
            }
            Ok(())
        }
    }
}

fn new_predictor(config: PredictorConfig) -> CuttingPowerPredictor<ReferenceModel> {
    let model = ReferenceModel::new(config.model_id.clone());
    CuttingPowerPredictor::new(config, model)
}

#[instrument(skip_all)]
fn estimate(args: &EstimateArgs) -> Result {
    let job = if args.sample {
        Job::sample()
    } else {
        let path = args.job.as_deref().context("a job file or --sample is required")?;
        Job::from_path(path)?
    };

    let predicted = if args.predict_cutting_power {
        Some(predict_job_powers(args, &job)?)
    } else {
        None
    };

    let profile = args.power.profile();
    let estimate = estimator::estimate_job(
        &job,
        &args.time.estimator(),
        &EnergyEstimator::new(profile),
        args.grid.resolve(),
        predicted.as_deref(),
    );

    println!("{}", tables::build_operations_table(&job, predicted.as_deref()));
    println!("{}", tables::build_estimate_table(&estimate, &profile, predicted.as_deref()));
    println!("{}", tables::build_carbon_table(&estimate));
    info!("done!");
    Ok(())
}

/// One prediction per operation, with the stock parameters shared job-wide.
fn predict_job_powers(args: &EstimateArgs, job: &Job) -> Result<Vec<Kilowatts>> {
    const DEFAULT_DEPTH_OF_CUT: f64 = 2.0;

    let mut predictor = new_predictor(args.delegation.config(true));
    if let Some(path) = &args.delegation.model_path {
        predictor.load_model(path.clone());
    }

    let material =
        args.stock.material.clone().or_else(|| job.material.clone()).unwrap_or_default();
    let depth_of_cut =
        args.stock.depth_of_cut.or(job.depth_of_cut).unwrap_or(DEFAULT_DEPTH_OF_CUT);
    let machine = args.stock.machine.clone().or_else(|| job.machine.clone()).unwrap_or_default();

    job.operations
        .iter()
        .map(|operation| {
            let query = PowerQuery::builder()
                .material(material.as_str())
                .tool_diameter(operation.tool_diameter)
                .spindle_speed(operation.spindle_speed)
                .feed_rate(operation.feed_rate)
                .depth_of_cut(depth_of_cut)
                .operation_type(operation.operation_type.as_str())
                .machine_type(machine.as_str())
                .build();
            predictor.predict(&query)
        })
        .collect()
}

#[instrument(skip_all)]
fn predict(args: &PredictArgs) -> Result {
    let mut predictor = new_predictor(args.delegation.config(!args.heuristic));
    if let Some(path) = &args.delegation.model_path {
        predictor.load_model(path.clone());
    }

    let query = PowerQuery::builder()
        .material(args.material.as_str())
        .tool_diameter(args.tool_diameter)
        .spindle_speed(args.spindle_speed)
        .feed_rate(args.feed_rate)
        .depth_of_cut(args.depth_of_cut)
        .operation_type(args.operation.as_str())
        .machine_type(args.machine.as_str())
        .build();
    let power = predictor.predict(&query)?;
    info!(mode = ?predictor.config().mode(), %power, "predicted");

    println!("{power}");
    Ok(())
}
