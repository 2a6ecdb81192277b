use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{prelude::*, quantity::time::Minutes};

/// One machining operation as reported by the CAM data source. The pipeline
/// only ever reads it.
#[derive(Clone, Debug, Deserialize, Serialize, bon::Builder)]
pub struct Operation {
    #[builder(into)]
    pub operation_type: String,

    #[builder(into)]
    pub cutting_time: Minutes,

    /// Feed rate in mm/min.
    pub feed_rate: f64,

    /// Spindle speed in RPM.
    pub spindle_speed: f64,

    /// Tool diameter in mm.
    pub tool_diameter: f64,
}

/// A machining job: stock parameters shared by all operations, plus the
/// ordered operation list.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Job {
    pub material: Option<String>,
    pub machine: Option<String>,

    /// Depth of cut in mm, shared by all operations.
    pub depth_of_cut: Option<f64>,

    pub operations: Vec<Operation>,
}

impl Job {
    /// Reads a job description from a TOML or JSON file, chosen by extension.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read the job file `{}`", path.display()))?;
        let job: Self = if path.extension().is_some_and(|extension| extension.eq_ignore_ascii_case("json")) {
            serde_json::from_str(&contents)
                .with_context(|| format!("failed to parse `{}` as JSON", path.display()))?
        } else {
            toml::from_str(&contents)
                .with_context(|| format!("failed to parse `{}` as TOML", path.display()))?
        };
        info!(n_operations = job.operations.len(), "job loaded");
        Ok(job)
    }

    /// The built-in demo job: a roughing pass, a finishing pass, and a drill
    /// cycle on aluminium stock.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            material: Some("Al6061".to_string()),
            machine: Some("3axis_VMC".to_string()),
            depth_of_cut: Some(2.0),
            operations: vec![
                Operation::builder()
                    .operation_type("Rough Milling")
                    .cutting_time(15.2)
                    .feed_rate(1000.0)
                    .spindle_speed(7500.0)
                    .tool_diameter(12.0)
                    .build(),
                Operation::builder()
                    .operation_type("Finish Milling")
                    .cutting_time(8.7)
                    .feed_rate(800.0)
                    .spindle_speed(8000.0)
                    .tool_diameter(8.0)
                    .build(),
                Operation::builder()
                    .operation_type("Drilling")
                    .cutting_time(3.4)
                    .feed_rate(500.0)
                    .spindle_speed(4500.0)
                    .tool_diameter(6.0)
                    .build(),
            ],
        }
    }

    #[must_use]
    pub fn total_cutting_time(&self) -> Minutes {
        self.operations.iter().map(|operation| operation.cutting_time).sum()
    }
}
