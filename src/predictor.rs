pub mod model;
pub mod query;

use std::path::PathBuf;

pub use self::{
    model::{CuttingPowerModel, ReferenceModel},
    query::PowerQuery,
};
use crate::{
    prelude::*,
    quantity::{Quantity, power::Kilowatts},
};

/// Switches selecting how cutting power is predicted. Everything is off by
/// default: the predictor then answers with the plain heuristic.
#[derive(Clone, Debug)]
pub struct PredictorConfig {
    pub enabled: bool,
    pub use_external: bool,

    /// Credential for the external prediction service. Its absence is not an
    /// error, it merely keeps predictions local.
    pub api_key: Option<String>,

    /// Model identifier sent to the external service.
    pub model_id: String,

    /// Recorded local model artifact. Never opened or validated here.
    pub model_path: Option<PathBuf>,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            use_external: false,
            api_key: None,
            model_id: "cutting-power-v1".to_string(),
            model_path: None,
        }
    }
}

/// The prediction path actually taken, resolved once per call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PredictionMode {
    Heuristic,
    Local,
    Delegated,
}

impl PredictorConfig {
    #[must_use]
    pub fn mode(&self) -> PredictionMode {
        if !self.enabled {
            PredictionMode::Heuristic
        } else if self.use_external && self.api_key.is_some() {
            PredictionMode::Delegated
        } else {
            PredictionMode::Local
        }
    }
}

/// Produces a cutting-power estimate from operation parameters, either by one
/// of the built-in formulas or by delegating to an injected model.
pub struct CuttingPowerPredictor<M> {
    config: PredictorConfig,
    delegate: M,
    training_data: Option<PathBuf>,
    last_calibration: Option<(Kilowatts, Kilowatts)>,
}

impl<M: CuttingPowerModel> CuttingPowerPredictor<M> {
    #[must_use]
    pub const fn new(config: PredictorConfig, delegate: M) -> Self {
        Self { config, delegate, training_data: None, last_calibration: None }
    }

    #[must_use]
    pub const fn config(&self) -> &PredictorConfig {
        &self.config
    }

    #[instrument(
        skip_all,
        fields(material = %query.material, operation = %query.operation_type),
    )]
    pub fn predict(&self, query: &PowerQuery) -> Result<Kilowatts> {
        match self.config.mode() {
            PredictionMode::Heuristic => Ok(heuristic_power(query)),
            PredictionMode::Local => {
                if self.config.use_external {
                    debug!("no API key, staying with the local formula");
                }
                if let Some(path) = &self.config.model_path {
                    debug!(path = %path.display(), "a local model artifact is recorded");
                }
                Ok(local_power(query))
            }
            PredictionMode::Delegated => self.delegate.predict(query),
        }
    }

    /// Records a model artifact reference. The file is not opened here.
    pub fn load_model(&mut self, path: PathBuf) {
        info!(path = %path.display(), "model artifact recorded");
        self.config.model_path = Some(path);
    }

    /// Records a training request. No training happens in this crate.
    pub fn train_model(&mut self, data_path: PathBuf) {
        info!(data_path = %data_path.display(), "training request recorded");
        if let Some(previous) = self.training_data.replace(data_path) {
            debug!(previous = %previous.display(), "superseded the previous training request");
        }
    }

    /// Records an observed-versus-predicted pair for later tuning and returns
    /// the signed prediction error.
    pub fn calibrate(&mut self, actual: Kilowatts, predicted: Kilowatts) -> Kilowatts {
        let error = actual - predicted;
        info!(%actual, %predicted, %error, "calibration sample recorded");
        if let Some((previous_actual, previous_predicted)) =
            self.last_calibration.replace((actual, predicted))
        {
            debug!(
                previous_error = %(previous_actual - previous_predicted),
                "superseded the previous calibration sample",
            );
        }
        error
    }
}

/// Material- and operation-class multipliers over a 3 kW base. Within each
/// axis the first matching branch wins; the two axes stack.
#[must_use]
pub fn heuristic_power(query: &PowerQuery) -> Kilowatts {
    let material = query.material.to_lowercase();
    let mut power = 3.0;
    if material.contains("steel") {
        power *= 1.5;
    } else if material.contains("ti") {
        power *= 1.8;
    } else if material.contains("al") {
        power *= 0.8;
    }

    let operation = query.operation_type.to_lowercase();
    if operation.contains("milling") {
        power *= 1.1;
    } else if operation.contains("drilling") {
        power *= 0.9;
    }

    Quantity(power)
}

/// Additive weighting of the full parameter set over a 2 kW base.
#[must_use]
pub fn local_power(query: &PowerQuery) -> Kilowatts {
    let material = query.material.to_lowercase();
    let mut power = 2.0;
    power += if material.contains("steel") {
        2.0
    } else if material.contains("al") {
        0.5
    } else {
        1.0
    };
    power += query.tool_diameter / 10.0 * 0.2;
    power += query.spindle_speed / 10_000.0 * 0.5;
    power += query.feed_rate / 1000.0 * 0.3;
    power += query.depth_of_cut * 0.4;

    let operation = query.operation_type.to_lowercase();
    if operation.contains("milling") {
        power += 0.5;
    } else if operation.contains("drilling") {
        power -= 0.2;
    }

    Quantity(power)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn steel_milling_query() -> PowerQuery {
        PowerQuery::builder()
            .material("Steel_S45C")
            .tool_diameter(12.0)
            .spindle_speed(6000.0)
            .feed_rate(800.0)
            .depth_of_cut(2.5)
            .operation_type("Milling")
            .machine_type("5axis_VMC")
            .build()
    }

    fn aluminium_milling_query() -> PowerQuery {
        PowerQuery::builder()
            .material("Al6061 Aluminum")
            .tool_diameter(10.0)
            .spindle_speed(8000.0)
            .feed_rate(1200.0)
            .depth_of_cut(2.0)
            .operation_type("Milling")
            .machine_type("3axis_VMC")
            .build()
    }

    #[test]
    fn test_heuristic_aluminium_milling() {
        // 3.0 × 0.8 × 1.1.
        assert_relative_eq!(heuristic_power(&aluminium_milling_query()).0, 2.64);
    }

    #[test]
    fn test_heuristic_steel_drilling() {
        let query = PowerQuery::builder()
            .material("steel")
            .tool_diameter(8.0)
            .spindle_speed(5000.0)
            .feed_rate(600.0)
            .depth_of_cut(2.0)
            .operation_type("Drilling")
            .machine_type("3axis_VMC")
            .build();
        // 3.0 × 1.5 × 0.9.
        assert_relative_eq!(heuristic_power(&query).0, 4.05);
    }

    #[test]
    fn test_heuristic_first_material_branch_wins() {
        let steel = PowerQuery::builder()
            .material("steel-aluminium sandwich")
            .tool_diameter(10.0)
            .spindle_speed(8000.0)
            .feed_rate(1200.0)
            .depth_of_cut(2.0)
            .operation_type("Turning")
            .machine_type("lathe")
            .build();
        // The aluminium branch must not fire on top of the steel one.
        assert_relative_eq!(heuristic_power(&steel).0, 4.5);
    }

    #[test]
    fn test_heuristic_is_deterministic() {
        let query = aluminium_milling_query();
        assert_eq!(heuristic_power(&query), heuristic_power(&query));
    }

    #[test]
    fn test_heuristic_unknown_material_keeps_the_base() {
        let query = PowerQuery::builder()
            .material("PEEK")
            .tool_diameter(6.0)
            .spindle_speed(12_000.0)
            .feed_rate(900.0)
            .depth_of_cut(1.0)
            .operation_type("Engraving")
            .machine_type("router")
            .build();
        assert_relative_eq!(heuristic_power(&query).0, 3.0);
    }

    #[test]
    fn test_local_formula_steel_milling() {
        // 2.0 + 2.0 + 0.24 + 0.3 + 0.24 + 1.0 + 0.5.
        assert_relative_eq!(local_power(&steel_milling_query()).0, 6.28);
    }

    #[test]
    fn test_local_formula_drilling_discount() {
        let mut query = steel_milling_query();
        query.operation_type = "Drilling".to_string();
        assert_relative_eq!(local_power(&query).0, 6.28 - 0.5 - 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_mode_resolution() {
        let mut config = PredictorConfig::default();
        assert_eq!(config.mode(), PredictionMode::Heuristic);

        config.enabled = true;
        assert_eq!(config.mode(), PredictionMode::Local);

        config.use_external = true;
        assert_eq!(config.mode(), PredictionMode::Local);

        config.api_key = Some("secret".to_string());
        assert_eq!(config.mode(), PredictionMode::Delegated);

        // Disabling wins over everything else.
        config.enabled = false;
        assert_eq!(config.mode(), PredictionMode::Heuristic);
    }

    #[test]
    fn test_missing_credential_downgrades_to_local() {
        let config = PredictorConfig {
            enabled: true,
            use_external: true,
            ..PredictorConfig::default()
        };
        let predictor = CuttingPowerPredictor::new(config, ReferenceModel::new("cutting-power-v1"));
        let power = predictor.predict(&steel_milling_query()).unwrap();
        assert_relative_eq!(power.0, 6.28);
    }

    #[test]
    fn test_delegation_uses_the_injected_model() {
        struct Fixed;

        impl CuttingPowerModel for Fixed {
            fn predict(&self, _query: &PowerQuery) -> Result<Kilowatts> {
                Ok(Kilowatts(9.9))
            }
        }

        let config = PredictorConfig {
            enabled: true,
            use_external: true,
            api_key: Some("secret".to_string()),
            ..PredictorConfig::default()
        };
        let predictor = CuttingPowerPredictor::new(config, Fixed);
        assert_eq!(predictor.predict(&steel_milling_query()).unwrap(), Kilowatts(9.9));
    }

    #[test]
    fn test_bookkeeping_operations() {
        let mut predictor =
            CuttingPowerPredictor::new(PredictorConfig::default(), ReferenceModel::new("v1"));

        predictor.load_model("models/power.onnx".into());
        assert_eq!(
            predictor.config().model_path.as_deref(),
            Some(std::path::Path::new("models/power.onnx")),
        );

        predictor.train_model("data/spindle-logs.csv".into());
        assert_eq!(
            predictor.training_data.as_deref(),
            Some(std::path::Path::new("data/spindle-logs.csv")),
        );

        let error = predictor.calibrate(Kilowatts(5.1), Kilowatts(4.9));
        assert_relative_eq!(error.0, 0.2, epsilon = 1e-12);
        assert_eq!(predictor.last_calibration, Some((Kilowatts(5.1), Kilowatts(4.9))));
    }
}
