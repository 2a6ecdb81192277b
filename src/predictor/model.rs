use crate::{
    predictor::query::PowerQuery,
    prelude::*,
    quantity::{Quantity, power::Kilowatts},
};

/// Injected capability producing one cutting-power value per query.
///
/// Implementations are synchronous; transport, timeouts, and retries around a
/// real remote service belong to whoever implements this for that service.
pub trait CuttingPowerModel {
    fn predict(&self, query: &PowerQuery) -> Result<Kilowatts>;
}

/// Stand-in for the remote prediction service: the tuned coefficients its
/// responses are expected to approximate. Also serves as the test double.
pub struct ReferenceModel {
    model_id: String,
}

impl ReferenceModel {
    #[must_use]
    pub fn new(model_id: impl Into<String>) -> Self {
        Self { model_id: model_id.into() }
    }
}

impl CuttingPowerModel for ReferenceModel {
    #[instrument(skip_all, fields(model_id = %self.model_id))]
    fn predict(&self, query: &PowerQuery) -> Result<Kilowatts> {
        debug!(
            material = %query.material,
            tool_diameter = query.tool_diameter,
            spindle_speed = query.spindle_speed,
            feed_rate = query.feed_rate,
            depth_of_cut = query.depth_of_cut,
            operation = %query.operation_type,
            machine = %query.machine_type,
            "answering for the remote model",
        );

        let material = query.material.to_lowercase();
        let mut power = 2.0;
        power += if material.contains("steel") {
            2.2
        } else if material.contains("ti") {
            2.5
        } else if material.contains("al") {
            0.6
        } else {
            1.1
        };
        power += query.tool_diameter / 10.0 * 0.22;
        power += query.spindle_speed / 10_000.0 * 0.55;
        power += query.feed_rate / 1000.0 * 0.33;
        power += query.depth_of_cut * 0.44;

        let operation = query.operation_type.to_lowercase();
        if operation.contains("milling") {
            power += 0.55;
        } else if operation.contains("drilling") {
            power -= 0.15;
        }

        Ok(Quantity(power))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_reference_model_steel_milling() {
        let query = PowerQuery::builder()
            .material("Steel_S45C")
            .tool_diameter(12.0)
            .spindle_speed(6000.0)
            .feed_rate(800.0)
            .depth_of_cut(2.5)
            .operation_type("Milling")
            .machine_type("5axis_VMC")
            .build();
        // 2.0 + 2.2 + 0.264 + 0.33 + 0.264 + 1.1 + 0.55.
        let power = ReferenceModel::new("cutting-power-v1").predict(&query).unwrap();
        assert_relative_eq!(power.0, 6.708, epsilon = 1e-12);
    }

    #[test]
    fn test_reference_model_has_a_titanium_branch() {
        let query = PowerQuery::builder()
            .material("Ti6Al4V")
            .tool_diameter(10.0)
            .spindle_speed(4000.0)
            .feed_rate(300.0)
            .depth_of_cut(1.0)
            .operation_type("Milling")
            .machine_type("5axis_VMC")
            .build();
        // 2.0 + 2.5 + 0.22 + 0.22 + 0.099 + 0.44 + 0.55.
        let power = ReferenceModel::new("cutting-power-v1").predict(&query).unwrap();
        assert_relative_eq!(power.0, 6.029, epsilon = 1e-12);
    }

    #[test]
    fn test_machine_type_does_not_change_the_answer() {
        let model = ReferenceModel::new("cutting-power-v1");
        let mut query = PowerQuery::builder()
            .material("Al6061")
            .tool_diameter(10.0)
            .spindle_speed(8000.0)
            .feed_rate(1200.0)
            .depth_of_cut(2.0)
            .operation_type("Milling")
            .machine_type("3axis_VMC")
            .build();
        let three_axis = model.predict(&query).unwrap();
        query.machine_type = "5axis_VMC".to_string();
        let five_axis = model.predict(&query).unwrap();
        assert_eq!(three_axis, five_axis);
    }
}
