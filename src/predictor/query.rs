/// Everything a power model weighs for one prediction, and everything the
/// external service wants to see.
#[derive(Clone, Debug, bon::Builder)]
pub struct PowerQuery {
    #[builder(into)]
    pub material: String,

    /// Tool diameter in mm.
    pub tool_diameter: f64,

    /// Spindle speed in RPM.
    pub spindle_speed: f64,

    /// Feed rate in mm/min.
    pub feed_rate: f64,

    /// Depth of cut in mm.
    pub depth_of_cut: f64,

    #[builder(into)]
    pub operation_type: String,

    /// Reported to the external service; the built-in formulas ignore it.
    #[builder(into)]
    pub machine_type: String,
}
