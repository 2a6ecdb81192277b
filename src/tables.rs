use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::{Itertools, MinMaxResult};

use crate::{
    emission::{GRID_FACTORS, REGION_FACTORS, WORLD_AVERAGE},
    estimator::{JobEstimate, PowerProfile},
    job::Job,
    quantity::{Quantity, power::Kilowatts, rate::EmissionRate},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

#[must_use]
pub fn build_operations_table(job: &Job, predicted: Option<&[Kilowatts]>) -> Table {
    let mut table = new_table();
    let mut header = vec!["Operation", "Cutting time", "Feed", "Spindle", "Tool Ø"];
    if predicted.is_some() {
        header.push("Cutting power");
    }
    table.set_header(header);
    for (index, operation) in job.operations.iter().enumerate() {
        let mut row = vec![
            Cell::new(&operation.operation_type),
            Cell::new(operation.cutting_time).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.0} mm/min", operation.feed_rate))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.0} RPM", operation.spindle_speed))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1} mm", operation.tool_diameter))
                .set_alignment(CellAlignment::Right),
        ];
        if let Some(powers) = predicted {
            row.push(match powers.get(index) {
                Some(power) => {
                    Cell::new(power).set_alignment(CellAlignment::Right).fg(Color::Cyan)
                }
                None => Cell::new(""),
            });
        }
        table.add_row(row);
    }
    table
}

#[must_use]
pub fn build_estimate_table(
    estimate: &JobEstimate,
    profile: &PowerProfile,
    predicted: Option<&[Kilowatts]>,
) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Phase", "Power", "Time", "Energy"]);

    let cutting_power = predicted.map_or_else(
        || Cell::new(profile.cutting),
        |powers| match powers.iter().copied().minmax() {
            MinMaxResult::NoElements => Cell::new(profile.cutting),
            MinMaxResult::OneElement(power) => Cell::new(power).fg(Color::Cyan),
            MinMaxResult::MinMax(min, max) => {
                Cell::new(format!("{min}…{max}")).fg(Color::Cyan)
            }
        },
    );
    table.add_row(vec![
        Cell::new("Cutting"),
        cutting_power.set_alignment(CellAlignment::Right),
        Cell::new(estimate.time.cutting).set_alignment(CellAlignment::Right),
        Cell::new(estimate.energy.cutting).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Rapid"),
        Cell::new(profile.rapid).set_alignment(CellAlignment::Right),
        Cell::new(estimate.time.rapid).set_alignment(CellAlignment::Right),
        Cell::new(estimate.energy.rapid).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Idle"),
        Cell::new(profile.idle).set_alignment(CellAlignment::Right),
        Cell::new(estimate.time.idle).set_alignment(CellAlignment::Right),
        Cell::new(estimate.energy.idle).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(estimate.time.total())
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(estimate.energy.total())
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

#[must_use]
pub fn build_carbon_table(estimate: &JobEstimate) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Total energy", "Emission factor", "Carbon"]);
    table.add_row(vec![
        Cell::new(estimate.energy.total()).set_alignment(CellAlignment::Right),
        Cell::new(estimate.emission_factor)
            .set_alignment(CellAlignment::Right)
            .fg(factor_color(estimate.emission_factor)),
        Cell::new(estimate.carbon)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

#[must_use]
pub fn build_region_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Region", "Factor"]);
    for (aliases, factor) in REGION_FACTORS {
        let factor = EmissionRate::from(*factor);
        table.add_row(vec![
            Cell::new(aliases.iter().join(" / ")),
            Cell::new(factor).set_alignment(CellAlignment::Right).fg(factor_color(factor)),
        ]);
    }
    table
}

#[must_use]
pub fn build_grid_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Grid mix", "Factor"]);
    for (name, factor) in GRID_FACTORS {
        let factor = Quantity(*factor);
        table.add_row(vec![
            Cell::new(name),
            Cell::new(factor).set_alignment(CellAlignment::Right).fg(factor_color(factor)),
        ]);
    }
    table
}

fn factor_color(factor: EmissionRate) -> Color {
    if factor < WORLD_AVERAGE {
        Color::Green
    } else if factor > WORLD_AVERAGE {
        Color::Red
    } else {
        Color::Reset
    }
}
