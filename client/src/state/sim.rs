//! Simulation view state: the current world's snapshot and inspection.

#[cfg(test)]
#[path = "sim_test.rs"]
mod sim_test;

use canvas::cell::Cell;
use canvas::geometry::GridSize;
use canvas::snapshot::{FrameResponse, StateResponse, counter};

use crate::net::types::InspectResponse;
use crate::util::genome::normalize_genes;
use crate::util::text::humanize_key;

/// Grid dimension assumed until the backend reports the real one.
pub const DEFAULT_GRID: u32 = 90;

/// Everything the simulation page renders, replaced wholesale per snapshot.
#[derive(Clone, Debug)]
pub struct SimState {
    pub world: String,
    pub grid: GridSize,
    pub cells: Vec<Cell>,
    pub current_tick: Option<i64>,
    pub total_days: Option<i64>,
    pub total_ticks: Option<i64>,
    pub inspection: Option<Inspection>,
}

impl Default for SimState {
    fn default() -> Self {
        Self {
            world: String::new(),
            grid: GridSize::new(DEFAULT_GRID, DEFAULT_GRID),
            cells: Vec::new(),
            current_tick: None,
            total_days: None,
            total_ticks: None,
            inspection: None,
        }
    }
}

impl SimState {
    /// Clear everything and point the state at a new world.
    pub fn reset_for(&mut self, world: &str) {
        *self = Self::default();
        self.world = world.to_owned();
    }

    /// Absorb a full state snapshot. Absent counters leave the previous
    /// values in place rather than blanking the counter bar.
    pub fn apply_state(&mut self, resp: &StateResponse) {
        self.grid = resp.grid_size(self.grid);
        self.cells = resp.to_cells();
        self.absorb_counters(resp.current_tick, resp.total_days, resp.total_ticks);
    }

    /// Absorb a historical frame. The grid is unchanged; frames carry only
    /// positions and counters.
    pub fn apply_frame(&mut self, resp: &FrameResponse) {
        self.cells = resp.to_cells();
        self.absorb_counters(resp.current_tick, resp.total_days, resp.total_ticks);
    }

    /// Record the inspection result for the cell at `(x, y)`.
    pub fn apply_inspection(&mut self, x: u32, y: u32, resp: &InspectResponse) {
        self.inspection = Some(Inspection::build(x, y, resp));
    }

    fn absorb_counters(&mut self, tick: Option<f64>, days: Option<f64>, total: Option<f64>) {
        if let Some(v) = counter(tick) {
            self.current_tick = Some(v);
        }
        if let Some(v) = counter(days) {
            self.total_days = Some(v);
        }
        if let Some(v) = counter(total) {
            self.total_ticks = Some(v);
        }
    }
}

/// Display-ready view of one inspected cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inspection {
    pub x: u32,
    pub y: u32,
    /// Humanized terrain facts, coordinates first.
    pub metadata: Vec<(String, String)>,
    /// Per-cell counters (energy totals).
    pub counters: Vec<(String, String)>,
    pub organism: Option<String>,
    /// Validated 8-hex-digit genes, uppercased.
    pub genes: Vec<String>,
}

impl Inspection {
    fn build(x: u32, y: u32, resp: &InspectResponse) -> Self {
        let mut metadata = vec![("X".to_owned(), x.to_string()), ("Y".to_owned(), y.to_string())];
        if let Some(terrain) = &resp.terrain {
            for (key, value) in terrain {
                metadata.push((humanize_key(key), value_text(value)));
            }
        }

        let mut counters = Vec::new();
        let mut organism = None;
        let mut genes = Vec::new();
        if let Some(cell) = &resp.cell {
            if let Some(v) = cell.total_energy_collected {
                counters.push(("Energy Collected".to_owned(), number_text(v)));
            }
            if let Some(v) = cell.total_energy_metabolized {
                counters.push(("Energy Metabolized".to_owned(), number_text(v)));
            }
            organism.clone_from(&cell.organism);
            genes = normalize_genes(&cell.genes);
        }

        Self { x, y, metadata, counters, organism, genes }
    }
}

fn value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn number_text(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
