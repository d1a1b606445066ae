//! Reusable view components for the simulation pages.

pub mod canvas_host;
pub mod counter_bar;
pub mod genome_panel;
pub mod inspect_panel;
pub mod step_controls;
pub mod toast;
