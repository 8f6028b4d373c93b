// Service module exports

pub mod calendar_grid;
pub mod settings;
