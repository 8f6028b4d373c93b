// Module exports for models

pub mod blackout;
pub mod calendar;
pub mod date_input;
pub mod settings;
