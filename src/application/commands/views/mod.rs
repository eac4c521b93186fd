// src/application/commands/views/mod.rs
mod increment;
mod service;

pub use increment::IncrementViewCommand;
pub use service::ViewCounterService;
