//! Bridge between the egui thread and the worker that talks to the recommender.

pub mod commands;
pub mod runtime;
