//! UI layer for the desktop front end: app shell and result cards.

pub mod app;
pub mod cards;

pub use app::DishFinderApp;
