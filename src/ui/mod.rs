// UI module for the channel chart tool
//
// This module organizes the UI into separate components:
// - `chart`: chart frame configuration and series rendering
// - `app_state`: application state and main update loop

pub mod app_state;
pub mod chart;

pub use app_state::AppState;
