//! Terminal front end for interactive distribution plots
//!
//! One tab per distribution family. Each tab owns a visualizer from
//! `distviz_core` and the chart surface it draws on; the parameter panel
//! drives its sliders and the chart redraws after every committed change.

pub mod app;
pub mod components;
pub mod config;
pub mod keybindings;
pub mod logging;
pub mod state;
pub mod util;

pub use app::App;
pub use config::AppConfig;
pub use keybindings::KeybindingsConfig;
pub use logging::init_logging;
