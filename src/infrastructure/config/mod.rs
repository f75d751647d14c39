//! Infrastructure configuration modules.

pub mod logging;
pub mod recommender;
pub mod settings;
