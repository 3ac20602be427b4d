pub mod config;
pub mod logging;

pub mod color;
pub mod text;
pub mod uri;
