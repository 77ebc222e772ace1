//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod editing;
pub mod export;
pub mod selection;
pub mod settings;
pub mod viewport;
