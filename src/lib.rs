pub mod component;
pub mod configuration;
pub mod domain;
pub mod telemetry;
pub mod webhook;
