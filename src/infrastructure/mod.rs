//! Infrastructure layer - bootstrap, file system access and logging

pub mod application;
pub mod logging;
pub mod services;
pub mod settings;
pub mod simulink;
