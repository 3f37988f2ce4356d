//! Settings domain - the user-facing Simulink configuration file

mod properties;
mod simulink;

pub use properties::parse_properties;
pub use simulink::{
    SettingsLoad, SettingsStatus, SimulinkSettings, PORT_NUMBER_KEY, SIMULINK_ECORE_LOCATION_KEY,
    SIMULINK_MODELS_DIRECTORY_KEY,
};
