/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone)]
pub struct Config {
    pub building: BuildingConfig,
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub passengers: Vec<PassengerSeed>,
}

#[derive(Deserialize, Clone)]
pub struct BuildingConfig {
    pub n_floors: u8,
    pub home_floor: u8,
}

#[derive(Deserialize, Clone)]
pub struct SimulationConfig {
    pub step_interval_ms: u64,
}

#[derive(Deserialize, Clone)]
pub struct PassengerSeed {
    pub origin: u8,
    pub destination: u8,
}

/***************************************/
/*             Error type              */
/***************************************/
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    NoFloors,
    InvalidFloor { floor: u8, n_floors: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read configuration file: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse configuration file: {}", e),
            ConfigError::NoFloors => write!(f, "building must have at least one floor"),
            ConfigError::InvalidFloor { floor, n_floors } => {
                write!(f, "floor {} is outside the building (1..={})", floor, n_floors)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> ConfigError {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> ConfigError {
        ConfigError::Parse(e)
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    let config = toml::from_str(&config_str)?;
    Ok(config)
}
