/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use thiserror::Error;
use std::fs;
use std::path::Path;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub elevator: ElevatorConfig,
    pub speed: SpeedConfig,
    pub feedback: FeedbackConfig,
    pub terminal: TerminalConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ElevatorConfig {
    pub queue_capacity: usize,
    pub door_open_after_ms: u32,
    pub door_closing_after_ms: u32,
    pub door_closed_after_ms: u32,
    pub waiting_display_width: u8,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SpeedConfig {
    pub fast_ms: u64,
    pub slow_ms: u64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct FeedbackConfig {
    pub arrival_tone_hz: u32,
    pub arrival_tone_ms: u32,
    pub accept_tone_hz: u32,
    pub accept_tone_ms: u32,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Text,
    Json,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TerminalConfig {
    pub tick_ms: u64,
    pub render: RenderMode,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        ElevatorConfig {
            queue_capacity: 10,
            door_open_after_ms: 400,
            door_closing_after_ms: 800,
            door_closed_after_ms: 1200,
            waiting_display_width: 4,
        }
    }
}

impl Default for SpeedConfig {
    fn default() -> Self {
        SpeedConfig {
            fast_ms: 100,
            slow_ms: 300,
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        FeedbackConfig {
            arrival_tone_hz: 1000,
            arrival_tone_ms: 100,
            accept_tone_hz: 2000,
            accept_tone_ms: 50,
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    fn validate(&self) -> Result<(), ConfigError> {
        let elevator = &self.elevator;
        if elevator.queue_capacity == 0 {
            return Err(ConfigError::Invalid("queue_capacity must be at least 1".into()));
        }
        if !(elevator.door_open_after_ms < elevator.door_closing_after_ms
            && elevator.door_closing_after_ms < elevator.door_closed_after_ms)
        {
            return Err(ConfigError::Invalid(
                "door thresholds must be strictly increasing".into(),
            ));
        }
        if self.speed.fast_ms == 0 || self.speed.slow_ms == 0 {
            return Err(ConfigError::Invalid("speed presets must be non-zero".into()));
        }
        if self.terminal.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be non-zero".into()));
        }
        Ok(())
    }
}
