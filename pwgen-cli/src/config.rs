use std::path::PathBuf;

use json::JsonValue;
use log::{info, warn};
use pwgen_lib::policy::GenerationRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub length: usize,
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
    pub copy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: 12,
            lower: true,
            upper: true,
            digits: true,
            symbols: true,
            copy: false,
        }
    }
}

impl Config {
    /// Missing or mistyped keys keep their default value
    pub fn from_json(value: &JsonValue) -> Self {
        let default = Self::default();

        Self {
            length: value["length"].as_usize().unwrap_or(default.length),
            lower: value["lower"].as_bool().unwrap_or(default.lower),
            upper: value["upper"].as_bool().unwrap_or(default.upper),
            digits: value["digits"].as_bool().unwrap_or(default.digits),
            symbols: value["symbols"].as_bool().unwrap_or(default.symbols),
            copy: value["copy"].as_bool().unwrap_or(default.copy),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        let mut value = JsonValue::new_object();
        value["length"] = self.length.into();
        value["lower"] = self.lower.into();
        value["upper"] = self.upper.into();
        value["digits"] = self.digits.into();
        value["symbols"] = self.symbols.into();
        value["copy"] = self.copy.into();
        value
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            length: self.length,
            use_lower: self.lower,
            use_upper: self.upper,
            use_digits: self.digits,
            use_symbols: self.symbols,
        }
    }

    pub fn set_request(&mut self, request: &GenerationRequest) {
        self.length = request.length;
        self.lower = request.use_lower;
        self.upper = request.use_upper;
        self.digits = request.use_digits;
        self.symbols = request.use_symbols;
    }
}

#[derive(Debug)]
pub enum ConfigError {
    NoConfigDir(String),
    IoError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::NoConfigDir(msg) => {
                f.write_fmt(std::format_args!("No config directory: {}", msg))
            }
            Self::IoError(msg) => f.write_fmt(std::format_args!("Io error: {}", msg)),
        };
    }
}

impl std::error::Error for ConfigError {}

impl From<std::env::VarError> for ConfigError {
    fn from(value: std::env::VarError) -> Self {
        Self::NoConfigDir(value.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::IoError(value.to_string())
    }
}

fn get_config_dir() -> Result<PathBuf, ConfigError> {
    #[cfg(unix)]
    let app_data = std::env::var("HOME")? + "/.config";

    #[cfg(windows)]
    let app_data = std::env::var("APPDATA")?;

    let mut path = PathBuf::from(app_data);
    path.push("pwgen");

    Ok(path)
}

pub fn get_config_file() -> Result<PathBuf, ConfigError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push("config.json");

    Ok(config_dir)
}

pub fn get_config() -> Config {
    let file = match get_config_file() {
        Ok(file) => file,
        Err(error) => {
            warn!("failed to get config: {}", error);
            return Config::default();
        }
    };

    read_config(&file)
}

pub fn read_config(file: &std::path::Path) -> Config {
    if !file.exists() {
        info!("no config at \"{}\", using defaults", file.display());
        return Config::default();
    }

    info!("reading from file \"{}\"", file.display());

    let contents = match std::fs::read_to_string(file) {
        Ok(contents) => contents,
        Err(error) => {
            warn!("failed to read config: {}", error);
            return Config::default();
        }
    };

    match json::parse(contents.as_str()) {
        Ok(parsed) => Config::from_json(&parsed),
        Err(error) => {
            warn!("failed to parse config: {}", error);
            Config::default()
        }
    }
}

pub fn write_config(config: &Config) -> Result<PathBuf, ConfigError> {
    let file = get_config_file()?;
    write_config_to(config, &file)?;

    Ok(file)
}

pub fn write_config_to(config: &Config, file: &std::path::Path) -> Result<(), ConfigError> {
    if let Some(dir) = file.parent() {
        std::fs::create_dir_all(dir)?;
    }

    info!("writing to file \"{}\"", file.display());
    std::fs::write(file, config.to_json().pretty(4))?;

    Ok(())
}
