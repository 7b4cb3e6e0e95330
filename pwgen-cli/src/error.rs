use crate::config::ConfigError;

#[derive(Debug)]
pub enum CliError {
    IoError(String),
    ConfigError(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::IoError(msg) => f.write_fmt(std::format_args!("Io error: {}", msg)),
            Self::ConfigError(msg) => f.write_fmt(std::format_args!("Config error: {}", msg)),
        };
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::IoError(value.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::ConfigError(value.to_string())
    }
}
