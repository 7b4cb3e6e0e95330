use pwgen_lib::charset::CharacterClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    Length(usize),
    Toggle(CharacterClass),
    Generate,
    Password,
    Copy,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    InvalidArgument(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::Unknown(msg) => f.write_fmt(std::format_args!(
                "Unknown command \"{}\", type help for a list of commands",
                msg
            )),
            Self::MissingArgument(msg) => f.write_fmt(std::format_args!("Expected {}", msg)),
            Self::InvalidArgument(msg) => {
                f.write_fmt(std::format_args!("Invalid argument \"{}\"", msg))
            }
        };
    }
}

impl std::error::Error for CommandError {}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut itr = line.split_whitespace();

        let value = match itr.next() {
            Some(value) => value,
            None => return Ok(None),
        };

        let command = match value {
            "help" | "?" => Command::Help,
            "show" | "settings" => Command::Show,
            "length" => {
                let length = itr.next().ok_or(CommandError::MissingArgument("a length"))?;
                match length.parse::<usize>() {
                    Ok(length) => Command::Length(length),
                    Err(_) => return Err(CommandError::InvalidArgument(length.to_string())),
                }
            }
            "toggle" => {
                let class = itr
                    .next()
                    .ok_or(CommandError::MissingArgument("lower, upper, digits or symbols"))?;
                Command::Toggle(parse_class(class)?)
            }
            "generate" | "g" => Command::Generate,
            "password" | "p" => Command::Password,
            "copy" | "c" => Command::Copy,
            "exit" | "quit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(value.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_class(value: &str) -> Result<CharacterClass, CommandError> {
    return match value.to_ascii_lowercase().as_str() {
        "lower" | "lowercase" => Ok(CharacterClass::Lowercase),
        "upper" | "uppercase" => Ok(CharacterClass::Uppercase),
        "digit" | "digits" | "numbers" => Ok(CharacterClass::Digit),
        "symbol" | "symbols" => Ok(CharacterClass::Symbol),
        _ => Err(CommandError::InvalidArgument(value.to_string())),
    };
}
