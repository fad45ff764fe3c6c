use crate::nav::Destination;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SOCKET_PATH: &str = "/tmp/folio.sock";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlCommand {
    Toggle,
    Open,
    Close,
    Back,
    Goto(Destination),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("'goto' needs a destination starting with '/'")]
    MissingDestination,
}

impl FromStr for ControlCommand {
    type Err = ControlError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default();

        match verb.to_ascii_lowercase().as_str() {
            "toggle" => Ok(Self::Toggle),
            "open" | "show" => Ok(Self::Open),
            "close" | "hide" => Ok(Self::Close),
            "back" => Ok(Self::Back),
            "goto" => parts
                .next()
                .filter(|d| d.starts_with('/'))
                .map(|d| Self::Goto(Destination::from(d)))
                .ok_or(ControlError::MissingDestination),
            _ => Err(ControlError::Unknown(line.trim().to_string())),
        }
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toggle => write!(f, "toggle"),
            Self::Open => write!(f, "open"),
            Self::Close => write!(f, "close"),
            Self::Back => write!(f, "back"),
            Self::Goto(destination) => write!(f, "goto {}", destination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        let cases = vec![
            ("toggle", ControlCommand::Toggle),
            ("  OPEN ", ControlCommand::Open),
            ("show", ControlCommand::Open),
            ("hide", ControlCommand::Close),
            ("back", ControlCommand::Back),
            (
                "goto /projects",
                ControlCommand::Goto(Destination::from("/projects")),
            ),
        ];

        for (line, expected) in cases {
            assert_eq!(line.parse::<ControlCommand>(), Ok(expected));
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "goto".parse::<ControlCommand>(),
            Err(ControlError::MissingDestination)
        );
        assert_eq!(
            "goto projects".parse::<ControlCommand>(),
            Err(ControlError::MissingDestination)
        );
        assert_eq!(
            "jump".parse::<ControlCommand>(),
            Err(ControlError::Unknown("jump".to_string()))
        );
    }

    #[test]
    fn test_display_is_parseable() {
        let cmd = ControlCommand::Goto(Destination::from("/contact"));
        assert_eq!(cmd.to_string(), "goto /contact");
    }
}
