use std::path::PathBuf;
use thiserror::Error;

/// A command typed at the operator console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorCommand {
    ShowNetwork,
    ShowMetrics,
    ShowAlerts,
    ShowDispatch,
    Select(String),
    ClearSelection,
    Pause,
    Resume,
    AutoMode(bool),
    SignalTiming(u32),
    Reset,
    Report(PathBuf),
    Json,
    Help,
    Quit,
}

/// Why a console line could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("bad argument `{0}`")]
    BadArgument(String),
}

pub fn parse_command(line: &str) -> Result<OperatorCommand, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(ParseError::Empty);
    };
    let arg = words.next();
    let command = match head.to_ascii_lowercase().as_str() {
        "show" | "network" => OperatorCommand::ShowNetwork,
        "metrics" => OperatorCommand::ShowMetrics,
        "alerts" => OperatorCommand::ShowAlerts,
        "dispatch" => OperatorCommand::ShowDispatch,
        "select" => OperatorCommand::Select(
            arg.ok_or(ParseError::MissingArgument("node id"))?
                .to_string(),
        ),
        "clear" => OperatorCommand::ClearSelection,
        "pause" => OperatorCommand::Pause,
        "resume" | "start" => OperatorCommand::Resume,
        "auto" => match arg.ok_or(ParseError::MissingArgument("on|off"))? {
            "on" => OperatorCommand::AutoMode(true),
            "off" => OperatorCommand::AutoMode(false),
            other => return Err(ParseError::BadArgument(other.to_string())),
        },
        "timing" => {
            let raw = arg.ok_or(ParseError::MissingArgument("seconds"))?;
            let seconds = raw
                .parse::<u32>()
                .map_err(|_| ParseError::BadArgument(raw.to_string()))?;
            OperatorCommand::SignalTiming(seconds)
        }
        "reset" => OperatorCommand::Reset,
        "report" => OperatorCommand::Report(PathBuf::from(arg.unwrap_or("report"))),
        "json" => OperatorCommand::Json,
        "help" | "?" => OperatorCommand::Help,
        "quit" | "exit" => OperatorCommand::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(command)
}
