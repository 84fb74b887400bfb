//! Untyped interaction commands from the UI boundary.
//!
//! Text form is `select:<item-id>`, `view:<view-id>` or `toggle:<period>`.
//! View identifiers stay strings here; they are checked against the
//! catalog's closed view set when the command is applied.

use crate::model::catalog::{ItemId, Period};
use crate::service::explorer::{ExplorerError, ExplorerEvent};
use crate::state::view::ViewSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerCommand {
    Select(ItemId),
    View(String),
    Toggle(Period),
}

impl ExplorerCommand {
    /// Converts into a typed event for view set `V`.
    ///
    /// # Errors
    /// - `ExplorerError::UnknownView` when the view id is not in `V`.
    pub fn into_event<V: ViewSet>(self) -> Result<ExplorerEvent<V>, ExplorerError> {
        match self {
            Self::Select(item_id) => Ok(ExplorerEvent::SelectItem(item_id)),
            Self::View(view) => ExplorerEvent::parse_view(view.as_str()),
            Self::Toggle(period) => Ok(ExplorerEvent::TogglePeriod(period)),
        }
    }
}

impl FromStr for ExplorerCommand {
    type Err = ExplorerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (verb, argument) = value
            .trim()
            .split_once(':')
            .ok_or_else(|| ExplorerError::InvalidCommand(format!("missing `:` in `{value}`")))?;
        let argument = argument.trim();
        if argument.is_empty() {
            return Err(ExplorerError::InvalidCommand(format!(
                "missing argument in `{value}`"
            )));
        }

        match verb.trim() {
            "select" => Ok(Self::Select(argument.to_string())),
            "view" => Ok(Self::View(argument.to_string())),
            "toggle" => argument
                .parse::<Period>()
                .map(Self::Toggle)
                .map_err(|err| {
                    ExplorerError::InvalidCommand(format!("bad period `{argument}`: {err}"))
                }),
            other => Err(ExplorerError::InvalidCommand(format!(
                "unknown verb `{other}`; expected select|view|toggle"
            ))),
        }
    }
}

impl Display for ExplorerCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Select(item_id) => write!(f, "select:{item_id}"),
            Self::View(view) => write!(f, "view:{view}"),
            Self::Toggle(period) => write!(f, "toggle:{period}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExplorerCommand;
    use crate::service::explorer::ExplorerError;

    #[test]
    fn parses_each_verb() {
        assert_eq!(
            "select:sidecar".parse::<ExplorerCommand>().expect("select"),
            ExplorerCommand::Select("sidecar".to_string())
        );
        assert_eq!(
            " view:roadmap ".parse::<ExplorerCommand>().expect("view"),
            ExplorerCommand::View("roadmap".to_string())
        );
        assert_eq!(
            "toggle:2".parse::<ExplorerCommand>().expect("toggle"),
            ExplorerCommand::Toggle(2)
        );
    }

    #[test]
    fn rejects_malformed_commands() {
        for raw in ["sidecar", "select:", "toggle:two", "toggle:-1", "open:vpc"] {
            let err = raw
                .parse::<ExplorerCommand>()
                .expect_err("malformed command must fail");
            assert!(
                matches!(err, ExplorerError::InvalidCommand(_)),
                "unexpected error for `{raw}`: {err}"
            );
        }
    }

    #[test]
    fn display_matches_parse_form() {
        let command = ExplorerCommand::Toggle(3);
        assert_eq!(command.to_string(), "toggle:3");
    }
}
