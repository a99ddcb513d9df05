use anyhow::Context;
use serde::Serialize;
use std::fmt::{Display, Formatter};

const TO_EARLIEST: &str = "--to-earliest";
const TO_LATEST: &str = "--to-latest";
const TO_CURRENT: &str = "--to-current";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetDirective {
    ToEarliest,
    ToLatest,
    ToCurrent,
    Other(String),
}

impl ResetDirective {
    /// Classifies the directive text picked from the reset type list.
    pub fn parse(text: &str) -> Self {
        if text.contains(TO_EARLIEST) {
            ResetDirective::ToEarliest
        } else if text.contains(TO_LATEST) {
            ResetDirective::ToLatest
        } else if text.contains(TO_CURRENT) {
            ResetDirective::ToCurrent
        } else {
            ResetDirective::Other(text.to_owned())
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ResetDirective::Other(_))
    }

    /// Whether the operator has to enter a value for this directive.
    pub fn requires_value(&self) -> bool {
        !self.is_terminal()
    }
}

impl Display for ResetDirective {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResetDirective::ToEarliest => write!(f, "{TO_EARLIEST}"),
            ResetDirective::ToLatest => write!(f, "{TO_LATEST}"),
            ResetDirective::ToCurrent => write!(f, "{TO_CURRENT}"),
            ResetDirective::Other(text) => write!(f, "{text}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetCommand {
    pub group: String,
    pub topic: String,
    pub cmd: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ResetCommand {
    /// `value` is kept only for directives that need one.
    pub fn new(
        group: impl Into<String>,
        topic: impl Into<String>,
        directive_text: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        let cmd = directive_text.into();
        let value = if ResetDirective::parse(&cmd).requires_value() {
            Some(value.unwrap_or_default())
        } else {
            None
        };

        Self {
            group: group.into(),
            topic: topic.into(),
            cmd,
            value,
        }
    }

    pub fn directive(&self) -> ResetDirective {
        ResetDirective::parse(&self.cmd)
    }

    pub fn to_json(&self) -> Result<String, anyhow::Error> {
        serde_json::to_string(self).context("While serializing reset command")
    }
}

/// Body of the execute endpoint, carrying the command as a JSON string.
#[derive(Debug, Clone, Serialize)]
pub struct ExecuteEnvelope {
    pub json: String,
}

impl TryFrom<&ResetCommand> for ExecuteEnvelope {
    type Error = anyhow::Error;

    fn try_from(value: &ResetCommand) -> Result<Self, Self::Error> {
        Ok(Self {
            json: value.to_json()?,
        })
    }
}
