use std::fmt;
use serde::Serialize;

/// Identifier correlating the log lines of one call.
///
/// Kept exactly as it appeared in the log; later matching is by substring.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CallId(String);

impl CallId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Routing category of a transfer destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventLabel {
    #[serde(rename = "Time Condition Applied")]
    TimeCondition,
    #[serde(rename = "Call Sent to Ring Group")]
    RingGroup,
    #[serde(rename = "Call Routed to an Extension")]
    Extension,
    #[serde(rename = "Call Passed Through an IVR")]
    Ivr,
    #[serde(rename = "Call Routed")]
    Routed,
}

impl EventLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventLabel::TimeCondition => "Time Condition Applied",
            EventLabel::RingGroup => "Call Sent to Ring Group",
            EventLabel::Extension => "Call Routed to an Extension",
            EventLabel::Ivr => "Call Passed Through an IVR",
            EventLabel::Routed => "Call Routed",
        }
    }
}

impl fmt::Display for EventLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One routing decision, in the order its line appears in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallEvent {
    #[serde(rename = "event")]
    pub event_label: EventLabel,
    pub destination: u64,
    /// Source line with surrounding whitespace trimmed.
    #[serde(rename = "log")]
    pub raw_log: String,
}

/// Everything one phone-number query found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallFlow {
    pub call_id: CallId,
    #[serde(rename = "callFlow")]
    pub events: Vec<CallEvent>,
}

impl CallFlow {
    /// The last routing decision, where the call ended up.
    pub fn final_event(&self) -> Option<&CallEvent> {
        self.events.last()
    }
}
