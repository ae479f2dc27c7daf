// Hover emphasis: the filter only depends on the latest event, never on history.

pub const GLOW_FILTER: &str = "drop-shadow(0 0 8px rgba(255, 255, 255, 0.3))";
pub const NO_FILTER: &str = "none";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hover {
    Enter,
    Leave,
}

impl Hover {
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "mouseenter" => Some(Hover::Enter),
            "mouseleave" => Some(Hover::Leave),
            _ => None,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            Hover::Enter => "mouseenter",
            Hover::Leave => "mouseleave",
        }
    }

    /// CSS `filter` value to apply for this transition.
    #[inline]
    pub fn filter(&self) -> &'static str {
        match self {
            Hover::Enter => GLOW_FILTER,
            Hover::Leave => NO_FILTER,
        }
    }
}
