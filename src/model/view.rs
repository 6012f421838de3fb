use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DashboardError;
use super::member::MemberId;

/// How the member roster is laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    List,
    Grid,
}

impl Layout {
    pub fn key(self) -> &'static str {
        match self {
            Layout::List => "list",
            Layout::Grid => "grid",
        }
    }

    /// The other layout
    pub fn toggled(self) -> Layout {
        match self {
            Layout::List => Layout::Grid,
            Layout::Grid => Layout::List,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::List => write!(f, "List"),
            Layout::Grid => write!(f, "Grid"),
        }
    }
}

impl FromStr for Layout {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exact names only; no case folding or trimming
        match s {
            "list" => Ok(Layout::List),
            "grid" => Ok(Layout::Grid),
            _ => Err(DashboardError::InvalidArgument(format!(
                "invalid layout {:?} (expected \"list\" or \"grid\")",
                s
            ))),
        }
    }
}

/// User-controlled filter and selection state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub show_only_active: bool,
    /// Raw text as typed; trimmed only when matching
    pub search_text: String,
    pub layout: Layout,
    /// Need not be visible, or even exist
    pub selected_member_id: Option<MemberId>,
}

impl FilterState {
    /// The search query as used for matching, or None if it is blank
    pub fn search_query(&self) -> Option<&str> {
        let q = self.search_text.trim();
        if q.is_empty() { None } else { Some(q) }
    }
}
