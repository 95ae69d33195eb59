//! Portal roles and the views each role may open.
//!
//! A plain capability-set lookup: every role maps to a fixed list of views.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who is signed in to the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Resident,
    Security,
}

/// A top-level portal screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Dashboard,
    Bills,
    Visitors,
    Complaints,
    Chat,
    SecurityGate,
    MyFlat,
    Settings,
}

impl View {
    pub const ALL: [View; 8] = [
        View::Dashboard,
        View::Bills,
        View::Visitors,
        View::Complaints,
        View::Chat,
        View::SecurityGate,
        View::MyFlat,
        View::Settings,
    ];

    /// Route path of the view.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Bills => "/bills",
            Self::Visitors => "/visitors",
            Self::Complaints => "/complaints",
            Self::Chat => "/chat",
            Self::SecurityGate => "/security",
            Self::MyFlat => "/my-flat",
            Self::Settings => "/settings",
        }
    }
}

impl Role {
    /// Views this role may open, in navigation order.
    pub fn permitted_views(&self) -> &'static [View] {
        const SECURITY: [View; 5] = [
            View::Dashboard,
            View::Visitors,
            View::Chat,
            View::SecurityGate,
            View::Settings,
        ];
        const RESIDENT: [View; 7] = [
            View::Dashboard,
            View::Bills,
            View::Visitors,
            View::Complaints,
            View::Chat,
            View::MyFlat,
            View::Settings,
        ];
        match self {
            Self::Admin => &View::ALL,
            Self::Resident => &RESIDENT,
            Self::Security => &SECURITY,
        }
    }

    pub fn can_access(&self, view: View) -> bool {
        self.permitted_views().contains(&view)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Resident => "resident",
            Self::Security => "security",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = crate::SocietyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "resident" => Ok(Self::Resident),
            "security" => Ok(Self::Security),
            other => Err(crate::SocietyError::UnknownRole(other.to_string())),
        }
    }
}
