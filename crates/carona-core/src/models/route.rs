use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether the owner offers a ride or asks for one. Kept as free text in the
/// document; anything that is neither is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RouteKind {
    Offer,
    Request,
    Other(String),
}

impl RouteKind {
    /// Parse user input. "offer"/"o" and "request"/"r" are recognised
    /// case-insensitively, everything else is kept as typed.
    pub fn parse(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "offer" | "o" => RouteKind::Offer,
            "request" | "r" => RouteKind::Request,
            _ => RouteKind::Other(text.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RouteKind::Offer => "offer",
            RouteKind::Request => "request",
            RouteKind::Other(text) => text,
        }
    }
}

/// Stored text maps back only from the canonical labels, so anything a user
/// typed in an older document is written back unchanged.
impl From<String> for RouteKind {
    fn from(text: String) -> Self {
        match text.as_str() {
            "offer" => RouteKind::Offer,
            "request" => RouteKind::Request,
            _ => RouteKind::Other(text),
        }
    }
}

impl From<RouteKind> for String {
    fn from(kind: RouteKind) -> Self {
        match kind {
            RouteKind::Other(text) => text,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A posted ride between two points. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: u64,
    pub start: String,
    pub end: String,
    #[serde(rename = "user")]
    pub owner: String,
    #[serde(rename = "type")]
    pub kind: RouteKind,
}
