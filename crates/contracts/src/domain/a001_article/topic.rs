use serde::{Deserialize, Serialize};
use std::fmt;

/// Article topics accepted by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    JavaScript,
    React,
    Node,
}

impl Topic {
    /// Wire value, also used as the `<option>` value in forms
    pub fn code(&self) -> &'static str {
        match self {
            Topic::JavaScript => "JavaScript",
            Topic::React => "React",
            Topic::Node => "Node",
        }
    }

    pub fn all() -> Vec<Topic> {
        vec![Topic::JavaScript, Topic::React, Topic::Node]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "JavaScript" => Some(Topic::JavaScript),
            "React" => Some(Topic::React),
            "Node" => Some(Topic::Node),
            _ => None,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
