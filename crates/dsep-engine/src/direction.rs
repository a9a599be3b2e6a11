use std::fmt;

use serde::{Deserialize, Serialize};

/// The way a trail entered a node during the active-trail search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Entered from a child: the trail is moving toward ancestors.
    /// The source node starts in this state.
    Up,
    /// Entered from a parent: the trail is moving toward descendants.
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}
