//! Portrayal
//!
//! Maps agent snapshots to a visual representation. Purely presentational:
//! nothing here feeds back into the simulation.

use serde::Serialize;

use crate::{AgentSnapshot, GridSnapshot, Influence};

/// Influencer colors
pub const POSITIVE_COLOR: &str = "#FFA500";
pub const NEGATIVE_COLOR: &str = "#FF0000";

/// Ordinary agent colors, by type
pub const MAJORITY_COLOR: &str = "#808080";
pub const MINORITY_COLOR: &str = "#0000FF";

/// Character used for empty cells in text rendering
pub const EMPTY_GLYPH: char = '.';

/// Shape drawn for an agent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    Circle { r: f32 },
    Rect { w: f32, h: f32 },
}

/// How a single agent is drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Portrayal {
    #[serde(flatten)]
    pub shape: Shape,
    pub color: &'static str,
    pub stroke_color: &'static str,
    pub filled: bool,
    pub layer: u8,
    /// Single character for terminal output
    #[serde(skip)]
    pub glyph: char,
}

/// Influencers are squares colored by polarity; ordinary agents are circles
/// colored by type.
pub fn portray(agent: &AgentSnapshot) -> Portrayal {
    match agent.influence {
        Some(influence) if agent.is_influencer => {
            let (color, glyph) = match influence {
                Influence::Positive => (POSITIVE_COLOR, '+'),
                Influence::Negative => (NEGATIVE_COLOR, '-'),
            };
            Portrayal {
                shape: Shape::Rect { w: 0.8, h: 0.8 },
                color,
                stroke_color: "#000000",
                filled: true,
                layer: 0,
                glyph,
            }
        }
        _ => {
            let (color, glyph) = if agent.agent_type == 0 {
                (MAJORITY_COLOR, 'x')
            } else {
                (MINORITY_COLOR, 'o')
            };
            Portrayal {
                shape: Shape::Circle { r: 0.5 },
                color,
                stroke_color: "#FFFFFF",
                filled: true,
                layer: 0,
                glyph,
            }
        }
    }
}

/// Render a snapshot as text, one line per row
pub fn render_ascii(snapshot: &GridSnapshot) -> String {
    let mut cells = vec![EMPTY_GLYPH; snapshot.width * snapshot.height];
    for agent in &snapshot.agents {
        if agent.row < snapshot.height && agent.col < snapshot.width {
            cells[agent.row * snapshot.width + agent.col] = portray(agent).glyph;
        }
    }

    let mut out = String::with_capacity((snapshot.width + 1) * snapshot.height);
    for row in cells.chunks(snapshot.width.max(1)) {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}
