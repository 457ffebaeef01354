//! Label types shared by the layout pipeline.
//!
//! These are intentionally lightweight and `Clone`-friendly so tests can snapshot intermediate
//! pipeline state.

/// Primary layout axis. Rank increases along this axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    TopToBottom,
    LeftToRight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    pub direction: Direction,
    /// Gap between neighboring nodes on the same rank (secondary axis).
    pub nodesep: f64,
    /// Gap between consecutive ranks (primary axis).
    pub ranksep: f64,
    /// Margin added on the left/right of the drawing.
    pub marginx: f64,
    /// Margin added on the top/bottom of the drawing.
    pub marginy: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            direction: Direction::TopToBottom,
            nodesep: 50.0,
            ranksep: 80.0,
            marginx: 50.0,
            marginy: 50.0,
        }
    }
}

/// Per-node solver state. `x`/`y` are center coordinates once `position` has run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub width: f64,
    pub height: f64,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rank: Option<i32>,
    pub order: Option<usize>,
}

impl NodeLabel {
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    /// Minimum number of ranks this edge must span.
    pub minlen: usize,
    pub weight: f64,
    /// Set while a feedback arc is reversed for the solve; restored by `acyclic::undo`.
    pub reversed: bool,
}

impl Default for EdgeLabel {
    fn default() -> Self {
        Self {
            minlen: 1,
            weight: 1.0,
            reversed: false,
        }
    }
}
