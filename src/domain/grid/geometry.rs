//! Geometry value types for the grid

use serde::{Deserialize, Serialize};

/// Width and height in points
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Scroll position of the grid's content
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Scroll/paging axis of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    #[default]
    Vertical,
    Horizontal,
}

/// A line of cells, either across (row) or down (column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentType {
    Row,
    Column,
}

/// How a segment is divided for a given direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SplitType {
    /// Split down the middle: at most two cells side by side
    Middle,
    /// Number of cells grows with the item count
    Proportional,
}

impl SplitType {
    pub(crate) fn new(direction: LayoutDirection, segment: SegmentType) -> Self {
        match (direction, segment) {
            (LayoutDirection::Vertical, SegmentType::Row)
            | (LayoutDirection::Horizontal, SegmentType::Column) => SplitType::Middle,
            (LayoutDirection::Horizontal, SegmentType::Row)
            | (LayoutDirection::Vertical, SegmentType::Column) => SplitType::Proportional,
        }
    }
}
