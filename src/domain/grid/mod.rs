//! Grid bounded context - paging and cell sizing of the call grid
//!
//! In a vertical direction the grid generally follows a 2 columns x n rows
//! layout. A single item occupies the whole page and two items stack as
//! 1 column x 2 rows. In a horizontal direction rows and columns swap.

pub mod geometry;
pub mod planner;

pub use geometry::{LayoutDirection, Point, SegmentType, Size};
pub use planner::GridLayoutPlanner;
