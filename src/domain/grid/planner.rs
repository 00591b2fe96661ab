//! Grid paging and cell sizing

use crate::domain::grid::geometry::{LayoutDirection, Point, SegmentType, Size, SplitType};
use crate::domain::shared::error::{DomainError, Result};
use tracing::debug;

/// Computes pages and per-cell geometry for a grid of `item_count` tiles
///
/// `max_items_per_page` and `layout_direction` are configuration; the item
/// count is passed on every query and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayoutPlanner {
    max_items_per_page: usize,
    layout_direction: LayoutDirection,
}

impl GridLayoutPlanner {
    /// Fails on a zero page capacity
    pub fn new(max_items_per_page: usize, layout_direction: LayoutDirection) -> Result<Self> {
        if max_items_per_page == 0 {
            return Err(DomainError::ValidationError(
                "max_items_per_page must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            max_items_per_page,
            layout_direction,
        })
    }

    pub fn with_direction(self, layout_direction: LayoutDirection) -> Self {
        Self {
            layout_direction,
            ..self
        }
    }

    pub fn max_items_per_page(&self) -> usize {
        self.max_items_per_page
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    pub fn number_of_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.max_items_per_page)
    }

    /// Index of the first item on the page holding `item_index`
    pub fn page_start_index(&self, item_index: usize) -> usize {
        (item_index / self.max_items_per_page) * self.max_items_per_page
    }

    pub fn items_remaining_on_page(&self, item_count: usize, page_start_index: usize) -> usize {
        item_count
            .saturating_sub(page_start_index)
            .min(self.max_items_per_page)
    }

    /// Number of cells the segment through `item_index` is split into
    ///
    /// For `SegmentType::Row` this is the number of cells side by side in
    /// the item's row; for `SegmentType::Column` the number stacked in its
    /// column.
    pub fn segment_count(
        &self,
        segment: SegmentType,
        item_count: usize,
        item_index: usize,
    ) -> usize {
        let n = self.items_remaining_on_page(item_count, self.page_start_index(item_index));

        match (n > 2, SplitType::new(self.layout_direction, segment)) {
            (true, SplitType::Proportional) => ceil_to_even(n) / 2,
            (true, SplitType::Middle) => {
                if is_odd_last_item(n, item_count, item_index) {
                    1
                } else {
                    2
                }
            }
            (false, SplitType::Proportional) => n,
            (false, SplitType::Middle) => 1,
        }
    }

    /// Size of one cell when a page is split into `row_count` x `column_count`
    pub fn cell_size(
        &self,
        page_bounds: Size,
        row_count: usize,
        column_count: usize,
    ) -> Result<Size> {
        if row_count == 0 || column_count == 0 {
            return Err(DomainError::InvalidOperation(format!(
                "cannot split a page into {} rows x {} columns",
                row_count, column_count
            )));
        }

        Ok(Size::new(
            page_bounds.width / column_count as f64,
            page_bounds.height / row_count as f64,
        ))
    }

    /// Size of the cell showing `item_index`
    pub fn item_size(
        &self,
        item_count: usize,
        item_index: usize,
        page_bounds: Size,
    ) -> Result<Size> {
        if item_index >= item_count {
            return Err(DomainError::NotFound(format!(
                "item {} of {}",
                item_index, item_count
            )));
        }

        let columns = self.segment_count(SegmentType::Row, item_count, item_index);
        let rows = self.segment_count(SegmentType::Column, item_count, item_index);
        debug!(item_index, item_count, rows, columns, "Sized grid cell");

        self.cell_size(page_bounds, rows, columns)
    }

    /// Cell sizes of every item on `page`, in item order
    pub fn page_frames(
        &self,
        item_count: usize,
        page: usize,
        page_bounds: Size,
    ) -> Result<Vec<Size>> {
        if page >= self.number_of_pages(item_count) {
            return Err(DomainError::NotFound(format!(
                "page {} of {}",
                page,
                self.number_of_pages(item_count)
            )));
        }

        let start = page * self.max_items_per_page;
        let end = start + self.items_remaining_on_page(item_count, start);

        (start..end)
            .map(|index| self.item_size(item_count, index, page_bounds))
            .collect()
    }

    /// `ceil(offset / page_extent)`, never negative
    ///
    /// A non-positive or non-finite extent yields page 0.
    pub fn page_index_from_scroll_offset(offset: f64, page_extent: f64) -> usize {
        if page_extent <= 0.0 || !page_extent.is_finite() || !offset.is_finite() {
            return 0;
        }

        let index = (offset / page_extent).ceil();
        if index <= 0.0 {
            0
        } else {
            index as usize
        }
    }

    /// Clamp a page index into `[0, number_of_pages - 1]`
    pub fn clamp_page_index(&self, index: usize, item_count: usize) -> usize {
        index.min(self.number_of_pages(item_count).saturating_sub(1))
    }

    /// Page shown after scrolling ended at `content_offset`, measured along
    /// the layout direction
    pub fn page_index_for_scroll(&self, content_offset: Point, frame: Size) -> usize {
        match self.layout_direction {
            LayoutDirection::Horizontal => {
                Self::page_index_from_scroll_offset(content_offset.x, frame.width)
            }
            LayoutDirection::Vertical => {
                Self::page_index_from_scroll_offset(content_offset.y, frame.height)
            }
        }
    }

    pub fn clamped_page_index_for_scroll(
        &self,
        content_offset: Point,
        frame: Size,
        item_count: usize,
    ) -> usize {
        self.clamp_page_index(self.page_index_for_scroll(content_offset, frame), item_count)
    }
}

fn ceil_to_even(n: usize) -> usize {
    n + n % 2
}

// Only the very last item of the whole grid gets a row to itself.
fn is_odd_last_item(n: usize, item_count: usize, item_index: usize) -> bool {
    n % 2 == 1 && item_index + 1 == item_count
}
