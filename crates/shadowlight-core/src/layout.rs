//! Stage layout: a centered row of identical shapes.

use kurbo::{Rect, Size};

use crate::style::DerivedStyle;

/// Gap kept on every side of a shape.
pub const SHAPE_MARGIN: f64 = 0.5;

/// Shapes never grow taller than this fraction of the viewport.
pub const MAX_HEIGHT_FRACTION: f64 = 0.8;

/// Size of a single shape inside `viewport`.
pub fn shape_size(style: &DerivedStyle, viewport: Size) -> Size {
    let max_height = viewport.height * MAX_HEIGHT_FRACTION;
    Size::new(style.shape_width, style.shape_height.min(max_height).max(0.0))
}

/// Lay out `count` shapes in a row centered in `viewport` (logical units).
///
/// Every rect has the same size; only the horizontal position differs.
pub fn layout_shapes(style: &DerivedStyle, count: u32, viewport: Size) -> Vec<Rect> {
    let size = shape_size(style, viewport);
    let slot_width = size.width + SHAPE_MARGIN * 2.0;
    let row_width = slot_width * count as f64;

    let left = (viewport.width - row_width) / 2.0;
    let top = (viewport.height - size.height) / 2.0;

    (0..count)
        .map(|i| {
            let x = left + slot_width * i as f64 + SHAPE_MARGIN;
            Rect::from_origin_size((x, top), size)
        })
        .collect()
}
