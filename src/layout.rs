/// Grid shape for tiling `n` equally-sized frames into a near-square sheet.
///
/// Derived from the frame count alone: `columns` is the smallest integer
/// whose square covers the count, `rows` whatever is needed to hold the
/// remainder. `columns * rows >= n` always holds, so trailing cells may be
/// empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
}

impl GridLayout {
    /// Layout for `n` frames: `columns = ceil(sqrt(n))`, `rows = ceil(n / columns)`.
    ///
    /// `n = 0` yields a degenerate `(0, 0)` layout; callers that would
    /// allocate from it must reject the zero-frame case first.
    pub fn for_frame_count(n: u32) -> Self {
        if n == 0 {
            return Self {
                columns: 0,
                rows: 0,
            };
        }

        let mut columns = (f64::from(n)).sqrt().ceil() as u32;
        // f64 sqrt can land one off near perfect squares; settle it exactly.
        while columns > 1 && (columns - 1) * (columns - 1) >= n {
            columns -= 1;
        }
        while columns * columns < n {
            columns += 1;
        }

        Self {
            columns,
            rows: n.div_ceil(columns),
        }
    }

    /// Top-left pixel offset of the cell holding frame `index`.
    pub fn cell_origin(&self, index: u32, frame_w: u32, frame_h: u32) -> (u32, u32) {
        (
            (index % self.columns) * frame_w,
            (index / self.columns) * frame_h,
        )
    }

    /// Pixel dimensions of the full sheet.
    pub fn sheet_size(&self, frame_w: u32, frame_h: u32) -> (u32, u32) {
        (frame_w * self.columns, frame_h * self.rows)
    }

    pub fn cell_count(&self) -> u32 {
        self.columns * self.rows
    }
}
