//! Rasterization of segments into a level-stamped pixel buffer
//!
//! Grid points are mapped to pixels as `point * cell_size + centre`. Every
//! pixel remembers the first level that touched it (stored as `level + 1`,
//! with 0 meaning untouched), which lets exporters show the pattern either
//! complete or cumulatively up to any level.

use crate::algorithm::node::Segment;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::direction::{Move, offset_for};
use crate::spatial::point::Point;
use ndarray::Array2;

/// Pixel dimensions and cell scale of the output canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Edge length of one grid cell in pixels
    pub cell_size: u32,
}

impl CanvasLayout {
    /// Validate and build a layout
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any dimension is zero
    pub fn new(width: u32, height: u32, cell_size: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "canvas",
                &format!("{width}x{height}"),
                &"canvas dimensions must be positive",
            ));
        }
        if cell_size == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &"cell size must be positive",
            ));
        }

        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    /// Grid cells across the canvas, at least one
    pub fn cells_wide(&self) -> u32 {
        (self.width / self.cell_size).max(1)
    }

    /// Grid cells down the canvas, at least one
    pub fn cells_high(&self) -> u32 {
        (self.height / self.cell_size).max(1)
    }

    /// Pixel position of a grid point
    pub fn to_canvas(&self, point: Point) -> Point {
        let centre = Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0);
        point.scale(f64::from(self.cell_size)) + centre
    }
}

/// Pixel buffer recording the level at which each pixel was first drawn
#[derive(Debug, Clone)]
pub struct LevelRaster {
    layout: CanvasLayout,
    stamps: Array2<u32>,
    deepest_level: Option<u32>,
}

impl LevelRaster {
    /// Empty raster covering `layout`
    pub fn new(layout: CanvasLayout) -> Self {
        Self {
            layout,
            stamps: Array2::zeros((layout.height as usize, layout.width as usize)),
            deepest_level: None,
        }
    }

    /// Canvas layout
    pub const fn layout(&self) -> &CanvasLayout {
        &self.layout
    }

    /// Deepest level drawn so far
    pub const fn deepest_level(&self) -> Option<u32> {
        self.deepest_level
    }

    /// Level stamp of a pixel; `None` if untouched or outside the canvas
    pub fn level_at(&self, x: u32, y: u32) -> Option<u32> {
        self.stamps
            .get([y as usize, x as usize])
            .copied()
            .filter(|&stamp| stamp > 0)
            .map(|stamp| stamp - 1)
    }

    /// Number of pixels drawn at or before `level`
    pub fn drawn_pixels(&self, level: u32) -> usize {
        self.stamps
            .iter()
            .filter(|&&stamp| stamp > 0 && stamp - 1 <= level)
            .count()
    }

    /// Iterate over `(x, y, level)` for every drawn pixel
    pub fn drawn(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        self.stamps
            .indexed_iter()
            .filter(|&(_, &stamp)| stamp > 0)
            .map(|((row, col), &stamp)| (col as u32, row as u32, stamp - 1))
    }

    /// Draw every segment of one level
    pub fn draw_segments(&mut self, segments: &[Segment]) {
        for segment in segments {
            self.draw_segment(segment);
        }
    }

    /// Draw a single segment: a line for moves, an end cap for terminations
    pub fn draw_segment(&mut self, segment: &Segment) {
        self.deepest_level = Some(
            self.deepest_level
                .map_or(segment.level, |deepest| deepest.max(segment.level)),
        );

        if segment.is_terminal() {
            self.draw_end_cap(segment);
        } else {
            let start = self.layout.to_canvas(segment.start);
            let end = self.layout.to_canvas(segment.end);
            self.draw_line(start, end, segment.level);
        }
    }

    // A short stub along the heading closed by a small ring
    fn draw_end_cap(&mut self, segment: &Segment) {
        let cell = f64::from(self.layout.cell_size);
        let radius = cell / 10.0;
        let stub_length = (cell - radius) / 4.0;
        let heading = offset_for(Move::StepUp, segment.orientation);

        let start = self.layout.to_canvas(segment.start);
        let stub_end = start + heading.scale(stub_length);
        let centre = start + heading.scale(stub_length + radius);

        self.draw_line(start, stub_end, segment.level);
        self.draw_circle(centre, radius, segment.level);
    }

    fn draw_line(&mut self, from: Point, to: Point, level: u32) {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0);

        for step in 0..=steps as u32 {
            let t = f64::from(step) / steps;
            self.stamp(dx.mul_add(t, from.x), dy.mul_add(t, from.y), level);
        }
    }

    fn draw_circle(&mut self, centre: Point, radius: f64, level: u32) {
        let circumference = std::f64::consts::TAU * radius;
        let steps = circumference.ceil().max(8.0) as u32;

        for step in 0..steps {
            let angle = std::f64::consts::TAU * f64::from(step) / f64::from(steps);
            self.stamp(
                radius.mul_add(angle.cos(), centre.x),
                radius.mul_add(angle.sin(), centre.y),
                level,
            );
        }
    }

    fn stamp(&mut self, x: f64, y: f64, level: u32) {
        let (x, y) = (x.round(), y.round());
        if x < 0.0 || y < 0.0 {
            return;
        }

        if let Some(stamp) = self.stamps.get_mut([y as usize, x as usize])
            && (*stamp == 0 || *stamp > level + 1)
        {
            *stamp = level + 1;
        }
    }
}
