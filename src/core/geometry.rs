//! Wheel geometry — logical surface size, slice angles, hub and pointer.
//!
//! Coordinates are logical units with the origin at the top-left of the
//! surface and y growing downwards.  Angles are in degrees, measured
//! counter-clockwise from 3 o'clock, so slice 0 starts on the positive x-axis.

/// A point on the logical drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fixed layout of the wheel on its square surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    /// Surface width in logical units.
    pub width: f64,
    /// Surface height in logical units.
    pub height: f64,
    pub center: Point,
    pub radius: f64,
    pub hub_radius: f64,
    /// Distance from the wheel rim up to the pointer's apex.
    pub pointer_apex_gap: f64,
    /// Distance from the wheel rim up to the pointer's base.
    pub pointer_base_gap: f64,
    /// Half of the pointer's base width.
    pub pointer_half_width: f64,
    pub stroke_width: f64,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            center: Point::new(200.0, 200.0),
            radius: 180.0,
            hub_radius: 10.0,
            pointer_apex_gap: 20.0,
            pointer_base_gap: 5.0,
            pointer_half_width: 10.0,
            stroke_width: 2.0,
        }
    }
}

impl WheelGeometry {
    /// Pointer triangle: apex on top, base just above the rim.
    pub fn pointer(&self) -> [Point; 3] {
        let top = self.center.y - self.radius;
        [
            Point::new(self.center.x, top - self.pointer_apex_gap),
            Point::new(self.center.x - self.pointer_half_width, top - self.pointer_base_gap),
            Point::new(self.center.x + self.pointer_half_width, top - self.pointer_base_gap),
        ]
    }
}

/// Angle of `p` around `center`, in `[0, 360)`.
pub fn angle_around(center: Point, p: Point) -> f64 {
    let dx = p.x - center.x;
    let dy = center.y - p.y; // flip to y-up
    dy.atan2(dx).to_degrees().rem_euclid(360.0)
}

#[cfg(test)]
impl WheelGeometry {
    /// Point on a circle of `radius` around the centre at `angle_deg`.
    pub fn polar(&self, radius: f64, angle_deg: f64) -> Point {
        let rad = angle_deg.to_radians();
        Point::new(
            self.center.x + radius * rad.cos(),
            self.center.y - radius * rad.sin(),
        )
    }
}

/// Angle covered by each slice, or `None` for an empty wheel.
pub fn slice_angle(count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(360.0 / count as f64)
    }
}

/// Angular span of one slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceSpan {
    pub index: usize,
    pub start_deg: f64,
    pub sweep_deg: f64,
}

#[cfg(test)]
impl SliceSpan {
    pub fn end_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg
    }
}

/// Slice spans for `count` entries, in catalog order starting at 0°.
pub fn slice_spans(count: usize) -> Vec<SliceSpan> {
    let Some(sweep) = slice_angle(count) else {
        return Vec::new();
    };
    (0..count)
        .map(|index| SliceSpan {
            index,
            start_deg: index as f64 * sweep,
            sweep_deg: sweep,
        })
        .collect()
}
