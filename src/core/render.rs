//! Wheel renderer — turns the catalog into a list of draw commands, and a
//! small software rasteriser that executes those commands onto a pixel grid.
//!
//! `render_wheel` is a pure function: same entries and geometry in, same
//! commands out.  The first command is always a `Clear`, so replaying the
//! list on a dirty canvas never leaves stale slices behind.

use super::catalog::{Entry, Rgb};
use super::geometry::{angle_around, slice_spans, Point, WheelGeometry};

/// One primitive drawing operation, in logical coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Paint the whole surface.
    Clear { color: Rgb },
    /// A pie slice.
    Wedge {
        center: Point,
        radius: f64,
        start_deg: f64,
        sweep_deg: f64,
        fill: Rgb,
        stroke: Rgb,
        stroke_width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Rgb,
        stroke: Rgb,
        stroke_width: f64,
    },
    Triangle {
        points: [Point; 3],
        fill: Rgb,
        stroke: Rgb,
        stroke_width: f64,
    },
}

/// Fixed colours for everything on the wheel that is not an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub slice_stroke: Rgb,
    pub hub_fill: Rgb,
    pub hub_stroke: Rgb,
    pub pointer_fill: Rgb,
    pub pointer_stroke: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            slice_stroke: Rgb::WHITE,
            hub_fill: Rgb::BLACK,
            hub_stroke: Rgb::WHITE,
            pointer_fill: Rgb::RED,
            pointer_stroke: Rgb::BLACK,
        }
    }
}

/// Build the draw commands for a wheel of `entries`.
///
/// Slices come first (catalog order), then the hub, then the pointer.  An
/// empty entry list yields only the clear, hub and pointer.
pub fn render_wheel(entries: &[Entry], geometry: &WheelGeometry, palette: &Palette) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(entries.len() + 3);
    commands.push(DrawCommand::Clear {
        color: palette.background,
    });

    for span in slice_spans(entries.len()) {
        let entry = &entries[span.index];
        commands.push(DrawCommand::Wedge {
            center: geometry.center,
            radius: geometry.radius,
            start_deg: span.start_deg,
            sweep_deg: span.sweep_deg,
            fill: entry.color,
            stroke: palette.slice_stroke,
            stroke_width: geometry.stroke_width,
        });
    }

    commands.push(DrawCommand::Circle {
        center: geometry.center,
        radius: geometry.hub_radius,
        fill: palette.hub_fill,
        stroke: palette.hub_stroke,
        stroke_width: geometry.stroke_width,
    });
    commands.push(DrawCommand::Triangle {
        points: geometry.pointer(),
        fill: palette.pointer_fill,
        stroke: palette.pointer_stroke,
        stroke_width: geometry.stroke_width,
    });

    commands
}

// ───────────────────────────────────────── rasteriser ────────

/// A grid of pixels covering the logical surface, uniformly scaled and
/// centred.  Unpainted pixels are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Option<Rgb>>,
    /// Pixels per logical unit.
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl PixelCanvas {
    /// A blank canvas of `width × height` pixels showing a logical surface
    /// of `surface_width × surface_height` units.
    pub fn new(width: usize, height: usize, surface_width: f64, surface_height: f64) -> Self {
        let scale = if surface_width > 0.0 && surface_height > 0.0 {
            (width as f64 / surface_width).min(height as f64 / surface_height)
        } else {
            1.0
        };
        Self {
            width,
            height,
            pixels: vec![None; width * height],
            scale,
            offset_x: (width as f64 - surface_width * scale) / 2.0,
            offset_y: (height as f64 - surface_height * scale) / 2.0,
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[y * self.width + x]
    }

    /// Logical coordinates of the centre of pixel `(x, y)`.
    pub fn to_logical(&self, x: usize, y: usize) -> Point {
        Point::new(
            (x as f64 + 0.5 - self.offset_x) / self.scale,
            (y as f64 + 0.5 - self.offset_y) / self.scale,
        )
    }

    /// Execute `commands` in order; later commands paint over earlier ones.
    pub fn execute(&mut self, commands: &[DrawCommand]) {
        // Logical size of one pixel.
        let pixel = 1.0 / self.scale;
        for cmd in commands {
            if let DrawCommand::Clear { color } = cmd {
                self.pixels.fill(Some(*color));
                continue;
            }
            for y in 0..self.height {
                for x in 0..self.width {
                    let p = self.to_logical(x, y);
                    if let Some(color) = cover(cmd, p, pixel) {
                        self.pixels[y * self.width + x] = Some(color);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
impl PixelCanvas {
    /// Colour of the pixel covering logical point `p`.
    pub fn sample(&self, p: Point) -> Option<Rgb> {
        let x = (p.x * self.scale + self.offset_x).floor();
        let y = (p.y * self.scale + self.offset_y).floor();
        if x < 0.0 || y < 0.0 {
            return None;
        }
        self.pixel(x as usize, y as usize)
    }

    /// Number of painted pixels.
    pub fn painted(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_some()).count()
    }
}

/// Colour `cmd` paints at `p`, if any, on a grid whose pixels are `pixel`
/// logical units wide.
///
/// Strokes are at least a third of a pixel wide so outlines survive coarse
/// grids.  A circle or triangle too small to hold its outline and some fill
/// is painted in its fill colour alone, and a triangle also claims pixels
/// within half a pixel diagonal of it, so the pointer never vanishes.
fn cover(cmd: &DrawCommand, p: Point, pixel: f64) -> Option<Rgb> {
    let min_half_stroke = 0.35 * pixel;
    match *cmd {
        DrawCommand::Clear { color } => Some(color),
        DrawCommand::Wedge {
            center,
            radius,
            start_deg,
            sweep_deg,
            fill,
            stroke,
            stroke_width,
        } => {
            let d = (p.x - center.x).hypot(p.y - center.y);
            if d > radius {
                return None;
            }
            let angle = angle_around(center, p);
            let full_turn = sweep_deg >= 360.0;
            let rel = (angle - start_deg).rem_euclid(360.0);
            if !full_turn && rel >= sweep_deg {
                return None;
            }
            let mut edge = radius - d;
            if !full_turn {
                edge = edge
                    .min(distance_to_ray(d, rel))
                    .min(distance_to_ray(d, sweep_deg - rel));
            }
            let half = (stroke_width / 2.0).max(min_half_stroke);
            Some(if edge < half { stroke } else { fill })
        }
        DrawCommand::Circle {
            center,
            radius,
            fill,
            stroke,
            stroke_width,
        } => {
            let d = (p.x - center.x).hypot(p.y - center.y);
            if d > radius {
                return None;
            }
            let half = (stroke_width / 2.0).max(min_half_stroke);
            if radius < 2.0 * half {
                return Some(fill);
            }
            Some(if radius - d < half { stroke } else { fill })
        }
        DrawCommand::Triangle {
            points,
            fill,
            stroke,
            stroke_width,
        } => {
            let inside = in_triangle(p, &points);
            let edge = (0..3)
                .map(|i| distance_to_segment(p, points[i], points[(i + 1) % 3]))
                .fold(f64::INFINITY, f64::min);
            if !inside && edge > pixel * std::f64::consts::FRAC_1_SQRT_2 {
                return None;
            }
            let half = (stroke_width / 2.0).max(min_half_stroke);
            if inradius(&points) < 3.0 * half {
                return Some(fill);
            }
            Some(if !inside || edge < half { stroke } else { fill })
        }
    }
}

/// Radius of the largest circle inside `t`: twice the area over the perimeter.
fn inradius(t: &[Point; 3]) -> f64 {
    let cross = (t[1].x - t[0].x) * (t[2].y - t[0].y) - (t[2].x - t[0].x) * (t[1].y - t[0].y);
    let area = cross.abs() / 2.0;
    let perimeter: f64 = (0..3)
        .map(|i| {
            let (a, b) = (t[i], t[(i + 1) % 3]);
            (b.x - a.x).hypot(b.y - a.y)
        })
        .sum();
    if perimeter == 0.0 {
        0.0
    } else {
        2.0 * area / perimeter
    }
}

/// Perpendicular distance from a point at radius `d` to a ray `delta_deg`
/// away from it (beyond 90° the nearest point is the centre).
fn distance_to_ray(d: f64, delta_deg: f64) -> f64 {
    if delta_deg >= 90.0 {
        d
    } else {
        d * delta_deg.to_radians().sin()
    }
}

fn in_triangle(p: Point, t: &[Point; 3]) -> bool {
    let sign = |a: Point, b: Point| (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y);
    let d1 = sign(t[0], t[1]);
    let d2 = sign(t[1], t[2]);
    let d3 = sign(t[2], t[0]);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0)
    };
    (p.x - (a.x + t * abx)).hypot(p.y - (a.y + t * aby))
}
