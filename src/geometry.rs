//! Core geometry types: Point, Size, Rect, Outline.
//!
//! All coordinates are in f32 pixel space. Widgets position themselves inside
//! their parent's rectangle; hit-testing and drawing both work on [`Rect`]s
//! produced by layout resolution.

use std::ops::{Add, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D position or displacement in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point { x: -self.x, y: -self.y }
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f32) -> Point {
        Point { x: self.x * rhs, y: self.y * rhs }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in pixels (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Total area (width * height).
    #[inline]
    pub fn area(self) -> f32 {
        self.width * self.height
    }

    /// Whether the point lies inside `0..width` x `0..height`.
    #[inline]
    pub fn contains(self, point: Point) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }

    /// Convert to a [`Rect`] positioned at the origin.
    #[inline]
    pub const fn to_rect(self) -> Rect {
        Rect { x: 0.0, y: 0.0, width: self.width, height: self.height }
    }
}

impl Add for Size {
    type Output = Size;
    #[inline]
    fn add(self, rhs: Size) -> Size {
        Size { width: self.width + rhs.width, height: self.height + rhs.height }
    }
}

impl Sub for Size {
    type Output = Size;
    #[inline]
    fn sub(self, rhs: Size) -> Size {
        Size { width: self.width - rhs.width, height: self.height - rhs.height }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A rectangle in pixels defined by its top-left corner and size.
///
/// The most heavily-used geometry type: every resolved widget layout is a
/// `Rect`, and hit-testing and drawing operate on it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// An empty rect at the origin.
    pub const EMPTY: Rect = Rect { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    /// Create a new rect.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rect from a position and size.
    #[inline]
    pub const fn from_parts(position: Point, size: Size) -> Self {
        Self { x: position.x, y: position.y, width: size.width, height: size.height }
    }

    /// The right edge (exclusive): `x + width`.
    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive): `y + height`.
    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// The top-left corner.
    #[inline]
    pub const fn position(self) -> Point {
        Point { x: self.x, y: self.y }
    }

    /// The dimensions.
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Whether the point lies inside this rect.
    #[inline]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Whether `other` overlaps this rect (non-zero intersection area).
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrink this rect by an [`Outline`] on each side.
    ///
    /// Width and height never go below zero.
    pub fn shrink(self, outline: Outline) -> Rect {
        Rect {
            x: self.x + outline.left,
            y: self.y + outline.top,
            width: (self.width - outline.left - outline.right).max(0.0),
            height: (self.height - outline.top - outline.bottom).max(0.0),
        }
    }

    /// Translate this rect by an offset.
    #[inline]
    pub fn translate(self, offset: Point) -> Rect {
        Rect { x: self.x + offset.x, y: self.y + offset.y, ..self }
    }
}

// ---------------------------------------------------------------------------
// Outline
// ---------------------------------------------------------------------------

/// Four-sided widths (left, top, right, bottom), used for borders.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Outline {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Outline {
    /// An all-zero outline.
    pub const ZERO: Outline = Outline { left: 0.0, top: 0.0, right: 0.0, bottom: 0.0 };

    /// Create an outline with explicit values for all four sides.
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Create an outline with the same width on all four sides.
    #[inline]
    pub const fn all(width: f32) -> Self {
        Self { left: width, top: width, right: width, bottom: width }
    }

    /// Total horizontal thickness (left + right).
    #[inline]
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    /// Total vertical thickness (top + bottom).
    #[inline]
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Point ────────────────────────────────────────────────────────

    #[test]
    fn point_arithmetic() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(1.0, 2.0);
        assert_eq!(a + b, Point::new(4.0, 6.0));
        assert_eq!(a - b, Point::new(2.0, 2.0));
        assert_eq!(-a, Point::new(-3.0, -4.0));
        assert_eq!(a * 2.0, Point::new(6.0, 8.0));
    }

    #[test]
    fn point_zero() {
        assert_eq!(Point::ZERO, Point::new(0.0, 0.0));
    }

    // ── Size ─────────────────────────────────────────────────────────

    #[test]
    fn size_area() {
        assert_eq!(Size::new(4.0, 5.0).area(), 20.0);
    }

    #[test]
    fn size_contains() {
        let s = Size::new(10.0, 5.0);
        assert!(s.contains(Point::new(0.0, 0.0)));
        assert!(s.contains(Point::new(9.9, 4.9)));
        assert!(!s.contains(Point::new(10.0, 0.0)));
        assert!(!s.contains(Point::new(-0.1, 0.0)));
    }

    #[test]
    fn size_to_rect() {
        let r = Size::new(10.0, 20.0).to_rect();
        assert_eq!(r, Rect::new(0.0, 0.0, 10.0, 20.0));
    }

    #[test]
    fn size_arithmetic() {
        let a = Size::new(10.0, 20.0);
        let b = Size::new(1.0, 2.0);
        assert_eq!(a + b, Size::new(11.0, 22.0));
        assert_eq!(a - b, Size::new(9.0, 18.0));
    }

    // ── Rect ─────────────────────────────────────────────────────────

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.position(), Point::new(10.0, 20.0));
        assert_eq!(r.size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn rect_from_parts() {
        let r = Rect::from_parts(Point::new(1.0, 2.0), Size::new(3.0, 4.0));
        assert_eq!(r, Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn rect_contains() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(29.9, 29.9)));
        assert!(!r.contains(Point::new(30.0, 15.0)));
        assert!(!r.contains(Point::new(9.9, 15.0)));
    }

    #[test]
    fn rect_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(10.0, 0.0, 5.0, 5.0);
        assert!(a.overlaps(b));
        assert!(b.overlaps(a));
        assert!(!a.overlaps(c)); // edges touch, no area shared
    }

    #[test]
    fn rect_shrink() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        let inner = r.shrink(Outline::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(inner, Rect::new(1.0, 2.0, 96.0, 44.0));
    }

    #[test]
    fn rect_shrink_clamps_to_zero() {
        let r = Rect::new(0.0, 0.0, 4.0, 4.0);
        let inner = r.shrink(Outline::all(3.0));
        assert_eq!(inner.width, 0.0);
        assert_eq!(inner.height, 0.0);
    }

    #[test]
    fn rect_translate() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.translate(Point::new(10.0, 20.0)), Rect::new(11.0, 22.0, 3.0, 4.0));
    }

    // ── Outline ──────────────────────────────────────────────────────

    #[test]
    fn outline_all() {
        let o = Outline::all(2.0);
        assert_eq!(o, Outline::new(2.0, 2.0, 2.0, 2.0));
        assert_eq!(o.horizontal(), 4.0);
        assert_eq!(o.vertical(), 4.0);
    }
}
