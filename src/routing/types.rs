//! Geometry primitives for the routing engine

/// A 2D point in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Sum of the absolute coordinate differences
    pub fn manhattan_distance(&self, other: Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Coordinate along the given axis (x for horizontal, y for vertical)
    pub fn along(&self, axis: Orientation) -> f64 {
        match axis {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }

    /// Build a point from a coordinate on `axis` and one on the perpendicular axis
    pub fn on_axis(axis: Orientation, main: f64, cross: f64) -> Self {
        match axis {
            Orientation::Horizontal => Self::new(main, cross),
            Orientation::Vertical => Self::new(cross, main),
        }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Inclusive containment: points on the boundary count as inside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Strict containment: points on the boundary are outside
    pub fn contains_strictly(&self, point: Point) -> bool {
        point.x > self.x && point.x < self.right() && point.y > self.y && point.y < self.bottom()
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rectangle::new(x, y, right - x, bottom - y)
    }

    /// Grow the rectangle by `margin` on every side
    pub fn inflate(&self, margin: f64) -> Rectangle {
        Rectangle::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    /// Extent of the rectangle on one axis as `(min, max)`
    pub fn span(&self, axis: Orientation) -> (f64, f64) {
        match axis {
            Orientation::Horizontal => (self.x, self.right()),
            Orientation::Vertical => (self.y, self.bottom()),
        }
    }

    /// The edge coordinate a ray leaving in `direction` crosses last
    pub fn edge(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Right => self.right(),
            Direction::Down => self.bottom(),
            Direction::Left => self.x,
            Direction::Up => self.y,
        }
    }

    /// Distance a point must travel in `direction` to reach the far edge
    pub fn clearance_from(&self, point: Point, direction: Direction) -> f64 {
        let axis = direction.orientation();
        (direction.sign() * (self.edge(direction) - point.along(axis))).max(0.0)
    }

    /// Finite coordinates and non-negative extent
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

/// Orientation of a segment, or the axis along which a handle may move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn perpendicular(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Outward direction of a connection site, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// Snap an angle in degrees (0 = right, 90 = down) to the nearest cardinal direction
    pub fn from_angle(degrees: f64) -> Direction {
        let quadrant = (degrees.rem_euclid(360.0) / 90.0).round() as i64;
        match quadrant.rem_euclid(4) {
            0 => Direction::Right,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Up,
        }
    }

    pub fn orientation(self) -> Orientation {
        match self {
            Direction::Right | Direction::Left => Orientation::Horizontal,
            Direction::Down | Direction::Up => Orientation::Vertical,
        }
    }

    /// +1 when travelling toward larger coordinates, -1 otherwise
    pub fn sign(self) -> f64 {
        match self {
            Direction::Right | Direction::Down => 1.0,
            Direction::Left | Direction::Up => -1.0,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }

    /// Dominant-axis direction from one point toward another
    pub fn toward(from: Point, to: Point) -> Direction {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if dx.abs() >= dy.abs() {
            if dx >= 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy >= 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

/// One leg of a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// `None` for zero-length or diagonal segments
    pub fn orientation(&self) -> Option<Orientation> {
        let flat = self.start.y == self.end.y;
        let upright = self.start.x == self.end.x;
        match (flat, upright) {
            (true, false) => Some(Orientation::Horizontal),
            (false, true) => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// Exactly one coordinate is shared between the endpoints
    pub fn is_axis_aligned(&self) -> bool {
        self.orientation().is_some()
    }

    /// Travel direction from start to end, `None` when not axis-aligned
    pub fn direction(&self) -> Option<Direction> {
        match self.orientation()? {
            Orientation::Horizontal if self.end.x > self.start.x => Some(Direction::Right),
            Orientation::Horizontal => Some(Direction::Left),
            Orientation::Vertical if self.end.y > self.start.y => Some(Direction::Down),
            Orientation::Vertical => Some(Direction::Up),
        }
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// `count` evenly spaced points strictly between the endpoints
    pub fn interior_samples(&self, count: usize) -> impl Iterator<Item = Point> + '_ {
        let divisions = (count + 1) as f64;
        (1..=count).map(move |i| {
            let step = i as f64;
            Point::new(
                self.start.x + (self.end.x - self.start.x) * step / divisions,
                self.start.y + (self.end.y - self.start.y) * step / divisions,
            )
        })
    }
}
