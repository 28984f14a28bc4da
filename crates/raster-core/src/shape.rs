//! Clip shapes for the photo frame

/// Shape of the photo frame clip region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipShape {
    Circle,
    Square,
    #[default]
    RoundRect,
}

impl ClipShape {
    /// Whether the point (x, y), in frame-local coordinates, lies inside
    /// a `size` × `size` frame of this shape.
    ///
    /// `corner_radius` only applies to [`ClipShape::RoundRect`].
    pub fn contains(self, x: i32, y: i32, size: i32, corner_radius: i32) -> bool {
        if x < 0 || y < 0 || x >= size || y >= size {
            return false;
        }
        match self {
            ClipShape::Square => true,
            ClipShape::Circle => {
                // Treat the frame center as (size/2, size/2).
                let half = size as f32 / 2.0;
                let dx = x as f32 + 0.5 - half;
                let dy = y as f32 + 0.5 - half;
                dx * dx + dy * dy <= half * half
            }
            ClipShape::RoundRect => rounded_rect_contains(x, y, size, size, corner_radius),
        }
    }
}

/// Point-in-rounded-rectangle test over integer pixel coordinates.
fn rounded_rect_contains(x: i32, y: i32, w: i32, h: i32, r: i32) -> bool {
    if r <= 0 {
        return true;
    }
    // inside central cross
    if x >= r && x < w - r {
        return true;
    }
    if y >= r && y < h - r {
        return true;
    }
    // corners: distance from corner circle center
    let (cx, cy) = if x < r {
        if y < r {
            (r - 1, r - 1)
        } else {
            (r - 1, h - r)
        }
    } else if y < r {
        (w - r, r - 1)
    } else {
        (w - r, h - r)
    };
    let dx = x - cx;
    let dy = y - cy;
    dx * dx + dy * dy <= r * r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_covers_everything() {
        assert!(ClipShape::Square.contains(0, 0, 100, 0));
        assert!(ClipShape::Square.contains(99, 99, 100, 0));
        assert!(!ClipShape::Square.contains(100, 0, 100, 0));
        assert!(!ClipShape::Square.contains(-1, 0, 100, 0));
    }

    #[test]
    fn circle_excludes_corners() {
        assert!(ClipShape::Circle.contains(50, 50, 100, 0));
        assert!(!ClipShape::Circle.contains(0, 0, 100, 0));
        assert!(!ClipShape::Circle.contains(99, 99, 100, 0));
        assert!(ClipShape::Circle.contains(50, 1, 100, 0));
    }

    #[test]
    fn round_rect_keeps_edges_but_cuts_corners() {
        let r = 8;
        assert!(ClipShape::RoundRect.contains(50, 0, 100, r));
        assert!(ClipShape::RoundRect.contains(0, 50, 100, r));
        assert!(!ClipShape::RoundRect.contains(0, 0, 100, r));
        assert!(!ClipShape::RoundRect.contains(99, 99, 100, r));
        assert!(ClipShape::RoundRect.contains(8, 8, 100, r));
    }

    #[test]
    fn zero_radius_round_rect_is_square() {
        assert!(ClipShape::RoundRect.contains(0, 0, 100, 0));
    }
}
