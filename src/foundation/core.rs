pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Per-side padding in pixels, in CSS order.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edges {
    /// Top padding.
    pub top: f64,
    /// Right padding.
    pub right: f64,
    /// Bottom padding.
    pub bottom: f64,
    /// Left padding.
    pub left: f64,
}

impl Edges {
    /// The same padding on every side.
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Vertical padding `v` (top and bottom) and horizontal padding `h`.
    pub fn symmetric(v: f64, h: f64) -> Self {
        Self {
            top: v,
            right: h,
            bottom: v,
            left: h,
        }
    }

    /// No padding.
    pub fn zero() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_constructors() {
        assert_eq!(Edges::uniform(8.0).left, 8.0);
        assert_eq!(Edges::uniform(8.0).top, 8.0);

        let e = Edges::symmetric(4.0, 16.0);
        assert_eq!((e.top, e.bottom), (4.0, 4.0));
        assert_eq!((e.left, e.right), (16.0, 16.0));

        assert_eq!(Edges::zero(), Edges::default());
    }
}
