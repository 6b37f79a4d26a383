/// Which tracker slot a hand occupies.
///
/// Decided per frame from the detection's own geometry, so the same physical
/// hand may change side between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandSide {
    /// Wrist left of the first thumb knuckle
    Left,
    /// Everything else
    Right,
}

impl HandSide {
    /// Both sides in slot order.
    pub const ALL: [HandSide; 2] = [HandSide::Left, HandSide::Right];

    /// Slot index in the tracker's pair.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}
