// Facing direction

/// Which way the character is oriented.
///
/// The signed value is used directly: impulse sign, spawn-offset mirroring,
/// and sprite flip all key off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right = 1,
    Left = -1,
}

impl Direction {
    /// The direction's sign as a float (+1.0 or -1.0)
    pub fn signum(self) -> f32 {
        self as i32 as f32
    }

    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::Right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signum() {
        assert_eq!(Direction::Right.signum(), 1.0);
        assert_eq!(Direction::Left.signum(), -1.0);
    }

    #[test]
    fn test_flipped() {
        assert_eq!(Direction::Right.flipped(), Direction::Left);
        assert_eq!(Direction::Left.flipped(), Direction::Right);
    }

    #[test]
    fn test_default_is_right() {
        assert_eq!(Direction::default(), Direction::Right);
    }
}
