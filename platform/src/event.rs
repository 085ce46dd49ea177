#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Client rects come from the OS as signed edges; inverted or negative
    /// extents collapse to zero.
    pub fn from_extents(width: i32, height: i32) -> Self {
        Self::new(width.max(0) as u32, height.max(0) as u32)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Window-relative rectangle, `right` and `bottom` exclusive.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn size(self) -> Size {
        Size::from_extents(
            self.right.saturating_sub(self.left),
            self.bottom.saturating_sub(self.top),
        )
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Event {
    Resize(Size),
    Close,
    Activate { active: bool },
    Destroy,
    //NOTE: the whole client area is redrawn regardless of `dirty`
    Paint { dirty: Rect },
    Other { message: u32 },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    /// Run the platform's default handler for the message.
    Default,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_extents_collapse_to_zero() {
        assert_eq!(Size::from_extents(-4, 10), Size::new(0, 10));
        assert!(Size::from_extents(-4, 10).is_empty());

        let inverted = Rect { left: 0, top: 600, right: 800, bottom: 0 };
        assert_eq!(inverted.size(), Size::new(800, 0));
    }

    #[test]
    fn extreme_rects_do_not_overflow() {
        let huge = Rect { left: i32::MIN, top: i32::MIN, right: i32::MAX, bottom: i32::MAX };
        assert_eq!(huge.size(), Size::new(i32::MAX as u32, i32::MAX as u32));

        let inverted = Rect { left: i32::MAX, top: i32::MAX, right: i32::MIN, bottom: i32::MIN };
        assert_eq!(inverted.size(), Size::new(0, 0));
    }

    #[test]
    fn rect_size_is_exclusive_of_right_and_bottom() {
        let rect = Rect { left: 10, top: 20, right: 110, bottom: 70 };
        assert_eq!(rect.size(), Size::new(100, 50));
        assert!(!rect.size().is_empty());
    }
}
