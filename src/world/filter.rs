use std::ops::BitOr;

/// Bitmask classification of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category(u16);

impl Category {
    /// No category bits set.
    pub const NONE: Self = Self(0);
    /// Ordinary solid terrain and dynamic objects.
    pub const NORMAL: Self = Self(1 << 0);
    /// Terrain that carving passes may remove.
    pub const DESTRUCTIBLE: Self = Self(1 << 1);
    /// Every bit set.
    pub const ALL: Self = Self(u16::MAX);

    /// Creates a category from raw bits.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Raw bits.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns `true` if the two masks share at least one bit.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Category {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Collision filtering data carried by every fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Filter {
    /// Categories this fixture belongs to.
    pub category: Category,
    /// Categories this fixture collides with.
    pub mask: Category,
    /// Fixtures sharing a non-zero group always (positive) or never
    /// (negative) collide, overriding the masks.
    pub group_index: i16,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            category: Category::NORMAL,
            mask: Category::ALL,
            group_index: 0,
        }
    }
}

impl Filter {
    /// Default filter with the given category.
    #[must_use]
    pub fn with_category(category: Category) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }
}
