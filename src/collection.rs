/// Size limits of a bounded collection (color stops, shadow layers, flex and
/// grid items). Adds beyond `max` and removals below `min` are refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

impl Bounds {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn can_add(&self, len: usize) -> bool {
        len < self.max
    }

    /// Whether `count` members can be removed from a collection of `len`.
    pub fn can_remove(&self, len: usize, count: usize) -> bool {
        count > 0 && len >= count && len - count >= self.min
    }

    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}
