// package slices
// Hand-written equality for `Point`.
// slicegen creates this file once and never overwrites it.

impl Point {
    /// Reports whether `self` and `other` are equal.
    pub fn equals(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }
}
