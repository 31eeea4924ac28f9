// package slices
// Hand-written equality for `Label`.
// slicegen creates this file once and never overwrites it.

impl Label {
    /// Reports whether `self` and `other` are equal.
    pub fn equals(&self, other: &Label) -> bool {
        self.text.eq_ignore_ascii_case(&other.text)
    }
}
