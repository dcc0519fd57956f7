//! Boundary windows over the atom stream
//!
//! Every boundary between two adjacent atoms gets a [`Split`]: up to three
//! atoms on each side, nearest first, plus the literal text between them.
//! The left and right neighbours directly at the boundary always exist, the
//! outer ones may not.

use crate::types::Atom;

/// Context of one atom boundary
///
/// Ephemeral: borrowed from the atom list and the source text, valid only
/// while the driver is looking at this boundary.
#[derive(Debug, Clone, Copy)]
pub struct Split<'a> {
    pub left_1: &'a Atom,
    pub left_2: Option<&'a Atom>,
    pub left_3: Option<&'a Atom>,
    pub right_1: &'a Atom,
    pub right_2: Option<&'a Atom>,
    pub right_3: Option<&'a Atom>,
    /// Source text between `left_1` and `right_1`
    pub gap: &'a str,
    /// Text of the token assembled so far, ending with `left_1`
    pub buffer: &'a str,
}

impl<'a> Split<'a> {
    /// Window at the boundary in front of `atoms[index]`
    ///
    /// Returns `None` for `index == 0` or past the end: there is no boundary
    /// with atoms on both sides.
    pub fn at(text: &'a str, atoms: &'a [Atom], index: usize) -> Option<Self> {
        if index == 0 {
            return None;
        }
        let right_1 = atoms.get(index)?;
        let left_1 = &atoms[index - 1];
        let gap = text
            .get(left_1.bytes.end..right_1.bytes.start)
            .unwrap_or_default();

        Some(Self {
            left_1,
            left_2: index.checked_sub(2).and_then(|i| atoms.get(i)),
            left_3: index.checked_sub(3).and_then(|i| atoms.get(i)),
            right_1,
            right_2: atoms.get(index + 1),
            right_3: atoms.get(index + 2),
            gap,
            buffer: left_1.text.as_str(),
        })
    }

    /// Same window with the driver's in-progress token text
    pub fn with_buffer(self, buffer: &'a str) -> Self {
        Self { buffer, ..self }
    }

    /// Text of the atom just before the boundary
    #[inline]
    pub fn left(&self) -> &'a str {
        &self.left_1.text
    }

    /// Text of the atom just after the boundary
    #[inline]
    pub fn right(&self) -> &'a str {
        &self.right_1.text
    }

    /// Atoms touch: no whitespace at the boundary
    #[inline]
    pub fn is_tight(&self) -> bool {
        self.gap.is_empty()
    }
}

/// All boundary windows of an atom list, in order
pub struct Splits<'a> {
    text: &'a str,
    atoms: &'a [Atom],
    index: usize,
}

impl<'a> Splits<'a> {
    pub fn new(text: &'a str, atoms: &'a [Atom]) -> Self {
        Self {
            text,
            atoms,
            index: 1,
        }
    }
}

impl<'a> Iterator for Splits<'a> {
    type Item = Split<'a>;

    fn next(&mut self) -> Option<Split<'a>> {
        let split = Split::at(self.text, self.atoms, self.index)?;
        self.index += 1;
        Some(split)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.atoms.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Splits<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Atomizer;

    #[test]
    fn test_windows_near_edges() {
        let text = "a-b c";
        let atoms: Vec<Atom> = Atomizer::new().atoms(text).collect();
        let splits: Vec<Split> = Splits::new(text, &atoms).collect();
        assert_eq!(splits.len(), 3);

        let first = &splits[0];
        assert_eq!(first.left(), "a");
        assert_eq!(first.right(), "-");
        assert!(first.left_2.is_none());
        assert_eq!(first.right_2.map(|a| a.text.as_str()), Some("b"));
        assert_eq!(first.right_3.map(|a| a.text.as_str()), Some("c"));
        assert!(first.is_tight());

        let last = &splits[2];
        assert_eq!(last.gap, " ");
        assert_eq!(last.left_3.map(|a| a.text.as_str()), Some("a"));
        assert!(last.right_2.is_none());
    }

    #[test]
    fn test_no_boundaries() {
        let atoms: Vec<Atom> = Atomizer::new().atoms("слово").collect();
        assert_eq!(Splits::new("слово", &atoms).count(), 0);
        assert_eq!(Splits::new("", &[]).count(), 0);
    }

    #[test]
    fn test_gap_is_raw_whitespace() {
        let text = "1 \t\n2";
        let atoms: Vec<Atom> = Atomizer::new().atoms(text).collect();
        let split = Split::at(text, &atoms, 1).unwrap();
        assert_eq!(split.gap, " \t\n");
        assert!(!split.is_tight());
    }

    #[test]
    fn test_with_buffer() {
        let text = "т.д";
        let atoms: Vec<Atom> = Atomizer::new().atoms(text).collect();
        let split = Split::at(text, &atoms, 2).unwrap().with_buffer(&text[..3]);
        assert_eq!(split.buffer, "т.");
        assert_eq!(split.left(), ".");
    }
}
