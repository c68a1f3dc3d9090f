/*!
An iterator to generate the luby sequence, and partial sums of the sequence.

See <https://oeis.org/A182105> for details on the luby sequence.

Elements of the sequence are generated on request, and so the sequence is never bounded by some fixed horizon.
Likewise, [LubySums] extends a cache of partial sums only when a sum past the end of the cache is requested.

The iterator follows [chaotic-evil](https://gitlab.com/chaotic-evil)'s general [implementation](https://gitlab.com/chaotic-evil/luby).
*/

/// Representation used for numbers in a luby sequence.
pub type LubyRepresentation = u64;

/// Foundation of the iterator.
pub struct Luby {
    curr: LubyRepresentation,
    next: LubyRepresentation,
}

// The iterator is not advanced on creation, so the first call to next returns the first element of the sequence.
impl Default for Luby {
    fn default() -> Self {
        Luby { curr: 0, next: 0 }
    }
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.curr & self.curr.wrapping_neg() == self.next {
            self.curr = self.curr.checked_add(1)?;
            self.next = 1;
        } else {
            self.next = self.next.checked_add(self.next)?;
        }

        Some(self.next)
    }
}

/// Partial sums of the luby sequence, where `sum(k)` is the sum of the first *k + 1* elements.
///
/// ```rust
/// # use tandem_sat::generic::luby::LubySums;
/// let mut sums = LubySums::default();
/// assert_eq!(sums.sum(3), 5);
/// assert_eq!(sums.sum(0), 1);
/// ```
#[derive(Default)]
pub struct LubySums {
    luby: Luby,
    sums: Vec<LubyRepresentation>,
}

impl LubySums {
    /// The sum of the first `index + 1` elements of the luby sequence.
    ///
    /// Saturates at [LubyRepresentation::MAX], should the sequence ever be exhausted.
    pub fn sum(&mut self, index: usize) -> LubyRepresentation {
        while self.sums.len() <= index {
            let previous = self.sums.last().copied().unwrap_or(0);
            let element = self.luby.next().unwrap_or(LubyRepresentation::MAX);
            self.sums.push(previous.saturating_add(element));
        }
        self.sums[index]
    }

    /// The number of partial sums generated so far.
    pub fn generated(&self) -> usize {
        self.sums.len()
    }
}
