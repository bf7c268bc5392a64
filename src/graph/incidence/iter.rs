//! Restartable bidirectional cursors over graph snapshots.
//!
//! Both variants wrap the same [`Cursor`] core and share traversal and comparison
//! rules. [`BidirectionalIter`] additionally hands out `&mut` access to the current
//! element of its own snapshot; [`ConstBidirectionalIter`] is read-only.

use std::rc::Rc;

use super::error::{GraphError, GraphResult};

/// Which graph sequence a snapshot was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Sequence {
    Vertices,
    Edges,
    IncidentEdges,
    AdjacentVertices,
}

/// Ties a snapshot to the graph and graph revision it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Origin {
    pub(crate) graph: u64,
    pub(crate) revision: u64,
    pub(crate) sequence: Sequence,
}

/// Shared cursor state: snapshot, direction and position.
///
/// `index` is signed: `-1` is the before-start position of a reverse cursor (and of
/// any cursor over an empty snapshot), `len` is the past-end position of a forward one.
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    items: Rc<Vec<T>>,
    reverse: bool,
    index: isize,
    origin: Option<Origin>,
}

impl<T> Cursor<T> {
    fn new(items: Vec<T>, reverse: bool, origin: Option<Origin>) -> Self {
        let index = match (items.is_empty(), reverse) {
            (true, _) => -1,
            (false, false) => 0,
            (false, true) => items.len() as isize - 1,
        };
        Self {
            items: Rc::new(items),
            reverse,
            index,
            origin,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn position(&self) -> Option<usize> {
        usize::try_from(self.index).ok().filter(|&i| i < self.len())
    }

    #[inline]
    fn current(&self) -> Option<&T> {
        self.position().map(|i| &self.items[i])
    }

    fn remaining(&self) -> usize {
        match self.position() {
            Some(i) if self.reverse => i + 1,
            Some(i) => self.len() - i,
            None => 0,
        }
    }

    fn advance(&mut self) -> Option<&T> {
        let i = self.position()?;
        self.index += if self.reverse { -1 } else { 1 };
        Some(&self.items[i])
    }

    fn retreat(&mut self) -> GraphResult<&T> {
        let target = if self.reverse {
            self.index + 1
        } else {
            self.index - 1
        };
        if target < 0 || target as usize >= self.len() {
            return Err(GraphError::Exhausted);
        }
        self.index = target;
        Ok(&self.items[target as usize])
    }

    #[inline]
    pub(crate) fn origin(&self) -> Option<Origin> {
        self.origin
    }

    #[inline]
    fn same_position(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
            && self.index == other.index
            && self.reverse == other.reverse
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Read access shared by both iterator variants.
///
/// Implemented only by [`BidirectionalIter`] and [`ConstBidirectionalIter`]; the graph's
/// erase-by-iterator operations accept either.
pub trait GraphIterator<T>: sealed::Sealed {
    #[doc(hidden)]
    fn cursor(&self) -> &Cursor<T>;

    /// Index of the element `next()` would return, if any.
    fn current_index(&self) -> Option<usize> {
        self.cursor().position()
    }

    /// The element `next()` would return, without moving.
    fn current(&self) -> Option<&T> {
        self.cursor().current()
    }

    /// Returns true for iterators created by an `rbegin_*` factory.
    fn is_reverse(&self) -> bool {
        self.cursor().reverse
    }

    /// Length of the captured snapshot.
    fn snapshot_len(&self) -> usize {
        self.cursor().len()
    }

    /// The captured snapshot, in storage order.
    fn snapshot(&self) -> &[T] {
        self.cursor().items.as_slice()
    }
}

/// Bidirectional iterator whose snapshot elements may be modified through it.
///
/// Modifying an element never touches the graph it was taken from.
#[derive(Debug, Clone)]
pub struct BidirectionalIter<T> {
    cursor: Cursor<T>,
}

/// Read-only bidirectional iterator.
#[derive(Debug, Clone)]
pub struct ConstBidirectionalIter<T> {
    cursor: Cursor<T>,
}

macro_rules! impl_bidirectional {
    ($name:ident) => {
        impl<T> $name<T> {
            /// Iterates `items` from the first element to the last.
            pub fn new(items: Vec<T>) -> Self {
                Self {
                    cursor: Cursor::new(items, false, None),
                }
            }

            /// Iterates `items` from the last element to the first.
            pub fn new_reverse(items: Vec<T>) -> Self {
                Self {
                    cursor: Cursor::new(items, true, None),
                }
            }

            pub(crate) fn with_origin(items: Vec<T>, reverse: bool, origin: Origin) -> Self {
                Self {
                    cursor: Cursor::new(items, reverse, Some(origin)),
                }
            }

            /// Steps back one position against the direction of travel and returns
            /// the element now under the cursor.
            ///
            /// # Errors
            /// [`GraphError::Exhausted`] if that would move before the start.
            pub fn prev(&mut self) -> GraphResult<T>
            where
                T: Clone,
            {
                self.cursor.retreat().cloned()
            }

            /// Like `next()`, but reports exhaustion as an error.
            ///
            /// # Errors
            /// [`GraphError::Exhausted`] once the cursor runs past the end.
            pub fn try_next(&mut self) -> GraphResult<T>
            where
                T: Clone,
            {
                self.cursor.advance().cloned().ok_or(GraphError::Exhausted)
            }
        }

        impl<T> sealed::Sealed for $name<T> {}

        impl<T> GraphIterator<T> for $name<T> {
            #[inline]
            fn cursor(&self) -> &Cursor<T> {
                &self.cursor
            }
        }

        impl<T: Clone> Iterator for $name<T> {
            type Item = T;

            #[inline]
            fn next(&mut self) -> Option<T> {
                self.cursor.advance().cloned()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let n = self.cursor.remaining();
                (n, Some(n))
            }
        }

        impl<T: Clone> ExactSizeIterator for $name<T> {}

        impl<T> PartialEq<BidirectionalIter<T>> for $name<T> {
            fn eq(&self, other: &BidirectionalIter<T>) -> bool {
                self.cursor.same_position(&other.cursor)
            }
        }

        impl<T> PartialEq<ConstBidirectionalIter<T>> for $name<T> {
            fn eq(&self, other: &ConstBidirectionalIter<T>) -> bool {
                self.cursor.same_position(&other.cursor)
            }
        }
    };
}

impl_bidirectional!(BidirectionalIter);
impl_bidirectional!(ConstBidirectionalIter);

impl<T> Eq for BidirectionalIter<T> {}
impl<T> Eq for ConstBidirectionalIter<T> {}

impl<T: Clone> BidirectionalIter<T> {
    /// Mutable access to the element under the cursor.
    ///
    /// If the snapshot is shared with clones of this iterator it is copied first, after
    /// which this iterator no longer compares equal to those clones.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        let i = self.cursor.position()?;
        Rc::make_mut(&mut self.cursor.items).get_mut(i)
    }
}

impl<T> BidirectionalIter<T> {
    /// Drops mutable access, keeping the snapshot and position.
    pub fn into_const(self) -> ConstBidirectionalIter<T> {
        ConstBidirectionalIter {
            cursor: self.cursor,
        }
    }
}

impl<T> From<BidirectionalIter<T>> for ConstBidirectionalIter<T> {
    fn from(it: BidirectionalIter<T>) -> Self {
        it.into_const()
    }
}
