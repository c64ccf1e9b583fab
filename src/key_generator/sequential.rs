use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator over the keys `0..num`, in ascending or descending order.
/// Sorted input is the worst case for an unbalanced tree and makes the
/// rebalancing run at every insertion
pub struct SequentialKeys {
    position: u32,
    num: u32,
    order: SequentialOrder,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SequentialOrder {
    Ascending,
    Descending,
}

impl SequentialKeys {
    pub fn new(num: usize, order: SequentialOrder) -> SequentialKeys {
        assert!(num <= u32::MAX as usize, "too many keys: {}", num);
        SequentialKeys {
            position: 0,
            num: num as u32,
            order,
        }
    }
}

impl Iterator for SequentialKeys {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.num {
            None
        } else {
            let key = match self.order {
                SequentialOrder::Ascending => self.position,
                SequentialOrder::Descending => self.num - 1 - self.position,
            };
            self.position += 1;
            Some(key)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = (self.num - self.position) as usize;
        (size, Some(size))
    }
}

impl FusedIterator for SequentialKeys {}

impl ExactSizeIterator for SequentialKeys {}
