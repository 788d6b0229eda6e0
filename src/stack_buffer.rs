/// A fixed-capacity buffer backed by an inline array.
///
/// Holds the accepted profiles of one solve without touching the heap.
pub struct StackBuffer<T, const N: usize> {
    buffer: [T; N],
    len: usize,
}

impl<T, const N: usize> Default for StackBuffer<T, N>
where
    T: Default + Copy,
{
    fn default() -> Self {
        Self {
            buffer: [T::default(); N],
            len: 0,
        }
    }
}

impl<T, const N: usize> StackBuffer<T, N>
where
    T: Default + Copy,
{
    /// Appends a value. Returns false if the buffer is full.
    pub fn push(&mut self, value: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.buffer[self.len] = value;
        self.len += 1;
        true
    }

    /// Removes the value at `idx`, shifting the tail left.
    pub fn remove(&mut self, idx: usize) {
        if idx >= self.len {
            return;
        }
        self.buffer.copy_within(idx + 1..self.len, idx);
        self.len -= 1;
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buffer[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
