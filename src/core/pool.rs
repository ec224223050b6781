//! Thread-safe object pools
//!
//! A pool hands out previously released objects before allocating new ones.
//! It never hands the same object to two callers: an object is either in
//! the pool or owned by exactly one caller.

use parking_lot::Mutex;
use std::ops::{Deref, DerefMut};

pub struct Pool<T> {
    items: Mutex<Vec<T>>,
}

impl<T> Pool<T> {
    pub const fn new() -> Self {
        Self {
            items: parking_lot::const_mutex(Vec::new()),
        }
    }

    /// Take a pooled object, if any
    pub fn take(&self) -> Option<T> {
        self.items.lock().pop()
    }

    /// Return an object for reuse
    pub fn put(&self, item: T) {
        self.items.lock().push(item);
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

static BUFFER_POOL: Pool<Vec<u8>> = Pool::new();

/// Buffers that grew past this many bytes are freed instead of pooled
pub const MAX_POOLED_CAPACITY: usize = 64 * 1024;

/// Render buffer checked out of the shared buffer pool. Cleared on checkout
/// and returned to the pool when dropped.
pub struct PooledBuffer {
    buf: Vec<u8>,
}

impl PooledBuffer {
    pub fn acquire() -> Self {
        let mut buf = BUFFER_POOL.take().unwrap_or_default();
        buf.clear();
        Self { buf }
    }
}

impl Deref for PooledBuffer {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        &self.buf
    }
}

impl DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.buf
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        let buf = std::mem::take(&mut self.buf);
        if buf.capacity() <= MAX_POOLED_CAPACITY {
            BUFFER_POOL.put(buf);
        }
    }
}
