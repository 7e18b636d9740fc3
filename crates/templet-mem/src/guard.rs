//! RAII lease over a pooled render buffer.
//!
//! Dropping the lease (or calling `release`) clears the bytes and returns the
//! allocation to its pool. Because `release` consumes the lease, a borrower
//! cannot keep writing to a buffer after handing it back.

use std::fmt;
use std::io;
use std::ops::Deref;
use std::sync::Arc;

use crate::pool::PoolInner;

/// Byte buffer borrowed from a `BufferPool`.
pub struct PooledBuf {
    // `None` only after `into_vec` detached the bytes.
    buf: Option<Vec<u8>>,
    pool: Arc<PoolInner>,
}

impl PooledBuf {
    pub(crate) fn new(buf: Vec<u8>, pool: Arc<PoolInner>) -> Self {
        Self {
            buf: Some(buf),
            pool,
        }
    }

    fn bytes(&self) -> &[u8] {
        self.buf.as_deref().unwrap_or_default()
    }

    fn bytes_mut(&mut self) -> &mut Vec<u8> {
        self.buf.get_or_insert_with(Vec::new)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes()
    }

    pub fn capacity(&self) -> usize {
        self.buf.as_ref().map_or(0, Vec::capacity)
    }

    /// Append a string slice.
    pub fn push_str(&mut self, s: &str) {
        self.bytes_mut().extend_from_slice(s.as_bytes());
    }

    /// Discard the contents but keep the lease.
    pub fn clear(&mut self) {
        self.bytes_mut().clear();
    }

    /// Return the buffer to its pool. Same as dropping it.
    pub fn release(self) {
        drop(self);
    }

    /// Keep the bytes instead of returning them; the pool will allocate a
    /// replacement on a later acquire.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.buf.take().unwrap_or_default()
    }
}

impl Drop for PooledBuf {
    fn drop(&mut self) {
        // NOTE: no logging here beyond the tracker; keep the drop path fast.
        self.pool.reclaim(self.buf.take());
    }
}

impl Deref for PooledBuf {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        self.bytes()
    }
}

impl AsRef<[u8]> for PooledBuf {
    fn as_ref(&self) -> &[u8] {
        self.bytes()
    }
}

impl io::Write for PooledBuf {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.bytes_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.bytes_mut().extend_from_slice(data);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Write for PooledBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl fmt::Debug for PooledBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PooledBuf")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::BufferPool;
    use std::io::Write as _;

    #[test]
    fn accepts_bytes_and_text() {
        let pool = BufferPool::new();
        let mut buf = pool.acquire();
        buf.write_all(b"<p>").unwrap();
        write!(buf, "{}", 42).unwrap();
        buf.push_str("</p>");
        assert_eq!(buf.as_bytes(), b"<p>42</p>");
    }

    #[test]
    fn into_vec_detaches_from_pool() {
        let pool = BufferPool::new();
        let mut buf = pool.acquire();
        buf.push_str("kept");
        let bytes = buf.into_vec();
        assert_eq!(bytes, b"kept");

        let stats = pool.stats();
        assert_eq!(stats.outstanding, 0);
        assert_eq!(stats.idle, 0);
    }
}
