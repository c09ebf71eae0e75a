use solana_pubkey::Pubkey;

use crate::error::{EscrowError, Result};

/// Bounds-checked read cursor over a byte slice.
///
/// Tracks the current position and reads typed fields sequentially.
/// Every read is bounds-checked: you get `MalformedAccount` instead of a
/// panic if you read past the end.
///
/// Read fields in the order they appear in the account layout:
///
/// ```rust
/// use escrow_client_core::SliceCursor;
///
/// let data = [1u8, 10, 0, 0, 0, 0, 0, 0, 0];
/// let mut cur = SliceCursor::new(&data);
/// assert!(cur.read_bool().unwrap());
/// assert_eq!(cur.read_u64().unwrap(), 10);
/// assert_eq!(cur.remaining(), 0);
/// ```
///
/// If the field order in your cursor doesn't match the on-chain layout,
/// you'll get wrong values. Keep the layout table next to the struct.
pub struct SliceCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes remaining from the current position.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Current byte offset into the slice.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        let [val] = self.take::<1>()?;
        Ok(val)
    }

    #[inline]
    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.take::<8>()?))
    }

    /// Any non-zero byte reads as `true`.
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    #[inline]
    pub fn read_pubkey(&mut self) -> Result<Pubkey> {
        Ok(Pubkey::new_from_array(self.take::<32>()?))
    }

    #[inline]
    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let end = self
            .pos
            .checked_add(N)
            .filter(|end| *end <= self.data.len())
            .ok_or(EscrowError::MalformedAccount {
                len: self.data.len(),
                reason: "read past end of data",
            })?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(out)
    }
}
