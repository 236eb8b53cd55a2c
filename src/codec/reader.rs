use crate::error::{Error, Result};
use super::types::Vec3;

/// Bounds-checked little-endian reader over a nav file buffer
pub struct BinaryReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn truncated(&self, need: usize) -> Error {
        Error::TruncatedStream {
            offset: self.pos,
            need,
            have: self.remaining(),
        }
    }

    /// Build a `MalformedRecord` error pinned at `offset`
    pub fn malformed(offset: usize, reason: impl Into<String>) -> Error {
        Error::MalformedRecord {
            offset,
            reason: reason.into(),
        }
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        if self.remaining() < n {
            return Err(self.truncated(n));
        }
        self.pos += n;
        Ok(())
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(self.truncated(n));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_i16_le(&mut self) -> Result<i16> {
        Ok(self.read_u16_le()? as i16)
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_i32_le(&mut self) -> Result<i32> {
        Ok(self.read_u32_le()? as i32)
    }

    pub fn read_f32_le(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.read_array()?))
    }

    /// Read three floats as a position
    pub fn read_vec3(&mut self) -> Result<Vec3> {
        Ok(Vec3 {
            x: self.read_f32_le()?,
            y: self.read_f32_le()?,
            z: self.read_f32_le()?,
        })
    }

    /// Read a position and reject NaN or infinite components
    pub fn read_finite_vec3(&mut self) -> Result<Vec3> {
        let offset = self.pos;
        let v = self.read_vec3()?;
        if !v.is_finite() {
            return Err(Self::malformed(offset, format!("non-finite coordinate {v:?}")));
        }
        Ok(v)
    }

    /// Read a string whose byte length is a u16 prefix. The text ends at
    /// the first NUL inside the declared bytes, or at the declared end.
    pub fn read_len_string(&mut self) -> Result<String> {
        let offset = self.pos;
        let len = self.read_u16_le()? as usize;
        let bytes = self.read_bytes(len)?;
        let text = match bytes.iter().position(|&b| b == 0) {
            Some(end) => &bytes[..end],
            None => bytes,
        };
        String::from_utf8(text.to_vec())
            .map_err(|_| Self::malformed(offset, "invalid UTF-8 string"))
    }

    /// Read a NUL-terminated string, consuming the terminator
    pub fn read_cstring(&mut self) -> Result<String> {
        let offset = self.pos;
        let rest = &self.data[self.pos.min(self.data.len())..];
        let end = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| self.truncated(rest.len() + 1))?;
        let bytes = self.read_bytes(end)?;
        self.skip(1)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|_| Self::malformed(offset, "invalid UTF-8 string"))
    }

    /// Capacity to reserve for `count` records of at least `min_size` bytes.
    /// Never exceeds what the rest of the buffer could actually hold.
    pub fn capacity_for(&self, count: usize, min_size: usize) -> usize {
        count.min(self.remaining() / min_size.max(1))
    }
}
