//! Test-only little-endian writer producing the nav wire layout.

use super::types::Vec3;

#[derive(Debug, Default)]
pub struct BinaryWriter {
    data: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn write_u8(&mut self, v: u8) {
        self.data.push(v);
    }

    pub fn write_bool(&mut self, v: bool) {
        self.write_u8(if v { 1 } else { 0 });
    }

    pub fn write_u16_le(&mut self, v: u16) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u32_le(&mut self, v: u32) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_f32_le(&mut self, v: f32) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_vec3(&mut self, v: Vec3) {
        self.write_f32_le(v.x);
        self.write_f32_le(v.y);
        self.write_f32_le(v.z);
    }

    /// Write a u16-length-prefixed string with a trailing NUL counted in the length
    pub fn write_len_string(&mut self, s: &str) {
        self.write_u16_le((s.len() + 1) as u16);
        self.write_bytes(s.as_bytes());
        self.write_u8(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::BinaryReader;

    #[test]
    fn test_write_primitives() {
        let mut writer = BinaryWriter::new();
        writer.write_u8(0x01);
        writer.write_u16_le(0x0302);
        writer.write_u32_le(0x07060504);

        assert_eq!(writer.as_slice(), &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
    }

    #[test]
    fn test_len_string_layout() {
        let mut writer = BinaryWriter::new();
        writer.write_len_string("BombsiteA");
        let data = writer.into_vec();
        assert_eq!(&data[..2], &[10, 0]);
        assert_eq!(data.last(), Some(&0));

        let mut reader = BinaryReader::new(&data);
        assert_eq!(reader.read_len_string().unwrap(), "BombsiteA");
        assert!(reader.is_empty());
    }
}
