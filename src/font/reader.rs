use ttf_parser::FromData;

/// Read one big-endian value at `offset`; `None` when it runs past the data
pub fn read_at<T: FromData>(data: &[u8], offset: usize) -> Option<T> {
    let end = offset.checked_add(T::SIZE)?;
    data.get(offset..end).and_then(T::parse)
}

/// Forward-only cursor over the fields ttf-parser keeps private
#[derive(Clone, Copy, Debug)]
pub struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self { data, offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn read<T: FromData>(&mut self) -> Option<T> {
        let value = read_at(self.data, self.offset)?;
        self.offset += T::SIZE;
        Some(value)
    }

    pub fn skip(&mut self, len: usize) -> Option<()> {
        let end = self.offset.checked_add(len)?;
        if end > self.data.len() {
            return None;
        }
        self.offset = end;
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian_values() {
        let data = [0x00, 0x01, 0xFF, 0xFE, 0x4F, 0x54, 0x54, 0x4F];
        let mut reader = Reader::at(&data, 0);
        assert_eq!(reader.read::<u16>(), Some(1));
        assert_eq!(reader.read::<i16>(), Some(-2));
        assert_eq!(reader.read::<u32>(), Some(0x4F54_544F));
        assert_eq!(reader.read::<u16>(), None);
    }

    #[test]
    fn reads_past_end_fail_without_advancing() {
        let data = [0x12, 0x34, 0x56];
        let mut reader = Reader::at(&data, 1);
        assert_eq!(reader.read::<u32>(), None);
        assert_eq!(reader.offset(), 1);
        assert_eq!(reader.skip(3), None);
        assert_eq!(read_at::<u16>(&data, 1), Some(0x3456));
        assert_eq!(read_at::<u32>(&data, usize::MAX), None);
    }
}
