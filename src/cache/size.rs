//! Value Size Module
//!
//! Defines the capability every cached value must provide: its logical size in bytes.

// == Byte Size ==
/// Reports the logical byte footprint of a cached value.
///
/// The cache never inspects a value beyond this. The size is read once when
/// the value is stored; later changes are not seen until the key is written
/// again.
pub trait ByteSize {
    /// Returns the size of the value in bytes.
    fn byte_size(&self) -> usize;
}

impl ByteSize for String {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl ByteSize for str {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl ByteSize for Vec<u8> {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl ByteSize for Box<[u8]> {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl<T: ByteSize + ?Sized> ByteSize for &T {
    fn byte_size(&self) -> usize {
        (**self).byte_size()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_size() {
        assert_eq!("1234".to_string().byte_size(), 4);
        assert_eq!(String::new().byte_size(), 0);
    }

    #[test]
    fn test_str_size_counts_bytes_not_chars() {
        // 'é' is two bytes in UTF-8
        assert_eq!("é".byte_size(), 2);
    }

    #[test]
    fn test_byte_buffers() {
        assert_eq!(vec![0u8; 16].byte_size(), 16);
        let boxed: Box<[u8]> = vec![1u8, 2, 3].into_boxed_slice();
        assert_eq!(boxed.byte_size(), 3);
    }

    #[test]
    fn test_reference_delegates() {
        let value = String::from("value1");
        let by_ref = &value;
        assert_eq!(by_ref.byte_size(), 6);
    }
}
