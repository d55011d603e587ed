//! Defines traits for viewing tree keys as sequences of symbols.
//!
//! A radix tree only ever needs to compare, slice and concatenate keys. The
//! traits here expose that view: [`KeySymbols`] borrows a key as a slice of
//! symbols (used for lookups, and may be implemented by unsized types such as
//! `str`), while [`RadixKey`] additionally rebuilds an owned key from the
//! symbols collected along a path (used by prefix enumeration).
use crate::Error;

/// A type that can be viewed as a slice of comparable symbols.
pub trait KeySymbols {
    /// The unit the tree compares and splits on.
    type Symbol: Clone + Eq;

    /// Borrows the key as a slice of symbols.
    fn symbols(&self) -> &[Self::Symbol];
}

/// An owned key type that can be stored in a [`RadixTree`](crate::RadixTree).
pub trait RadixKey: KeySymbols + Sized {
    /// Rebuilds a key from its full sequence of symbols.
    ///
    /// Returns [`Error::InvalidKey`] if the symbols do not form a valid key.
    fn from_symbols(symbols: Vec<Self::Symbol>) -> Result<Self, Error>;
}

impl KeySymbols for str {
    type Symbol = u8;

    fn symbols(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl KeySymbols for String {
    type Symbol = u8;

    fn symbols(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<T: Clone + Eq> KeySymbols for [T] {
    type Symbol = T;

    fn symbols(&self) -> &[T] {
        self
    }
}

impl<T: Clone + Eq> KeySymbols for Vec<T> {
    type Symbol = T;

    fn symbols(&self) -> &[T] {
        self.as_slice()
    }
}

impl<Q: KeySymbols + ?Sized> KeySymbols for &Q {
    type Symbol = Q::Symbol;

    fn symbols(&self) -> &[Self::Symbol] {
        (**self).symbols()
    }
}

impl RadixKey for String {
    fn from_symbols(symbols: Vec<u8>) -> Result<Self, Error> {
        String::from_utf8(symbols).map_err(|_| Error::InvalidKey)
    }
}

impl<T: Clone + Eq> RadixKey for Vec<T> {
    fn from_symbols(symbols: Vec<T>) -> Result<Self, Error> {
        Ok(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_symbols() {
        let key = "hello";
        assert_eq!(key.symbols(), b"hello");
    }

    #[test]
    fn test_string_symbols() {
        let key = "hello".to_string();
        assert_eq!(key.symbols(), b"hello");
        assert_eq!(key.symbols(), "hello".symbols());
    }

    #[test]
    fn test_vec_symbols() {
        let key = vec![1u32, 2, 3];
        assert_eq!(key.symbols(), &[1, 2, 3]);
        assert_eq!(key.symbols(), key.as_slice().symbols());
    }

    #[test]
    fn test_reference_symbols() {
        let key = "route";
        let borrowed: &&str = &key;
        assert_eq!(borrowed.symbols(), b"route");
    }

    #[test]
    fn test_string_from_symbols() {
        let key = String::from_symbols(b"bandana".to_vec()).unwrap();
        assert_eq!(key, "bandana");
    }

    #[test]
    fn test_string_from_multibyte_symbols() {
        // A label may end in the middle of a code point; only whole keys are rebuilt.
        let bytes = "café".as_bytes().to_vec();
        assert_eq!(String::from_symbols(bytes).unwrap(), "café");
    }

    #[test]
    fn test_string_from_invalid_symbols() {
        let result = String::from_symbols(vec![0x66, 0x6f, 0xff]);
        assert_eq!(result, Err(Error::InvalidKey));
    }

    #[test]
    fn test_vec_from_symbols() {
        let key = Vec::<char>::from_symbols(vec!['a', 'b']).unwrap();
        assert_eq!(key, vec!['a', 'b']);
    }

    // Custom key type built on symbols other than bytes
    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Path(Vec<&'static str>);

    impl KeySymbols for Path {
        type Symbol = &'static str;

        fn symbols(&self) -> &[&'static str] {
            &self.0
        }
    }

    impl RadixKey for Path {
        fn from_symbols(symbols: Vec<&'static str>) -> Result<Self, Error> {
            Ok(Path(symbols))
        }
    }

    #[test]
    fn test_custom_key() {
        let key = Path(vec!["api", "v1"]);
        assert_eq!(key.symbols(), &["api", "v1"]);
        assert_eq!(Path::from_symbols(vec!["api"]).unwrap(), Path(vec!["api"]));
    }
}
