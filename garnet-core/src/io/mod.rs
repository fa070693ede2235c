/*!
Traits for reading models from serialized representations, with helper functions for common
sources.
*/

use crate::error::Result;
use crate::model::Model;
use std::fs::File;
use std::path::PathBuf;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// A trait implemented by tools that read a model from some serialized representation.
///
pub trait ModelReader: Default {
    /// Read a model from the given input.
    fn read(&mut self, r: &mut impl std::io::Read) -> Result<Model>;
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Read a model, using the given reader implementation, from a string.
pub fn read_model_from_string<S>(r: &mut impl ModelReader, s: S) -> Result<Model>
where
    S: AsRef<[u8]>,
{
    use std::io::Cursor;
    let mut buffer = Cursor::new(s);
    r.read(&mut buffer)
}

/// Read a model, using the given reader implementation, from the named file.
pub fn read_model_from_file(r: &mut impl ModelReader, path: PathBuf) -> Result<Model> {
    let mut file = File::open(path)?;
    r.read(&mut file)
}
