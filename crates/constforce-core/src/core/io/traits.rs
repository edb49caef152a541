use super::node::SerializationNode;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for persisting parameter documents.
///
/// Implementors handle one on-disk encoding of a [`SerializationNode`] tree; the path-based
/// helpers are provided on top of the reader/writer methods.
pub trait DocumentFormat {
    /// The error type for I/O and encoding failures.
    type Error: Error + From<io::Error>;

    /// Reads a document from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content is not a valid document.
    fn read_from(reader: &mut impl BufRead) -> Result<SerializationNode, Self::Error>;

    /// Writes a document to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn write_to(node: &SerializationNode, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a document from a file path.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<SerializationNode, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a document to a file path, creating or truncating the file.
    fn write_to_path<P: AsRef<Path>>(
        node: &SerializationNode,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(node, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
