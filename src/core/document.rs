use std::path::Path;

use plist::{Dictionary, Value};

use crate::core::error::{Error, Result};

/// Decode a preference document. Binary and XML plists are both accepted.
pub fn read_document(path: &Path) -> Result<Dictionary> {
    log::debug!("Reading plist from {:?}", path);
    let value = Value::from_file(path).map_err(|source| Error::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;

    value.into_dictionary().ok_or_else(|| Error::NotADictionary {
        path: path.to_path_buf(),
    })
}

/// Write `dict` as a text (XML) plist.
pub fn write_document(path: &Path, dict: Dictionary) -> Result<()> {
    Value::Dictionary(dict)
        .to_file_xml(path)
        .map_err(|source| Error::WriteDocument {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Dictionary {
        let mut dict = Dictionary::new();
        dict.insert("Name".to_string(), Value::String("Default".to_string()));
        dict.insert("Columns".to_string(), Value::Integer(80i64.into()));
        dict
    }

    #[test]
    fn test_reads_binary_plist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.plist");
        Value::Dictionary(sample()).to_file_binary(&path).unwrap();

        assert_eq!(read_document(&path).unwrap(), sample());
    }

    #[test]
    fn test_written_document_is_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.plist");
        write_document(&path, sample()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("<?xml"));
        assert_eq!(read_document(&path).unwrap(), sample());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(&dir.path().join("absent.plist")).unwrap_err();
        assert!(matches!(err, Error::DocumentRead { .. }));
    }

    #[test]
    fn test_malformed_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.plist");
        std::fs::write(&path, b"definitely not a plist").unwrap();
        assert!(matches!(read_document(&path).unwrap_err(), Error::DocumentRead { .. }));
    }

    #[test]
    fn test_array_root_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("array.plist");
        Value::Array(vec![Value::Boolean(true)]).to_file_xml(&path).unwrap();
        assert!(matches!(read_document(&path).unwrap_err(), Error::NotADictionary { .. }));
    }
}
