//! Reading and writing identity set CSVs (`name,email`)

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use gitfolk_core::IdentityRecord;

use crate::error::{IoError, IoResult};

/// Read an identity list from a headered CSV with `name,email` columns
pub fn read_identities(path: &Path) -> IoResult<Vec<IdentityRecord>> {
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }

    let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let mut identities = Vec::new();
    for result in reader.deserialize() {
        let record: IdentityRecord = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
        identities.push(record);
    }

    Ok(identities)
}

/// Write an identity list as a headered CSV
pub fn write_identities(path: &Path, identities: &[IdentityRecord]) -> IoResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| IoError::WriteFailed(e.to_string()))?;

    for record in identities {
        writer
            .serialize(record)
            .map_err(|e| IoError::WriteFailed(e.to_string()))?;
    }

    writer.flush().map_err(|e| IoError::WriteFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("identities.csv");

        let identities = vec![
            IdentityRecord::new("David Britch", "david@contoso.com"),
            IdentityRecord::new("Britch, David", "david@contoso.com"),
        ];
        write_identities(&path, &identities).unwrap();

        let read_back = read_identities(&path).unwrap();
        assert_eq!(read_back, identities);
    }

    #[test]
    fn test_missing_file() {
        let err = read_identities(Path::new("/nonexistent/identities.csv")).unwrap_err();
        assert!(matches!(err, IoError::FileNotFound(_)));
    }
}
