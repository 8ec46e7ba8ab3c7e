//! CSV Loader
//!
//! Reads the launch dataset from a CSV file with a header row.
//! Only the four columns the dashboard needs are required; any
//! others are ignored.

use super::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns that must be present in the header row
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "Booster Version Category",
    "class",
];

impl Dataset {
    /// Load the dataset from a CSV file on disk
    pub fn load(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(file)?;

        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            sites = dataset.sites().len(),
            min_payload = dataset.min_payload(),
            max_payload = dataset.max_payload(),
            "Loaded launch dataset"
        );

        Ok(dataset)
    }

    /// Load the dataset from any CSV source (useful for testing)
    pub fn from_reader<R: Read>(reader: R) -> DatasetResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for (row, result) in reader.deserialize::<LaunchRecord>().enumerate() {
            // Header is line 1
            let line = row + 2;
            let record = result.map_err(|e| DatasetError::InvalidRecord {
                line,
                message: e.to_string(),
            })?;
            validate_record(&record, line)?;
            records.push(record);
        }

        Self::from_records(records)
    }
}

fn validate_record(record: &LaunchRecord, line: usize) -> DatasetResult<()> {
    if !record.payload_mass_kg.is_finite() || record.payload_mass_kg < 0.0 {
        return Err(DatasetError::InvalidRecord {
            line,
            message: format!(
                "payload mass must be a non-negative number, got {}",
                record.payload_mass_kg
            ),
        });
    }
    if record.launch_site.is_empty() {
        return Err(DatasetError::InvalidRecord {
            line,
            message: "launch site is empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
2,6,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
3,17,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
4,44,KSC LC-39A,1,9600.0,F9 B5 B1048.3,B5
";

    #[test]
    fn test_load_from_reader() {
        let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 5);
        assert_eq!(dataset.min_payload(), 0.0);
        assert_eq!(dataset.max_payload(), 9600.0);
        assert_eq!(
            dataset.sites(),
            &["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]
        );
        assert_eq!(dataset.booster_categories(), &["v1.0", "v1.1", "FT", "B5"]);

        let record = &dataset.records()[3];
        assert_eq!(record.launch_site, "KSC LC-39A");
        assert_eq!(record.payload_mass_kg, 2490.0);
        assert_eq!(record.booster_version_category, "FT");
        assert_eq!(record.outcome, Outcome::Success);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 5);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Dataset::load(dir.path().join("missing.csv"));
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }

    #[test]
    fn test_missing_column() {
        let csv_data = "Launch Site,Payload Mass (kg),class\nKSC LC-39A,2490.0,1\n";
        let result = Dataset::from_reader(csv_data.as_bytes());
        match result {
            Err(DatasetError::MissingColumn(column)) => {
                assert_eq!(column, "Booster Version Category")
            }
            other => panic!("Expected MissingColumn, got {:?}", other.map(|d| d.len())),
        }
    }

    #[test]
    fn test_invalid_class() {
        let csv_data = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
KSC LC-39A,2490.0,FT,1
KSC LC-39A,3000.0,FT,3
";
        let result = Dataset::from_reader(csv_data.as_bytes());
        assert!(matches!(
            result,
            Err(DatasetError::InvalidRecord { line: 3, .. })
        ));
    }

    #[test]
    fn test_negative_payload() {
        let csv_data = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
KSC LC-39A,-1.0,FT,1
";
        let result = Dataset::from_reader(csv_data.as_bytes());
        assert!(matches!(
            result,
            Err(DatasetError::InvalidRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_nan_payload() {
        let csv_data = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
KSC LC-39A,2490.0,FT,1
KSC LC-39A,NaN,FT,1
";
        let result = Dataset::from_reader(csv_data.as_bytes());
        match result {
            Err(DatasetError::InvalidRecord { line, message }) => {
                assert_eq!(line, 3);
                assert!(message.contains("non-negative number"));
            }
            other => panic!("Expected invalid record, got {:?}", other.map(|d| d.len())),
        }
    }

    #[test]
    fn test_header_only_is_empty() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version Category,class\n";
        let result = Dataset::from_reader(csv_data.as_bytes());
        assert!(matches!(result, Err(DatasetError::Empty)));
    }
}
