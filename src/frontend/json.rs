// Fri Aug 28 2026 - Alex

use crate::frontend::{FrontendDriver, FrontendError, RecordProvider, TranslationUnit};
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Frontend driver backed by a serialized fact dump: an external compiler
/// plugin runs the real C++ frontend and writes the tables this crate
/// consumes as JSON.
#[derive(Debug, Default)]
pub struct JsonFrontend {
    skip_validation: bool,
}

impl JsonFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_validation(mut self) -> Self {
        self.skip_validation = true;
        self
    }
}

impl FrontendDriver for JsonFrontend {
    fn parse(&self, file: &Path, extra_args: &[String]) -> Result<TranslationUnit, FrontendError> {
        if !extra_args.is_empty() {
            // Flags are baked into the dump by the external driver; they
            // only matter for traceability here.
            debug!("ignoring {} extra compiler args for dump input", extra_args.len());
        }

        let reader = BufReader::new(File::open(file)?);
        let unit: TranslationUnit = serde_json::from_reader(reader)
            .map_err(|e| FrontendError::ParseError(e.to_string()))?;

        if !self.skip_validation {
            unit.validate()?;
        }

        info!(
            "loaded translation unit {} ({} records, {} declarations)",
            unit.file,
            unit.record_count(),
            unit.declarations().len()
        );
        Ok(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{RecordDecl, RecordKind, RecordLayout, TranslationUnitBuilder};
    use crate::locator::SourceRange;
    use std::io::Write;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cpp-layout-inspector-{}-{}", std::process::id(), name))
    }

    fn sample_unit() -> TranslationUnit {
        let mut builder = TranslationUnitBuilder::new("sample.cpp");
        let id = builder.allocate();
        builder.define(
            RecordDecl::new(
                id,
                "Sample",
                RecordKind::Struct,
                SourceRange::spanning(1, 1, 4, 2),
            ),
            Some(RecordLayout::new(8, 4)),
        );
        builder.finish()
    }

    #[test]
    fn test_parse_round_trips_a_dump() {
        let path = temp_path("ok.json");
        let json = serde_json::to_string_pretty(&sample_unit()).unwrap();
        File::create(&path).unwrap().write_all(json.as_bytes()).unwrap();

        let unit = JsonFrontend::new().parse(&path, &[]).unwrap();
        assert_eq!(unit.file, "sample.cpp");
        assert_eq!(unit.record_count(), 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = JsonFrontend::new()
            .parse(Path::new("/nonexistent/dump.json"), &[])
            .unwrap_err();
        assert!(matches!(err, FrontendError::Io(_)));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let path = temp_path("bad.json");
        File::create(&path).unwrap().write_all(b"{ not json").unwrap();

        let err = JsonFrontend::new().parse(&path, &[]).unwrap_err();
        assert!(matches!(err, FrontendError::ParseError(_)));

        std::fs::remove_file(&path).ok();
    }
}
