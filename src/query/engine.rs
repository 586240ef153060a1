// Sat Aug 29 2026 - Alex

use crate::builder::LayoutTreeBuilder;
use crate::frontend::{FrontendDriver, FrontendError};
use crate::layout::LayoutNode;
use crate::locator::{DeclarationLocator, SourcePos};
use log::info;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// One layout query: which file to analyze, where the cursor is, and any
/// extra compiler flags to forward to the frontend.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub file: PathBuf,
    pub position: SourcePos,
    pub extra_args: Vec<String>,
}

impl QueryRequest {
    pub fn new(file: PathBuf, position: SourcePos) -> Self {
        Self {
            file,
            position,
            extra_args: Vec::new(),
        }
    }

    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }
}

/// Result of a successful pipeline run. `NotFound` is a normal outcome,
/// not an error: the frontend parsed the file but no qualifying
/// declaration contains the position.
#[derive(Debug)]
pub enum QueryOutcome {
    Found(LayoutNode),
    NotFound,
}

impl QueryOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, QueryOutcome::Found(_))
    }

    pub fn into_node(self) -> Option<LayoutNode> {
        match self {
            QueryOutcome::Found(node) => Some(node),
            QueryOutcome::NotFound => None,
        }
    }
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::Found(node) => {
                write!(f, "{} ({} bytes)", node.type_name, node.size)
            }
            QueryOutcome::NotFound => {
                write!(f, "no class or struct declaration at the requested position")
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("frontend failed: {0}")]
    Frontend(#[from] FrontendError),
}

/// Sequences one request through the pipeline: frontend parse, declaration
/// location, layout tree construction. The finished tree is returned by
/// value, so its lifetime is entirely the caller's concern and the engine
/// holds no state between runs.
pub struct QueryEngine<D: FrontendDriver> {
    driver: D,
}

impl<D: FrontendDriver> QueryEngine<D> {
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    pub fn run(&self, request: &QueryRequest) -> Result<QueryOutcome, QueryError> {
        info!(
            "query {} at {}",
            request.file.display(),
            request.position
        );

        let unit = self.driver.parse(&request.file, &request.extra_args)?;

        let Some(record) = DeclarationLocator::new(request.position).locate(&unit) else {
            return Ok(QueryOutcome::NotFound);
        };

        let tree = LayoutTreeBuilder::new(&unit).build(record);
        info!(
            "built layout for {} ({} nodes)",
            tree.type_name,
            tree.node_count()
        );
        Ok(QueryOutcome::Found(tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{
        FieldFacts, RecordDecl, RecordKind, RecordLayout, TranslationUnit, TranslationUnitBuilder,
    };
    use crate::locator::SourceRange;
    use std::path::Path;

    /// Stands in for the external compiler: hands back a prebuilt unit or
    /// a canned failure.
    struct FixtureDriver {
        unit: Option<TranslationUnit>,
    }

    impl FrontendDriver for FixtureDriver {
        fn parse(
            &self,
            _file: &Path,
            _extra_args: &[String],
        ) -> Result<TranslationUnit, FrontendError> {
            match &self.unit {
                Some(unit) => Ok(unit.clone()),
                None => Err(FrontendError::ParseError("fatal diagnostics".to_string())),
            }
        }
    }

    fn sample_unit() -> TranslationUnit {
        let mut builder = TranslationUnitBuilder::new("sample.cpp");
        let id = builder.allocate();
        builder.define(
            RecordDecl::new(
                id,
                "Sample",
                RecordKind::Struct,
                SourceRange::spanning(2, 1, 6, 2),
            )
            .with_field(FieldFacts::scalar("x", "int", 0, 4, 4)),
            Some(RecordLayout::new(4, 4)),
        );
        builder.finish()
    }

    fn request(row: u32, col: u32) -> QueryRequest {
        QueryRequest::new(PathBuf::from("sample.cpp"), SourcePos::new(row, col))
    }

    #[test]
    fn test_found_returns_owned_tree() {
        let engine = QueryEngine::new(FixtureDriver {
            unit: Some(sample_unit()),
        });

        let outcome = engine.run(&request(3, 5)).unwrap();
        assert!(outcome.is_found());
        let tree = outcome.into_node().unwrap();
        assert_eq!(tree.type_name, "Sample");
        assert_eq!(tree.children.len(), 1);
    }

    #[test]
    fn test_not_found_outside_every_range() {
        let engine = QueryEngine::new(FixtureDriver {
            unit: Some(sample_unit()),
        });

        let outcome = engine.run(&request(50, 1)).unwrap();
        assert!(!outcome.is_found());
        assert!(outcome.into_node().is_none());
    }

    #[test]
    fn test_engine_is_stateless_between_runs() {
        let engine = QueryEngine::new(FixtureDriver {
            unit: Some(sample_unit()),
        });

        let tree = engine.run(&request(3, 5)).unwrap().into_node().unwrap();
        drop(tree);

        // A miss after a hit yields NotFound, never a stale tree.
        let outcome = engine.run(&request(50, 1)).unwrap();
        assert!(!outcome.is_found());
    }

    #[test]
    fn test_frontend_failure_is_an_error() {
        let engine = QueryEngine::new(FixtureDriver { unit: None });

        let err = engine.run(&request(3, 5)).unwrap_err();
        assert!(matches!(
            err,
            QueryError::Frontend(FrontendError::ParseError(_))
        ));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            format!("{}", QueryOutcome::NotFound),
            "no class or struct declaration at the requested position"
        );
    }
}
