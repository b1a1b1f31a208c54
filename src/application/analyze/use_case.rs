//! Analyze Use Case
//!
//! Walks a corpus root, extracts every document and folds the
//! classification into an `AggregateIndex`.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, info, warn};

use crate::domain::ports::MetadataExtractor;
use crate::domain::services::Classifier;
use crate::error::{CanonsortError, CanonsortResult, ExtractionError};
use crate::infrastructure::extractor::display_path;

use super::index::AggregateIndex;
use super::options::AnalyzeOptions;

/// Analyze use case over any metadata extractor
pub struct AnalyzeUseCase<E>
where
    E: MetadataExtractor,
{
    extractor: E,
    classifier: Classifier,
}

impl<E> AnalyzeUseCase<E>
where
    E: MetadataExtractor,
{
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            classifier: Classifier::default(),
        }
    }

    /// Walk `root` and classify every matching document
    ///
    /// Documents that fail extraction and entries the walker cannot read
    /// are recorded as skipped; only a missing root aborts the walk.
    pub fn execute(&self, root: &Path, options: &AnalyzeOptions) -> CanonsortResult<AggregateIndex> {
        let discovery = discover_documents(root, &options.extension)?;
        let documents = discovery.documents;
        let total = documents.len() + discovery.unreadable.len();
        info!(root = %root.display(), total, "found documents");

        let mut index = AggregateIndex::new();
        index.total_files = total;

        for (file, err) in discovery.unreadable {
            warn!(file = %file, reason = %err, "skipping unreadable entry");
            index.record_skipped(file, &err);
        }

        for (n, relative) in documents.iter().enumerate() {
            let file = display_path(relative);
            match self.extractor.extract(root, relative) {
                Ok(doc) => {
                    let result = self.classifier.classify(&doc);
                    debug!(
                        file = %file,
                        traditions = ?result.traditions(),
                        period = %result.period(),
                        origin = %result.origin(),
                        "classified"
                    );
                    index.record(&doc, result);
                }
                Err(err) => {
                    warn!(file = %file, reason = %err, "skipping document");
                    index.record_skipped(file, &err);
                }
            }

            let processed = n + 1;
            if options.progress_every > 0 && processed % options.progress_every == 0 {
                info!(processed, total, "classifying documents");
            }
        }

        info!(
            classified = index.classified_files(),
            skipped = index.skipped_files(),
            "walk complete"
        );
        Ok(index)
    }
}

/// Documents found under a corpus root
#[derive(Debug, Default)]
pub struct Discovery {
    /// Matching files, relative to the root, in string order of their display path
    pub documents: Vec<PathBuf>,
    /// Entries the walker could not read, with the reason
    pub unreadable: Vec<(String, ExtractionError)>,
}

/// Every file under `root` with the given extension, relative and sorted
///
/// Hidden entries are included and ignore files are not consulted: the
/// corpus is taken as it is on disk. Unreadable directories and files are
/// reported, not fatal.
pub fn discover_documents(root: &Path, extension: &str) -> CanonsortResult<Discovery> {
    if !root.is_dir() {
        return Err(CanonsortError::CorpusNotFound {
            path: root.to_path_buf(),
        });
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let mut discovery = Discovery::default();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let file = walk_error_path(&err)
                    .map(|path| display_path(path.strip_prefix(root).unwrap_or(path)))
                    .unwrap_or_else(|| display_path(root));
                discovery.unreadable.push((
                    file,
                    ExtractionError::Unreadable {
                        message: err.to_string(),
                    },
                ));
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if !matches {
            continue;
        }
        if let Ok(relative) = path.strip_prefix(root) {
            discovery.documents.push(relative.to_path_buf());
        }
    }

    discovery.documents.sort_by_cached_key(|p| display_path(p));
    discovery.unreadable.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(discovery)
}

/// Path a walk error refers to, if it carries one
fn walk_error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        ignore::Error::Partial(errs) => errs.iter().find_map(walk_error_path),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DocumentMetadata;
    use crate::domain::value_objects::{Period, Tradition};
    use crate::error::ExtractionError;
    use std::fs;
    use tempfile::tempdir;

    /// Extractor that reads the author from the file body, or fails on "BAD"
    struct LineExtractor;

    impl MetadataExtractor for LineExtractor {
        fn extract(
            &self,
            root: &Path,
            relative: &Path,
        ) -> Result<DocumentMetadata, ExtractionError> {
            let body = fs::read_to_string(root.join(relative)).map_err(|e| {
                ExtractionError::Unreadable {
                    message: e.to_string(),
                }
            })?;
            if body.trim() == "BAD" {
                return Err(ExtractionError::Malformed {
                    message: "bad body".to_string(),
                });
            }
            let mut doc = DocumentMetadata::new(display_path(relative)).with_author(body.trim());
            doc.canon_code = Some("T".to_string());
            Ok(doc)
        }
    }

    fn write(root: &Path, rel: &str, body: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn discover_filters_extension_case_insensitively_and_sorts() {
        let dir = tempdir().unwrap();
        write(dir.path(), "b/2.xml", "");
        write(dir.path(), "a/1.XML", "");
        write(dir.path(), ".hidden/3.xml", "");
        write(dir.path(), "a/notes.txt", "");

        let found = discover_documents(dir.path(), "xml").unwrap();
        let found: Vec<String> = found.documents.iter().map(|p| display_path(p)).collect();
        assert_eq!(found, vec![".hidden/3.xml", "a/1.XML", "b/2.xml"]);
    }

    #[test]
    fn discover_sorts_by_display_string() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a/y.xml", "");
        write(dir.path(), "a.b/x.xml", "");

        let found = discover_documents(dir.path(), "xml").unwrap();
        let found: Vec<String> = found.documents.iter().map(|p| display_path(p)).collect();
        // '.' sorts before '/', so "a.b/" precedes "a/"
        assert_eq!(found, vec!["a.b/x.xml", "a/y.xml"]);
    }

    #[test]
    fn walk_error_path_unwraps_nested_errors() {
        let err = ignore::Error::WithDepth {
            depth: 2,
            err: Box::new(ignore::Error::WithPath {
                path: PathBuf::from("/corpus/locked"),
                err: Box::new(ignore::Error::Io(std::io::Error::from(
                    std::io::ErrorKind::PermissionDenied,
                ))),
            }),
        };
        assert_eq!(walk_error_path(&err), Some(Path::new("/corpus/locked")));
        assert_eq!(
            walk_error_path(&ignore::Error::Io(std::io::Error::from(
                std::io::ErrorKind::Other
            ))),
            None
        );
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_is_skipped_not_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        write(dir.path(), "T/a.xml", "唐 玄奘譯");
        write(dir.path(), "locked/b.xml", "宋");
        let locked = dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users read through mode 000; nothing to observe then
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = AnalyzeUseCase::new(LineExtractor).execute(dir.path(), &AnalyzeOptions::new());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        let index = result.unwrap();

        assert_eq!(index.classified_files(), 1);
        assert_eq!(index.by_period[&Period::Tang], vec!["T/a.xml"]);
        assert_eq!(index.skipped_files(), 1);
        assert_eq!(index.skipped[0].file, "locked");
        assert!(index.skipped[0].reason.starts_with("unreadable:"));
        assert_eq!(index.total_files, 2);
    }

    #[test]
    fn discover_missing_root_is_fatal() {
        let dir = tempdir().unwrap();
        let err = discover_documents(&dir.path().join("missing"), "xml").unwrap_err();
        assert!(matches!(err, CanonsortError::CorpusNotFound { .. }));
    }

    #[test]
    fn execute_records_skips_and_classifications() {
        let dir = tempdir().unwrap();
        write(dir.path(), "T/a.xml", "唐 玄奘譯");
        write(dir.path(), "T/b.xml", "BAD");
        write(dir.path(), "T/c.xml", "宋 禪師");

        let index = AnalyzeUseCase::new(LineExtractor)
            .execute(dir.path(), &AnalyzeOptions::new())
            .unwrap();

        assert_eq!(index.total_files, 3);
        assert_eq!(index.classified_files(), 2);
        assert_eq!(index.skipped_files(), 1);
        assert_eq!(index.skipped[0].file, "T/b.xml");
        assert_eq!(index.by_period[&Period::Tang], vec!["T/a.xml"]);
        assert_eq!(index.by_tradition[&Tradition::ChanZen], vec!["T/c.xml"]);
        assert_eq!(index.by_canon["T"].file_count(), 2);
    }

    #[test]
    fn execute_on_empty_corpus() {
        let dir = tempdir().unwrap();
        let index = AnalyzeUseCase::new(LineExtractor)
            .execute(dir.path(), &AnalyzeOptions::new())
            .unwrap();
        assert_eq!(index, AggregateIndex::new());
    }
}
