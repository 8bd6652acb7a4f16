use crate::state::UrlGraph;
use crate::OutputError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the URL graph to `path` as pretty-printed JSON
///
/// The document is a single object mapping each visited URL to its list of
/// outbound URLs. A failure here is reported to the caller; the in-memory
/// graph is unaffected.
///
/// # Arguments
///
/// * `graph` - The finished crawl graph
/// * `path` - Destination file, created or truncated
pub fn write_graph(graph: &UrlGraph, path: &Path) -> Result<(), OutputError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, graph)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> UrlGraph {
        let mut graph = UrlGraph::new();
        graph.insert(
            "https://example.com",
            vec![
                "https://example.com/page2".to_string(),
                "https://other.com".to_string(),
            ],
        );
        graph.insert("https://example.com/page2", vec![]);
        graph
    }

    #[test]
    fn test_write_graph_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("url_graph.json");

        write_graph(&sample_graph(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "https://example.com": ["https://example.com/page2", "https://other.com"],
                "https://example.com/page2": []
            })
        );
    }

    #[test]
    fn test_write_graph_is_human_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("url_graph.json");

        write_graph(&sample_graph(), &path).unwrap();

        // Pretty printing spreads the object across lines
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.lines().count() > 1);
    }

    #[test]
    fn test_write_graph_reports_io_failure() {
        let result = write_graph(
            &sample_graph(),
            Path::new("/nonexistent-dir/url_graph.json"),
        );
        assert!(matches!(result, Err(OutputError::Io(_))));
    }
}
