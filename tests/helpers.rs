// Shared test helpers for mock sources and rule file inspection.

use std::collections::BTreeSet;
use std::path::Path;

use dns_rules::{Category, Config, Source, SourceFormat};
use httptest::{matchers::*, responders::*, Expectation, Server};

/// Registers a GET expectation on `path` answering 200 with `body`.
pub fn serve(server: &Server, path: &'static str, body: &'static str) {
    server.expect(
        Expectation::matching(request::method_path("GET", path))
            .respond_with(status_code(200).body(body)),
    );
}

/// Registers a GET expectation on `path` answering with `status` and no body.
#[allow(dead_code)] // Not every test file uses failing sources
pub fn fail(server: &Server, path: &'static str, status: u16) {
    server.expect(
        Expectation::matching(request::method_path("GET", path))
            .respond_with(status_code(status)),
    );
}

/// Builds a mock source pointing at `path` on the test server.
pub fn source(server: &Server, path: &str, category: Category, format: SourceFormat) -> Source {
    Source::new(server.url_str(path), category, format)
}

/// Configuration writing to `output_dir`, with the given sources and seeds.
pub fn test_config(
    output_dir: &Path,
    sources: Vec<Source>,
    home_seeds: &[&str],
    enterprise_seeds: &[&str],
) -> Config {
    Config {
        output_dir: output_dir.to_path_buf(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        sources,
        home_seeds: home_seeds.iter().map(|s| s.to_string()).collect(),
        enterprise_seeds: enterprise_seeds.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

/// Reads a rule file, returning its lines (excluding the trailing newline).
pub fn read_rules(path: &Path) -> Vec<String> {
    let contents = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    assert!(
        contents.ends_with('\n'),
        "{} should end with a newline",
        path.display()
    );
    contents.lines().map(str::to_string).collect()
}

/// Reads a rule file as a set.
#[allow(dead_code)]
pub fn read_rule_set(path: &Path) -> BTreeSet<String> {
    read_rules(path).into_iter().collect()
}
