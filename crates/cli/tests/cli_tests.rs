//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("lesbar")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

const SIMPLE_TEXT: &str = "Der Hund bellt. Die Katze schläft. Wir gehen nach Hause.";

#[test]
fn test_cli_score_stdin() {
    cmd()
        .args(["score", "-"])
        .write_stdin(SIMPLE_TEXT)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("HIX: "));
}

#[test]
fn test_cli_score_empty_stdin() {
    cmd()
        .args(["score", "-"])
        .write_stdin("   ")
        .assert()
        .success()
        .stdout(predicate::str::contains("not scored"));
}

#[test]
fn test_cli_score_html_file() {
    cmd()
        .args(["score", "--html", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("/ 20"));
}

#[test]
fn test_cli_score_json() {
    let output = cmd()
        .args(["score", "-f", "json", "--legacy", "-"])
        .write_stdin(SIMPLE_TEXT)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(json["hix"].is_number());
    assert!(json["breakdown"]["statistics"]["word_count"].is_number());
    assert!(json["legacy"]["hix"].is_number());
}

#[test]
fn test_cli_score_legacy_text() {
    cmd()
        .args(["score", "--legacy", "-"])
        .write_stdin(SIMPLE_TEXT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Legacy HIX"));
}

#[test]
fn test_cli_score_invalid_profile() {
    cmd()
        .args(["score", "--profile", "fancy", "-"])
        .write_stdin(SIMPLE_TEXT)
        .assert()
        .failure();
}

#[test]
fn test_cli_score_invalid_format() {
    cmd()
        .args(["score", "-f", "markdown", "-"])
        .write_stdin(SIMPLE_TEXT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn test_cli_score_missing_file() {
    cmd().args(["score", "nonexistent.txt"]).assert().failure();
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("score.json");

    cmd()
        .args(["score", "-f", "json", "-o", output.to_str().unwrap(), "-"])
        .write_stdin(SIMPLE_TEXT)
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"hix\""));
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["score", "-v", "-"])
        .write_stdin(SIMPLE_TEXT)
        .assert()
        .success()
        .stderr(predicate::str::contains("lesbar"))
        .stdout(predicate::str::contains("Sentences: 3"));
}

#[test]
fn test_cli_audit_file() {
    cmd()
        .args(["audit", "--url", "https://example.de/blog/offene-daten", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit: https://example.de/blog/offene-daten"))
        .stdout(predicate::str::contains("HTTPS: yes"));
}

#[test]
fn test_cli_audit_file_url_default() {
    cmd()
        .args(["audit", "-f", "json", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("file://"))
        .stdout(predicate::str::contains("\"https\": false"));
}

#[test]
fn test_cli_audit_invalid_url() {
    cmd()
        .args(["audit", "--url", "not a url", &get_fixture_path("article.html")])
        .assert()
        .failure();
}

#[test]
fn test_cli_analyze_without_sites() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("sites.txt");
    std::fs::write(&config, "# no sites\ndelay_ms: 0\n").unwrap();

    cmd()
        .args(["analyze", "--config", config.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No sites configured"));
}

#[test]
fn test_cli_analyze_missing_config() {
    cmd()
        .args(["analyze", "--config", "/nonexistent/sites.txt"])
        .assert()
        .failure();
}

#[test]
fn test_cli_analyze_excluded_sitemap() {
    let tmp = TempDir::new().unwrap();
    let sitemap = tmp.path().join("sitemap.xml");
    std::fs::write(
        &sitemap,
        "<urlset><url><loc>https://example.de/de/impressum/</loc></url></urlset>",
    )
    .unwrap();

    cmd()
        .args(["analyze", "--delay-ms", "0", "--site"])
        .arg(format!("Beispiel={}", sitemap.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Beispiel"))
        .stdout(predicate::str::contains("Articles: 0 found, 0 analyzed, 0 failed"));
}

#[test]
fn test_cli_analyze_missing_sitemap_is_skipped() {
    cmd()
        .args(["analyze", "--delay-ms", "0", "--site", "Fehlt=/nonexistent/sitemap.xml", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"skipped\""))
        .stderr(predicate::str::contains("Fehlt skipped"));
}

#[test]
fn test_cli_invalid_site_argument() {
    cmd().args(["analyze", "--site", "ohne-pfad"]).assert().failure();
}

#[test]
fn test_cli_analyze_empty_sitemap_is_reported() {
    let tmp = TempDir::new().unwrap();
    let sitemap = tmp.path().join("sitemap.xml");
    std::fs::write(&sitemap, "<urlset/>").unwrap();

    cmd()
        .args(["analyze", "--delay-ms", "0", "-f", "json", "--site"])
        .arg(format!("Leer={}", sitemap.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Leer\""))
        .stdout(predicate::str::contains("\"total_articles\": 0"));
}
