//! Edge case tests for secret content and file placement.

mod support;
use support::*;

use secretsync::SecretEntry;

fn roundtrip(t: &Test, file: &str, destination: &str, contents: &[u8]) -> Vec<u8> {
    t.write_secret(file, contents);
    let entry = SecretEntry::new(file, destination, true);
    entry.update(&t.ws()).unwrap();
    entry.apply(&t.ws()).unwrap();
    t.destination(destination).unwrap()
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_unicode_content() {
    let t = Test::new();
    let contents = "clé = \"日本語 🔐\"\nnoms = «ÅÄÖ»\n".as_bytes();
    assert_eq!(roundtrip(&t, "unicode.txt", "out/unicode.txt", contents), contents);
}

#[test]
fn test_binary_content() {
    let t = Test::new();
    let contents: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    assert_eq!(roundtrip(&t, "keystore.jks", "app/keystore.jks", &contents), contents);
}

#[test]
fn test_armor_markers_in_content() {
    let t = Test::new();
    let contents = b"-----BEGIN AGE ENCRYPTED FILE-----\nnot really\n-----END AGE ENCRYPTED FILE-----\n";
    assert_eq!(roundtrip(&t, "fake.age", "fake.age", contents), contents);
}

#[test]
fn test_line_endings_preserved() {
    let t = Test::new();
    let contents = b"a=1\r\nb=2\rc=3\n\n";
    assert_eq!(roundtrip(&t, "crlf.env", ".env", contents), contents);
}

#[test]
fn test_large_content() {
    let t = Test::new();
    let contents = vec![b'X'; 1024 * 1024];
    assert_eq!(roundtrip(&t, "large.bin", "large.bin", &contents), contents);
}

#[test]
fn test_no_trailing_newline_added() {
    let t = Test::new();
    assert_eq!(roundtrip(&t, "k", "k", b"ABC123"), b"ABC123");
}

// ============================================================================
// Placement
// ============================================================================

#[test]
fn test_deeply_nested_destination_created() {
    let t = Test::new();
    let destination = "a/b/c/d/e/f/secret.txt";
    assert_eq!(roundtrip(&t, "s.txt", destination, b"deep"), b"deep");
}

#[test]
fn test_file_with_spaces_and_dots() {
    let t = Test::new();
    let file = "My Secrets/prod.v2.json";
    assert_eq!(roundtrip(&t, file, "config/prod v2.json", b"{}"), b"{}");
    assert!(t.artifact_path(file).ends_with("My Secrets/prod.v2.json.enc"));
}

#[test]
fn test_hidden_files() {
    let t = Test::new();
    assert_eq!(roundtrip(&t, ".env.production", ".env", b"X=1"), b"X=1");
}

#[test]
fn test_destination_inside_encrypted_tree_name_is_allowed() {
    // Only the artifact suffix distinguishes the two trees
    let t = Test::new();
    let destination = ".configure-files/plain.txt";
    assert_eq!(roundtrip(&t, "plain.txt", destination, b"p"), b"p");
    assert!(t.artifact("plain.txt").is_some());
}

#[test]
fn test_existing_destination_directory_is_io_error() {
    let t = Test::with_secrets(&[(API_KEY_FILE, "ABC123")]);
    std::fs::create_dir_all(t.project.path().join(API_KEY_DEST)).unwrap();
    let entry = SecretEntry::new(API_KEY_FILE, API_KEY_DEST, false);

    assert!(entry.apply(&t.ws()).is_err());
}
