//! Test fixtures and constants.

/// Repository file used by the single-secret scenarios.
pub const API_KEY_FILE: &str = "secrets/api.key";

/// Destination of [`API_KEY_FILE`] in the project.
pub const API_KEY_DEST: &str = "config/api.key";

/// Secrets typically tracked by a mobile app project.
pub const STANDARD_SECRETS: &[(&str, &str)] = &[
    ("my-app/api.key", "ABC123"),
    ("my-app/google-services.json", "{\"project_info\":{\"project_id\":\"demo\"}}"),
    ("my-app/Secrets.swift", "let apiKey = \"sk-test-12345\"\n"),
    ("shared/signing.properties", "storePassword=hunter2\nkeyAlias=release\n"),
];

/// Manifest tracking [`STANDARD_SECRETS`].
pub const SAMPLE_MANIFEST: &str = r#"
[configure]
version = "0.1.0"
project = "my-app"

[[files]]
file = "my-app/api.key"
destination = "config/api.key"
encrypt = true

[[files]]
file = "my-app/google-services.json"
destination = "android/app/google-services.json"
encrypt = true

[[files]]
file = "my-app/Secrets.swift"
destination = "ios/Secrets.swift"
encrypt = true

[[files]]
file = "shared/signing.properties"
destination = "android/signing.properties"
"#;
