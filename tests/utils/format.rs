use regconsole::clipboard::pull_command;
use regconsole::utils::format::*;

#[test]
fn test_format_bytes_units() {
    assert_eq!(format_bytes(0), "0 Bytes");
    assert_eq!(format_bytes(1), "1 Bytes");
    assert_eq!(format_bytes(1536), "1.5 KB");
    assert_eq!(format_bytes(10 * 1024 * 1024), "10 MB");
    assert_eq!(format_bytes(3 * 1024 * 1024 * 1024 + 256 * 1024 * 1024), "3.25 GB");
}

#[test]
fn test_format_bytes_precision() {
    assert_eq!(format_bytes(1_234_567), "1.18 MB");
    assert_eq!(format_bytes_with(1_234_567, 3), "1.177 MB");
}

#[test]
fn test_pretty_manifest_keeps_key_order() {
    let body = r#"{"schemaVersion":2,"mediaType":"m","layers":[{"size":10}]}"#;
    let expected = "{\n  \"schemaVersion\": 2,\n  \"mediaType\": \"m\",\n  \"layers\": [\n    {\n      \"size\": 10\n    }\n  ]\n}";
    assert_eq!(pretty_manifest(body), expected);
}

#[test]
fn test_pretty_manifest_non_json_verbatim() {
    assert_eq!(pretty_manifest("not json {"), "not json {");
}

#[test]
fn test_pull_command_format() {
    assert_eq!(
        pull_command("registry.lan", 7000, "library/nginx", Some("1.25")),
        "docker pull registry.lan:7000/library/nginx:1.25"
    );
    assert_eq!(
        pull_command("registry.lan", 7000, "nginx", None),
        "docker pull registry.lan:7000/nginx:latest"
    );
}
