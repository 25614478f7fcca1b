//! Round-trip tests over the public manifest API
//!
//! Reading a manifest and writing it back must never change what it
//! means: shorthand entries survive as shorthand, expanded entries drop
//! members that sit at their defaults, and re-reading the output yields
//! the same values.

use packfold::manifest::{
    CodecOptions, ContentDecoder, ContentEncoder, NameStyle, PackageContent, PackageManifest,
};

#[test]
fn test_manifest_roundtrip_preserves_meaning() {
    let json = r#"{
        "id": "app.web",
        "buildName": "WebBuild",
        "dependencies": ["app.core"],
        "triggers": ["CoreBuild"],
        "contents": [
            "bin",
            { "source": "assets", "target": "static" },
            { "source": "docs", "filter": ["*.md", "*.txt"] },
            { "source": "conf", "target": "etc", "filter": "*.toml" }
        ]
    }"#;

    let manifest = PackageManifest::from_json(json).unwrap();
    let out = manifest.to_json().unwrap();
    let reparsed = PackageManifest::from_json(&out).unwrap();

    assert_eq!(reparsed, manifest);
}

#[test]
fn test_canonical_form_collapses_default_entries() {
    let json = r#"{
        "id": "app.web",
        "buildName": "WebBuild",
        "contents": [
            { "source": "bin", "target": ".", "filter": ["**/*"] },
            { "source": "logs", "target": "./" },
            { "source": "tools", "filter": ["**\\*"] }
        ]
    }"#;

    let out = PackageManifest::from_json(json).unwrap().to_json().unwrap();

    // Every entry was at its defaults, so each collapses to shorthand.
    assert!(out.contains("\"bin\""));
    assert!(out.contains("\"logs\""));
    assert!(out.contains("\"tools\""));
    assert!(!out.contains("target"));
    assert!(!out.contains("filter"));
}

#[test]
fn test_canonical_form_keeps_non_default_members() {
    let json = r#"{
        "id": "app.web",
        "buildName": "WebBuild",
        "contents": [{ "source": "assets", "target": "static", "filter": ["*.css", "*.js"] }]
    }"#;

    let out = PackageManifest::from_json(json).unwrap().to_json().unwrap();

    assert!(out.contains("\"target\": \"static\""));
    assert!(out.contains("\"*.css\""));
    assert!(out.contains("\"*.js\""));
}

#[test]
fn test_canonical_form_is_stable() {
    let manifest = PackageManifest::from_json(
        r#"{"id":"p","buildName":"B","contents":["one",{"source":"two","target":"out"}]}"#,
    )
    .unwrap();

    let first = manifest.to_json().unwrap();
    let second = PackageManifest::from_json(&first)
        .unwrap()
        .to_json()
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_parsed_entries_are_fully_explicit() {
    let manifest =
        PackageManifest::from_json(r#"{"id":"p","buildName":"B","contents":["bin"]}"#).unwrap();

    let entry = &manifest.contents[0];
    assert_eq!(entry.source, "bin");
    assert_eq!(entry.target, ".");
    assert_eq!(entry.filter, vec!["**/*".to_string()]);
}

#[test]
fn test_null_slots_dropped_and_unknown_fields_ignored() {
    let json = r#"{
        "id": "app.web",
        "buildName": "WebBuild",
        "schemaVersion": 2,
        "metadata": { "owner": "platform-team" },
        "contents": ["bin", null, { "source": "assets", "legacy": [1, 2] }]
    }"#;

    let manifest = PackageManifest::from_json(json).unwrap();

    assert_eq!(manifest.contents.len(), 2);
    assert_eq!(manifest.contents[0].source, "bin");
    assert_eq!(manifest.contents[1].source, "assets");
}

#[test]
fn test_codec_symmetry_under_every_option_set() {
    let entry = PackageContent {
        source: "assets".to_string(),
        target: "static".to_string(),
        filter: vec!["*.css".to_string(), "*.js".to_string()],
    };

    let option_sets = [
        CodecOptions {
            name_style: NameStyle::Camel,
            case_insensitive: false,
        },
        CodecOptions {
            name_style: NameStyle::Camel,
            case_insensitive: true,
        },
        CodecOptions {
            name_style: NameStyle::Pascal,
            case_insensitive: false,
        },
        CodecOptions {
            name_style: NameStyle::Pascal,
            case_insensitive: true,
        },
    ];

    for options in option_sets {
        let json = ContentEncoder::new(&entry, options).to_json().unwrap();
        let decoded = ContentDecoder::new(options).from_json(&json).unwrap();
        assert_eq!(decoded.as_ref(), Some(&entry), "options {options:?}");
    }
}

#[test]
fn test_case_insensitive_decoder_reads_either_style() {
    let options = CodecOptions {
        name_style: NameStyle::Camel,
        case_insensitive: true,
    };
    let decoder = ContentDecoder::new(options);

    let camel = decoder
        .from_json(r#"{"source":"bin","target":"out"}"#)
        .unwrap();
    let pascal = decoder
        .from_json(r#"{"Source":"bin","Target":"out"}"#)
        .unwrap();

    assert_eq!(camel, pascal);
}

#[test]
fn test_decode_errors_name_the_offending_member() {
    let err = PackageManifest::from_json(
        r#"{"id":"p","buildName":"B","contents":[{"target":"out"}]}"#,
    )
    .unwrap_err();
    assert!(
        err.to_string()
            .contains("missing required property \"source\""),
        "unexpected error: {err}"
    );

    let err = ContentDecoder::default()
        .from_json(r#"{"source":"s","filter":{"bad":true}}"#)
        .unwrap_err();
    assert!(
        err.to_string()
            .contains("a filter pattern, an array of filter patterns, or null"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_shorthand_survives_manifest_roundtrip() {
    let mut manifest = PackageManifest::new("app.docs", "DocsBuild");
    manifest.contents.push(PackageContent::new("guide"));

    let out = manifest.to_json().unwrap();

    assert!(out.contains("\"guide\""));
    assert!(!out.contains("source"));
}
