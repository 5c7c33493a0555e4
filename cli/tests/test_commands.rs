#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use clap::Parser;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    use hksave_cli::{decode, encode, format, inspect, run, validate, Cli, Command, KindArg};
    use hksave_core::prelude::*;

    fn write_json(dir: &TempDir, name: &str, doc: &Value) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, serde_json::to_string(doc).unwrap()).unwrap();
        path
    }

    // ## 1️⃣ encode → decode

    #[test]
    fn encode_then_decode_to_file() {
        let dir = TempDir::new().unwrap();
        let codec = SaveCodec::default();
        let doc = json!({"geo": 1250, "health": 5});
        let input = write_json(&dir, "save.json", &doc);
        let container = dir.path().join("user1.dat");
        let output = dir.path().join("out.json");

        let msg = encode(&codec, &input, &container, None).unwrap();
        assert!(msg.contains("binary"), "{msg}");
        assert!(fs::read(&container).unwrap().starts_with(&hksave_core::constants::PREAMBLE));

        let msg = decode(&codec, &container, Some(&output), false).unwrap();
        assert!(msg.contains("via standard"), "{msg}");

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text, "{\n  \"geo\": 1250,\n  \"health\": 5\n}");
    }

    #[test]
    fn decode_to_stdout_compact() {
        let dir = TempDir::new().unwrap();
        let codec = SaveCodec::default();
        let container = dir.path().join("user2.dat");
        fs::write(&container, codec.encode(&json!({"geo": 7})).unwrap()).unwrap();

        assert_eq!(decode(&codec, &container, None, true).unwrap(), r#"{"geo":7}"#);
    }

    #[test]
    fn encode_plain_kind_from_extension() {
        let dir = TempDir::new().unwrap();
        let codec = SaveCodec::default();
        let input = write_json(&dir, "in.json", &json!({"geo": 1}));
        let output = dir.path().join("pretty.json");

        encode(&codec, &input, &output, None).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "{\n  \"geo\": 1\n}");
    }

    #[test]
    fn explicit_kind_overrides_extension() {
        let dir = TempDir::new().unwrap();
        let codec = SaveCodec::default();
        let input = write_json(&dir, "in.json", &json!({"geo": 1}));
        let output = dir.path().join("out.json");

        encode(&codec, &input, &output, Some(KindArg::Binary.into())).unwrap();
        let raw = fs::read(&output).unwrap();
        assert_eq!(codec.decode(&raw).unwrap().route, DecodeRoute::Strategy(DecodeStrategy::Standard));
    }

    #[test]
    fn encode_rejects_invalid_json() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("bad.json");
        fs::write(&input, "{\"geo\": ").unwrap();

        let err = encode(&SaveCodec::default(), &input, &dir.path().join("x.dat"), None).unwrap_err();
        assert!(err.to_string().contains("not a valid JSON document"), "{err:#}");
    }

    // ## 2️⃣ format / validate / inspect

    #[test]
    fn format_rewrites_indentation() {
        let dir = TempDir::new().unwrap();
        let input = write_json(&dir, "in.json", &json!({"a": [1, 2]}));
        assert_eq!(format(&input, None).unwrap(), "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn validate_reports_route() {
        let dir = TempDir::new().unwrap();
        let codec = SaveCodec::default();
        let container = dir.path().join("user3.dat");
        fs::write(&container, codec.encode(&json!({"geo": 7})).unwrap()).unwrap();

        let msg = validate(&codec, &container).unwrap();
        assert!(msg.contains("valid (standard"), "{msg}");
    }

    #[test]
    fn validate_fails_on_garbage() {
        let dir = TempDir::new().unwrap();
        let container = dir.path().join("broken.dat");
        fs::write(&container, [0xDEu8, 0xAD, 0xBE, 0xEF]).unwrap();

        let err = validate(&SaveCodec::default(), &container).unwrap_err();
        assert!(format!("{err:#}").contains("decode failure"), "{err:#}");
    }

    #[test]
    fn inspect_describes_frame() {
        let dir = TempDir::new().unwrap();
        let codec = SaveCodec::default();
        let container = dir.path().join("user4.dat");
        fs::write(&container, codec.encode(&json!({"geo": 1250, "health": 5})).unwrap()).unwrap();

        let report = inspect(&codec, &container).unwrap();
        assert!(report.contains("preamble:  found"), "{report}");
        assert!(report.contains("declared:  44 bytes (1-byte prefix)"), "{report}");
        assert!(!report.contains("truncated"), "{report}");
    }

    #[test]
    fn missing_input_has_context() {
        let err = inspect(&SaveCodec::default(), &PathBuf::from("/nonexistent/user1.dat")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read"), "{err:#}");
    }

    // ## 3️⃣ Argument parsing

    #[test]
    fn parses_counted_verbose_and_subcommand() {
        let cli = Cli::try_parse_from(["hksave", "-vv", "decode", "user1.dat", "--compact"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Decode { compact: true, output: None, .. }));
    }

    #[test]
    fn parses_encode_kind() {
        let cli = Cli::try_parse_from(["hksave", "encode", "in.json", "-o", "out.dat", "--kind", "plain"]).unwrap();
        match cli.command {
            Command::Encode { kind, .. } => assert_eq!(kind, Some(KindArg::Plain)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn run_dispatches_format() {
        let dir = TempDir::new().unwrap();
        let input = write_json(&dir, "in.json", &json!({"geo": 1}));
        let cli = Cli::try_parse_from(["hksave", "format", input.to_str().unwrap()]).unwrap();
        assert_eq!(run(&cli).unwrap(), "{\n  \"geo\": 1\n}");
    }
}
