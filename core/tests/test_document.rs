#[cfg(test)]
mod tests {
    use serde_json::json;

    use hksave_core::document::{clean_text, document_span, has_delimiters};
    use hksave_core::pipeline::repair::repair_text;
    use hksave_core::prelude::*;
    use hksave_core::utils::head_preview;

    // ## 1️⃣ Format and validate

    #[test]
    fn format_document_two_space_indent() {
        let pretty = format_document(r#"{"a":1,"b":[1,2]}"#).unwrap();
        assert_eq!(pretty, "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn format_document_rejects_invalid() {
        assert!(matches!(format_document("{\"a\":"), Err(CodecError::InvalidDocument(_))));
    }

    #[test]
    fn validate_document_accepts_any_json() {
        validate_document("{}").unwrap();
        validate_document("[1, 2]").unwrap();
        validate_document("42").unwrap();
        assert!(validate_document("{geo: 1}").is_err());
    }

    // ## 2️⃣ Text helpers

    #[test]
    fn delimiters_need_both() {
        assert!(has_delimiters("{}"));
        assert!(has_delimiters("x}y{"));
        assert!(!has_delimiters("{"));
        assert!(!has_delimiters("[1]"));
    }

    #[test]
    fn clean_text_strips_bom_and_controls() {
        assert_eq!(clean_text("\u{FEFF}{\"a\":\t1}\r\n"), "{\"a\":1}");
        assert_eq!(clean_text("a\u{7F}b\u{0}c"), "abc");
        // A BOM that is not leading is kept.
        assert_eq!(clean_text("a\u{FEFF}"), "a\u{FEFF}");
    }

    #[test]
    fn document_span_first_open_last_close() {
        assert_eq!(document_span("xx{\"a\":{}}yy"), Some("{\"a\":{}}"));
        assert_eq!(document_span("}{"), None);
        assert_eq!(document_span("no braces"), None);
    }

    #[test]
    fn repair_text_recovers_span() {
        let (text, doc) = repair_text("\u{FEFF}garbage{\"geo\":\n12}\u{0}tail").unwrap();
        assert_eq!(text, "{\"geo\":12}");
        assert_eq!(doc, json!({"geo": 12}));
        assert!(repair_text("{ broken").is_none());
        assert!(repair_text("{\"a\" 1}").is_none());
    }

    // ## 3️⃣ Previews and sizes

    #[test]
    fn head_preview_text_or_hex() {
        assert_eq!(head_preview(b"{\"geo\""), "b\"{\"geo\"\"");
        assert_eq!(head_preview(&[0x00, 0x01, 0xFF]), "0x0001ff");
        assert_eq!(head_preview(&[]), "0x");
        assert_eq!(head_preview(&[b'a'; 40]), format!("b\"{}\"", "a".repeat(32)));
    }

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(100), "100 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_234_567), "1.18 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5 GB");
    }
}
