/*!
 * Tests for file extension handling and format detection
 */

use l10nsync::errors::AppError;
use l10nsync::formats::{LocalizationFormat, detect_format, find_suffix};

#[test]
fn test_findSuffix_shouldExtractExtensionAfterFinalDot() {
    let cases = [
        ("hey.csv", "csv"),
        ("hello.json", "json"),
        ("rather_long_name_with_many_under_scores.txt", "txt"),
        (" .csv", "csv"),
        (".csv", "csv"),
        ("q12.prp", "prp"),
        ("prp", ""),
        ("", ""),
        ("           ", ""),
        (" ", ""),
        ("www.facebook.com", "com"),
        ("hello.csv.txt", "txt"),
        ("frank.txt.csv", "csv"),
        (".gitignore.ignore.txt", "txt"),
        ("STRINGS.XML", "xml"),
    ];

    for (path, expected) in cases {
        assert_eq!(find_suffix(path), expected, "path: '{path}'");
    }
}

#[test]
fn test_detectFormat_withKnownExtensions_shouldMapToFormats() {
    assert_eq!(
        detect_format("messages_en.properties").unwrap(),
        LocalizationFormat::Properties
    );
    assert_eq!(detect_format("en.json").unwrap(), LocalizationFormat::Json);
    assert_eq!(detect_format("strings.xml").unwrap(), LocalizationFormat::AndroidXml);
}

#[test]
fn test_detectFormat_withUnknownOrEmptyExtension_shouldFail() {
    for path in ["data.csv", "config.yaml", "notes.j", "file", "", "   "] {
        let result = detect_format(path);
        assert!(
            matches!(result, Err(AppError::UnsupportedFormat(_))),
            "path: '{path}'"
        );
    }
}
