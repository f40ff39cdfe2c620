/*!
 * Tests for ISO 639-1 language code utilities
 */

use l10nsync::errors::AppError;
use l10nsync::language_utils::{is_valid_two_letter_lang_code, retrieve_lang_full_name};

#[test]
fn test_isValidTwoLetterLangCode_shouldMatchExpectedTable() {
    let cases = [
        ("tr", true),
        ("en", true),
        ("fr", true),
        ("de", true),
        ("es", true),
        ("eso", false),
        ("try", false),
        ("qwq", false),
        ("", false),
        (" ", false),
        ("tr ", false),
        ("zz", false),
    ];

    for (code, expected) in cases {
        assert_eq!(is_valid_two_letter_lang_code(code), expected, "code: '{code}'");
    }
}

#[test]
fn test_retrieveLangFullName_withValidCodes_shouldReturnEnglishNames() {
    let cases = [
        ("tr", "Turkish"),
        ("en", "English"),
        ("fr", "French"),
        ("de", "German"),
    ];

    for (code, expected) in cases {
        assert_eq!(retrieve_lang_full_name(code).unwrap(), expected);
    }
}

#[test]
fn test_retrieveLangFullName_withInvalidCode_shouldFail() {
    for code in ["tren", "zz", "", "t"] {
        let result = retrieve_lang_full_name(code);
        assert!(
            matches!(result, Err(AppError::InvalidLanguageCode(_))),
            "code: '{code}'"
        );
    }
}
