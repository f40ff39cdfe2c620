/*!
 * ISO 639-1 language code utilities.
 */

use isolang::Language;

use crate::errors::AppError;

/// Whether `code` is a well-formed two-letter ISO 639-1 language code.
///
/// The check is strict: no trimming, no three-letter fallbacks. `"tr"` is
/// valid, `"tr "` and `"tur"` are not.
pub fn is_valid_two_letter_lang_code(code: &str) -> bool {
    code.len() == 2 && Language::from_639_1(&code.to_lowercase()).is_some()
}

/// Full English name of a two-letter language code, e.g. `"tr"` -> `"Turkish"`.
pub fn retrieve_lang_full_name(code: &str) -> Result<String, AppError> {
    if code.len() != 2 {
        return Err(AppError::InvalidLanguageCode(code.to_string()));
    }
    Language::from_639_1(&code.to_lowercase())
        .map(|language| language.to_name().to_string())
        .ok_or_else(|| AppError::InvalidLanguageCode(code.to_string()))
}
