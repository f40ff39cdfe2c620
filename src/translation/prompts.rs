/*!
 * Prompt construction for translation requests.
 *
 * The system prompt carries the localization hints (product context, tone,
 * glossary); the user prompt carries one batch of pairs as a JSON object plus
 * the target language name.
 */

use std::collections::BTreeMap;

use crate::resource_map::ResourceMap;
use crate::translation::LocalizationHints;

/// Build the per-batch user prompt embedding the pairs as JSON.
pub fn generate_user_prompt(pairs: &ResourceMap, target_language: &str) -> String {
    let sorted: BTreeMap<&str, &str> = pairs.iter().collect();
    let pairs_json =
        serde_json::to_string_pretty(&sorted).unwrap_or_else(|_| "{}".to_string());

    format!(
        "\nTranslate the following values to {target_language} according to the criteria \
         you were given.\n\nInput:\n{pairs_json}\nTarget Language:\n{target_language}\n\nOutput:\n\n"
    )
}

/// Build the system prompt from the localization hints.
pub fn generate_system_prompt(hints: &LocalizationHints) -> String {
    let context_message = get_context_message(&hints.context);
    let glossary_message = get_glossary_message(&hints.glossary);
    let tone_message = get_tone_message(&hints.tone);

    format!(
        r#"
You are a specialized AI agent for application localization and internationalization (i18n).
Your task is to accurately translate content from the source language to the target language
while preserving functionality, maintaining cultural relevance, and ensuring technical accuracy.

Responsibilities:
- Translate UI elements, error messages, help text, and documentation
- Maintain consistent terminology throughout the application
- Preserve all formatting elements, variables,
and placeholders (e.g., {{0}}, {{name}}, %s, $variable_name, {{placeholder}})
- Adapt content for cultural appropriateness in the target language

{context_message}

{glossary_message}

{tone_message}

Process Guidelines:
1. Analyze the source text to understand context and technical requirements
2. Identify and preserve untranslatable elements:
   - Variables and placeholders
   - HTML/XML tags
   - Brand names and proper nouns
   - Technical commands or functions
3. Translate content maintaining original meaning, tone, and intent
4. Follow length constraints:
   - Keep translations concise, especially for UI elements
   - Maintain similar length to source text when possible
   - For button labels and short prompts, prioritize brevity
5. Adapt date formats, number formats, and units of measurement appropriate to the target locale
6. Use appropriate pluralization rules for the target language
7. Output the translated key value pairs as valid JSON.

Your input will be a list of key value pairs.
Always output json translated key value pairs.

Make sure you always output VALID JSON that adheres to the format. Your JSON text output will be
parsed to an object. Thus, the JSON text MUST be valid.

The output can be in different languages. Make sure you output valid JSON in every language.
Make sure keys and values in JSON are enclosed with double quotes and characters are UTF-8
characters.
Do not alter keys. Output any key as it is. Keys are unique ids that will be used to merge the
values back into the resource file, so preserve every character of every key.

Example input:

{{
    "key1": "Source text 1",
    "key2": "Source text with {{placeholder}}",
    "key3": "Source text with <b>formatting</b>"
}}

Example output:

{{
    "key1": "Translated text 1",
    "key2": "Translated text with {{placeholder}}",
    "key3": "Translated text with <b>formatting</b>"
}}
"#
    )
}

fn get_context_message(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("Here is some information about the company you are working for: {context}")
    }
}

fn get_glossary_message(glossary: &std::collections::BTreeMap<String, String>) -> String {
    if glossary.is_empty() {
        return String::new();
    }

    let mut message = String::from(
        "\nHere is the glossary of the company you are working for.\n\
         Use this glossary to more accurately localize messages.\nGlossary:\n",
    );
    for (term, replacement) in glossary {
        message.push_str(&format!("{term}={replacement}\n"));
    }
    message
}

fn get_tone_message(tone: &str) -> String {
    if tone.is_empty() {
        String::new()
    } else {
        format!("You should localize according to the company tone.\nTone: {tone}")
    }
}
