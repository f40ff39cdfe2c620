/*!
 * Full sync run tests: source + lock + N target languages
 */

use std::path::Path;
use std::sync::Arc;

use l10nsync::app_config::SyncConfig;
use l10nsync::app_controller::Controller;
use l10nsync::providers::mock::MockProvider;

use crate::common::{create_temp_dir, create_test_file};

fn config_for_root(root: &Path, target_langs: &[&str]) -> SyncConfig {
    let targets = target_langs
        .iter()
        .map(|lang| format!("  - {lang}"))
        .collect::<Vec<_>>()
        .join("\n");
    let yaml = format!(
        "source_lang_code: en\n\
         target_lang_codes:\n{targets}\n\
         localization_root_path: {}\n\
         file_name_pattern: \"messages_{{language}}.properties\"\n",
        root.display()
    );
    SyncConfig::from_yaml_str(&yaml).unwrap()
}

#[tokio::test]
async fn test_run_withTwoLanguages_shouldWriteBothTargetsAndTheLockFile() {
    let temp_dir = create_temp_dir().unwrap();
    let root = temp_dir.path();
    create_test_file(root, "messages_en.properties", "greeting=Hello\nfarewell=Bye\n").unwrap();

    let controller =
        Controller::with_provider(config_for_root(root, &["fr", "de"]), Arc::new(MockProvider::working()));
    let summary = controller.run().await.unwrap();

    assert!(summary.is_success());
    assert_eq!(summary.succeeded.len(), 2);

    for lang in ["fr", "de"] {
        let content =
            std::fs::read_to_string(root.join(format!("messages_{lang}.properties"))).unwrap();
        assert_eq!(content, "farewell=TRANSLATED_Bye\ngreeting=TRANSLATED_Hello\n");
    }

    let lock_content = std::fs::read_to_string(root.join("i18n.lock")).unwrap();
    assert_eq!(lock_content.lines().count(), 2);
}

#[tokio::test]
async fn test_run_twice_shouldMakeNoTranslationCallsOnSecondRun() {
    let temp_dir = create_temp_dir().unwrap();
    let root = temp_dir.path();
    create_test_file(root, "messages_en.properties", "greeting=Hello\n").unwrap();

    let provider = MockProvider::working();
    let controller =
        Controller::with_provider(config_for_root(root, &["fr"]), Arc::new(provider.clone()));

    controller.run().await.unwrap();
    let calls_after_first = provider.request_count();
    let target_after_first =
        std::fs::read_to_string(root.join("messages_fr.properties")).unwrap();

    let summary = controller.run().await.unwrap();
    let target_after_second =
        std::fs::read_to_string(root.join("messages_fr.properties")).unwrap();

    assert!(summary.is_success());
    assert_eq!(provider.request_count(), calls_after_first);
    assert_eq!(target_after_first, target_after_second);
}

#[tokio::test]
async fn test_run_withModifiedSourceValue_shouldRetranslateOnlyThatKey() {
    let temp_dir = create_temp_dir().unwrap();
    let root = temp_dir.path();
    create_test_file(root, "messages_en.properties", "greeting=Hello\nfarewell=Bye\n").unwrap();

    let provider = MockProvider::working();
    let controller =
        Controller::with_provider(config_for_root(root, &["fr"]), Arc::new(provider.clone()));
    controller.run().await.unwrap();

    // Hand-edit the target, then modify one source value
    create_test_file(
        root,
        "messages_fr.properties",
        "farewell=Au revoir\ngreeting=Bonjour\n",
    )
    .unwrap();
    create_test_file(root, "messages_en.properties", "greeting=Hello there\nfarewell=Bye\n")
        .unwrap();

    let summary = controller.run().await.unwrap();

    assert!(summary.is_success());
    let content = std::fs::read_to_string(root.join("messages_fr.properties")).unwrap();
    // Only the modified key is retranslated; the untouched one is preserved
    assert_eq!(content, "farewell=Au revoir\ngreeting=TRANSLATED_Hello there\n");
}

#[tokio::test]
async fn test_run_withOneBrokenTarget_shouldIsolateTheFailure() {
    let temp_dir = create_temp_dir().unwrap();
    let root = temp_dir.path();
    create_test_file(root, "messages_en.json", "{\"greeting\": \"Hello\"}").unwrap();
    // The German target exists but is not valid JSON, so its pipeline fails
    create_test_file(root, "messages_de.json", "{broken json").unwrap();

    let yaml = format!(
        "source_lang_code: en\n\
         target_lang_codes: [fr, de]\n\
         localization_root_path: {}\n\
         file_name_pattern: \"messages_{{language}}.json\"\n",
        root.display()
    );
    let config = SyncConfig::from_yaml_str(&yaml).unwrap();
    let controller = Controller::with_provider(config, Arc::new(MockProvider::working()));

    let summary = controller.run().await.unwrap();

    assert_eq!(summary.succeeded, vec!["fr".to_string()]);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0, "de");

    // The healthy language landed and the lock file was still written
    let fr_content = std::fs::read_to_string(root.join("messages_fr.json")).unwrap();
    assert!(fr_content.contains("TRANSLATED_Hello"));
    assert!(root.join("i18n.lock").exists());
    // The broken target was left exactly as it was
    let de_content = std::fs::read_to_string(root.join("messages_de.json")).unwrap();
    assert_eq!(de_content, "{broken json");
}

#[tokio::test]
async fn test_run_withAbsentSource_shouldSucceedWithNothingToDo() {
    let temp_dir = create_temp_dir().unwrap();
    let root = temp_dir.path();

    let controller =
        Controller::with_provider(config_for_root(root, &["fr"]), Arc::new(MockProvider::working()));
    let summary = controller.run().await.unwrap();

    assert!(summary.is_success());
    // An empty source has nothing to localize and produces an empty lock
    assert!(!root.join("messages_fr.properties").exists());
    assert_eq!(std::fs::read_to_string(root.join("i18n.lock")).unwrap(), "");
}
