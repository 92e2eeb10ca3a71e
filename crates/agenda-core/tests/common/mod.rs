use agenda_core::AgendaBuilder;
use tempfile::TempDir;

/// Helper function to create a test agenda facade
pub async fn create_test_agenda() -> (TempDir, agenda_core::Agenda) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let agenda = AgendaBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create agenda");
    (temp_dir, agenda)
}
