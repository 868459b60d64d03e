use std::process::Command;

#[test]
fn exits_nonzero_when_database_cannot_be_opened() {
    let dir = tempfile::tempdir().unwrap();
    // parent directories are not created, so opening fails
    let db_path = dir.path().join("missing").join("nested").join("products.db");

    let status = Command::new(env!("CARGO_BIN_EXE_offer-for-you"))
        .current_dir(dir.path())
        .env("DATABASE_URL", format!("sqlite://{}", db_path.display()))
        .env("PORT", "0")
        .status()
        .unwrap();

    assert!(!status.success(), "startup failure exited with {status}");
}
