use imagegen::env_file::load_env_file;
use imagegen::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_env_file() {
    let temp_dir = TempDir::new().unwrap();
    let env_path = temp_dir.path().join(".env");
    fs::write(
        &env_path,
        "DEFAULT_FLUENTBIT_IMAGE=fluent/fluent-bit:3.1.6\n\
         ENV_IMG=europe-docker.pkg.dev/kyma-project/prod/telemetry-manager:1.22.0\n",
    )
    .unwrap();

    let env = load_env_file(&env_path).unwrap();

    assert_eq!(env.len(), 2);
    assert_eq!(env.get("DEFAULT_FLUENTBIT_IMAGE").unwrap(), "fluent/fluent-bit:3.1.6");
    assert_eq!(
        env.get("ENV_IMG").unwrap(),
        "europe-docker.pkg.dev/kyma-project/prod/telemetry-manager:1.22.0"
    );
}

#[test]
fn test_load_env_file_missing() {
    let temp_dir = TempDir::new().unwrap();

    match load_env_file(temp_dir.path().join(".env")) {
        Err(Error::Read { path, .. }) => assert!(path.ends_with(".env")),
        _ => panic!("Expected Read error"),
    }
}

#[test]
fn test_last_declaration_wins() {
    let temp_dir = TempDir::new().unwrap();
    let env_path = temp_dir.path().join(".env");
    fs::write(&env_path, "ENV_IMG=first:1\nENV_IMG=second:2\n").unwrap();

    let env = load_env_file(&env_path).unwrap();

    assert_eq!(env.len(), 1);
    assert_eq!(env.get("ENV_IMG").unwrap(), "second:2");
}

#[test]
fn test_declaration_order_is_kept() {
    let temp_dir = TempDir::new().unwrap();
    let env_path = temp_dir.path().join(".env");
    fs::write(&env_path, "B_IMG=b:1\nA_IMG=a:1\nC_IMG=c:1\n").unwrap();

    let env = load_env_file(&env_path).unwrap();
    let keys: Vec<&str> = env.keys().map(String::as_str).collect();

    assert_eq!(keys, ["B_IMG", "A_IMG", "C_IMG"]);
}
