// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

/// The complete success document used throughout the tests.
pub const SUCCESS_JSON: &str = r#"{
  "status": "success",
  "estadisticas": {
    "total_remates_listado": 12,
    "remates_con_detalle": 10,
    "duracion_segundos": 45.2,
    "tasa_exito_detalle": 83.3
  },
  "modulo_remates": {
    "filtros_aplicados": {"a": 1},
    "formulario_filtros": {},
    "resultados": [1, 2, 3]
  },
  "modulo_detalle_remates": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
}"#;

pub const ERROR_JSON: &str = r#"{"status": "error", "error_message": "timeout"}"#;

pub fn setup_test_environment() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// Writes `content` as `remates_result.json` inside `temp_dir`.
pub fn write_result(temp_dir: &TempDir, content: &str) -> PathBuf {
    write_named(temp_dir, "remates_result.json", content)
}

pub fn write_named(temp_dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// Path inside `temp_dir` where nothing has been written.
pub fn missing_result(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("remates_result.json")
}
