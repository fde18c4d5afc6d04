mod common;

use common::TestEnv;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn scan_json_output_matches_contract() {
    let env = TestEnv::new();

    let explicit = env.run_json(&["scan", "framework", "nsa,mitre", "--format", "json"]);
    validate("scan_config.schema.json", &explicit);

    let scan_all = env.run_json(&["scan", "--format", "json"]);
    validate("scan_config.schema.json", &scan_all);

    let filtered = env.run_json(&[
        "scan",
        "control",
        "c-0001",
        "--exclude-namespaces",
        "kube-system",
        "--format",
        "json",
    ]);
    validate("scan_config.schema.json", &filtered);
}

#[test]
fn submit_payload_matches_contract() {
    let env = TestEnv::new();
    let fixture = env.write_file("results.json", r#"[{"frameworkName":"nsa"}]"#);

    let out = env
        .cmd()
        .arg("submit")
        .arg("results")
        .arg(&fixture)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let payload: Value = serde_json::from_slice(&out).expect("payload json");
    validate("posture_report.schema.json", &payload);
}
