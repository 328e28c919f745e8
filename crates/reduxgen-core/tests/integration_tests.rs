//! Integration tests for reduxgen-core's public API.

use std::path::Path;

use reduxgen_core::prelude::*;

#[test]
fn plan_through_prelude_lists_files_and_commands() {
    let name = AppName::new("demo").unwrap();
    let plan = GenerationPlan::build(name, "/tmp/demo", &Toolchain::new("npm", "npx"), false);

    assert_eq!(plan.root(), Path::new("/tmp/demo"));
    let commands: Vec<String> = plan.commands().map(|c| c.to_string()).collect();
    assert_eq!(
        commands,
        [
            "npm install",
            "npm install -D tailwindcss postcss autoprefixer",
            "npx tailwindcss init -p",
        ]
    );
}

#[test]
fn manifest_json_has_fixed_entries() {
    let manifest = Manifest::for_app(&AppName::new("demo").unwrap());
    let value: serde_json::Value = serde_json::from_str(&manifest.to_json_pretty().unwrap()).unwrap();

    let deps = value["dependencies"].as_object().unwrap();
    let keys: Vec<&str> = deps.keys().map(String::as_str).collect();
    for expected in ["@reduxjs/toolkit", "react-redux", "next", "react", "react-dom"] {
        assert!(keys.contains(&expected), "missing {expected}");
    }
    assert_eq!(deps.len(), 5);
    assert_eq!(value["scripts"].as_object().unwrap().len(), 3);
    assert_eq!(value["main"], "index.js");
}

#[test]
fn invalid_names_surface_as_validation_errors() {
    let err: ReduxgenError = AppName::new("../escape").unwrap_err().into();
    assert_eq!(err.category(), reduxgen_core::error::ErrorCategory::Validation);
}
