use std::env;

fn main() {
    // Release pipelines may stamp a version; otherwise the package version is used
    let version = env::var("PYLAUNCH_VERSION")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.1".to_string()));

    println!("cargo:rustc-env=PYLAUNCH_VERSION={}", version.trim());
    println!("cargo:rerun-if-env-changed=PYLAUNCH_VERSION");
    println!("cargo:rerun-if-env-changed=GIT_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_TIME");
}
