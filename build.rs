//! Stamps the CLI version banner with the build time and profile.

use time::{format_description, OffsetDateTime};

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-env-changed=DTU_BUILD_STAMP");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    let stamp = std::env::var("DTU_BUILD_STAMP").unwrap_or_else(|_| format_stamp(build_time()));
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=DTU_BUILD_STAMP={}", stamp);
    println!("cargo:rustc-env=DTU_BUILD_PROFILE={}", profile);
}

/// Wall clock, unless a reproducible build pins it.
fn build_time() -> OffsetDateTime {
    std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
        .unwrap_or_else(OffsetDateTime::now_utc)
}

fn format_stamp(t: OffsetDateTime) -> String {
    format_description::parse("[year]-[month]-[day] [hour]:[minute] UTC")
        .ok()
        .and_then(|fmt| t.format(&fmt).ok())
        .unwrap_or_else(|| "unknown".to_string())
}
