//! dtu CLI - Inspect DTU material documents.

mod settings;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use dtu::{Document, Material, Value};
use rayon::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use settings::Settings;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut settings = Settings::load();

    // Parse global flags
    let mut filter: Option<&str> = None;
    let mut filtered_args: Vec<&str> = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "-v" | "--verbose" => filter = Some("debug"),
            "-vv" | "--trace" => filter = Some("trace"),
            "-q" | "--quiet" => filter = Some("off"),
            _ => filtered_args.push(arg),
        }
    }
    init_tracing(filter.unwrap_or(settings.log_filter.as_str()));

    if filtered_args.is_empty() {
        print_help();
        return;
    }

    let result = match filtered_args[0] {
        "info" | "i" => {
            if filtered_args.len() < 2 {
                usage_error("dtu info <file.dtu>...");
            }
            cmd_info(&filtered_args[1..], &mut settings)
        }
        "materials" | "m" => {
            if filtered_args.len() < 2 {
                usage_error("dtu materials <file.dtu>");
            }
            cmd_materials(filtered_args[1], &mut settings)
        }
        "props" | "p" => {
            if filtered_args.len() < 2 {
                usage_error("dtu props <file.dtu> [material]");
            }
            cmd_props(filtered_args[1], filtered_args.get(2).copied(), &mut settings)
        }
        "dump" | "d" => {
            if filtered_args.len() < 2 {
                usage_error("dtu dump <file.dtu>");
            }
            cmd_dump(filtered_args[1], &mut settings)
        }
        "help" | "h" | "-h" | "--help" => {
            print_help();
            Ok(())
        }
        // Default: if file exists, show info; otherwise error
        other => {
            if Path::new(other).exists() {
                cmd_info(&filtered_args[..1], &mut settings)
            } else {
                eprintln!("Unknown command: {}", other);
                eprintln!();
                print_help();
                std::process::exit(1);
            }
        }
    };

    settings.save();

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn usage_error(usage: &str) -> ! {
    eprintln!("Error: missing file argument");
    eprintln!("Usage: {}", usage);
    std::process::exit(1);
}

fn print_help() {
    println!("dtu - DTU material document inspector");
    println!("{}", version_line());
    println!();
    println!("USAGE:");
    println!("    dtu [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("    i, info      <file>...          Show asset summary and material count");
    println!("    m, materials <file>             List materials");
    println!("    p, props     <file> [material]  List material properties");
    println!("    d, dump      <file>             Dump the whole document as JSON");
    println!("    h, help                         Show this help");
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose    Show debug output");
    println!("    -vv, --trace     Show trace output (very verbose)");
    println!("    -q, --quiet      Suppress log output");
    println!();
    println!("NOTES:");
    println!("    - Passing a .dtu file directly is equivalent to 'info'");
    println!("    - RUST_LOG overrides the verbosity flags");
}

fn version_line() -> String {
    format!(
        "version {} ({}, built {})",
        env!("CARGO_PKG_VERSION"),
        env!("DTU_BUILD_PROFILE"),
        env!("DTU_BUILD_STAMP")
    )
}

/// Parse a document, treating a missing or empty file as an error.
fn load(path: &str, settings: &mut Settings) -> Result<Document> {
    let doc = dtu::parse(path).with_context(|| format!("failed to parse {}", path))?;
    if !doc.is_loaded() {
        bail!("{}: {:?} document", path, doc.state);
    }
    settings.add_recent(PathBuf::from(path));
    Ok(doc)
}

fn cmd_info(paths: &[&str], settings: &mut Settings) -> Result<()> {
    let docs: Vec<(&str, dtu::Result<Document>)> = paths
        .par_iter()
        .map(|&p| (p, dtu::parse(p)))
        .collect();

    let mut failed = 0;
    for (path, doc) in docs {
        match doc {
            Ok(doc) if doc.is_loaded() => {
                settings.add_recent(PathBuf::from(path));
                print_info(path, &doc);
            }
            Ok(doc) => {
                eprintln!("{}: {:?} document", path, doc.state);
                failed += 1;
            }
            Err(e) => {
                eprintln!("{}: {}", path, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} documents could not be read", failed, paths.len());
    }
    Ok(())
}

fn print_info(path: &str, doc: &Document) {
    println!("Document: {}", path);
    println!("  Asset:     {} ({})", doc.asset_name, doc.asset_type);
    println!("  Asset Id:  {}", doc.asset_id);
    println!("  Product:   {} / {}", doc.product_name, doc.product_component_name);
    println!("  FBX:       {}", doc.fbx_file);
    println!("  Import:    {}", doc.import_folder);
    println!("DTU: {} contains: {} materials", doc.asset_name, doc.materials.len());
    println!();
}

fn cmd_materials(path: &str, settings: &mut Settings) -> Result<()> {
    let doc = load(path, settings)?;
    for mat in &doc.materials {
        println!(
            "{:<32} {:<24} {:>4} properties",
            mat.material_name,
            mat.material_type,
            mat.len()
        );
    }
    Ok(())
}

fn cmd_props(path: &str, material: Option<&str>, settings: &mut Settings) -> Result<()> {
    let doc = load(path, settings)?;

    let selected: Vec<&Material> = match material {
        Some(name) => match doc.material(name) {
            Some(mat) => vec![mat],
            None => bail!("no material named '{}' in {}", name, path),
        },
        None => doc.materials.iter().collect(),
    };

    for mat in selected {
        println!("{} [{}]", mat.material_name, mat.material_type);
        for prop in mat.properties() {
            match prop.texture() {
                Some(tex) => println!("  {:<36} {}  <- {}", prop.name, prop.value, tex),
                None => println!("  {:<36} {}", prop.name, prop.value),
            }
        }
    }
    Ok(())
}

fn cmd_dump(path: &str, settings: &mut Settings) -> Result<()> {
    let doc = load(path, settings)?;

    let out = json!({
        "Asset Id": doc.asset_id,
        "Asset Name": doc.asset_name,
        "Asset Type": doc.asset_type,
        "Product Name": doc.product_name,
        "Product Component Name": doc.product_component_name,
        "FBX File": doc.fbx_file,
        "Import Folder": doc.import_folder,
        "Materials": doc.materials.iter().map(material_json).collect::<Vec<_>>(),
    });

    let text = if settings.pretty_json {
        serde_json::to_string_pretty(&out)?
    } else {
        serde_json::to_string(&out)?
    };
    println!("{}", text);
    Ok(())
}

fn material_json(mat: &Material) -> serde_json::Value {
    let props: Vec<serde_json::Value> = mat
        .properties()
        .iter()
        .map(|p| {
            json!({
                "Name": p.name,
                "Data Type": p.value.value_type().name(),
                "Value": value_json(&p.value),
                "Texture": p.texture,
            })
        })
        .collect();

    json!({
        "Version": mat.version,
        "Asset Name": mat.asset_name,
        "Material Name": mat.material_name,
        "Material Type": mat.material_type,
        "Value": mat.value,
        "Properties": props,
    })
}

fn value_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Integer(v) => json!(v),
        Value::Float(v) => json!(v),
        Value::Double(v) => json!(v),
        Value::String(s) => json!(s),
        Value::Color(c) | Value::Texture(c) => {
            let [r, g, b, a] = c.to_array().map(|ch| (ch.clamp(0.0, 1.0) * 255.0).round() as u8);
            json!(format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_value_json() {
        assert_eq!(value_json(&Value::Integer(3)), json!(3));
        assert_eq!(value_json(&Value::from("Hair")), json!("Hair"));
        assert_eq!(
            value_json(&Value::color(Vec4::new(1.0, 0.0, 0.0, 1.0))),
            json!("#ff0000ff")
        );
    }

    #[test]
    fn test_dumped_colors_parse_back() {
        let c = Vec4::new(0.2, 0.4, 0.6, 1.0);
        let hex = value_json(&Value::texture(c));
        let parsed = dtu::util::color::parse_html_color(hex.as_str().unwrap()).unwrap();
        assert!((parsed - c).abs().max_element() < 1e-6);
    }

    #[test]
    fn test_version_line() {
        let line = version_line();
        assert!(line.starts_with(&format!("version {} (", env!("CARGO_PKG_VERSION"))));
        assert!(line.contains(", built "));
        assert!(!env!("DTU_BUILD_STAMP").is_empty());
        assert!(!env!("DTU_BUILD_PROFILE").is_empty());
    }

    #[test]
    fn test_material_json_keys() {
        let mut mat = Material::new("Torso");
        mat.push_property(dtu::Property::new("Glossy Roughness", Value::Double(0.5), ""));
        let j = material_json(&mat);
        assert_eq!(j["Material Name"], "Torso");
        assert_eq!(j["Properties"][0]["Data Type"], "Double");
        assert_eq!(j["Properties"][0]["Value"], 0.5);
    }
}
