use std::env;
use std::fs;
use std::path::Path;

// Solo se exportan las claves propias del cliente del blog
const ENV_PREFIX: &str = "BLOG_";

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim().trim_matches('"');
    if key.starts_with(ENV_PREFIX) {
        Some((key, value))
    } else {
        None
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        // Sin .env se usan los valores por defecto de config.rs
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        // Una variable ya definida en el entorno tiene prioridad sobre el .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
