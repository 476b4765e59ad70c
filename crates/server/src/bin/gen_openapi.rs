use server::openapi::ApiDoc;
use utoipa::OpenApi;

/// Print the OpenAPI document, or write it to the path given as the first argument.
fn main() {
    let spec = match ApiDoc::openapi().to_pretty_json() {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Failed to serialize OpenAPI spec to JSON: {e}");
            std::process::exit(1);
        }
    };

    match std::env::args().nth(1) {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, spec) {
                eprintln!("Failed to write {path}: {e}");
                std::process::exit(1);
            }
        }
        None => println!("{spec}"),
    }
}
