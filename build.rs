use std::path::Path;

const CATALOG_PATH: &str = "catalogs/licenses.json";

fn main() {
    let catalog_path = Path::new(CATALOG_PATH);
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    assert!(
        catalog.get("version").and_then(|v| v.as_str()).is_some(),
        "\n\nCATALOG BUILD ERROR: Missing 'version' string\n"
    );

    let references = catalog.get("references").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'references' field\n\
             The catalog must have a top-level 'references' array.\n"
        );
    });

    let refs = references.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'references' must be an array\n\
             Got: {references}\n"
        );
    });

    let total_bytes = validate_references(refs);

    println!(
        "cargo:warning=Validated catalog: {} references, {total_bytes} bytes of text",
        refs.len()
    );
}

fn validate_references(refs: &[serde_json::Value]) -> usize {
    let mut total_bytes = 0;

    for (index, reference) in refs.iter().enumerate() {
        let name = reference
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Reference at index {index} missing 'name' string\n")
            });

        assert!(
            !name.trim().is_empty(),
            "\n\nCATALOG BUILD ERROR: Reference at index {index} has an empty name\n"
        );

        let text = reference
            .get("text")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!(
                    "\n\nCATALOG BUILD ERROR: Reference '{name}' (index {index}) missing 'text' string\n"
                )
            });

        // An empty text can never score above zero
        assert!(
            !text.trim().is_empty(),
            "\n\nCATALOG BUILD ERROR: Reference '{name}' (index {index}) has empty text\n"
        );

        total_bytes += text.len();
    }

    total_bytes
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed={CATALOG_PATH}");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
