use quietcast_core::{CodebookBuilder, ReverseMapBuilder};
use std::fs;
use std::path::PathBuf;

fn render(codebook: &[u8], reverse_map: &[u8]) -> String {
    let join = |values: &[u8]| {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut out = String::from(
        "// AUTO-GENERATED FILE - DO NOT EDIT MANUALLY\n\
         // Generated from CodebookBuilder::default() and ReverseMapBuilder\n\
         // Run `cargo run -p generate-tables` to regenerate\n\n",
    );
    out.push_str("/// Codewords indexed by nibble value\n");
    out.push_str(&format!("pub const CODEBOOK: [u8; {}] = [\n", codebook.len()));
    out.push_str(&format!("    {},\n];\n\n", join(codebook)));
    out.push_str("/// Nearest codeword index per received byte; 16 marks a tie\n");
    out.push_str(&format!("pub const REVERSE_MAP: [u8; {}] = [\n", reverse_map.len()));
    for row in reverse_map.chunks(16) {
        out.push_str(&format!("    {},\n", join(row)));
    }
    out.push_str("];\n");
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tables_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .ok_or("tools crate has no parent directory")?
        .join("core/src/tables.rs");

    let codebook = CodebookBuilder::default().build()?;
    let reverse_map = ReverseMapBuilder::build(&codebook);
    let content = render(codebook.codewords(), &reverse_map.to_raw());

    fs::write(&tables_path, content)?;
    println!("Generated: {}", tables_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_tables_match_checked_in_file() {
        let codebook = CodebookBuilder::default().build().unwrap();
        let reverse_map = ReverseMapBuilder::build(&codebook);
        let rendered = render(codebook.codewords(), &reverse_map.to_raw());
        let checked_in = include_str!("../../core/src/tables.rs");
        assert_eq!(rendered, checked_in);
    }
}
