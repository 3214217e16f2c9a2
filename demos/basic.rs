use indaco::{Registry, Variant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = Registry::builtin()?;

    for token_type in ["keyword", "string", "comment", "function", "made-up"] {
        let style = registry.resolve_style(Variant::Dark, token_type);
        println!("{token_type}: {}", style.as_css());
    }

    Ok(())
}
