use indaco::{Registry, Variant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = Registry::builtin()?;

    let variant = Variant::from_str(std::env::args().nth(1).as_deref().unwrap_or("dark"));
    let css = registry.generate_css(variant, "tok-");
    println!("{css}");

    Ok(())
}
