/// Example program to print the loaded settings and the resolved pixel config
///
/// Run with: cargo run -p pitch-config --example print_config

fn main() {
    let settings = pitch_config::PitchSettings::load();

    println!("=== Pitch Settings ===\n");
    println!("Display:  density {}", settings.display.density);
    println!(
        "Grass:    {} rows, {} / {}",
        settings.grass.rows, settings.grass.light, settings.grass.dark
    );
    println!("Lines:    {} at {}dp", settings.lines.color, settings.lines.width);
    println!(
        "Output:   {}x{} -> {}",
        settings.output.width,
        settings.output.height,
        settings.output.path.display()
    );
    println!();

    match settings.resolve() {
        Ok(config) => {
            println!("=== Resolved (px) ===");
            println!("{:#?}", config);
        }
        Err(e) => eprintln!("Settings do not resolve: {}", e),
    }

    match toml::to_string_pretty(&settings) {
        Ok(toml_str) => {
            println!("\n=== Serialized Settings ===");
            println!("{}", toml_str);
        }
        Err(e) => eprintln!("Failed to serialize settings: {}", e),
    }
}
