/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rune-config --example print_config

fn main() {
    let config = rune_config::RuneConfig::load();
    let textbox = &config.textbox;

    println!("=== Rune Draw Configuration ===\n");

    println!("Text Box Settings:");
    println!("  Quirks: {}", textbox.quirks);
    println!("  Font Family: {}", textbox.font_family);
    println!("  Font Size: {}", textbox.font_size);
    println!("  Line Height: {}", textbox.line_height);
    println!("  Padding: {}", textbox.padding);
    println!("  Press Threshold: {}ms", textbox.press_threshold_ms);
    println!("  Editor Reposition Delay: {}ms", textbox.editor_reposition_delay_ms);
    println!("  Debug Line Rects: {}", textbox.debug_line_rects);
    println!("  Font: {:?}", textbox.font);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
