/// Example program to print the loaded configuration
///
/// Run with: cargo run -p glide-config --example print_config

fn main() {
    // Load configuration from glide.toml
    let config = glide_config::GlideConfig::load();

    println!("=== Glide Configuration ===\n");

    println!("Transition Defaults:");
    println!("  Duration: {}", config.transition.duration);
    println!("  Delay: {}", config.transition.delay);
    println!("  Timing Function: {}", config.transition.timing_function);
    println!(
        "  Begin From Current Value: {}",
        config.transition.begin_from_current_value
    );
    println!();

    println!("Scheduler Settings:");
    println!("  Max Turns: {}", config.scheduler.max_turns);
    println!();

    println!("Logging Settings:");
    println!("  Filter: {:?}", config.logging.filter);
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
