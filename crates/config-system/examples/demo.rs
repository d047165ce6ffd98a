//! Configuration system demonstration

use timeline_config::{ConfigFormat, ConfigSerializer, ConfigValidator, TimelineConfig};
use timeline_shared::{Category, ViewportSize};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    println!("Venue Timeline Configuration Demo\n");

    let config = match std::env::args().nth(1) {
        Some(path) => TimelineConfig::load(path)?,
        None => TimelineConfig::default(),
    };
    ConfigValidator::validate(&config)?;

    println!("Current Configuration:");
    println!("  Default view: {}", config.default_view);
    println!("  Column width: {}", config.grid.column_width);
    println!("  Row height: {}", config.grid.row_height);
    println!("  Log level: {}", config.logging.level);
    println!();

    println!("Category styles:");
    for category in Category::KNOWN {
        println!("  {} - {}", category, config.styles.for_category(category).class_name());
    }
    println!();

    for width in [390.0, 760.0, 1440.0] {
        let layout = config.grid.layout_for(ViewportSize::new(width, 800.0));
        println!(
            "Viewport {}px: index column {}px, {:.1} body columns",
            width,
            layout.index_width,
            layout.body_width() / layout.column_width
        );
    }
    println!();

    let yaml = ConfigSerializer::serialize_string(&config, ConfigFormat::Yaml)?;
    println!("Exported configuration:");
    println!("{}", yaml);

    Ok(())
}
