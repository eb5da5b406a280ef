use log::error;

use recipe_finder::{logging, ui, FinderConfig, MealDbClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = FinderConfig::load()?;
    logging::init(&config.log_path())?;

    let client = MealDbClient::from_config(&config)?;
    if let Err(e) = ui::run(&client, &config) {
        error!("{}", e);
        return Err(e.into());
    }

    Ok(())
}
