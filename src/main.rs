//! Cubename — a name spelled in glowing cube-letters. Runs the cube_landing app.

use cube_landing::config::LandingConfig;
use cube_landing::sdk::LandingPageBuilder;

fn main() {
    let _ = dotenvy::dotenv();
    let config = LandingConfig::from_env();

    LandingPageBuilder::new()
        .landing_config(config)
        .build()
        .run();
}
