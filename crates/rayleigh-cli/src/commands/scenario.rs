use crate::console::Console;
use crate::error::Result;
use rayleigh::workflows::scenario;
use tracing::info;

pub fn run(console: &mut dyn Console) -> Result<()> {
    console.println("Test mode: checking several cases...")?;
    let results = scenario::run();
    for result in &results {
        console.println(&result.to_string())?;
    }
    info!("Scenario finished with {} cases.", results.len());
    Ok(())
}
