//! Locations command handler.

use anyhow::Result;

use super::AppContext;

/// List registered locations in network order.
pub fn handle_list_locations(context: &AppContext) -> Result<()> {
    let locations: Vec<&str> = context.graph.locations().collect();
    if locations.is_empty() {
        println!("No locations available in network.");
        return Ok(());
    }
    print!("{}", context.format.render_locations(&locations)?);
    Ok(())
}
