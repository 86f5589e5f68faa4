//! Vehicles command handler.

use anyhow::Result;

use super::AppContext;

/// List vehicle profiles in catalog order.
pub fn handle_list_vehicles(context: &AppContext) -> Result<()> {
    if let Some(path) = context.vehicles.source_path() {
        tracing::debug!(path = %path.display(), "listing vehicles from file");
    }
    print!(
        "{}",
        context.format.render_vehicles(context.vehicles.profiles())?
    );
    Ok(())
}
