//! Route command handler for ranking routes between two locations.

use anyhow::{anyhow, Result};

use waypath_lib::{plan_routes, RouteAlgorithm, RoutePlan, RouteRequest, RouteSummary};

use super::{format_route_error, AppContext};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting location name.
    pub from: String,
    /// Destination location name.
    pub to: String,
    /// Vehicle kind from the catalog.
    pub vehicle: String,
    pub algorithm: RouteAlgorithm,
    /// Maximum number of routes to list.
    pub max_routes: Option<usize>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self, context: &AppContext) -> RouteRequest {
        let mut request = RouteRequest::new(&self.from, &self.to, &self.vehicle)
            .with_algorithm(self.algorithm)
            .with_pricing(context.pricing);
        if let Some(max_routes) = self.max_routes {
            request = request.with_max_routes(max_routes);
        }
        request
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(context: &mut AppContext, args: &RouteCommandArgs) -> Result<()> {
    let plan = plan_for(context, &args.to_request(context))?;
    let summary = RouteSummary::from_plan(&plan);
    print!("{}", context.format.render_route(&summary, &context.palette)?);
    Ok(())
}

/// Plan a request, mapping library errors to friendly messages.
pub(crate) fn plan_for(context: &mut AppContext, request: &RouteRequest) -> Result<RoutePlan> {
    let AppContext {
        graph,
        vehicles,
        conditions,
        ..
    } = context;
    plan_routes(graph, vehicles, conditions.as_mut(), request)
        .map_err(|err| anyhow!(format_route_error(&err, vehicles)))
}
