//! Ejecución de los comandos de la CLI sobre un `AppState`

use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::{Commands, DeliveryCommand, DriverCommand, RouteCommand};
use crate::dto::{
    CreateDeliveryRequest, CreateDriverRequest, CreateRouteRequest, UpdateDriverRequest,
    UpdateRouteRequest, UpdateStatusRequest,
};
use crate::models::DeliveryStatus;
use crate::services::filter_by_status;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppResult};

fn output<T: Serialize>(value: &T) -> AppResult<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Ejecutar un comando y devolver su salida JSON
pub fn run(state: &AppState, command: Commands) -> AppResult<Value> {
    match command {
        Commands::Drivers(cmd) => run_drivers(state, cmd),
        Commands::Routes(cmd) => run_routes(state, cmd),
        Commands::Deliveries(cmd) => run_deliveries(state, cmd),
        Commands::Dashboard => output(&state.dashboard().metrics()?),
        Commands::Seed => output(&state.seed()?),
    }
}

fn run_drivers(state: &AppState, command: DriverCommand) -> AppResult<Value> {
    match command {
        DriverCommand::List => output(&state.drivers.get_all()?),
        DriverCommand::Show { id } => {
            let driver = state
                .drivers
                .get_by_id(&id)?
                .ok_or_else(|| not_found_error("Driver", &id))?;
            output(&driver)
        }
        DriverCommand::Add(args) => {
            let input = CreateDriverRequest {
                name: args.name,
                cpf: args.cpf,
                phone: args.phone,
                status: args.status,
            }
            .into_input()?;
            output(&state.drivers.create(input)?)
        }
        DriverCommand::Update { id, fields } => {
            let update = UpdateDriverRequest {
                name: fields.name,
                cpf: fields.cpf,
                phone: fields.phone,
                status: fields.status,
            }
            .into_update()?;
            let driver = state
                .drivers
                .update(&id, update)?
                .ok_or_else(|| not_found_error("Driver", &id))?;
            output(&driver)
        }
        DriverCommand::Remove { id } => Ok(json!({ "id": id, "removed": state.drivers.delete(&id)? })),
    }
}

fn run_routes(state: &AppState, command: RouteCommand) -> AppResult<Value> {
    match command {
        RouteCommand::List { driver_id } => match driver_id {
            Some(driver_id) => output(&state.routes.find_by_driver(&driver_id)?),
            None => output(&state.routes.get_all()?),
        },
        RouteCommand::Show { id } => {
            let route = state
                .routes
                .get_by_id(&id)?
                .ok_or_else(|| not_found_error("Route", &id))?;
            let driver_name = state.lookup().driver_name(&route.driver_id)?;
            Ok(json!({ "route": route, "driverName": driver_name }))
        }
        RouteCommand::Add(args) => {
            let input = CreateRouteRequest {
                origin: args.origin,
                destination: args.destination,
                driver_id: args.driver_id,
                client_name: args.client_name,
                date: args.date,
                value: args.value,
                observations: args.observations,
                status: args.status,
            }
            .into_input()?;
            output(&state.routes.create(input)?)
        }
        RouteCommand::Update { id, fields } => {
            let update = UpdateRouteRequest {
                origin: fields.origin,
                destination: fields.destination,
                driver_id: fields.driver_id,
                client_name: fields.client_name,
                date: fields.date,
                value: fields.value,
                observations: fields.observations,
                status: fields.status,
            }
            .into_update()?;
            let route = state
                .routes
                .update(&id, update)?
                .ok_or_else(|| not_found_error("Route", &id))?;
            output(&route)
        }
        RouteCommand::Remove { id } => Ok(json!({ "id": id, "removed": state.routes.delete(&id)? })),
    }
}

fn run_deliveries(state: &AppState, command: DeliveryCommand) -> AppResult<Value> {
    match command {
        DeliveryCommand::List { status } => {
            let status = status
                .as_deref()
                .map(str::parse::<DeliveryStatus>)
                .transpose()?;
            let all = state.deliveries.get_all()?;
            output(&filter_by_status(&all, status))
        }
        DeliveryCommand::Show { id } => {
            let delivery = state
                .deliveries
                .get_by_id(&id)?
                .ok_or_else(|| not_found_error("Delivery", &id))?;
            let lookup = state.lookup();
            Ok(json!({
                "statusLabel": delivery.status.label(),
                "driverName": lookup.driver_name(&delivery.driver_id)?,
                "routeLabel": lookup.route_label(&delivery.route_id)?,
                "delivery": delivery,
            }))
        }
        DeliveryCommand::Add(args) => {
            let input = CreateDeliveryRequest {
                route_id: args.route_id,
                driver_id: args.driver_id,
                status: args.status,
                client_name: args.client_name,
                address: args.address,
            }
            .into_input()?;
            output(&state.deliveries.create(input)?)
        }
        DeliveryCommand::Status { id, status, notes } => {
            let (status, notes) = UpdateStatusRequest { status, notes }.into_parts()?;
            let delivery = state
                .deliveries
                .update_status(&id, status, notes)?
                .ok_or_else(|| not_found_error("Delivery", &id))?;
            output(&delivery)
        }
        DeliveryCommand::History { id, last } => {
            let delivery = state
                .deliveries
                .get_by_id(&id)?
                .ok_or_else(|| not_found_error("Delivery", &id))?;
            output(&delivery.recent_history(last))
        }
        DeliveryCommand::Remove { id } => {
            Ok(json!({ "id": id, "removed": state.deliveries.delete(&id)? }))
        }
    }
}
