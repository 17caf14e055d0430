//! Subcommand handlers. Each returns the JSON value to print.

use crate::{Commands, QueryArgs};
use anyhow::{Context, Result};
use civic_intel::{
    intel::{
        assistant, election, events, governance, leaders, maps,
        notifications::{self, NotificationContext},
        promises,
    },
    providers::ai::LatLng,
    GroundedQueryExecutor, QueryRequest, Schema,
};
use serde_json::{json, to_value, Value};
use std::fs;
use tracing::info;

pub async fn run(executor: &GroundedQueryExecutor, command: Commands) -> Result<Value> {
    info!(?command, "Running command.");
    let value = match command {
        Commands::Query(args) => to_value(executor.execute(&query_request(args)?).await?)?,
        Commands::Elections => to_value(election::fetch_election_intelligence(executor).await?)?,
        Commands::National => to_value(governance::fetch_national_intelligence(executor).await?)?,
        Commands::State { name } => {
            to_value(governance::fetch_state_intelligence(executor, &name).await?)?
        }
        Commands::Legal { name, constituency } => to_value(
            leaders::fetch_leader_legal_standing(executor, &name, &constituency).await?,
        )?,
        Commands::Notifications { state, leaders } => {
            let context = NotificationContext {
                state,
                followed_leaders: leaders,
            };
            to_value(notifications::fetch_civic_notifications(executor, &context).await?)?
        }
        Commands::Promises { query } => {
            to_value(promises::fetch_and_verify_promises(executor, query.as_deref()).await?)?
        }
        Commands::Events => to_value(events::fetch_live_events(executor).await?)?,
        Commands::Place { query, lat, lng } => {
            let location = lat.zip(lng).map(|(latitude, longitude)| LatLng {
                latitude,
                longitude,
            });
            to_value(maps::search_place(executor, &query, location).await)?
        }
        Commands::Ask {
            message,
            user,
            language,
        } => json!({ "reply": assistant::ask(executor, &user, &language, &message).await? }),
    };
    Ok(value)
}

fn query_request(args: QueryArgs) -> Result<QueryRequest> {
    let mut request = QueryRequest::new(args.prompt);
    if let Some(path) = args.schema_file {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read schema file {}", path.display()))?;
        let schema: Schema = serde_json::from_str(&content)
            .with_context(|| format!("{} is not a valid schema", path.display()))?;
        request = request.with_schema(schema);
    }
    if args.grounded {
        request = request.grounded();
    }
    Ok(request)
}
