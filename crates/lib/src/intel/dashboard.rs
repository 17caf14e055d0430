//! The combined dashboard briefing.
//!
//! The three panels are requested concurrently and fail independently: a
//! panel that errors is reported as absent rather than failing the briefing.

use crate::{
    executor::GroundedQueryExecutor,
    intel::{
        governance::{
            fetch_national_intelligence, fetch_state_intelligence, NationalIntel, StateIntel,
        },
        notifications::{dashboard_insights, Insight},
        IntelReport,
    },
};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardBriefing {
    pub insights: Vec<Insight>,
    pub national: Option<IntelReport<Option<NationalIntel>>>,
    pub state: Option<IntelReport<Option<StateIntel>>>,
}

pub async fn load_dashboard(
    executor: &GroundedQueryExecutor,
    user_name: &str,
    state_name: Option<&str>,
) -> DashboardBriefing {
    let state_panel = async {
        match state_name {
            Some(state) => Some(fetch_state_intelligence(executor, state).await),
            None => None,
        }
    };

    let (insights, national, state) = futures::join!(
        dashboard_insights(executor, user_name),
        fetch_national_intelligence(executor),
        state_panel
    );

    DashboardBriefing {
        insights: insights.unwrap_or_else(|e| {
            warn!("Dashboard insights unavailable: {e}");
            Vec::new()
        }),
        national: national
            .map_err(|e| warn!("National panel unavailable: {e}"))
            .ok(),
        state: state.and_then(|r| r.map_err(|e| warn!("State panel unavailable: {e}")).ok()),
    }
}
