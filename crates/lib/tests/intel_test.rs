//! # Intelligence Feature Tests
//!
//! Each feature is a thin caller of the executor; these tests check the
//! prompts they build, how they decode results and how they degrade.

use anyhow::Result;
use civic_intel::{
    intel::{
        assistant, dashboard,
        election::{fetch_election_intelligence, ElectionStatus},
        events::fetch_live_events,
        leaders::{discover_batch_leaders, fetch_leader_legal_standing, search_leader_info},
        maps::{find_nearby_civic_services, search_place, PLACE_LOOKUP_UNAVAILABLE},
        notifications::{fetch_civic_notifications, NotificationContext, Urgency},
        promises::fetch_and_verify_promises,
    },
    providers::ai::{GenerationResponse, GroundingTool, LatLng},
    Engine,
};
use civic_intel_test_utils::{map_chunk, organic, setup_tracing, web_chunk, MockBackends};
use serde_json::json;

fn national_json() -> serde_json::Value {
    json!({
        "schemes": [{ "title": "PM-KISAN", "status": "Active", "impact": "11 crore farmers" }],
        "parliament": [{ "event": "Winter session", "description": "Begins", "date": "2026-11-25" }],
        "infrastructure": [{ "project": "Dedicated freight corridor", "progress": 82, "details": "Eastern arm done" }],
        "decisions": [{ "ministry": "Railways", "decision": "New lines approved" }],
        "impact": { "summary": "Steady week", "highlights": ["Rail", "Agriculture"] }
    })
}

#[tokio::test]
async fn test_legal_standing_is_stamped_with_sources() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    backends.primary.push_response(GenerationResponse {
        text: json!({
            "totalCases": 3,
            "seriousCriminalCases": 1,
            "jailHistory": "None",
            "corruptionAllegations": ["Land allotment inquiry"],
            "justification": "Per affidavit"
        })
        .to_string(),
        grounding_chunks: vec![web_chunk(Some("ADR"), Some("https://adrindia.org/x"))],
    });

    let standing = fetch_leader_legal_standing(&backends.executor, "A. Leader", "Varanasi")
        .await?
        .expect("standing should decode");

    assert_eq!(standing.total_cases, 3.0);
    assert_eq!(standing.corruption_allegations.len(), 1);
    assert!(!standing.last_updated.is_empty());
    assert_eq!(standing.verification_sources.len(), 1);
    assert_eq!(standing.verification_sources[0].uri, "https://adrindia.org/x");

    let request = &backends.primary.requests()[0];
    assert!(request.contents.contains("A. Leader (Varanasi)"));
    assert_eq!(request.tools, vec![GroundingTool::GoogleSearch]);
    Ok(())
}

#[tokio::test]
async fn test_legal_standing_without_data_is_none() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    backends.primary.push_text("I could not find records.");

    let standing = fetch_leader_legal_standing(&backends.executor, "Nobody", "Nowhere").await?;
    assert!(standing.is_none());
    Ok(())
}

#[tokio::test]
async fn test_notifications_get_ids_and_start_unread() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    backends.primary.push_text(
        &json!([
            { "title": "A", "message": "m", "category": "Utilities", "urgency": "high", "source": "DJB", "timestamp": "t", "read": true },
            { "title": "B", "message": "m", "category": "Taxes", "urgency": "low", "source": "MCD", "timestamp": "t" }
        ])
        .to_string(),
    );

    let context = NotificationContext {
        state: Some("Delhi".to_string()),
        followed_leaders: vec!["Leader One".to_string(), "Leader Two".to_string()],
    };
    let notifications = fetch_civic_notifications(&backends.executor, &context).await?;

    assert_eq!(notifications.len(), 2);
    assert!(notifications.iter().all(|n| !n.read && !n.id.is_empty()));
    assert_ne!(notifications[0].id, notifications[1].id);
    assert_eq!(notifications[0].urgency, Urgency::High);

    let prompt = &backends.primary.requests()[0].contents;
    assert!(prompt.starts_with("Generate 4-5 important civic notifications for Delhi. Date: "));
    assert!(prompt.ends_with("followed leaders where relevant: Leader One, Leader Two."));
    Ok(())
}

#[tokio::test]
async fn test_notifications_skip_elements_that_do_not_fit() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    backends.primary.push_text(
        &json!([
            { "title": "A", "message": "m", "category": "Utilities", "urgency": "high", "source": "DJB", "timestamp": "t" },
            { "title": "B", "message": "m", "category": "Taxes", "urgency": "low", "source": "MCD", "timestamp": "t" },
            { "title": "C", "message": "m", "category": "Safety", "urgency": "Critical!", "source": "DP", "timestamp": "t" }
        ])
        .to_string(),
    );

    let notifications =
        fetch_civic_notifications(&backends.executor, &NotificationContext::default()).await?;

    let titles: Vec<&str> = notifications.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);
    Ok(())
}

#[tokio::test]
async fn test_legal_standing_prompt_keeps_braces_in_names() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    backends.primary.push_text("no data");

    fetch_leader_legal_standing(&backends.executor, "Leader {constituency}", "Varanasi").await?;

    assert!(backends.primary.requests()[0]
        .contents
        .contains("Leader {constituency} (Varanasi)"));
    Ok(())
}

#[tokio::test]
async fn test_notifications_default_to_india() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    backends.primary.push_text("[]");

    let notifications =
        fetch_civic_notifications(&backends.executor, &NotificationContext::default()).await?;

    assert!(notifications.is_empty());
    let prompt = &backends.primary.requests()[0].contents;
    assert!(prompt.contains("notifications for India."));
    assert!(!prompt.contains("followed leaders"));
    Ok(())
}

#[tokio::test]
async fn test_live_events_from_fenced_fallback_answer() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    backends.primary.push_error("503 overloaded");
    backends.search.push_results(vec![organic(
        "Rally in Patna",
        "Thousands attend",
        "https://news.example/patna",
    )]);
    backends.fallback.push_text(
        "```json\n[{\"id\": \"ev-1\", \"title\": \"Rally\", \"description\": \"d\", \"category\": \"Rally\", \"status\": \"Live\", \"date\": \"today\", \"time\": \"10:00\", \"views\": 1200, \"highlights\": []},\n {\"id\": \"\", \"title\": \"Session\", \"description\": \"d\", \"category\": \"Parliament\", \"status\": \"Upcoming\", \"date\": \"today\", \"time\": \"14:00\", \"highlights\": [\"Bill\"]}]\n```",
    );

    let report = fetch_live_events(&backends.executor).await?;

    assert_eq!(report.engine, Engine::Fallback);
    assert_eq!(report.data.len(), 2);
    assert_eq!(report.data[0].id, "ev-1");
    assert!(!report.data[1].id.is_empty());
    assert_eq!(report.data[1].views, 0.0);
    assert_eq!(report.sources[0].title, "Rally in Patna");
    Ok(())
}

#[tokio::test]
async fn test_election_intelligence_decodes_records() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    backends.primary.push_text(
        &json!({
            "records": [{
                "id": "dl-2025", "title": "Delhi Assembly", "status": "Past", "date": "2025-02-05",
                "type": "State", "location": "Delhi", "description": "70 seats",
                "results": [{ "party": "A", "seats": 48, "totalSeats": 70, "color": "#f97316" }]
            }],
            "trends": [{ "party": "A", "currentSentiment": 44.5, "predictedSeats": 40, "pastSeats": 48 }]
        })
        .to_string(),
    );

    let report = fetch_election_intelligence(&backends.executor).await?;
    let intel = report.data.expect("election data should decode");

    assert_eq!(intel.records[0].status, ElectionStatus::Past);
    assert_eq!(intel.records[0].kind, "State");
    assert_eq!(intel.records[0].results[0].total_seats, 70.0);
    assert_eq!(intel.trends[0].current_sentiment, 44.5);
    Ok(())
}

#[tokio::test]
async fn test_batch_discovery_mentions_exclusions_and_tolerates_garbage() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    backends.primary.push_text("not json at all");

    let excluded = vec!["First Leader".to_string(), "Second Leader".to_string()];
    let leaders = discover_batch_leaders(&backends.executor, &excluded).await?;

    assert!(leaders.is_empty());
    assert!(backends.primary.requests()[0]
        .contents
        .contains("[First Leader, Second Leader]"));
    Ok(())
}

#[tokio::test]
async fn test_blank_promise_query_uses_default() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    backends.primary.push_text("[]");

    let report = fetch_and_verify_promises(&backends.executor, Some("  ")).await?;

    assert!(report.data.is_empty());
    assert_eq!(
        backends.primary.requests()[0].contents,
        "Search authentic political promises: latest political manifestos India"
    );
    Ok(())
}

#[tokio::test]
async fn test_leader_search_returns_grounded_text() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    backends.primary.push_response(GenerationResponse {
        text: "She represents the constituency since 2019.".to_string(),
        grounding_chunks: vec![web_chunk(Some("Lok Sabha"), Some("https://sansad.in/ls"))],
    });

    let answer = search_leader_info(&backends.executor, "Who is the MP for X?").await?;

    assert_eq!(answer.text, "She represents the constituency since 2019.");
    assert_eq!(answer.sources[0].title, "Lok Sabha");
    Ok(())
}

#[tokio::test]
async fn test_place_search_uses_maps_tool_and_default_titles() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    backends.primary.push_response(GenerationResponse {
        text: "The ward office is on Main Road.".to_string(),
        grounding_chunks: vec![
            map_chunk(None, Some("https://maps.google.com/?cid=1")),
            map_chunk(Some("Ward 12 Office"), Some("https://maps.google.com/?cid=2")),
            map_chunk(Some("No link"), None),
        ],
    });

    let location = LatLng {
        latitude: 19.07,
        longitude: 72.87,
    };
    let lookup = search_place(&backends.executor, "Ward 12 office", Some(location)).await;

    assert_eq!(lookup.text, "The ward office is on Main Road.");
    let titles: Vec<_> = lookup.links.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Location", "Ward 12 Office"]);

    let request = &backends.primary.requests()[0];
    assert_eq!(request.tools, vec![GroundingTool::GoogleMaps]);
    assert_eq!(request.location, Some(location));
    assert_eq!(request.model.as_deref(), Some("mock-maps-model"));
    Ok(())
}

#[tokio::test]
async fn test_place_search_failure_degrades_without_fallback() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    backends.primary.push_error("maps unavailable");

    let lookup = search_place(&backends.executor, "Anywhere", None).await;

    assert_eq!(lookup.text, PLACE_LOOKUP_UNAVAILABLE);
    assert!(lookup.links.is_empty());
    assert!(backends.search.queries().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_nearby_services_named_from_map_sources() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    backends.primary.push_response(GenerationResponse {
        text: String::new(),
        grounding_chunks: vec![
            map_chunk(Some("Police Station"), Some("https://maps.google.com/?cid=3")),
            map_chunk(None, Some("https://maps.google.com/?cid=4")),
        ],
    });

    let location = LatLng {
        latitude: 12.97,
        longitude: 77.59,
    };
    let services = find_nearby_civic_services(&backends.executor, location).await;

    assert_eq!(services.len(), 2);
    assert_eq!(services[0].name, "Police Station");
    assert_eq!(services[1].name, "Service");
    assert_eq!(services[1].link, "https://maps.google.com/?cid=4");

    backends.primary.push_error("down");
    assert!(find_nearby_civic_services(&backends.executor, location)
        .await
        .is_empty());
    Ok(())
}

#[tokio::test]
async fn test_assistant_sends_system_instruction_and_apologizes_on_error() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    backends.primary.push_text("File a complaint with your ward office.");

    let answer = assistant::reply(
        &backends.executor,
        "Asha",
        "Hindi",
        "  How do I report a pothole?  ",
    )
    .await;
    assert_eq!(answer, "File a complaint with your ward office.");

    let request = &backends.primary.requests()[0];
    assert_eq!(request.contents, "How do I report a pothole?");
    let system = request.system_instruction.as_deref().unwrap_or_default();
    assert!(system.contains("users like Asha"));
    assert!(system.contains("Respond in Hindi."));
    assert!(request.tools.is_empty());

    backends.primary.push_error("quota");
    let apology = assistant::reply(&backends.executor, "Asha", "Hindi", "Hello").await;
    assert!(apology.starts_with("I encountered an error."));
    // The assistant never takes the fallback path.
    assert!(backends.fallback.calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_dashboard_panels_fail_independently() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    // Panels are polled in order: insights, national, then state.
    backends
        .primary
        .push_text(&json!([{ "topic": "Water", "summary": "Check supply days" }]).to_string())
        .push_text(&national_json().to_string())
        .push_error("state backend down");
    backends.search.push_error("search down");

    let briefing = dashboard::load_dashboard(&backends.executor, "Asha", Some("Kerala")).await;

    assert_eq!(briefing.insights.len(), 1);
    let national = briefing.national.expect("national panel should load");
    assert_eq!(
        national.data.expect("national data").schemes[0].title,
        "PM-KISAN"
    );
    assert!(briefing.state.is_none());
    assert_eq!(backends.primary.requests().len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_dashboard_without_state_skips_state_panel() -> Result<()> {
    setup_tracing();
    let backends = MockBackends::new()?;
    backends
        .primary
        .push_text("[]")
        .push_text(&national_json().to_string());

    let briefing = dashboard::load_dashboard(&backends.executor, "Asha", None).await;

    assert!(briefing.insights.is_empty());
    assert!(briefing.national.is_some());
    assert!(briefing.state.is_none());
    assert_eq!(backends.primary.requests().len(), 2);
    Ok(())
}
