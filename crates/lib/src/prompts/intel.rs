//! # Intelligence Feature Prompts
//!
//! The user prompts sent by each intelligence feature. Templates use `{name}`
//! placeholders that the feature functions fill in.

pub const ELECTION_INTELLIGENCE_PROMPT: &str = "Find real-time Indian election updates (Upcoming, Ongoing, Past) and current sentiment/seat trends for major parties. Provide details for Delhi, UP, and national level where relevant.";

/// Placeholder: `{excluded}`.
pub const DISCOVER_BATCH_LEADERS_PROMPT: &str = "Find 6 prominent Indian political leaders (MPs or MLAs) who are NOT in this list: [{excluded}]. Respond with ONLY raw JSON array.";

/// Placeholders: `{name}`, `{constituency}`.
pub const LEADER_LEGAL_STANDING_PROMPT: &str = "Analyze legal standing, criminal history, and corruption allegations for Indian leader: {name} ({constituency}). Cite sources.";

/// Placeholders: `{region}`, `{date}`.
pub const CIVIC_NOTIFICATIONS_PROMPT: &str =
    "Generate 4-5 important civic notifications for {region}. Date: {date}";

/// Appended to the notification prompt when the user follows leaders.
/// Placeholder: `{leaders}`.
pub const FOLLOWED_LEADERS_CLAUSE: &str =
    " Include updates about these followed leaders where relevant: {leaders}.";

/// Placeholder: `{user}`.
pub const DASHBOARD_INSIGHTS_PROMPT: &str =
    "Generate 3 short professional Civic Service Insights for {user}.";

pub const NATIONAL_INTELLIGENCE_PROMPT: &str =
    "Real-time insights for Central Government of India TODAY.";

/// Placeholder: `{state}`.
pub const STATE_INTELLIGENCE_PROMPT: &str = "State governance updates for {state} TODAY.";

/// Placeholder: `{query}`.
pub const PLACE_SEARCH_PROMPT: &str = "Find official Google Maps details for: {query}.";

pub const NEARBY_CIVIC_SERVICES_PROMPT: &str = "Find 5 nearest civic services near my location.";

/// Placeholder: `{name}`.
pub const LEADER_PROFILE_PROMPT: &str = "Find official political profile for {name} in India.";

/// Placeholders: `{first}`, `{second}`.
pub const COMPARE_LEADERS_PROMPT: &str = "Side-by-side comparison of {first} and {second}.";

pub const DEFAULT_PROMISE_QUERY: &str = "latest political manifestos India";

/// Placeholder: `{query}`.
pub const PROMISE_VERIFICATION_PROMPT: &str = "Search authentic political promises: {query}";

pub const LIVE_EVENTS_PROMPT: &str =
    "10 significant political events happening TODAY in India. Respond with ONLY raw JSON.";
