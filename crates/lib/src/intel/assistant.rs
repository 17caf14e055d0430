use crate::{
    errors::IntelError,
    executor::GroundedQueryExecutor,
    prompts::{
        assistant::{CIVIC_ASSISTANT_ERROR_REPLY, CIVIC_ASSISTANT_SYSTEM_PROMPT},
        render,
    },
};
use tracing::{error, info};

pub const DEFAULT_LANGUAGE: &str = "English";

/// Asks the civic assistant one question on behalf of `user_name`.
pub async fn ask(
    executor: &GroundedQueryExecutor,
    user_name: &str,
    language: &str,
    message: &str,
) -> Result<String, IntelError> {
    info!(language, "Civic assistant turn.");
    let system_instruction = render(
        CIVIC_ASSISTANT_SYSTEM_PROMPT,
        &[("user", user_name), ("language", language)],
    );
    executor.converse(&system_instruction, message.trim()).await
}

/// Like [`ask`], but answers with a fixed apology instead of an error.
pub async fn reply(
    executor: &GroundedQueryExecutor,
    user_name: &str,
    language: &str,
    message: &str,
) -> String {
    match ask(executor, user_name, language, message).await {
        Ok(text) => text,
        Err(e) => {
            error!("Civic assistant failed: {e}");
            CIVIC_ASSISTANT_ERROR_REPLY.to_string()
        }
    }
}
