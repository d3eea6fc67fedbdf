use log::info;
use crate::models::turn::Turn;
use crate::models::user_session::UserSession;
use crate::services::llm_service::{self, ChatModel, LlmError};

/// Runs one chat turn: appends the user message with an empty assistant
/// slot, sends the formatted transcript to the model and fills the slot in.
///
/// On failure the error propagates and the last turn keeps its empty
/// assistant text; no other history mutation has happened.
pub async fn process_chat(
    user_input: &str,
    system_prompt: &str,
    user_session: &mut UserSession,
    model: &dyn ChatModel,
) -> Result<String, LlmError> {
    user_session.history.push(Turn::pending(user_input));

    // The just-appended turn is the "new message"; only the turns before it
    // are prior context.
    let prior = user_session.history.len() - 1;
    let response = llm_service::generate_response(
        user_input,
        &user_session.history[..prior],
        system_prompt,
        model,
    )
    .await?;

    if let Some(last) = user_session.history.last_mut() {
        last.assistant = response.clone();
    }
    info!("Completed turn {} of conversation", user_session.history.len());
    Ok(response)
}
