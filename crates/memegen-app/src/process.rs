//! Message processing
//!
//! Runs a message (and any follow-up messages it produces) through the TEA
//! update function, dispatching resulting actions to background tasks.

use crate::actions::{handle_action, ActionContext};
use crate::api::MemeApi;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<A>(state: &mut AppState, message: Message, ctx: &ActionContext<A>)
where
    A: MemeApi + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, ctx);
        }

        msg = result.message;
    }
}
