//! # Handler chain
//!
//! Runs a sequence of handlers for each message. Each handler has optional before/handle/after:
//! all before run in order (any false stops the chain); then handle runs until one returns Stop or
//! Reply; then all after run in reverse order with the final response.

use std::sync::Arc;
use thumb_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler (runs in order; first Stop/Reply ends the handle phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs all before → handle until Stop/Reply → all after in reverse.
    /// Returns the first Stop or Reply, or Continue when no handler claimed the message.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(user_id = message.user.id, kind = ?message.kind, "step: handler_chain started");

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            if !h.before(message).await? {
                info!(handler = %name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            let response = h.handle(message).await?;
            debug!(handler = %name, response = ?response, "Handler processed");

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    info!(handler = %name, "step: handler chain stopped by handler");
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => {}
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        let response_type = match &final_response {
            HandlerResponse::Continue => "Continue",
            HandlerResponse::Stop => "Stop",
            HandlerResponse::Ignore => "Ignore",
            HandlerResponse::Reply(_) => "Reply",
        };
        info!(response_type = %response_type, "step: handler_chain finished");

        Ok(final_response)
    }
}

// Integration tests live in tests/handler_chain_test.rs
