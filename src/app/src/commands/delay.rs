//! Delay command definitions.
//!
//! The core has no clock: it asks the Shell to wait and gets told when the
//! time is up.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operation the Shell needs to perform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DelayOperation {
    pub millis: u64,
}

// The Shell's answer once the delay is over
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DelayOutput {
    Elapsed,
}

impl Operation for DelayOperation {
    type Output = DelayOutput;
}

/// Command-based Delay API
pub struct Delay<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Delay<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DelayOperation>> + 'static,
    Event: Send + 'static,
{
    /// Wait for the given number of milliseconds
    pub fn millis(millis: u64) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(DelayOperation { millis })
    }
}

/// Request builder for Delay operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: DelayOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DelayOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: DelayOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = DelayOutput>> {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
