//! Assistant Use Case
//!
//! Answers chat questions from a store snapshot. Resolution itself is pure;
//! this layer only adds event reporting.

use crate::domain::entities::EntityStore;
use crate::domain::ports::{StoreEvent, StoreEventSink};
use crate::domain::services::{QueryAnswer, QueryResolver, QuerySnapshot, ResolverOptions};

pub struct AssistantUseCase<S>
where
    S: StoreEventSink,
{
    resolver: QueryResolver,
    events: S,
}

impl<S> AssistantUseCase<S>
where
    S: StoreEventSink,
{
    pub fn new(options: ResolverOptions, events: S) -> Self {
        Self {
            resolver: QueryResolver::new(options),
            events,
        }
    }

    pub fn resolver(&self) -> &QueryResolver {
        &self.resolver
    }

    /// Answer `text` against the current contents of `store`
    pub fn ask(&self, store: &EntityStore, text: &str) -> QueryAnswer {
        let answer = self.resolver.resolve(text, &QuerySnapshot::from_store(store));
        self.events.on_event(StoreEvent::QueryResolved {
            intent: answer.intent,
            fallback: answer.is_fallback(),
        });
        answer
    }
}
