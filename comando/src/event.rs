use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    action::EventAction,
    error::{DescriptorError, Result},
};

/// Fields required to declare an event.
pub struct EventConfig<F> {
    pub name: String,
    pub event: String,
    pub description: String,
    pub action: F,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    pub name: String,
    pub event: String,
    pub description: String,
}

/// An action bound to an external event type such as `"ready"`.
///
/// `event` is the key a dispatcher matches incoming events against; `name` is
/// only a label and several descriptors may share it.
///
/// ```
/// use comando::{EventConfig, EventDescriptor, Value};
///
/// let ready = EventDescriptor::new(EventConfig {
///     name: "Log Ready".to_owned(),
///     event: "ready".to_owned(),
///     description: "Log when the client is online".to_owned(),
///     action: |_args: Vec<Value>| "online",
/// });
///
/// assert_eq!(ready.call(vec![]), "online");
/// assert_eq!(ready.call(vec![1.into(), 2.into(), 3.into()]), "online");
/// ```
pub struct EventDescriptor<A = Value, R = ()> {
    id: Uuid,
    name: String,
    event: String,
    description: String,
    action: Arc<dyn EventAction<A, R>>,
}

impl<A, R> EventDescriptor<A, R> {
    pub fn new<F>(config: EventConfig<F>) -> Self
    where
        F: Fn(Vec<A>) -> R + Send + Sync + 'static,
    {
        Self {
            id: Uuid::new_v4(),
            name: config.name,
            event: config.event,
            description: config.description,
            action: Arc::new(config.action),
        }
    }

    pub fn builder<N: Into<String>>(name: N) -> EventBuilder<A, R> {
        EventBuilder::new(name)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn action(&self) -> &dyn EventAction<A, R> {
        self.action.as_ref()
    }

    pub fn call(&self, args: Vec<A>) -> R {
        tracing::debug!(
            event = %self.event,
            name = %self.name,
            args = args.len(),
            "running event action"
        );

        self.action.run(args)
    }

    pub fn metadata(&self) -> EventMetadata {
        EventMetadata {
            name: self.name.to_owned(),
            event: self.event.to_owned(),
            description: self.description.to_owned(),
        }
    }
}

impl<A, R> Clone for EventDescriptor<A, R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.to_owned(),
            event: self.event.to_owned(),
            description: self.description.to_owned(),
            action: Arc::clone(&self.action),
        }
    }
}

impl<A, R> fmt::Debug for EventDescriptor<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("event", &self.event)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

pub struct EventBuilder<A = Value, R = ()> {
    name: String,
    event: Option<String>,
    description: Option<String>,
    action: Option<Arc<dyn EventAction<A, R>>>,
}

impl<A, R> EventBuilder<A, R> {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            event: None,
            description: None,
            action: None,
        }
    }

    pub fn from_metadata(metadata: EventMetadata) -> Self {
        Self {
            name: metadata.name,
            event: Some(metadata.event),
            description: Some(metadata.description),
            action: None,
        }
    }

    pub fn event<E: Into<String>>(mut self, event: E) -> Self {
        self.event = Some(event.into());

        self
    }

    pub fn description<D: Into<String>>(mut self, description: D) -> Self {
        self.description = Some(description.into());

        self
    }

    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(Vec<A>) -> R + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));

        self
    }

    pub fn build(self) -> Result<EventDescriptor<A, R>> {
        let event = self.event.ok_or(DescriptorError::MissingField("event"))?;

        let description = self
            .description
            .ok_or(DescriptorError::MissingField("description"))?;

        let action = self.action.ok_or(DescriptorError::MissingField("action"))?;

        let descriptor = EventDescriptor {
            id: Uuid::new_v4(),
            name: self.name,
            event,
            description,
            action,
        };

        tracing::trace!(event = %descriptor.event, id = %descriptor.id, "event built");

        Ok(descriptor)
    }
}
