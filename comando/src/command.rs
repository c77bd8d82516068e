use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    action::CommandAction,
    error::{DescriptorError, Result},
};

/// Fields required to declare a command.
pub struct CommandConfig<F> {
    pub name: String,
    pub description: String,
    pub action: F,
}

/// Serializable part of a [`CommandDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    pub name: String,
    pub description: String,
}

/// A named command and the action run when it is triggered.
///
/// `M` is the message that triggered the command, `R` what the action returns.
///
/// ```
/// use comando::{CommandConfig, CommandDescriptor};
///
/// let greet = CommandDescriptor::new(CommandConfig {
///     name: "greet".to_owned(),
///     description: "Greets the user".to_owned(),
///     action: |_message: &str, args: Vec<String>| {
///         format!("Hello, {}!", args.first().map(String::as_str).unwrap_or("User"))
///     },
/// });
///
/// assert_eq!(greet.call("someMessage", vec!["Alice".to_owned()]), "Hello, Alice!");
/// ```
pub struct CommandDescriptor<M = Value, R = ()> {
    id: Uuid,
    name: String,
    description: String,
    action: Arc<dyn CommandAction<M, R>>,
}

impl<M, R> CommandDescriptor<M, R> {
    pub fn new<F>(config: CommandConfig<F>) -> Self
    where
        F: Fn(M, Vec<String>) -> R + Send + Sync + 'static,
    {
        Self {
            id: Uuid::new_v4(),
            name: config.name,
            description: config.description,
            action: Arc::new(config.action),
        }
    }

    pub fn builder<N: Into<String>>(name: N) -> CommandBuilder<M, R> {
        CommandBuilder::new(name)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn action(&self) -> &dyn CommandAction<M, R> {
        self.action.as_ref()
    }

    /// Runs the action with `message` and `args` exactly as given.
    pub fn call(&self, message: M, args: Vec<String>) -> R {
        tracing::debug!(command = %self.name, args = args.len(), "running command action");

        self.action.run(message, args)
    }

    pub fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: self.name.to_owned(),
            description: self.description.to_owned(),
        }
    }
}

impl<M, R> Clone for CommandDescriptor<M, R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            action: Arc::clone(&self.action),
        }
    }
}

impl<M, R> fmt::Debug for CommandDescriptor<M, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

pub struct CommandBuilder<M = Value, R = ()> {
    name: String,
    description: Option<String>,
    action: Option<Arc<dyn CommandAction<M, R>>>,
}

impl<M, R> CommandBuilder<M, R> {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            description: None,
            action: None,
        }
    }

    pub fn from_metadata(metadata: CommandMetadata) -> Self {
        Self {
            name: metadata.name,
            description: Some(metadata.description),
            action: None,
        }
    }

    pub fn description<D: Into<String>>(mut self, description: D) -> Self {
        self.description = Some(description.into());

        self
    }

    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(M, Vec<String>) -> R + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));

        self
    }

    pub fn build(self) -> Result<CommandDescriptor<M, R>> {
        let description = self
            .description
            .ok_or(DescriptorError::MissingField("description"))?;

        let action = self.action.ok_or(DescriptorError::MissingField("action"))?;

        let descriptor = CommandDescriptor {
            id: Uuid::new_v4(),
            name: self.name,
            description,
            action,
        };

        tracing::trace!(command = %descriptor.name, id = %descriptor.id, "command built");

        Ok(descriptor)
    }
}
