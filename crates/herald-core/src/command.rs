//! The command contract.
//!
//! A command is a named, chat-invoked operation with a fixed positional
//! parameter arity. Each concrete command type is instantiated exactly once
//! at registry build time and shared across all concurrent invocations.

use async_trait::async_trait;

use crate::error::SendResult;
use crate::message::CommandContext;

/// Immutable descriptor identifying a command.
///
/// The name is supplied explicitly at construction (not derived from the
/// type) and normalized to lowercase; parameter order defines positional
/// binding order for the handler's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    name: String,
    params: Vec<String>,
    description: String,
}

impl CommandSpec {
    /// Creates a descriptor with the given name, description, and parameter
    /// names (in binding order, possibly empty).
    ///
    /// The name is lowercased; command lookup is case-insensitive.
    pub fn new(name: impl Into<String>, description: impl Into<String>, params: &[&str]) -> Self {
        Self {
            name: name.into().to_lowercase(),
            params: params.iter().map(|p| (*p).to_string()).collect(),
            description: description.into(),
        }
    }

    /// Returns the lowercase command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared parameter names in binding order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Returns the human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Renders the public-facing descriptor line for help listings.
    ///
    /// Format: `**<prefix><name>** *<p1>* *<p2>*: <description>.`
    pub fn describe(&self, prefix: &str) -> String {
        let mut text = format!("**{prefix}{}**", self.name);
        for param in &self.params {
            text.push_str(&format!(" *<{param}>*"));
        }
        text.push_str(&format!(": {}.", self.description));
        text
    }
}

/// A chat-invoked command handler.
///
/// Implementations must be `Default`-constructible so they can be wired into
/// the registry via [`register_command!`](crate::register_command), and
/// construction must not perform I/O.
///
/// # Error Handling
///
/// Domain errors (malformed arguments, nonsensical ranges) are the user's
/// fault: report them as a chat reply and return `Ok(())`. Only outbound
/// send failures propagate out of `handle`.
#[async_trait]
pub trait Command: Send + Sync {
    /// Returns this command's descriptor.
    fn spec(&self) -> &CommandSpec;

    /// Handles one invocation.
    ///
    /// `args` is guaranteed to hold at least as many entries as
    /// [`CommandSpec::params`] declares; anything beyond that is passed
    /// through unfiltered and is the handler's to interpret.
    async fn handle(&self, args: &[String], ctx: &CommandContext<'_>) -> SendResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_lowercased() {
        let spec = CommandSpec::new("Random", "Rolls dice", &["lower", "upper"]);
        assert_eq!(spec.name(), "random");
    }

    #[test]
    fn describe_with_params() {
        let spec = CommandSpec::new(
            "random",
            "Generates a random number between two given numbers",
            &["lower", "upper"],
        );
        assert_eq!(
            spec.describe("!"),
            "**!random** *<lower>* *<upper>*: Generates a random number between two given numbers."
        );
    }

    #[test]
    fn describe_without_params() {
        let spec = CommandSpec::new("commands", "Displays this help message", &[]);
        assert_eq!(
            spec.describe("!"),
            "**!commands**: Displays this help message."
        );
    }

    #[test]
    fn describe_uses_configured_prefix() {
        let spec = CommandSpec::new("ping", "Pong", &[]);
        assert_eq!(spec.describe("?!"), "**?!ping**: Pong.");
    }

    #[test]
    fn params_preserve_order() {
        let spec = CommandSpec::new("range", "A range", &["lower", "upper", "step"]);
        assert_eq!(spec.params(), ["lower", "upper", "step"]);
    }
}
