//! The `commands` help listing.

use async_trait::async_trait;

use herald_core::{Command, CommandContext, CommandSpec, SendResult};

/// Lists every registered command, sorted alphabetically by name.
///
/// Built purely on the registry's read-only iteration contract: one
/// descriptor line per command, addressed to the invoking author.
pub struct Commands {
    spec: CommandSpec,
}

impl Default for Commands {
    fn default() -> Self {
        Self {
            spec: CommandSpec::new("commands", "Displays this help message", &[]),
        }
    }
}

#[async_trait]
impl Command for Commands {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    async fn handle(&self, _args: &[String], ctx: &CommandContext<'_>) -> SendResult<()> {
        let mut entries: Vec<(String, String)> = ctx
            .registry
            .commands()
            .map(|command| {
                let spec = command.spec();
                (spec.name().to_string(), spec.describe(ctx.prefix))
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut text = ctx.message.author_mention().to_string();
        text.push('\n');
        for (_, line) in &entries {
            text.push('\n');
            text.push_str(line);
        }

        ctx.message.reply(&text).await
    }
}

herald_core::register_command!(Commands);
