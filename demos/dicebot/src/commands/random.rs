//! The `random` command.

use async_trait::async_trait;
use rand::Rng;

use herald::{Command, CommandContext, CommandSpec, SendResult};

/// Rolls a random number between two given bounds.
///
/// Both bounds are user input, so every malformed value is answered with a
/// chat reply rather than an error: bad input is the user's problem, not
/// the process's.
pub struct Random {
    spec: CommandSpec,
}

impl Default for Random {
    fn default() -> Self {
        Self {
            spec: CommandSpec::new(
                "random",
                "Generates a random number between two given numbers",
                &["lower", "upper"],
            ),
        }
    }
}

#[async_trait]
impl Command for Random {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    async fn handle(&self, args: &[String], ctx: &CommandContext<'_>) -> SendResult<()> {
        let bounds = (args[0].parse::<i64>(), args[1].parse::<i64>());
        let (Ok(lower), Ok(upper)) = bounds else {
            return ctx.message.reply("Please, provide valid numbers").await;
        };

        if lower > upper {
            return ctx
                .message
                .reply("The lower bound can't be higher than the upper bound")
                .await;
        }

        let rolled = rand::rng().random_range(lower..=upper);
        ctx.message
            .reply(&format!("🎲 You rolled {rolled}!"))
            .await
    }
}

herald::register_command!(Random);
