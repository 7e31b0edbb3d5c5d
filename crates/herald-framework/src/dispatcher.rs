//! Command dispatcher.
//!
//! The dispatcher turns one raw inbound message into at most one command
//! invocation:
//!
//! 1. Messages not starting with the configured prefix are ignored silently.
//! 2. The remainder is split on whitespace; the first token (lowercased) is
//!    the command name, the rest are positional arguments in order.
//! 3. Unknown names are ignored silently — another bot sharing the prefix
//!    convention may own them, and spamming usage errors at every stranger's
//!    command would be noise.
//! 4. Fewer arguments than the command declares parameters yields one
//!    "insufficient parameters" notice and the handler is never invoked.
//!    Extra arguments pass through unfiltered.
//!
//! # Thread Safety
//!
//! `dispatch` takes `&self` and only reads the immutable registry, so any
//! number of inbound messages can be dispatched concurrently.

use std::sync::Arc;

use tracing::{debug, info, warn};

use herald_core::{CommandContext, MessageContext, Registry};

/// Routes inbound messages to registered commands.
///
/// Cloning is cheap (an `Arc` and a `String`), which makes it easy to hand
/// one dispatcher to every connection task.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<Registry>,
    prefix: String,
}

impl Dispatcher {
    /// Creates a dispatcher over the given registry and command prefix.
    ///
    /// The prefix is an arbitrary non-empty string; it does not have to be a
    /// single character.
    pub fn new(registry: Arc<Registry>, prefix: impl Into<String>) -> Self {
        Self {
            registry,
            prefix: prefix.into(),
        }
    }

    /// Returns the registry this dispatcher routes into.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Returns the configured command prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Parses `raw_text` and routes it to at most one command.
    ///
    /// Produces zero or one outbound notice itself; everything else the
    /// handler sends is its own business. Never returns an error: user
    /// mistakes become chat replies and send failures are logged.
    pub async fn dispatch(&self, raw_text: &str, ctx: &MessageContext) {
        let Some(rest) = raw_text.strip_prefix(self.prefix.as_str()) else {
            return;
        };

        let mut tokens = rest.split_whitespace();
        let Some(first) = tokens.next() else {
            return;
        };
        let name = first.to_lowercase();

        let Some(command) = self.registry.command(&name) else {
            return;
        };

        // Arguments keep their original case; only the name is folded.
        let args: Vec<String> = tokens.map(str::to_owned).collect();

        info!(
            author = %ctx.author_id(),
            command = %name,
            args = args.len(),
            "dispatching command"
        );

        let declared = command.spec().params().len();
        if args.len() < declared {
            debug!(
                command = %name,
                declared,
                supplied = args.len(),
                "insufficient parameters"
            );
            let notice = format!("{} Insufficient parameters!", ctx.author_mention());
            if let Err(err) = ctx.reply(&notice).await {
                warn!(command = %name, error = %err, "failed to send parameter notice");
            }
            return;
        }

        let command_ctx = CommandContext {
            message: ctx,
            registry: &self.registry,
            prefix: &self.prefix,
        };
        if let Err(err) = command.handle(&args, &command_ctx).await {
            warn!(command = %name, error = %err, "command handler failed to send");
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("prefix", &self.prefix)
            .field("commands", &self.registry.command_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use super::*;
    use herald_core::{ChatClient, Command, CommandSpec, SendResult};

    /// Chat client that records every outbound message.
    #[derive(Default)]
    struct RecordingClient {
        sent: Mutex<Vec<(String, String)>>,
    }

    impl RecordingClient {
        fn sent(&self) -> Vec<(String, String)> {
            self.sent.lock().clone()
        }
    }

    #[async_trait]
    impl ChatClient for RecordingClient {
        async fn send_text(&self, channel_id: &str, text: &str) -> SendResult<()> {
            self.sent
                .lock()
                .push((channel_id.to_string(), text.to_string()));
            Ok(())
        }
    }

    /// Command that records every argument list it is invoked with.
    struct Probe {
        spec: CommandSpec,
        calls: Mutex<Vec<Vec<String>>>,
        invocations: AtomicUsize,
    }

    impl Probe {
        fn new(name: &str, params: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                spec: CommandSpec::new(name, "probe", params),
                calls: Mutex::new(Vec::new()),
                invocations: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> Vec<Vec<String>> {
            self.calls.lock().clone()
        }

        fn invocation_count(&self) -> usize {
            self.invocations.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Command for Probe {
        fn spec(&self) -> &CommandSpec {
            &self.spec
        }

        async fn handle(&self, args: &[String], _ctx: &CommandContext<'_>) -> SendResult<()> {
            self.calls.lock().push(args.to_vec());
            self.invocations.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn setup(probes: &[Arc<Probe>]) -> (Dispatcher, Arc<RecordingClient>, MessageContext) {
        let commands = probes
            .iter()
            .map(|p| Arc::clone(p) as Arc<dyn Command>)
            .collect::<Vec<_>>();
        let registry = Arc::new(Registry::from_parts(commands, Vec::new()).unwrap());
        let dispatcher = Dispatcher::new(registry, "!");
        let client = Arc::new(RecordingClient::default());
        let ctx = MessageContext::new(
            "user-1",
            "@user",
            "general",
            Arc::clone(&client) as Arc<dyn ChatClient>,
        );
        (dispatcher, client, ctx)
    }

    #[tokio::test]
    async fn ignores_messages_without_prefix() {
        let probe = Probe::new("roll", &[]);
        let (dispatcher, client, ctx) = setup(&[Arc::clone(&probe)]);

        dispatcher.dispatch("roll please", &ctx).await;
        dispatcher.dispatch("hello there", &ctx).await;

        assert_eq!(probe.invocation_count(), 0);
        assert!(client.sent().is_empty());
    }

    #[tokio::test]
    async fn ignores_unknown_commands() {
        let probe = Probe::new("roll", &[]);
        let (dispatcher, client, ctx) = setup(&[Arc::clone(&probe)]);

        dispatcher.dispatch("!nosuchcommand 1 2", &ctx).await;

        assert_eq!(probe.invocation_count(), 0);
        assert!(client.sent().is_empty());
    }

    #[tokio::test]
    async fn ignores_bare_prefix() {
        let probe = Probe::new("roll", &[]);
        let (dispatcher, client, ctx) = setup(&[Arc::clone(&probe)]);

        dispatcher.dispatch("!", &ctx).await;
        dispatcher.dispatch("!   ", &ctx).await;

        assert_eq!(probe.invocation_count(), 0);
        assert!(client.sent().is_empty());
    }

    #[tokio::test]
    async fn insufficient_arguments_notice_skips_handler() {
        let probe = Probe::new("random", &["lower", "upper"]);
        let (dispatcher, client, ctx) = setup(&[Arc::clone(&probe)]);

        dispatcher.dispatch("!random 1", &ctx).await;

        assert_eq!(probe.invocation_count(), 0);
        let sent = client.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "general");
        assert_eq!(sent[0].1, "@user Insufficient parameters!");
    }

    #[tokio::test]
    async fn passes_full_argument_list_including_extras() {
        let probe = Probe::new("random", &["lower", "upper"]);
        let (dispatcher, _client, ctx) = setup(&[Arc::clone(&probe)]);

        dispatcher.dispatch("!random 1 6 ignored", &ctx).await;

        assert_eq!(probe.calls(), vec![vec!["1", "6", "ignored"]]);
    }

    #[tokio::test]
    async fn command_name_is_case_insensitive_arguments_are_not() {
        let probe = Probe::new("echo", &["text"]);
        let (dispatcher, _client, ctx) = setup(&[Arc::clone(&probe)]);

        dispatcher.dispatch("!EcHo MixedCase", &ctx).await;

        assert_eq!(probe.calls(), vec![vec!["MixedCase"]]);
    }

    #[tokio::test]
    async fn multi_character_prefix_is_honoured() {
        let probe = Probe::new("roll", &[]);
        let commands = vec![Arc::clone(&probe) as Arc<dyn Command>];
        let registry = Arc::new(Registry::from_parts(commands, Vec::new()).unwrap());
        let dispatcher = Dispatcher::new(registry, "?!");
        let client = Arc::new(RecordingClient::default());
        let ctx = MessageContext::new(
            "user-1",
            "@user",
            "general",
            Arc::clone(&client) as Arc<dyn ChatClient>,
        );

        dispatcher.dispatch("!roll", &ctx).await;
        assert_eq!(probe.invocation_count(), 0);

        dispatcher.dispatch("?!roll", &ctx).await;
        assert_eq!(probe.invocation_count(), 1);
    }

    #[tokio::test]
    async fn exact_arity_invokes_handler() {
        let probe = Probe::new("random", &["lower", "upper"]);
        let (dispatcher, client, ctx) = setup(&[Arc::clone(&probe)]);

        dispatcher.dispatch("!random 1 6", &ctx).await;

        assert_eq!(probe.calls(), vec![vec!["1", "6"]]);
        assert!(client.sent().is_empty());
    }

    #[tokio::test]
    async fn concurrent_dispatches_share_one_dispatcher() {
        let probe = Probe::new("roll", &[]);
        let (dispatcher, _client, ctx) = setup(&[Arc::clone(&probe)]);

        let mut handles = Vec::new();
        for _ in 0..16 {
            let dispatcher = dispatcher.clone();
            let ctx = ctx.clone();
            handles.push(tokio::spawn(async move {
                dispatcher.dispatch("!roll", &ctx).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(probe.invocation_count(), 16);
    }
}
