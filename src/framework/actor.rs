//! # Generic Controller Actor
//!
//! The "server" half of every screen. A [`ControllerActor`] owns one
//! [`Controller`], receives commands from its clients, receives fetch
//! completions from the tasks it spawned, and publishes a fresh view-model
//! after every change.

use super::client::ControllerClient;
use super::controller::Controller;
use super::lifecycle::{FetchLifecycle, Ticket};
use super::message::ControllerRequest;
use crate::api::ApiError;
use std::future::Future;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Spawns fetches on behalf of a controller and routes their results back.
///
/// Handed to [`Controller::handle_command`]; the controller decides *what* to
/// fetch, the fetcher decides *where* it runs. Every fetch task belongs to the
/// fetcher's [`JoinSet`], so dropping the fetcher cancels whatever is still in
/// flight.
pub struct Fetcher<C> {
    sender: mpsc::UnboundedSender<C>,
    tasks: JoinSet<()>,
}

impl<C: Send + 'static> Fetcher<C> {
    pub fn new(sender: mpsc::UnboundedSender<C>) -> Self {
        Self {
            sender,
            tasks: JoinSet::new(),
        }
    }

    /// Marks `lifecycle` as loading and runs `fetch` in its own task.
    ///
    /// The result comes back to the actor as `wrap(ticket, result)`.
    pub fn run<T, F, W>(&mut self, lifecycle: &mut FetchLifecycle<T>, fetch: F, wrap: W) -> Ticket
    where
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
        W: FnOnce(Ticket, Result<T, ApiError>) -> C + Send + 'static,
        T: Send + 'static,
    {
        let ticket = lifecycle.begin();
        let sender = self.sender.clone();
        self.tasks.spawn(async move {
            let result = fetch.await;
            // The actor is gone once its clients are; nobody is left to tell.
            let _ = sender.send(wrap(ticket, result));
        });
        ticket
    }

    /// Fetch tasks that have not been reaped yet.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Cancels every fetch still running.
    pub fn abort_all(&mut self) {
        self.tasks.abort_all();
    }
}

/// The generic actor that drives one controller.
///
/// # Architecture Note
/// **Concurrency Model**:
/// Commands and completions are interleaved on a single task with
/// `tokio::select!`, so the controller's state is only ever touched by one
/// thing at a time. Fetches themselves run elsewhere; they can finish in any
/// order, which is why every completion carries a [`Ticket`].
///
/// # Usage Pattern
///
/// 1.  **Create**: `ControllerActor::new(controller, buffer)` returns the actor and its client.
/// 2.  **Run**: spawn `actor.run()`.
/// 3.  **Use**: send commands with [`ControllerClient::send`], observe views with
///     [`ControllerClient::wait_for`].
///
/// The loop ends when every client has been dropped.
pub struct ControllerActor<C: Controller> {
    controller: C,
    requests: mpsc::Receiver<ControllerRequest<C>>,
    completions: mpsc::UnboundedReceiver<C::Completion>,
    fetcher: Fetcher<C::Completion>,
    views: watch::Sender<C::View>,
}

impl<C: Controller> ControllerActor<C> {
    /// Creates a new `ControllerActor` and its associated `ControllerClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the command channel. If the channel
    ///   is full, calls to the client will wait until there is space.
    pub fn new(controller: C, buffer_size: usize) -> (Self, ControllerClient<C>) {
        let (sender, requests) = mpsc::channel(buffer_size);
        let (completion_sender, completions) = mpsc::unbounded_channel();
        let (views, view_receiver) = watch::channel(controller.view());
        let actor = Self {
            controller,
            requests,
            completions,
            fetcher: Fetcher::new(completion_sender),
            views,
        };
        (actor, ControllerClient::new(sender, view_receiver))
    }

    /// Runs the actor's event loop until the request channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "JobSearchController")
        let controller_type = std::any::type_name::<C>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(controller_type, "Controller started");

        loop {
            tokio::select! {
                request = self.requests.recv() => match request {
                    Some(request) => self.handle_request(controller_type, request),
                    None => break,
                },
                Some(completion) = self.completions.recv() => {
                    self.controller.handle_completion(completion);
                    self.publish();
                }
                Some(finished) = self.fetcher.tasks.join_next() => {
                    if let Err(e) = finished {
                        warn!(controller_type, error = %e, "Fetch task failed");
                    }
                }
            }
        }

        let in_flight = self.fetcher.in_flight();
        self.fetcher.abort_all();
        info!(controller_type, in_flight, "Shutdown");
    }

    fn handle_request(&mut self, controller_type: &str, request: ControllerRequest<C>) {
        match request {
            ControllerRequest::Command {
                command,
                respond_to,
            } => {
                debug!(controller_type, ?command, "Command");
                let navigation = self.controller.handle_command(command, &mut self.fetcher);
                self.publish();
                let _ = respond_to.send(Ok(navigation));
            }
            ControllerRequest::View { respond_to } => {
                let _ = respond_to.send(Ok(self.controller.view()));
            }
        }
    }

    fn publish(&self) {
        self.views.send_replace(self.controller.view());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Navigation;
    use std::time::Duration;
    use tokio::sync::oneshot;

    // --- A minimal controller: doubles a number remotely ---

    #[derive(Debug)]
    enum CounterCommand {
        Load { value: u32, delay_ms: u64 },
        Hang(oneshot::Sender<()>),
        Leave,
    }

    struct Loaded(Ticket, Result<u32, ApiError>);

    #[derive(Default)]
    struct Counter {
        doubled: FetchLifecycle<u32>,
    }

    impl Controller for Counter {
        type Command = CounterCommand;
        type Completion = Loaded;
        type View = FetchLifecycle<u32>;

        fn handle_command(&mut self, command: CounterCommand, fetcher: &mut Fetcher<Loaded>) -> Navigation {
            match command {
                CounterCommand::Hang(dropped) => {
                    fetcher.run(
                        &mut self.doubled,
                        async move {
                            // Held until the task is cancelled.
                            let _dropped = dropped;
                            std::future::pending::<Result<u32, ApiError>>().await
                        },
                        Loaded,
                    );
                    Navigation::Stay
                }
                CounterCommand::Load { value, delay_ms } => {
                    fetcher.run(
                        &mut self.doubled,
                        async move {
                            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                            Ok(value * 2)
                        },
                        Loaded,
                    );
                    Navigation::Stay
                }
                CounterCommand::Leave => Navigation::Back,
            }
        }

        fn handle_completion(&mut self, Loaded(ticket, result): Loaded) {
            self.doubled.settle(ticket, result);
        }

        fn view(&self) -> FetchLifecycle<u32> {
            self.doubled.clone()
        }
    }

    #[tokio::test]
    async fn test_command_publishes_loading_then_result() {
        let (actor, client) = ControllerActor::new(Counter::default(), 8);
        tokio::spawn(actor.run());

        let navigation = client
            .send(CounterCommand::Load { value: 21, delay_ms: 0 })
            .await
            .unwrap();
        assert_eq!(navigation, Navigation::Stay);

        let view = client.wait_for(|view| view.data().is_some()).await.unwrap();
        assert_eq!(view.data(), Some(&42));
        assert_eq!(client.send(CounterCommand::Leave).await.unwrap(), Navigation::Back);
    }

    #[tokio::test]
    async fn test_slow_older_fetch_is_discarded() {
        let (actor, client) = ControllerActor::new(Counter::default(), 8);
        tokio::spawn(actor.run());

        client
            .send(CounterCommand::Load { value: 1, delay_ms: 50 })
            .await
            .unwrap();
        client
            .send(CounterCommand::Load { value: 2, delay_ms: 0 })
            .await
            .unwrap();

        let view = client.wait_for(|view| view.discarded() == 1).await.unwrap();
        assert_eq!(view.data(), Some(&4));
    }

    #[tokio::test]
    async fn test_actor_stops_when_clients_drop() {
        let (actor, client) = ControllerActor::new(Counter::default(), 8);
        let handle = tokio::spawn(actor.run());

        drop(client);
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("actor should stop")
            .unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_cancels_in_flight_fetches() {
        let (actor, client) = ControllerActor::new(Counter::default(), 8);
        let handle = tokio::spawn(actor.run());
        let (dropped, cancelled) = oneshot::channel();

        client.send(CounterCommand::Hang(dropped)).await.unwrap();
        assert!(client.view().await.unwrap().is_loading());

        drop(client);
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("actor should stop")
            .unwrap();
        // The sender lived inside the fetch; it is dropped only by cancellation.
        tokio::time::timeout(Duration::from_secs(1), cancelled)
            .await
            .expect("fetch should be cancelled")
            .unwrap_err();
    }
}
