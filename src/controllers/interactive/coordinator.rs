use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use log::{debug, error, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::controllers::interactive::data::status::{CoordinatorStatus, GenerationOutcome};
use crate::controllers::interactive::errors::coordinator_error::CoordinatorError;
use crate::controllers::interactive::events::compute_event::{ComputeEvent, ComputeEventKind};
use crate::controllers::interactive::ports::event_port::ComputeEventPort;
use crate::core::actions::cancellation::CancellationFlag;
use crate::core::actions::compute_stripes::compute_stripes::compute_stripes;
use crate::core::actions::generate_fractal::generate_fractal_rayon::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::config::compute_settings::ComputeSettings;
use crate::core::data::compute_request::ComputeRequest;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::escape_time_algorithm::EscapeTimeAlgorithm;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct Job {
    generation: u64,
    params: FractalParams,
    cancel: CancellationFlag,
}

#[derive(Default)]
struct Mailbox {
    pending: Option<Job>,
    shutdown: bool,
}

#[derive(Default)]
struct StatusCell {
    running: Option<u64>,
    last_outcome: Option<(u64, GenerationOutcome)>,
}

struct SharedState {
    generation: AtomicU64,
    mailbox: Mutex<Mailbox>,
    wake: Condvar,
    status: Mutex<StatusCell>,
    status_changed: Condvar,
    /// Flag of the newest generation. Held while an event is checked and
    /// sent, so cancelling under this lock stops delivery immediately.
    delivery: Mutex<Option<CancellationFlag>>,
    event_port: Arc<dyn ComputeEventPort>,
    settings: ComputeSettings,
}

impl SharedState {
    fn new(settings: ComputeSettings, event_port: Arc<dyn ComputeEventPort>) -> Self {
        Self {
            generation: AtomicU64::new(0),
            mailbox: Mutex::new(Mailbox::default()),
            wake: Condvar::new(),
            status: Mutex::new(StatusCell::default()),
            status_changed: Condvar::new(),
            delivery: Mutex::new(None),
            event_port,
            settings,
        }
    }

    /// Sends `kind` unless `cancel` is set; returns whether it was sent.
    fn deliver(&self, generation: u64, cancel: &CancellationFlag, kind: ComputeEventKind) -> bool {
        let _delivery = lock(&self.delivery);

        if cancel.is_set() {
            return false;
        }

        self.event_port.present(ComputeEvent { generation, kind });
        true
    }

    fn cancel_active(&self) {
        if let Some(flag) = lock(&self.delivery).as_ref() {
            flag.cancel();
        }
    }

    fn finish(&self, generation: u64, outcome: GenerationOutcome) {
        let mut status = lock(&self.status);

        if status.running == Some(generation) {
            status.running = None;
        }
        if status.last_outcome.is_none_or(|(last, _)| last <= generation) {
            status.last_outcome = Some((generation, outcome));
        }

        self.status_changed.notify_all();
    }
}

/// Runs one generation at a time on a persistent worker thread.
///
/// Submitting a new request cancels the running generation, waits a bounded
/// time for it to stop, then queues the new one. Events are tagged with their
/// generation and nothing is delivered for a generation once its
/// cancellation has been requested.
pub struct ComputeCoordinator {
    shared: Arc<SharedState>,
    submission: Mutex<()>,
    worker: Option<JoinHandle<()>>,
}

impl ComputeCoordinator {
    pub fn new(
        settings: ComputeSettings,
        event_port: Arc<dyn ComputeEventPort>,
    ) -> Result<Self, CoordinatorError> {
        let mut pool = ThreadPoolBuilder::new().thread_name(|i| format!("escape-compute-{}", i));
        if let Some(threads) = settings.worker_threads {
            pool = pool.num_threads(threads);
        }
        let pool = pool.build()?;

        let shared = Arc::new(SharedState::new(settings, event_port));
        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name("escape-coordinator".to_owned())
            .spawn(move || Self::worker_loop(&worker_shared, &pool))?;

        Ok(Self {
            shared,
            submission: Mutex::new(()),
            worker: Some(worker),
        })
    }

    /// Coordinator whose events arrive on the returned channel.
    pub fn with_channel(
        settings: ComputeSettings,
    ) -> Result<(Self, Receiver<ComputeEvent>), CoordinatorError> {
        let (sender, receiver) = crossbeam_channel::unbounded();
        let coordinator = Self::new(settings, Arc::new(sender))?;

        Ok((coordinator, receiver))
    }

    /// Validates `request` and starts it as a new generation, superseding
    /// whatever was running. Invalid requests produce no events.
    pub fn submit(&self, request: &ComputeRequest) -> Result<u64, CoordinatorError> {
        let params = request.validate()?;
        let _submission = lock(&self.submission);

        if lock(&self.shared.mailbox).shutdown {
            return Err(CoordinatorError::ShutDown);
        }

        self.supersede();

        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let cancel = CancellationFlag::new();

        *lock(&self.shared.delivery) = Some(cancel.clone());
        lock(&self.shared.status).running = Some(generation);

        lock(&self.shared.mailbox).pending = Some(Job {
            generation,
            params,
            cancel,
        });
        self.shared.wake.notify_one();

        debug!(
            "generation {} submitted: {:?} {}x{} zoom {}",
            generation,
            params.fractal,
            params.view.canvas_width(),
            params.view.canvas_height(),
            params.view.zoom()
        );

        Ok(generation)
    }

    /// Requests cancellation of the current generation without waiting.
    pub fn cancel(&self) {
        self.shared.cancel_active();
    }

    #[must_use]
    pub fn status(&self) -> CoordinatorStatus {
        match lock(&self.shared.status).running {
            Some(generation) => CoordinatorStatus::Running { generation },
            None => CoordinatorStatus::Idle,
        }
    }

    /// Newest generation that has ended, with how it ended.
    #[must_use]
    pub fn last_outcome(&self) -> Option<(u64, GenerationOutcome)> {
        lock(&self.shared.status).last_outcome
    }

    /// Id of the most recently accepted generation, 0 before the first.
    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    /// Blocks until no generation is running or `timeout` passes. Returns
    /// whether the coordinator is idle.
    pub fn wait_until_idle(&self, timeout: Duration) -> bool {
        let status = lock(&self.shared.status);
        let (status, _) = self
            .shared
            .status_changed
            .wait_timeout_while(status, timeout, |s| s.running.is_some())
            .unwrap_or_else(PoisonError::into_inner);

        status.running.is_none()
    }

    pub fn shutdown(&mut self) {
        lock(&self.shared.mailbox).shutdown = true;
        self.shared.cancel_active();
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                error!("coordinator worker thread panicked");
            }
        }
    }

    /// Cancels the newest generation and gives it a bounded time to stop.
    fn supersede(&self) {
        self.shared.cancel_active();

        // a job that never started can be retired on the spot
        let unstarted = lock(&self.shared.mailbox).pending.take();
        if let Some(job) = unstarted {
            debug!("generation {} dropped before it started", job.generation);
            self.shared.finish(job.generation, GenerationOutcome::Cancelled);
        }

        let timeout = self.shared.settings.supersede_timeout();
        let status = lock(&self.shared.status);
        let (status, wait) = self
            .shared
            .status_changed
            .wait_timeout_while(status, timeout, |s| s.running.is_some())
            .unwrap_or_else(PoisonError::into_inner);

        if wait.timed_out() {
            if let Some(generation) = status.running {
                warn!(
                    "generation {} still stopping after {:?}; starting the next one anyway",
                    generation, timeout
                );
            }
        }
    }

    fn worker_loop(shared: &SharedState, pool: &ThreadPool) {
        loop {
            let job = {
                let mut mailbox = lock(&shared.mailbox);
                loop {
                    if mailbox.shutdown {
                        return;
                    }

                    if let Some(job) = mailbox.pending.take() {
                        break job;
                    }

                    mailbox = shared
                        .wake
                        .wait(mailbox)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let fractal = job.params.fractal;
            let outcome = Self::run_job(shared, pool, &job, |view| {
                EscapeTimeAlgorithm::new(fractal, view)
            });

            debug!("generation {} ended: {:?}", job.generation, outcome);
            shared.finish(job.generation, outcome);
        }
    }

    /// Runs a job to completion inside the pool, turning failures and panics
    /// into a single `Error` event.
    fn run_job<Alg, B>(shared: &SharedState, pool: &ThreadPool, job: &Job, build: B) -> GenerationOutcome
    where
        Alg: FractalAlgorithm<Success = i32> + Sync,
        Alg::Failure: Send,
        B: Fn(ViewState) -> Alg + Send,
    {
        let start = Instant::now();
        let deliver = |kind: ComputeEventKind| shared.deliver(job.generation, &job.cancel, kind);

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pool.install(|| {
                compute_stripes(&job.params.view, build, &shared.settings, &job.cancel, |output| {
                    deliver(output.into());
                })
            })
        }));

        let message = match result {
            Ok(Ok(())) => {
                let elapsed = start.elapsed();
                return if deliver(ComputeEventKind::Finished { elapsed }) {
                    GenerationOutcome::Completed
                } else {
                    GenerationOutcome::Cancelled
                };
            }
            Ok(Err(GenerateFractalError::Cancelled(_))) => return GenerationOutcome::Cancelled,
            Ok(Err(GenerateFractalError::Algorithm(err))) => err.to_string(),
            Err(payload) => format!("computation panicked: {}", panic_message(payload.as_ref())),
        };

        error!("generation {} failed: {}", job.generation, message);

        if deliver(ComputeEventKind::Error { message }) {
            GenerationOutcome::Failed
        } else {
            GenerationOutcome::Cancelled
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

impl Drop for ComputeCoordinator {
    fn drop(&mut self) {
        self.shutdown();
    }
}
