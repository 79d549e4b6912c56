use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::mpsc;
use std::sync::mpsc::RecvTimeoutError;
use std::thread;
use std::thread::JoinHandle;

use thiserror::Error;
use tracing::info;

use crate::engine::LifeEngine;
use crate::surface::Surface;

#[derive(Debug, Error)]
pub enum TickerError {
    #[error("Generation loop panicked")]
    Panicked,
}

/// Handle to a running generation loop.
///
/// The loop lives on its own thread, which owns the engine and the surface. It advances
/// one generation, waits `animation_rate`, and repeats until [`Ticker::cancel`] is called
/// or the handle is dropped. Cancelling only takes effect between generations.
pub struct Ticker {
    stop: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<LifeEngine>>,
    generation: Arc<AtomicU64>,
}

impl Ticker {
    /// Start advancing `engine` onto `surface` right away
    pub fn spawn<S>(mut engine: LifeEngine, mut surface: S) -> Self
    where
        S: Surface + Send + 'static,
    {
        let (stop, stopped) = mpsc::channel::<()>();
        let generation = Arc::new(AtomicU64::new(engine.generation()));
        let published = Arc::clone(&generation);
        let rate = engine.config().animation_rate;

        info!(
            size = engine.grid().size(),
            rate_ms = rate.as_millis() as u64,
            "Starting generation loop"
        );

        let handle = thread::spawn(move || {
            loop {
                engine.advance_generation(&mut surface);
                published.store(engine.generation(), Ordering::Release);

                match stopped.recv_timeout(rate) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }

            info!(generation = engine.generation(), "Generation loop stopped");
            engine
        });

        Self {
            stop: Some(stop),
            handle: Some(handle),
            generation,
        }
    }

    /// Latest generation the loop has finished
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Whether the loop thread is still going
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the loop after the generation in progress and hand the engine back
    pub fn cancel(mut self) -> Result<LifeEngine, TickerError> {
        self.shutdown().ok_or(TickerError::Panicked)
    }

    fn shutdown(&mut self) -> Option<LifeEngine> {
        // A closed channel also stops the loop, so a failed send is fine
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }

        self.handle.take().and_then(|handle| handle.join().ok())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
