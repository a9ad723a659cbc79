use std::time::Duration;

use anyhow::{Context, Result};
use tokio::{task::JoinHandle, time::Sleep};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{Level, debug, instrument};

use cycler::{Timer, TypingCycler, run};

#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = Sleep;

    fn sleep(&self, delay: Duration) -> Sleep {
        tokio::time::sleep(delay)
    }
}

// CyclerTask
//
// a typing cycler running on its own tokio task.  the cycler never stops by itself, so the
// task only ends once the token is cancelled, either through teardown() or by dropping this
// handle (which drops the guard)
pub struct CyclerTask {
    guard: DropGuard,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl CyclerTask {
    // cancel the pending tick and wait for the task to wind down.  once this returns, render
    // will not be called again
    #[instrument(level=Level::DEBUG, skip(self))]
    pub async fn teardown(self) -> Result<()> {
        let CyclerTask {
            guard,
            token: _,
            handle,
        } = self;

        drop(guard);

        handle.await.context("typing cycler task failed")?;

        debug!("typing cycler torn down");
        Ok(())
    }

    // a token that can be handed to something else (a signal handler, say) to stop the cycler
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

pub fn spawn_cycler<F>(cycler: TypingCycler, render: F) -> CyclerTask
where
    F: FnMut(&TypingCycler) + Send + 'static,
{
    let token = CancellationToken::new();
    let cancelled = token.clone();

    let handle = tokio::task::spawn(async move {
        // biased, so that a tick which became due at the same moment as the cancellation
        // loses the race and nothing renders after teardown
        tokio::select! {
            biased;

            _ = cancelled.cancelled() => {}
            _ = run(cycler, TokioTimer, render) => {}
        }
    });

    CyclerTask {
        guard: token.clone().drop_guard(),
        token,
        handle,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tokio::time::{Instant, sleep, sleep_until};

    use super::*;
    use cycler::{PhraseList, Timing};

    fn cycler(phrases: &[&str], type_ms: u64, pause_ms: u64) -> TypingCycler {
        let phrases = PhraseList::new(phrases.iter().copied()).unwrap();
        TypingCycler::new(phrases, Timing::from_millis(type_ms, pause_ms)).unwrap()
    }

    type Frames = Arc<Mutex<Vec<String>>>;

    fn recorder() -> (Frames, impl FnMut(&TypingCycler) + Send + 'static) {
        let frames = Frames::default();
        let sink = frames.clone();

        let render = move |cycler: &TypingCycler| {
            sink.lock()
                .unwrap()
                .push(cycler.displayed_text().to_owned());
        };

        (frames, render)
    }

    fn frames(frames: &Frames) -> Vec<String> {
        frames.lock().unwrap().clone()
    }

    // every checkpoint sits between two ticks so the order of wakeups never matters
    #[tokio::test(start_paused = true)]
    async fn renders_on_the_tokio_clock() {
        let start = Instant::now();
        let (recorded, render) = recorder();
        let task = spawn_cycler(cycler(&["AB"], 10, 20), render);

        let at = |ms: u64| sleep_until(start + Duration::from_millis(ms));

        at(5).await;
        assert_eq!(frames(&recorded), vec![""]);

        at(15).await;
        assert_eq!(frames(&recorded).last().unwrap(), "A");

        at(25).await;
        assert_eq!(frames(&recorded).last().unwrap(), "AB");

        // still paused
        at(38).await;
        assert_eq!(frames(&recorded).len(), 3);

        // deleting starts at 40, then every 5ms
        at(42).await;
        assert_eq!(frames(&recorded).last().unwrap(), "AB");

        at(47).await;
        assert_eq!(frames(&recorded).last().unwrap(), "A");

        at(52).await;
        assert_eq!(frames(&recorded).last().unwrap(), "");

        at(62).await;
        assert_eq!(
            frames(&recorded),
            vec!["", "A", "AB", "AB", "A", "", "A"]
        );

        task.teardown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn moves_on_to_the_next_phrase() {
        let start = Instant::now();
        let (recorded, render) = recorder();
        let task = spawn_cycler(cycler(&["X", "Y"], 10, 20), render);

        // X typed at 10, deleting at 30, gone at 35, Y typed at 45
        sleep_until(start + Duration::from_millis(47)).await;
        assert_eq!(frames(&recorded), vec!["", "X", "X", "", "Y"]);

        task.teardown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_renders_after_teardown() {
        let (recorded, render) = recorder();
        let task = spawn_cycler(cycler(&["Designer"], 10, 20), render);

        sleep(Duration::from_millis(35)).await;
        let before = frames(&recorded);
        assert_eq!(before.last().unwrap(), "Des");

        task.teardown().await.unwrap();

        sleep(Duration::from_secs(5)).await;
        assert_eq!(frames(&recorded), before);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_tears_down() {
        let (recorded, render) = recorder();
        let task = spawn_cycler(cycler(&["Artist"], 10, 20), render);

        sleep(Duration::from_millis(15)).await;
        drop(task);

        // let the task observe the cancellation before taking the snapshot
        sleep(Duration::from_millis(1)).await;
        let before = frames(&recorded);

        sleep(Duration::from_secs(5)).await;
        assert_eq!(frames(&recorded), before);
    }

    #[tokio::test(start_paused = true)]
    async fn external_token_stops_the_cycler() {
        let (recorded, render) = recorder();
        let task = spawn_cycler(cycler(&["Photographer"], 10, 20), render);

        sleep(Duration::from_millis(25)).await;
        task.token().cancel();
        sleep(Duration::from_millis(1)).await;

        assert!(task.is_finished());
        assert_eq!(frames(&recorded).last().unwrap(), "Ph");
    }
}
