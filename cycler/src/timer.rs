use std::{future::Future, time::Duration};

use tracing::{Level, debug, instrument};

use crate::typing::TypingCycler;

// Timer
//
// the one thing the driver needs from its host: a way to wait.  the browser implements this
// with gloo timers and the native tools with tokio.
//
// dropping a Sleep must cancel whatever underlying timer it holds, since that is how teardown
// reaches the pending tick
pub trait Timer {
    type Sleep: Future<Output = ()>;

    fn sleep(&self, delay: Duration) -> Self::Sleep;
}

// run a cycler until the returned future is dropped
//
// render is called once with the initial state, then after every tick.  only one Sleep is
// ever alive, and each is created after the previous one completed, so two ticks can never
// overlap.  there is no way out of the loop; the host tears the cycler down by dropping us
#[instrument(level = Level::DEBUG, skip_all, fields(phrases = cycler.phrases().len()))]
pub async fn run<T, F>(mut cycler: TypingCycler, timer: T, mut render: F)
where
    T: Timer,
    F: FnMut(&TypingCycler),
{
    debug!("starting typing cycler");

    render(&cycler);

    loop {
        timer.sleep(cycler.delay()).await;
        cycler.tick();
        render(&cycler);
    }
}
