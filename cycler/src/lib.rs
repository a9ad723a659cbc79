// typing text cycler
//
// this crate is shared between the webapp (compiled to wasm) and the native tools, so it must
// not pull in anything that assumes a particular runtime.  the state machine lives in typing.rs
// and only ever moves when someone calls tick(); timer.rs describes how that someone waits
// between ticks
pub mod error;
pub mod timer;
pub mod typing;

pub use error::CyclerError;
pub use timer::{Timer, run};
pub use typing::{CyclerState, Mode, PhraseList, Timing, TypingConfig, TypingCycler};
