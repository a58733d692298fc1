use dioxus::prelude::*;

use crate::core::timing;

/// Index into a carousel of `len` entries that advances every `interval_ms`.
///
/// The timer lives in a `use_future`, so it stops when the owning component
/// unmounts. Writing the returned signal (e.g. from carousel dots) jumps to
/// that entry; the timer keeps its own cadence.
pub fn use_rotating_index(len: usize, interval_ms: u64) -> Signal<usize> {
    let index = use_signal(|| 0usize);

    use_future(move || {
        let mut index = index;
        async move {
            loop {
                timing::sleep_ms(interval_ms).await;
                let next = timing::next_index(*index.peek(), len);
                index.set(next);
            }
        }
    });

    index
}
