// extensions/tween.rs
//
// Tween: drives one typed value from accumulated time.
// Owned by whatever it animates; advanced once per frame by the host clock.
//
// Usage:
//   let mut fade = Tween::from_to(0.0, 1.0, 0.5, Easing::QuadOut)
//       .with_on_complete(|_, late| log::info!("faded in, {late}s late"));
//   fade.tick(clock.tick(frame_dt));
//   camera.fade_alpha = fade.value();

use std::fmt;

use super::easing::Easing;
use super::value::{FromTo, Tweenable, ValueSource, Wait};

/// Completion subscriber. Receives the tween that just finished and the
/// number of host seconds that elapsed past the completion instant.
pub type TweenCallback<T, S> = Box<dyn FnMut(&mut Tween<T, S>, f32)>;

/// Raw progress this close to 1 counts as complete. Absorbs the rounding
/// left by summing many frame deltas.
const COMPLETION_EPSILON: f32 = 1e-5;

/// Common interface of anything a [`Sequence`](super::sequence::Sequence)
/// can chain: progress bookkeeping plus a typed readout.
pub trait Animate<T> {
    fn id(&self) -> &str;
    fn duration(&self) -> f32;
    fn speed(&self) -> f32;
    fn set_speed(&mut self, speed: f32);
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
    fn progress_raw(&self) -> f32;
    fn progress(&self) -> f32;
    fn is_finished(&self) -> bool;
    /// Late time reported by the most recent completion.
    fn late_time(&self) -> f32;
    fn value_raw(&self) -> T;
    fn value(&self) -> T;

    /// Advance by `dt` host seconds. Returns the late time if this call
    /// completed the animation.
    fn advance(&mut self, dt: f32, force_update: bool) -> Option<f32>;
    fn reset_to_start(&mut self);
    fn reset_with_late_time(&mut self, late_time: f32);
}

/// A single animated value.
///
/// `S` decides what the value is: [`FromTo`] interpolates between two
/// endpoints, [`Wait`] reads out elapsed seconds.
pub struct Tween<T, S = FromTo<T>> {
    /// Diagnostic label.
    pub id: String,
    /// Easing applied to the raw progress.
    pub easing: Easing,
    /// Whether [`Tween::tick`] advances this tween.
    pub active: bool,
    duration: f32,
    speed: f32,
    progress_raw: f32,
    progress: f32,
    finished: bool,
    late_time: f32,
    value_raw: T,
    value: T,
    source: S,
    on_complete: Vec<TweenCallback<T, S>>,
    dispatching: bool,
    listeners_cleared: bool,
    pending: Option<f32>,
}

impl<T: Copy, S: ValueSource<T>> Tween<T, S> {
    /// Create a tween at progress 0. `duration` must be >= 0.
    pub fn new(source: S, duration: f32, easing: Easing) -> Self {
        let duration = non_negative("duration", duration);
        let value = source.sample(0.0, duration);
        Self {
            id: String::from("Tween"),
            easing,
            active: true,
            duration,
            speed: 1.0,
            progress_raw: 0.0,
            progress: 0.0,
            finished: false,
            late_time: 0.0,
            value_raw: value,
            value,
            source,
            on_complete: Vec::new(),
            dispatching: false,
            listeners_cleared: false,
            pending: None,
        }
    }

    // -- Builder methods --

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.set_speed(speed);
        self
    }

    pub fn with_on_complete(mut self, f: impl FnMut(&mut Self, f32) + 'static) -> Self {
        self.on_complete(f);
        self
    }

    /// Start frozen; [`Tween::tick`] is a no-op until activated.
    pub fn paused(mut self) -> Self {
        self.active = false;
        self
    }

    // -- Accessors --

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Change the duration, keeping the current progress fraction.
    pub fn set_duration(&mut self, duration: f32) {
        self.duration = non_negative("duration", duration);
        self.update_value();
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Multiplier applied to every incoming time delta. Must be >= 0.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = non_negative("speed", speed);
    }

    pub fn progress_raw(&self) -> f32 {
        self.progress_raw
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Late time of the most recent completion, in host seconds.
    pub fn late_time(&self) -> f32 {
        self.late_time
    }

    pub fn value_raw(&self) -> T {
        self.value_raw
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the value source. Call [`Tween::update_value`]
    /// afterwards to refresh the outputs.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    // -- Subscribers --

    /// Register a completion subscriber. Subscribers run in registration
    /// order; one registered while a completion is being dispatched first
    /// runs on the next completion.
    pub fn on_complete(&mut self, f: impl FnMut(&mut Self, f32) + 'static) {
        self.on_complete.push(Box::new(f));
    }

    /// Drop every subscriber, including the ones currently being dispatched.
    pub fn clear_on_complete(&mut self) {
        self.on_complete.clear();
        if self.dispatching {
            self.listeners_cleared = true;
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.on_complete.len()
    }

    // -- Progress --

    /// Per-frame drive: advance by `dt` if active.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.advance(dt, false)
    }

    /// Advance by `dt` host seconds (scaled by `speed`).
    ///
    /// When this call completes the tween, subscribers are notified and the
    /// late time is returned. Late time is in host seconds:
    /// `(new_progress - 1) * duration / speed`, which equals
    /// `(new_progress - 1) * duration` at speed 1.
    /// Unless `force_update` is set, nothing is recomputed when the clamped
    /// progress does not change.
    pub fn advance(&mut self, dt: f32, force_update: bool) -> Option<f32> {
        let time = dt * self.speed;

        if self.duration == 0.0 {
            if self.finished {
                return None;
            }
            self.progress_raw = 1.0;
            self.progress = 1.0;
            self.finished = true;
            self.update_value();
            self.notify_complete(dt);
            return Some(dt);
        }

        let mut new_progress = self.progress_raw + time / self.duration;
        if new_progress < 1.0 && 1.0 - new_progress <= COMPLETION_EPSILON {
            new_progress = 1.0;
        }
        let clamped = new_progress.clamp(0.0, 1.0);

        if clamped == self.progress_raw && !force_update {
            return None;
        }

        let was_finished = self.finished;
        self.set_progress(clamped);

        if self.finished && !was_finished {
            let late_time = self.host_seconds((new_progress - 1.0) * self.duration);
            self.notify_complete(late_time);
            Some(late_time)
        } else {
            None
        }
    }

    /// Rewind to the start (or straight to the end for a zero duration).
    ///
    /// Only a not-finished → finished transition notifies, with late time 0.
    pub fn reset_to_start(&mut self) {
        let was_finished = self.finished;
        self.progress_raw = if self.duration == 0.0 { 1.0 } else { 0.0 };
        self.progress = self.progress_raw;
        self.finished = self.progress_raw == 1.0;
        self.update_value();

        if self.finished && !was_finished {
            self.notify_complete(0.0);
        }
    }

    /// Rewind and immediately play `late_time` host seconds.
    ///
    /// Used to chain into this tween without losing time, e.g. when a
    /// sequence hands over or when a tween repeats itself.
    pub fn reset_with_late_time(&mut self, late_time: f32) {
        let was_finished = self.finished;
        let raw = if self.duration == 0.0 {
            1.0
        } else {
            self.speed * late_time / self.duration
        };
        let raw = if raw < 1.0 && 1.0 - raw <= COMPLETION_EPSILON { 1.0 } else { raw };
        self.set_progress(raw.clamp(0.0, 1.0));

        if self.finished && !was_finished {
            self.notify_complete(0.0);
        }
    }

    /// Recompute `value_raw` and `value` from the current progress pair.
    pub fn update_value(&mut self) {
        self.value_raw = self.source.sample(self.progress_raw, self.duration);
        self.value = self.source.sample(self.progress, self.duration);
    }

    fn set_progress(&mut self, progress_raw: f32) {
        self.progress_raw = progress_raw;
        self.progress = self.easing.apply(progress_raw);
        self.finished = progress_raw == 1.0;
        self.update_value();
    }

    fn host_seconds(&self, tween_seconds: f32) -> f32 {
        if self.speed > 0.0 {
            tween_seconds / self.speed
        } else {
            tween_seconds
        }
    }

    fn notify_complete(&mut self, late_time: f32) {
        log::trace!("tween '{}' complete, late by {:.4}s", self.id, late_time);
        self.late_time = late_time;

        // Subscribers may reset or advance this tween; a completion raised
        // from inside one is queued and delivered once the snapshot is done.
        if self.dispatching {
            self.pending = Some(late_time);
            return;
        }

        let mut late_time = late_time;
        loop {
            self.dispatch(late_time);
            match self.pending.take() {
                Some(next) => late_time = next,
                None => break,
            }
        }
    }

    fn dispatch(&mut self, late_time: f32) {
        let mut listeners = std::mem::take(&mut self.on_complete);
        self.dispatching = true;
        self.listeners_cleared = false;
        for listener in listeners.iter_mut() {
            listener(self, late_time);
        }
        self.dispatching = false;

        if !self.listeners_cleared {
            let added = std::mem::replace(&mut self.on_complete, listeners);
            self.on_complete.extend(added);
        }
    }
}

impl<T: Tweenable> Tween<T, FromTo<T>> {
    /// Create a tween interpolating `from` → `to`.
    pub fn from_to(from: T, to: T, duration: f32, easing: Easing) -> Self {
        Self::new(FromTo::new(from, to), duration, easing)
    }

    /// Current `(from, to)` endpoints.
    pub fn endpoints(&self) -> (T, T) {
        (self.source.from, self.source.to)
    }

    /// Move the start point without touching progress.
    pub fn set_from(&mut self, from: T) {
        self.source.from = from;
        self.update_value();
    }

    /// Move the end point without touching progress.
    pub fn set_to(&mut self, to: T) {
        self.source.to = to;
        self.update_value();
    }

    /// Replace both endpoints and rewind. Never notifies.
    pub fn reset_with_endpoints(&mut self, from: T, to: T) {
        self.source = FromTo::new(from, to);
        self.rewind_silently();
    }

    /// Send the tween to a new destination mid-flight.
    ///
    /// Restarts from the current value over the remaining duration, so the
    /// motion stays continuous. Never notifies.
    pub fn reroute(&mut self, to: T) {
        self.source = FromTo::new(self.value, to);
        self.duration -= self.progress_raw * self.duration;
        log::debug!(
            "tween '{}' rerouted to {:?} over {:.4}s",
            self.id,
            to,
            self.duration
        );
        self.rewind_silently();
    }

    fn rewind_silently(&mut self) {
        self.late_time = 0.0;
        self.progress_raw = if self.duration == 0.0 { 1.0 } else { 0.0 };
        self.progress = self.progress_raw;
        self.finished = self.progress_raw == 1.0;
        self.update_value();
    }
}

impl Tween<f32, Wait> {
    /// Create a timer whose value is the elapsed time in seconds.
    pub fn wait(duration: f32) -> Self {
        Self::new(Wait, duration, Easing::Linear).with_id("Wait")
    }
}

impl<T: Copy, S: ValueSource<T>> Animate<T> for Tween<T, S> {
    fn id(&self) -> &str {
        &self.id
    }

    fn duration(&self) -> f32 {
        self.duration
    }

    fn speed(&self) -> f32 {
        self.speed
    }

    fn set_speed(&mut self, speed: f32) {
        Tween::set_speed(self, speed);
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn progress_raw(&self) -> f32 {
        self.progress_raw
    }

    fn progress(&self) -> f32 {
        self.progress
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn late_time(&self) -> f32 {
        self.late_time
    }

    fn value_raw(&self) -> T {
        self.value_raw
    }

    fn value(&self) -> T {
        self.value
    }

    fn advance(&mut self, dt: f32, force_update: bool) -> Option<f32> {
        Tween::advance(self, dt, force_update)
    }

    fn reset_to_start(&mut self) {
        Tween::reset_to_start(self);
    }

    fn reset_with_late_time(&mut self, late_time: f32) {
        Tween::reset_with_late_time(self, late_time);
    }
}

impl<T: fmt::Debug, S: fmt::Debug> fmt::Debug for Tween<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("id", &self.id)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("speed", &self.speed)
            .field("active", &self.active)
            .field("progress_raw", &self.progress_raw)
            .field("progress", &self.progress)
            .field("finished", &self.finished)
            .field("late_time", &self.late_time)
            .field("value", &self.value)
            .field("source", &self.source)
            .field("subscribers", &self.on_complete.len())
            .finish()
    }
}

/// Clamp a precondition-violating input (negative, NaN or infinite) to zero.
pub(crate) fn non_negative(what: &str, value: f32) -> f32 {
    debug_assert!(
        value.is_finite() && value >= 0.0,
        "{} must be finite and >= 0, got {}",
        what,
        value
    );
    if !value.is_finite() || value < 0.0 {
        log::warn!("invalid {} {} clamped to 0", what, value);
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const EPS: f32 = 1e-5;

    fn counter() -> (Rc<Cell<u32>>, Rc<RefCell<Vec<f32>>>) {
        (Rc::new(Cell::new(0)), Rc::new(RefCell::new(Vec::new())))
    }

    fn counted(duration: f32) -> (Tween<f32>, Rc<Cell<u32>>, Rc<RefCell<Vec<f32>>>) {
        let (count, lates) = counter();
        let (c, l) = (count.clone(), lates.clone());
        let tween = Tween::from_to(0.0, 10.0, duration, Easing::Linear).with_on_complete(
            move |_, late| {
                c.set(c.get() + 1);
                l.borrow_mut().push(late);
            },
        );
        (tween, count, lates)
    }

    #[test]
    fn new_tween_reads_start_value() {
        let tween = Tween::from_to(3.0, 7.0, 1.0, Easing::QuadIn);
        assert_eq!(tween.progress_raw(), 0.0);
        assert_eq!(tween.value(), 3.0);
        assert_eq!(tween.value_raw(), 3.0);
        assert!(!tween.is_finished());
    }

    #[test]
    fn split_deltas_complete_exactly_once() {
        let (mut tween, count, _) = counted(1.0);
        for _ in 0..4 {
            tween.advance(0.25, false);
        }
        assert!(tween.is_finished());
        assert_eq!(tween.progress_raw(), 1.0);
        assert_eq!(count.get(), 1);

        tween.advance(0.25, false);
        tween.advance(1.0, true);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn frame_sized_deltas_land_exactly_on_completion() {
        let runs: [(f32, u32, f32); 3] = [(1.0, 60, 1.0 / 60.0), (0.3, 3, 0.1), (2.0, 120, 1.0 / 60.0)];
        for (duration, frames, dt) in runs {
            let (mut tween, count, lates) = counted(duration);
            for _ in 0..frames {
                tween.advance(dt, false);
            }
            assert!(
                tween.is_finished(),
                "{}s in {} frames stopped at {}",
                duration,
                frames,
                tween.progress_raw()
            );
            assert_eq!(tween.progress_raw(), 1.0);
            assert_eq!(tween.value(), 10.0);
            assert_eq!(count.get(), 1);
            assert!(lates.borrow()[0].abs() < EPS);

            tween.advance(dt, false);
            assert_eq!(count.get(), 1);
        }
    }

    #[test]
    fn overflow_is_reported_as_late_time() {
        let (mut tween, count, lates) = counted(2.0);
        let late = tween.advance(3.0, false);
        assert!(tween.is_finished());
        assert_eq!(count.get(), 1);
        assert!((late.unwrap() - 1.0).abs() < EPS);
        assert!((lates.borrow()[0] - 1.0).abs() < EPS);
        assert_eq!(tween.value(), 10.0);
    }

    #[test]
    fn zero_duration_completes_on_first_advance() {
        let (mut tween, count, lates) = counted(0.0);
        assert!(!tween.is_finished());

        let late = tween.advance(0.3, false);
        assert!(tween.is_finished());
        assert_eq!(late, Some(0.3));
        assert_eq!(lates.borrow().as_slice(), &[0.3]);
        assert_eq!(tween.value(), 10.0);

        assert_eq!(tween.advance(0.3, false), None);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn zero_delta_changes_nothing() {
        let (mut tween, count, _) = counted(1.0);
        tween.advance(0.4, false);
        let before = (tween.progress_raw(), tween.progress(), tween.value());
        tween.advance(0.0, false);
        assert_eq!(before, (tween.progress_raw(), tween.progress(), tween.value()));

        tween.advance(0.6, false);
        assert_eq!(count.get(), 1);
        tween.advance(0.0, false);
        tween.advance(0.0, true);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn easing_shapes_value_but_not_raw_value() {
        let mut tween = Tween::from_to(0.0, 100.0, 1.0, Easing::QuadIn);
        tween.advance(0.5, false);
        assert!((tween.value_raw() - 50.0).abs() < EPS);
        assert!((tween.value() - 25.0).abs() < EPS);
        assert!((tween.progress() - 0.25).abs() < EPS);
    }

    #[test]
    fn speed_scales_time() {
        let mut tween = Tween::from_to(0.0, 1.0, 1.0, Easing::Linear).with_speed(2.0);
        tween.advance(0.25, false);
        assert!((tween.progress_raw() - 0.5).abs() < EPS);

        let late = tween.advance(0.5, false).unwrap();
        // 0.5s at 2x is 1.0 tween-second, 0.5 of which is past the end
        assert!((late - 0.25).abs() < EPS);
    }

    #[test]
    fn zero_speed_freezes_progress() {
        let mut tween = Tween::from_to(0.0, 1.0, 1.0, Easing::Linear).with_speed(0.0);
        tween.advance(5.0, false);
        assert_eq!(tween.progress_raw(), 0.0);
        assert!(!tween.is_finished());
    }

    #[test]
    fn reset_to_start_does_not_notify() {
        let (mut tween, count, _) = counted(1.0);
        tween.advance(1.0, false);
        assert_eq!(count.get(), 1);

        tween.reset_to_start();
        assert_eq!(tween.progress_raw(), 0.0);
        assert_eq!(tween.value(), 0.0);
        assert!(!tween.is_finished());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn reset_of_zero_duration_notifies_on_transition_only() {
        let (mut tween, count, lates) = counted(0.0);
        tween.reset_to_start();
        assert!(tween.is_finished());
        assert_eq!(count.get(), 1);
        assert_eq!(lates.borrow()[0], 0.0);

        tween.reset_to_start();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn reset_with_late_time_plays_into_the_tween() {
        let (mut tween, count, _) = counted(2.0);
        tween.reset_with_late_time(0.5);
        assert!((tween.progress_raw() - 0.25).abs() < EPS);
        assert!((tween.value() - 2.5).abs() < EPS);
        assert_eq!(count.get(), 0);

        tween.reset_with_late_time(5.0);
        assert!(tween.is_finished());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn tween_can_repeat_from_its_own_callback() {
        let laps = Rc::new(Cell::new(0));
        let l = laps.clone();
        let mut timer = Tween::wait(1.0).with_on_complete(move |t, late| {
            l.set(l.get() + 1);
            t.reset_with_late_time(late);
        });

        timer.advance(0.75, false);
        timer.advance(0.75, false);
        assert_eq!(laps.get(), 1);
        assert!(!timer.is_finished());
        assert!((timer.value() - 0.5).abs() < EPS);

        timer.advance(0.5, false);
        assert_eq!(laps.get(), 2);
        assert_eq!(timer.subscriber_count(), 1);
    }

    #[test]
    fn subscribers_run_in_order_and_late_additions_wait() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (log.clone(), log.clone());
        let mut tween = Tween::from_to(0.0, 1.0, 1.0, Easing::Linear);
        tween.on_complete(move |_, _| a.borrow_mut().push("first"));
        tween.on_complete(move |t, _| {
            b.borrow_mut().push("second");
            if t.subscriber_count() == 0 {
                let c = b.clone();
                t.on_complete(move |_, _| c.borrow_mut().push("added"));
            }
        });

        tween.advance(1.0, false);
        assert_eq!(log.borrow().as_slice(), &["first", "second"]);
        assert_eq!(tween.subscriber_count(), 3);

        tween.reset_to_start();
        tween.advance(1.0, false);
        assert_eq!(
            log.borrow().as_slice(),
            &["first", "second", "first", "second", "added"]
        );
    }

    #[test]
    fn completion_raised_inside_a_subscriber_is_delivered_after_it() {
        let lates = Rc::new(RefCell::new(Vec::new()));
        let l = lates.clone();
        let mut tween = Tween::from_to(0.0, 1.0, 1.0, Easing::Linear).with_on_complete(
            move |t, late| {
                l.borrow_mut().push(late);
                if l.borrow().len() == 1 {
                    t.reset_to_start();
                    t.advance(1.5, false);
                }
            },
        );

        let late = tween.advance(1.25, false);
        assert!((late.unwrap() - 0.25).abs() < EPS);
        assert_eq!(lates.borrow().len(), 2);
        assert!((lates.borrow()[0] - 0.25).abs() < EPS);
        assert!((lates.borrow()[1] - 0.5).abs() < EPS);
        assert!(tween.is_finished());
        assert!((tween.late_time() - 0.5).abs() < EPS);
        assert_eq!(tween.subscriber_count(), 1);
    }

    #[test]
    fn clearing_during_dispatch_drops_the_snapshot() {
        let (count, _) = counter();
        let c = count.clone();
        let mut tween = Tween::from_to(0.0, 1.0, 1.0, Easing::Linear)
            .with_on_complete(move |t, _| {
                c.set(c.get() + 1);
                t.clear_on_complete();
            });

        tween.advance(1.0, false);
        assert_eq!(count.get(), 1);
        assert_eq!(tween.subscriber_count(), 0);
    }

    #[test]
    fn paused_tween_ignores_ticks() {
        let mut tween = Tween::from_to(0.0, 1.0, 1.0, Easing::Linear).paused();
        assert_eq!(tween.tick(0.5), None);
        assert_eq!(tween.progress_raw(), 0.0);

        tween.active = true;
        tween.tick(0.5);
        assert!((tween.progress_raw() - 0.5).abs() < EPS);
    }

    #[test]
    fn reroute_keeps_value_and_remaining_time() {
        let mut tween = Tween::from_to(0.0, 10.0, 4.0, Easing::Linear);
        tween.advance(1.0, false);
        let before = tween.value();
        assert!((before - 2.5).abs() < EPS);

        tween.reroute(-5.0);
        assert_eq!(tween.value(), before);
        assert_eq!(tween.progress_raw(), 0.0);
        assert!((tween.duration() - 3.0).abs() < EPS);
        assert_eq!(tween.endpoints(), (before, -5.0));

        tween.advance(3.0, false);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), -5.0);
    }

    #[test]
    fn reroute_with_easing_starts_from_eased_value() {
        let mut tween = Tween::from_to(0.0, 100.0, 2.0, Easing::QuadOut);
        tween.advance(1.0, false);
        let before = tween.value();
        tween.reroute(0.0);
        assert_eq!(tween.value(), before);
        assert!((tween.duration() - 1.0).abs() < EPS);
    }

    #[test]
    fn reroute_never_notifies() {
        let (mut tween, count, _) = counted(1.0);
        tween.advance(1.0, false);
        tween.reroute(20.0);
        assert!(tween.is_finished());
        assert_eq!(tween.duration(), 0.0);
        assert_eq!(tween.value(), 20.0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn reset_with_endpoints_is_silent() {
        let (mut tween, count, _) = counted(0.0);
        tween.reset_with_endpoints(5.0, 6.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 6.0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn set_to_moves_target_in_place() {
        let mut tween = Tween::from_to(0.0, 1.0, 1.0, Easing::Linear);
        tween.advance(0.5, false);
        tween.set_to(3.0);
        assert!((tween.value() - 1.5).abs() < EPS);
        assert!((tween.progress_raw() - 0.5).abs() < EPS);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "must be finite")]
    fn nan_duration_is_rejected() {
        let _ = Tween::from_to(0.0, 1.0, f32::NAN, Easing::Linear);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "must be finite")]
    fn infinite_speed_is_rejected() {
        let _ = Tween::wait(1.0).with_speed(f32::INFINITY);
    }

    #[test]
    fn vector_tween_interpolates() {
        let mut tween = Tween::from_to(glam::Vec2::ZERO, glam::Vec2::new(4.0, 8.0), 2.0, Easing::Linear);
        tween.advance(1.0, false);
        assert!((tween.value() - glam::Vec2::new(2.0, 4.0)).length() < EPS);
    }
}
