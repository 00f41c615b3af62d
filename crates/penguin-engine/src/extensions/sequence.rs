// extensions/sequence.rs
//
// Sequence: plays a chain of tweens one after the other.
// Time left over when an element completes ("late time") is handed to the
// next element, so a long frame can walk across several short elements.
//
// Usage:
//   let mut hop = Sequence::new()
//       .then(Tween::from_to(0.0, 1.2, 0.25, Easing::QuadOut))
//       .then(Tween::from_to(1.2, 0.0, 0.25, Easing::QuadIn));
//   hop.tick(dt);
//   penguin_y = ground_y + hop.value();

use std::fmt;

use super::tween::Animate;

/// Completion subscriber for a whole sequence.
pub type SequenceCallback<T> = Box<dyn FnMut(&mut Sequence<T>, f32)>;

/// An ordered chain of animations sharing one output type.
///
/// Exactly one element is active while the sequence runs; none once it has
/// finished.
pub struct Sequence<T> {
    /// Diagnostic label.
    pub id: String,
    /// Whether [`Sequence::tick`] advances this sequence.
    pub active: bool,
    elements: Vec<Box<dyn Animate<T>>>,
    index: Option<usize>,
    finished: bool,
    speed: f32,
    on_complete: Vec<SequenceCallback<T>>,
    dispatching: bool,
    listeners_cleared: bool,
    pending: Option<f32>,
}

impl<T: Copy + Default> Sequence<T> {
    /// An empty sequence, which counts as finished.
    pub fn new() -> Self {
        Self {
            id: String::from("Sequence"),
            active: true,
            elements: Vec::new(),
            index: None,
            finished: true,
            speed: 1.0,
            on_complete: Vec::new(),
            dispatching: false,
            listeners_cleared: false,
            pending: None,
        }
    }

    /// Build a sequence from boxed elements and restart it.
    pub fn from_elements(elements: Vec<Box<dyn Animate<T>>>) -> Self {
        let mut sequence = Self::new();
        sequence.elements = elements;
        sequence.restart();
        sequence
    }

    // -- Builder methods --

    /// Append an element and restart.
    ///
    /// A chain that is already complete after the restart (only zero-length
    /// elements) notifies the subscribers registered so far, so attach
    /// subscribers after the last `then` when building.
    pub fn then(mut self, element: impl Animate<T> + 'static) -> Self {
        self.elements.push(Box::new(element));
        self.restart();
        self
    }

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

    pub fn paused(mut self) -> Self {
        self.active = false;
        self
    }

    // -- Accessors --

    /// Index of the active element, `None` when there are no elements.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn current(&self) -> Option<&dyn Animate<T>> {
        self.index
            .and_then(|i| self.elements.get(i))
            .map(|element| element.as_ref())
    }

    /// The active element, for hosts that drive it directly. A completion
    /// caused that way is handed over on the next [`Sequence::advance`].
    pub fn current_mut(&mut self) -> Option<&mut (dyn Animate<T> + 'static)> {
        match self.index {
            Some(i) => self.elements.get_mut(i).map(|element| element.as_mut()),
            None => None,
        }
    }

    pub fn element(&self, index: usize) -> Option<&dyn Animate<T>> {
        self.elements.get(index).map(|element| element.as_ref())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the shared speed; every element follows it.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = super::tween::non_negative("speed", speed);
        for element in self.elements.iter_mut() {
            element.set_speed(self.speed);
        }
    }

    /// Value of the active element, or `T::default()` with no elements.
    pub fn value(&self) -> T {
        self.current().map(|c| c.value()).unwrap_or_default()
    }

    pub fn value_raw(&self) -> T {
        self.current().map(|c| c.value_raw()).unwrap_or_default()
    }

    // -- Subscribers --

    /// Register a subscriber for the completion of the last element.
    pub fn on_complete(&mut self, f: impl FnMut(&mut Self, f32) + 'static) {
        self.on_complete.push(Box::new(f));
    }

    pub fn clear_on_complete(&mut self) {
        self.on_complete.clear();
        if self.dispatching {
            self.listeners_cleared = true;
        }
    }

    // -- Playback --

    /// Rewind every element and activate the first one.
    pub fn restart(&mut self) {
        self.restart_inner(None);
    }

    /// Like [`Sequence::restart`], but the first element already plays
    /// `time` host seconds.
    pub fn restart_with_time(&mut self, time: f32) {
        self.restart_inner(Some(time));
    }

    /// Per-frame drive: advance the active element if both the sequence and
    /// that element are active.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        if !self.current().is_some_and(|current| current.is_active()) {
            return None;
        }
        self.advance(dt)
    }

    /// Advance the current element by `dt` host seconds.
    ///
    /// Returns the sequence's late time if this call finished it. Late time
    /// is in host seconds; each skipped element consumes `duration / speed`
    /// of it, which is its plain duration at speed 1.
    pub fn advance(&mut self, dt: f32) -> Option<f32> {
        if self.finished {
            return None;
        }

        // Pick up an element the host finished through `current_mut`
        let index = self.index?;
        if self.elements[index].is_finished() {
            let late_time = self.elements[index].late_time();
            if let Some(late_time) = self.on_element_complete(late_time) {
                return Some(late_time);
            }
        }

        let index = self.index?;
        let late_time = self.elements[index].advance(dt, false)?;
        self.on_element_complete(late_time)
    }

    fn restart_inner(&mut self, time: Option<f32>) {
        if self.elements.is_empty() {
            self.index = None;
            self.finished = true;
            return;
        }

        let speed = self.speed;
        for (i, element) in self.elements.iter_mut().enumerate().rev() {
            element.set_speed(speed);
            match time {
                Some(time) if i == 0 => element.reset_with_late_time(time),
                _ => element.reset_to_start(),
            }
            element.set_active(i == 0);
        }

        self.index = Some(0);
        self.finished = false;
        log::debug!(
            "sequence '{}' restarted with {} elements",
            self.id,
            self.elements.len()
        );

        // A zero-length (or fully overflowed) first element hands over now,
        // otherwise the sequence would stall on it.
        let first = self.elements[0].as_ref();
        if first.is_finished() {
            let late_time = time.unwrap_or(0.0) - host_duration(first);
            self.on_element_complete(late_time);
        }
    }

    /// Hand over from the element that just completed to the next one still
    /// running, carrying `late_time` along. Returns the late time if the
    /// whole sequence finished.
    fn on_element_complete(&mut self, mut late_time: f32) -> Option<f32> {
        let mut index = self.index?;
        self.elements[index].set_active(false);
        let last = self.elements.len() - 1;

        loop {
            if index == last {
                self.finished = true;
                log::debug!(
                    "sequence '{}' complete, late by {:.4}s",
                    self.id,
                    late_time
                );
                self.notify_complete(late_time);
                return Some(late_time);
            }

            index += 1;
            self.index = Some(index);

            let speed = self.speed;
            let element = &mut self.elements[index];
            element.set_speed(speed);
            element.reset_with_late_time(late_time);

            if !element.is_finished() {
                element.set_active(true);
                log::debug!(
                    "sequence '{}' activated '{}' ({}/{})",
                    self.id,
                    element.id(),
                    index + 1,
                    last + 1
                );
                return None;
            }

            late_time -= host_duration(element.as_ref());
        }
    }

    fn notify_complete(&mut self, late_time: f32) {
        // A subscriber restarting the sequence may finish it again; that
        // completion is queued and delivered after the current snapshot.
        if self.dispatching {
            self.pending = Some(late_time);
            return;
        }

        let mut late_time = late_time;
        loop {
            self.dispatch(late_time);
            let next = match self.pending.take() {
                Some(next) => next,
                None => break,
            };
            if next >= late_time {
                log::warn!(
                    "sequence '{}' completed again without consuming time, not notifying",
                    self.id
                );
                break;
            }
            late_time = next;
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

impl<T: Copy + Default> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("id", &self.id)
            .field("active", &self.active)
            .field("len", &self.elements.len())
            .field("index", &self.index)
            .field("finished", &self.finished)
            .field("speed", &self.speed)
            .field("pending", &self.pending)
            .field("subscribers", &self.on_complete.len())
            .finish()
    }
}

/// Host seconds an element consumes at its current speed.
fn host_duration<T>(element: &dyn Animate<T>) -> f32 {
    let duration = element.duration();
    if duration == 0.0 {
        0.0
    } else if element.speed() > 0.0 {
        duration / element.speed()
    } else {
        f32::INFINITY
    }
}
