use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use crate::frame_clock::FrameClock;
use crate::platform::RuntimeScheduler;
use crate::FrameCallbackId;

type UiTask = Box<dyn FnOnce() + 'static>;
type FrameCallback = Box<dyn FnOnce(u64) + 'static>;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<FrameCallback>,
}

struct RuntimeInner {
    scheduler: Arc<dyn RuntimeScheduler>,
    needs_frame: Cell<bool>,
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_frame_callback_id: Cell<u64>,
    ui_tasks: RefCell<VecDeque<UiTask>>,
}

impl RuntimeInner {
    fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            scheduler,
            needs_frame: Cell::new(false),
            frame_callbacks: RefCell::new(VecDeque::new()),
            next_frame_callback_id: Cell::new(1),
            ui_tasks: RefCell::new(VecDeque::new()),
        }
    }

    fn schedule(&self) {
        self.needs_frame.set(true);
        self.scheduler.schedule_frame();
    }

    fn has_frame_callbacks(&self) -> bool {
        self.frame_callbacks
            .try_borrow()
            .map(|callbacks| !callbacks.is_empty())
            .unwrap_or(true)
    }

    fn has_pending_ui(&self) -> bool {
        self.ui_tasks
            .try_borrow()
            .map(|tasks| !tasks.is_empty())
            .unwrap_or(true)
    }

    /// Queues a closure on the UI task queue.
    ///
    /// The closure may capture `Rc`/`RefCell` values because it never leaves
    /// the runtime thread.
    fn enqueue_ui_task(&self, task: UiTask) {
        self.ui_tasks.borrow_mut().push_back(task);
        self.schedule();
    }

    fn drain_ui(&self) -> usize {
        let mut executed = 0;
        loop {
            // Release the borrow before running: tasks may enqueue more tasks.
            let task = self.ui_tasks.borrow_mut().pop_front();
            match task {
                Some(task) => {
                    task();
                    executed += 1;
                }
                None => break,
            }
        }
        self.settle();
        executed
    }

    fn register_frame_callback(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
        self.schedule();
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        {
            let mut callbacks = self.frame_callbacks.borrow_mut();
            if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
                callbacks.remove(index);
            }
        }
        self.settle();
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        // Callbacks registered while draining belong to the next frame.
        let pending: Vec<FrameCallback> = {
            let mut callbacks = self.frame_callbacks.borrow_mut();
            callbacks
                .drain(..)
                .filter_map(|mut entry| entry.callback.take())
                .collect()
        };
        let count = pending.len();
        if count > 0 {
            log::trace!("running {count} frame callbacks at {frame_time_nanos}ns");
        }
        for callback in pending {
            callback(frame_time_nanos);
        }
        self.settle();
        count
    }

    fn settle(&self) {
        if !self.has_frame_callbacks() && !self.has_pending_ui() {
            self.needs_frame.set(false);
        }
    }
}

/// Owner of the frame and UI task queues for one UI thread.
#[derive(Clone)]
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(scheduler)),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Whether anything asked for a frame since the queues last went empty.
    pub fn needs_frame(&self) -> bool {
        self.inner.needs_frame.get()
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.handle())
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(Arc::new(DefaultScheduler))
    }
}

/// Scheduler that ignores frame requests; hosts poll [`Runtime::needs_frame`].
#[derive(Debug, Default)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}

/// Weak handle to a [`Runtime`].
///
/// Every operation is a no-op once the runtime has been dropped.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn schedule(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.schedule();
        }
    }

    /// Queues `task` to run on the next [`RuntimeHandle::drain_ui`].
    ///
    /// This is the only path through which code running inside the gesture
    /// context hands work to caller-supplied callbacks.
    pub fn enqueue_ui_task(&self, task: impl FnOnce() + 'static) {
        match self.inner.upgrade() {
            Some(inner) => inner.enqueue_ui_task(Box::new(task)),
            None => log::warn!("runtime dropped; discarding UI task"),
        }
    }

    /// Runs queued UI tasks until the queue is empty and returns how many ran.
    pub fn drain_ui(&self) -> usize {
        self.inner
            .upgrade()
            .map(|inner| inner.drain_ui())
            .unwrap_or(0)
    }

    pub fn has_pending_ui(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_pending_ui())
            .unwrap_or(false)
    }

    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    /// Runs every frame callback registered before this call.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        self.inner
            .upgrade()
            .map(|inner| inner.drain_frame_callbacks(frame_time_nanos))
            .unwrap_or(0)
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_frame_callbacks())
            .unwrap_or(false)
    }

    /// True when no frame callbacks or UI tasks are waiting.
    pub fn is_idle(&self) -> bool {
        !self.has_frame_callbacks() && !self.has_pending_ui()
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }
}

impl std::fmt::Debug for RuntimeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeHandle")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}
