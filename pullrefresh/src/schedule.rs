/// Identifies one scheduled task. Handles are never reused within a [`Scheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

/// Deferred work owned by the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    /// One step of the release animation.
    Settle,
    /// Leave the waiting state after a completed refresh.
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    pub handle: TaskHandle,
    pub task: Task,
    pub due_ms: u64,
}

/// A clock-driven task slot table.
///
/// Each [`Task`] kind has at most one pending instance: scheduling again replaces it.
/// Nothing runs on its own; the owner polls [`Scheduler::pop_due`] from its `tick`.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    settle: Option<ScheduledTask>,
    release: Option<ScheduledTask>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, task: Task) -> &mut Option<ScheduledTask> {
        match task {
            Task::Settle => &mut self.settle,
            Task::Release => &mut self.release,
        }
    }

    pub fn schedule(&mut self, task: Task, due_ms: u64) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        *self.slot(task) = Some(ScheduledTask {
            handle,
            task,
            due_ms,
        });
        handle
    }

    /// Cancels the pending instance of `task`. Returns `true` if one was pending.
    pub fn cancel(&mut self, task: Task) -> bool {
        self.slot(task).take().is_some()
    }

    /// Cancels a task by handle. Returns `false` if it already ran, was cancelled, or was
    /// replaced.
    pub fn cancel_handle(&mut self, handle: TaskHandle) -> bool {
        for task in [Task::Settle, Task::Release] {
            let slot = self.slot(task);
            if slot.is_some_and(|s| s.handle == handle) {
                *slot = None;
                return true;
            }
        }
        false
    }

    pub fn cancel_all(&mut self) {
        self.settle = None;
        self.release = None;
    }

    pub fn is_scheduled(&self, task: Task) -> bool {
        match task {
            Task::Settle => self.settle.is_some(),
            Task::Release => self.release.is_some(),
        }
    }

    pub fn pending(&self, task: Task) -> Option<ScheduledTask> {
        match task {
            Task::Settle => self.settle,
            Task::Release => self.release,
        }
    }

    /// Earliest deadline among pending tasks.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        [self.settle, self.release]
            .into_iter()
            .flatten()
            .map(|t| t.due_ms)
            .min()
    }

    /// Removes and returns the earliest task due at `now_ms`, if any.
    ///
    /// On equal deadlines the release task goes first.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<ScheduledTask> {
        let due = |t: &Option<ScheduledTask>| t.filter(|t| t.due_ms <= now_ms);
        match (due(&self.release), due(&self.settle)) {
            (Some(r), Some(s)) if s.due_ms < r.due_ms => self.settle.take(),
            (Some(_), _) => self.release.take(),
            (None, Some(_)) => self.settle.take(),
            (None, None) => None,
        }
    }
}
