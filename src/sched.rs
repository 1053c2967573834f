//! Single-shot deferred tasks, run one frame after they are queued.
//! Tasks are tagged with the section that owns them so teardown can
//! cancel anything still pending.

pub type SectionId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    ArmGate(SectionId),
}

#[derive(Debug)]
struct Task {
    owner: SectionId,
    due_frame: u64,
    action: DeferredAction,
}

#[derive(Debug, Default)]
pub struct FrameScheduler {
    frame: u64,
    queue: Vec<Task>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` for the next frame (never the current one).
    pub fn defer(&mut self, owner: SectionId, action: DeferredAction) {
        self.queue.push(Task {
            owner,
            due_frame: self.frame + 1,
            action,
        });
    }

    pub fn cancel_section(&mut self, owner: SectionId) {
        self.queue.retain(|t| t.owner != owner);
    }

    /// Advance to the next frame and drain everything now due.
    pub fn next_frame(&mut self) -> Vec<DeferredAction> {
        self.frame += 1;
        let frame = self.frame;
        let mut due = Vec::new();
        self.queue.retain(|t| {
            if t.due_frame <= frame {
                due.push(t.action);
                false
            } else {
                true
            }
        });
        due
    }
}
