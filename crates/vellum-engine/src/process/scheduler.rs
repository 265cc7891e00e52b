use anyhow::{Context, Result};

/// A unit of per-frame work.
///
/// Every frame the scheduler calls `pre_iteration` on all processes, then
/// `execute` on all, then `post_iteration` on all.
pub trait Process {
    fn pre_iteration(&mut self) -> Result<()> {
        Ok(())
    }

    fn execute(&mut self) -> Result<()>;

    fn post_iteration(&mut self) -> Result<()> {
        Ok(())
    }

    /// Name used in error context and logs.
    fn name(&self) -> &str {
        "process"
    }
}

/// Runs registered processes in registration order, one frame per call.
#[derive(Default)]
pub struct Scheduler {
    processes: Vec<Box<dyn Process>>,
    frame: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, process: impl Process + 'static) {
        self.processes.push(Box::new(process));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Frames completed so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Runs one frame. The first failing hook aborts the frame.
    pub fn perform_iteration(&mut self) -> Result<()> {
        let frame = self.frame;

        for p in &mut self.processes {
            p.pre_iteration()
                .with_context(|| format!("{}: pre_iteration failed in frame {frame}", p.name()))?;
        }
        for p in &mut self.processes {
            p.execute()
                .with_context(|| format!("{}: execute failed in frame {frame}", p.name()))?;
        }
        for p in &mut self.processes {
            p.post_iteration()
                .with_context(|| format!("{}: post_iteration failed in frame {frame}", p.name()))?;
        }

        self.frame += 1;
        Ok(())
    }
}
