//! Instruction walker
//!
//! Shows the lesson one instruction at a time, each gated by a line of input,
//! then waits for the trigger token and hands off to the test runner.
//! Progress is forward only: presenting, awaiting the trigger, delegated.

pub mod input;

use std::fmt;
use std::io::{BufRead, Write};

use crate::common::Result;
use crate::host::{Host, TestRun};
use crate::lesson::Lesson;

use input::LineReader;

/// Where the walker is in its run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Banner and instructions are being shown
    Presenting,
    /// Closing prompt shown, waiting for the trigger token
    AwaitingTrigger,
    /// Test runner invoked
    Delegated,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Presenting => write!(f, "presenting instructions"),
            Phase::AwaitingTrigger => write!(f, "waiting for 'learn'"),
            Phase::Delegated => write!(f, "running tests"),
        }
    }
}

/// Summary of a completed walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Lines read before the closing prompt: one for the banner plus one per instruction
    pub gating_reads: usize,
    /// Non-matching confirmation lines
    pub reminders: usize,
    /// What the test runner returned
    pub test_run: TestRun,
}

/// Walks a learner through a [`Lesson`]
pub struct Walker<R, W, H> {
    lesson: Lesson,
    input: LineReader<R>,
    output: W,
    host: H,
    phase: Phase,
}

impl<R: BufRead, W: Write, H: Host> Walker<R, W, H> {
    pub fn new(lesson: Lesson, input: R, output: W, host: H) -> Self {
        Self {
            lesson,
            input: LineReader::new(input),
            output,
            host,
            phase: Phase::Presenting,
        }
    }

    /// Run the lesson to completion
    ///
    /// Consumes the walker, so the test runner can be invoked at most once.
    pub fn run(mut self) -> Result<Report> {
        if let Err(e) = self.host.clear_screen() {
            tracing::debug!(error = %e, "Ignoring failed screen clear");
        }

        for line in &self.lesson.banner {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()?;
        self.input.acknowledge(self.phase)?;

        for (index, instruction) in self.lesson.instructions.iter().enumerate() {
            tracing::trace!(step = index + 1, "Showing instruction");
            writeln!(self.output, "{instruction}")?;
            self.output.flush()?;
            self.input.acknowledge(self.phase)?;
        }
        let gating_reads = self.input.reads();

        self.advance(Phase::AwaitingTrigger);
        writeln!(self.output, "{}", self.lesson.closing)?;
        self.output.flush()?;

        let mut reminders = 0;
        while self.input.read_line(self.phase)? != self.lesson.trigger.as_bytes() {
            reminders += 1;
            writeln!(self.output, "{}", self.lesson.reminder)?;
            self.output.flush()?;
        }

        self.advance(Phase::Delegated);
        let test_run = self.host.run_tests()?;

        Ok(Report {
            gating_reads,
            reminders,
            test_run,
        })
    }

    fn advance(&mut self, next: Phase) {
        tracing::debug!(
            from = %self.phase,
            to = %next,
            reads = self.input.reads(),
            "Walker phase change"
        );
        self.phase = next;
    }
}
