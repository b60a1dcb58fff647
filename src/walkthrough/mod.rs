// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The guided tour of the decorators, one section at a time.
//!
//! Commentary goes to `out`; what the decorators themselves announce goes to
//! the notification sink. With the stdout sink both end up interleaved on the
//! console in the order they happen.

use anyhow::Context;
use std::io::Write;
use std::sync::Arc;

use crate::callable::recursive;
use crate::config::{Section, WalkthroughConfig};
use crate::decorators::{
    call_counter, call_counter_via_wraps, catch_exceptions, logging, timed, with_arguments,
};
use crate::observability::messages::{config::SectionStarted, StructuredLog};
use crate::observability::sink::NotificationSink;
use crate::traits::{identity, Callable, Decorator, Described};
use crate::workloads::{divide, fib_rec, my_function, say_hello};

pub struct Walkthrough<W: Write> {
    config: WalkthroughConfig,
    sink: Arc<dyn NotificationSink>,
    out: W,
}

impl<W: Write> Walkthrough<W> {
    pub fn new(config: WalkthroughConfig, sink: Arc<dyn NotificationSink>, out: W) -> Self {
        Self { config, sink, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run every configured section in order.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let sections = self.config.sections.clone();
        let total = sections.len();

        for (i, section) in sections.into_iter().enumerate() {
            let start_msg = SectionStarted {
                section: section.as_str(),
                index: i + 1,
                total,
            };
            let span = start_msg.span("walkthrough");
            let _guard = span.enter();
            start_msg.log();

            if i > 0 {
                writeln!(self.out)?;
            }
            self.run_section(section)
                .with_context(|| format!("section '{section}' failed"))?;
        }

        Ok(())
    }

    pub fn run_section(&mut self, section: Section) -> anyhow::Result<()> {
        writeln!(self.out, "# {}", section.title())?;
        match section {
            Section::Counting => self.counting(),
            Section::Composition => self.composition(),
            Section::Metadata => self.metadata(),
            Section::Logging => self.logging(),
            Section::Exceptions => self.exceptions(),
            Section::Arguments => self.arguments(),
            Section::Timing => self.timing(),
        }
    }

    fn counting(&mut self) -> anyhow::Result<()> {
        let plain = recursive(fib_rec, identity())?;
        let table = (0..self.config.fib.table_size)
            .map(|n| plain.call(n))
            .collect::<Result<Vec<_>, _>>()?;
        writeln!(self.out, "[fib_rec(n) for n in 0..{}] = {:?}", self.config.fib.table_size, table)?;

        let fib = recursive(fib_rec, call_counter())?;
        for &n in &self.config.fib.inputs {
            let value = fib.call(n)?;
            writeln!(self.out, "fib_rec({n}) = {value}")?;
            writeln!(self.out, "fib_rec.calls = {}", fib.calls())?;
        }
        writeln!(
            self.out,
            "Note: the counter belongs to the wrapper, so it totals every calculation made through it."
        )?;
        Ok(())
    }

    fn composition(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.out,
            "logging(with_arguments({:?})(say_hello)): the outer decorator runs first.",
            self.config.decorator_arguments
        )?;

        let greet = logging().with_sink(self.sink.clone()).preserving_metadata().decorate(
            with_arguments(self.config.decorator_arguments.iter().cloned())
                .with_sink(self.sink.clone())
                .preserving_metadata()
                .decorate(say_hello()),
        );
        let greeting = greet.call(self.config.greeting.clone())?;
        writeln!(self.out, "{greeting}")?;
        Ok(())
    }

    fn metadata(&mut self) -> anyhow::Result<()> {
        let original = fib_rec(Default::default());
        writeln!(self.out, "fib_rec_orig.__doc__ = {}", doc_or_none(original.doc()))?;

        let counted = call_counter().decorate(fib_rec(Default::default()));
        writeln!(
            self.out,
            "call_counter(fib_rec): name = {}, __doc__ = {}",
            counted.name(),
            doc_or_none(counted.doc())
        )?;

        let wrapped = call_counter_via_wraps().decorate(fib_rec(Default::default()));
        writeln!(
            self.out,
            "call_counter_via_wraps(fib_rec): name = {}, __doc__ = {}",
            wrapped.name(),
            doc_or_none(wrapped.doc())
        )?;
        Ok(())
    }

    fn logging(&mut self) -> anyhow::Result<()> {
        let greet = logging().with_sink(self.sink.clone()).decorate(say_hello());
        let greeting = greet.call(self.config.greeting.clone())?;
        writeln!(self.out, "{greeting}")?;
        Ok(())
    }

    fn exceptions(&mut self) -> anyhow::Result<()> {
        let safe_divide = catch_exceptions().with_sink(self.sink.clone()).decorate(divide());
        for &[a, b] in &self.config.divisions {
            let result = safe_divide.call((a, b))?;
            match result {
                Some(value) => writeln!(self.out, "divide({a}, {b}) -> Result: {value}")?,
                None => writeln!(self.out, "divide({a}, {b}) -> Result: None")?,
            }
        }
        Ok(())
    }

    fn arguments(&mut self) -> anyhow::Result<()> {
        let decorated = with_arguments(self.config.decorator_arguments.iter().cloned())
            .with_sink(self.sink.clone())
            .decorate(my_function());
        let output = decorated.call(())?;
        writeln!(self.out, "{output}")?;
        Ok(())
    }

    fn timing(&mut self) -> anyhow::Result<()> {
        let Some(&n) = self.config.fib.inputs.iter().max() else {
            writeln!(self.out, "No fib inputs configured; nothing to time.")?;
            return Ok(());
        };

        let fib = recursive(fib_rec, call_counter_via_wraps())?;
        let timed_fib = timed()
            .with_sink(self.sink.clone())
            .preserving_metadata()
            .decorate(Arc::clone(&fib));

        let value = timed_fib.call(n)?;
        writeln!(self.out, "fib_rec({n}) = {value} after {} calls", fib.calls())?;
        if let Some(elapsed) = timed_fib.last_elapsed() {
            writeln!(self.out, "elapsed: {elapsed:?}")?;
        }
        Ok(())
    }
}

fn doc_or_none(doc: Option<&str>) -> &str {
    doc.unwrap_or("None")
}
