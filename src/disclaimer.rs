use std::io::{BufRead, Write};

use crate::cli::DisclaimerArgs;
use crate::course;
use crate::formats::CourseLabels;

pub const DISCLAIMER: &str = "This document will open in a new window or tab. Once you have completed your use of this document, close the window or tab that contains it. The course is still open and you will be taken back to your location in the course.";

/// Presents a message and blocks until the user acknowledges it.
pub trait Notifier {
    fn acknowledge(&mut self, message: &str);
}

/// Shows the external-document disclaimer.
pub fn show_disclaimer(notifier: &mut dyn Notifier) {
    notifier.acknowledge(DISCLAIMER);
}

/// Shows the disclaimer a course was configured with.
pub fn show_course_disclaimer(notifier: &mut dyn Notifier, labels: &CourseLabels) {
    notifier.acknowledge(&labels.disclaimer);
}

/// Writes the message as one line and, when waiting, reads one line back.
pub struct TerminalNotifier<R, W> {
    input: R,
    output: W,
    wait: bool,
}

impl<R: BufRead, W: Write> TerminalNotifier<R, W> {
    pub fn new(input: R, output: W, wait: bool) -> Self {
        Self {
            input,
            output,
            wait,
        }
    }

    fn try_acknowledge(&mut self, message: &str) -> std::io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        if self.wait {
            let mut line = String::new();
            self.input.read_line(&mut line)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Notifier for TerminalNotifier<R, W> {
    fn acknowledge(&mut self, message: &str) {
        if let Err(err) = self.try_acknowledge(message) {
            tracing::warn!(error = %err, "disclaimer acknowledgment failed");
        }
    }
}

pub fn run(args: DisclaimerArgs) -> anyhow::Result<()> {
    let course = course::resolve(args.config.as_deref(), args.layout)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut notifier = TerminalNotifier::new(stdin.lock(), stdout.lock(), !args.no_wait);
    show_course_disclaimer(&mut notifier, &course.labels);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        messages: Vec<String>,
    }

    impl Notifier for Recorder {
        fn acknowledge(&mut self, message: &str) {
            self.messages.push(message.to_owned());
        }
    }

    #[test]
    fn show_disclaimer_presents_exact_text_once() {
        let mut recorder = Recorder::default();
        show_disclaimer(&mut recorder);
        assert_eq!(recorder.messages, vec![DISCLAIMER.to_owned()]);
    }

    #[test]
    fn course_disclaimer_comes_from_labels() {
        let labels = CourseLabels {
            program_title: String::new(),
            course_title: "Demo".to_owned(),
            disclaimer: "Opens in a new tab.".to_owned(),
        };
        let mut recorder = Recorder::default();
        show_course_disclaimer(&mut recorder, &labels);
        assert_eq!(recorder.messages, vec!["Opens in a new tab.".to_owned()]);
    }

    #[test]
    fn builtin_course_carries_the_fixed_disclaimer() -> anyhow::Result<()> {
        let course = course::builtin(crate::cli::CourseLayout::Flat)?;
        let mut recorder = Recorder::default();
        show_course_disclaimer(&mut recorder, &course.labels);
        assert_eq!(recorder.messages, vec![DISCLAIMER.to_owned()]);
        Ok(())
    }

    #[test]
    fn terminal_notifier_waits_for_a_line() {
        let input = std::io::Cursor::new(b"\nleftover\n".to_vec());
        let mut output = Vec::new();
        let mut notifier = TerminalNotifier::new(input, &mut output, true);
        show_disclaimer(&mut notifier);

        let mut rest = String::new();
        let read = notifier.input.read_line(&mut rest);
        assert!(read.is_ok());
        assert_eq!(rest, "leftover\n");
        drop(notifier);
        assert_eq!(output, format!("{DISCLAIMER}\n").into_bytes());
    }

    #[test]
    fn terminal_notifier_without_wait_leaves_input_alone() {
        let input = std::io::Cursor::new(b"first\n".to_vec());
        let mut notifier = TerminalNotifier::new(input, Vec::new(), false);
        show_disclaimer(&mut notifier);

        assert_eq!(notifier.input.position(), 0);
        assert_eq!(notifier.output, format!("{DISCLAIMER}\n").into_bytes());
    }
}
