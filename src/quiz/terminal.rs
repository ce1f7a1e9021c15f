use crate::core::Matcher;
use crate::models::{MatchReport, Tag};
use crate::quiz::session::{QuizSession, QuizState};
use crate::quiz::transition::{QuizEvent, TransitionTimer};
use rand::Rng;
use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

const PROGRESS_WIDTH: usize = 20;

/// What the driver should do after handling one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-based quiz front end
///
/// Renders questions and results to `output` and reads answers line by
/// line. Moving on after an answer waits for the transition delay; input
/// arriving meanwhile is ignored by the session.
pub struct TerminalQuiz<R, W> {
    session: QuizSession,
    matcher: Matcher,
    timer: TransitionTimer,
    result_count: usize,
    rng: R,
    output: W,
}

impl<R: Rng, W: Write> TerminalQuiz<R, W> {
    pub fn new(
        session: QuizSession,
        matcher: Matcher,
        transition_delay: Duration,
        result_count: usize,
        rng: R,
        output: W,
    ) -> Self {
        Self {
            session,
            matcher,
            timer: TransitionTimer::new(transition_delay),
            result_count,
            rng,
            output,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until the user quits or input ends
    pub async fn run<I: AsyncBufRead + Unpin>(&mut self, input: I) -> io::Result<()> {
        let (events_tx, mut events_rx) = mpsc::channel(4);
        let mut lines = input.lines();

        self.render_question()?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        tracing::debug!("Input closed, leaving quiz");
                        break;
                    };
                    if self.handle_line(line.trim(), &events_tx)? == Flow::Quit {
                        break;
                    }
                }
                Some(event) = events_rx.recv() => match event {
                    QuizEvent::TransitionElapsed => self.on_transition_elapsed()?,
                },
            }
        }

        self.timer.cancel();
        Ok(())
    }

    fn handle_line(&mut self, line: &str, events: &mpsc::Sender<QuizEvent>) -> io::Result<Flow> {
        match line {
            "q" | "quit" => return Ok(Flow::Quit),
            "r" | "restart" if self.session.state() == QuizState::Complete => {
                tracing::info!("Restarting quiz");
                self.timer.cancel();
                self.session.restart();
                self.render_question()?;
                return Ok(Flow::Continue);
            }
            "b" | "back" => {
                if self.session.back() {
                    self.render_question()?;
                }
                return Ok(Flow::Continue);
            }
            _ => {}
        }

        if self.session.state() == QuizState::Complete {
            writeln!(self.output, "Enter r to take the quiz again or q to quit.")?;
            return Ok(Flow::Continue);
        }

        let Some(option) = line.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
            let available = self.session.current_question().map_or(0, |q| q.options.len());
            writeln!(self.output, "Please enter a number between 1 and {}.", available)?;
            return Ok(Flow::Continue);
        };

        match self.session.submit(option) {
            Ok(true) => self.timer.schedule(events.clone()),
            Ok(false) => {}
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn on_transition_elapsed(&mut self) -> io::Result<()> {
        match self.session.complete_transition() {
            Ok(None) => self.render_question(),
            Ok(Some(tags)) => self.render_results(&tags),
            Err(e) => {
                // The session has already released its guard, keep accepting input
                tracing::error!("Error processing answer: {}", e);
                Ok(())
            }
        }
    }

    fn render_question(&mut self) -> io::Result<()> {
        let Some(question) = self.session.current_question() else {
            return Ok(());
        };
        let (number, total) = self.session.progress();
        let filled = number * PROGRESS_WIDTH / total.max(1);

        writeln!(self.output)?;
        writeln!(self.output, "Question {} of {}", number, total)?;
        writeln!(
            self.output,
            "[{}{}]",
            "#".repeat(filled),
            "-".repeat(PROGRESS_WIDTH - filled)
        )?;
        writeln!(self.output, "{}", question.prompt)?;

        let selected = self.session.selected_option();
        for (index, option) in question.options.iter().enumerate() {
            let marker = if selected == Some(index) { '*' } else { ' ' };
            writeln!(self.output, "{} {}) {}", marker, index + 1, option.label)?;
        }

        if number > 1 {
            writeln!(self.output, "(b = back, q = quit)")?;
        } else {
            writeln!(self.output, "(q = quit)")?;
        }
        self.output.flush()
    }

    fn render_results(&mut self, tags: &[Tag]) -> io::Result<()> {
        tracing::info!("Quiz complete with {} tags", tags.len());
        let report = self.matcher.recommend(tags, self.result_count, &mut self.rng);
        write_report(&mut self.output, &report)?;
        self.output.flush()
    }
}

/// Render a match report the way the results screen shows it
pub fn write_report<W: Write>(output: &mut W, report: &MatchReport) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Your Perfect Matches!")?;
    writeln!(output, "Based on your interests, here are the RSOs we think you'll love:")?;

    for (index, recommendation) in report.recommendations.iter().enumerate() {
        let result = &recommendation.result;
        writeln!(output)?;
        writeln!(output, "{}. {}", index + 1, result.name())?;
        if !result.entry.description.is_empty() {
            writeln!(output, "   {}", result.entry.description)?;
        }
        writeln!(output, "   Why this matches you: {}", recommendation.explanation)?;
    }

    writeln!(output)?;
    writeln!(output, "Ready to Get Involved?")?;
    writeln!(
        output,
        "These clubs are just the beginning! Reach out to them, attend their events, \
         and find your community."
    )?;
    writeln!(output)?;
    writeln!(output, "Enter r to take the quiz again or q to quit.")
}
