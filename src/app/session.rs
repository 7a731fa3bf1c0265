use crate::core::{Controller, Language};
use crate::ui::i18n::translations;
use crate::ui::render::render_view;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    SetLanguage(Language),
    Help,
    Quit,
    Unknown(String),
    Empty,
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Submit(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("q") | Some("quit") | Some("exit"), None) => Command::Quit,
        (Some("h") | Some("help"), None) => Command::Help,
        (Some("lang") | Some("language"), Some(code)) => match code.parse::<Language>() {
            Ok(language) => Command::SetLanguage(language),
            Err(_) => Command::Unknown(line.to_string()),
        },
        _ => Command::Unknown(line.to_string()),
    }
}

/// Interactive loop: read a line, update the controller, redraw.
pub struct Session {
    controller: Controller,
    width: usize,
}

impl Session {
    pub fn new(controller: Controller, width: usize) -> Self {
        Self { controller, width }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    fn draw<W: Write>(&self, output: &mut W) -> Result<()> {
        write!(output, "{}", render_view(self.controller.state(), self.width))?;
        output.flush()?;
        Ok(())
    }

    fn prompt<W: Write>(&self, output: &mut W) -> Result<()> {
        write!(output, "{} › ", translations(self.controller.state().language).placeholder)?;
        output.flush()?;
        Ok(())
    }

    pub async fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        self.draw(output)?;
        self.prompt(output)?;

        // Blocking reads: settle() has always returned before the next line is requested,
        // so no valuation task is waiting on this thread.
        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Command::Quit => break,
                Command::Empty => {}
                Command::Help => {
                    let t = translations(self.controller.state().language);
                    writeln!(output, "{}", t.commands_help)?;
                }
                Command::Unknown(cmd) => {
                    tracing::debug!("Unknown command: {}", cmd);
                    let t = translations(self.controller.state().language);
                    writeln!(output, "{} {}", t.unknown_command, t.commands_help)?;
                }
                Command::SetLanguage(language) => {
                    self.controller.set_language(language);
                    self.draw(output)?;
                }
                Command::Submit(domain) => {
                    if self.controller.submit(&domain).is_some() {
                        self.draw(output)?;
                        self.controller.settle().await;
                        self.draw(output)?;
                    }
                }
            }
            self.prompt(output)?;
        }

        writeln!(output)?;
        Ok(())
    }
}
