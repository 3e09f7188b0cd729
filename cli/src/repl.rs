//! Interactive courtroom REPL.

use std::sync::Arc;

use anyhow::Result;
use gavel_application::BattleEngine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::presenter::ConsolePresenter;

pub struct CourtRepl {
    engine: BattleEngine,
    presenter: Arc<ConsolePresenter>,
}

impl CourtRepl {
    pub fn new(engine: BattleEngine, presenter: Arc<ConsolePresenter>) -> Self {
        Self { engine, presenter }
    }

    pub async fn run(&self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("gavel").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        loop {
            match rl.readline("counsel> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        if self.handle_command(line).await? {
                            break;
                        }
                    } else {
                        self.engine.submit_argument(line).await?;
                    }

                    if self.engine.battle().await.is_completed() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Court is adjourned.");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {err:?}");
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }
        Ok(())
    }

    /// Returns true when the REPL should exit.
    async fn handle_command(&self, line: &str) -> Result<bool> {
        match line {
            "/help" => self.presenter.print_help(),
            "/scores" => {
                let battle = self.engine.battle().await;
                self.presenter.print_scoreboard(&battle);
            }
            "/strategy" => {
                let profile = self.engine.strategy().await;
                self.presenter.print_strategy(&profile);
            }
            "/transcript" => {
                let transcript = self.engine.transcript().await;
                self.presenter.print_transcript(&transcript);
            }
            "/insights" => {
                if self.engine.synthesize_insights().await? {
                    let battle = self.engine.battle().await;
                    if let Some(sheet) = battle.insights() {
                        self.presenter.print_insights(sheet);
                    }
                }
            }
            "/finish" => self.engine.finish_examination().await?,
            "/advance" => {
                self.engine.advance_stage().await?;
            }
            "/case" => self.presenter.print_case(self.engine.case()),
            "/quit" | "/exit" => {
                self.engine.close().await?;
                return Ok(true);
            }
            other => println!("Unknown command: {other}. Try /help."),
        }
        Ok(false)
    }
}
