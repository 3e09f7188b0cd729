//! Console presentation: renders battle progress and scoreboards.

use std::sync::atomic::{AtomicU64, Ordering};

use colored::Colorize;
use gavel_application::CourtroomNotifier;
use gavel_domain::battle::entities::{Battle, InsightSheet};
use gavel_domain::heuristics::objection::{ObjectionKind, Ruling};
use gavel_domain::transcript::entities::{Speaker, Turn};
use gavel_domain::{Case, Category, StrategyProfile};

/// Human-readable band for a 0-100 strategy gauge
fn gauge_level(value: u8) -> &'static str {
    match value {
        75.. => "Very High",
        60..75 => "High",
        40..60 => "Moderate",
        25..40 => "Low",
        _ => "Very Low",
    }
}

/// Format elapsed seconds as mm:ss
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

pub struct ConsolePresenter {
    quiet: bool,
    elapsed: AtomicU64,
}

impl ConsolePresenter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            elapsed: AtomicU64::new(0),
        }
    }

    pub fn print_welcome(&self, case: &Case) {
        if self.quiet {
            return;
        }
        println!();
        println!("{}", format!("  {} ", case.title).bold().underline());
        println!("  {} | difficulty {}", case.case_type, case.difficulty);
        println!();
        println!("  {}: {}", "Issue".bold(), case.issue);
        println!("  {}: {}", "Facts".bold(), case.facts);
        println!("  {}: {}", "Your thesis".bold(), case.defense_thesis);
        println!();
        println!(
            "  Type your arguments. Commands: {}",
            "/help /scores /strategy /transcript /insights /finish /advance /case /quit".dimmed()
        );
        println!();
    }

    pub fn print_help(&self) {
        println!("  /help        show this help");
        println!("  /scores      show the scoreboard");
        println!("  /strategy    show the opposing counsel's strategy read");
        println!("  /transcript  replay the full transcript");
        println!("  /insights    synthesize strategic insights from the record");
        println!("  /finish      declare the examination finished");
        println!("  /advance     move to the next phase (when eligible)");
        println!("  /case        show the case file");
        println!("  /quit        close the battle and exit");
    }

    pub fn print_case(&self, case: &Case) {
        println!("  {}", case.title.bold());
        println!("  Issue: {}", case.issue);
        println!("  Facts: {}", case.facts);
        println!("  Statutes: {}", case.statutes);
        println!("  Burden of proof: {}", case.burden_of_proof);
        for item in &case.evidence {
            println!("  Evidence: {} - {}", item.name.bold(), item.content);
        }
        for precedent in &case.precedents {
            println!("  Precedent: {precedent}");
        }
    }

    pub fn print_scoreboard(&self, battle: &Battle) {
        let scores = battle.scores();
        println!();
        println!(
            "  {}  stage: {}  time: {}",
            "Scoreboard".bold(),
            battle.stage(),
            format_elapsed(self.elapsed.load(Ordering::Relaxed))
        );
        for category in Category::ALL {
            println!("    {:<15} {:>3}", category.to_string(), scores.get(category));
        }
        println!("    {:<15} {:>3}", "total", scores.total());
        let objections = battle.objections();
        println!(
            "    objections: {} raised, {} sustained",
            objections.raised(),
            objections.sustained()
        );
        println!();
    }

    pub fn print_strategy(&self, profile: &StrategyProfile) {
        println!();
        println!("  {}", "Opposing counsel reads as:".bold());
        println!(
            "    aggression  {:>3}  ({})",
            profile.aggression,
            gauge_level(profile.aggression)
        );
        println!(
            "    precedent   {:>3}  ({})",
            profile.precedent_use,
            gauge_level(profile.precedent_use)
        );
        println!(
            "    confidence  {:>3}  ({})",
            profile.confidence,
            gauge_level(profile.confidence)
        );
        println!();
    }

    pub fn print_transcript(&self, turns: &[Turn]) {
        println!();
        for turn in turns {
            self.print_turn(turn, true);
        }
        println!();
    }

    pub fn print_insights(&self, sheet: &InsightSheet) {
        println!();
        println!("  {}", "Strategic insights".bold());
        println!("  {}", sheet.insights.notes);
        for item in &sheet.insights.evidence {
            let kind = item.kind.as_deref().unwrap_or("evidence");
            println!("    [{}] {} - {}", kind, item.name.bold(), item.content);
            if let Some(relevance) = &item.relevance {
                println!("          {}", relevance.dimmed());
            }
        }
        for precedent in &sheet.insights.precedents {
            println!("    {} {}", "§".dimmed(), precedent);
        }
        println!();
    }

    fn print_turn(&self, turn: &Turn, include_user: bool) {
        match turn.speaker {
            Speaker::User => {
                if include_user {
                    println!("{} {}", "You:".green().bold(), turn.text);
                }
            }
            Speaker::Counsel => {
                println!();
                println!("{} {}", "Opposing Counsel:".red().bold(), turn.text);
                println!();
            }
            Speaker::Court => {
                println!("{}", turn.text.yellow());
            }
        }
    }
}

impl CourtroomNotifier for ConsolePresenter {
    fn on_turn(&self, turn: &Turn) {
        // The user's own line was just typed; echoing it back is noise.
        self.print_turn(turn, false);
    }

    fn on_objection(&self, kind: ObjectionKind, ruling: Ruling) {
        let verdict = match ruling {
            Ruling::Sustained => "sustained".green().bold(),
            Ruling::Overruled => "overruled".red().bold(),
        };
        println!("  {} objection {} - {}", "!".yellow(), kind, verdict);
    }

    fn on_advance_eligible(&self, _stage: gavel_domain::Stage) {
        println!(
            "{}",
            "  (The court will allow /advance to the next phase.)".dimmed()
        );
    }

    fn on_completed(&self, battle: &Battle) {
        if let Some(duration) = battle.duration_seconds() {
            println!(
                "{}",
                format!("  Final argument time: {}", format_elapsed(duration)).bold()
            );
        }
        self.print_scoreboard(battle);
    }

    fn on_elapsed(&self, seconds: u64) {
        self.elapsed.store(seconds, Ordering::Relaxed);
    }

    fn on_notice(&self, message: &str) {
        println!("  {}", message.yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_levels() {
        assert_eq!(gauge_level(90), "Very High");
        assert_eq!(gauge_level(75), "Very High");
        assert_eq!(gauge_level(60), "High");
        assert_eq!(gauge_level(45), "Moderate");
        assert_eq!(gauge_level(30), "Low");
        assert_eq!(gauge_level(10), "Very Low");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(61), "01:01");
        assert_eq!(format_elapsed(754), "12:34");
    }
}
