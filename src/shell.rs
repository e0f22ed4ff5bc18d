use std::io::{self, Write};

use anyhow::Result;
use colored::*;

use crate::ai_provider::SuggestionClient;
use crate::config::SuggestionConfig;
use crate::journal::MoodJournal;

/// The three reachable states of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LogMood,
    Suggest,
    Exit,
}

impl MenuChoice {
    /// Parse a raw menu line. `None` means reprompt, never terminate.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>() {
            Ok(1) => Some(MenuChoice::LogMood),
            Ok(2) => Some(MenuChoice::Suggest),
            Ok(3) => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Mood tiers for the message printed ahead of the suggestion. The
/// boundary is inclusive: exactly 7.0 is still "okay".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodTier {
    Low,
    Okay,
    Great,
}

impl MoodTier {
    pub fn from_average(average: f64) -> Self {
        if average <= 3.0 {
            MoodTier::Low
        } else if average <= 7.0 {
            MoodTier::Okay
        } else {
            MoodTier::Great
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            MoodTier::Low => "You seem to be feeling low. Here's a suggestion:",
            MoodTier::Okay => "You seem to be feeling okay. Here's a suggestion:",
            MoodTier::Great => "You're feeling great! Here's a suggestion:",
        }
    }
}

pub async fn run(config: SuggestionConfig) -> Result<()> {
    let mut shell = Shell::new(config);
    shell.run().await
}

pub struct Shell {
    journal: MoodJournal,
    client: SuggestionClient,
}

impl Shell {
    pub fn new(config: SuggestionConfig) -> Self {
        Shell {
            journal: MoodJournal::new(),
            client: SuggestionClient::new(config),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("{}", "Mood Journal".cyan().bold());

        loop {
            println!();
            println!("{}", "1. Log Mood".green());
            println!("{}", "2. Get Activity Suggestion".green());
            println!("{}", "3. Exit".green());
            print!("{}", "Choose an option: ".bold());
            io::stdout().flush()?;

            let mut input = String::new();
            match io::stdin().read_line(&mut input) {
                Ok(0) => {
                    // EOF (Ctrl+D)
                    println!("\n{}", "Goodbye!".cyan());
                    break;
                }
                Ok(_) => match MenuChoice::parse(&input) {
                    Some(MenuChoice::LogMood) => self.log_mood()?,
                    Some(MenuChoice::Suggest) => self.suggest_activity().await,
                    Some(MenuChoice::Exit) => {
                        println!("{}", "Goodbye!".cyan());
                        break;
                    }
                    None => {
                        println!("{}", "Invalid option. Try again.".red());
                    }
                },
                Err(e) => {
                    println!("{}: {}", "Input error".red().bold(), e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Prompt for a score and record it. Bad input prints a message and
    /// leaves the journal untouched.
    fn log_mood(&mut self) -> Result<()> {
        print!("Enter your mood (1-10, 1=very low, 10=very high): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let score = input
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(MoodJournal::validate_score);

        match score {
            Some(score) => {
                let timestamp = self.journal.log_now(score);
                println!("Mood logged: {} at {}", score.to_string().bold(), timestamp);
            }
            None => {
                println!(
                    "{}",
                    "Invalid input. Please enter a number between 1 and 10.".red()
                );
            }
        }

        Ok(())
    }

    /// Average the recent entries, print the tier message, then fetch and
    /// print the suggestion (or its error text).
    async fn suggest_activity(&self) {
        let average = match self.journal.recent_average() {
            Some(average) => average,
            None => {
                println!(
                    "{}",
                    "No mood data available. Please log your mood first.".yellow()
                );
                return;
            }
        };

        println!("Average recent mood: {}", format!("{}", average).bold());
        println!("{}", MoodTier::from_average(average).message());

        let suggestion = self.client.suggestion_text(average).await;
        println!("{}", suggestion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::LogMood));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::Suggest));
        assert_eq!(MenuChoice::parse("3\n"), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_menu_parse_invalid() {
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("abc"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("-1"), None);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(MoodTier::from_average(3.0), MoodTier::Low);
        assert_eq!(MoodTier::from_average(3.1), MoodTier::Okay);
        assert_eq!(MoodTier::from_average(7.0), MoodTier::Okay);
        assert_eq!(MoodTier::from_average(7.1), MoodTier::Great);
    }

    #[test]
    fn test_tier_extremes() {
        assert_eq!(MoodTier::from_average(1.0), MoodTier::Low);
        assert_eq!(MoodTier::from_average(10.0), MoodTier::Great);
    }

    #[test]
    fn test_tier_messages() {
        assert!(MoodTier::Low.message().contains("feeling low"));
        assert!(MoodTier::Okay.message().contains("feeling okay"));
        assert!(MoodTier::Great.message().contains("feeling great!"));
    }
}
