//! Interactive question/answer setup
//!
//! Used when the binary starts without arguments. Prompts are read from any
//! `BufRead` and written to any `Write` so the flow can be driven from tests.

use crate::config::{Config, DelayRange};
use std::io::{self, BufRead, Write};

/// Settings gathered from the prompts
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveSettings {
    pub query: String,
    pub num_results: usize,
    pub output_path: String,
    pub delay: DelayRange,
}

/// Parses the delay answer
///
/// Blank selects `default`, `a-b` is a range, and a single number is a fixed
/// delay.
///
/// # Examples
///
/// ```
/// use mailsweep::config::DelayRange;
/// use mailsweep::interactive::parse_delay_input;
///
/// let default = DelayRange::default();
/// assert_eq!(parse_delay_input("", default), Ok(default));
/// assert_eq!(parse_delay_input("2", default), Ok(DelayRange::fixed(2.0).unwrap()));
/// assert_eq!(parse_delay_input("1-4", default), Ok(DelayRange::new(1.0, 4.0).unwrap()));
/// assert!(parse_delay_input("fast", default).is_err());
/// ```
pub fn parse_delay_input(input: &str, default: DelayRange) -> Result<DelayRange, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }

    let range = match input.split_once('-') {
        Some((min, max)) => {
            let min = parse_seconds(min)?;
            let max = parse_seconds(max)?;
            DelayRange::new(min, max)
        }
        None => DelayRange::fixed(parse_seconds(input)?),
    };

    range.map_err(|e| e.to_string())
}

fn parse_seconds(value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", value.trim()))
}

/// Parses the result count answer; blank selects `default`
pub fn parse_result_count(input: &str, default: usize) -> Result<usize, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }

    let count: i64 = input
        .parse()
        .map_err(|_| "Please enter a valid number.".to_string())?;

    if count <= 0 {
        return Err("Please enter a positive number.".to_string());
    }

    usize::try_from(count).map_err(|_| "Please enter a valid number.".to_string())
}

/// Returns true for a `y`/`yes` answer in any case
pub fn is_confirmation(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Interactive prompt session over a reader and a writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt` and reads one answer line
    ///
    /// Returns `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Runs the full prompt flow
    ///
    /// # Returns
    ///
    /// * `Ok(Some(settings))` - The user confirmed the configuration
    /// * `Ok(None)` - The user declined, or input ended early
    /// * `Err(io::Error)` - Reading or writing the terminal failed
    pub fn run(&mut self, defaults: &Config) -> io::Result<Option<InteractiveSettings>> {
        self.print_banner()?;

        let query = loop {
            let Some(answer) = self.ask("Enter your search query: ")? else {
                return Ok(None);
            };
            if !answer.is_empty() {
                break answer;
            }
            self.say("Please enter a valid search query.")?;
        };

        let results_prompt = format!(
            "Number of search results to process (default: {}): ",
            defaults.crawl.results
        );
        let num_results = loop {
            let Some(answer) = self.ask(&results_prompt)? else {
                return Ok(None);
            };
            match parse_result_count(&answer, defaults.crawl.results) {
                Ok(count) => break count,
                Err(message) => self.say(&message)?,
            }
        };

        let output_prompt = format!("Output filename (default: {}): ", defaults.output.path);
        let Some(answer) = self.ask(&output_prompt)? else {
            return Ok(None);
        };
        let output_path = if answer.is_empty() {
            defaults.output.path.clone()
        } else {
            answer
        };

        let default_delay = defaults.crawl.delay_range().unwrap_or_default();
        let delay_prompt = format!(
            "Delay between requests in seconds (default: {}-{}): ",
            default_delay.min(),
            default_delay.max()
        );
        let delay = loop {
            let Some(answer) = self.ask(&delay_prompt)? else {
                return Ok(None);
            };
            match parse_delay_input(&answer, default_delay) {
                Ok(delay) => break delay,
                Err(_) => self.say("Please enter a valid delay (e.g., '2' or '1-3').")?,
            }
        };

        let settings = InteractiveSettings {
            query,
            num_results,
            output_path,
            delay,
        };
        self.print_configuration(&settings)?;

        let Some(answer) = self.ask("Start email collection? (y/n): ")? else {
            return Ok(None);
        };
        if !is_confirmation(&answer) {
            return Ok(None);
        }

        Ok(Some(settings))
    }

    fn print_banner(&mut self) -> io::Result<()> {
        let rule = "=".repeat(50);
        self.say(&rule)?;
        self.say("EMAIL COLLECTOR - INTERACTIVE MODE")?;
        self.say(&rule)?;
        self.say("This tool helps you collect email addresses from web search results.")?;
        self.say("Note: Please use responsibly and respect website terms of service.\n")
    }

    fn print_configuration(&mut self, settings: &InteractiveSettings) -> io::Result<()> {
        let rule = "=".repeat(30);
        self.say(&format!("\n{}", rule))?;
        self.say("SEARCH CONFIGURATION:")?;
        self.say(&format!("Query: {}", settings.query))?;
        self.say(&format!("Results: {}", settings.num_results))?;
        self.say(&format!("Output: {}", settings.output_path))?;
        self.say(&format!("Delay: {} seconds", settings.delay))?;
        self.say(&format!("{}\n", rule))
    }
}
