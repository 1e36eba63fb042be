//! hinshi crate example
//!
//! Dumps the analysis of a sample sentence, then extracts nouns, verbs and
//! particles in surface and base form.

use std::collections::HashSet;

use hinshi::config::HinshiConfig;
use hinshi::models::WordForm;
use hinshi::parser::MecabParser;
use hinshi::VibratoAnalyzer;

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
  let config = HinshiConfig::default();

  // RUST_LOG wins if set, otherwise the configured level
  tracing_subscriber::fmt().with_env_filter(config.env_filter()).with_target(true).init();

  // Load the dictionary once and share the analyzer across parsers
  let analyzer = VibratoAnalyzer::from_config(&config)?;

  let parser = MecabParser::new("MeCabで遊んでみよう！", analyzer.clone());
  println!("== dump ==");
  parser.dump()?;

  let pos_set: HashSet<&str> = ["名詞", "動詞", "助詞"].into_iter().collect();

  println!("\n== surface ==");
  for word in parser.find_words_by_pos(&pos_set)? {
    println!("{word}");
  }

  println!("\n== base ==");
  for word in parser.find_words_by_pos_with(&pos_set, WordForm::Base)? {
    println!("{word}");
  }

  // A second document reuses the same dictionary
  let other = MecabParser::new("東京タワーは東京の観光名所です", analyzer);
  println!("\n== all words ==");
  println!("{:?}", other.words()?);

  Ok(())
}
