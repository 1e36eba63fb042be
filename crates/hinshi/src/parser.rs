// crates/hinshi/src/parser.rs

//! MecabParser: 1 文書分の解析結果をキャッシュし、品詞で語を取り出す。
//!
//! 最初の問い合わせで解析器を 1 回だけ呼び出し、境界ノードを除いた
//! `NodeWrapper` 列を保持する。以降の問い合わせはすべてこのキャッシュを使う。
//!
//! # スレッド安全性
//!
//! キャッシュは `std::cell::OnceCell` なので `MecabParser` は `Sync` ではない。
//! 複数スレッドから使う場合は呼び出し側で排他するか、スレッドごとに構築すること。

use std::borrow::Borrow;
use std::cell::OnceCell;
use std::collections::HashSet;
use std::hash::Hash;
use std::io::{self, Write};

use tracing::debug;

use crate::analyzer::{MorphAnalyzer, VibratoAnalyzer};
use crate::config::HinshiConfig;
use crate::errors::HinshiResult;
use crate::models::{NodeWrapper, WordForm};

/// 文書 1 件分の形態素解析結果を扱うパーサー
pub struct MecabParser<A = VibratoAnalyzer> {
  /// 解析対象の文書
  doc: String,

  /// 形態素解析器
  analyzer: A,

  /// 境界ノードを除いた解析結果（未設定 = 未解析）
  cache: OnceCell<Vec<NodeWrapper>>,
}

impl MecabParser<VibratoAnalyzer> {
  /// 設定から解析器を構築してパーサーを作る
  ///
  /// 複数の文書を扱う場合は `VibratoAnalyzer::from_config` を 1 回だけ呼び、
  /// `MecabParser::new` に clone を渡す方が辞書ロードが 1 回で済む。
  ///
  /// # Errors
  /// - 設定が不正
  /// - 辞書のダウンロード・ロード失敗
  pub fn from_config(doc: impl Into<String>, config: &HinshiConfig) -> HinshiResult<Self> {
    let analyzer = VibratoAnalyzer::from_config(config)?;
    Ok(Self::new(doc, analyzer))
  }
}

impl<A: MorphAnalyzer> MecabParser<A> {
  /// 文書と解析器からパーサーを作る（この時点では解析しない）
  pub fn new(doc: impl Into<String>, analyzer: A) -> Self {
    Self {
      doc: doc.into(),
      analyzer,
      cache: OnceCell::new(),
    }
  }

  /// 解析対象の文書
  pub fn document(&self) -> &str {
    &self.doc
  }

  /// 解析済みかどうか
  pub fn is_populated(&self) -> bool {
    self.cache.get().is_some()
  }

  /// 解析結果（境界ノードを除く）
  ///
  /// 未解析なら解析器を呼び出してキャッシュする。失敗した場合は何も保存しないので、
  /// 次の呼び出しで再度解析が試みられる。
  ///
  /// # Errors
  /// - 解析器の呼び出し失敗
  /// - 素性文字列のフィールド不足
  pub fn nodes(&self) -> HinshiResult<&[NodeWrapper]> {
    if let Some(nodes) = self.cache.get() {
      return Ok(nodes);
    }

    let nodes = self.analyze()?;
    Ok(self.cache.get_or_init(|| nodes))
  }

  fn analyze(&self) -> HinshiResult<Vec<NodeWrapper>> {
    let analyzed = self.analyzer.parse_to_nodes(&self.doc)?;
    let total = analyzed.len();

    let nodes = analyzed
      .iter()
      .filter(|node| !node.is_boundary())
      .map(NodeWrapper::from_node)
      .collect::<Result<Vec<_>, _>>()?;

    debug!(
      doc_len = self.doc.len(),
      total_nodes = total,
      cached_nodes = nodes.len(),
      "Node cache populated"
    );

    Ok(nodes)
  }

  /// 解析結果を標準出力に 1 ノード 1 行で書き出す
  ///
  /// # Errors
  /// 解析失敗、または出力失敗
  pub fn dump(&self) -> HinshiResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    self.dump_to(&mut out)
  }

  /// 解析結果を任意の出力先に 1 ノード 1 行で書き出す
  ///
  /// 各行は 表層形, 品詞, 品詞細分類1〜3, 活用型, 活用形, 基本形 の 8 フィールド。
  ///
  /// # Errors
  /// 解析失敗、または出力失敗
  pub fn dump_to<W: Write>(&self, out: &mut W) -> HinshiResult<()> {
    for node in self.nodes()? {
      writeln!(out, "{node}")?;
    }
    Ok(())
  }

  /// 品詞で絞り込んだ語を表層形で返す
  ///
  /// `pos_set` が空なら全ノードを対象にする。
  ///
  /// # Errors
  /// 解析失敗
  pub fn find_words_by_pos<S>(&self, pos_set: &HashSet<S>) -> HinshiResult<Vec<String>>
  where
    S: Borrow<str> + Hash + Eq,
  {
    self.find_words_by_pos_with(pos_set, WordForm::Surface)
  }

  /// 品詞で絞り込んだ語を指定された形で返す
  ///
  /// - `pos_set` が空なら全ノード、そうでなければ `pos` が集合に含まれるノード
  /// - `WordForm::Base` の場合、基本形が `*` のノードは表層形で代用する
  /// - 元の順序を保ち、重複も除かない
  ///
  /// # Errors
  /// 解析失敗
  pub fn find_words_by_pos_with<S>(
    &self,
    pos_set: &HashSet<S>,
    form: WordForm,
  ) -> HinshiResult<Vec<String>>
  where
    S: Borrow<str> + Hash + Eq,
  {
    let words = self
      .nodes()?
      .iter()
      .filter(|node| pos_set.is_empty() || pos_set.contains(node.pos.as_str()))
      .map(|node| node.word(form).to_string())
      .collect();

    Ok(words)
  }

  /// 全ノードの表層形
  ///
  /// # Errors
  /// 解析失敗
  pub fn words(&self) -> HinshiResult<Vec<String>> {
    self.find_words_by_pos_with(&HashSet::<&str>::new(), WordForm::Surface)
  }
}

impl<A> std::fmt::Debug for MecabParser<A> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("MecabParser")
      .field("doc", &self.doc)
      .field("cached_nodes", &self.cache.get().map(Vec::len))
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::Cell;

  use crate::analyzer::AnalysisNode;
  use crate::errors::{AnalysisError, HinshiError};

  const DOC: &str = "MeCabで遊んでみよう！";

  /// IPADIC で `MeCabで遊んでみよう！` を解析した結果を返すスタブ
  struct StubAnalyzer {
    calls: Cell<usize>,
  }

  impl StubAnalyzer {
    fn new() -> Self {
      Self { calls: Cell::new(0) }
    }
  }

  impl MorphAnalyzer for StubAnalyzer {
    fn parse_to_nodes(&self, _text: &str) -> Result<Vec<AnalysisNode>, AnalysisError> {
      self.calls.set(self.calls.get() + 1);
      Ok(vec![
        AnalysisNode::boundary(),
        AnalysisNode::new("MeCab", "名詞,固有名詞,組織,*,*,*,*"),
        AnalysisNode::new("で", "助詞,格助詞,一般,*,*,*,で,デ,デ"),
        AnalysisNode::new(
          "遊ん",
          "動詞,自立,*,*,五段・バ行,連用タ接続,遊ぶ,アソン,アソン",
        ),
        AnalysisNode::new("で", "助詞,接続助詞,*,*,*,*,で,デ,デ"),
        AnalysisNode::new("みよ", "動詞,非自立,*,*,一段,未然ウ接続,みる,ミヨ,ミヨ"),
        AnalysisNode::new("う", "助動詞,*,*,*,不変化型,基本形,う,ウ,ウ"),
        AnalysisNode::new("！", "記号,一般,*,*,*,*,！,！,！"),
        AnalysisNode::boundary(),
      ])
    }
  }

  /// 固定のノード列を返すスタブ
  struct FixedAnalyzer(Vec<AnalysisNode>);

  impl MorphAnalyzer for FixedAnalyzer {
    fn parse_to_nodes(&self, _text: &str) -> Result<Vec<AnalysisNode>, AnalysisError> {
      Ok(self.0.clone())
    }
  }

  /// 最初の n 回だけ失敗するスタブ
  struct FlakyAnalyzer {
    failures_left: Cell<usize>,
  }

  impl MorphAnalyzer for FlakyAnalyzer {
    fn parse_to_nodes(&self, text: &str) -> Result<Vec<AnalysisNode>, AnalysisError> {
      if self.failures_left.get() > 0 {
        self.failures_left.set(self.failures_left.get() - 1);
        return Err(AnalysisError::InvalidInput {
          reason: "unavailable".to_string(),
        });
      }
      Ok(vec![
        AnalysisNode::boundary(),
        AnalysisNode::new(text, "名詞,一般,*,*,*,*,*"),
        AnalysisNode::boundary(),
      ])
    }
  }

  fn set<'a>(items: &[&'a str]) -> HashSet<&'a str> {
    items.iter().copied().collect()
  }

  // ─── find_words_by_pos ────────────────────────────────────────────────

  #[test]
  fn nouns_surface() {
    let parser = MecabParser::new(DOC, StubAnalyzer::new());
    let words = parser.find_words_by_pos(&set(&["名詞"])).unwrap();
    assert_eq!(words, vec!["MeCab"]);
  }

  #[test]
  fn nouns_and_verbs_surface() {
    let parser = MecabParser::new(DOC, StubAnalyzer::new());
    let words = parser.find_words_by_pos(&set(&["名詞", "動詞"])).unwrap();
    assert_eq!(words, vec!["MeCab", "遊ん", "みよ"]);
  }

  #[test]
  fn nouns_and_verbs_base_form() {
    let parser = MecabParser::new(DOC, StubAnalyzer::new());
    let words = parser.find_words_by_pos_with(&set(&["名詞", "動詞"]), WordForm::Base).unwrap();
    assert_eq!(words, vec!["MeCab", "遊ぶ", "みる"]);
  }

  #[test]
  fn empty_pos_set_selects_all() {
    let parser = MecabParser::new(DOC, StubAnalyzer::new());
    let words = parser.find_words_by_pos(&set(&[])).unwrap();
    assert_eq!(words, vec!["MeCab", "で", "遊ん", "で", "みよ", "う", "！"]);
    assert_eq!(parser.words().unwrap(), words);
  }

  /// 重複は除かれない
  #[test]
  fn duplicates_are_preserved() {
    let parser = MecabParser::new(DOC, StubAnalyzer::new());
    let words = parser.find_words_by_pos(&set(&["助詞"])).unwrap();
    assert_eq!(words, vec!["で", "で"]);
  }

  #[test]
  fn unknown_pos_yields_nothing() {
    let parser = MecabParser::new(DOC, StubAnalyzer::new());
    let words = parser.find_words_by_pos(&set(&["形容詞"])).unwrap();
    assert!(words.is_empty());
  }

  #[test]
  fn accepts_owned_string_set() {
    let parser = MecabParser::new(DOC, StubAnalyzer::new());
    let pos_set: HashSet<String> = ["記号".to_string()].into_iter().collect();
    assert_eq!(parser.find_words_by_pos(&pos_set).unwrap(), vec!["！"]);
  }

  #[test]
  fn base_form_never_emits_sentinel() {
    let parser = MecabParser::new(DOC, StubAnalyzer::new());
    let words = parser.find_words_by_pos_with(&set(&[]), WordForm::Base).unwrap();

    assert!(!words.iter().any(|w| w == "*"));
    assert_eq!(words, vec!["MeCab", "で", "遊ぶ", "で", "みる", "う", "！"]);
  }

  // ─── cache ────────────────────────────────────────────────────────────

  #[test]
  fn analyzer_is_called_once() {
    let parser = MecabParser::new(DOC, StubAnalyzer::new());
    assert!(!parser.is_populated());

    let first = parser.find_words_by_pos(&set(&["名詞"])).unwrap();
    let second = parser.find_words_by_pos(&set(&["名詞"])).unwrap();
    parser.dump_to(&mut Vec::new()).unwrap();

    assert_eq!(first, second);
    assert!(parser.is_populated());
    assert_eq!(parser.analyzer.calls.get(), 1);
  }

  #[test]
  fn boundary_nodes_are_excluded() {
    let analyzer = StubAnalyzer::new();
    let total = analyzer.parse_to_nodes(DOC).unwrap().len();

    let parser = MecabParser::new(DOC, &analyzer);
    let nodes = parser.nodes().unwrap();

    assert_eq!(nodes.len(), total - 2);
    assert!(nodes.iter().all(|n| n.pos != "BOS/EOS"));
  }

  #[test]
  fn zero_tokens_populates_empty_cache() {
    let parser = MecabParser::new(
      " ",
      FixedAnalyzer(vec![AnalysisNode::boundary(), AnalysisNode::boundary()]),
    );

    assert!(parser.nodes().unwrap().is_empty());
    assert!(parser.is_populated());
    assert!(parser.words().unwrap().is_empty());
  }

  #[test]
  fn failure_does_not_populate_cache() {
    let parser = MecabParser::new(
      "猫",
      FlakyAnalyzer {
        failures_left: Cell::new(1),
      },
    );

    let err = parser.words().unwrap_err();
    assert!(matches!(err, HinshiError::Analysis(_)));
    assert!(!parser.is_populated());

    // 再試行で解析される
    assert_eq!(parser.words().unwrap(), vec!["猫"]);
    assert!(parser.is_populated());
  }

  #[test]
  fn malformed_feature_fails_without_partial_cache() {
    let parser = MecabParser::new(
      "東京",
      FixedAnalyzer(vec![
        AnalysisNode::boundary(),
        AnalysisNode::new("東", "名詞,一般,*,*,*,*,東,ヒガシ,ヒガシ"),
        AnalysisNode::new("京", "名詞,一般"),
        AnalysisNode::boundary(),
      ]),
    );

    let err = parser.find_words_by_pos(&set(&[])).unwrap_err();
    match err {
      HinshiError::Malformed(e) => {
        assert_eq!(e.surface, "京");
        assert_eq!(e.field_count, 2);
      }
      other => panic!("expected Malformed error, got {other:?}"),
    }
    assert!(!parser.is_populated());
  }

  // ─── dump ─────────────────────────────────────────────────────────────

  #[test]
  fn dump_writes_one_line_per_node() {
    let parser = MecabParser::new(DOC, StubAnalyzer::new());
    let mut out = Vec::new();
    parser.dump_to(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "MeCab, 名詞, 固有名詞, 組織, *, *, *, *");
    assert_eq!(
      lines[2],
      "遊ん, 動詞, 自立, *, *, 五段・バ行, 連用タ接続, 遊ぶ"
    );
  }

  #[test]
  fn document_is_kept() {
    let parser = MecabParser::new(DOC, StubAnalyzer::new());
    assert_eq!(parser.document(), DOC);
    assert!(format!("{parser:?}").contains("cached_nodes: None"));
  }

  #[test]
  fn from_config_fails_before_analysis_when_dictionary_is_missing() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let mut config = HinshiConfig::default();
    config.dictionary.path = Some(temp_dir.path().join("missing.dic"));

    let err = MecabParser::from_config(DOC, &config)
      .err()
      .expect("missing dictionary file must fail");

    assert!(
      matches!(
        err,
        HinshiError::Config(crate::errors::ConfigError::DictionaryFileNotFound { .. })
      ),
      "unexpected error: {err:?}"
    );
  }
}
