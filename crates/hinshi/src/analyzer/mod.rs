//! analyzer モジュール
//!
//! 形態素解析器そのものは外部コンポーネントとして扱い、このモジュールは
//! 「テキストを渡すとノード列が返ってくる」という境界だけを定義する。
//!
//! ノード列は MeCab の `parseToNode` と同じ形をとる：
//! 先頭と末尾に素性の先頭フィールドが `BOS/EOS` の境界ノードが 1 つずつ付く。
//!
//! Rust の `&str` は UTF-8 であり、解析器も UTF-8 で入出力するため、
//! 呼び出し境界での文字コード変換は存在しない。

use std::sync::Arc;

use crate::errors::AnalysisError;

pub mod vibrato_analyzer;

/// 再エクスポート
pub use vibrato_analyzer::VibratoAnalyzer;

/// 境界ノード（文頭・文末）の品詞フィールド
pub const BOS_EOS: &str = "BOS/EOS";

/// 境界ノードに付与する素性文字列（MeCab と同じ 9 フィールド）
pub const BOS_EOS_FEATURE: &str = "BOS/EOS,*,*,*,*,*,*,*,*";

/// 解析器が返す 1 ノード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisNode {
  /// 表層形
  pub surface: String,
  /// カンマ区切りの素性文字列
  pub feature: String,
}

impl AnalysisNode {
  /// 表層形と素性文字列からノードを作る
  pub fn new(surface: impl Into<String>, feature: impl Into<String>) -> Self {
    Self {
      surface: surface.into(),
      feature: feature.into(),
    }
  }

  /// 境界ノードを作る
  pub fn boundary() -> Self {
    Self::new("", BOS_EOS_FEATURE)
  }

  /// 素性文字列の先頭フィールド（品詞）
  pub fn pos(&self) -> &str {
    self.feature.split(',').next().unwrap_or_default()
  }

  /// 境界ノードかどうか
  pub fn is_boundary(&self) -> bool {
    self.pos() == BOS_EOS
  }
}

/// 形態素解析器の共通インターフェース
///
/// 本番実装は `VibratoAnalyzer`。テストではスタブに差し替える。
pub trait MorphAnalyzer {
  /// テキストを解析し、境界ノードを含むノード列を先頭から順に返す
  ///
  /// # Errors
  /// - 入力が不正（空文字列など）
  /// - 辞書が利用できない
  fn parse_to_nodes(&self, text: &str) -> Result<Vec<AnalysisNode>, AnalysisError>;
}

impl<A: MorphAnalyzer + ?Sized> MorphAnalyzer for &A {
  fn parse_to_nodes(&self, text: &str) -> Result<Vec<AnalysisNode>, AnalysisError> {
    (**self).parse_to_nodes(text)
  }
}

impl<A: MorphAnalyzer + ?Sized> MorphAnalyzer for Arc<A> {
  fn parse_to_nodes(&self, text: &str) -> Result<Vec<AnalysisNode>, AnalysisError> {
    (**self).parse_to_nodes(text)
  }
}
