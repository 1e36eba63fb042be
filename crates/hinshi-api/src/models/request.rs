//! リクエストモデル定義

use serde::Deserialize;

/// 品詞による語の抽出リクエスト
#[derive(Debug, Deserialize)]
pub struct WordsRequest {
  /// 解析対象のテキスト
  pub text: String,
  /// 抽出する品詞（空なら全品詞）
  #[serde(default)]
  pub pos: Vec<String>,
  /// 基本形で返すかどうか（基本形が `*` の語は表層形）
  #[serde(default)]
  pub use_base_form: bool,
}

/// 解析結果ノード一覧のリクエスト
#[derive(Debug, Deserialize)]
pub struct NodesRequest {
  /// 解析対象のテキスト
  pub text: String,
}
