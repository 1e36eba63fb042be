//! 解析ノードを名前付きフィールドに分解したレコード

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analyzer::AnalysisNode;
use crate::errors::MalformedAnalysisError;

/// 基本形が得られなかったことを表す記号（助詞・記号・未知語など）
pub const UNKNOWN_FIELD: &str = "*";

/// 素性文字列に最低限必要なフィールド数（品詞〜基本形）
pub const REQUIRED_FEATURE_FIELDS: usize = 7;

/// Constants for feature array indices
///
/// Position of each field in the feature array of MeCab/IPAdic dictionary format
const IDX_POS: usize = 0;
const IDX_POS_DETAIL1: usize = 1;
const IDX_POS_DETAIL2: usize = 2;
const IDX_POS_DETAIL3: usize = 3;
const IDX_CONJ_FORM: usize = 4;
const IDX_CONJ_TYPE: usize = 5;
const IDX_BASE: usize = 6;
const IDX_READ: usize = 7;
const IDX_PRON: usize = 8;

/// 取り出す語の形
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordForm {
  /// 表層形（入力テキスト上の文字列そのまま）
  #[default]
  Surface,
  /// 基本形。基本形が `*` の語は表層形で代用する
  Base,
}

impl WordForm {
  /// `use_base_form` フラグから変換する
  pub fn from_use_base_form(use_base_form: bool) -> Self {
    if use_base_form { WordForm::Base } else { WordForm::Surface }
  }
}

/// 1 ノード分の解析結果
///
/// | フィールド    | 意味          |
/// |---------------|---------------|
/// | `surface`     | 表層形        |
/// | `pos`         | 品詞          |
/// | `pos_detail1` | 品詞細分類1   |
/// | `pos_detail2` | 品詞細分類2   |
/// | `pos_detail3` | 品詞細分類3   |
/// | `conj_form`   | 活用型        |
/// | `conj_type`   | 活用形        |
/// | `base`        | 基本形        |
/// | `read`        | 読み（あれば）|
/// | `pron`        | 発音（あれば）|
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeWrapper {
  /// 表層形
  pub surface: String,
  /// 品詞
  pub pos: String,
  /// 品詞細分類1
  pub pos_detail1: String,
  /// 品詞細分類2
  pub pos_detail2: String,
  /// 品詞細分類3
  pub pos_detail3: String,
  /// 活用型
  pub conj_form: String,
  /// 活用形
  pub conj_type: String,
  /// 基本形（不明な場合は `*`）
  pub base: String,
  /// 読み
  #[serde(skip_serializing_if = "Option::is_none")]
  pub read: Option<String>,
  /// 発音
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pron: Option<String>,
}

impl NodeWrapper {
  /// 解析ノードから構築する
  ///
  /// # Errors
  /// 素性文字列のフィールドが 7 未満の場合 `MalformedAnalysisError`
  pub fn from_node(node: &AnalysisNode) -> Result<Self, MalformedAnalysisError> {
    Self::from_parts(&node.surface, &node.feature)
  }

  /// 表層形と素性文字列から構築する
  ///
  /// # Errors
  /// 素性文字列のフィールドが 7 未満の場合 `MalformedAnalysisError`
  pub fn from_parts(surface: &str, feature: &str) -> Result<Self, MalformedAnalysisError> {
    let parts: Vec<&str> = feature.split(',').collect();

    if parts.len() < REQUIRED_FEATURE_FIELDS {
      return Err(MalformedAnalysisError {
        surface: surface.to_string(),
        feature: feature.to_string(),
        field_count: parts.len(),
        required: REQUIRED_FEATURE_FIELDS,
      });
    }

    let field = |idx: usize| parts[idx].to_string();
    let optional = |idx: usize| parts.get(idx).map(|s| (*s).to_string());

    Ok(Self {
      surface: surface.to_string(),
      pos: field(IDX_POS),
      pos_detail1: field(IDX_POS_DETAIL1),
      pos_detail2: field(IDX_POS_DETAIL2),
      pos_detail3: field(IDX_POS_DETAIL3),
      conj_form: field(IDX_CONJ_FORM),
      conj_type: field(IDX_CONJ_TYPE),
      base: field(IDX_BASE),
      read: optional(IDX_READ),
      pron: optional(IDX_PRON),
    })
  }

  /// 基本形。`*` の場合は表層形
  pub fn lemma(&self) -> &str {
    if self.base == UNKNOWN_FIELD { &self.surface } else { &self.base }
  }

  /// 指定された形の語
  pub fn word(&self, form: WordForm) -> &str {
    match form {
      WordForm::Surface => &self.surface,
      WordForm::Base => self.lemma(),
    }
  }
}

/// dump 用の 1 行（表層形〜基本形の 8 フィールド）
impl fmt::Display for NodeWrapper {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}, {}, {}, {}, {}, {}, {}, {}",
      self.surface,
      self.pos,
      self.pos_detail1,
      self.pos_detail2,
      self.pos_detail3,
      self.conj_form,
      self.conj_type,
      self.base
    )
  }
}
