//! hinshi 品詞抽出ライブラリー
//!
//! vibrato-rkyv（MeCab 互換辞書）で日本語テキストを形態素解析し、
//! 品詞を指定して表層形または基本形の語を取り出す

/// 解析器モジュール - 外部形態素解析器との境界と vibrato-rkyv 実装
pub mod analyzer;

/// 設定モジュール - HinshiConfig 等の設定構造体を定義
pub mod config;

/// 辞書モジュール - 形態素解析用辞書の管理・ロード機能を提供
pub mod dictionary;

/// エラーモジュール - HinshiError, HinshiResult等のエラー型を定義
pub mod errors;

/// データモデルモジュール - NodeWrapper, WordForm を定義
pub mod models;

/// パーサーモジュール - 解析結果のキャッシュと品詞による絞り込み
pub mod parser;

/// 再エクスポート
pub use analyzer::{AnalysisNode, MorphAnalyzer, VibratoAnalyzer};
pub use config::HinshiConfig;
pub use errors::{HinshiError, HinshiResult};
pub use models::{NodeWrapper, WordForm};
pub use parser::MecabParser;
