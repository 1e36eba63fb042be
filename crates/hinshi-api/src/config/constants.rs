//! API設定の定数定義

/// 入力テキストの最大長（バイト単位）
///
/// 10MB までのテキストを許可する。
pub const MAX_TEXT_LENGTH: usize = 10_000_000;

/// リクエストボディの最大長（バイト単位）
///
/// JSON のエスケープ（`\n`、`\"` 等）で本文が膨らんでも
/// `MAX_TEXT_LENGTH` までのテキストがハンドラーに届くよう 2 倍を確保する。
/// これを超えると axum が 413 を返す。
pub const MAX_BODY_SIZE: usize = MAX_TEXT_LENGTH * 2;

/// デフォルトのバインドアドレス
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5530";

/// デフォルトの辞書プリセット名
///
/// ノードの素性は IPADIC の並び（品詞, 品詞細分類1〜3, 活用型, 活用形, 基本形, 読み, 発音）
/// として分解するため、IPADIC を既定とする。
pub const DEFAULT_PRESET_DICT: &str = "ipadic";
