use std::path::PathBuf;

// サイズ表の1エントリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub filename: &'static str,
    pub size: u32,  // 正方形の辺の長さ（px）
}

impl IconSpec {
    pub const fn new(filename: &'static str, size: u32) -> Self {
        Self { filename, size }
    }
}

/// 書き出し済みアイコン
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub filename: &'static str,
    pub size: u32,
    /// 書き出し先の絶対または相対パス
    pub path: PathBuf,
}

/// 1回の生成処理の結果
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// 元画像の (幅, 高さ)
    pub source_dimensions: (u32, u32),
    /// 元画像が想定サイズでなかった場合 true
    pub dimension_warning: bool,
    /// サイズ表の順序どおり
    pub generated: Vec<GeneratedIcon>,
}
