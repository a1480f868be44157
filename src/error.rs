use std::io;
use std::path::PathBuf;
use image::ImageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("元アイコンが見つかりません: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("画像読み込みエラー: {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("ディレクトリ作成エラー: {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ファイル書き込みエラー: {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("PNG書き出しエラー: {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

pub type Result<T> = std::result::Result<T, IconError>;
