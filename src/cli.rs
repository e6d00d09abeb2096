use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "artic")]
#[command(about = "Art Institute of Chicago artwork catalog browser", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 1ページ分の作品一覧を表示
    Page {
        /// ページ番号（1始まり）
        #[arg(default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// テーブルではなくJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 対話式にページを移動しながら行を選択
    Browse {
        /// 開始ページ
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// 設定の表示・変更
    Config {
        /// カタログのエンドポイントURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// リクエストのタイムアウト秒数を設定（0で無効）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
