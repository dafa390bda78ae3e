/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand};

/// mytool — 学習用CLIツール。
#[derive(Debug, Parser)]
#[command(
    name = "mytool",
    about = "学習用CLIツール - サブコマンド形式でさまざまな処理を実行",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// 詳細な出力を表示（エラー時はスタックトレースも表示）
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 挨拶メッセージを表示する
    Hello(HelloArgs),
    /// 複数の整数を合計する
    Sum(SumArgs),
    /// チェック処理を実行（成功/失敗のシミュレーション）
    Check(CheckArgs),
}

/// Arguments for `mytool hello`.
#[derive(Debug, Parser)]
pub struct HelloArgs {
    /// 挨拶する相手の名前
    #[arg(value_name = "NAME", default_value = "world")]
    pub name: String,

    /// メッセージを大文字にする
    #[arg(long)]
    pub upper: bool,

    /// JSON形式で出力
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `mytool sum`.
#[derive(Debug, Parser)]
#[command(allow_negative_numbers = true)]
pub struct SumArgs {
    /// 合計する整数のリスト（1つ以上必須）
    // Zero args are accepted here so the empty list reaches the domain
    // layer and yields its own error message instead of a clap usage error.
    #[arg(value_name = "NUM")]
    pub numbers: Vec<i64>,

    /// JSON形式で出力
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `mytool check`.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// チェックモード: 'ok'なら成功、'fail'なら失敗
    #[arg(long, value_name = "MODE")]
    pub mode: String,
}
