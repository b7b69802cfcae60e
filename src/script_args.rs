//! `--flag value` と `RATING_*` 環境変数からデモ設定を取得

use std::env;
use std::str::FromStr;

/// コマンドライン引数 `--flag value` を優先し、なければ環境変数 `env_key` を参照。
/// どちらも無い、または解釈できない場合 `default` を返す。
pub fn parse_from_args_or_env<T>(flag: &str, env_key: &str, default: T) -> T
where
    T: FromStr,
{
    parse_from_args::<T>(flag, env::args().skip(1))
        .or_else(|| env::var(env_key).ok().and_then(|v| v.parse().ok()))
        .unwrap_or(default)
}

fn parse_from_args<T>(flag: &str, args: impl IntoIterator<Item = String>) -> Option<T>
where
    T: FromStr,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == flag {
            let value = args.next()?;
            return value.parse().ok();
        }
    }
    None
}
