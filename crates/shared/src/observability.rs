//! # Observability 基盤
//!
//! サービス共通の tracing subscriber を組み立てる。
//!
//! - `RUST_LOG` によるフィルタ（未設定時は [`default_directive`]）
//! - `LOG_FORMAT` による JSON / Pretty 出力の切り替え
//! - [`tracing_error::ErrorLayer`]（インフラ層エラーの `SpanTrace` 解決用）

/// ログ出力形式
///
/// 値が未設定または不正な場合は [`Pretty`](LogFormat::Pretty) にフォールバックする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 イベント 1 行の JSON（本番環境向け）
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// 文字列からログ形式をパースする
    ///
    /// subscriber 初期化前に呼ばれるため、不正な値の警告は stderr に直接出す。
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            other => {
                eprintln!("WARNING: unknown LOG_FORMAT={other:?}, falling back to pretty");
                Self::Pretty
            }
        }
    }

    /// 環境変数 `LOG_FORMAT` から読み取る
    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT").map_or_else(|_| Self::default(), |val| Self::parse(&val))
    }
}

/// `RUST_LOG` 未設定時のフィルタディレクティブ
///
/// 全体は `info`、`crate_prefix` で始まるターゲット（自クレート群）は `debug`。
pub fn default_directive(crate_prefix: &str) -> String {
    format!("info,{crate_prefix}=debug")
}

/// フィルタ・出力形式・出力先を指定して subscriber を組み立てる
///
/// グローバル登録は行わない。テストでは `tracing::subscriber::with_default` と
/// 組み合わせて出力を検証できる。
#[cfg(feature = "observability")]
pub fn build_subscriber<W>(
    log_format: LogFormat,
    filter: tracing_subscriber::EnvFilter,
    make_writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    use tracing_subscriber::{Layer as _, layer::SubscriberExt as _};

    let fmt_layer = match log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_writer(make_writer)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
}

/// stdout に出力する subscriber をグローバルに登録する
#[cfg(feature = "observability")]
pub fn init_tracing(log_format: LogFormat, default_directive: &str) {
    use tracing_subscriber::util::SubscriberInitExt as _;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    build_subscriber(log_format, filter, std::io::stdout).init();
}
